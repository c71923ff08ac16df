// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Boundary polygon reconstruction from a wall-rectangle ring
//!
//! Stitches each wall's end midpoints to its neighbours', then normalizes
//! the winding to counter-clockwise while keeping every edge associated
//! with the wall it covers.

use nalgebra::Vector2;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::types::{BoundaryWall, Point2D, VisibilityConfig};
use crate::wall_ends::{wall_end_midpoints, WallEnds};

/// Closed boundary polygon with exactly one vertex per wall
///
/// Invariants:
/// - counter-clockwise winding (signed area strictly positive)
/// - directed edge i (vertex i -> vertex i+1, circular) covers the wall
///   whose index is `wall_index(i)`
#[derive(Debug, Clone)]
pub struct BoundaryPolygon {
    vertices: Vec<Point2D>,
    wall_indices: Vec<usize>,
    area: f64,
}

impl BoundaryPolygon {
    /// Reconstruct the boundary polygon from an ordered wall ring.
    ///
    /// `walls[i]` and `walls[(i + 1) % n]` must share one end midpoint
    /// within `midpoint_match_tol`; the shared (averaged) midpoint becomes
    /// a polygon vertex. The chain must close through the wrap-around pair.
    pub fn from_walls(walls: &[BoundaryWall], config: &VisibilityConfig) -> Result<Self> {
        if walls.len() < 3 {
            return Err(Error::InsufficientWalls {
                count: walls.len(),
            });
        }

        let n = walls.len();

        // Step 1: end midpoints per wall
        let ends: Vec<WallEnds> = walls
            .iter()
            .map(|w| wall_end_midpoints(w, config))
            .collect::<Result<_>>()?;

        // Step 2: stitch. vertex[i] is the midpoint shared by wall[i-1]
        // and wall[i], so edge i (vertex i -> vertex i+1) spans wall[i].
        let mut vertices = Vec::with_capacity(n);
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let mut matched: SmallVec<[(Point2D, Point2D); 2]> = SmallVec::new();
            for pa in ends[prev].as_array() {
                for pb in ends[i].as_array() {
                    if pa.distance_to(&pb) <= config.midpoint_match_tol {
                        matched.push((pa, pb));
                    }
                }
            }
            match matched.as_slice() {
                [] => {
                    return Err(Error::OpenBoundary {
                        prev: walls[prev].index,
                        next: walls[i].index,
                    })
                }
                [(pa, pb)] => vertices.push(pa.midpoint(pb)),
                _ => {
                    return Err(Error::AmbiguousAdjacency {
                        prev: walls[prev].index,
                        next: walls[i].index,
                        candidates: matched.len(),
                    })
                }
            }
        }

        // Step 3: winding normalization
        let area = signed_area(&vertices);
        if area.abs() <= config.degenerate_area_tol {
            return Err(Error::DegeneratePolygon { area });
        }

        // A collapsed edge has no usable normal; treat it as the same
        // degenerate-input family as the area check.
        for i in 0..n {
            if vertices[i].distance_to(&vertices[(i + 1) % n]) <= config.midpoint_match_tol {
                return Err(Error::DegeneratePolygon { area });
            }
        }

        let mut vertices = vertices;
        let mut wall_indices: Vec<usize> = walls.iter().map(|w| w.index).collect();
        let mut area = area;
        if area < 0.0 {
            // Reversing the ring flips every edge: edge j of the reversed
            // ring retraces the edge formerly at position (n - 2 - j) mod n,
            // so the edge-to-wall table must be remapped along with the
            // vertex order.
            vertices.reverse();
            let old = wall_indices.clone();
            for (j, slot) in wall_indices.iter_mut().enumerate() {
                *slot = old[(2 * n - 2 - j) % n];
            }
            area = -area;
        }

        Ok(Self {
            vertices,
            wall_indices,
            area,
        })
    }

    /// Number of vertices (= number of walls)
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, i: usize) -> Point2D {
        self.vertices[i]
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Directed edge i: vertex i -> vertex (i + 1) % n
    pub fn edge(&self, i: usize) -> (Point2D, Point2D) {
        (
            self.vertices[i],
            self.vertices[(i + 1) % self.vertices.len()],
        )
    }

    /// Index of the wall covered by directed edge i
    pub fn wall_index(&self, i: usize) -> usize {
        self.wall_indices[i]
    }

    /// Shoelace signed area; strictly positive after construction
    pub fn signed_area(&self) -> f64 {
        self.area
    }
}

/// Shoelace signed area of a closed vertex ring
pub fn signed_area(vertices: &[Point2D]) -> f64 {
    let n = vertices.len();
    let mut acc = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        acc += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    acc / 2.0
}

/// Build a ring of wall rectangles whose end midpoints sit exactly on the
/// outline vertices.
///
/// Wall i is centered on the outline segment `outline[i] -> outline[i+1]`
/// with the given thickness, so adjacent walls share their end midpoints
/// exactly. Every segment must be longer than `thickness` and non-zero.
pub fn walls_from_outline(outline: &[Point2D], thickness: f64) -> Vec<BoundaryWall> {
    let n = outline.len();
    outline
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = outline[(i + 1) % n];
            let d = Vector2::new(end.x - start.x, end.y - start.y).normalize();
            let half = Vector2::new(d.y, -d.x) * (thickness / 2.0);
            let corners = [
                Point2D::new(start.x + half.x, start.y + half.y),
                Point2D::new(end.x + half.x, end.y + half.y),
                Point2D::new(end.x - half.x, end.y - half.y),
                Point2D::new(start.x - half.x, start.y - half.y),
            ];
            BoundaryWall::new(corners, i)
        })
        .collect()
}
