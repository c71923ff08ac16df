// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for wall visibility analysis

use nalgebra::{Point2, Vector2};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn midpoint(&self, other: &Point2D) -> Point2D {
        Point2D::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A thick wall rectangle on a building's boundary ring
///
/// The 4 corners form a (possibly rotated) rectangle in traversal order:
/// corner edge k runs from `corners[k]` to `corners[(k + 1) % 4]`.
/// `index` is the wall's stable position in the building's wall sequence;
/// visibility results refer to walls by this index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryWall {
    pub corners: [Point2D; 4],
    pub index: usize,
}

impl BoundaryWall {
    pub fn new(corners: [Point2D; 4], index: usize) -> Self {
        Self { corners, index }
    }

    /// Corner edge k as a (start, end) pair
    pub fn corner_edge(&self, k: usize) -> (Point2D, Point2D) {
        (self.corners[k % 4], self.corners[(k + 1) % 4])
    }

    /// Center of the wall rectangle (average of its corners)
    pub fn center(&self) -> Point2D {
        let (mut x, mut y) = (0.0, 0.0);
        for p in &self.corners {
            x += p.x;
            y += p.y;
        }
        Point2D::new(x / 4.0, y / 4.0)
    }
}

/// Wall centerline: the segment connecting the two end-edge midpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Direction vector from start to end (not normalized)
    pub fn direction(&self) -> Vector2<f64> {
        self.end.to_nalgebra() - self.start.to_nalgebra()
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> Point2D {
        self.start.midpoint(&self.end)
    }
}

/// Orthographic viewing directions for floor plan views
///
/// Coordinates are mathematical (+y up): `Top` is the view from above the
/// plan looking down, `Left` the view from the left side looking right.
/// Floor-plan tooling sometimes labels Top/Bottom as back/front of the
/// building; the geometry is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewDirection {
    Top,
    Bottom,
    Left,
    Right,
}

impl ViewDirection {
    /// All four directions, in report order
    pub const ALL: [ViewDirection; 4] = [
        ViewDirection::Top,
        ViewDirection::Bottom,
        ViewDirection::Left,
        ViewDirection::Right,
    ];

    /// Unit vector pointing from the viewer toward the scene
    ///
    /// Fixed table: Top looks down (0, -1), Bottom looks up (0, 1),
    /// Left looks right (1, 0), Right looks left (-1, 0).
    pub fn view_vector(self) -> Vector2<f64> {
        match self {
            ViewDirection::Top => Vector2::new(0.0, -1.0),
            ViewDirection::Bottom => Vector2::new(0.0, 1.0),
            ViewDirection::Left => Vector2::new(1.0, 0.0),
            ViewDirection::Right => Vector2::new(-1.0, 0.0),
        }
    }

    /// The direction whose view vector is the exact negative of this one
    pub fn opposite(self) -> ViewDirection {
        match self {
            ViewDirection::Top => ViewDirection::Bottom,
            ViewDirection::Bottom => ViewDirection::Top,
            ViewDirection::Left => ViewDirection::Right,
            ViewDirection::Right => ViewDirection::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewDirection::Top => "top",
            ViewDirection::Bottom => "bottom",
            ViewDirection::Left => "left",
            ViewDirection::Right => "right",
        }
    }
}

/// Configuration for the visibility pipeline tolerances
///
/// The shared-vertex tolerance and the facing threshold are deliberately
/// separate knobs: the first is in model units, the second is a unitless
/// dot-product margin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityConfig {
    /// Maximum distance between two end midpoints treated as one shared vertex
    pub midpoint_match_tol: f64,
    /// Dot-product margin below which a wall counts as facing the viewer
    pub facing_tol: f64,
    /// Relative margin required between a wall's short and long edge pairs
    pub wall_aspect_tol: f64,
    /// Absolute signed-area threshold below which the outline is degenerate
    pub degenerate_area_tol: f64,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            midpoint_match_tol: 1e-6,
            facing_tol: 1e-6,
            wall_aspect_tol: 1e-6,
            degenerate_area_tol: 1e-9,
        }
    }
}

/// Wall indices visible from each of the four view directions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisibilityReport {
    pub top: FxHashSet<usize>,
    pub bottom: FxHashSet<usize>,
    pub left: FxHashSet<usize>,
    pub right: FxHashSet<usize>,
}

impl VisibilityReport {
    pub fn for_direction(&self, direction: ViewDirection) -> &FxHashSet<usize> {
        match direction {
            ViewDirection::Top => &self.top,
            ViewDirection::Bottom => &self.bottom,
            ViewDirection::Left => &self.left,
            ViewDirection::Right => &self.right,
        }
    }

    pub(crate) fn for_direction_mut(&mut self, direction: ViewDirection) -> &mut FxHashSet<usize> {
        match direction {
            ViewDirection::Top => &mut self.top,
            ViewDirection::Bottom => &mut self.bottom,
            ViewDirection::Left => &mut self.left,
            ViewDirection::Right => &mut self.right,
        }
    }

    /// Iterate the four (direction, visible set) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (ViewDirection, &FxHashSet<usize>)> + '_ {
        ViewDirection::ALL
            .into_iter()
            .map(move |d| (d, self.for_direction(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_point_midpoint() {
        let a = Point2D::new(0.0, 2.0);
        let b = Point2D::new(4.0, 0.0);
        assert_eq!(a.midpoint(&b), Point2D::new(2.0, 1.0));
    }

    #[test]
    fn test_view_vectors_are_unit_and_opposed() {
        for direction in ViewDirection::ALL {
            let v = direction.view_vector();
            assert_relative_eq!(v.norm(), 1.0);
            let w = direction.opposite().view_vector();
            assert_relative_eq!(v.dot(&w), -1.0);
        }
    }

    #[test]
    fn test_wall_center() {
        let wall = BoundaryWall::new(
            [
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(4.0, 2.0),
                Point2D::new(0.0, 2.0),
            ],
            0,
        );
        assert_eq!(wall.center(), Point2D::new(2.0, 1.0));
    }

    #[test]
    fn test_segment_direction_and_length() {
        let seg = Segment::new(Point2D::new(1.0, 1.0), Point2D::new(4.0, 5.0));
        assert_relative_eq!(seg.length(), 5.0);
        assert_relative_eq!(seg.direction().x, 3.0);
        assert_relative_eq!(seg.direction().y, 4.0);
    }

    #[test]
    fn test_config_defaults() {
        let config = VisibilityConfig::default();
        assert_eq!(config.midpoint_match_tol, 1e-6);
        assert_eq!(config.facing_tol, 1e-6);
    }
}
