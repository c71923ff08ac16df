// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall end-edge midpoint extraction
//!
//! A wall is a thick rectangle: two long "side" edges and two short "end"
//! edges where the neighbouring walls attach. The polygon builder stitches
//! walls together at the end-edge midpoints, so those two midpoints are the
//! only geometry it needs from each wall.

use crate::error::{Error, Result};
use crate::types::{BoundaryWall, Point2D, Segment, VisibilityConfig};

/// The two end-edge midpoints of a wall rectangle
///
/// `a` is the midpoint of the lower-indexed corner edge of the short pair,
/// `b` the midpoint of its opposite edge, so the order is deterministic
/// with respect to corner traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallEnds {
    pub a: Point2D,
    pub b: Point2D,
}

impl WallEnds {
    /// Both midpoints as an array, `a` first
    pub fn as_array(&self) -> [Point2D; 2] {
        [self.a, self.b]
    }
}

/// Identify the short ("end") edge pair of a wall and return its midpoints.
///
/// Opposite edges of a rectangle have equal length, so the candidate pairs
/// are corner edges (0, 2) and (1, 3); the pair with the smaller mean
/// length is the end pair. Fails with [`Error::DegenerateWall`] when the
/// two pairs cannot be told apart within `wall_aspect_tol` (a square wall)
/// or when an end edge has zero length.
pub fn wall_end_midpoints(wall: &BoundaryWall, config: &VisibilityConfig) -> Result<WallEnds> {
    let edge_len = |k: usize| -> f64 {
        let (p, q) = wall.corner_edge(k);
        p.distance_to(&q)
    };

    let pair_02 = (edge_len(0) + edge_len(2)) / 2.0;
    let pair_13 = (edge_len(1) + edge_len(3)) / 2.0;

    let (first_short, short_len, long_len) = if pair_02 < pair_13 {
        (0, pair_02, pair_13)
    } else {
        (1, pair_13, pair_02)
    };

    if long_len - short_len <= config.wall_aspect_tol * long_len || short_len == 0.0 {
        return Err(Error::DegenerateWall {
            index: wall.index,
            short_len,
            long_len,
        });
    }

    let (a0, a1) = wall.corner_edge(first_short);
    let (b0, b1) = wall.corner_edge(first_short + 2);
    Ok(WallEnds {
        a: a0.midpoint(&a1),
        b: b0.midpoint(&b1),
    })
}

/// Extract the wall's centerline: end midpoint to opposite end midpoint
pub fn centerline(wall: &BoundaryWall, config: &VisibilityConfig) -> Result<Segment> {
    let ends = wall_end_midpoints(wall, config)?;
    Ok(Segment::new(ends.a, ends.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wall(corners: [(f64, f64); 4]) -> BoundaryWall {
        BoundaryWall::new(corners.map(|(x, y)| Point2D::new(x, y)), 0)
    }

    #[test]
    fn test_horizontal_wall_ends() {
        // 100 long, 10 thick: ends are the left and right short edges
        let w = wall([(0.0, 0.0), (100.0, 0.0), (100.0, 10.0), (0.0, 10.0)]);
        let ends = wall_end_midpoints(&w, &VisibilityConfig::default()).unwrap();
        assert_eq!(ends.a, Point2D::new(100.0, 5.0));
        assert_eq!(ends.b, Point2D::new(0.0, 5.0));
    }

    #[test]
    fn test_vertical_wall_ends() {
        let w = wall([(0.0, 0.0), (10.0, 0.0), (10.0, 100.0), (0.0, 100.0)]);
        let ends = wall_end_midpoints(&w, &VisibilityConfig::default()).unwrap();
        assert_eq!(ends.a, Point2D::new(5.0, 0.0));
        assert_eq!(ends.b, Point2D::new(5.0, 100.0));
    }

    #[test]
    fn test_rotated_wall_ends() {
        // 45-degree wall along the diagonal, thickness sqrt(2)
        let w = wall([(0.0, 1.0), (1.0, 0.0), (11.0, 10.0), (10.0, 11.0)]);
        let ends = wall_end_midpoints(&w, &VisibilityConfig::default()).unwrap();
        assert_relative_eq!(ends.a.x, 0.5);
        assert_relative_eq!(ends.a.y, 0.5);
        assert_relative_eq!(ends.b.x, 10.5);
        assert_relative_eq!(ends.b.y, 10.5);
    }

    #[test]
    fn test_square_wall_is_degenerate() {
        let w = wall([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let err = wall_end_midpoints(&w, &VisibilityConfig::default()).unwrap_err();
        assert!(matches!(err, Error::DegenerateWall { index: 0, .. }));
    }

    #[test]
    fn test_collapsed_wall_is_degenerate() {
        // Zero-length end edges: corners pairwise coincident
        let w = wall([(0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 0.0)]);
        let err = wall_end_midpoints(&w, &VisibilityConfig::default()).unwrap_err();
        assert!(matches!(err, Error::DegenerateWall { .. }));
    }

    #[test]
    fn test_centerline_spans_the_long_axis() {
        let w = wall([(0.0, 0.0), (100.0, 0.0), (100.0, 10.0), (0.0, 10.0)]);
        let seg = centerline(&w, &VisibilityConfig::default()).unwrap();
        assert_relative_eq!(seg.length(), 100.0);
        // Centerline of a horizontal wall is horizontal
        assert_relative_eq!(seg.direction().y, 0.0);
    }
}
