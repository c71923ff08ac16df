// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan-Lite Wall Visibility
//!
//! Determines which boundary walls of a 2D floor plan are seen from each of
//! the four orthographic view directions (top, bottom, left, right):
//! 1. Extract each wall rectangle's end-edge midpoints
//! 2. Stitch neighbouring midpoints into a closed boundary polygon
//! 3. Normalize the winding to counter-clockwise
//! 4. Backface-cull every edge against the four view vectors
//!
//! # Usage
//!
//! ```rust
//! use plan_lite_geometry::{
//!     analyze_walls, walls_from_outline, Point2D, ViewDirection, VisibilityConfig,
//! };
//!
//! // A square building, 0.4 units of wall thickness
//! let outline = [
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(10.0, 0.0),
//!     Point2D::new(10.0, 10.0),
//!     Point2D::new(0.0, 10.0),
//! ];
//! let walls = walls_from_outline(&outline, 0.4);
//!
//! let report = analyze_walls(&walls, &VisibilityConfig::default()).unwrap();
//! // The north wall (index 2) is the one seen from above
//! assert!(report.for_direction(ViewDirection::Top).contains(&2));
//! ```

pub mod error;
pub mod outline;
pub mod types;
pub mod visibility;
pub mod wall_ends;

pub use error::{Error, Result};
pub use outline::{signed_area, walls_from_outline, BoundaryPolygon};
pub use types::{
    BoundaryWall, Point2D, Segment, ViewDirection, VisibilityConfig, VisibilityReport,
};
pub use visibility::{outward_normal, visibility_report, visible_walls};
pub use wall_ends::{centerline, wall_end_midpoints, WallEnds};

/// High-level pipeline: ordered wall ring in, per-direction visibility out.
///
/// Runs all four stages and returns the combined report; any invalid input
/// surfaces as an [`Error`] with no partial result.
pub fn analyze_walls(
    walls: &[BoundaryWall],
    config: &VisibilityConfig,
) -> Result<VisibilityReport> {
    // Steps 1-3: end midpoints, stitching, winding normalization
    let polygon = BoundaryPolygon::from_walls(walls, config)?;

    // Step 4: classify every edge against the four view vectors
    Ok(visibility::visibility_report(&polygon, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_walls_rejects_short_input() {
        let outline = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(0.0, 4.0),
        ];
        let walls = walls_from_outline(&outline, 0.2);
        let err = analyze_walls(&walls[..2], &VisibilityConfig::default()).unwrap_err();
        assert!(matches!(err, Error::InsufficientWalls { count: 2 }));
    }

    #[test]
    fn test_analyze_walls_square_report() {
        let outline = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
            Point2D::new(0.0, 4.0),
        ];
        let walls = walls_from_outline(&outline, 0.2);
        let report = analyze_walls(&walls, &VisibilityConfig::default()).unwrap();
        for (_, visible) in report.iter() {
            assert_eq!(visible.len(), 1);
        }
    }
}
