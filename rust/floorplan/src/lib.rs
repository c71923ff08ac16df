// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan views with wall visibility highlighting
//!
//! This crate is the rendering surface around the visibility engine:
//! 1. Loading wall rings from the surrounding system's JSON format
//! 2. Fitting model coordinates into a padded SVG viewport
//! 3. Rendering one plan view per orthographic direction, with the walls
//!    facing that direction highlighted
//!
//! # Usage
//!
//! ```rust
//! use plan_lite_floorplan::{render_plan_views, FloorPlanSvg};
//! use plan_lite_geometry::{walls_from_outline, Point2D, VisibilityConfig};
//!
//! let outline = [
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(10.0, 0.0),
//!     Point2D::new(10.0, 10.0),
//!     Point2D::new(0.0, 10.0),
//! ];
//! let walls = walls_from_outline(&outline, 0.4);
//!
//! let views = render_plan_views(
//!     &walls,
//!     &FloorPlanSvg::default(),
//!     &VisibilityConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(views.len(), 4);
//! ```

pub mod error;
pub mod input;
pub mod svg;
pub mod transform;

pub use error::{Error, Result};
pub use input::{load_walls, WallData};
pub use svg::FloorPlanSvg;
pub use transform::normalize_to_viewport;

use plan_lite_geometry::{analyze_walls, BoundaryWall, ViewDirection, VisibilityConfig};

/// Render all four plan views for a wall ring.
///
/// Runs the visibility pipeline once and renders one SVG per direction,
/// highlighting the walls visible from that direction.
pub fn render_plan_views(
    walls: &[BoundaryWall],
    style: &FloorPlanSvg,
    config: &VisibilityConfig,
) -> Result<Vec<(ViewDirection, String)>> {
    let report = analyze_walls(walls, config)?;

    Ok(ViewDirection::ALL
        .into_iter()
        .map(|direction| (direction, style.generate(walls, report.for_direction(direction))))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_lite_geometry::{walls_from_outline, Point2D};

    #[test]
    fn test_render_plan_views_highlights_each_direction_once() {
        let outline = [
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ];
        let walls = walls_from_outline(&outline, 0.4);
        let style = FloorPlanSvg::default();
        let views = render_plan_views(&walls, &style, &VisibilityConfig::default()).unwrap();

        assert_eq!(views.len(), 4);
        for (direction, svg) in &views {
            // Exactly one of the four square walls is highlighted per view
            assert_eq!(
                svg.matches(style.highlight_color.as_str()).count(),
                2,
                "{direction:?}"
            );
        }
    }

    #[test]
    fn test_render_plan_views_propagates_geometry_errors() {
        let outline = [
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ];
        let walls = walls_from_outline(&outline, 0.4);
        let result = render_plan_views(
            &walls[..2],
            &FloorPlanSvg::default(),
            &VisibilityConfig::default(),
        );
        assert!(matches!(result, Err(Error::Visibility(_))));
    }
}
