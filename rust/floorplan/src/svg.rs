// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan SVG generation
//!
//! Renders one polygon per wall; walls in the visible set for the chosen
//! view direction get the highlight color, everything else the default.

use std::fmt::Write;

use plan_lite_geometry::{outward_normal, BoundaryPolygon, BoundaryWall, VisibilityConfig};
use rustc_hash::FxHashSet;

use crate::error::Result;
use crate::transform::normalize_to_viewport;

/// Floor plan SVG generator
///
/// Walls are thin, so strokes reuse the fill color to keep them readable
/// at small sizes.
#[derive(Debug, Clone)]
pub struct FloorPlanSvg {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Fill for walls in the visible set
    pub highlight_color: String,
    /// Fill for all other walls
    pub default_color: String,
}

impl Default for FloorPlanSvg {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 200.0,
            padding: 10.0,
            highlight_color: "#61A5D8".to_string(),
            default_color: "#000000".to_string(),
        }
    }
}

impl FloorPlanSvg {
    /// Render the wall ring, highlighting the walls in `visible`
    pub fn generate(&self, walls: &[BoundaryWall], visible: &FxHashSet<usize>) -> String {
        if walls.is_empty() {
            return self.empty_svg();
        }

        let fitted = normalize_to_viewport(walls, self.width, self.height, self.padding);

        let mut polygons = String::new();
        for wall in &fitted {
            let fill = if visible.contains(&wall.index) {
                &self.highlight_color
            } else {
                &self.default_color
            };
            let _ = write!(
                polygons,
                r##"<polygon points="{}" fill="{fill}" stroke="{fill}" stroke-width="1.5"/>"##,
                corner_points(wall),
            );
        }

        self.document(&polygons)
    }

    /// Render the boundary polygon with outward normal ticks on every edge.
    ///
    /// Diagnostic view for checking winding and normal orientation against
    /// a wall data set.
    pub fn generate_normals_debug(
        &self,
        walls: &[BoundaryWall],
        config: &VisibilityConfig,
    ) -> Result<String> {
        if walls.is_empty() {
            return Ok(self.empty_svg());
        }

        let fitted = normalize_to_viewport(walls, self.width, self.height, self.padding);
        let polygon = BoundaryPolygon::from_walls(&fitted, config)?;
        let tick_len = (self.width.min(self.height) / 20.0).max(2.0);

        let mut shapes = String::new();
        for wall in &fitted {
            let _ = write!(
                shapes,
                r##"<polygon points="{}" fill="none" stroke="#888888" stroke-width="0.5"/>"##,
                corner_points(wall),
            );
        }
        for i in 0..polygon.len() {
            let (start, end) = polygon.edge(i);
            let mid = start.midpoint(&end);
            let normal = outward_normal(start, end);
            let _ = write!(
                shapes,
                r##"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#D0342C" stroke-width="1"/>"##,
                mid.x,
                mid.y,
                mid.x + normal.x * tick_len,
                mid.y + normal.y * tick_len,
            );
            let _ = write!(
                shapes,
                r##"<text x="{:.2}" y="{:.2}" font-size="6" fill="#333333">{}</text>"##,
                mid.x,
                mid.y,
                polygon.wall_index(i),
            );
        }

        Ok(self.document(&shapes))
    }

    fn document(&self, body: &str) -> String {
        format!(
            concat!(
                r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg" "#,
                r#"preserveAspectRatio="xMidYMid meet">{body}</svg>"#
            ),
            w = self.width,
            h = self.height,
            body = body,
        )
    }

    fn empty_svg(&self) -> String {
        format!(
            concat!(
                r##"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"##,
                r##"<text x="50%" y="50%" text-anchor="middle" fill="#999">"##,
                "No floor plan data</text></svg>"
            ),
            w = self.width,
            h = self.height,
        )
    }
}

fn corner_points(wall: &BoundaryWall) -> String {
    wall.corners
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use plan_lite_geometry::{walls_from_outline, Point2D};

    fn square_walls() -> Vec<BoundaryWall> {
        let outline = [
            Point2D::new(0.0, 0.0),
            Point2D::new(10.0, 0.0),
            Point2D::new(10.0, 10.0),
            Point2D::new(0.0, 10.0),
        ];
        walls_from_outline(&outline, 0.5)
    }

    #[test]
    fn test_generate_highlights_visible_walls() {
        let walls = square_walls();
        let visible: FxHashSet<usize> = [2].into_iter().collect();
        let svg = FloorPlanSvg::default().generate(&walls, &visible);

        assert_eq!(svg.matches("<polygon").count(), 4);
        // One highlighted wall, three default
        assert_eq!(svg.matches("#61A5D8").count(), 2); // fill + stroke
        assert_eq!(svg.matches("#000000").count(), 6);
    }

    #[test]
    fn test_generate_empty_placeholder() {
        let svg = FloorPlanSvg::default().generate(&[], &FxHashSet::default());
        assert!(svg.contains("No floor plan data"));
    }

    #[test]
    fn test_normals_debug_draws_one_tick_per_wall() {
        let walls = square_walls();
        let svg = FloorPlanSvg::default()
            .generate_normals_debug(&walls, &VisibilityConfig::default())
            .unwrap();
        assert_eq!(svg.matches("<line").count(), 4);
        assert_eq!(svg.matches("<polygon").count(), 4);
    }
}
