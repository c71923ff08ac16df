// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backface-culling visibility classification
//!
//! A wall faces a viewer when its outward normal opposes the direction's
//! view vector. Walls that are edge-on to a direction (dot product near
//! zero) are invisible from that direction.

use nalgebra::Vector2;
use rustc_hash::FxHashSet;

use crate::outline::BoundaryPolygon;
use crate::types::{Point2D, ViewDirection, VisibilityConfig, VisibilityReport};

/// Unit outward normal of the directed edge `start -> end`.
///
/// The polygon is counter-clockwise, so the interior lies to the left of
/// every directed edge; rotating the edge direction 90 degrees clockwise
/// therefore points outward.
pub fn outward_normal(start: Point2D, end: Point2D) -> Vector2<f64> {
    let e = end.to_nalgebra() - start.to_nalgebra();
    Vector2::new(e.y, -e.x).normalize()
}

/// Wall indices visible from a single view direction
pub fn visible_walls(
    polygon: &BoundaryPolygon,
    direction: ViewDirection,
    config: &VisibilityConfig,
) -> FxHashSet<usize> {
    let view = direction.view_vector();
    let mut visible = FxHashSet::default();
    for i in 0..polygon.len() {
        let (start, end) = polygon.edge(i);
        if outward_normal(start, end).dot(&view) < -config.facing_tol {
            visible.insert(polygon.wall_index(i));
        }
    }
    visible
}

/// All four directions in one pass over the edges
pub fn visibility_report(polygon: &BoundaryPolygon, config: &VisibilityConfig) -> VisibilityReport {
    let mut report = VisibilityReport::default();
    for i in 0..polygon.len() {
        let (start, end) = polygon.edge(i);
        let normal = outward_normal(start, end);
        let wall = polygon.wall_index(i);
        for direction in ViewDirection::ALL {
            if normal.dot(&direction.view_vector()) < -config.facing_tol {
                report.for_direction_mut(direction).insert(wall);
            }
        }
    }
    report
}
