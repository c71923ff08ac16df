// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewport fitting for wall rings
//!
//! Model-space wall coordinates are scaled uniformly and translated so the
//! whole ring fits inside a padded target viewport before rendering.

use plan_lite_geometry::{BoundaryWall, Point2D};

/// Scale and translate wall coordinates to fit the target viewport.
///
/// Aspect ratio is preserved (uniform scale); walls with no extent along
/// either axis are returned unchanged.
pub fn normalize_to_viewport(
    walls: &[BoundaryWall],
    target_width: f64,
    target_height: f64,
    padding: f64,
) -> Vec<BoundaryWall> {
    if walls.is_empty() {
        return Vec::new();
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for wall in walls {
        for p in &wall.corners {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
    }

    let data_width = max_x - min_x;
    let data_height = max_y - min_y;
    if data_width == 0.0 || data_height == 0.0 {
        return walls.to_vec();
    }

    let available_width = target_width - 2.0 * padding;
    let available_height = target_height - 2.0 * padding;
    let scale = (available_width / data_width).min(available_height / data_height);

    walls
        .iter()
        .map(|wall| {
            let corners = wall.corners.map(|p| {
                Point2D::new(
                    padding + (p.x - min_x) * scale,
                    padding + (p.y - min_y) * scale,
                )
            });
            BoundaryWall::new(corners, wall.index)
        })
        .collect()
}
