// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall-ring JSON input
//!
//! The surrounding document system supplies walls as a JSON object with one
//! entry per wall, four `[x, y]` corners each, listed in boundary traversal
//! order:
//!
//! ```json
//! { "walls": [ [[0,0],[10,0],[10,1],[0,1]], ... ] }
//! ```

use plan_lite_geometry::{BoundaryWall, Point2D};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Raw wall-ring data as supplied by the surrounding system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallData {
    /// One entry per wall: exactly four `[x, y]` corner pairs
    pub walls: Vec<[[f64; 2]; 4]>,
}

impl WallData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert to boundary walls with positional indices
    pub fn to_walls(&self) -> Vec<BoundaryWall> {
        self.walls
            .iter()
            .enumerate()
            .map(|(index, ring)| {
                let corners = ring.map(|[x, y]| Point2D::new(x, y));
                BoundaryWall::new(corners, index)
            })
            .collect()
    }
}

/// Load a wall ring from a JSON file
pub fn load_walls(path: &Path) -> Result<Vec<BoundaryWall>> {
    let json = fs::read_to_string(path)?;
    Ok(WallData::from_json(&json)?.to_walls())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wall_ring() {
        let json = r#"{
            "walls": [
                [[0.0, 0.0], [10.0, 0.0], [10.0, 1.0], [0.0, 1.0]],
                [[10.0, 0.0], [10.0, 10.0], [9.0, 10.0], [9.0, 0.0]]
            ]
        }"#;
        let data = WallData::from_json(json).unwrap();
        let walls = data.to_walls();

        assert_eq!(walls.len(), 2);
        assert_eq!(walls[0].index, 0);
        assert_eq!(walls[1].index, 1);
        assert_eq!(walls[1].corners[0], Point2D::new(10.0, 0.0));
    }

    #[test]
    fn test_reject_wrong_corner_count() {
        let json = r#"{ "walls": [ [[0.0, 0.0], [10.0, 0.0], [10.0, 1.0]] ] }"#;
        assert!(WallData::from_json(json).is_err());
    }
}
