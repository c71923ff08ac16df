// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for floor plan rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading wall data or rendering plan views
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("visibility error: {0}")]
    Visibility(#[from] plan_lite_geometry::Error),
}
