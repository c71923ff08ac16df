// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for visibility operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reconstructing a boundary and classifying
/// wall visibility. All of them mean the input wall data is invalid; no
/// partial result is ever produced.
#[derive(Error, Debug)]
pub enum Error {
    #[error("wall {index} has no clear short/long edge distinction (end pair {short_len}, side pair {long_len})")]
    DegenerateWall {
        index: usize,
        short_len: f64,
        long_len: f64,
    },

    #[error("wall sequence does not close: no shared end midpoint between walls {prev} and {next}")]
    OpenBoundary { prev: usize, next: usize },

    #[error("ambiguous adjacency between walls {prev} and {next}: {candidates} end midpoint pairs match within tolerance")]
    AmbiguousAdjacency {
        prev: usize,
        next: usize,
        candidates: usize,
    },

    #[error("boundary polygon is degenerate (signed area {area})")]
    DegeneratePolygon { area: f64 },

    #[error("cannot form a closed boundary from {count} walls (need at least 3)")]
    InsufficientWalls { count: usize },
}
