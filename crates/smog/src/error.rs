//! Error types for Smog layout operations.
//!
//! Only graph construction can fail: the physics itself never raises, it
//! handles degenerate geometry numerically.

use std::fmt;

use thiserror::Error;

/// Which end of an edge failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// The main error type for Smog operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SmogError {
    /// An edge names a node that was not part of the node set.
    #[error("edge {edge} references an unknown {endpoint} node")]
    UnknownNode { edge: usize, endpoint: Endpoint },

    /// The same node was given twice.
    #[error("node {index} duplicates an earlier node")]
    DuplicateNode { index: usize },
}
