//! `GraphError`: unified error type for lattice-graph public APIs.
//!
//! Every construction entry point returns `Result<_, GraphError>`; no partial
//! topology is ever handed back. Traversal and analysis operations on a
//! successfully constructed topology are total and do not use this type.

use thiserror::Error;

/// Unified error type for topology construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Malformed builder parameters: bad extents, out-of-range edge
    /// endpoints, self-loops, color/edge length mismatches, or invalid
    /// symmetry permutations.
    #[error("invalid topology configuration: {0}")]
    InvalidConfiguration(String),
    /// The construction descriptor names a mode no builder recognizes.
    #[error("unknown topology mode: `{0}`")]
    UnknownTopologyMode(String),
}

impl GraphError {
    /// Shorthand for a [`GraphError::InvalidConfiguration`] with a formatted message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        GraphError::InvalidConfiguration(msg.into())
    }
}
