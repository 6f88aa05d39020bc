//! Framework error type.
//!
//! Sub-crates define their own error enums for their own seams and convert
//! them into (or compose them from) `CoreError` via `#[from]`, following the
//! same pattern throughout `space-*`.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `space-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("could not place {requested} non-overlapping points, only placed {placed}")]
    PlacementExhausted { placed: usize, requested: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `space-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
