//! Error type for the allocation subsystem.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AllocError {
    #[error("unrecognized greedy selection mode: {0}")]
    UnrecognizedMode(String),

    #[error("unrecognized partition initialization strategy: {0}")]
    UnrecognizedPartitionInit(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type AllocResult<T> = Result<T, AllocError>;
