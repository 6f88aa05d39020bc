//! Error type for the simulation orchestrator.

use space_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error(
        "unrecognized decision-making strategy '{requested}' (available: {})",
        available.join(", ")
    )]
    UnrecognizedStrategy { requested: String, available: Vec<String> },

    #[error("behavior tree error: {0}")]
    Behavior(#[from] space_behavior::BehaviorError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
