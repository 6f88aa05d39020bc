//! Error type for the task subsystem.

use thiserror::Error;

use space_core::TaskId;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
