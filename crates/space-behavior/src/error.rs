//! Error type for behaviour-tree loading (spec.md §7 "Unknown behaviour node").

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior tree XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("behavior tree XML has no <BehaviorTree> root element")]
    MissingRoot,

    #[error("<BehaviorTree> root must have exactly one child, found {0}")]
    RootChildCount(usize),

    #[error("unknown behavior node type: {0}")]
    UnknownNode(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
