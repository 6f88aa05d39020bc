//! The generic Sequence/Fallback/Action evaluator (spec.md §4.4).

/// Outcome of evaluating one behaviour-tree node this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Running,
}

/// One of the four action callbacks a leaf node can be wired to
/// (spec.md §4.4, §6 "behaviour tree description").
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    LocalSensing,
    DecisionMaking,
    TaskExecuting,
    Exploration,
}

/// A node in the behaviour tree. `Sequence` and `Fallback` hold their
/// children in evaluation order; `Action` names one of the four callbacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Sequence(Vec<Node>),
    Fallback(Vec<Node>),
    Action(ActionKind),
}

/// The four action callbacks, invoked by [`evaluate`] as it reaches each
/// `Action` leaf. One implementor is constructed per agent per tick, since
/// its methods need mutable access to that agent's sense/decide/act state
/// (`space-sim` provides the real implementation; see
/// [`crate::noop::NoopActions`] for a placeholder).
pub trait BehaviorActions {
    fn local_sensing(&mut self) -> Status;
    fn decision_making(&mut self) -> Status;
    fn task_executing(&mut self) -> Status;
    fn exploration(&mut self) -> Status;
}

/// Evaluate `node`, dispatching `Action` leaves to `actions`.
///
/// `RUNNING` returned by a child is treated as "continue to the next
/// sibling", not "propagate RUNNING immediately" — this is the observed
/// (and intentionally preserved) semantics of the source simulator's
/// `SequenceNode`/`FallbackNode` (spec.md §4.4, §9): a `Sequence` or
/// `Fallback` whose last child returns `RUNNING` still reports `SUCCESS` (or
/// `FAILURE`, for `Fallback`) to its own parent once the loop runs out of
/// children — `RUNNING` only escapes a subtree when a bare `Action` leaf
/// *is* the node being evaluated.
pub fn evaluate(node: &Node, actions: &mut dyn BehaviorActions) -> Status {
    match node {
        Node::Sequence(children) => {
            for child in children {
                let status = evaluate(child, actions);
                if status == Status::Running {
                    continue;
                }
                if status != Status::Success {
                    return status;
                }
            }
            Status::Success
        }
        Node::Fallback(children) => {
            for child in children {
                let status = evaluate(child, actions);
                if status == Status::Running {
                    continue;
                }
                if status != Status::Failure {
                    return status;
                }
            }
            Status::Failure
        }
        Node::Action(kind) => match kind {
            ActionKind::LocalSensing => actions.local_sensing(),
            ActionKind::DecisionMaking => actions.decision_making(),
            ActionKind::TaskExecuting => actions.task_executing(),
            ActionKind::Exploration => actions.exploration(),
        },
    }
}
