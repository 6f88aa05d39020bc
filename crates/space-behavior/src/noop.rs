//! A placeholder [`BehaviorActions`] that always succeeds — useful in tests
//! that only want to exercise [`crate::tree::evaluate`]'s control flow.

use crate::tree::{BehaviorActions, Status};

pub struct NoopActions;

impl BehaviorActions for NoopActions {
    fn local_sensing(&mut self) -> Status {
        Status::Success
    }
    fn decision_making(&mut self) -> Status {
        Status::Success
    }
    fn task_executing(&mut self) -> Status {
        Status::Success
    }
    fn exploration(&mut self) -> Status {
        Status::Running
    }
}
