//! The `Task` entity: a fixed point in the operating area carrying a scalar
//! workload that agents reduce by working it down to zero.

use space_core::{TaskId, Vec2};

/// A unit of work sitting at a fixed location in the operating area.
///
/// `radius` is not a free parameter — it is derived from `amount` at
/// generation time (`max(1.0, amount / task_visualisation_factor)`, see
/// [`crate::generator`]) so that larger tasks present a larger arrival
/// threshold, the same way the original simulator ties a task's on-screen
/// size to its remaining work.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub task_id: TaskId,
    pub position: Vec2,
    pub radius: f64,
    /// Remaining workload. Reaches (or passes below) zero when the task is
    /// fully worked down.
    pub amount: f64,
    pub completed: bool,
}

impl Task {
    pub fn new(task_id: TaskId, position: Vec2, radius: f64, amount: f64) -> Self {
        Self {
            task_id,
            position,
            radius,
            amount,
            completed: false,
        }
    }

    /// Subtract `amount` of work from the task's remaining workload.
    ///
    /// Once `self.amount` drops to or below zero the task latches
    /// `completed = true`. The subtraction is idempotent with respect to the
    /// `completed` flag: calling this again on an already-completed task
    /// keeps driving `amount` further negative but cannot un-complete it.
    pub fn reduce_amount(&mut self, amount: f64) {
        self.amount -= amount;
        if self.amount <= 0.0 {
            self.completed = true;
        }
    }
}
