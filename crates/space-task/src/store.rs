//! `TaskStore` — owns every `Task` in the world and hands out fresh
//! [`TaskId`]s to the dynamic generator.

use space_core::TaskId;

use crate::task::Task;

/// Owns the world's tasks, indexed by `TaskId`.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Build a store from an initial batch of tasks (typically the result of
    /// the startup placement pass). IDs must already be assigned and unique.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.task_id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.task_id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// All tasks not yet fully worked down.
    pub fn incomplete(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    /// `true` once every task in the store has `completed == true`. An empty
    /// store counts as complete (mirrors the "mission accomplished" check
    /// short-circuiting when there is nothing left to do).
    pub fn all_completed(&self) -> bool {
        self.tasks.iter().all(|t| t.completed)
    }

    /// The next `TaskId` to hand to a freshly generated batch — one past the
    /// highest ID currently in the store (0 for an empty store).
    pub fn next_id(&self) -> TaskId {
        let next = self
            .tasks
            .iter()
            .map(|t| t.task_id.0)
            .max()
            .map(|m| m + 1)
            .unwrap_or(0);
        TaskId(next)
    }

    /// Append newly generated tasks to the store.
    pub fn extend(&mut self, new_tasks: Vec<Task>) {
        self.tasks.extend(new_tasks);
    }
}
