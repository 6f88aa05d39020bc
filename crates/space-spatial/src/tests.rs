//! Unit tests for space-spatial.

use space_core::{TaskId, Vec2};
use space_task::{Task, TaskStore};

use crate::Perception;

fn tasks(positions: &[(f64, f64)]) -> TaskStore {
    let tasks: Vec<Task> = positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Task::new(TaskId(i as u32), Vec2::new(x, y), 1.0, 10.0))
        .collect();
    TaskStore::new(tasks)
}

#[cfg(test)]
mod agents_within {
    use super::*;
    use space_core::AgentId;

    #[test]
    fn finds_neighbours_inside_radius() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(50.0, 0.0)];
        let perception = Perception::build(&positions, &tasks(&[]));

        let mut nearby = perception.agents_within(AgentId(0), Vec2::ZERO, 5.0);
        nearby.sort();
        assert_eq!(nearby, vec![AgentId(1)]);
    }

    #[test]
    fn excludes_self() {
        let positions = vec![Vec2::new(0.0, 0.0)];
        let perception = Perception::build(&positions, &tasks(&[]));
        let nearby = perception.agents_within(AgentId(0), Vec2::ZERO, 100.0);
        assert!(nearby.is_empty());
    }

    #[test]
    fn zero_radius_means_global() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(1_000.0, 1_000.0), Vec2::new(-500.0, 0.0)];
        let perception = Perception::build(&positions, &tasks(&[]));

        let mut nearby = perception.agents_within(AgentId(0), Vec2::ZERO, 0.0);
        nearby.sort();
        assert_eq!(nearby, vec![AgentId(1), AgentId(2)]);
    }

    #[test]
    fn negative_radius_also_means_global() {
        let positions = vec![Vec2::new(0.0, 0.0), Vec2::new(1_000.0, 1_000.0)];
        let perception = Perception::build(&positions, &tasks(&[]));
        let nearby = perception.agents_within(AgentId(0), Vec2::ZERO, -1.0);
        assert_eq!(nearby, vec![AgentId(1)]);
    }
}

#[cfg(test)]
mod tasks_within {
    use super::*;

    #[test]
    fn finds_tasks_inside_radius() {
        let store = tasks(&[(0.0, 0.0), (3.0, 0.0), (100.0, 0.0)]);
        let positions = vec![];
        let perception = Perception::build(&positions, &store);

        let mut nearby = perception.tasks_within(Vec2::ZERO, 5.0);
        nearby.sort();
        assert_eq!(nearby, vec![TaskId(0), TaskId(1)]);
    }

    #[test]
    fn excludes_completed_tasks() {
        let mut store = tasks(&[(0.0, 0.0)]);
        store.get_mut(TaskId(0)).unwrap().reduce_amount(1_000.0);
        assert!(store.get(TaskId(0)).unwrap().completed);

        let perception = Perception::build(&[], &store);
        assert!(perception.tasks_within(Vec2::ZERO, 0.0).is_empty());
    }

    #[test]
    fn zero_radius_means_global() {
        let store = tasks(&[(0.0, 0.0), (1_000.0, 1_000.0)]);
        let perception = Perception::build(&[], &store);

        let mut nearby = perception.tasks_within(Vec2::ZERO, 0.0);
        nearby.sort();
        assert_eq!(nearby, vec![TaskId(0), TaskId(1)]);
    }

    #[test]
    fn empty_store_returns_empty() {
        let store = tasks(&[]);
        let perception = Perception::build(&[], &store);
        assert!(perception.tasks_within(Vec2::ZERO, 0.0).is_empty());
    }
}
