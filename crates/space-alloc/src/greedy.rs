//! First-Claim Greedy allocator (spec.md §4.8).
//!
//! Grounded on `original_source/plugins/greedy/greedy.py`. Greedy needs no
//! allocator-specific per-agent component: `AgentStore::assigned_task` is
//! the only state it reads and writes.

use std::collections::HashSet;

use space_agent::AgentStore;
use space_core::{TaskId, Vec2};
use space_task::TaskStore;

use crate::allocator::{Allocator, DecideInput};
use crate::message::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreedyMode {
    Random,
    MinDist,
    MaxUtil,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstClaimGreedyConfig {
    pub mode: GreedyMode,
    pub weight_factor_cost: f64,
    pub enforced_collaboration: bool,
}

pub struct FirstClaimGreedy {
    pub config: FirstClaimGreedyConfig,
}

impl FirstClaimGreedy {
    pub fn new(config: FirstClaimGreedyConfig) -> Self {
        Self { config }
    }

    fn utility(&self, position: Vec2, task_position: Vec2, amount: f64) -> f64 {
        amount - self.config.weight_factor_cost * position.distance_to(task_position)
    }
}

impl Allocator for FirstClaimGreedy {
    fn register_components(&self, _agents: &mut AgentStore) {}

    fn decide(
        &self,
        input: DecideInput<'_>,
        agents: &mut AgentStore,
        tasks: &TaskStore,
        outbox: &mut Option<Message>,
    ) -> bool {
        let idx = input.agent.index();

        // Check if the existing task is done.
        if let Some(current) = agents.assigned_task[idx] {
            if tasks.get(current).map(|t| t.completed).unwrap_or(true) {
                agents.assigned_task[idx] = None;
            }
        }

        // Give up if there is no task nearby.
        if input.local_tasks.is_empty() {
            agents.assigned_task[idx] = None;
            *outbox = Some(Message::Greedy { agent_id: input.agent, assigned_task_id: None });
            return false;
        }

        // Enforced collaboration: exactly one task nearby forces a pick.
        if self.config.enforced_collaboration && input.local_tasks.len() == 1 {
            let chosen = input.local_tasks[0];
            agents.assigned_task[idx] = Some(chosen);
            *outbox = Some(Message::Greedy { agent_id: input.agent, assigned_task_id: Some(chosen) });
            return false;
        }

        if agents.assigned_task[idx].is_none() {
            let claimed: HashSet<TaskId> = input
                .inbox
                .iter()
                .filter_map(|m| match m {
                    Message::Greedy { assigned_task_id: Some(t), .. } => Some(*t),
                    _ => None,
                })
                .collect();

            let candidates: Vec<TaskId> = input
                .local_tasks
                .iter()
                .copied()
                .filter(|t| !claimed.contains(t))
                .collect();

            if candidates.is_empty() {
                agents.assigned_task[idx] = None;
                *outbox = Some(Message::Greedy { agent_id: input.agent, assigned_task_id: None });
                return false;
            }

            let chosen = match self.config.mode {
                GreedyMode::Random => *input.rng.choose(&candidates).expect("non-empty"),
                GreedyMode::MinDist => *candidates
                    .iter()
                    .min_by(|a, b| {
                        let da = Self::distance_or(tasks, **a, input.position, f64::INFINITY);
                        let db = Self::distance_or(tasks, **b, input.position, f64::INFINITY);
                        da.partial_cmp(&db).expect("distances are not NaN")
                    })
                    .expect("non-empty"),
                GreedyMode::MaxUtil => *candidates
                    .iter()
                    .max_by(|a, b| {
                        let ua = self.utility_or(tasks, **a, input.position, f64::NEG_INFINITY);
                        let ub = self.utility_or(tasks, **b, input.position, f64::NEG_INFINITY);
                        ua.partial_cmp(&ub).expect("utilities are not NaN")
                    })
                    .expect("non-empty"),
            };

            agents.assigned_task[idx] = Some(chosen);
            *outbox = Some(Message::Greedy { agent_id: input.agent, assigned_task_id: Some(chosen) });
        }

        false
    }
}

impl FirstClaimGreedy {
    fn distance_or(tasks: &TaskStore, id: TaskId, position: Vec2, default: f64) -> f64 {
        match tasks.get(id) {
            Some(t) if !t.completed => position.distance_to(t.position),
            _ => default,
        }
    }

    fn utility_or(&self, tasks: &TaskStore, id: TaskId, position: Vec2, default: f64) -> f64 {
        match tasks.get(id) {
            Some(t) if !t.completed => self.utility(position, t.position, t.amount),
            _ => default,
        }
    }
}
