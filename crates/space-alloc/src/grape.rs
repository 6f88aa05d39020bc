//! GRAPE coalition-formation allocator (spec.md §4.9).
//!
//! Grounded on `original_source/plugins/grape/grape.py`. Per-agent state
//! (`partition`, `evolution_number`, `time_stamp`, `satisfied`,
//! `partition_initialized`) is registered as the [`GrapeState`] component —
//! the Python plugin holds one `GRAPE` instance per agent; here one
//! stateless `GRAPE` strategy reads/writes everyone's component slot.

use std::collections::{HashMap, HashSet};

use space_agent::AgentStore;
use space_core::{AgentId, TaskId, Vec2};
use space_task::TaskStore;

use crate::allocator::{Allocator, DecideInput};
use crate::message::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionInit {
    /// No seeding: every agent starts in no coalition.
    None,
    /// Seed each neighbour into the coalition of its nearest local task.
    Distance,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrapeConfig {
    pub execute_movements_during_convergence: bool,
    pub cost_weight_factor: f64,
    pub social_inhibition_factor: f64,
    pub initialize_partition: PartitionInit,
    pub reinitialize_partition_on_completion: PartitionInit,
}

/// Per-agent GRAPE bookkeeping, registered via [`Allocator::register_components`].
#[derive(Default, Clone)]
pub struct GrapeState {
    pub partition: HashMap<TaskId, HashSet<AgentId>>,
    pub evolution_number: u64,
    pub time_stamp: f64,
    pub satisfied: bool,
    pub partition_initialized: bool,
}

pub struct GRAPE {
    pub config: GrapeConfig,
}

impl GRAPE {
    pub fn new(config: GrapeConfig) -> Self {
        Self { config }
    }

    /// `u(i, j) = amount_j / n_j − w·dist(i,j) · n_j^β` (spec.md §4.9).
    fn utility(
        &self,
        partition: &HashMap<TaskId, HashSet<AgentId>>,
        agent: AgentId,
        position: Vec2,
        task_id: TaskId,
        task_position: Vec2,
        amount: f64,
    ) -> f64 {
        let in_coalition = partition.get(&task_id).is_some_and(|s| s.contains(&agent));
        let mut n = partition.get(&task_id).map_or(0, |s| s.len());
        if !in_coalition {
            n += 1;
        }
        let distance = position.distance_to(task_position);
        amount / n as f64
            - self.config.cost_weight_factor * distance * (n as f64).powf(self.config.social_inhibition_factor)
    }

    fn assigned_from_partition(
        partition: &HashMap<TaskId, HashSet<AgentId>>,
        agent: AgentId,
    ) -> Option<TaskId> {
        partition.iter().find(|(_, members)| members.contains(&agent)).map(|(id, _)| *id)
    }

    /// Seed each `(agent, position)` into the coalition of its nearest
    /// `(task, position, completed)`, skipping completed tasks.
    fn initialize_by_distance(
        agents: &[(AgentId, Vec2)],
        tasks: &[(TaskId, Vec2, bool)],
        partition: &mut HashMap<TaskId, HashSet<AgentId>>,
    ) {
        for &(agent_id, position) in agents {
            let nearest = tasks
                .iter()
                .map(|&(id, pos, completed)| {
                    let d = if completed { f64::INFINITY } else { position.distance_to(pos) };
                    (id, d)
                })
                .min_by(|a, b| a.1.partial_cmp(&b.1).expect("distances are not NaN"));
            if let Some((preferred, _)) = nearest {
                partition.entry(preferred).or_default().insert(agent_id);
            }
        }
    }
}

impl Allocator for GRAPE {
    fn register_components(&self, agents: &mut AgentStore) {
        let count = agents.count;
        agents.components_mut().register::<GrapeState>(count);
    }

    fn decide(
        &self,
        input: DecideInput<'_>,
        agents: &mut AgentStore,
        tasks: &TaskStore,
        outbox: &mut Option<Message>,
    ) -> bool {
        let idx = input.agent.index();
        let self_id = input.agent;

        let local_task_info: Vec<(TaskId, Vec2, f64, bool)> = input
            .local_tasks
            .iter()
            .filter_map(|&id| tasks.get(id).map(|t| (id, t.position, t.amount, t.completed)))
            .collect();

        let local_agent_positions: Vec<(AgentId, Vec2)> =
            input.local_agents.iter().map(|&id| (id, agents.position[id.index()])).collect();

        let mut state = agents
            .component::<GrapeState>()
            .expect("GRAPE components registered before first decide()")[idx]
            .clone();

        if !state.partition_initialized {
            for &(task_id, ..) in &local_task_info {
                state.partition.entry(task_id).or_default();
            }
            if self.config.initialize_partition == PartitionInit::Distance
                && !local_task_info.is_empty()
                && !local_agent_positions.is_empty()
            {
                let task_tuples: Vec<(TaskId, Vec2, bool)> =
                    local_task_info.iter().map(|&(id, pos, _, c)| (id, pos, c)).collect();
                Self::initialize_by_distance(&local_agent_positions, &task_tuples, &mut state.partition);
            }
            state.partition_initialized = true;
        }

        let mut assigned = Self::assigned_from_partition(&state.partition, self_id);
        if let Some(assigned_id) = assigned {
            let completed = local_task_info
                .iter()
                .find(|&&(id, ..)| id == assigned_id)
                .map(|&(_, _, _, c)| c)
                .or_else(|| tasks.get(assigned_id).map(|t| t.completed))
                .unwrap_or(false);

            if completed {
                let neighbors_in_coalition: Vec<(AgentId, Vec2)> = local_agent_positions
                    .iter()
                    .copied()
                    .filter(|&(id, _)| {
                        state.partition.get(&assigned_id).is_some_and(|s| s.contains(&id))
                    })
                    .collect();

                state.partition.entry(assigned_id).or_default().clear();
                state.satisfied = false;
                assigned = None;

                if self.config.reinitialize_partition_on_completion == PartitionInit::Distance {
                    let task_tuples: Vec<(TaskId, Vec2, bool)> =
                        local_task_info.iter().map(|&(id, pos, _, c)| (id, pos, c)).collect();
                    Self::initialize_by_distance(
                        &neighbors_in_coalition,
                        &task_tuples,
                        &mut state.partition,
                    );
                    assigned = Self::assigned_from_partition(&state.partition, self_id);
                }
            }
        }

        if local_task_info.is_empty() {
            agents.assigned_task[idx] = assigned;
            agents.component_mut::<GrapeState>().expect("registered")[idx] = state;
            return false;
        }

        if !state.satisfied {
            // Phase 1: self-update.
            let (max_task, max_utility) = local_task_info
                .iter()
                .map(|&(id, pos, amount, completed)| {
                    let u = if completed {
                        f64::NEG_INFINITY
                    } else {
                        self.utility(&state.partition, self_id, input.position, id, pos, amount)
                    };
                    (id, u)
                })
                .max_by(|a, b| a.1.partial_cmp(&b.1).expect("utilities are not NaN"))
                .expect("local_task_info is non-empty here");

            let current_utility = assigned
                .and_then(|id| {
                    local_task_info.iter().find(|&&(tid, ..)| tid == id).map(
                        |&(_, pos, amount, completed)| {
                            if completed {
                                f64::NEG_INFINITY
                            } else {
                                self.utility(&state.partition, self_id, input.position, id, pos, amount)
                            }
                        },
                    )
                })
                .unwrap_or(f64::NEG_INFINITY);

            if max_utility > current_utility {
                if let Some(old) = assigned {
                    state.partition.entry(old).or_default().remove(&self_id);
                }
                state.partition.entry(max_task).or_default().insert(self_id);
                state.evolution_number += 1;
                state.time_stamp = input.rng.gen_range(0.0..1.0);
                assigned = Some(max_task);
            }

            state.satisfied = true;
            *outbox = Some(Message::Grape {
                agent_id: self_id,
                partition: state.partition.clone(),
                evolution_number: state.evolution_number,
                time_stamp: state.time_stamp,
            });

            agents.assigned_task[idx] = None;
            agents.component_mut::<GrapeState>().expect("registered")[idx] = state;
            return false;
        }

        // Phase 2: distributed mutex.
        let mut satisfied = true;
        for msg in input.inbox {
            if let Message::Grape { partition: p, evolution_number: e, time_stamp: t, .. } = msg {
                if *e > state.evolution_number || (*e == state.evolution_number && *t > state.time_stamp) {
                    state.evolution_number = *e;
                    state.time_stamp = *t;
                    state.partition = p.clone();
                    satisfied = false;
                }
            }
        }
        state.satisfied = satisfied;
        assigned = Self::assigned_from_partition(&state.partition, self_id);

        let suppress = !satisfied && !self.config.execute_movements_during_convergence;

        agents.assigned_task[idx] = assigned;
        agents.component_mut::<GrapeState>().expect("registered")[idx] = state;
        suppress
    }
}
