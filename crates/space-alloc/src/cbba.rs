//! Consensus-Based Bundle Algorithm allocator (spec.md §4.10).
//!
//! Grounded on `original_source/plugins/cbba/cbba.py`: bundle/path
//! construction follows Algorithm 3 of Choi, How & How 2009 exactly; the
//! 16-rule consensus table in [`apply_consensus_rule`] is a line-by-line
//! translation of `CBBA.decide`'s nested `if`/`elif` chain (the Rule N
//! comments match the paper's Table 1 numbering as carried over in the
//! Python source).
//!
//! # Redesign: tick-based timestamps
//!
//! The original `update_time_stamp` stamps `self.s[agent] = int(time.time())`
//! — wall-clock seconds. That makes two runs of the same scenario produce
//! different `s` vectors (and therefore possibly different rule outcomes
//! whenever a `Rule 3/7/9/…` tie-break depends on which of two `s` entries is
//! larger but both were written in the same wall-clock second on a fast
//! machine vs not on a slow one). Here `s` is keyed on the tick counter
//! instead: monotonic, integral, and identical across runs with the same
//! seed — satisfying spec.md §8's determinism property without changing the
//! algorithm's structure.

use std::collections::HashMap;

use space_agent::AgentStore;
use space_core::{AgentId, TaskId, Vec2};
use space_task::TaskStore;

use crate::allocator::{Allocator, DecideInput};
use crate::message::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbbaPhase {
    BuildBundle,
    AssignmentConsensus,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CbbaConfig {
    pub execute_movements_during_convergence: bool,
    pub max_tasks_per_agent: usize,
    pub task_reward_discount_factor: f64,
    pub winning_bid_cancel: bool,
    pub acceptable_empty_bundle_duration: f64,
}

/// Agent motion/work parameters needed by Eqn (11)'s time-discounted score.
/// Uniform across agents, mirroring `space_kinematics::MotionParams`.
#[derive(Clone, Copy, Debug)]
pub struct CbbaAgentParams {
    pub max_speed: f64,
    pub work_rate: f64,
}

/// Per-agent CBBA bookkeeping (spec.md §3 "CBBA state per agent").
#[derive(Default, Clone)]
pub struct CbbaState {
    pub z: HashMap<TaskId, Option<AgentId>>,
    pub y: HashMap<TaskId, f64>,
    pub s: HashMap<AgentId, u64>,
    pub bundle: Vec<TaskId>,
    pub path: Vec<TaskId>,
    pub assigned_task: Option<TaskId>,
    pub no_bundle_duration: f64,
    phase: Option<CbbaPhase>,
}

impl CbbaState {
    fn phase(&self) -> CbbaPhase {
        self.phase.unwrap_or(CbbaPhase::BuildBundle)
    }
}

pub struct CBBA {
    pub config: CbbaConfig,
    pub agent_params: CbbaAgentParams,
}

impl CBBA {
    pub fn new(config: CbbaConfig, agent_params: CbbaAgentParams) -> Self {
        Self { config, agent_params }
    }

    fn score_along_path(&self, position: Vec2, path: &[TaskId], tasks: &TaskStore) -> f64 {
        let mut current = position;
        let mut distance_acc = 0.0;
        let mut reward = 0.0;
        for &task_id in path {
            let Some(task) = tasks.get(task_id) else { continue };
            distance_acc += current.distance_to(task.position);
            reward += self
                .config
                .task_reward_discount_factor
                .powf(distance_acc / self.agent_params.max_speed + task.amount / self.agent_params.work_rate)
                * task.amount;
            current = task.position;
        }
        reward
    }

    fn alternative_path(path: &[TaskId], task_id: TaskId, idx: usize) -> Vec<TaskId> {
        let mut p = path.to_vec();
        p.insert(idx, task_id);
        p
    }

    /// Algorithm 3, Lines 3-9: this agent's marginal bid for every
    /// not-yet-bundled local task, and the path index that yields it.
    fn bid_value_list(
        &self,
        state: &CbbaState,
        local_tasks: &[TaskId],
        position: Vec2,
        tasks: &TaskStore,
    ) -> (HashMap<TaskId, f64>, HashMap<TaskId, usize>) {
        let s_p = self.score_along_path(position, &state.path, tasks);
        let mut bids = HashMap::new();
        let mut insertion_idx = HashMap::new();

        for &task_id in local_tasks {
            if state.path.contains(&task_id) {
                continue;
            }
            let mut best_idx = 0;
            let mut best_marginal = f64::NEG_INFINITY;
            for idx in 0..=state.path.len() {
                let alt = Self::alternative_path(&state.path, task_id, idx);
                let marginal = self.score_along_path(position, &alt, tasks) - s_p;
                if marginal > best_marginal {
                    best_marginal = marginal;
                    best_idx = idx;
                }
            }
            bids.insert(task_id, best_marginal);
            insertion_idx.insert(task_id, best_idx);
        }

        (bids, insertion_idx)
    }

    /// Algorithm 3, Lines 8-9: the highest bidder after suppressing tasks
    /// this agent already lost (`winning_bid_value > my_bid`). Ties resolve
    /// to the first task in `local_tasks` order, matching the Python
    /// source's `max(my_bid_list, key=...)` over an insertion-ordered dict
    /// built by iterating `local_tasks_info` in the same order — iterating
    /// a `HashMap` directly would make ties resolve to an arbitrary,
    /// per-process-randomized task and break spec.md §8's determinism
    /// requirement.
    fn best_task(&self, local_tasks: &[TaskId], state: &CbbaState, bid_list: &HashMap<TaskId, f64>) -> Option<TaskId> {
        let mut best: Option<(TaskId, f64)> = None;
        for &task_id in local_tasks {
            let Some(&bid) = bid_list.get(&task_id) else { continue };
            let score = match state.y.get(&task_id) {
                Some(&winning_bid) if winning_bid > bid => f64::NEG_INFINITY,
                _ => bid,
            };
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((task_id, score));
            }
        }

        best.filter(|&(_, score)| score > f64::NEG_INFINITY).map(|(id, _)| id)
    }

    /// Algorithm 3: grow the bundle/path up to `max_tasks_per_agent` (or
    /// until no remaining task yields a positive marginal bid).
    fn build_bundle(&self, state: &mut CbbaState, local_tasks: &[TaskId], position: Vec2, tasks: &TaskStore, self_id: AgentId) {
        while state.bundle.len() < self.config.max_tasks_per_agent.min(local_tasks.len()) {
            let (bid_list, insertion_idx) = self.bid_value_list(state, local_tasks, position, tasks);
            let Some(task_to_add) = self.best_task(local_tasks, state, &bid_list) else { break };
            let idx = insertion_idx[&task_to_add];
            state.bundle.insert(idx, task_to_add);
            state.path.insert(idx, task_to_add);
            state.y.insert(task_to_add, bid_list[&task_to_add]);
            state.z.insert(task_to_add, Some(self_id));
        }
    }

    /// Truncate the bundle/path at the first task this agent no longer wins
    /// (per its own `z`), dropping everything from there on.
    fn update_bundle_and_path(state: &CbbaState, self_id: AgentId) -> (Vec<TaskId>, Vec<TaskId>) {
        let mut n_bar = state.bundle.len();
        for (idx, &task_id) in state.bundle.iter().enumerate() {
            if state.z.get(&task_id).copied().flatten() != Some(self_id) {
                n_bar = idx;
                break;
            }
        }
        (state.bundle[..n_bar].to_vec(), state.path[..n_bar].to_vec())
    }

    fn update(state: &mut CbbaState, task_id: TaskId, y_k: &HashMap<TaskId, f64>, z_k: &HashMap<TaskId, Option<AgentId>>) {
        if let Some(&bid) = y_k.get(&task_id) {
            state.y.insert(task_id, bid);
        }
        state.z.insert(task_id, z_k.get(&task_id).copied().flatten());
    }

    fn reset(state: &mut CbbaState, task_id: TaskId) {
        state.y.insert(task_id, 0.0);
        state.z.insert(task_id, None);
    }

    /// `true` if `s_k[who] > s_i[who]`, treating either side missing the key
    /// as "unknown" — the rule simply does not fire, matching the Python
    /// source's `try/except` swallow around these comparisons.
    fn heard_more_recently(s_k: &HashMap<AgentId, u64>, s_i: &HashMap<AgentId, u64>, who: AgentId) -> bool {
        matches!((s_k.get(&who), s_i.get(&who)), (Some(a), Some(b)) if a > b)
    }

    /// One cell of Table 1 (Choi, How & How 2009) — the 16-rule consensus
    /// update for task `j` given agent `k`'s claim against this agent's own.
    #[allow(clippy::too_many_arguments)]
    fn apply_consensus_rule(
        state: &mut CbbaState,
        j: TaskId,
        k_agent_id: AgentId,
        self_id: AgentId,
        y_k: &HashMap<TaskId, f64>,
        z_k: &HashMap<TaskId, Option<AgentId>>,
        s_k: &HashMap<AgentId, u64>,
    ) {
        let z_k_j = z_k.get(&j).copied().flatten();
        let z_i_j = state.z.get(&j).copied().flatten();
        let y_k_j = y_k.get(&j).copied().unwrap_or(f64::NEG_INFINITY);
        let y_i_j = state.y.get(&j).copied().unwrap_or(f64::NEG_INFINITY);
        let s_i = state.s.clone();

        if z_k_j == Some(k_agent_id) {
            if z_i_j == Some(self_id) {
                // Rule 1
                if y_k_j > y_i_j {
                    Self::update(state, j, y_k, z_k);
                }
            } else if z_i_j == Some(k_agent_id) {
                // Rule 2
                Self::update(state, j, y_k, z_k);
            } else if z_i_j.is_none() {
                // Rule 4
                Self::update(state, j, y_k, z_k);
            } else {
                // Rule 3
                let m = z_i_j.unwrap();
                if Self::heard_more_recently(s_k, &s_i, m) || y_k_j > y_i_j {
                    Self::update(state, j, y_k, z_k);
                }
            }
        } else if z_k_j == Some(self_id) {
            if z_i_j == Some(self_id) {
                // Rule 5: leave, no-op.
            } else if z_i_j == Some(k_agent_id) {
                // Rule 6
                Self::reset(state, j);
            } else if z_i_j.is_none() {
                // Rule 8: leave, no-op.
            } else {
                // Rule 7
                let m = z_i_j.unwrap();
                if Self::heard_more_recently(s_k, &s_i, m) {
                    Self::reset(state, j);
                }
            }
        } else if z_k_j.is_none() {
            if z_i_j == Some(self_id) {
                // Rule 14: leave, no-op.
            } else if z_i_j == Some(k_agent_id) {
                // Rule 15
                Self::update(state, j, y_k, z_k);
            } else if z_i_j.is_none() {
                // Rule 17: leave, no-op.
            } else {
                // Rule 16
                let m = z_i_j.unwrap();
                if Self::heard_more_recently(s_k, &s_i, m) {
                    Self::reset(state, j);
                }
            }
        } else {
            let m = z_k_j.unwrap();
            if z_i_j == Some(self_id) {
                // Rule 9
                if Self::heard_more_recently(s_k, &s_i, m) && y_k_j > y_i_j {
                    Self::update(state, j, y_k, z_k);
                }
            } else if z_i_j == Some(k_agent_id) {
                // Rule 10
                if Self::heard_more_recently(s_k, &s_i, m) {
                    Self::update(state, j, y_k, z_k);
                } else {
                    Self::reset(state, j);
                }
            } else if z_i_j == Some(m) {
                // Rule 11
                if Self::heard_more_recently(s_k, &s_i, m) {
                    Self::update(state, j, y_k, z_k);
                }
            } else if z_i_j.is_none() {
                // Rule 13
                if Self::heard_more_recently(s_k, &s_i, m) {
                    Self::update(state, j, y_k, z_k);
                }
            } else {
                // Rule 12
                let n = z_i_j.unwrap();
                if Self::heard_more_recently(s_k, &s_i, m) && Self::heard_more_recently(s_k, &s_i, n) {
                    Self::update(state, j, y_k, z_k);
                } else if Self::heard_more_recently(s_k, &s_i, m) && y_k_j > y_i_j {
                    Self::update(state, j, y_k, z_k);
                } else if Self::heard_more_recently(s_k, &s_i, n) && Self::heard_more_recently(&s_i, s_k, m) {
                    Self::reset(state, j);
                }
            }
        }
    }
}

impl Allocator for CBBA {
    fn register_components(&self, agents: &mut AgentStore) {
        let count = agents.count;
        agents.components_mut().register::<CbbaState>(count);
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

        let mut state =
            agents.component::<CbbaState>().expect("CBBA components registered before first decide()")[idx].clone();

        // Check if the existing assigned task has completed.
        if let Some(assigned_id) = state.assigned_task {
            if tasks.get(assigned_id).is_none_or(|t| t.completed) {
                if state.path.first() == Some(&assigned_id) {
                    state.path.remove(0);
                    state.bundle.remove(0);
                }
                state.assigned_task = None;
                state.phase = Some(CbbaPhase::BuildBundle);
            }
        }

        if state.bundle.is_empty() {
            state.phase = Some(CbbaPhase::BuildBundle);
        }

        if input.local_tasks.is_empty() {
            agents.assigned_task[idx] = state.assigned_task;
            agents.component_mut::<CbbaState>().expect("registered")[idx] = state;
            return false;
        }

        if self.config.winning_bid_cancel {
            if state.bundle.is_empty() {
                state.no_bundle_duration += input.dt;
            }
            if state.no_bundle_duration > self.config.acceptable_empty_bundle_duration {
                state.z.clear();
                state.y.clear();
                state.s.clear();
                state.no_bundle_duration = 0.0;
            }
        }

        if state.phase() == CbbaPhase::BuildBundle {
            self.build_bundle(&mut state, input.local_tasks, input.position, tasks, self_id);
            *outbox = Some(Message::Cbba {
                agent_id: self_id,
                winning_agents: state.z.clone(),
                winning_bids: state.y.clone(),
                time_stamps: state.s.clone(),
            });
            state.phase = Some(CbbaPhase::AssignmentConsensus);
            state.assigned_task = None;

            agents.assigned_task[idx] = None;
            agents.component_mut::<CbbaState>().expect("registered")[idx] = state;
            return false;
        }

        // Phase 2: assignment consensus.
        for &neighbor in input.local_agents {
            state.s.insert(neighbor, input.tick);
        }
        let mut heard_via_relay: HashMap<AgentId, u64> = HashMap::new();
        for msg in input.inbox {
            if let Message::Cbba { time_stamps, .. } = msg {
                for (&k, &v) in time_stamps {
                    heard_via_relay.entry(k).and_modify(|e| *e = (*e).max(v)).or_insert(v);
                }
            }
        }
        for (k, v) in heard_via_relay {
            state.s.entry(k).and_modify(|e| *e = (*e).max(v)).or_insert(v);
        }

        for &task_id in input.local_tasks {
            for msg in input.inbox {
                let Message::Cbba { agent_id: k_agent_id, winning_agents: z_k, winning_bids: y_k, time_stamps: s_k } =
                    msg
                else {
                    continue;
                };
                if *k_agent_id == self_id {
                    continue;
                }
                if !y_k.contains_key(&task_id) || !state.y.contains_key(&task_id) {
                    continue;
                }
                Self::apply_consensus_rule(&mut state, task_id, *k_agent_id, self_id, y_k, z_k, s_k);
            }
        }

        let (updated_bundle, updated_path) = Self::update_bundle_and_path(&state, self_id);

        if self.config.winning_bid_cancel && !updated_bundle.is_empty() {
            state.no_bundle_duration = 0.0;
        }

        if updated_bundle == state.bundle {
            state.assigned_task = state.path.first().copied();
            agents.assigned_task[idx] = state.assigned_task;
            agents.component_mut::<CbbaState>().expect("registered")[idx] = state;
            return false;
        }

        state.bundle = updated_bundle;
        state.path = updated_path;
        state.assigned_task = None;
        state.phase = Some(CbbaPhase::BuildBundle);

        if self.config.execute_movements_during_convergence {
            state.assigned_task = state.path.first().copied();
            agents.assigned_task[idx] = state.assigned_task;
            agents.component_mut::<CbbaState>().expect("registered")[idx] = state;
            false
        } else {
            agents.assigned_task[idx] = None;
            agents.component_mut::<CbbaState>().expect("registered")[idx] = state;
            true
        }
    }
}
