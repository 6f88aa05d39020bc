//! `Message` — the tagged union of per-strategy broadcast payloads
//! (spec.md's "`message_to_share` payload whose shape depends on the active
//! allocator", §3 DATA MODEL).
//!
//! Grounded on each plugin's `self.message_to_share` dict in
//! `original_source/plugins/*`: Greedy shares `{agent_id, assigned_task_id}`,
//! GRAPE shares `{agent_id, partition, evolution_number, time_stamp}`, CBBA
//! shares `{agent_id, winning_agents, winning_bids,
//! message_received_time_stamp}`. A single enum (rather than three separate
//! inbox types) lets `space-sim` run with whichever one strategy a
//! configuration selects without generic plumbing through every crate above
//! this one.

use std::collections::{HashMap, HashSet};

use space_core::{AgentId, TaskId};

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Greedy {
        agent_id: AgentId,
        assigned_task_id: Option<TaskId>,
    },
    Grape {
        agent_id: AgentId,
        partition: HashMap<TaskId, HashSet<AgentId>>,
        evolution_number: u64,
        time_stamp: f64,
    },
    Cbba {
        agent_id: AgentId,
        winning_agents: HashMap<TaskId, Option<AgentId>>,
        winning_bids: HashMap<TaskId, f64>,
        /// Eqn (5)'s `s` vector — the tick (not wall-clock) this agent last
        /// heard from each other agent it knows about. See
        /// [`crate::cbba::CBBA::update_time_stamp`] for the tick-based
        /// redesign rationale.
        time_stamps: HashMap<AgentId, u64>,
    },
}

impl Message {
    pub fn agent_id(&self) -> AgentId {
        match self {
            Message::Greedy { agent_id, .. }
            | Message::Grape { agent_id, .. }
            | Message::Cbba { agent_id, .. } => *agent_id,
        }
    }
}
