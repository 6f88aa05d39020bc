//! `MessageBoard` — per-tick outbox/inbox storage for every agent's
//! [`Message`], owned by the world and handed to the perception/decision
//! actions as plain slices.
//!
//! Grounded on `Agent.message_to_share`/`Agent.messages_received` in
//! `original_source/modules/agent.py`, generalized from per-agent Python
//! attributes into SoA `Vec`s indexed by `AgentId`, matching
//! `space_agent::AgentStore`'s storage idiom.

use space_core::AgentId;

use crate::message::Message;

pub struct MessageBoard {
    outbox: Vec<Option<Message>>,
    inbox: Vec<Vec<Message>>,
}

impl MessageBoard {
    pub fn new(count: usize) -> Self {
        Self {
            outbox: (0..count).map(|_| None).collect(),
            inbox: (0..count).map(|_| Vec::new()).collect(),
        }
    }

    /// Publish (or replace) `agent`'s outgoing message for this tick.
    pub fn publish(&mut self, agent: AgentId, msg: Message) {
        self.outbox[agent.index()] = Some(msg);
    }

    /// `agent`'s currently published outgoing message, if any.
    pub fn outbox(&self, agent: AgentId) -> Option<&Message> {
        self.outbox[agent.index()].as_ref()
    }

    /// Deliver `msg` into `to`'s inbox. Called by the sensing action once per
    /// in-range peer, per spec.md §4.5 ("drains each in-range peer's
    /// `message_to_share` into this agent's `messages_received` inbox").
    pub fn deliver(&mut self, to: AgentId, msg: Message) {
        self.inbox[to.index()].push(msg);
    }

    /// `agent`'s received messages since the last [`Self::clear_inbox`] call.
    pub fn inbox(&self, agent: AgentId) -> &[Message] {
        &self.inbox[agent.index()]
    }

    /// Empty `agent`'s inbox — called at the start of `sense` before
    /// re-collecting this tick's in-range messages (messages do not persist
    /// across ticks; spec.md §4.5 delivery is instantaneous, not queued).
    pub fn clear_inbox(&mut self, agent: AgentId) {
        self.inbox[agent.index()].clear();
    }

    pub fn len(&self) -> usize {
        self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outbox.is_empty()
    }
}
