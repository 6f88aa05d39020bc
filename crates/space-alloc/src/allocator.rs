//! `Allocator` — the common interface all three task-allocation strategies
//! implement (spec.md §4.8, §4.9, §4.10).
//!
//! # Design
//!
//! Unlike `original_source/plugins/*`, which instantiates one strategy object
//! *per agent* (`FirstClaimGreedy(agent, config, agent_config)`), every
//! `Allocator` implementation here is a single stateless (`&self`) strategy
//! shared by all agents — consistent with `space-agent::AgentStore`'s
//! Structure-of-Arrays design. Per-agent mutable state (CBBA's bundle/path,
//! GRAPE's partition) is registered into the agent store's `ComponentMap`
//! via [`Allocator::register_components`] rather than held on the strategy
//! object itself.

use space_agent::AgentStore;
use space_core::{AgentId, AgentRng, TaskId, Vec2};
use space_task::TaskStore;

use crate::message::Message;

/// Everything a strategy's `decide` needs that isn't already reachable
/// through `agents`/`tasks` — the result of this tick's `sense` step.
pub struct DecideInput<'a> {
    pub agent: AgentId,
    pub position: Vec2,
    /// Incomplete tasks within `situation_awareness_radius` (or every
    /// incomplete task, if that radius is "global"). spec.md §4.5.
    pub local_tasks: &'a [TaskId],
    /// Other agents within `communication_radius` (or every other agent).
    pub local_agents: &'a [AgentId],
    /// Messages drained from `local_agents`' outboxes this tick.
    pub inbox: &'a [Message],
    pub dt: f64,
    /// Current simulation tick, per spec.md §8's determinism requirement.
    /// CBBA's timestamp vector (Eqn 5) is keyed on this rather than
    /// wall-clock time; see [`crate::cbba`]'s module doc.
    pub tick: u64,
    pub rng: &'a mut AgentRng,
}

/// A pluggable task-allocation strategy.
pub trait Allocator: Send + Sync {
    /// Register whatever per-agent component state this strategy needs
    /// (CBBA's bundle/path/z/y/s, GRAPE's partition/evolution_number/
    /// time_stamp/satisfied). Called once, before the first tick.
    fn register_components(&self, agents: &mut AgentStore);

    /// Run one tick's decision for `input.agent`.
    ///
    /// Implementations read and write their own component state in
    /// `agents`, read `tasks` (never mutate it — task `amount` is mutated
    /// only by the task-execution action), write `agents.assigned_task` for
    /// this agent, and publish `*outbox` if they have something to share
    /// this tick.
    ///
    /// Returns `true` if this agent's movement should be suppressed this
    /// tick (GRAPE/CBBA's convergence-halt behaviour when
    /// `execute_movements_during_convergence == false`).
    fn decide(
        &self,
        input: DecideInput<'_>,
        agents: &mut AgentStore,
        tasks: &TaskStore,
        outbox: &mut Option<Message>,
    ) -> bool;
}
