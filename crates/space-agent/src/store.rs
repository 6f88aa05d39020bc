//! Core agent storage: `AgentStore` (SoA kinematic data) and `AgentRngs`
//! (per-agent RNG).
//!
//! # Why two structs?
//!
//! The intent phase of a tick needs `&mut AgentRngs` (exclusive mutable
//! access to each agent's RNG) and `&AgentStore` (shared read access to
//! world state) simultaneously. Rust's borrow checker forbids this if both
//! live inside a single struct. Keeping RNGs in a separate `AgentRngs`
//! struct resolves the conflict cleanly and keeps the door open for a
//! future Rayon-parallel intent phase even though the apply phase (and
//! hence CBBA/GRAPE timing) must stay strictly sequential.

use std::collections::VecDeque;

use space_core::{AgentId, AgentRng, TaskId, Vec2};

use crate::component::ComponentMap;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent kinematic and bookkeeping state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them. State that varies by allocator strategy (CBBA's
/// bundle/path, GRAPE's partition, Greedy's selection mode bookkeeping) does
/// not live here — it lives in the [`ComponentMap`] returned alongside this
/// store, registered by whichever allocator is active for the run.
pub struct AgentStore {
    /// Number of agents. Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current position in the 2-D operating area.
    pub position: Vec<Vec2>,

    /// Current velocity (direction and speed), updated by the kinematics
    /// integrator each tick.
    pub velocity: Vec<Vec2>,

    /// Steering force accumulated this tick by `follow()` calls, consumed
    /// and reset to zero by `KinematicsEngine::update`.
    pub acceleration: Vec<Vec2>,

    /// Current heading in radians, in `(-pi, pi]`.
    pub rotation: Vec<f64>,

    /// Cumulative Euclidean distance travelled since simulation start.
    pub distance_moved: Vec<f64>,

    /// Cumulative task workload this agent has personally worked down
    /// (spec.md §3, §4.7) — summed across agents this is the conservation-
    /// of-work invariant in spec.md §8.
    pub task_amount_done: Vec<f64>,

    /// Ring buffer of recent positions, capped at `agent_track_size`, oldest
    /// first. Used for exploration (avoiding recently visited ground) and
    /// would back a trajectory renderer if one existed.
    pub memory_location: Vec<VecDeque<Vec2>>,
    track_capacity: usize,

    /// The task this agent currently intends to work, as decided by the
    /// active allocator. `None` means unassigned.
    pub assigned_task: Vec<Option<TaskId>>,

    /// Exploration waypoint, set by the `explore` behaviour action and
    /// cleared on arrival or when a task is assigned.
    pub explore_target: Vec<Option<Vec2>>,

    // ── Allocator-specific components ──────────────────────────────────────
    components: ComponentMap,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Mutable access to the acceleration SoA array. Named (rather than a
    /// plain public field) so callers outside `space-kinematics` notice this
    /// is scratch state reset every tick, not persistent agent state.
    #[inline]
    pub fn acceleration_mut(&mut self) -> &mut [Vec2] {
        &mut self.acceleration
    }

    /// Push `pos` onto an agent's position-memory ring, evicting the oldest
    /// entry once `agent_track_size` is reached.
    pub fn push_memory(&mut self, agent: AgentId, pos: Vec2) {
        let ring = &mut self.memory_location[agent.index()];
        if ring.len() >= self.track_capacity {
            ring.pop_front();
        }
        ring.push_back(pos);
    }

    // ── Component access ──────────────────────────────────────────────────

    /// Read-only slice of allocator component `T`.
    ///
    /// Returns `None` if `T` was not registered before the store was built.
    pub fn component<T: Default + Send + Sync + 'static>(&self) -> Option<&[T]> {
        self.components.get::<T>()
    }

    /// Mutable reference to the component `Vec<T>`.
    pub fn component_mut<T: Default + Send + Sync + 'static>(&mut self) -> Option<&mut Vec<T>> {
        self.components.get_mut::<T>()
    }

    /// Reference to the whole `ComponentMap`.
    pub fn components(&self) -> &ComponentMap {
        &self.components
    }

    /// Mutable reference to the `ComponentMap`.
    pub fn components_mut(&mut self) -> &mut ComponentMap {
        &mut self.components
    }

    // ── Package-private constructor used by AgentStoreBuilder ─────────────

    pub(crate) fn new(count: usize, track_capacity: usize, components: ComponentMap) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            velocity: vec![Vec2::ZERO; count],
            acceleration: vec![Vec2::ZERO; count],
            rotation: vec![0.0; count],
            distance_moved: vec![0.0; count],
            task_amount_done: vec![0.0; count],
            memory_location: (0..count).map(|_| VecDeque::with_capacity(track_capacity)).collect(),
            track_capacity,
            assigned_task: vec![None; count],
            explore_target: vec![None; count],
            components,
        }
    }
}
