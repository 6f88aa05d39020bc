//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use space_agent::AgentStoreBuilder;
//!
//! #[derive(Default, Clone)]
//! struct CbbaState { bundle: Vec<u32> }
//!
//! let (store, rngs) = AgentStoreBuilder::new(50, /*seed=*/ 42)
//!     .track_capacity(400)
//!     .register_component::<CbbaState>()
//!     .build();
//!
//! assert_eq!(store.count, 50);
//! assert_eq!(rngs.len(), 50);
//! ```

use crate::{AgentRngs, AgentStore, ComponentMap};

/// Default cap on `AgentStore::memory_location` when the caller doesn't
/// override it — matches the original simulator's `agent_track_size`.
const DEFAULT_TRACK_CAPACITY: usize = 400;

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
pub struct AgentStoreBuilder {
    count: usize,
    seed: u64,
    track_capacity: usize,
    components: ComponentMap,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            track_capacity: DEFAULT_TRACK_CAPACITY,
            components: ComponentMap::new(),
        }
    }

    /// Override the position-memory ring capacity (default 400).
    pub fn track_capacity(mut self, capacity: usize) -> Self {
        self.track_capacity = capacity;
        self
    }

    /// Register an allocator-defined component type `T`.
    ///
    /// Every agent will start with `T::default()`. Must be called before
    /// [`build`](Self::build). Calling this twice for the same `T` is
    /// harmless (second call is a no-op).
    pub fn register_component<T: Default + Send + Sync + 'static>(mut self) -> Self {
        self.components.register::<T>(0);
        self
    }

    /// Construct `AgentStore` and `AgentRngs`.
    pub fn build(mut self) -> (AgentStore, AgentRngs) {
        for _ in 0..self.count {
            self.components.push_defaults();
        }

        let store = AgentStore::new(self.count, self.track_capacity, self.components);
        let rngs = AgentRngs::new(self.count, self.seed);

        (store, rngs)
    }
}
