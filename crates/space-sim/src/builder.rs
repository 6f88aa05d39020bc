//! Fluent builder for constructing a [`World`], mirroring the
//! `AgentStoreBuilder`/`Self`-returning idiom used throughout this
//! workspace (`space_agent::AgentStoreBuilder`).

use crate::config::{Config, Strategy};
use crate::error::SimResult;
use crate::world::World;

/// Builds a [`World`] from a [`Config`], a [`Strategy`], and a seed.
///
/// # Example
///
/// ```rust,ignore
/// use space_sim::{SimBuilder, Strategy};
///
/// let world = SimBuilder::new(config)
///     .strategy(Strategy::Grape)
///     .seed(42)
///     .build()?;
/// ```
pub struct SimBuilder {
    config: Config,
    strategy: Strategy,
    seed: u64,
}

impl SimBuilder {
    /// Start from `config`, defaulting to [`Strategy::Cbba`] and seed `0`.
    pub fn new(config: Config) -> Self {
        Self { config, strategy: Strategy::Cbba, seed: 0 }
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> SimResult<World> {
        World::new(&self.config, self.strategy, self.seed)
    }
}
