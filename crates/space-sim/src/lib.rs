//! `space-sim` — the tick-loop orchestrator for the SPACE multi-robot task
//! allocation simulator (spec.md §4.11).
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|------------------------------------------------------------------|
//! | [`config`]  | `Config` and friends — the typed, validated config surface        |
//! | [`error`]   | `SimError`, `SimResult<T>`                                         |
//! | [`observer`]| `SimObserver`, `NoopObserver` — progress callbacks                 |
//! | [`actions`] | `TickActions` — wires the behaviour tree to perception/allocator   |
//! | [`world`]   | `World` — owns all simulation state and drives the tick loop        |
//!
//! # Tick order
//!
//! Each call to [`world::World::tick`] rebuilds the spatial index, runs the
//! behaviour tree for every agent in ascending `AgentId` order, integrates
//! kinematics, advances the clock, checks for mission completion, and offers
//! the dynamic task generator a chance to fire — see `world`'s module doc
//! for the full breakdown.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use space_sim::{Config, NoopObserver, Strategy, World};
//!
//! let config: Config = toml::from_str(&config_text)?;
//! let mut world = World::new(&config, Strategy::Cbba, /* seed */ 42)?;
//! world.run(&mut NoopObserver);
//! assert!(world.mission_completed());
//! ```

pub mod actions;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod world;


pub use actions::TickActions;
pub use builder::SimBuilder;
pub use config::{
    AgentsConfig, Config, DecisionMakingConfig, RenderingMode, SimulationConfig, Strategy, TasksConfig,
};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use world::World;
