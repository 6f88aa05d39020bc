//! `space-agent` — Structure-of-Arrays agent storage for the SPACE simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`component`]   | `ComponentVec` trait, `TypedComponentVec<T>`, `ComponentMap` |
//! | [`store`]       | `AgentStore` (SoA kinematic arrays), `AgentRngs`          |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                 |
//!
//! Allocator-specific per-agent bookkeeping (CBBA bundles, GRAPE partitions,
//! …) is not part of `AgentStore`'s fixed fields; it is registered into the
//! `ComponentMap` by whichever `space-alloc` strategy a run selects.

pub mod builder;
pub mod component;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use component::{ComponentMap, ComponentVec, TypedComponentVec};
pub use store::{AgentRngs, AgentStore};
