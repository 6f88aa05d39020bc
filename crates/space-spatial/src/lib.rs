//! `space-spatial` — radius-based perception for the SPACE simulator
//! (spec.md §4.5).
//!
//! # Crate layout
//!
//! | Module        | Contents                                         |
//! |----------------|--------------------------------------------------|
//! | [`index`]      | `rstar` entry wrappers for agent/task points      |
//! | [`perception`] | `Perception` — the per-tick radius-query index    |
//!
//! A radius of `0.0` or less means "global": every entity is in range
//! regardless of distance (spec.md §9's resolved open question).

mod index;
pub mod perception;

#[cfg(test)]
mod tests;

pub use perception::Perception;
