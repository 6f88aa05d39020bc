//! `space-behavior` — the generic behaviour-tree evaluator for the SPACE
//! simulator (spec.md §4.4).
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|-------------------------------------------------------------|
//! | [`tree`]   | `Status`, `ActionKind`, `Node`, `BehaviorActions`, `evaluate` |
//! | [`loader`] | `parse_tree` — hierarchical-tag loader (spec.md §6)          |
//! | [`noop`]   | `NoopActions` — a placeholder for tests                      |
//! | [`error`]  | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! This crate only knows the evaluator and the loader; the four callbacks'
//! real bodies (sense/decide/execute/explore) need `space-spatial` and
//! `space-alloc`, both of which sit *above* this crate in the dependency
//! order (SPEC_FULL.md §0), so they are implemented in `space-sim` against
//! the [`BehaviorActions`] trait defined here — the same split the teacher
//! draws between `dt-behavior::BehaviorModel` (the trait) and `dt-sim`
//! (the concrete model driving a run).

pub mod error;
pub mod loader;
pub mod noop;
pub mod tree;


pub use error::{BehaviorError, BehaviorResult};
pub use loader::parse_tree;
pub use noop::NoopActions;
pub use tree::{evaluate, ActionKind, BehaviorActions, Node, Status};
