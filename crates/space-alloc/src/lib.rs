//! `space-alloc` — the three pluggable task-allocation strategies (Greedy,
//! GRAPE, CBBA) for the SPACE simulator, behind a common [`Allocator`] trait.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|--------------------------------------------------------|
//! | [`allocator`] | `Allocator` trait, `DecideInput`                        |
//! | [`message`]   | `Message` — tagged per-strategy broadcast payload       |
//! | [`board`]     | `MessageBoard` — per-tick outbox/inbox storage           |
//! | [`greedy`]    | `FirstClaimGreedy`                                       |
//! | [`grape`]     | `GRAPE`                                                  |
//! | [`cbba`]      | `CBBA`                                                   |
//! | [`error`]     | `AllocError`, `AllocResult<T>`                           |

pub mod allocator;
pub mod board;
pub mod cbba;
pub mod error;
pub mod greedy;
pub mod grape;
pub mod message;

#[cfg(test)]
mod tests;

pub use allocator::{Allocator, DecideInput};
pub use board::MessageBoard;
pub use cbba::{CbbaAgentParams, CbbaConfig, CbbaPhase, CbbaState, CBBA};
pub use error::{AllocError, AllocResult};
pub use greedy::{FirstClaimGreedy, FirstClaimGreedyConfig, GreedyMode};
pub use grape::{GrapeConfig, GrapeState, PartitionInit, GRAPE};
pub use message::Message;
