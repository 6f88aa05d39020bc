//! `space-core` — foundational types for the SPACE task-allocation simulator.
//!
//! This crate is a dependency of every other `space-*` crate. It intentionally
//! has no `space-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                         |
//! |---------------|---------------------------------------------------|
//! | [`ids`]       | `AgentId`, `TaskId`                               |
//! | [`geo`]       | `Vec2`, planar distance helpers                   |
//! | [`time`]      | `Tick`, `SimClock`                                |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)          |
//! | [`error`]     | `CoreError`, `CoreResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `space-cli`'s config loader.                    |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Vec2;
pub use ids::{AgentId, TaskId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, Tick};
