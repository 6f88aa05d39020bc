//! `space-kinematics` — the `follow`/`update` steering integrator
//! (spec.md §4.3) for the SPACE simulator.
//!
//! # Crate layout
//!
//! | Module     | Contents                                            |
//! |------------|------------------------------------------------------|
//! | [`state`]  | `MotionParams` — shared max-speed/accel/angular caps |
//! | [`engine`] | `KinematicsEngine` — `follow`/`update`/`halt`         |
//!
//! # Steering model
//!
//! Each tick, the behaviour pipeline calls `KinematicsEngine::follow` zero or
//! more times (task execution steers toward the assigned task; exploration
//! steers toward a random waypoint) to accumulate a steering force onto
//! `AgentStore::acceleration`. The tick driver then calls
//! `KinematicsEngine::update` once per agent to integrate velocity and
//! position, reset acceleration to zero, and slew `rotation` toward the
//! velocity heading.
//!
//! There is no fallible path here: unlike `dt-mobility`'s routing engine,
//! which can fail to find a path, `follow`/`update` are total functions over
//! `Vec2` arithmetic (see [`engine::steer_toward`]'s handling of the
//! zero-distance case).

pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;

pub use engine::{slew_rotation, steer_toward, KinematicsEngine, AGENT_TRACK_SIZE};
pub use state::MotionParams;
