//! Per-run motion parameters shared by every agent's kinematics update.
//!
//! The original simulator reads `max_speed`/`max_accel`/`max_angular_speed`/
//! `target_approaching_radius` off `AgentConfig`, and every agent in a run is
//! constructed with the same values — there is no per-agent tuning. We keep
//! that shape rather than inflating `AgentStore` with four more SoA `Vec`s
//! that would always hold identical values.

/// Bounded motion parameters applied uniformly to every agent in a run.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionParams {
    pub max_speed: f64,
    pub max_accel: f64,
    /// Radians per second.
    pub max_angular_speed: f64,
    /// Distance from a target inside which `follow` begins scaling speed
    /// down for an arrival behaviour, rather than approaching at full speed.
    pub target_approach_radius: f64,
}
