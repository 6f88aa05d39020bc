//! The `follow`/`update` steering integrator (spec.md §4.3).
//!
//! Grounded on `dt-mobility::engine::MobilityEngine`'s shape (a small struct
//! the tick driver calls once per agent per tick) but replacing
//! teleport-at-arrival graph routing with continuous 2-D steering — this
//! simulator's agents move freely in the plane, not along a road network.

use space_agent::AgentStore;
use space_core::{AgentId, Vec2};

use crate::state::MotionParams;

/// Desired-velocity steering toward `target`, applying arrival behaviour
/// inside `params.target_approach_radius` (spec.md §4.3).
///
/// Returns the steering force to add onto `acceleration`. Resolves the §9
/// open question: when `target == position` exactly, `offset.normalized()`
/// returns `Vec2::ZERO` rather than dividing by a zero length, so the
/// steering force is zero instead of `NaN`.
pub fn steer_toward(position: Vec2, velocity: Vec2, target: Vec2, params: &MotionParams) -> Vec2 {
    let offset = target - position;
    let distance = offset.length();

    let desired = if params.target_approach_radius > 0.0 && distance < params.target_approach_radius
    {
        offset.normalized() * (params.max_speed * (distance / params.target_approach_radius))
    } else {
        offset.normalized() * params.max_speed
    };

    (desired - velocity).clamp_length(params.max_accel)
}

/// Ring buffer capacity for `AgentStore::memory_location`, matching the
/// original simulator's `agent_track_size` module constant.
pub const AGENT_TRACK_SIZE: usize = 400;

/// Slew `current_rotation` toward `atan2(velocity.y, velocity.x)` by at most
/// `max_angular_speed * dt`, wrapping the difference into `(-pi, pi]` first
/// so the agent always turns the short way round.
pub fn slew_rotation(current_rotation: f64, velocity: Vec2, max_angular_speed: f64, dt: f64) -> f64 {
    let desired_rotation = velocity.y.atan2(velocity.x);
    let mut diff = desired_rotation - current_rotation;
    while diff > std::f64::consts::PI {
        diff -= 2.0 * std::f64::consts::PI;
    }
    while diff <= -std::f64::consts::PI {
        diff += 2.0 * std::f64::consts::PI;
    }

    let max_step = max_angular_speed * dt;
    current_rotation + diff.clamp(-max_step, max_step)
}

/// Drives the `follow`/`update` kinematics for every agent, mirroring
/// `dt_mobility::MobilityEngine`'s role as the per-tick movement collaborator
/// the tick driver delegates to.
pub struct KinematicsEngine {
    pub params: MotionParams,
}

impl KinematicsEngine {
    pub fn new(params: MotionParams) -> Self {
        Self { params }
    }

    /// `follow(target)`: accumulate a steering force toward `target` onto
    /// `agent`'s acceleration. May be called more than once per tick before
    /// [`Self::update`] — forces simply add.
    pub fn follow(&self, agents: &mut AgentStore, agent: AgentId, target: Vec2) {
        let i = agent.index();
        let force = steer_toward(agents.position[i], agents.velocity[i], target, &self.params);
        agents.acceleration_mut()[i] += force;
    }

    /// `update(dt)`: integrate velocity and position, reset acceleration,
    /// accumulate `distance_moved`, push the position ring, and slew
    /// rotation toward the velocity heading.
    pub fn update(&self, agents: &mut AgentStore, agent: AgentId, dt: f64) {
        let i = agent.index();

        let accel = agents.acceleration_mut()[i];
        let mut velocity = agents.velocity[i] + accel * dt;
        velocity = velocity.clamp_length(self.params.max_speed);
        let position = agents.position[i] + velocity * dt;

        agents.distance_moved[i] += velocity.length() * dt;
        agents.position[i] = position;
        agents.velocity[i] = velocity;
        agents.acceleration_mut()[i] = Vec2::ZERO;
        agents.push_memory(agent, position);

        agents.rotation[i] =
            slew_rotation(agents.rotation[i], velocity, self.params.max_angular_speed, dt);
    }

    /// Halt an agent's motion this tick — CBBA's
    /// `execute_movements_during_convergence == false` path and GRAPE's
    /// `stop_moving` blackboard flag both route through here, mirroring
    /// `Agent.reset_movement` in the original source.
    pub fn halt(&self, agents: &mut AgentStore, agent: AgentId) {
        let i = agent.index();
        agents.velocity[i] = Vec2::ZERO;
        agents.acceleration_mut()[i] = Vec2::ZERO;
    }
}
