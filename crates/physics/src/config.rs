//! Immutable per-episode simulator configuration.

use crate::types::Vec3;

/// Configuration for a [`RigidBodySim`](crate::RigidBodySim).
///
/// Held by the simulator for the lifetime of an episode; `reset` restores the
/// `init_*` fields, everything else parameterises the integrator.
#[derive(Clone, Copy, Debug)]
pub struct SimConfig {
    /// Initial position in metres.
    pub init_position: Vec3,
    /// Initial orientation as Euler angles (roll, pitch, yaw) in radians.
    pub init_orientation: Vec3,
    /// Initial linear velocity in m/s.
    pub init_velocity: Vec3,
    /// Initial angular velocity in rad/s.
    pub init_angular_velocity: Vec3,
    /// Episode time budget in seconds.
    pub runtime: f32,
    /// Fixed integration step in seconds.
    pub dt: f32,
    /// Constant downward acceleration in m/s^2 (positive value pulls down).
    pub gravity: f32,
    /// Symmetric per-axis clamp applied to every external force.
    pub force_limit: f32,
    /// Whether hitting the ground ends the episode.
    ///
    /// The ground clamp itself always applies; this only controls whether the
    /// impact also terminates (the "out of bounds" condition task layers
    /// distinguish from a timeout).
    pub ground_terminates: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            init_position: Vec3::ZERO,
            init_orientation: Vec3::ZERO,
            init_velocity: Vec3::ZERO,
            init_angular_velocity: Vec3::ZERO,
            runtime: 5.0,
            dt: 0.1,
            gravity: 10.0,
            force_limit: 25.0,
            ground_terminates: true,
        }
    }
}
