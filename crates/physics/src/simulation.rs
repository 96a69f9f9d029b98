//! # Rigid-Body Simulation Core
//!
//! One body, explicit fixed-step integration, no collision geometry beyond a
//! ground plane at `z = 0`. The simulator is deliberately reward-agnostic:
//! callers apply a force each step and read the public state fields back.

use crate::config::SimConfig;
use crate::types::Vec3;

use std::f32::consts::TAU;

/// Rigid-body state plus the clock that bounds an episode.
///
/// All state fields are public so task layers and trajectory loggers can read
/// them directly. Mutation happens through [`advance`](Self::advance) and
/// [`reset`](Self::reset) only.
pub struct RigidBodySim {
    /// Position in metres. Invariant: `position.z >= 0` (ground clamp).
    pub position: Vec3,
    /// Euler angles (roll, pitch, yaw) wrapped into `[0, 2*pi)`.
    pub orientation: Vec3,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    /// Elapsed simulation time; always `steps * dt`, so it cannot drift.
    pub time: f32,
    /// Number of completed `advance` calls since the last reset.
    pub steps: u32,
    /// Set once the clock exceeds `runtime` or the body hits the ground with
    /// `ground_terminates` enabled. Never cleared except by `reset`.
    pub terminated: bool,
    pub config: SimConfig,
}

impl RigidBodySim {
    #[must_use]
    pub fn new(config: SimConfig) -> Self {
        Self {
            position: config.init_position,
            orientation: config.init_orientation,
            linear_velocity: config.init_velocity,
            angular_velocity: config.init_angular_velocity,
            time: 0.0,
            steps: 0,
            terminated: false,
            config,
        }
    }

    /// Restore the initial state and zero the clock. Always succeeds.
    pub fn reset(&mut self) {
        self.position = self.config.init_position;
        self.orientation = self.config.init_orientation;
        self.linear_velocity = self.config.init_velocity;
        self.angular_velocity = self.config.init_angular_velocity;
        self.time = 0.0;
        self.steps = 0;
        self.terminated = false;
    }

    /// Advance by one `dt` under an external force and no torque.
    pub fn advance(&mut self, force: Vec3) {
        self.advance_with_torque(force, Vec3::ZERO);
    }

    /// Advance by one `dt` under an external force and torque.
    ///
    /// The force is silently clamped per axis into
    /// `[-force_limit, force_limit]`; implausible inputs are never rejected
    /// so the caller's reward signal stays defined at every step. Position
    /// uses the kinematic update `dx = v*dt + a*dt^2/2` rather than a naive
    /// Euler step.
    ///
    /// Calling this on a terminated simulator is a caller error: the task
    /// layer must gate on `done` and reset first. Behavior past termination
    /// is undefined-unless-avoided (debug builds assert).
    pub fn advance_with_torque(&mut self, force: Vec3, torque: Vec3) {
        debug_assert!(
            !self.terminated,
            "advance called on a terminated simulator; reset it first"
        );

        let dt = self.config.dt;
        let force = force.clamp_axes(self.config.force_limit);
        let accel = force - Vec3::new(0.0, 0.0, self.config.gravity);

        self.position += self.linear_velocity * dt + accel * (0.5 * dt * dt);
        self.linear_velocity += accel * dt;

        self.orientation += self.angular_velocity * dt + torque * (0.5 * dt * dt);
        self.orientation = wrap_angles(self.orientation);
        self.angular_velocity += torque * dt;

        if self.position.z < 0.0 {
            self.position.z = 0.0;
            self.linear_velocity.z = 0.0;
            if self.config.ground_terminates {
                self.terminated = true;
            }
        }

        self.steps += 1;
        self.time = self.steps as f32 * dt;
        if self.time > self.config.runtime {
            self.terminated = true;
        }
    }

    /// Pose as six reals (position then Euler angles), matching the order
    /// trajectory logs expect.
    #[must_use]
    pub fn pose(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
        ]
    }
}

fn wrap_angles(angles: Vec3) -> Vec3 {
    Vec3::new(
        angles.x.rem_euclid(TAU),
        angles.y.rem_euclid(TAU),
        angles.z.rem_euclid(TAU),
    )
}
