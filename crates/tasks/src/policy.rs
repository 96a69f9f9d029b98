//! Reward shaping policies.
//!
//! Each task variant differs only in its reward function, its
//! task-finished predicate and the per-episode bookkeeping it needs, so the
//! variants live in one tagged enum instead of a subclass hierarchy.

use physics::{RigidBodySim, Vec3};

/// Target configuration a task steers toward. Immutable for the task's
/// lifetime.
#[derive(Clone, Copy, Debug)]
pub struct TaskGoal {
    /// Full 3D target position (the default policy penalises L1 distance to
    /// it).
    pub target_position: Vec3,
    /// Target height for the altitude-shaped policies.
    pub target_z: f32,
    /// Seconds of sustained hovering that complete the hover-hold task.
    pub hover_duration: f32,
}

/// Per-episode reward bookkeeping. Zeroed on every reset, mutated only
/// while computing rewards.
#[derive(Clone, Copy, Debug, Default)]
pub struct EpisodeCursor {
    /// Simulation timestamp of the previous reward evaluation.
    pub last_time: f32,
    /// Accumulated time spent within tolerance of the target height.
    pub hover_time: f32,
}

/// The reward/termination variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardPolicy {
    /// L1 distance penalty toward `target_position`; never self-finishes.
    ReachTarget,
    /// Climb to `target_z`; +50 bonus and early completion on arrival.
    Takeoff,
    /// Hold near `target_z` under shaped penalties with a flat floor of 3.0
    /// on negative totals. Sustained hovering never completes this variant;
    /// that check is permanently disabled here and only the hover-hold
    /// variant keeps it.
    Hover,
    /// Wrench-driven hover: accumulate time within 0.5 of the target height
    /// and finish after `hover_duration` seconds, with a +50/-50 terminal
    /// bonus depending on whether completion or the timeout ended it.
    HoverHold,
}

/// Dead-band: zero below the threshold, linear above it.
fn dead_band(x: f32, threshold: f32) -> f32 {
    (x - threshold).max(0.0)
}

/// Penalty on twisting away from level flight: `sum(1 - cos(angle))` over
/// the three Euler angles, dead-banded.
fn twist_penalty(orientation: Vec3, threshold: f32) -> f32 {
    let twist =
        (1.0 - orientation.x.cos()) + (1.0 - orientation.y.cos()) + (1.0 - orientation.z.cos());
    dead_band(twist, threshold)
}

impl RewardPolicy {
    /// Reward for the state the simulator is currently in. Called once per
    /// simulator advance; the cursor carries bookkeeping between calls.
    pub fn reward(self, sim: &RigidBodySim, goal: &TaskGoal, cursor: &mut EpisodeCursor) -> f32 {
        let p = sim.position;
        match self {
            Self::ReachTarget => 1.0 - 0.3 * (p - goal.target_position).abs().sum(),
            Self::Takeoff => {
                let mut reward = 30.0;

                let height_penalty = (goal.target_z - p.z).abs();
                let xy_shift_penalty = (p.x * p.x + p.y * p.y).sqrt();
                let rotation_penalty = dead_band(sim.angular_velocity.abs().sum(), 0.5);

                reward -= height_penalty * 0.05
                    + xy_shift_penalty * 0.01
                    + twist_penalty(sim.orientation, 0.1) * 2.0
                    + rotation_penalty * 0.5;

                if self.finished(sim, goal, cursor) {
                    // bonus for crossing the target height
                    reward += 50.0;
                }
                reward
            }
            Self::Hover => {
                let mut reward = 20.0;

                let target_z_distance = (goal.target_z - p.z).abs();
                let height_penalty = target_z_distance.powf(0.7);
                let xy_shift_penalty = (p.x * p.x + p.y * p.y).sqrt();
                let too_far_penalty = dead_band(target_z_distance, 120.0).powi(2);
                let rotation_penalty = dead_band(sim.angular_velocity.abs().sum(), 0.5);

                reward -= height_penalty * 0.3
                    + xy_shift_penalty * 0.01
                    + too_far_penalty * 0.1
                    + twist_penalty(sim.orientation, 0.1) * 3.0
                    + rotation_penalty * 0.5;

                // Bonus for being close to the target height.
                reward += (5.0 - target_z_distance).max(0.0) * 10.0;

                if reward < 0.0 {
                    reward = 3.0;
                }
                reward
            }
            Self::HoverHold => {
                let timestamp = sim.time;
                let target_z_distance = (goal.target_z - p.z).abs();

                let mut reward = -target_z_distance.min(20.0);
                reward -= (p.x.abs() + p.y.abs()) * 0.1;

                if target_z_distance < 0.5 {
                    cursor.hover_time += timestamp - cursor.last_time;
                    reward += 2.0 * cursor.hover_time;
                }

                if self.finished(sim, goal, cursor) {
                    reward += 50.0;
                } else if sim.time > sim.config.runtime {
                    // The timeout branch carries the opposite terminal sign;
                    // an out-of-bounds end gets neither.
                    reward -= 50.0;
                }

                cursor.last_time = timestamp;
                reward
            }
        }
    }

    /// Whether the task completed on its own, independent of timeout or
    /// out-of-bounds termination.
    #[must_use]
    pub fn finished(self, sim: &RigidBodySim, goal: &TaskGoal, cursor: &EpisodeCursor) -> bool {
        match self {
            Self::ReachTarget | Self::Hover => false,
            Self::Takeoff => sim.position.z >= goal.target_z,
            Self::HoverHold => cursor.hover_time >= goal.hover_duration,
        }
    }

    /// Re-seed the cursor for a fresh episode.
    pub fn reset_cursor(self, sim: &RigidBodySim, cursor: &mut EpisodeCursor) {
        *cursor = EpisodeCursor {
            last_time: sim.time,
            hover_time: 0.0,
        };
    }
}
