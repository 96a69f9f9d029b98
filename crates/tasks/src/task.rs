//! The agent-facing task: goal + reward policy wrapped around one simulator.

use crate::action::ActionMap;
use crate::env::Env;
use crate::policy::{EpisodeCursor, RewardPolicy, TaskGoal};

use physics::{RigidBodySim, SimConfig, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Floats per simulator step in the observation vector:
/// position(3) ++ orientation(3) ++ linear velocity(3) ++ angular
/// velocity(3). The ordering is a contract with downstream consumers.
pub const STATE_DIMS: usize = 12;

/// Construction parameters shared by all task presets.
#[derive(Clone, Copy, Debug)]
pub struct TaskConfig {
    pub init_position: Vec3,
    /// Initial Euler angles (roll, pitch, yaw).
    pub init_orientation: Vec3,
    pub init_velocity: Vec3,
    pub init_angular_velocity: Vec3,
    /// Episode time budget in seconds.
    pub runtime: f32,
    pub target_position: Vec3,
    /// Select the reduced action space and its fixed expansion rule.
    pub simplified: bool,
    /// Number of consecutive simulator steps one agent action is applied
    /// for.
    pub action_repeat: usize,
    /// Seed for the episode-perturbation RNG; same seed, same trajectory.
    pub seed: u64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            init_position: Vec3::ZERO,
            init_orientation: Vec3::ZERO,
            init_velocity: Vec3::ZERO,
            init_angular_velocity: Vec3::ZERO,
            runtime: 5.0,
            target_position: Vec3::new(0.0, 0.0, 10.0),
            simplified: false,
            action_repeat: 1,
            seed: 0,
        }
    }
}

/// One environment instance: a simulator, a goal, a reward policy and the
/// per-episode bookkeeping. Owns all of them exclusively; never share a
/// task (or its simulator) across threads, construct one per worker
/// instead.
pub struct Task {
    sim: RigidBodySim,
    goal: TaskGoal,
    policy: RewardPolicy,
    actions: ActionMap,
    cursor: EpisodeCursor,
    action_repeat: usize,
    rng: StdRng,
    name: String,
}

impl Task {
    /// Default reach-the-target task with the full rotor action space.
    #[must_use]
    pub fn reach_target(config: TaskConfig) -> Self {
        let goal = TaskGoal {
            target_position: config.target_position,
            target_z: config.target_position.z,
            hover_duration: 0.0,
        };
        Self::assemble(RewardPolicy::ReachTarget, "reach_target", goal, true, config)
    }

    /// Lift off from `start_z` and reach `target_z`.
    #[must_use]
    pub fn takeoff(target_z: f32, start_z: f32, simplified: bool, seed: u64) -> Self {
        let config = TaskConfig {
            init_position: Vec3::new(0.0, 0.0, start_z),
            target_position: Vec3::new(0.0, 0.0, target_z),
            simplified,
            seed,
            ..TaskConfig::default()
        };
        let goal = TaskGoal {
            target_position: config.target_position,
            target_z,
            hover_duration: 0.0,
        };
        Self::assemble(RewardPolicy::Takeoff, "takeoff", goal, true, config)
    }

    /// Hold near `target_z` under the shaped hover reward.
    #[must_use]
    pub fn hover(target_z: f32, start_z: f32, simplified: bool, seed: u64) -> Self {
        let config = TaskConfig {
            init_position: Vec3::new(0.0, 0.0, start_z),
            target_position: Vec3::new(0.0, 0.0, target_z),
            runtime: 10.0,
            simplified,
            seed,
            ..TaskConfig::default()
        };
        let goal = TaskGoal {
            target_position: config.target_position,
            target_z,
            hover_duration: 3.0,
        };
        Self::assemble(RewardPolicy::Hover, "hover", goal, true, config)
    }

    /// Wrench-driven hover: force actions, completion after three seconds
    /// of sustained hovering, no ground termination.
    #[must_use]
    pub fn hover_hold(start_z: f32, target_z: f32, simplified: bool, seed: u64) -> Self {
        let config = TaskConfig {
            init_position: Vec3::new(0.0, 0.0, start_z),
            target_position: Vec3::new(0.0, 0.0, target_z),
            runtime: 10.0,
            simplified,
            seed,
            ..TaskConfig::default()
        };
        let goal = TaskGoal {
            target_position: config.target_position,
            target_z,
            hover_duration: 3.0,
        };
        Self::assemble(RewardPolicy::HoverHold, "hover_hold", goal, false, config)
    }

    fn assemble(
        policy: RewardPolicy,
        name: &str,
        goal: TaskGoal,
        ground_terminates: bool,
        config: TaskConfig,
    ) -> Self {
        let actions = match (policy, config.simplified) {
            (RewardPolicy::HoverHold, false) => ActionMap::Force,
            (RewardPolicy::HoverHold, true) => ActionMap::VerticalForce,
            (_, false) => ActionMap::Rotors,
            (_, true) => ActionMap::UniformRotors,
        };
        let name = if config.simplified {
            format!("{name}_simplified")
        } else {
            name.to_owned()
        };

        let sim = RigidBodySim::new(SimConfig {
            init_position: config.init_position,
            init_orientation: config.init_orientation,
            init_velocity: config.init_velocity,
            init_angular_velocity: config.init_angular_velocity,
            runtime: config.runtime,
            ground_terminates,
            ..SimConfig::default()
        });

        Self {
            sim,
            goal,
            policy,
            actions,
            cursor: EpisodeCursor::default(),
            action_repeat: config.action_repeat.max(1),
            rng: StdRng::seed_from_u64(config.seed),
            name,
        }
    }

    /// Apply the same agent action for this many consecutive simulator
    /// steps per `step` call. Observation size grows accordingly.
    #[must_use]
    pub fn with_action_repeat(mut self, repeat: usize) -> Self {
        self.action_repeat = repeat.max(1);
        self
    }

    /// Task identifier used for trajectory log file names.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the simulator, for trajectory logging.
    #[must_use]
    pub fn sim(&self) -> &RigidBodySim {
        &self.sim
    }

    /// The episode ran out its time budget.
    #[must_use]
    pub fn timeout(&self) -> bool {
        self.sim.time > self.sim.config.runtime
    }

    /// The simulator terminated before the time budget elapsed (e.g. ground
    /// impact).
    #[must_use]
    pub fn out_of_bounds(&self) -> bool {
        self.sim.terminated && self.sim.time < self.sim.config.runtime
    }

    /// The task completed on its own terms (policy-specific).
    #[must_use]
    pub fn finished(&self) -> bool {
        self.policy.finished(&self.sim, &self.goal, &self.cursor)
    }

    #[must_use]
    pub fn done(&self) -> bool {
        self.timeout() || self.out_of_bounds() || self.finished()
    }

    fn state_vector(&self) -> [f32; STATE_DIMS] {
        let p = self.sim.position;
        let o = self.sim.orientation;
        let v = self.sim.linear_velocity;
        let w = self.sim.angular_velocity;
        [p.x, p.y, p.z, o.x, o.y, o.z, v.x, v.y, v.z, w.x, w.y, w.z]
    }
}

impl Env for Task {
    fn step(&mut self, action: &[f32]) -> (Vec<f32>, f32, bool) {
        let actuator = self.actions.expand(action);
        let force = self.actions.to_force(&actuator);

        let mut reward = 0.0;
        let mut obs = Vec::with_capacity(self.obs_size());
        for _ in 0..self.action_repeat {
            self.sim.advance(force);
            reward += self.policy.reward(&self.sim, &self.goal, &mut self.cursor);
            obs.extend_from_slice(&self.state_vector());
            if self.sim.terminated {
                // Pad the remaining repeats with the final state; physics
                // and reward accumulation stop here.
                let last = self.state_vector();
                while obs.len() < self.obs_size() {
                    obs.extend_from_slice(&last);
                }
                break;
            }
        }

        let done = self.done();
        if done {
            tracing::debug!(
                task = %self.name,
                time = self.sim.time,
                timeout = self.timeout(),
                out_of_bounds = self.out_of_bounds(),
                finished = self.finished(),
                "episode ended"
            );
        }
        (obs, reward, done)
    }

    fn reset(&mut self) -> Vec<f32> {
        self.sim.reset();

        // Perturb the starting height so episodes do not all begin from the
        // exact configured pose. The spread is 2% of the height, kept within
        // [1, 10] metres, drawn from this task's seeded RNG.
        let init_z = self.sim.config.init_position.z;
        let sigma = (init_z * 0.02).clamp(1.0, 10.0);
        let z = Normal::new(init_z, sigma)
            .map(|dist| dist.sample(&mut self.rng))
            .unwrap_or(init_z);
        self.sim.position.z = z.max(0.0);

        self.policy.reset_cursor(&self.sim, &mut self.cursor);
        tracing::debug!(task = %self.name, start_z = self.sim.position.z, "episode reset");

        let state = self.state_vector();
        let mut obs = Vec::with_capacity(self.obs_size());
        for _ in 0..self.action_repeat {
            obs.extend_from_slice(&state);
        }
        obs
    }

    fn obs_size(&self) -> usize {
        self.action_repeat * STATE_DIMS
    }

    fn action_size(&self) -> usize {
        self.actions.action_size()
    }

    fn action_bounds(&self) -> (f32, f32) {
        self.actions.bounds()
    }
}
