//! # Quadrotor RL Tasks
//!
//! The task layer of the simulator: everything that turns raw rigid-body
//! state into the `(observation, reward, done)` signal a learning agent
//! consumes.
//!
//! ## Key Components
//!
//! -   **[`Env`]:** the Gym-style `reset`/`step` contract, in [`env`].
//! -   **[`Task`]:** one environment instance, composing a
//!     [`physics::RigidBodySim`] with a goal, a reward policy and per-episode
//!     bookkeeping, in [`task`]. Constructed through the presets
//!     ([`Task::takeoff`], [`Task::hover`], ...).
//! -   **[`RewardPolicy`]:** the tagged set of reward/termination variants,
//!     in [`policy`]. Each variant overrides only the reward function, the
//!     task-finished predicate and the episode bookkeeping reset.
//! -   **[`ActionMap`]:** deterministic expansion of reduced action spaces
//!     and the rotor-to-force conversion, in [`action`].
//!
//! Episodes are strictly single-threaded and independent: each `Task` owns
//! its simulator and cursor, and `reset` starts a fresh trajectory. For
//! parallel data collection, construct one `Task` per worker.

pub mod action;
pub mod env;
pub mod policy;
pub mod task;

pub use action::ActionMap;
pub use env::Env;
pub use policy::{EpisodeCursor, RewardPolicy, TaskGoal};
pub use task::{Task, TaskConfig};
