//! # quadsim
//!
//! A minimal quadrotor flight simulator built as a reinforcement-learning
//! environment. An external agent proposes an action each step, the
//! simulator advances 6-DOF rigid-body state by one fixed time step, and a
//! task layer converts the resulting state into a scalar reward and an
//! episode-termination signal.
//!
//! ## The Crates
//!
//! -   **[`physics`]:** the leaf simulator. One rigid body, explicit
//!     fixed-step integration under a bounded external force, ground clamp,
//!     episode clock. No knowledge of rewards or goals.
//! -   **[`tasks`]:** the task layer. The Gym-style `Env` contract, the
//!     task presets (reach-target, takeoff, hover, hover-hold), reward
//!     policies, action-space remapping and action repeat.
//! -   **`quadsim`:** this crate. The binary gluing it all together: CLI,
//!     episode loop against a pluggable agent, and CSV trajectory/reward
//!     logging. No algorithmic content.
//!
//! The learning agent itself is an external collaborator: anything that
//! implements the driver's `Agent` trait (`state -> action`) can be plugged
//! into the episode loop. The bundled random agent exists only to
//! smoke-drive environments.

pub use physics;
pub use tasks;
