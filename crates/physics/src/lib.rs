//! # Quadrotor Rigid-Body Simulator
//!
//! A minimal 6-DOF rigid-body simulator intended as the physics layer of a
//! reinforcement-learning environment. The crate owns the physical state of a
//! single body (position, Euler-angle orientation, linear and angular
//! velocity, elapsed time) and advances it by a fixed time step under a
//! bounded external force.
//!
//! ## Key Components
//!
//! -   **[`Vec3`]:** a small POD vector type used for positions, velocities
//!     and forces, defined in the [`types`] module.
//! -   **[`SimConfig`]:** the immutable per-episode configuration (initial
//!     state, time step, gravity, force clamp), defined in [`config`].
//! -   **[`RigidBodySim`]:** the simulator itself, in the [`simulation`]
//!     module. It knows nothing about rewards or goals; higher layers read
//!     its public state fields and drive it through
//!     [`advance`](RigidBodySim::advance).
//!
//! ## Usage
//!
//! ```rust
//! use physics::{RigidBodySim, SimConfig, Vec3};
//!
//! let mut sim = RigidBodySim::new(SimConfig::default());
//! while !sim.terminated {
//!     sim.advance(Vec3::new(0.0, 0.0, 12.0));
//! }
//! ```

pub mod config;
pub mod simulation;
pub mod types;

pub use config::SimConfig;
pub use simulation::RigidBodySim;
pub use types::Vec3;
