//! Action-space shapes and their conversion to simulator forces.
//!
//! Tasks come in two actuator families: rotor-driven (four thrust commands,
//! or a single scalar broadcast to all rotors in simplified mode) and
//! force-driven (a 3-axis force, or a single vertical scalar). Both the
//! expansion of a reduced action and the conversion to a net force are pure,
//! fixed linear maps.

use physics::Vec3;

/// Number of rotors on the vehicle.
pub const ROTOR_COUNT: usize = 4;
/// Upper bound of a single rotor command.
pub const ROTOR_MAX: f32 = 900.0;
/// Bound of a force-driven action component (matches the simulator clamp).
pub const FORCE_BOUND: f32 = 25.0;

/// How an agent action maps onto the simulator's force input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionMap {
    /// Four rotor commands in `[0, ROTOR_MAX]`.
    Rotors,
    /// One scalar broadcast to all four rotors (simplified rotor control).
    UniformRotors,
    /// A full 3-axis force in `[-FORCE_BOUND, FORCE_BOUND]`.
    Force,
    /// One scalar applied as vertical force only (simplified force control).
    VerticalForce,
}

impl ActionMap {
    /// Dimension of the action the agent supplies.
    #[must_use]
    pub fn action_size(self) -> usize {
        match self {
            Self::Rotors => ROTOR_COUNT,
            Self::Force => 3,
            Self::UniformRotors | Self::VerticalForce => 1,
        }
    }

    /// Dimension of the full actuator vector after expansion.
    #[must_use]
    pub fn actuator_size(self) -> usize {
        match self {
            Self::Rotors | Self::UniformRotors => ROTOR_COUNT,
            Self::Force | Self::VerticalForce => 3,
        }
    }

    /// Inclusive bounds for each action component.
    #[must_use]
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Self::Rotors | Self::UniformRotors => (0.0, ROTOR_MAX),
            Self::Force | Self::VerticalForce => (-FORCE_BOUND, FORCE_BOUND),
        }
    }

    /// Expand a reduced action into the full actuator vector.
    #[must_use]
    pub fn expand(self, action: &[f32]) -> Vec<f32> {
        debug_assert_eq!(action.len(), self.action_size());
        match self {
            Self::Rotors | Self::Force => action.to_vec(),
            Self::UniformRotors => vec![action[0]; ROTOR_COUNT],
            Self::VerticalForce => vec![0.0, 0.0, action[0]],
        }
    }

    /// Convert a full actuator vector into the net force fed to the
    /// simulator.
    ///
    /// Rotor commands use a fixed linear thrust map (mean command scaled by
    /// `FORCE_BOUND / ROTOR_MAX`), so a full-throttle uniform command
    /// saturates the simulator's force clamp exactly. Force vectors pass
    /// through unchanged.
    #[must_use]
    pub fn to_force(self, actuator: &[f32]) -> Vec3 {
        debug_assert_eq!(actuator.len(), self.actuator_size());
        match self {
            Self::Rotors | Self::UniformRotors => {
                let mean = actuator.iter().sum::<f32>() / ROTOR_COUNT as f32;
                Vec3::new(0.0, 0.0, mean * (FORCE_BOUND / ROTOR_MAX))
            }
            Self::Force | Self::VerticalForce => {
                Vec3::new(actuator[0], actuator[1], actuator[2])
            }
        }
    }
}
