//! Movement domain: locomotion state transitions.

use crate::movement::LocomotionState;

impl LocomotionState {
    /// Evaluate one transition from fresh sensor data.
    ///
    /// `Dead` is absorbing. Dash and wall-jump excursions read as `Jumping`
    /// like any other airborne tick.
    pub fn next(self, dead: bool, grounded: bool, horizontal_speed: f32) -> Self {
        if dead {
            return LocomotionState::Dead;
        }

        let moving = horizontal_speed != 0.0;
        match self {
            LocomotionState::Dead => LocomotionState::Dead,
            LocomotionState::Idle if !grounded => LocomotionState::Jumping,
            LocomotionState::Idle if moving => LocomotionState::Walking,
            LocomotionState::Walking if !grounded => LocomotionState::Jumping,
            LocomotionState::Walking if !moving => LocomotionState::Idle,
            LocomotionState::Jumping if grounded && moving => LocomotionState::Walking,
            LocomotionState::Jumping if grounded => LocomotionState::Idle,
            unchanged => unchanged,
        }
    }
}
