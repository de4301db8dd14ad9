//! Kinematic 2D platformer controller on bevy and avian2d.
//!
//! [`movement::MovementState::tick`] turns one frame of input and geometry
//! probes into a velocity and a locomotion state. [`movement::PlatformerPlugin`]
//! runs it for every [`movement::Player`] and writes the result to the body's
//! `LinearVelocity`.

pub mod config;
pub mod movement;

pub mod prelude {
    pub use crate::config::{ConfigLoadError, TuningError, load_tuning_file};
    pub use crate::movement::{
        ControllerTuning, Dead, Facing, GameLayer, GeometryProbe, LocomotionChanged,
        LocomotionState, MotionDriver, MovementInput, MovementState, MovementTuning,
        PlatformerPlugin, Player, TickContext, TickOutcome,
    };
}
