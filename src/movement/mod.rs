//! Movement domain: kinematic platformer controller, plugin wiring and public exports.

mod components;
mod dash;
mod events;
mod horizontal;
mod jump;
mod locomotion;
mod resources;
mod sensors;
mod systems;
mod tick;
mod wall_jump;

#[cfg(feature = "dev-tools")]
mod dev;


pub use components::{
    DashTimer, Dead, Facing, GameLayer, JumpHold, LocomotionState, MovementState, Player,
    WallJumpWindow, layer_mask,
};
pub use dash::{advance_dash, try_start_dash};
pub use events::LocomotionChanged;
pub use horizontal::{horizontal_speed, update_facing};
pub use jump::{advance_hold, fall, try_start_jump};
pub use resources::{ControllerTuning, MotionProfile, MovementInput, MovementTuning};
pub use sensors::{GeometryProbe, SensorReadings, sense};
pub use tick::{MotionDriver, TickContext, TickOutcome};
pub use wall_jump::{expire_wall_jump, launch_direction, try_start_wall_jump};

#[cfg(feature = "dev-tools")]
pub use dev::{Ground, Wall, player_bundle, spawn_player, spawn_test_room};

use bevy::prelude::*;

use crate::config::load_controller_tuning;
use crate::movement::systems::{advance_controllers, read_input};

/// Loads tuning at startup and ticks every [`Player`] once per frame.
///
/// Needs avian's `PhysicsPlugins` and bevy's input plugin in the app.
pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<LocomotionChanged>()
            .add_systems(Startup, load_controller_tuning)
            .add_systems(
                Update,
                (read_input, advance_controllers)
                    .chain()
                    .run_if(resource_exists::<ControllerTuning>),
            );
    }
}
