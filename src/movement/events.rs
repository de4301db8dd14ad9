//! Movement domain: messages emitted by the controller.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

use crate::movement::LocomotionState;

/// Fired on the tick a character's locomotion state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocomotionChanged {
    pub entity: Entity,
    pub from: LocomotionState,
    pub to: LocomotionState,
}

impl Message for LocomotionChanged {}
