//! Movement domain: components and physics layers for the platformer controller.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

/// Build a query mask from a list of layers. An empty list matches nothing.
pub fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

#[derive(Component, Debug)]
pub struct Player;

/// Inserted by gameplay code to kill the character. Picked up on the next tick.
#[derive(Component, Debug)]
pub struct Dead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Discrete locomotion state. Transitions live in [`crate::movement::locomotion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocomotionState {
    #[default]
    Idle,
    Walking,
    Jumping,
    Dead,
}

/// Active dash. Exists only while the dash owns the velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashTimer {
    pub remaining: f32,
}

/// Active jump-hold window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpHold {
    pub remaining: f32,
}

/// Active wall jump, ending at a real-time clock reading (seconds).
///
/// Kept in `f64` so the deadline stays sharp however long the app has run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallJumpWindow {
    pub ends_at: f64,
}

impl WallJumpWindow {
    pub fn expired(&self, now: f64) -> bool {
        now >= self.ends_at
    }
}

/// Per-character motion state, mutated once per tick by [`MovementState::tick`].
///
/// `velocity` is the single value handed to the physics body every tick.
/// The optional sub-states are created by their trigger and dropped on expiry,
/// so "dashing" and "has a dash timer" can never disagree.
#[derive(Component, Debug, Default, Clone)]
pub struct MovementState {
    pub on_ground: bool,
    pub on_wall: bool,
    pub facing: Facing,
    pub locomotion: LocomotionState,
    pub previous_locomotion: LocomotionState,
    pub velocity: Vec2,
    pub is_dead: bool,
    pub dash: Option<DashTimer>,
    pub jump_hold: Option<JumpHold>,
    pub wall_jump: Option<WallJumpWindow>,
}

impl MovementState {
    /// Set the death flag. Motion freezes from the next tick on.
    pub fn kill(&mut self) {
        self.is_dead = true;
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }

    pub fn is_jump_holding(&self) -> bool {
        self.jump_hold.is_some()
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.wall_jump.is_some()
    }

    pub fn is_walking(&self) -> bool {
        self.velocity.x != 0.0
    }

    pub fn is_grounded(&self) -> bool {
        self.on_ground
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_mask_combines_layers() {
        let mask = layer_mask(&[GameLayer::Ground, GameLayer::Wall]);
        assert_eq!(
            mask.0,
            GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits()
        );
        assert_eq!(layer_mask(&[]).0, 0);
    }

    #[test]
    fn fresh_state_faces_right_and_idles() {
        let state = MovementState::default();
        assert_eq!(state.facing(), Facing::Right);
        assert_eq!(state.locomotion, LocomotionState::Idle);
        assert!(!state.is_dashing());
        assert!(!state.is_walking());
    }

    #[test]
    fn wall_jump_window_expires_at_deadline() {
        let window = WallJumpWindow { ends_at: 1.2 };
        assert!(!window.expired(1.1));
        assert!(window.expired(1.2));
    }
}
