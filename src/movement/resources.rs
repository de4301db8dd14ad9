//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{TuningError, validate_tuning};
use crate::movement::GameLayer;

/// Designer-facing tuning, loaded from `assets/data/controller.ron`.
///
/// Only reaches the app wrapped in a validated [`ControllerTuning`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub acceleration_time: f32,
    pub deceleration_time: f32,
    pub apex_height: f32,
    pub apex_time: f32,
    /// Distance below the character's origin where the ground box is centred
    pub ground_check_offset: f32,
    /// Full width and height of the ground box
    pub ground_check_size: [f32; 2],
    pub ground_layers: Vec<GameLayer>,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub min_jump_height: f32,
    pub max_jump_height: f32,
    pub jump_control_time: f32,
    pub wall_check_distance: f32,
    pub wall_layers: Vec<GameLayer>,
    pub wall_jump_force_x: f32,
    pub wall_jump_force_y: f32,
    /// Real-time seconds the wall jump suppresses gravity
    pub wall_jump_duration: f32,
}

impl MovementTuning {
    pub fn ground_check_half_extents(&self) -> Vec2 {
        Vec2::from(self.ground_check_size) * 0.5
    }
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 5.0,
            acceleration_time: 0.25,
            deceleration_time: 0.15,
            apex_height: 3.0,
            apex_time: 0.5,
            ground_check_offset: 0.5,
            ground_check_size: [0.4, 0.1],
            ground_layers: vec![GameLayer::Ground],
            dash_speed: 15.0,
            dash_duration: 0.2,
            min_jump_height: 1.0,
            max_jump_height: 3.0,
            jump_control_time: 0.2,
            wall_check_distance: 0.5,
            wall_layers: vec![GameLayer::Wall],
            wall_jump_force_x: 5.0,
            wall_jump_force_y: 7.0,
            wall_jump_duration: 0.2,
        }
    }
}

/// Rates derived once from [`MovementTuning`]. Never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    pub acceleration_rate: f32,
    pub deceleration_rate: f32,
    /// Negative: points down
    pub gravity: f32,
    pub initial_jump_speed: f32,
    /// Vertical speed the jump-hold window eases toward
    pub max_jump_speed: f32,
}

impl MotionProfile {
    fn derive(tuning: &MovementTuning) -> Self {
        let gravity = -2.0 * tuning.apex_height / (tuning.apex_time * tuning.apex_time);
        Self {
            acceleration_rate: tuning.max_speed / tuning.acceleration_time,
            deceleration_rate: tuning.max_speed / tuning.deceleration_time,
            gravity,
            initial_jump_speed: 2.0 * tuning.apex_height / tuning.apex_time,
            max_jump_speed: (2.0 * gravity.abs() * tuning.max_jump_height).sqrt(),
        }
    }
}

/// Validated tuning plus its derived profile. The controller only runs against this.
#[derive(Resource, Debug, Clone)]
pub struct ControllerTuning {
    tuning: MovementTuning,
    profile: MotionProfile,
}

impl ControllerTuning {
    pub fn new(tuning: MovementTuning) -> Result<Self, TuningError> {
        validate_tuning(&tuning)?;
        let profile = MotionProfile::derive(&tuning);
        Ok(Self { tuning, profile })
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }
}

/// Per-tick input snapshot. Edges are true for exactly one tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub jump_just_released: bool,
    pub dash_just_pressed: bool,
}

impl MovementInput {
    /// Clamp the axis into [-1, 1]; non-finite input reads as no input.
    pub fn set_horizontal(&mut self, value: f32) {
        self.horizontal = if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_matches_apex_formulas() {
        let tuning = ControllerTuning::new(MovementTuning::default()).unwrap();
        let profile = tuning.profile();

        assert!((profile.gravity - -24.0).abs() < 1e-4);
        assert!((profile.initial_jump_speed - 12.0).abs() < 1e-4);
        assert!((profile.acceleration_rate - 20.0).abs() < 1e-4);
        assert!((profile.deceleration_rate - 5.0 / 0.15).abs() < 1e-3);
        // max_jump_height == apex_height, so the hold target is the launch speed
        assert!((profile.max_jump_speed - 12.0).abs() < 1e-3);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let tuning = MovementTuning {
            acceleration_time: 0.0,
            ..default()
        };
        assert!(ControllerTuning::new(tuning).is_err());
    }

    #[test]
    fn horizontal_input_is_clamped() {
        let mut input = MovementInput::default();
        input.set_horizontal(3.0);
        assert_eq!(input.horizontal, 1.0);
        input.set_horizontal(-0.5);
        assert_eq!(input.horizontal, -0.5);
        input.set_horizontal(f32::NAN);
        assert_eq!(input.horizontal, 0.0);
    }
}
