//! Movement domain: ground/air horizontal acceleration ramps.

use crate::movement::{Facing, MotionProfile};

/// Turn facing toward nonzero input. Zero input keeps the current facing.
pub fn update_facing(facing: Facing, input: f32) -> Facing {
    if input > 0.0 {
        Facing::Right
    } else if input < 0.0 {
        Facing::Left
    } else {
        facing
    }
}

/// Advance horizontal speed by one tick of input.
///
/// Input ramps toward `input * max_speed` at the acceleration rate; no input
/// decays toward zero at the deceleration rate without crossing it.
pub fn horizontal_speed(
    vx: f32,
    input: f32,
    max_speed: f32,
    profile: &MotionProfile,
    dt: f32,
) -> f32 {
    if input != 0.0 {
        let target = input * max_speed;
        let step = profile.acceleration_rate * dt;
        let next = if vx < target {
            (vx + step).min(target)
        } else {
            (vx - step).max(target)
        };
        next.clamp(-max_speed, max_speed)
    } else {
        let step = profile.deceleration_rate * dt;
        if vx > 0.0 {
            (vx - step).max(0.0)
        } else if vx < 0.0 {
            (vx + step).min(0.0)
        } else {
            0.0
        }
    }
}
