//! Movement domain: parabolic jump with a hold-to-extend window.
//!
//! Gravity and launch speed come from [`MotionProfile`], derived from apex
//! height and apex time. Holding jump after launch eases vertical speed toward
//! the speed that reaches `max_jump_height`; releasing hands the character
//! back to plain gravity.

use crate::movement::{JumpHold, MotionProfile};

/// Open the hold window if grounded with jump held. Returns the launch speed.
pub fn try_start_jump(
    hold: &mut Option<JumpHold>,
    grounded: bool,
    jump_held: bool,
    jump_control_time: f32,
    profile: &MotionProfile,
) -> Option<f32> {
    if !(grounded && jump_held) {
        return None;
    }
    *hold = Some(JumpHold {
        remaining: jump_control_time,
    });
    Some(profile.initial_jump_speed)
}

/// Advance an open hold window by one tick.
///
/// Returns the vertical speed the window sets, or `None` if there was no
/// window or it closed this tick (released, or out of time).
pub fn advance_hold(
    hold: &mut Option<JumpHold>,
    vy: f32,
    jump_held: bool,
    jump_control_time: f32,
    profile: &MotionProfile,
    dt: f32,
) -> Option<f32> {
    let window = hold.as_mut()?;

    if !jump_held || window.remaining <= 0.0 {
        *hold = None;
        return None;
    }

    window.remaining -= dt;
    let t = (1.0 - window.remaining / jump_control_time).clamp(0.0, 1.0);
    Some(vy + (profile.max_jump_speed - vy) * t)
}

/// One tick of free fall.
pub fn fall(vy: f32, profile: &MotionProfile, dt: f32) -> f32 {
    vy + profile.gravity * dt
}
