//! Movement domain: timed dash override.

use crate::movement::{DashTimer, Facing, LocomotionState};

/// Start a dash if eligible. Returns the dash's horizontal speed.
///
/// Rejected while already dashing or while airborne (`Jumping`).
pub fn try_start_dash(
    dash: &mut Option<DashTimer>,
    locomotion: LocomotionState,
    facing: Facing,
    dash_speed: f32,
    dash_duration: f32,
) -> Option<f32> {
    if dash.is_some() || locomotion == LocomotionState::Jumping {
        return None;
    }
    *dash = Some(DashTimer {
        remaining: dash_duration,
    });
    Some(dash_speed * facing.sign())
}

/// Count an active dash down by one tick.
///
/// On expiry the dash is dropped and the horizontal speed settles: clamped to
/// walking range if still walking, stopped otherwise. Returns the resulting
/// horizontal speed.
pub fn advance_dash(
    dash: &mut Option<DashTimer>,
    vx: f32,
    locomotion: LocomotionState,
    max_speed: f32,
    dt: f32,
) -> f32 {
    let Some(timer) = dash.as_mut() else {
        return vx;
    };

    timer.remaining -= dt;
    if timer.remaining > 0.0 {
        return vx;
    }

    *dash = None;
    if locomotion == LocomotionState::Walking {
        vx.clamp(-max_speed, max_speed)
    } else {
        0.0
    }
}
