//! Movement domain: wall-jump impulse and its real-time window.

use bevy::prelude::*;

use crate::movement::{MovementTuning, WallJumpWindow};

/// Direction the wall jump pushes along x.
///
/// Pushes left when the player holds right (into a right-hand wall) and right
/// otherwise.
pub fn launch_direction(input: f32) -> f32 {
    if input > 0.0 { -1.0 } else { 1.0 }
}

/// Open a wall-jump window if the jump edge fires against a wall mid-air.
///
/// Returns the launch impulse. `now` is real time in seconds; the window ends
/// `wall_jump_duration` later no matter how many ticks pass in between.
pub fn try_start_wall_jump(
    window: &mut Option<WallJumpWindow>,
    touching_wall: bool,
    grounded: bool,
    jump_just_pressed: bool,
    input: f32,
    now: f64,
    tuning: &MovementTuning,
) -> Option<Vec2> {
    if !(touching_wall && !grounded && jump_just_pressed) {
        return None;
    }

    *window = Some(WallJumpWindow {
        ends_at: now + f64::from(tuning.wall_jump_duration),
    });
    Some(Vec2::new(
        tuning.wall_jump_force_x * launch_direction(input),
        tuning.wall_jump_force_y,
    ))
}

/// Drop the window once its deadline has passed. Safe on any state.
pub fn expire_wall_jump(window: &mut Option<WallJumpWindow>, now: f64) -> bool {
    if window.is_some_and(|w| w.expired(now)) {
        *window = None;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holding_into_right_wall_pushes_left() {
        let tuning = MovementTuning::default();
        let mut window = None;

        let impulse = try_start_wall_jump(&mut window, true, false, true, 1.0, 3.0, &tuning);
        assert_eq!(
            impulse,
            Some(Vec2::new(-tuning.wall_jump_force_x, tuning.wall_jump_force_y))
        );
        let ends_at = window.expect("window opened").ends_at;
        assert!((ends_at - 3.2).abs() < 1e-6);
    }

    #[test]
    fn neutral_or_left_input_pushes_right() {
        assert_eq!(launch_direction(0.0), 1.0);
        assert_eq!(launch_direction(-1.0), 1.0);
    }

    #[test]
    fn needs_wall_air_and_edge() {
        let tuning = MovementTuning::default();
        let mut window = None;

        assert!(try_start_wall_jump(&mut window, false, false, true, 0.0, 0.0, &tuning).is_none());
        assert!(try_start_wall_jump(&mut window, true, true, true, 0.0, 0.0, &tuning).is_none());
        assert!(try_start_wall_jump(&mut window, true, false, false, 0.0, 0.0, &tuning).is_none());
        assert!(window.is_none());
    }

    #[test]
    fn window_ends_on_real_time_deadline() {
        let mut window = Some(WallJumpWindow { ends_at: 1.0 });

        assert!(!expire_wall_jump(&mut window, 0.99));
        assert!(window.is_some());
        assert!(expire_wall_jump(&mut window, 1.5));
        assert!(window.is_none());
        assert!(!expire_wall_jump(&mut window, 2.0));
    }

    #[test]
    fn window_keeps_its_length_after_long_uptime() {
        // Roughly two months of real time, where f32 seconds step by 0.5
        let start = 5.0e6;
        let tuning = MovementTuning::default();
        let mut window = None;
        try_start_wall_jump(&mut window, true, false, true, 0.0, start, &tuning);

        assert!(!expire_wall_jump(&mut window, start + 0.1));
        assert!(window.is_some());
        assert!(expire_wall_jump(&mut window, start + 0.25));
    }
}
