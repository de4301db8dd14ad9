//! Validation for controller tuning values.
//!
//! Every derived rate divides by a tuning value, so zero or negative times would
//! push NaN/Inf through the simulation. Bad tuning is rejected before the
//! controller ever ticks.

use crate::movement::MovementTuning;

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningIssue {
    /// Field must be finite and strictly positive
    NotPositive { field: &'static str, value: f32 },
    /// Field must be finite and zero or greater
    Negative { field: &'static str, value: f32 },
    /// min_jump_height must not exceed max_jump_height
    JumpHeightRange { min: f32, max: f32 },
    /// Wall jump push would leave an over-speed value in normal ground motion
    WallPushTooFast { force: f32, max_speed: f32 },
}

impl std::fmt::Display for TuningIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningIssue::NotPositive { field, value } => {
                write!(f, "'{}' must be a positive number, got {}", field, value)
            }
            TuningIssue::Negative { field, value } => {
                write!(f, "'{}' must not be negative, got {}", field, value)
            }
            TuningIssue::JumpHeightRange { min, max } => write!(
                f,
                "'min_jump_height' ({}) is greater than 'max_jump_height' ({})",
                min, max
            ),
            TuningIssue::WallPushTooFast { force, max_speed } => write!(
                f,
                "'wall_jump_force_x' ({}) exceeds 'max_speed' ({})",
                force, max_speed
            ),
        }
    }
}

/// Tuning rejected at startup, with every violated constraint.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub issues: Vec<TuningIssue>,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid controller tuning:")?;
        for issue in &self.issues {
            write!(f, "\n  - {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for TuningError {}

/// Helper macro for checking that a field is finite and above zero
macro_rules! check_positive {
    ($issues:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if !value.is_finite() || value <= 0.0 {
            $issues.push(TuningIssue::NotPositive {
                field: stringify!($field),
                value,
            });
        }
    };
}

/// Helper macro for checking that a field is finite and not negative
macro_rules! check_non_negative {
    ($issues:expr, $tuning:expr, $field:ident) => {
        let value = $tuning.$field;
        if !value.is_finite() || value < 0.0 {
            $issues.push(TuningIssue::Negative {
                field: stringify!($field),
                value,
            });
        }
    };
}

/// Collect every violated constraint. Empty when the tuning is usable.
pub fn tuning_issues(tuning: &MovementTuning) -> Vec<TuningIssue> {
    let mut issues = Vec::new();

    check_positive!(issues, tuning, max_speed);
    check_positive!(issues, tuning, acceleration_time);
    check_positive!(issues, tuning, deceleration_time);
    check_positive!(issues, tuning, apex_height);
    check_positive!(issues, tuning, apex_time);
    check_positive!(issues, tuning, dash_speed);
    check_positive!(issues, tuning, dash_duration);
    check_positive!(issues, tuning, min_jump_height);
    check_positive!(issues, tuning, max_jump_height);
    check_positive!(issues, tuning, jump_control_time);
    check_positive!(issues, tuning, wall_check_distance);
    check_positive!(issues, tuning, wall_jump_force_y);
    check_positive!(issues, tuning, wall_jump_duration);
    check_non_negative!(issues, tuning, ground_check_offset);
    check_non_negative!(issues, tuning, wall_jump_force_x);

    let [width, height] = tuning.ground_check_size;
    for (field, value) in [("ground_check_size.x", width), ("ground_check_size.y", height)] {
        if !value.is_finite() || value <= 0.0 {
            issues.push(TuningIssue::NotPositive { field, value });
        }
    }

    if tuning.min_jump_height > tuning.max_jump_height {
        issues.push(TuningIssue::JumpHeightRange {
            min: tuning.min_jump_height,
            max: tuning.max_jump_height,
        });
    }

    if tuning.wall_jump_force_x > tuning.max_speed {
        issues.push(TuningIssue::WallPushTooFast {
            force: tuning.wall_jump_force_x,
            max_speed: tuning.max_speed,
        });
    }

    issues
}

/// Validate tuning, failing with the full list of issues.
pub fn validate_tuning(tuning: &MovementTuning) -> Result<(), TuningError> {
    let issues = tuning_issues(tuning);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(TuningError { issues })
    }
}
