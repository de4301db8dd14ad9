//! Config domain: loading and validating controller tuning.

mod loader;
mod validation;

pub use loader::{
    ConfigLoadError, DEFAULT_TUNING_PATH, TUNING_PATH_ENV, load_controller_tuning,
    load_tuning_file, parse_tuning, tuning_path,
};
pub use validation::{TuningError, TuningIssue, tuning_issues, validate_tuning};
