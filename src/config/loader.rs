//! Loader for controller tuning files at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::{ControllerTuning, MovementTuning};

/// Environment variable overriding the tuning file path.
pub const TUNING_PATH_ENV: &str = "PLATFORMER_TUNING";

/// Tuning file used when no override is set.
pub const DEFAULT_TUNING_PATH: &str = "assets/data/controller.ron";

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning text. `.json` is read with serde_json, anything else as RON.
pub fn parse_tuning(file: &str, contents: &str) -> Result<MovementTuning, ConfigLoadError> {
    let is_json = Path::new(file)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed = if is_json {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    } else {
        ron_options().from_str(contents).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ConfigLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", message),
    })
}

/// Read and parse a tuning file. Missing fields fall back to their defaults.
pub fn load_tuning_file(path: &Path) -> Result<MovementTuning, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&file_name, &contents)
}

/// Path of the tuning file, honouring [`TUNING_PATH_ENV`].
pub fn tuning_path() -> String {
    std::env::var(TUNING_PATH_ENV).unwrap_or_else(|_| DEFAULT_TUNING_PATH.to_string())
}

/// Startup system: load and validate tuning, or shut the app down.
///
/// Never lets the controller run on unvalidated numbers.
pub fn load_controller_tuning(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    let path = tuning_path();

    let tuning = match load_tuning_file(Path::new(&path)) {
        Ok(tuning) => tuning,
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    match ControllerTuning::new(tuning) {
        Ok(controller_tuning) => {
            let profile = controller_tuning.profile();
            info!(
                "Loaded controller tuning from {}: accel={:.2}, decel={:.2}, gravity={:.2}, jump_speed={:.2}",
                path,
                profile.acceleration_rate,
                profile.deceleration_rate,
                profile.gravity,
                profile.initial_jump_speed
            );
            commands.insert_resource(controller_tuning);
        }
        Err(e) => {
            error!("{} ({})", e, path);
            exit.write(AppExit::error());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::GameLayer;

    #[test]
    fn parses_partial_ron_with_defaults() {
        let tuning = parse_tuning(
            "controller.ron",
            "(max_speed: 8.0, wall_layers: [Wall, Ground])",
        )
        .unwrap();

        assert_eq!(tuning.max_speed, 8.0);
        assert_eq!(tuning.wall_layers, vec![GameLayer::Wall, GameLayer::Ground]);
        assert_eq!(tuning.apex_time, MovementTuning::default().apex_time);
    }

    #[test]
    fn parses_json_by_extension() {
        let tuning = parse_tuning(
            "controller.JSON",
            r#"{ "dash_speed": 20.0, "ground_check_size": [1.0, 0.2] }"#,
        )
        .unwrap();

        assert_eq!(tuning.dash_speed, 20.0);
        assert_eq!(tuning.ground_check_size, [1.0, 0.2]);
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = parse_tuning("broken.ron", "(max_speed: )").unwrap_err();
        assert_eq!(err.file, "broken.ron");
        assert!(err.to_string().starts_with("Failed to load broken.ron: Parse error:"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_tuning_file(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(err.message.starts_with("IO error:"));
    }

    #[test]
    fn shipped_tuning_file_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_TUNING_PATH);
        let tuning = load_tuning_file(&path).unwrap();
        assert!(ControllerTuning::new(tuning).is_ok());
    }
}
