//! Movement domain: loading tuning from RON data files.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

pub const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning file failures.
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

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parses tuning from RON text. Fields left out keep their defaults.
pub fn parse_movement_tuning(contents: &str) -> Result<MovementTuning, ron::error::SpannedError> {
    ron_options().from_str(contents)
}

pub fn load_movement_tuning(path: &Path) -> Result<MovementTuning, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let tuning = parse_movement_tuning(&contents).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("Parse error: {}", e),
    })?;

    tuning.validate().map_err(|e| ConfigLoadError {
        file: file_name,
        message: e.to_string(),
    })?;

    Ok(tuning)
}

/// Startup system: replaces the default tuning when the data file loads.
pub(crate) fn load_tuning_from_file(mut tuning: ResMut<MovementTuning>) {
    match load_movement_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded movement tuning: speed={}, jump={}, gravity={}, jumps={}",
                loaded.horizontal_speed,
                loaded.high_jump_speed,
                loaded.gravity,
                loaded.max_available_jumps
            );
            *tuning = loaded;
        }
        Err(e) => {
            warn!("{}, using default movement tuning", e);
        }
    }
}
