//! Core domain: camera, physics cadence, and run-wide wiring.

mod systems;

pub use systems::PIXELS_PER_UNIT;

use bevy::prelude::*;

use crate::core::systems::{log_state_switches, setup_camera};

/// Physics ticks per second.
pub const FIXED_HZ: f64 = 50.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, log_state_switches);
    }
}
