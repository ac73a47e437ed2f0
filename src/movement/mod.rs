//! Movement domain: platformer character controller and plugin wiring.

pub mod bounds;
mod capabilities;
mod components;
pub mod config;
mod controller;
mod dev;
mod error;
mod events;
pub mod friction;
pub mod integrator;
mod resources;
mod state_machine;
mod systems;


pub use bounds::{MovementBounds, calculate_movement_bounds, nearly_equal};
pub use capabilities::{BodyShape, CollisionQuery, InputSource, Side, SurfaceHit};
pub use components::{Body, GameLayer, Ground, MotionState, Player, Wall, WallContact};
pub use config::{ConfigLoadError, load_movement_tuning, parse_movement_tuning};
pub use controller::{MovementController, TickOutcome};
pub use error::MovementError;
pub use events::{StateLoopEvent, StateSwitch, StateSwitchEvent};
pub use resources::{
    DirectionalFilters, MovementDebug, MovementInput, MovementTuning, ToggleableStates,
};
pub use state_machine::StepInputs;

use bevy::prelude::*;

use crate::movement::config::load_tuning_from_file;
use crate::movement::systems::{
    attach_movement_controllers, read_input, run_movement_tick, sync_transforms,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<DirectionalFilters>()
            .add_message::<StateSwitchEvent>()
            .add_message::<StateLoopEvent>()
            .register_type::<MotionState>()
            .add_systems(Startup, load_tuning_from_file)
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (attach_movement_controllers, run_movement_tick).chain(),
            )
            .add_systems(Update, sync_transforms);

        #[cfg(feature = "dev-tools")]
        {
            use crate::movement::systems::{
                draw_movement_colliders, overlay_enabled, toggle_movement_debug,
            };

            app.init_resource::<MovementDebug>().add_systems(
                Update,
                (
                    toggle_movement_debug,
                    draw_movement_colliders.run_if(overlay_enabled),
                )
                    .chain(),
            );
        }
    }
}

/// Demo content: a test room and a player to drive around it.
pub struct MovementDemoPlugin;

impl Plugin for MovementDemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (dev::spawn_test_room, dev::spawn_player));
    }
}
