//! Movement domain: bevy systems adapting the controller to the engine.

pub(crate) mod collisions;
#[cfg(feature = "dev-tools")]
pub(crate) mod debug;
pub(crate) mod input;
pub(crate) mod movement;

#[cfg(feature = "dev-tools")]
pub(crate) use debug::{draw_movement_colliders, overlay_enabled, toggle_movement_debug};
pub(crate) use input::read_input;
pub(crate) use movement::{attach_movement_controllers, run_movement_tick, sync_transforms};
