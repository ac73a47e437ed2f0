//! Core domain: camera setup and notification logging.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::StateSwitchEvent;

/// Screen pixels per world unit. Movement tuning is expressed in world units.
pub const PIXELS_PER_UNIT: f32 = 24.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn log_state_switches(mut events: MessageReader<StateSwitchEvent>) {
    for event in events.read() {
        info!(
            "Player {:?}: {:?} -> {:?}",
            event.entity, event.previous, event.next
        );
    }
}
