//! Movement domain: collider overlay for tuning bounds and friction probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::bounds::cast_sizes;
use crate::movement::{BodyShape, MovementController, MovementDebug, Player};

const MARKER_RADIUS: f32 = 0.1;

pub(crate) fn toggle_movement_debug(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<MovementDebug>,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.display_colliders = !debug_state.display_colliders;
        info!("Movement collider overlay: {}", debug_state.display_colliders);
    }
}

pub(crate) fn overlay_enabled(debug_state: Res<MovementDebug>) -> bool {
    debug_state.display_colliders
}

/// Draws the bounds cast boxes, the friction probes, and where each bound
/// would put the body's far edge.
pub(crate) fn draw_movement_colliders(
    mut gizmos: Gizmos,
    players: Query<(&MovementController, &Collider), With<Player>>,
) {
    let color = Color::srgb(0.2, 0.9, 0.3);

    for (controller, collider) in &players {
        // Re-derived so a resized collider shows up before the next tick.
        let extents =
            BodyShape::half_extents(collider).unwrap_or_else(|| controller.half_extents());
        let tuning = controller.tuning();
        let position = controller.position();
        let bounds = controller.last_bounds();
        let size = extents * 2.0;
        let (horizontal_size, vertical_size) =
            cast_sizes(extents, tuning.edge_collide_prevention_ratio);
        let radius = tuning.friction_probe_radius;

        let casts = [
            (Vec2::NEG_X * size.x, horizontal_size, Vec2::new(-extents.x, 0.0)),
            (Vec2::X * size.x, horizontal_size, Vec2::new(extents.x, 0.0)),
            (Vec2::Y * size.y, vertical_size, Vec2::new(0.0, extents.y)),
            (Vec2::NEG_Y * size.y, vertical_size, Vec2::new(0.0, -extents.y)),
        ];
        for (reach, cast_size, probe) in casts {
            gizmos.rect_2d(Isometry2d::from_translation(position + reach), cast_size, color);
            gizmos.circle_2d(Isometry2d::from_translation(position + probe), radius, color);
        }

        let markers = [
            Vec2::new(bounds.left - extents.x, position.y),
            Vec2::new(bounds.right + extents.x, position.y),
            Vec2::new(position.x, bounds.top + extents.y),
            Vec2::new(position.x, bounds.bottom - extents.y),
        ];
        for marker in markers.into_iter().filter(|m| m.is_finite()) {
            gizmos.circle_2d(Isometry2d::from_translation(marker), MARKER_RADIUS, color);
        }
    }
}
