//! Movement domain: surface friction sampling around the body.

use bevy::prelude::*;

use crate::movement::{Body, CollisionQuery, Side};

/// Friction under the feet or against the head, for running.
/// The top probe wins when both touch.
pub fn horizontal_friction(body: &Body, world: &dyn CollisionQuery, radius: f32) -> f32 {
    let offset = Vec2::new(0.0, body.half_extents.y);
    world
        .probe_circle(Side::Top, body.position + offset, radius)
        .or_else(|| world.probe_circle(Side::Bottom, body.position - offset, radius))
        .unwrap_or(0.0)
}

/// Friction of a side wall, for wall sticking. The left probe wins when
/// both touch.
pub fn vertical_friction(body: &Body, world: &dyn CollisionQuery, radius: f32) -> f32 {
    let offset = Vec2::new(body.half_extents.x, 0.0);
    world
        .probe_circle(Side::Left, body.position - offset, radius)
        .or_else(|| world.probe_circle(Side::Right, body.position + offset, radius))
        .unwrap_or(0.0)
}
