//! Movement domain: velocity integration and the bounded motion step.

use bevy::math::FloatExt;
use bevy::prelude::*;

use crate::movement::{Body, MovementBounds, MovementTuning};

/// Next horizontal velocity.
///
/// Input first eases the velocity toward `input * horizontal_speed`, then a
/// flat drag of `max(air_resistance, friction)` pulls it back toward zero.
/// The drag direction follows the velocity the tick started with, so a body
/// starting from rest gets one drag-free tick of acceleration.
pub fn horizontal_velocity(velocity_x: f32, input: f32, friction: f32, tuning: &MovementTuning, dt: f32) -> f32 {
    let speed = tuning.horizontal_speed;
    let mut next = velocity_x;

    if input.abs() > 0.0 {
        let t = (speed * dt).clamp(0.0, 1.0);
        next = next.lerp(input * speed, t);
    }

    let drag = tuning.air_resistance.max(friction);
    if velocity_x > 0.0 {
        next = (next - drag).max(0.0).min(speed);
    } else if velocity_x < 0.0 {
        next = (next + drag).min(0.0).max(-speed);
    }

    next
}

/// Gravity accumulates but never exceeds one second's worth of it.
pub fn vertical_velocity(velocity_y: f32, gravity_y: f32, dt: f32) -> f32 {
    (velocity_y + gravity_y * dt).max(gravity_y)
}

/// Replaces the vertical velocity while clinging; friction pushes against gravity.
pub fn wall_stick_velocity(gravity_y: f32, friction: f32, dt: f32) -> f32 {
    (gravity_y + friction) * dt
}

/// Advances the body's position and clamps it into `bounds`. Velocity is
/// left untouched even when the clamp swallows it.
pub fn move_step(body: &Body, bounds: &MovementBounds, dt: f32) -> Vec2 {
    bounds.clamp(body.position + body.velocity * dt)
}
