//! Movement domain: host capabilities consumed by the controller.
//!
//! The controller never talks to the engine directly. Input, collision
//! queries, and the body's shape arrive through these traits, so the
//! same core runs against avian in the game and against plain geometry
//! in tests.

use bevy::prelude::*;

/// Cast direction, each backed by its own collision filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// A surface reached by a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Contact point in world space.
    pub point: Vec2,
    /// Travel before contact. Zero when already touching.
    pub distance: f32,
    pub friction: f32,
}

pub trait InputSource {
    /// Horizontal axis in [-1, 1].
    fn horizontal(&self) -> f32;
    /// True only on the tick the jump button went down.
    fn jump_pressed(&self) -> bool;
    /// Clears per-tick edges. Called once after every tick.
    fn reset(&mut self);
}

pub trait CollisionQuery {
    /// Sweeps an axis-aligned box of `size` from `origin` toward `side`
    /// and returns every surface reached within `max_distance`.
    fn cast_box(&self, side: Side, origin: Vec2, size: Vec2, max_distance: f32) -> Vec<SurfaceHit>;

    /// Friction of a surface overlapping the circle, if any.
    fn probe_circle(&self, side: Side, center: Vec2, radius: f32) -> Option<f32>;
}

pub trait BodyShape {
    /// Half-extents of the axis-aligned bounding box, or `None` when the
    /// shape cannot be expressed as one.
    fn half_extents(&self) -> Option<Vec2>;
}

impl BodyShape for Vec2 {
    fn half_extents(&self) -> Option<Vec2> {
        (self.is_finite() && self.x > 0.0 && self.y > 0.0).then_some(*self)
    }
}
