//! Movement domain: per-tick travel limits derived from collision casts.

use bevy::prelude::*;

use crate::movement::{Body, CollisionQuery, Side, SurfaceHit, WallContact};

/// Positions the body's center cannot pass this tick. Each side is
/// infinite when nothing blocks travel in that direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for MovementBounds {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl MovementBounds {
    pub const UNBOUNDED: Self = Self {
        left: f32::NEG_INFINITY,
        right: f32::INFINITY,
        top: f32::INFINITY,
        bottom: f32::NEG_INFINITY,
    };

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.bottom && point.y <= self.top
    }

    /// Clamps each axis independently. A lower bound wins over a crossed
    /// upper bound instead of panicking like `f32::clamp`.
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp_between(point.x, self.left, self.right),
            clamp_between(point.y, self.bottom, self.top),
        )
    }

    pub fn at_left(&self, position: Vec2, epsilon: f32) -> bool {
        nearly_equal(position.x, self.left, epsilon)
    }

    pub fn at_right(&self, position: Vec2, epsilon: f32) -> bool {
        nearly_equal(position.x, self.right, epsilon)
    }

    pub fn at_top(&self, position: Vec2, epsilon: f32) -> bool {
        nearly_equal(position.y, self.top, epsilon)
    }

    pub fn at_bottom(&self, position: Vec2, epsilon: f32) -> bool {
        nearly_equal(position.y, self.bottom, epsilon)
    }

    /// Left wall takes precedence when squeezed between both.
    pub fn wall_contact(&self, position: Vec2, epsilon: f32) -> WallContact {
        if self.at_left(position, epsilon) {
            WallContact::Left
        } else if self.at_right(position, epsilon) {
            WallContact::Right
        } else {
            WallContact::None
        }
    }
}

/// Absolute-tolerance comparison. Infinite bounds never compare equal to
/// a finite position.
pub fn nearly_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

fn clamp_between(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Sizes of the horizontal and vertical cast boxes. Each is the full body
/// box trimmed along its perpendicular axis.
pub fn cast_sizes(half_extents: Vec2, edge_ratio: f32) -> (Vec2, Vec2) {
    let size = half_extents * 2.0;
    let horizontal = Vec2::new(size.x, size.y - edge_ratio * half_extents.y);
    let vertical = Vec2::new(size.x - edge_ratio * half_extents.x, size.y);
    (horizontal, vertical)
}

/// Computes the four travel limits from the body's current geometry.
pub fn calculate_movement_bounds(
    body: &Body,
    world: &dyn CollisionQuery,
    edge_ratio: f32,
    epsilon: f32,
) -> MovementBounds {
    let size = body.size();
    let min = body.min();
    let max = body.max();
    let extents = body.half_extents;
    let (horizontal_size, vertical_size) = cast_sizes(extents, edge_ratio);

    let nearest = |side: Side, cast_size: Vec2, reach: f32, outside: &dyn Fn(&SurfaceHit) -> bool| {
        world
            .cast_box(side, body.position, cast_size, reach)
            .into_iter()
            .filter(|hit| outside(hit))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    };

    // Hits inside the body's own box (overlaps, self-contact) are ignored.
    // Touching faces count as outside within the edge tolerance.
    let left = nearest(Side::Left, horizontal_size, size.x, &|hit| {
        hit.point.x < min.x || nearly_equal(hit.point.x, min.x, epsilon)
    });
    let right = nearest(Side::Right, horizontal_size, size.x, &|hit| {
        hit.point.x > max.x || nearly_equal(hit.point.x, max.x, epsilon)
    });
    let top = nearest(Side::Top, vertical_size, size.y, &|hit| {
        hit.point.y > max.y || nearly_equal(hit.point.y, max.y, epsilon)
    });
    let bottom = nearest(Side::Bottom, vertical_size, size.y, &|hit| {
        hit.point.y < min.y || nearly_equal(hit.point.y, min.y, epsilon)
    });

    MovementBounds {
        left: left.map_or(f32::NEG_INFINITY, |hit| hit.point.x + extents.x),
        right: right.map_or(f32::INFINITY, |hit| hit.point.x - extents.x),
        top: top.map_or(f32::INFINITY, |hit| hit.point.y - extents.y),
        bottom: bottom.map_or(f32::NEG_INFINITY, |hit| hit.point.y + extents.y),
    }
}
