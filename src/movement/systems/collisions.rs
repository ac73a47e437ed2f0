//! Movement domain: avian-backed collision queries for the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyShape, CollisionQuery, DirectionalFilters, Side, SurfaceHit};

/// Upper bound on hits gathered per cast. Bounds only need the nearest
/// one outside the body, and rooms rarely stack more than a few colliders.
const MAX_CAST_HITS: u32 = 16;

impl BodyShape for Collider {
    fn half_extents(&self) -> Option<Vec2> {
        self.shape_scaled()
            .as_cuboid()
            .map(|c| Vec2::new(c.half_extents.x, c.half_extents.y))
    }
}

fn cast_direction(side: Side) -> Dir2 {
    match side {
        Side::Left => Dir2::NEG_X,
        Side::Right => Dir2::X,
        Side::Top => Dir2::Y,
        Side::Bottom => Dir2::NEG_Y,
    }
}

/// Spatial queries for one character, never reporting its own collider.
pub(crate) struct AvianCollisionQuery<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filters: DirectionalFilters,
    friction_of: &'a dyn Fn(Entity) -> f32,
}

impl<'a, 'w, 's> AvianCollisionQuery<'a, 'w, 's> {
    pub(crate) fn new(
        spatial_query: &'a SpatialQuery<'w, 's>,
        filters: &DirectionalFilters,
        friction_of: &'a dyn Fn(Entity) -> f32,
        body: Entity,
    ) -> Self {
        Self {
            spatial_query,
            filters: DirectionalFilters {
                left: filters.left.clone().with_excluded_entities([body]),
                right: filters.right.clone().with_excluded_entities([body]),
                top: filters.top.clone().with_excluded_entities([body]),
                bottom: filters.bottom.clone().with_excluded_entities([body]),
            },
            friction_of,
        }
    }

    fn filter(&self, side: Side) -> &SpatialQueryFilter {
        match side {
            Side::Left => &self.filters.left,
            Side::Right => &self.filters.right,
            Side::Top => &self.filters.top,
            Side::Bottom => &self.filters.bottom,
        }
    }
}

impl CollisionQuery for AvianCollisionQuery<'_, '_, '_> {
    fn cast_box(&self, side: Side, origin: Vec2, size: Vec2, max_distance: f32) -> Vec<SurfaceHit> {
        let shape = Collider::rectangle(size.x, size.y);
        let config = ShapeCastConfig::from_max_distance(max_distance);

        let mut hits: Vec<SurfaceHit> = self
            .spatial_query
            .shape_hits(
                &shape,
                origin,
                0.0,
                cast_direction(side),
                MAX_CAST_HITS,
                &config,
                self.filter(side),
            )
            .into_iter()
            .map(|hit| SurfaceHit {
                point: hit.point1,
                distance: hit.distance,
                friction: (self.friction_of)(hit.entity),
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn probe_circle(&self, side: Side, center: Vec2, radius: f32) -> Option<f32> {
        let probe = Collider::circle(radius);
        self.spatial_query
            .shape_intersections(&probe, center, 0.0, self.filter(side))
            .first()
            .map(|entity| (self.friction_of)(*entity))
    }
}
