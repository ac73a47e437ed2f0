//! Movement domain: tuning, input, and collision filter resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::{GameLayer, InputSource, MovementError};

/// States that can be switched off per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleableStates {
    pub wall_jumping: bool,
    pub wall_sticking: bool,
}

impl Default for ToggleableStates {
    fn default() -> Self {
        Self {
            wall_jumping: true,
            wall_sticking: true,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub horizontal_speed: f32,
    /// Drag subtracted from horizontal speed each tick when no surface is rougher.
    pub air_resistance: f32,
    pub high_jump_speed: f32,
    /// Acceleration applied while airborne. Also the terminal fall speed.
    pub gravity: Vec2,
    pub max_available_jumps: u32,
    /// Fraction of the opposite half-extent trimmed off each bounds cast box,
    /// so the floor is not reported as a wall and vice versa.
    pub edge_collide_prevention_ratio: f32,
    pub friction_probe_radius: f32,
    /// Absolute tolerance for "resting against a bound" comparisons.
    pub edge_epsilon: f32,
    pub toggleable_states: ToggleableStates,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            horizontal_speed: 7.0,
            air_resistance: 0.02,
            high_jump_speed: 15.0,
            gravity: Vec2::new(0.0, -30.0),
            max_available_jumps: 2,
            edge_collide_prevention_ratio: 0.1,
            friction_probe_radius: 0.2,
            edge_epsilon: 0.001,
            toggleable_states: ToggleableStates::default(),
        }
    }
}

impl MovementTuning {
    pub fn validate(&self) -> Result<(), MovementError> {
        let scalars = [
            ("horizontal_speed", self.horizontal_speed),
            ("air_resistance", self.air_resistance),
            ("high_jump_speed", self.high_jump_speed),
            ("edge_collide_prevention_ratio", self.edge_collide_prevention_ratio),
            ("friction_probe_radius", self.friction_probe_radius),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(MovementError::InvalidTuning {
                    field,
                    reason: "must be finite",
                });
            }
            if value < 0.0 {
                return Err(MovementError::InvalidTuning {
                    field,
                    reason: "must not be negative",
                });
            }
        }

        if !self.gravity.is_finite() || self.gravity.y >= 0.0 {
            return Err(MovementError::InvalidTuning {
                field: "gravity",
                reason: "vertical component must be finite and negative",
            });
        }

        if !(self.edge_epsilon.is_finite() && self.edge_epsilon > 0.0) {
            return Err(MovementError::InvalidTuning {
                field: "edge_epsilon",
                reason: "must be finite and positive",
            });
        }

        if self.edge_collide_prevention_ratio >= 1.0 {
            return Err(MovementError::InvalidTuning {
                field: "edge_collide_prevention_ratio",
                reason: "must be below 1",
            });
        }

        Ok(())
    }
}

/// Per-frame input intent. The jump edge is latched until the physics
/// tick consumes it, since several visual frames can pass between ticks.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_just_pressed: bool,
}

impl InputSource for MovementInput {
    fn horizontal(&self) -> f32 {
        self.horizontal
    }

    fn jump_pressed(&self) -> bool {
        self.jump_just_pressed
    }

    fn reset(&mut self) {
        self.jump_just_pressed = false;
    }
}

/// One collision filter per cast direction.
#[derive(Resource, Debug, Clone)]
pub struct DirectionalFilters {
    pub left: SpatialQueryFilter,
    pub right: SpatialQueryFilter,
    pub top: SpatialQueryFilter,
    pub bottom: SpatialQueryFilter,
}

impl Default for DirectionalFilters {
    fn default() -> Self {
        let solid = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
        Self {
            left: solid.clone(),
            right: solid.clone(),
            top: solid.clone(),
            bottom: solid,
        }
    }
}

/// Toggles for the collider overlay.
#[derive(Resource, Debug, Default)]
pub struct MovementDebug {
    pub display_colliders: bool,
}
