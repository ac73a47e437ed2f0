//! Movement domain: components, physics layers, and the motion state set.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ceilings)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Behavioral states of the character. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum MotionState {
    #[default]
    Idle,
    /// Declared but without behavior; entering it is an error.
    Walking,
    Running,
    Fall,
    Jump,
    VerticalMovement,
    WallSliding,
    WallSticking,
    WallJump,
    WallDismount,
}

impl MotionState {
    pub const ALL: [MotionState; 10] = [
        MotionState::Idle,
        MotionState::Walking,
        MotionState::Running,
        MotionState::Fall,
        MotionState::Jump,
        MotionState::VerticalMovement,
        MotionState::WallSliding,
        MotionState::WallSticking,
        MotionState::WallJump,
        MotionState::WallDismount,
    ];

    /// States whose entry action immediately hands off to another state.
    pub fn is_transient(self) -> bool {
        matches!(
            self,
            MotionState::Fall | MotionState::Jump | MotionState::WallJump | MotionState::WallDismount
        )
    }
}

/// Which side wall the body is flush against, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

/// Simulated body. Position here is authoritative and is pushed to the
/// host transform on the visual cadence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub half_extents: Vec2,
}

impl Body {
    pub fn new(half_extents: Vec2) -> Self {
        Self {
            half_extents,
            ..default()
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn min(&self) -> Vec2 {
        self.position - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.half_extents
    }
}
