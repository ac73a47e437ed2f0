//! Movement domain: state notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::MotionState;

/// A single transition, as recorded by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSwitch {
    pub previous: MotionState,
    pub next: MotionState,
}

/// Fired for every transition, before the tick's [`StateLoopEvent`].
#[derive(Debug)]
pub struct StateSwitchEvent {
    pub entity: Entity,
    pub previous: MotionState,
    pub next: MotionState,
}

impl Message for StateSwitchEvent {}

/// Fired once per physics tick with the state the tick ended in.
#[derive(Debug)]
pub struct StateLoopEvent {
    pub entity: Entity,
    pub state: MotionState,
}

impl Message for StateLoopEvent {}
