//! Platformer character movement: a motion state machine over bounded,
//! fixed-timestep integration, with bevy and avian adapters.

pub mod core;
pub mod movement;
