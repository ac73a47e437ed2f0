//! Movement domain: the per-character controller driving one tick at a time.

use bevy::prelude::*;

use crate::movement::state_machine::{MotionContext, StateMachine, StepInputs};
use crate::movement::{
    Body, BodyShape, CollisionQuery, InputSource, MotionState, MovementBounds, MovementError,
    MovementTuning, StateSwitch,
};

/// What a tick produced, for hosts that forward notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    /// Every transition since the previous tick, oldest first.
    pub switches: Vec<StateSwitch>,
    /// State the tick ended in.
    pub state: MotionState,
    pub position: Vec2,
    /// Bounds the body was clamped into this tick.
    pub bounds: MovementBounds,
}

/// Owns the body and the state machine of one character. Nothing else
/// mutates either.
#[derive(Component, Debug, Clone)]
pub struct MovementController {
    tuning: MovementTuning,
    body: Body,
    machine: StateMachine,
    last_bounds: MovementBounds,
}

impl MovementController {
    /// Fails when the tuning is unusable or the shape has no box extents.
    pub fn new(tuning: MovementTuning, shape: &dyn BodyShape) -> Result<Self, MovementError> {
        tuning.validate()?;
        let half_extents = shape.half_extents().ok_or(MovementError::MissingBodyShape)?;
        let machine = StateMachine::new(&tuning);

        Ok(Self {
            tuning,
            body: Body::new(half_extents),
            machine,
            last_bounds: MovementBounds::UNBOUNDED,
        })
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.body.position = position;
        self
    }

    pub fn state(&self) -> MotionState {
        self.machine.state()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn half_extents(&self) -> Vec2 {
        self.body.half_extents
    }

    pub fn available_jumps(&self) -> u32 {
        self.machine.available_jumps
    }

    pub fn horizontal_friction(&self) -> f32 {
        self.machine.horizontal_friction
    }

    pub fn vertical_friction(&self) -> f32 {
        self.machine.vertical_friction
    }

    pub fn last_bounds(&self) -> MovementBounds {
        self.last_bounds
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// Re-reads the half-extents, e.g. after the collider was resized.
    pub fn refresh_extents(&mut self, shape: &dyn BodyShape) -> Result<(), MovementError> {
        self.body.half_extents = shape.half_extents().ok_or(MovementError::MissingBodyShape)?;
        Ok(())
    }

    /// Forces a transition outside the tick. The resulting switches are
    /// reported with the next tick's outcome.
    pub fn set_state(&mut self, next: MotionState, step: StepInputs<'_>) -> Result<(), MovementError> {
        let mut ctx = MotionContext {
            body: &mut self.body,
            tuning: &self.tuning,
            step,
        };
        self.machine.switch_to(next, &mut ctx)
    }

    /// One physics tick: adopt the host position, run the current state,
    /// take at most one input-driven transition, then clear input edges.
    pub fn tick(
        &mut self,
        host_position: Vec2,
        input: &mut dyn InputSource,
        world: &dyn CollisionQuery,
        dt: f32,
    ) -> Result<TickOutcome, MovementError> {
        self.body.position = host_position;
        let result = self.run_state_loop(&*input, world, dt);
        input.reset();
        result
    }

    fn run_state_loop(
        &mut self,
        input: &dyn InputSource,
        world: &dyn CollisionQuery,
        dt: f32,
    ) -> Result<TickOutcome, MovementError> {
        let step = StepInputs { input, world, dt };
        let mut ctx = MotionContext {
            body: &mut self.body,
            tuning: &self.tuning,
            step,
        };

        if let Some(bounds) = self.machine.update(&mut ctx)? {
            self.last_bounds = bounds;
            if let Some(next) = self.machine.evaluate(&ctx, &bounds) {
                self.machine.switch_to(next, &mut ctx)?;
            }
        }

        Ok(TickOutcome {
            switches: self.machine.drain_switches(),
            state: self.machine.state(),
            position: self.body.position,
            bounds: self.last_bounds,
        })
    }
}
