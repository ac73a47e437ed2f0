//! Movement domain: the motion state machine.
//!
//! One tick runs the current state's update (integrate, recompute bounds,
//! step), then checks transitions once in a fixed priority order. There is
//! no search for a fixed point. The only multi-state chains within a tick
//! come from transient states whose entry action hands off to another
//! state (Fall, Jump, WallJump, WallDismount), expressed as
//! [`Entry::Reenter`] and settled by [`StateMachine::switch_to`].

use bevy::prelude::*;

use crate::movement::bounds::{calculate_movement_bounds, nearly_equal};
use crate::movement::friction::{horizontal_friction, vertical_friction};
use crate::movement::integrator::{
    horizontal_velocity, move_step, vertical_velocity, wall_stick_velocity,
};
use crate::movement::{
    Body, CollisionQuery, InputSource, MotionState, MovementBounds, MovementError, MovementTuning,
    StateSwitch, WallContact,
};

/// Upper bound on hand-offs in one switch. The longest chain in the graph
/// is WallJump -> Jump -> VerticalMovement.
pub(crate) const MAX_REENTRIES: usize = 4;

/// Result of a state's entry action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Entry {
    Settled,
    Reenter(MotionState),
}

/// Capabilities borrowed for the duration of one tick.
#[derive(Clone, Copy)]
pub struct StepInputs<'a> {
    pub input: &'a dyn InputSource,
    pub world: &'a dyn CollisionQuery,
    pub dt: f32,
}

/// Everything a state action may read or mutate.
pub(crate) struct MotionContext<'a> {
    pub body: &'a mut Body,
    pub tuning: &'a MovementTuning,
    pub step: StepInputs<'a>,
}

impl MotionContext<'_> {
    fn bounds(&self) -> MovementBounds {
        calculate_movement_bounds(
            self.body,
            self.step.world,
            self.tuning.edge_collide_prevention_ratio,
            self.tuning.edge_epsilon,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StateMachine {
    state: MotionState,
    pub available_jumps: u32,
    pub horizontal_friction: f32,
    pub vertical_friction: f32,
    /// Switches not yet delivered to listeners, oldest first.
    pending: Vec<StateSwitch>,
}

impl StateMachine {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            state: MotionState::Idle,
            available_jumps: tuning.max_available_jumps,
            horizontal_friction: 0.0,
            vertical_friction: 0.0,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub(crate) fn drain_switches(&mut self) -> Vec<StateSwitch> {
        std::mem::take(&mut self.pending)
    }

    /// Moves to `next`, running entry actions and following hand-offs until
    /// a state settles. Switching to the current state does nothing.
    pub(crate) fn switch_to(
        &mut self,
        next: MotionState,
        ctx: &mut MotionContext,
    ) -> Result<(), MovementError> {
        let origin = self.state;
        let mut target = next;
        let mut reentries = 0;

        loop {
            if target == self.state {
                return Ok(());
            }

            let entry = self.enter(target, ctx)?;
            let previous = std::mem::replace(&mut self.state, target);
            debug!("Switched from state {:?} to {:?}.", previous, target);
            self.pending.push(StateSwitch {
                previous,
                next: target,
            });

            match entry {
                Entry::Settled => return Ok(()),
                Entry::Reenter(following) => {
                    reentries += 1;
                    if reentries > MAX_REENTRIES {
                        error!("State entry from {:?} kept re-entering", origin);
                        return Err(MovementError::ReentryLimit {
                            from: origin,
                            limit: MAX_REENTRIES,
                        });
                    }
                    target = following;
                }
            }
        }
    }

    fn clear_friction(&mut self) {
        self.horizontal_friction = 0.0;
        self.vertical_friction = 0.0;
    }

    fn enter(&mut self, state: MotionState, ctx: &mut MotionContext) -> Result<Entry, MovementError> {
        let tuning = ctx.tuning;
        let body = &mut *ctx.body;

        match state {
            MotionState::Idle => {
                body.velocity = Vec2::ZERO;
                self.clear_friction();
                self.available_jumps = tuning.max_available_jumps;
                Ok(Entry::Settled)
            }
            MotionState::Walking => {
                error!("Walking state has no behavior and cannot be entered");
                Err(MovementError::UnimplementedState(MotionState::Walking))
            }
            MotionState::Running => {
                body.velocity.y = 0.0;
                self.clear_friction();
                self.available_jumps = tuning.max_available_jumps;
                Ok(Entry::Settled)
            }
            MotionState::Fall => {
                body.velocity.y = 0.0;
                self.clear_friction();
                Ok(Entry::Reenter(MotionState::VerticalMovement))
            }
            MotionState::Jump => {
                body.velocity.y = tuning.high_jump_speed;
                self.clear_friction();
                self.available_jumps = self.available_jumps.saturating_sub(1);
                Ok(Entry::Reenter(MotionState::VerticalMovement))
            }
            MotionState::VerticalMovement => Ok(Entry::Settled),
            MotionState::WallSliding => {
                body.velocity.x = 0.0;
                self.clear_friction();
                self.available_jumps = tuning.max_available_jumps;
                Ok(Entry::Settled)
            }
            MotionState::WallSticking => {
                self.available_jumps = tuning.max_available_jumps;
                Ok(Entry::Settled)
            }
            MotionState::WallJump => {
                let bounds = ctx.bounds();
                let body = &mut *ctx.body;
                let direction = match bounds.wall_contact(body.position, tuning.edge_epsilon) {
                    WallContact::Left => 1.0,
                    WallContact::Right => -1.0,
                    WallContact::None => 0.0,
                };
                body.velocity.x = direction * tuning.horizontal_speed;
                Ok(Entry::Reenter(MotionState::Jump))
            }
            MotionState::WallDismount => {
                body.velocity.x = 0.0;
                self.clear_friction();
                Ok(Entry::Reenter(MotionState::VerticalMovement))
            }
        }
    }

    /// Runs the current state's per-tick action and steps the body.
    /// Returns the bounds the step was clamped into, or `None` for states
    /// that never stay current.
    pub(crate) fn update(&mut self, ctx: &mut MotionContext) -> Result<Option<MovementBounds>, MovementError> {
        let tuning = ctx.tuning;
        let StepInputs { input, world, dt } = ctx.step;
        let horizontal = input.horizontal();

        match self.state {
            MotionState::Idle => {}
            MotionState::Walking => {
                error!("Walking state has no per-tick behavior");
                return Err(MovementError::UnimplementedState(MotionState::Walking));
            }
            MotionState::Running => {
                self.horizontal_friction =
                    horizontal_friction(ctx.body, world, tuning.friction_probe_radius);
                ctx.body.velocity.x = horizontal_velocity(
                    ctx.body.velocity.x,
                    horizontal,
                    self.horizontal_friction,
                    tuning,
                    dt,
                );
            }
            MotionState::VerticalMovement => {
                ctx.body.velocity.x = horizontal_velocity(
                    ctx.body.velocity.x,
                    horizontal,
                    self.horizontal_friction,
                    tuning,
                    dt,
                );
                ctx.body.velocity.y = vertical_velocity(ctx.body.velocity.y, tuning.gravity.y, dt);
            }
            MotionState::WallSliding => {
                ctx.body.velocity.y = vertical_velocity(ctx.body.velocity.y, tuning.gravity.y, dt);
            }
            MotionState::WallSticking => {
                self.vertical_friction =
                    vertical_friction(ctx.body, world, tuning.friction_probe_radius);
                ctx.body.velocity.y = wall_stick_velocity(tuning.gravity.y, self.vertical_friction, dt);
            }
            MotionState::Fall
            | MotionState::Jump
            | MotionState::WallJump
            | MotionState::WallDismount => return Ok(None),
        }

        let bounds = ctx.bounds();
        ctx.body.position = move_step(ctx.body, &bounds, dt);
        Ok(Some(bounds))
    }

    /// First state whose predicate holds, in priority order.
    pub(crate) fn evaluate(&self, ctx: &MotionContext, bounds: &MovementBounds) -> Option<MotionState> {
        let view = TransitionView {
            state: self.state,
            position: ctx.body.position,
            velocity: ctx.body.velocity,
            bounds,
            input: ctx.step.input.horizontal(),
            jump_pressed: ctx.step.input.jump_pressed(),
            available_jumps: self.available_jumps,
            tuning: ctx.tuning,
        };

        if view.is_idle() {
            Some(MotionState::Idle)
        } else if view.is_running() {
            Some(MotionState::Running)
        } else if view.is_wall_dismounting() {
            Some(MotionState::WallDismount)
        } else if view.is_wall_jumping() {
            Some(MotionState::WallJump)
        } else if view.is_wall_sticking() {
            Some(MotionState::WallSticking)
        } else if view.is_wall_sliding() || view.is_wall_sticking_exit() {
            Some(MotionState::WallSliding)
        } else if view.is_vertical_movement() {
            Some(MotionState::VerticalMovement)
        } else if view.is_falling() {
            Some(MotionState::Fall)
        } else if view.is_jumping() {
            Some(MotionState::Jump)
        } else {
            None
        }
    }
}

/// Read-only snapshot the transition predicates are evaluated against.
struct TransitionView<'a> {
    state: MotionState,
    position: Vec2,
    velocity: Vec2,
    bounds: &'a MovementBounds,
    input: f32,
    jump_pressed: bool,
    available_jumps: u32,
    tuning: &'a MovementTuning,
}

impl TransitionView<'_> {
    fn eps(&self) -> f32 {
        self.tuning.edge_epsilon
    }

    fn at_left(&self) -> bool {
        self.bounds.at_left(self.position, self.eps())
    }

    fn at_right(&self) -> bool {
        self.bounds.at_right(self.position, self.eps())
    }

    fn at_top(&self) -> bool {
        self.bounds.at_top(self.position, self.eps())
    }

    fn at_bottom(&self) -> bool {
        self.bounds.at_bottom(self.position, self.eps())
    }

    fn is_idle(&self) -> bool {
        self.state != MotionState::Idle
            && self.at_bottom()
            && (nearly_equal(self.velocity.x, 0.0, self.eps()) || self.at_left() || self.at_right())
    }

    fn is_running(&self) -> bool {
        self.state != MotionState::Running
            && self.at_bottom()
            && (self.input.abs() > 0.0 || self.velocity.x.abs() > 0.0)
            && ((!self.at_left() && self.input <= 0.0) || (!self.at_right() && self.input >= 0.0))
    }

    fn is_wall_dismounting(&self) -> bool {
        self.state == MotionState::WallSliding
            && ((self.at_left() && self.input > 0.0) || (self.at_right() && self.input < 0.0))
    }

    fn is_wall_jumping(&self) -> bool {
        self.tuning.toggleable_states.wall_jumping
            && self.state == MotionState::WallSliding
            && self.jump_pressed
            && ((self.at_left() && self.input >= 0.0) || (self.at_right() && self.input <= 0.0))
    }

    fn is_wall_sticking(&self) -> bool {
        self.tuning.toggleable_states.wall_sticking
            && self.state == MotionState::WallSliding
            && ((self.at_left() && self.input < 0.0) || (self.at_right() && self.input > 0.0))
    }

    fn is_wall_sticking_exit(&self) -> bool {
        self.tuning.toggleable_states.wall_sticking
            && self.state == MotionState::WallSticking
            && ((self.at_left() && self.input >= 0.0) || (self.at_right() && self.input <= 0.0))
    }

    fn is_wall_sliding(&self) -> bool {
        self.state != MotionState::WallSliding
            && self.state != MotionState::WallSticking
            && (self.at_left() || self.at_right())
            && !self.at_top()
            && !self.at_bottom()
    }

    fn is_vertical_movement(&self) -> bool {
        self.state != MotionState::VerticalMovement
            && !nearly_equal(self.velocity.y, 0.0, self.eps())
            && ((!self.at_left() && self.input < 0.0) || (!self.at_right() && self.input > 0.0))
    }

    /// Airborne without upward speed, or pressed against a ceiling.
    fn is_falling(&self) -> bool {
        let airborne = !matches!(
            self.state,
            MotionState::VerticalMovement | MotionState::WallSliding | MotionState::WallSticking
        ) && !self.at_bottom()
            && self.velocity.y <= 0.0;
        airborne || self.at_top()
    }

    fn is_jumping(&self) -> bool {
        self.jump_pressed && self.available_jumps >= 1
    }
}
