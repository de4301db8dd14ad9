//! Movement domain: the per-tick controller step.
//!
//! Each tick senses, advances locomotion, runs horizontal motion and then
//! hands the vertical axis to exactly one [`MotionDriver`]. Precedence is
//! dash, then jump hold, then the wall-jump window, then ground or gravity.

use bevy::prelude::*;

use crate::movement::{
    ControllerTuning, GeometryProbe, LocomotionState, MovementInput, MovementState, advance_dash,
    advance_hold, expire_wall_jump, fall, horizontal_speed, sense, try_start_dash,
    try_start_jump, try_start_wall_jump, update_facing,
};

/// Everything one tick reads from outside the character.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Simulation seconds since the last tick
    pub dt: f32,
    /// Real-time clock in seconds, for the wall-jump window
    pub now: f64,
    pub input: MovementInput,
    pub position: Vec2,
}

/// Which behavior owned the vertical axis this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionDriver {
    /// Dead: nothing moves
    Frozen,
    /// Dash owns both axes; vertical speed held at zero
    Dash,
    JumpHold,
    /// Wall-jump window open: gravity suppressed
    WallJump,
    /// Standing: vertical speed zeroed
    Grounded,
    FreeFall,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Velocity to hand the physics body, verbatim
    pub velocity: Vec2,
    pub driver: MotionDriver,
    /// Set when locomotion changed this tick
    pub transition: Option<(LocomotionState, LocomotionState)>,
}

impl MovementState {
    /// Advance the controller by one tick.
    pub fn tick(
        &mut self,
        ctx: &TickContext,
        controller: &ControllerTuning,
        probe: &impl GeometryProbe,
    ) -> TickOutcome {
        let tuning = controller.tuning();
        let profile = controller.profile();
        let input = &ctx.input;

        self.previous_locomotion = self.locomotion;

        // Sensors run even when dead
        let readings = sense(probe, ctx.position, tuning);
        self.on_ground = readings.grounded;
        self.on_wall = readings.touching_wall;

        if expire_wall_jump(&mut self.wall_jump, ctx.now) {
            debug!("Wall jump window closed at t={:.3}", ctx.now);
        }

        self.locomotion = self
            .locomotion
            .next(self.is_dead, self.on_ground, self.velocity.x);
        if self.locomotion == LocomotionState::Dead {
            return self.outcome(MotionDriver::Frozen);
        }

        if !self.is_dashing() {
            self.facing = update_facing(self.facing, input.horizontal);
            self.velocity.x = horizontal_speed(
                self.velocity.x,
                input.horizontal,
                tuning.max_speed,
                profile,
                ctx.dt,
            );
        }

        if input.dash_just_pressed {
            match try_start_dash(
                &mut self.dash,
                self.locomotion,
                self.facing,
                tuning.dash_speed,
                tuning.dash_duration,
            ) {
                Some(vx) => {
                    self.velocity.x = vx;
                    self.jump_hold = None;
                    debug!("Dash started: facing={:?}, vx={}", self.facing, vx);
                }
                None => {
                    trace!(
                        "Dash rejected: dashing={}, locomotion={:?}",
                        self.is_dashing(),
                        self.locomotion
                    );
                }
            }
        }

        let mut wall_launch = None;
        if !self.is_dashing() {
            wall_launch = try_start_wall_jump(
                &mut self.wall_jump,
                self.on_wall,
                self.on_ground,
                input.jump_just_pressed,
                input.horizontal,
                ctx.now,
                tuning,
            );
            if let Some(impulse) = wall_launch {
                self.jump_hold = None;
                debug!("Wall jump: impulse={:?}", impulse);
            }
        }

        let driver = self.drive(ctx, controller, wall_launch);
        trace!(
            "Tick: driver={:?}, locomotion={:?}, velocity={:?}",
            driver, self.locomotion, self.velocity
        );
        self.outcome(driver)
    }

    /// Pick the single vertical writer for this tick and let it write.
    fn drive(
        &mut self,
        ctx: &TickContext,
        controller: &ControllerTuning,
        wall_launch: Option<Vec2>,
    ) -> MotionDriver {
        let tuning = controller.tuning();
        let profile = controller.profile();
        let input = &ctx.input;

        if self.is_dashing() {
            self.velocity.x = advance_dash(
                &mut self.dash,
                self.velocity.x,
                self.locomotion,
                tuning.max_speed,
                ctx.dt,
            );
            self.velocity.y = 0.0;
            if !self.is_dashing() {
                debug!("Dash ended: vx={}", self.velocity.x);
            }
            return MotionDriver::Dash;
        }

        let holding = input.jump_held && !input.jump_just_released;
        if let Some(launch) = try_start_jump(
            &mut self.jump_hold,
            self.on_ground,
            holding,
            tuning.jump_control_time,
            profile,
        ) {
            debug!("Jump started: vy={}", launch);
            self.velocity.y = launch;
        }

        let was_holding = self.is_jump_holding();
        if let Some(vy) = advance_hold(
            &mut self.jump_hold,
            self.velocity.y,
            holding,
            tuning.jump_control_time,
            profile,
            ctx.dt,
        ) {
            self.velocity.y = vy;
            return MotionDriver::JumpHold;
        }
        if was_holding {
            debug!("Jump hold ended: vy={}", self.velocity.y);
        }

        if self.is_wall_jumping() {
            if let Some(impulse) = wall_launch {
                self.velocity = impulse;
            }
            return MotionDriver::WallJump;
        }

        if self.on_ground {
            self.velocity.y = 0.0;
            MotionDriver::Grounded
        } else {
            self.velocity.y = fall(self.velocity.y, profile, ctx.dt);
            MotionDriver::FreeFall
        }
    }

    fn outcome(&self, driver: MotionDriver) -> TickOutcome {
        TickOutcome {
            velocity: self.velocity,
            driver,
            transition: (self.previous_locomotion != self.locomotion)
                .then_some((self.previous_locomotion, self.locomotion)),
        }
    }
}
