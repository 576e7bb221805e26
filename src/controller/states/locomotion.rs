//! Grounded states: Idle, Walk, Run and Crouch share one decision ladder.

use bevy::log::debug;
use bevy::math::Vec2;

use super::{PlayerState, StateId, airborne_target, locomotion_target};
use crate::controller::collaborators::Frame;
use crate::controller::context::MovementContext;

pub(crate) struct Locomotion {
    id: StateId,
}

impl Locomotion {
    pub(crate) fn new(id: StateId) -> Self {
        debug_assert!(id.is_grounded());
        Self { id }
    }

    fn speed(&self, ctx: &MovementContext) -> Option<f32> {
        match self.id {
            StateId::Walk => Some(ctx.move_speed()),
            StateId::Run => Some(ctx.tuning().run_speed()),
            StateId::Crouch => Some(ctx.tuning().crouch_speed()),
            _ => None,
        }
    }
}

impl PlayerState for Locomotion {
    fn enter(&mut self, ctx: &mut MovementContext, frame: &mut Frame<'_>) -> Option<StateId> {
        match self.id {
            StateId::Idle => frame.update_velocity(|velocity| *velocity = Vec2::ZERO),
            StateId::Crouch => {
                let damping = ctx.tuning().crouch_damping;
                frame.update_velocity(|velocity| velocity.x *= damping);
            }
            _ => {}
        }
        frame.play(self.id.clip());
        debug!("Entering {:?}", self.id);
        None
    }

    fn tick(
        &mut self,
        ctx: &mut MovementContext,
        frame: &mut Frame<'_>,
        _dt: f32,
    ) -> Option<StateId> {
        // Losing the ground outranks every input.
        if !frame.grounded() {
            let next = airborne_target(frame);
            if next == StateId::Fall {
                ctx.arm_coyote_grace(ctx.tuning().coyote_time);
            }
            return Some(next);
        }

        if frame.input.shoot_pressed {
            return Some(StateId::Shoot);
        }

        if frame.input.crouch_held {
            if self.id != StateId::Crouch {
                return Some(StateId::Crouch);
            }
            let speed = ctx.tuning().crouch_speed();
            ctx.steer(frame, speed);
            return None;
        }

        if frame.input.jump_pressed
            && ctx.jumps_remaining() > 0
            && ctx.jump_ready(frame.now)
        {
            debug!(
                "{:?}: jump requested, jumps_remaining={}",
                self.id,
                ctx.jumps_remaining()
            );
            return Some(StateId::Jump);
        }

        let target = locomotion_target(frame.input);
        if target != self.id {
            return Some(target);
        }

        if let Some(speed) = self.speed(ctx) {
            ctx.steer(frame, speed);
        }
        None
    }

    fn exit(&mut self, _ctx: &mut MovementContext, _frame: &mut Frame<'_>) {
        debug!("Exiting {:?}", self.id);
    }
}
