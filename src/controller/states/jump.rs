//! Jump state: decides on entry which jump (if any) to perform.

use bevy::log::{debug, info};
use bevy::math::Vec2;
use serde::Serialize;

use super::{PlayerState, StateId, land};
use crate::controller::collaborators::{AnimationClip, Frame};
use crate::controller::context::MovementContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum JumpKind {
    /// Off a wall, away from the facing direction. Spends one jump.
    Wall,
    /// From the ground or inside the coyote window. Free.
    Ground,
    /// Mid-air. Spends one jump.
    Air,
}

#[derive(Default)]
pub(crate) struct JumpState {
    last_kind: Option<JumpKind>,
}

impl JumpState {

    /// The jump performed on the most recent entry, `None` if it did nothing.
    pub(crate) fn last_kind(&self) -> Option<JumpKind> {
        self.last_kind
    }

    fn classify(ctx: &MovementContext, frame: &Frame<'_>) -> Option<JumpKind> {
        let grounded = frame.grounded();
        let has_budget = ctx.jumps_remaining() > 0;

        if frame.touching_wall() && !grounded {
            return has_budget.then_some(JumpKind::Wall);
        }
        if grounded || ctx.coyote_grace_active() {
            return Some(JumpKind::Ground);
        }
        has_budget.then_some(JumpKind::Air)
    }

    fn perform(&mut self, kind: JumpKind, ctx: &mut MovementContext, frame: &mut Frame<'_>) {
        let tuning = ctx.tuning().clone();

        match kind {
            JumpKind::Wall => {
                let away = ctx.facing().opposite().sign();
                frame.update_velocity(|velocity| *velocity = Vec2::ZERO);
                frame.apply_impulse(Vec2::new(
                    away * tuning.wall_jump_horizontal,
                    tuning.jump_impulse,
                ));
                ctx.consume_jump();
                ctx.arm_coyote_grace(tuning.coyote_time);
                ctx.lock_steering(tuning.wall_jump_lock_time);
            }
            JumpKind::Ground => {
                frame.update_velocity(|velocity| velocity.y = 0.0);
                frame.apply_impulse(Vec2::Y * tuning.jump_impulse);
                ctx.consume_coyote_grace();
            }
            JumpKind::Air => {
                ctx.consume_jump();
                frame.update_velocity(|velocity| velocity.y = 0.0);
                frame.apply_impulse(Vec2::Y * tuning.jump_impulse);
            }
        }

        ctx.record_jump(frame.now);
        self.last_kind = Some(kind);
        info!(
            "{:?} jump performed, jumps_remaining={}",
            kind,
            ctx.jumps_remaining()
        );
    }
}

impl PlayerState for JumpState {
    fn enter(&mut self, ctx: &mut MovementContext, frame: &mut Frame<'_>) -> Option<StateId> {
        self.last_kind = None;

        if !ctx.jump_ready(frame.now) {
            debug!("Jump refused: cooldown still running");
            if frame.landed() {
                ctx.land();
                return Some(StateId::Idle);
            }
            return Some(StateId::Fall);
        }

        frame.play(AnimationClip::Jump);
        match Self::classify(ctx, frame) {
            Some(kind) => self.perform(kind, ctx, frame),
            None => debug!("Jump refused: no jumps remaining"),
        }
        None
    }

    fn tick(
        &mut self,
        ctx: &mut MovementContext,
        frame: &mut Frame<'_>,
        _dt: f32,
    ) -> Option<StateId> {
        let speed = ctx.move_speed();
        ctx.steer(frame, speed);

        if frame.input.shoot_pressed {
            return Some(StateId::Shoot);
        }

        if frame.grounded() {
            // Still rising off the ground from this jump's impulse.
            if !frame.falling() {
                return None;
            }
            return Some(land(ctx, frame));
        }

        let touching_wall = frame.touching_wall();
        if touching_wall && frame.falling() {
            return Some(StateId::WallCling);
        }
        if !touching_wall {
            return Some(StateId::Fall);
        }
        None
    }

    fn exit(&mut self, _ctx: &mut MovementContext, _frame: &mut Frame<'_>) {
        debug!("Exiting Jump");
    }
}
