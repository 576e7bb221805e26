//! Fall state: airborne without an active jump.

use bevy::log::debug;

use super::{PlayerState, StateId, land};
use crate::controller::collaborators::{AnimationClip, Frame};
use crate::controller::context::{Cooldown, MovementContext};

pub(crate) struct FallState {
    /// Re-grab gate, measured from the last time the wall was let go on purpose.
    cling_cooldown: Cooldown,
    entered_at: f32,
}

impl FallState {
    pub(crate) fn new(cling_cooldown: f32) -> Self {
        Self {
            cling_cooldown: Cooldown::new(cling_cooldown),
            entered_at: 0.0,
        }
    }
}

impl PlayerState for FallState {
    fn enter(&mut self, ctx: &mut MovementContext, frame: &mut Frame<'_>) -> Option<StateId> {
        self.entered_at = frame.now;
        if let Some(released_at) = ctx.wall_release() {
            self.cling_cooldown.stamp(released_at);
        }
        frame.play(AnimationClip::Fall);
        debug!("Entering Fall at {:.2}s", frame.now);
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

        let touching_wall = frame.touching_wall();
        if !touching_wall {
            ctx.clear_wall_release();
        }

        if frame.input.crouch_held && touching_wall && self.cling_cooldown.ready(frame.now) {
            return Some(StateId::WallCling);
        }

        if frame.landed() {
            return Some(land(ctx, frame));
        }

        // A wall let go of on purpose is not grabbed again until contact breaks.
        if touching_wall && frame.falling() && ctx.wall_release().is_none() {
            return Some(StateId::WallCling);
        }

        // The jump cooldown itself is enforced when Jump is entered.
        if frame.input.jump_pressed && ctx.jumps_remaining() > 0 {
            return Some(StateId::Jump);
        }

        if frame.input.shoot_pressed {
            return Some(StateId::Shoot);
        }

        None
    }

    fn exit(&mut self, _ctx: &mut MovementContext, frame: &mut Frame<'_>) {
        debug!("Exiting Fall after {:.2}s", frame.now - self.entered_at);
    }
}
