//! WallCling state: a scripted slide down a wall.

use bevy::log::debug;

use super::{PlayerState, StateId, land};
use crate::controller::collaborators::{AnimationClip, Frame};
use crate::controller::context::{Cooldown, MovementContext};

pub(crate) struct WallClingState {
    toggle_cooldown: Cooldown,
    /// Jump was already down when the cling started; it must be released first.
    jump_held_on_enter: bool,
    clinging: bool,
    entered_at: f32,
}

impl WallClingState {
    pub(crate) fn new(toggle_cooldown: f32) -> Self {
        Self {
            toggle_cooldown: Cooldown::new(toggle_cooldown),
            jump_held_on_enter: false,
            clinging: true,
            entered_at: 0.0,
        }
    }

    pub(crate) fn clinging(&self) -> bool {
        self.clinging
    }
}

impl PlayerState for WallClingState {
    fn enter(&mut self, ctx: &mut MovementContext, frame: &mut Frame<'_>) -> Option<StateId> {
        self.entered_at = frame.now;
        self.jump_held_on_enter = frame.input.jump_held;
        self.toggle_cooldown.stamp(frame.now);
        self.clinging = true;
        ctx.clear_wall_release();

        frame.play(AnimationClip::WallCling);

        let slide_speed = ctx.tuning().wall_slide_speed;
        frame.update_velocity(|velocity| velocity.y = velocity.y.max(-slide_speed));

        debug!("Entering WallCling at {:.2}s", frame.now);
        None
    }

    fn tick(
        &mut self,
        ctx: &mut MovementContext,
        frame: &mut Frame<'_>,
        _dt: f32,
    ) -> Option<StateId> {
        if frame.input.shoot_pressed {
            return Some(StateId::Shoot);
        }

        if frame.input.crouch_held && self.toggle_cooldown.ready(frame.now) {
            self.clinging = !self.clinging;
            self.toggle_cooldown.stamp(frame.now);

            if !self.clinging {
                ctx.release_wall(frame.now);
                return Some(StateId::Fall);
            }
        }

        if self.clinging {
            // Overrides whatever gravity did this step.
            let slide_speed = ctx.tuning().wall_slide_speed;
            frame.update_velocity(|velocity| velocity.y = -slide_speed);

            if frame.input.jump_pressed
                && ctx.jumps_remaining() > 0
                && !self.jump_held_on_enter
                && self.toggle_cooldown.ready(frame.now)
            {
                return Some(StateId::Jump);
            }
            if !frame.input.jump_held {
                self.jump_held_on_enter = false;
            }
        }

        if frame.grounded() {
            return Some(land(ctx, frame));
        }

        if !frame.touching_wall() {
            return Some(StateId::Fall);
        }

        None
    }

    fn exit(&mut self, _ctx: &mut MovementContext, frame: &mut Frame<'_>) {
        debug!("Exiting WallCling after {:.2}s", frame.now - self.entered_at);
    }
}
