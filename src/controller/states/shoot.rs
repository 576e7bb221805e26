//! Shoot state: a timed attack pose; the hit window itself lives in combat.

use bevy::log::debug;

use super::{PlayerState, StateId, airborne_target, land};
use crate::controller::collaborators::{AnimationClip, Frame};
use crate::controller::context::MovementContext;

pub(crate) struct ShootState {
    duration: f32,
    elapsed: f32,
}

impl ShootState {
    pub(crate) fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }
}

impl PlayerState for ShootState {
    fn enter(&mut self, _ctx: &mut MovementContext, frame: &mut Frame<'_>) -> Option<StateId> {
        self.elapsed = 0.0;
        frame.play(AnimationClip::Shoot);
        debug!("Entering Shoot at {:.2}s", frame.now);
        None
    }

    fn tick(
        &mut self,
        ctx: &mut MovementContext,
        frame: &mut Frame<'_>,
        dt: f32,
    ) -> Option<StateId> {
        let speed = ctx.move_speed();
        ctx.steer(frame, speed);

        self.elapsed += dt;
        if self.elapsed < self.duration {
            return None;
        }

        if frame.landed() {
            return Some(land(ctx, frame));
        }
        Some(airborne_target(frame))
    }
}
