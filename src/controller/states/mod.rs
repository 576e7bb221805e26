//! Controller core: the movement states and their shared routing.

mod fall;
mod jump;
mod locomotion;
mod shoot;
mod wall_cling;

pub(crate) use fall::FallState;
pub(crate) use jump::JumpState;
pub use jump::JumpKind;
pub(crate) use locomotion::Locomotion;
pub(crate) use shoot::ShootState;
pub(crate) use wall_cling::WallClingState;

use serde::Serialize;

use crate::controller::collaborators::{AnimationClip, Frame, InputSnapshot};
use crate::controller::context::MovementContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StateId {
    Idle,
    Walk,
    Run,
    Crouch,
    Jump,
    Fall,
    WallCling,
    Shoot,
}

impl StateId {
    pub const ALL: [StateId; 8] = [
        StateId::Idle,
        StateId::Walk,
        StateId::Run,
        StateId::Crouch,
        StateId::Jump,
        StateId::Fall,
        StateId::WallCling,
        StateId::Shoot,
    ];

    /// States that only run while standing on something.
    pub fn is_grounded(self) -> bool {
        matches!(
            self,
            StateId::Idle | StateId::Walk | StateId::Run | StateId::Crouch
        )
    }

    pub fn clip(self) -> AnimationClip {
        match self {
            StateId::Idle => AnimationClip::Idle,
            StateId::Walk => AnimationClip::Walk,
            StateId::Run => AnimationClip::Run,
            StateId::Crouch => AnimationClip::Crouch,
            StateId::Jump => AnimationClip::Jump,
            StateId::Fall => AnimationClip::Fall,
            StateId::WallCling => AnimationClip::WallCling,
            StateId::Shoot => AnimationClip::Shoot,
        }
    }
}

/// One movement state. `enter` and `tick` return the state to switch to, if
/// any; the machine performs the switch, so a state never runs past its own
/// hand-off.
pub(crate) trait PlayerState {
    fn enter(&mut self, _ctx: &mut MovementContext, _frame: &mut Frame<'_>) -> Option<StateId> {
        None
    }

    fn tick(&mut self, ctx: &mut MovementContext, frame: &mut Frame<'_>, dt: f32)
    -> Option<StateId>;

    fn exit(&mut self, _ctx: &mut MovementContext, _frame: &mut Frame<'_>) {}
}

/// Ground locomotion picked from the movement vector alone.
pub(crate) fn locomotion_target(input: &InputSnapshot) -> StateId {
    if !input.has_movement() {
        StateId::Idle
    } else if input.run_held {
        StateId::Run
    } else {
        StateId::Walk
    }
}

/// Refill the jump budget and pick the grounded state to land in.
pub(crate) fn land(ctx: &mut MovementContext, frame: &Frame<'_>) -> StateId {
    ctx.land();
    locomotion_target(frame.input)
}

/// Where an airborne character goes when nothing else claims it.
pub(crate) fn airborne_target(frame: &Frame<'_>) -> StateId {
    if frame.touching_wall() && frame.falling() {
        StateId::WallCling
    } else {
        StateId::Fall
    }
}
