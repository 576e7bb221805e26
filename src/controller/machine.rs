//! Controller core: the state machine that owns the states and the context.

use bevy::log::{debug, warn};
use serde::Serialize;

use crate::controller::collaborators::Frame;
use crate::controller::context::{Facing, MovementContext};
use crate::controller::states::{
    FallState, JumpKind, JumpState, Locomotion, PlayerState, ShootState, StateId, WallClingState,
};
use crate::controller::tuning::ControllerTuning;

/// Enter redirects followed within one switch before giving up.
const MAX_REDIRECTS: usize = 2;

struct StateSet {
    idle: Locomotion,
    walk: Locomotion,
    run: Locomotion,
    crouch: Locomotion,
    jump: JumpState,
    fall: FallState,
    wall_cling: WallClingState,
    shoot: ShootState,
}

impl StateSet {
    fn new(tuning: &ControllerTuning) -> Self {
        Self {
            idle: Locomotion::new(StateId::Idle),
            walk: Locomotion::new(StateId::Walk),
            run: Locomotion::new(StateId::Run),
            crouch: Locomotion::new(StateId::Crouch),
            jump: JumpState::default(),
            fall: FallState::new(tuning.wall_cling_cooldown),
            wall_cling: WallClingState::new(tuning.wall_cling_cooldown),
            shoot: ShootState::new(tuning.shoot_duration),
        }
    }

    fn get_mut(&mut self, id: StateId) -> &mut dyn PlayerState {
        match id {
            StateId::Idle => &mut self.idle,
            StateId::Walk => &mut self.walk,
            StateId::Run => &mut self.run,
            StateId::Crouch => &mut self.crouch,
            StateId::Jump => &mut self.jump,
            StateId::Fall => &mut self.fall,
            StateId::WallCling => &mut self.wall_cling,
            StateId::Shoot => &mut self.shoot,
        }
    }
}

/// Read-only view for overlays, logs and animation consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControllerSnapshot {
    pub state: StateId,
    pub jumps_remaining: u8,
    pub max_jumps: u8,
    pub facing: Facing,
    pub coyote_grace: bool,
    pub clinging: bool,
    pub last_jump: Option<JumpKind>,
}

/// The player movement state machine. Exactly one state is active; switches
/// run Exit then Enter inside the tick that asked for them.
pub struct PlayerStateMachine {
    context: MovementContext,
    states: StateSet,
    current: StateId,
    started: bool,
}

impl PlayerStateMachine {
    pub fn new(tuning: ControllerTuning) -> Self {
        Self {
            states: StateSet::new(&tuning),
            context: MovementContext::new(tuning),
            current: StateId::Idle,
            started: false,
        }
    }

    pub fn current_state(&self) -> StateId {
        self.current
    }

    pub fn jumps_remaining(&self) -> u8 {
        self.context.jumps_remaining()
    }

    pub fn facing(&self) -> Facing {
        self.context.facing()
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.context.set_facing(facing);
    }

    pub fn context(&self) -> &MovementContext {
        &self.context
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        ControllerSnapshot {
            state: self.current,
            jumps_remaining: self.context.jumps_remaining(),
            max_jumps: self.context.max_jumps(),
            facing: self.context.facing(),
            coyote_grace: self.context.coyote_grace_active(),
            clinging: self.current == StateId::WallCling && self.states.wall_cling.clinging(),
            last_jump: self.states.jump.last_kind(),
        }
    }

    /// Advance one simulation step. Sensors in `frame` must already reflect
    /// this step.
    pub fn tick(&mut self, dt: f32, frame: &mut Frame<'_>) {
        if !self.started {
            self.started = true;
            let initial = self.current;
            if let Some(redirect) = self.states.get_mut(initial).enter(&mut self.context, frame) {
                self.transition(redirect, frame);
            }
        }

        self.context.advance_timers(dt);

        let current = self.current;
        if let Some(next) = self
            .states
            .get_mut(current)
            .tick(&mut self.context, frame, dt)
        {
            self.switch_state(next, frame);
        }
    }

    /// Switch to `next`. Returns false, changing nothing, when `next` is
    /// already active.
    pub fn switch_state(&mut self, next: StateId, frame: &mut Frame<'_>) -> bool {
        if next == self.current {
            debug!("Ignoring switch to {:?}: already active", next);
            return false;
        }
        self.transition(next, frame);
        true
    }

    fn transition(&mut self, next: StateId, frame: &mut Frame<'_>) {
        let mut next = next;
        for _ in 0..=MAX_REDIRECTS {
            let previous = self.current;
            // Switching before the first tick: the initial state was never entered.
            if self.started {
                self.states
                    .get_mut(previous)
                    .exit(&mut self.context, frame);
            }
            self.started = true;
            self.current = next;
            debug!("State {:?} -> {:?}", previous, next);

            match self.states.get_mut(next).enter(&mut self.context, frame) {
                Some(redirect) if redirect != next => next = redirect,
                _ => return,
            }
        }
        warn!(
            "Enter redirects exceeded {}; staying in {:?}",
            MAX_REDIRECTS, self.current
        );
    }
}
