//! Controller core: the movement resource block shared by every state.

use bevy::log::debug;
use serde::Serialize;

use crate::controller::collaborators::Frame;
use crate::controller::tuning::ControllerTuning;

/// Horizontal input below this magnitude does not turn the character.
const FACING_DEADZONE: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn from_axis(x: f32) -> Option<Self> {
        if x > FACING_DEADZONE {
            Some(Facing::Right)
        } else if x < -FACING_DEADZONE {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Time gate that opens `duration` seconds after the last stamp.
/// A fresh gate is open: its stamp sits infinitely far in the past.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooldown {
    duration: f32,
    last: f32,
}

impl Cooldown {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            last: f32::NEG_INFINITY,
        }
    }

    pub fn ready(&self, now: f32) -> bool {
        now - self.last >= self.duration
    }

    pub fn stamp(&mut self, now: f32) {
        self.last = now;
    }

    pub fn last(&self) -> Option<f32> {
        self.last.is_finite().then_some(self.last)
    }
}

/// Mutable movement data owned by the machine and lent to the active state.
#[derive(Debug, Clone)]
pub struct MovementContext {
    tuning: ControllerTuning,
    jumps_remaining: u8,
    facing: Facing,
    coyote_grace: f32,
    steer_lock: f32,
    /// Opens `jump_cooldown` after the last jump actually performed.
    jump_gate: Cooldown,
    /// Time the character last let go of a wall on purpose.
    wall_release: Option<f32>,
}

impl MovementContext {
    pub fn new(tuning: ControllerTuning) -> Self {
        Self {
            jumps_remaining: tuning.max_jumps,
            jump_gate: Cooldown::new(tuning.jump_cooldown),
            tuning,
            facing: Facing::default(),
            coyote_grace: 0.0,
            steer_lock: 0.0,
            wall_release: None,
        }
    }

    pub fn tuning(&self) -> &ControllerTuning {
        &self.tuning
    }

    pub fn move_speed(&self) -> f32 {
        self.tuning.move_speed
    }

    pub fn max_jumps(&self) -> u8 {
        self.tuning.max_jumps
    }

    pub fn jumps_remaining(&self) -> u8 {
        self.jumps_remaining
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    /// Treat the character as grounded for jump purposes for `duration` seconds.
    pub fn arm_coyote_grace(&mut self, duration: f32) {
        self.coyote_grace = duration.max(0.0);
    }

    pub fn coyote_grace_active(&self) -> bool {
        self.coyote_grace > 0.0
    }

    pub(crate) fn consume_coyote_grace(&mut self) {
        self.coyote_grace = 0.0;
    }

    /// Refill the jump budget. Landing is the only place this happens.
    pub(crate) fn land(&mut self) {
        self.jumps_remaining = self.tuning.max_jumps;
        self.coyote_grace = 0.0;
        self.steer_lock = 0.0;
        self.wall_release = None;
        debug!("Landed: jumps_remaining={}", self.jumps_remaining);
    }

    /// Spend one jump from the budget. Returns false when it is empty.
    pub(crate) fn consume_jump(&mut self) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }
        self.jumps_remaining -= 1;
        true
    }

    /// Whether a jump may be performed at `now`. Refused requests never
    /// move the gate.
    pub fn jump_ready(&self, now: f32) -> bool {
        self.jump_gate.ready(now)
    }

    pub(crate) fn record_jump(&mut self, now: f32) {
        self.jump_gate.stamp(now);
    }

    pub(crate) fn lock_steering(&mut self, duration: f32) {
        self.steer_lock = duration.max(0.0);
    }

    pub fn steering_locked(&self) -> bool {
        self.steer_lock > 0.0
    }

    /// Turn toward horizontal input and set horizontal velocity from it.
    /// Vertical velocity is left alone.
    pub(crate) fn steer(&mut self, frame: &mut Frame<'_>, speed: f32) {
        if self.steering_locked() {
            return;
        }
        let axis = frame.input.movement.x;
        if let Some(facing) = Facing::from_axis(axis) {
            self.facing = facing;
        }
        frame.update_velocity(|velocity| velocity.x = axis * speed);
    }

    pub(crate) fn release_wall(&mut self, now: f32) {
        self.wall_release = Some(now);
    }

    pub(crate) fn wall_release(&self) -> Option<f32> {
        self.wall_release
    }

    pub(crate) fn clear_wall_release(&mut self) {
        self.wall_release = None;
    }

    pub(crate) fn advance_timers(&mut self, dt: f32) {
        if self.coyote_grace > 0.0 {
            self.coyote_grace -= dt;
        }
        if self.steer_lock > 0.0 {
            self.steer_lock -= dt;
        }
    }
}
