//! Controller core: what a tick consumes from the host.

use bevy::math::Vec2;
use serde::Serialize;

/// Input for one tick, already reduced to edges and levels by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub movement: Vec2,
    /// True only on the tick jump went from released to held.
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub crouch_held: bool,
    pub run_held: bool,
    /// True only on the tick shoot went from released to held.
    pub shoot_pressed: bool,
}

impl InputSnapshot {
    pub fn has_movement(&self) -> bool {
        self.movement != Vec2::ZERO
    }
}

/// Contact sensing and velocity access for the controlled body.
///
/// Implementations without an attached rigid body report `None` from
/// [`PhysicsSensors::velocity`] and ignore writes and impulses.
pub trait PhysicsSensors {
    fn is_grounded(&self) -> bool;
    fn is_touching_wall(&self) -> bool;
    fn velocity(&self) -> Option<Vec2>;
    fn set_velocity(&mut self, velocity: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Clips requested on state entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnimationClip {
    Idle,
    Walk,
    Run,
    Crouch,
    Jump,
    Fall,
    WallCling,
    Shoot,
}

/// Fire-and-forget animation playback.
pub trait AnimationSink {
    fn play(&mut self, clip: AnimationClip);
}

/// Everything one tick may look at or touch besides the machine itself.
pub struct Frame<'a> {
    pub input: &'a InputSnapshot,
    pub sensors: &'a mut dyn PhysicsSensors,
    pub animator: Option<&'a mut dyn AnimationSink>,
    /// Monotonic simulation time in seconds.
    pub now: f32,
}

impl<'a> Frame<'a> {
    pub fn new(
        input: &'a InputSnapshot,
        sensors: &'a mut dyn PhysicsSensors,
        animator: Option<&'a mut dyn AnimationSink>,
        now: f32,
    ) -> Self {
        Self {
            input,
            sensors,
            animator,
            now,
        }
    }

    pub(crate) fn play(&mut self, clip: AnimationClip) {
        if let Some(animator) = self.animator.as_mut() {
            animator.play(clip);
        }
    }

    pub(crate) fn grounded(&self) -> bool {
        self.sensors.is_grounded()
    }

    pub(crate) fn touching_wall(&self) -> bool {
        self.sensors.is_touching_wall()
    }

    /// Velocity as the states see it; a missing body reads as at rest.
    pub(crate) fn velocity(&self) -> Vec2 {
        self.sensors.velocity().unwrap_or(Vec2::ZERO)
    }

    pub(crate) fn falling(&self) -> bool {
        self.velocity().y <= 0.0
    }

    /// Grounded and not still moving up from a jump impulse.
    pub(crate) fn landed(&self) -> bool {
        self.grounded() && self.falling()
    }

    pub(crate) fn update_velocity(&mut self, update: impl FnOnce(&mut Vec2)) {
        if let Some(mut velocity) = self.sensors.velocity() {
            update(&mut velocity);
            self.sensors.set_velocity(velocity);
        }
    }

    pub(crate) fn apply_impulse(&mut self, impulse: Vec2) {
        self.sensors.apply_impulse(impulse);
    }
}
