//! Movement domain: components and physics layers for the controlled character.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{AnimationClip, AnimationSink, ControllerTuning, PlayerStateMachine};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Pickups and triggers - should not block movement
    Sensor,
    /// Player attack sensor (damages enemies)
    PlayerHitbox,
}

#[derive(Component, Debug)]
pub struct Player;

/// Contact sensing refreshed by ray casts at the start of every frame.
#[derive(Component, Debug, Default)]
pub struct ContactSensors {
    pub grounded: bool,
    pub wall: WallContact,
}

impl ContactSensors {
    pub fn touching_wall(&self) -> bool {
        self.wall != WallContact::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallContact {
    #[default]
    None,
    Left,
    Right,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// The state machine driving this character.
#[derive(Component)]
pub struct PlayerController {
    pub machine: PlayerStateMachine,
}

impl PlayerController {
    pub fn new(tuning: ControllerTuning) -> Self {
        Self {
            machine: PlayerStateMachine::new(tuning),
        }
    }
}

/// Last clip the controller asked for; presentation systems render it.
#[derive(Component, Debug, Default)]
pub struct PlayerAnimation {
    pub clip: Option<AnimationClip>,
    /// Clips requested since presentation last drained them.
    pub requested: Vec<AnimationClip>,
}

impl AnimationSink for PlayerAnimation {
    fn play(&mut self, clip: AnimationClip) {
        self.clip = Some(clip);
        self.requested.push(clip);
    }
}
