//! Movement domain: Bevy wiring for the player controller.
//!
//! Per frame: sample the keyboard, refresh ray-cast contacts, integrate
//! gravity, tick the controller, then mirror its clip and facing on the
//! sprite.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use bootstrap::{ATTACK_REACH, PLAYER_SIZE, PLAYER_SPAWN};
pub use components::{
    ContactSensors, GameLayer, Ground, Player, PlayerAnimation, PlayerController, Wall,
    WallContact,
};
pub use resources::MovementInput;
pub use systems::animation::clip_color;
pub use systems::input::snapshot_from_keys;

pub(crate) use systems::drive_controller;

use bevy::prelude::*;

use crate::controller::ControllerTuning;
use crate::movement::bootstrap::{load_controller_tuning, spawn_player};
use crate::movement::systems::{
    apply_gravity, detect_ground, detect_walls, flip_to_facing, play_requested_clips, read_input,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, (load_controller_tuning, spawn_player).chain())
            .add_systems(
                Update,
                (
                    read_input,
                    (detect_ground, detect_walls),
                    apply_gravity,
                    drive_controller,
                    (play_requested_clips, flip_to_facing),
                )
                    .chain(),
            );
    }
}
