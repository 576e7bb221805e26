//! Combat domain: the player's attack trigger and damage resolution.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AttackSensor, AttackTrigger, Enemy, Health};
pub use events::{DamageEvent, DeathEvent};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_damage, despawn_dead, detect_attack_hits, position_attack_sensors, sync_attack_triggers,
};
use crate::movement::drive_controller;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (
                    sync_attack_triggers,
                    position_attack_sensors,
                    detect_attack_hits,
                    apply_damage,
                    despawn_dead,
                )
                    .chain()
                    .after(drive_controller),
            );
    }
}
