//! Movement domain: tuning load and player spawn.

use std::path::Path;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackSensor, AttackTrigger};
use crate::controller::{ControllerTuning, TUNING_PATH, load_tuning};
use crate::movement::{ContactSensors, GameLayer, Player, PlayerAnimation, PlayerController};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 100.0, 0.0);

/// Horizontal distance from the body centre to the attack sensor.
pub const ATTACK_REACH: f32 = 28.0;
const ATTACK_SIZE: Vec2 = Vec2::new(32.0, 28.0);

/// Replace the default tuning with `assets/data/controller_tuning.ron` if it
/// loads and validates. Failures keep the defaults.
pub(crate) fn load_controller_tuning(mut tuning: ResMut<ControllerTuning>) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(loaded) => {
            info!(
                "Loaded controller tuning from {}: move_speed={}, max_jumps={}, jump_cooldown={}",
                TUNING_PATH, loaded.move_speed, loaded.max_jumps, loaded.jump_cooldown
            );
            *tuning = loaded;
        }
        Err(e) => warn!("{}; using default controller tuning", e),
    }
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<ControllerTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let player = commands
        .spawn((
            // Identity & control
            (
                Player,
                PlayerController::new(tuning.clone()),
                ContactSensors::default(),
                PlayerAnimation::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_translation(PLAYER_SPAWN),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(tuning.body_mass),
                GravityScale(0.0), // Gravity is applied manually before the controller runs
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
                ),
            ),
        ))
        .id();

    commands.spawn((
        AttackSensor::new(player),
        AttackTrigger::new(tuning.attack_damage, tuning.attack_cooldown),
        Sprite {
            color: Color::srgba(1.0, 0.3, 0.3, 0.0),
            custom_size: Some(ATTACK_SIZE),
            ..default()
        },
        Transform::from_xyz(ATTACK_REACH, 0.0, 0.1),
        Collider::rectangle(ATTACK_SIZE.x, ATTACK_SIZE.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy]),
        ChildOf(player),
    ));

    info!(
        "Spawned player: max_jumps={}, move_speed={}, jump_impulse={}",
        tuning.max_jumps, tuning.move_speed, tuning.jump_impulse
    );
}
