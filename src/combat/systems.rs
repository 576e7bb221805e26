//! Combat domain: attack window, hit detection and damage resolution.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{AttackSensor, AttackTrigger, DamageEvent, DeathEvent, Enemy, Health};
use crate::controller::StateId;
use crate::movement::{ATTACK_REACH, PlayerController};

/// Open the attack window when the owner enters Shoot, close it when it leaves.
pub(crate) fn sync_attack_triggers(
    time: Res<Time>,
    owners: Query<&PlayerController>,
    mut sensors: Query<(&mut AttackSensor, &mut AttackTrigger, &mut Sprite)>,
) {
    let now = time.elapsed_secs();

    for (mut sensor, mut trigger, mut sprite) in &mut sensors {
        let Ok(controller) = owners.get(sensor.owner) else {
            continue;
        };

        let shooting = controller.machine.current_state() == StateId::Shoot;
        if shooting && !sensor.was_shooting {
            if trigger.start_attack(now) {
                debug!("Attack window opened");
            } else {
                debug!("Attack refused: cooldown still running");
            }
        } else if !shooting && sensor.was_shooting {
            trigger.stop_attack();
            debug!("Attack window closed");
        }
        sensor.was_shooting = shooting;

        let alpha = if trigger.is_attacking() { 0.35 } else { 0.0 };
        sprite.color.set_alpha(alpha);
    }
}

/// Keep the attack sensor on the side the owner faces.
pub(crate) fn position_attack_sensors(
    owners: Query<&PlayerController>,
    mut sensors: Query<(&AttackSensor, &mut Transform)>,
) {
    for (sensor, mut transform) in &mut sensors {
        let Ok(controller) = owners.get(sensor.owner) else {
            continue;
        };
        transform.translation.x = controller.machine.facing().sign() * ATTACK_REACH;
    }
}

pub(crate) fn detect_attack_hits(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    sensors: Query<(&AttackSensor, &AttackTrigger)>,
    targets: Query<Entity, (With<Enemy>, With<Health>)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (sensor_entity, target_entity) in pairs {
            let Ok((sensor, trigger)) = sensors.get(sensor_entity) else {
                continue;
            };
            let Ok(target) = targets.get(target_entity) else {
                continue;
            };
            let Some(amount) = trigger.on_overlap() else {
                continue;
            };

            damage_events.write(DamageEvent {
                source: sensor.owner,
                target,
                amount,
            });
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    mut query: Query<(&mut Health, &mut Sprite)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut sprite)) = query.get_mut(event.target) else {
            continue;
        };
        if health.is_dead() {
            continue;
        }

        let dealt = health.take_damage(event.amount);
        info!(
            "{:?} hit {:?} for {} ({:.0}% left)",
            event.source,
            event.target,
            dealt,
            health.percent() * 100.0
        );

        sprite.color = Color::srgb(1.0, 0.5, 0.5);

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

pub(crate) fn despawn_dead(mut commands: Commands, mut death_events: MessageReader<DeathEvent>) {
    for event in death_events.read() {
        info!("{:?} defeated", event.entity);
        if let Ok(mut entity) = commands.get_entity(event.entity) {
            entity.despawn();
        }
    }
}
