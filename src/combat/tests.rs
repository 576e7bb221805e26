//! Combat domain: tests for health and the attack trigger.

use bevy::prelude::Entity;

use super::{AttackSensor, AttackTrigger, Health};

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_damage_is_capped_at_remaining_health() {
    let mut health = Health::new(3.0);
    assert_eq!(health.take_damage(1.0), 1.0);
    assert_eq!(health.take_damage(5.0), 2.0);
    assert!(health.is_dead());
    assert_eq!(health.percent(), 0.0);
}

// -----------------------------------------------------------------------------
// AttackTrigger tests
// -----------------------------------------------------------------------------

#[test]
fn test_first_attack_is_never_blocked() {
    let mut trigger = AttackTrigger::new(1.0, 0.5);
    assert!(!trigger.is_attacking());
    assert!(trigger.start_attack(0.0));
    assert!(trigger.is_attacking());
}

#[test]
fn test_overlap_damages_only_while_attacking() {
    let mut trigger = AttackTrigger::new(2.0, 0.5);
    assert_eq!(trigger.on_overlap(), None);

    trigger.start_attack(1.0);
    assert_eq!(trigger.on_overlap(), Some(2.0));

    trigger.stop_attack();
    assert_eq!(trigger.on_overlap(), None);
}

#[test]
fn test_attack_cooldown_gates_restart() {
    let mut trigger = AttackTrigger::new(1.0, 0.5);
    assert!(trigger.start_attack(1.0));
    trigger.stop_attack();

    assert!(!trigger.start_attack(1.25));
    assert!(!trigger.is_attacking());

    assert!(trigger.start_attack(1.5));
    assert!(trigger.is_attacking());
}

#[test]
fn test_attack_sensor_starts_idle() {
    let sensor = AttackSensor::new(Entity::PLACEHOLDER);
    assert_eq!(sensor.owner, Entity::PLACEHOLDER);
    assert!(!sensor.was_shooting);
}
