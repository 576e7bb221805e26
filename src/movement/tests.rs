//! Movement domain: tests for input mapping and presentation helpers.

use bevy::prelude::*;

use super::{ContactSensors, PlayerAnimation, WallContact, clip_color, snapshot_from_keys};
use crate::controller::{AnimationClip, AnimationSink, InputSnapshot, StateId};

// -----------------------------------------------------------------------------
// Input mapping tests
// -----------------------------------------------------------------------------

#[test]
fn test_no_keys_is_neutral_input() {
    let keyboard = ButtonInput::<KeyCode>::default();
    assert_eq!(snapshot_from_keys(&keyboard), InputSnapshot::default());
}

#[test]
fn test_opposite_directions_cancel() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyA);
    assert_eq!(snapshot_from_keys(&keyboard).movement, Vec2::new(-1.0, 0.0));

    keyboard.press(KeyCode::ArrowRight);
    assert_eq!(snapshot_from_keys(&keyboard).movement, Vec2::ZERO);
}

#[test]
fn test_jump_edge_lasts_one_frame() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::Space);

    let first = snapshot_from_keys(&keyboard);
    assert!(first.jump_pressed);
    assert!(first.jump_held);

    // Next frame: still held, no new edge.
    keyboard.clear();
    let second = snapshot_from_keys(&keyboard);
    assert!(!second.jump_pressed);
    assert!(second.jump_held);

    keyboard.release(KeyCode::Space);
    assert!(!snapshot_from_keys(&keyboard).jump_held);
}

#[test]
fn test_alternate_jump_key() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyK);
    assert!(snapshot_from_keys(&keyboard).jump_pressed);
}

#[test]
fn test_down_crouches_and_points_down() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::KeyS);

    let input = snapshot_from_keys(&keyboard);
    assert!(input.crouch_held);
    assert_eq!(input.movement.y, -1.0);
    assert_eq!(input.movement.x, 0.0);
}

#[test]
fn test_shift_runs_and_shoot_is_an_edge() {
    let mut keyboard = ButtonInput::<KeyCode>::default();
    keyboard.press(KeyCode::ShiftLeft);
    keyboard.press(KeyCode::KeyJ);

    let input = snapshot_from_keys(&keyboard);
    assert!(input.run_held);
    assert!(input.shoot_pressed);

    keyboard.clear();
    assert!(!snapshot_from_keys(&keyboard).shoot_pressed);
}

// -----------------------------------------------------------------------------
// Component tests
// -----------------------------------------------------------------------------

#[test]
fn test_contact_sensors_wall_flag() {
    let mut sensors = ContactSensors::default();
    assert!(!sensors.touching_wall());

    sensors.wall = WallContact::Right;
    assert!(sensors.touching_wall());
}

#[test]
fn test_player_animation_records_requests() {
    let mut animation = PlayerAnimation::default();
    animation.play(AnimationClip::Jump);
    animation.play(AnimationClip::Fall);

    assert_eq!(animation.clip, Some(AnimationClip::Fall));
    assert_eq!(
        animation.requested,
        vec![AnimationClip::Jump, AnimationClip::Fall]
    );
}

#[test]
fn test_every_clip_has_a_distinct_tint() {
    let colors: Vec<Color> = StateId::ALL
        .iter()
        .map(|state| clip_color(state.clip()))
        .collect();

    for (i, a) in colors.iter().enumerate() {
        for b in &colors[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
