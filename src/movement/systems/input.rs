//! Movement domain: keyboard sampling into controller input.

use bevy::prelude::*;

use crate::controller::InputSnapshot;
use crate::movement::MovementInput;

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const UP: [KeyCode; 2] = [KeyCode::KeyW, KeyCode::ArrowUp];
const DOWN: [KeyCode; 2] = [KeyCode::KeyS, KeyCode::ArrowDown];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const CROUCH: [KeyCode; 3] = [KeyCode::KeyC, KeyCode::KeyS, KeyCode::ArrowDown];
const RUN: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::ShiftRight];
const SHOOT: [KeyCode; 2] = [KeyCode::KeyJ, KeyCode::KeyZ];

/// Reduce the keyboard to one tick of controller input.
pub fn snapshot_from_keys(keyboard: &ButtonInput<KeyCode>) -> InputSnapshot {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.any_pressed(LEFT) {
        x -= 1.0;
    }
    if keyboard.any_pressed(RIGHT) {
        x += 1.0;
    }

    // Vertical axis
    let mut y = 0.0;
    if keyboard.any_pressed(DOWN) {
        y -= 1.0;
    }
    if keyboard.any_pressed(UP) {
        y += 1.0;
    }

    InputSnapshot {
        movement: Vec2::new(x, y),
        jump_pressed: keyboard.any_just_pressed(JUMP),
        jump_held: keyboard.any_pressed(JUMP),
        crouch_held: keyboard.any_pressed(CROUCH),
        run_held: keyboard.any_pressed(RUN),
        shoot_pressed: keyboard.any_just_pressed(SHOOT),
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.0 = snapshot_from_keys(&keyboard);
}
