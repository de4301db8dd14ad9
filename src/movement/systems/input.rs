//! Movement domain: keyboard sampling into the per-tick input snapshot.

use bevy::prelude::*;

use crate::movement::MovementInput;

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const DASH_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        x -= 1.0;
    }
    if keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        x += 1.0;
    }
    input.set_horizontal(x);

    input.jump_just_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    input.jump_held = keyboard.any_pressed(JUMP_KEYS);
    input.jump_just_released = keyboard.any_just_released(JUMP_KEYS);
    input.dash_just_pressed = keyboard.any_just_pressed(DASH_KEYS);
}
