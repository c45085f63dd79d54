//! Movement domain: keyboard sampling for the player motor.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const CROUCH_KEYS: [KeyCode; 3] = [KeyCode::KeyS, KeyCode::ArrowDown, KeyCode::ControlLeft];
const JUMP_KEYS: [KeyCode; 3] = [KeyCode::Space, KeyCode::KeyK, KeyCode::KeyW];

/// Build the motor input from the current key state.
///
/// The vertical axis only ever points down: the motor reads a negative
/// `axis.y` as a crouch request and has no use for up.
pub fn sample_input(keyboard: &ButtonInput<KeyCode>) -> MovementInput {
    let left = keyboard.any_pressed(LEFT_KEYS);
    let right = keyboard.any_pressed(RIGHT_KEYS);
    let x = match (left, right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    let y = if keyboard.any_pressed(CROUCH_KEYS) { -1.0 } else { 0.0 };

    MovementInput {
        axis: Vec2::new(x, y),
        jump_just_pressed: keyboard.any_just_pressed(JUMP_KEYS),
        jump_held: keyboard.any_pressed(JUMP_KEYS),
    }
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let sampled = sample_input(&keyboard);
    if *input != sampled {
        *input = sampled;
    }
}
