//! Keyboard input handling

use game_core::FrameInput;
use macroquad::prelude::*;

/// Poll the keyboard for this frame
pub fn poll() -> FrameInput {
    FrameInput {
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        confirm: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        quit: is_key_pressed(KeyCode::Q),
    }
}
