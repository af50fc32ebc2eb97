//! Input sampling
//!
//! Maps raw keyboard state onto game actions once per frame and hands the
//! simulation a plain snapshot, so nothing below this module touches
//! macroquad key state directly.

use macroquad::prelude::*;

/// The game's actions and their key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Shoot,
    /// Dismisses the win screen
    Acknowledge,
}

/// Is the action's key currently held?
pub fn action_down(action: Action) -> bool {
    match action {
        Action::MoveLeft => is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        Action::MoveRight => is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
        Action::Jump => {
            is_key_down(KeyCode::Space) || is_key_down(KeyCode::W) || is_key_down(KeyCode::Up)
        }
        Action::Shoot => {
            is_key_down(KeyCode::Z)
                || is_key_down(KeyCode::LeftControl)
                || is_key_down(KeyCode::RightControl)
        }
        Action::Acknowledge => is_key_down(KeyCode::Escape),
    }
}

/// Was the action's key pressed this frame?
pub fn action_pressed(action: Action) -> bool {
    match action {
        Action::Acknowledge => is_key_pressed(KeyCode::Escape),
        // Held-state actions reuse the down check; the simulation does
        // its own edge handling (grounded flag, shoot cooldown).
        _ => action_down(action),
    }
}

/// One frame of held input, as seen by the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
}

/// Sample the keyboard into a snapshot. Call once per frame.
pub fn sample() -> InputSnapshot {
    InputSnapshot {
        left: action_down(Action::MoveLeft),
        right: action_down(Action::MoveRight),
        jump: action_down(Action::Jump),
        shoot: action_down(Action::Shoot),
    }
}
