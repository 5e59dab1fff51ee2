//! Input routing
//!
//! Maps raw key codes and pointer presses to game actions. Which keys jump is
//! a [`Settings`] concern; the simulation only ever sees a jump request.

use crate::settings::Settings;
use crate::sim::GamePhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    /// Start a new run (start button, "try again", canvas click)
    Start,
}

/// Action for a `keydown` with the given `KeyboardEvent.code`
///
/// Jump keys map to a jump in every phase; the simulation ignores the
/// request when no run is active or the player is already airborne.
pub fn key_action(code: &str, settings: &Settings) -> Option<InputAction> {
    settings.is_jump_key(code).then_some(InputAction::Jump)
}

/// Action for a click/tap on the canvas
pub fn pointer_action(phase: GamePhase, settings: &Settings) -> Option<InputAction> {
    match phase {
        GamePhase::Running if settings.pointer_jump => Some(InputAction::Jump),
        GamePhase::Running => None,
        GamePhase::Idle | GamePhase::GameOver if settings.click_to_start => {
            Some(InputAction::Start)
        }
        GamePhase::Idle | GamePhase::GameOver => None,
    }
}
