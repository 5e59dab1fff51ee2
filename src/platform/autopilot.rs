//! Demo/attract-mode player
//!
//! Jumps when the next book ahead comes within `lead` pixels of the player's
//! front edge. With the default tuning a jump is in the air for 37 ticks and
//! clears a 60px book if it starts with the book 25..75px away.

use crate::sim::GameState;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Gap (player right edge to book left edge) at which to jump
    pub lead: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { lead: 60.0 }
    }
}

impl Autopilot {
    /// Should the player jump this frame?
    pub fn wants_jump(&self, state: &GameState) -> bool {
        if !state.running() || state.player.airborne {
            return false;
        }
        let front = state.player.pos.x + state.player.size.x;
        state
            .books
            .iter()
            .map(|book| book.pos.x - front)
            .filter(|gap| *gap >= 0.0)
            .reduce(f32::min)
            .is_some_and(|gap| gap <= self.lead)
    }
}
