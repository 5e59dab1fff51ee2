//! Runner simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only from the host (`advance(delta_ms)`)
//! - Seeded RNG only
//! - Books kept in spawn order (leftmost first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, player_hits_book};
pub use state::{Book, GameEvent, GamePhase, GameState, GameView, Player};
pub use tick::{advance, handle_jump, reset};
