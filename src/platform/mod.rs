//! Platform abstraction layer
//!
//! Everything between the browser (or a headless driver) and the simulation:
//! - Frame timestamps to tick deltas
//! - Key/pointer events to game actions
//! - Ownership of the game loop (whether to keep calling `advance`)

pub mod autopilot;
pub mod input;
pub mod runner;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputAction, key_action, pointer_action};
pub use runner::Runner;
pub use time::FrameClock;
