//! Running to BYU - a side-scrolling runner for the portfolio site
//!
//! Core modules:
//! - `sim`: Simulation (player physics, book spawning, collisions, game state)
//! - `renderer`: Scene building and the browser canvas painter
//! - `platform`: Host-side frame clock, loop ownership and input routing
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (key bindings, visuals)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::TuningError;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Canvas dimensions in pixels
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 300.0;
    /// Height of the ground strip at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Player box
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Upward speed applied on jump (pixels/tick)
    pub const JUMP_FORCE: f32 = 15.0;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Horizontal scroll speed of books (pixels/tick)
    pub const GAME_SPEED: f32 = 5.0;

    /// Book obstacles
    pub const BOOK_WIDTH: f32 = 30.0;
    pub const BOOK_HEIGHT: f32 = 40.0;
    pub const BOOK_HEIGHT_VARIATION: f32 = 20.0;
    /// Minimum pixels between the spawn edge and the last book
    pub const MIN_BOOK_SPACING: f32 = 300.0;
    /// Spawn interval in milliseconds (base ± variation)
    pub const BASE_BOOK_INTERVAL_MS: f64 = 2000.0;
    pub const BOOK_INTERVAL_VARIATION_MS: f64 = 500.0;

    /// The school landmark at the end of the run, flush with the arena's
    /// right edge (x = 800 in the default arena)
    pub const SCHOOL_WIDTH: f32 = 100.0;
    pub const SCHOOL_HEIGHT: f32 = 100.0;
}
