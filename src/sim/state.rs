//! Game state and core simulation types
//!
//! [`GameState`] is the single owner of everything the runner mutates.
//! Hosts get read-only access through [`GameState::view`] or by borrowing
//! the state immutably for rendering.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing started yet (start button showing)
    #[default]
    Idle,
    /// Books scrolling, score ticking
    Running,
    /// Hit a book; frozen until the next reset
    GameOver,
}

/// Something that happened during the last tick, for hosts (logging, sound)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player touched down after a jump
    Landed,
    /// A new book appeared at the spawn edge
    BookSpawned { x: f32, height: f32 },
    /// A book scrolled fully off the left edge
    BookCleared,
    /// Player ran into a book
    Collision,
}

/// The runner. Only `pos.y` ever changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (screen space, y grows downward)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in pixels/tick (negative is up)
    pub vel_y: f32,
    pub airborne: bool,
}

impl Player {
    /// Player standing on the ground
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_line()),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vel_y: 0.0,
            airborne: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Start a jump. Returns false (and changes nothing) while airborne.
    pub fn jump(&mut self, force: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.vel_y = -force;
        self.airborne = true;
        true
    }

    /// Apply one tick of gravity and clamp to the ground.
    ///
    /// Returns true on the tick the player lands after a jump.
    pub fn integrate(&mut self, gravity: f32, ground_line: f32) -> bool {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        if self.pos.y >= ground_line {
            let was_airborne = self.airborne;
            self.pos.y = ground_line;
            self.vel_y = 0.0;
            self.airborne = false;
            return was_airborne;
        }
        false
    }
}

/// A book obstacle standing on the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Book {
    /// A book of the given height at `x`, resting on the ground strip
    pub fn new(x: f32, height: f32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(x, tuning.ground_top() - height),
            size: Vec2::new(tuning.book_width, height),
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the canvas
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// What the page shows next to the canvas, read after every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameView {
    pub score: u64,
    pub game_over: bool,
    pub running: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from (for logs and reproduction)
    pub seed: u64,
    /// Spawn RNG (interval and height rolls)
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Active books, oldest (leftmost) first
    pub books: Vec<Book>,
    /// One point per tick survived
    pub score: u64,
    /// Host-supplied elapsed time, in milliseconds
    pub clock_ms: f64,
    /// `clock_ms` at the last spawn (or at reset)
    pub last_spawn_ms: f64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create an idle game with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Tuning::default(), seed, Pcg32::seed_from_u64(seed))
    }

    /// Create an idle game with explicit tuning and RNG
    pub fn with_rng(tuning: Tuning, seed: u64, rng: Pcg32) -> Self {
        debug_assert!(tuning.validate().is_ok(), "tuning must be validated");
        let player = Player::new(&tuning);
        Self {
            seed,
            rng,
            tuning,
            phase: GamePhase::Idle,
            player,
            books: Vec::new(),
            score: 0,
            clock_ms: 0.0,
            last_spawn_ms: 0.0,
            events: Vec::new(),
        }
    }

    /// Create an idle game with explicit tuning, seeding a fresh RNG
    pub fn with_tuning(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, seed, Pcg32::seed_from_u64(seed))
    }

    #[inline]
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn view(&self) -> GameView {
        GameView {
            score: self.score,
            game_over: self.game_over(),
            running: self.running(),
        }
    }
}
