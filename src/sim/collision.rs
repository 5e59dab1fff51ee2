//! Axis-aligned boxes and the player/book hit test

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }
}

/// Does the player box touch the book box?
///
/// Only three edges are compared: the horizontal ranges must overlap and the
/// player's bottom must be below the book's top. The player's top edge is
/// never tested against the book's bottom, so this is more forgiving than a
/// full overlap test. Keep it that way; the game is tuned around it.
pub fn player_hits_book(player: &Rect, book: &Rect) -> bool {
    player.left() < book.right() && player.right() > book.left() && player.bottom() > book.top()
}
