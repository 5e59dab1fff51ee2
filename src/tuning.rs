//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a host can load a
//! different feel from JSON without touching code. Missing fields fall
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    pub ground_height: f32,

    // === Player ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Upward speed set on jump (pixels/tick)
    pub jump_force: f32,
    /// Added to vertical velocity every tick (pixels/tick²)
    pub gravity: f32,

    // === Books ===
    /// Leftward scroll per tick
    pub game_speed: f32,
    pub book_width: f32,
    pub book_height: f32,
    pub book_height_variation: f32,
    pub min_book_spacing: f32,
    pub base_book_interval_ms: f64,
    pub book_interval_variation_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            ground_height: GROUND_HEIGHT,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,

            game_speed: GAME_SPEED,
            book_width: BOOK_WIDTH,
            book_height: BOOK_HEIGHT,
            book_height_variation: BOOK_HEIGHT_VARIATION,
            min_book_spacing: MIN_BOOK_SPACING,
            base_book_interval_ms: BASE_BOOK_INTERVAL_MS,
            book_interval_variation_ms: BOOK_INTERVAL_VARIATION_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Resting y of the player's top edge
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.arena_height - self.player_height - self.ground_height
    }

    /// y of the ground strip's top edge (where books stand)
    #[inline]
    pub fn ground_top(&self) -> f32 {
        self.arena_height - self.ground_height
    }

    /// x at which new books appear
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.arena_width
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        let positive_f32 = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("jump_force", self.jump_force),
            ("gravity", self.gravity),
            ("game_speed", self.game_speed),
            ("book_width", self.book_width),
            ("book_height", self.book_height),
            ("min_book_spacing", self.min_book_spacing),
        ];
        for (field, value) in positive_f32 {
            check_positive(field, value as f64)?;
        }
        check_positive("base_book_interval_ms", self.base_book_interval_ms)?;

        for (field, value) in [
            ("ground_height", self.ground_height as f64),
            ("player_x", self.player_x as f64),
        ] {
            if !value.is_finite() {
                return Err(TuningError::NonFinite { field });
            }
        }
        if self.ground_height < 0.0 {
            return Err(TuningError::Negative {
                field: "ground_height",
                value: self.ground_height as f64,
            });
        }

        // A book must keep some height; a zero-length interval only means
        // the spacing gate alone decides.
        check_variation(
            "book_height_variation",
            self.book_height_variation as f64,
            self.book_height as f64,
            VariationBound::BelowBase,
        )?;
        check_variation(
            "book_interval_variation_ms",
            self.book_interval_variation_ms,
            self.base_book_interval_ms,
            VariationBound::UpToBase,
        )?;

        let available = self.arena_height - self.ground_height;
        if self.player_height > available {
            return Err(TuningError::PlayerDoesNotFit {
                player_height: self.player_height,
                available,
            });
        }

        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), TuningError> {
    if !value.is_finite() {
        return Err(TuningError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(TuningError::NonPositive { field, value });
    }
    Ok(())
}

/// How close a random variation may get to its base value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VariationBound {
    /// `variation < base`, so `base - variation` stays positive
    BelowBase,
    /// `variation <= base`, so `base - variation` may be zero
    UpToBase,
}

fn check_variation(
    field: &'static str,
    variation: f64,
    base: f64,
    bound: VariationBound,
) -> Result<(), TuningError> {
    if !variation.is_finite() {
        return Err(TuningError::NonFinite { field });
    }
    if variation < 0.0 {
        return Err(TuningError::NegativeVariation {
            field,
            value: variation,
        });
    }
    let exceeds = match bound {
        VariationBound::BelowBase => variation >= base,
        VariationBound::UpToBase => variation > base,
    };
    if exceeds {
        return Err(TuningError::VariationExceedsBase {
            field,
            variation,
            base,
        });
    }
    Ok(())
}
