//! Configuration errors
//!
//! The simulation itself never fails; only loading a [`crate::Tuning`] can.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum TuningError {
    /// Tuning file could not be read
    Io { path: String, message: String },
    /// JSON could not be parsed into a tuning document
    Parse { message: String },
    /// A value that must be finite was NaN or infinite
    NonFinite { field: &'static str },
    /// A size, speed or interval that must be strictly positive
    NonPositive { field: &'static str, value: f64 },
    /// A size that may be zero but not negative
    Negative { field: &'static str, value: f64 },
    /// A random variation that must be zero or more
    NegativeVariation { field: &'static str, value: f64 },
    /// A variation large enough to produce non-positive values
    VariationExceedsBase {
        field: &'static str,
        variation: f64,
        base: f64,
    },
    /// Player box plus ground strip taller than the arena
    PlayerDoesNotFit { player_height: f32, available: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "cannot read {path}: {message}"),
            Self::Parse { message } => write!(f, "invalid tuning json: {message}"),
            Self::NonFinite { field } => write!(f, "{field} must be finite"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must be zero or more, got {value}")
            }
            Self::NegativeVariation { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::VariationExceedsBase {
                field,
                variation,
                base,
            } => write!(
                f,
                "{field} of {variation} is too large for a base of {base}"
            ),
            Self::PlayerDoesNotFit {
                player_height,
                available,
            } => write!(
                f,
                "player height {player_height} does not fit above the ground ({available} available)"
            ),
        }
    }
}

impl std::error::Error for TuningError {}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
