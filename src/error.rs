//! Game-specific error types.
//!
//! Gameplay itself is total: every system works on well-formed engine state
//! and a missed block is a state transition, not an error.  The only fallible
//! surface is configuration, so that is all this enum covers.  Callers report
//! the error and fall back to compiled defaults instead of aborting.

use std::fmt;

/// Top-level error enum for Block Catch.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// The configuration file exists but could not be read.
    ConfigRead {
        /// Path that was attempted.
        path: String,
        /// I/O error message.
        reason: String,
    },

    /// The configuration file is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        /// Path that was parsed.
        path: String,
        /// Parser error message.
        reason: String,
    },

    /// The block spawn range is inverted or leaves the playfield.
    InvalidSpawnRange {
        /// Configured minimum spawn x.
        min: i32,
        /// Configured maximum spawn x.
        max: i32,
    },

    /// A value that must be strictly positive is zero or negative.
    NonPositive {
        /// Name of the setting (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
    },

    /// `BLOCK_CATCH_RESTART` named a policy that does not exist.
    UnknownRestartPolicy {
        /// The raw value that was supplied.
        value: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, reason } => {
                write!(f, "failed to read config '{}': {}", path, reason)
            }
            GameError::ConfigParse { path, reason } => {
                write!(f, "failed to parse config '{}': {}", path, reason)
            }
            GameError::InvalidSpawnRange { min, max } => write!(
                f,
                "spawn range [{}, {}] is inverted or outside the playfield",
                min, max
            ),
            GameError::NonPositive { name, value } => {
                write!(f, "'{}' = {} must be greater than zero", name, value)
            }
            GameError::UnknownRestartPolicy { value } => write!(
                f,
                "unknown restart policy '{}' (expected 'manual' or 'timed')",
                value
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is not strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GameError::NonPositive { name, value })
    }
}

/// Returns an error unless `min <= max` and both lie inside `[0, field_width]`.
pub fn validate_spawn_range(min: i32, max: i32, field_width: f32) -> GameResult<()> {
    if min > max || min < 0 || max as f32 > field_width {
        Err(GameError::InvalidSpawnRange { min, max })
    } else {
        Ok(())
    }
}
