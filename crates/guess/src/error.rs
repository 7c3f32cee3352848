//! Error types for the guessing game.

use thiserror::Error;

/// Result type for game operations.
pub type GuessResult<T> = Result<T, GuessError>;

#[derive(Debug, Error)]
pub enum GuessError {
    /// The configured range is empty.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    /// A fixed secret falls outside the configured range.
    #[error("secret {secret} is outside {min}..={max}")]
    SecretOutOfRange { secret: i64, min: i64, max: i64 },

    /// Input ended before the secret was guessed.
    #[error("input closed after {attempts} attempts without a correct guess")]
    InputClosed { attempts: u32 },

    /// Reading a guess or writing feedback failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
