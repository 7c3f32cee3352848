//! Number guessing game.
//!
//! This crate provides:
//! - `GuessingGame`: pure state machine comparing guesses to a secret
//! - `play`: the interactive loop over any `BufRead`/`Write` pair
//!
//! # Example
//!
//! ```
//! use labwork_guess::{play, GuessingGame};
//!
//! let input = b"75\n25\n50\n";
//! let mut output = Vec::new();
//! let summary = play(GuessingGame::new(50), &input[..], &mut output).unwrap();
//! assert_eq!(summary.attempts, 3);
//! ```

mod error;
mod game;
mod play;

pub use error::{GuessError, GuessResult};
pub use game::{GameConfig, GuessingGame, Outcome};
pub use play::{play, GameSummary};
