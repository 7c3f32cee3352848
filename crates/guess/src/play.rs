//! Interactive game loop.

use std::io::{BufRead, Write};

use crate::error::{GuessError, GuessResult};
use crate::game::{GuessingGame, Outcome};

/// Final state of a won game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub secret: i64,
    /// Valid guesses made, including the winning one.
    pub attempts: u32,
}

/// Run the game, reading one guess per line from `input`.
///
/// Lines that don't parse as integers get a retry prompt and don't count as
/// attempts. Fails with `InputClosed` if input ends before a correct guess.
pub fn play<R, W>(
    mut game: GuessingGame,
    mut input: R,
    mut output: W,
) -> GuessResult<GameSummary>
where
    R: BufRead,
    W: Write,
{
    let config = *game.config();
    writeln!(output, "Welcome to the Number Guessing Game!")?;
    writeln!(
        output,
        "I'm thinking of a number between {} and {}.",
        config.min, config.max
    )?;
    writeln!(output)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "Enter your guess: ")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Err(GuessError::InputClosed {
                attempts: game.attempts(),
            });
        }
        // Undecodable bytes become U+FFFD and fail to parse below.
        let line = String::from_utf8_lossy(&buf);

        let Ok(guess) = line.trim().parse::<i64>() else {
            tracing::debug!(input = %line.trim(), "Rejected non-numeric guess");
            writeln!(output, "Please enter a valid number!")?;
            continue;
        };

        match game.guess(guess) {
            Outcome::TooLow => writeln!(output, "Too low! Try again.")?,
            Outcome::TooHigh => writeln!(output, "Too high! Try again.")?,
            Outcome::Correct { attempts } => {
                writeln!(
                    output,
                    "Congratulations! You guessed it in {attempts} attempts!"
                )?;
                writeln!(output, "The number was {}.", game.secret())?;
                tracing::info!(attempts, secret = game.secret(), "Game won");
                return Ok(GameSummary {
                    secret: game.secret(),
                    attempts,
                });
            }
        }
    }
}
