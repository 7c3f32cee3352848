//! Game rules and state.
//!
//! Pure domain logic - no I/O.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GuessError, GuessResult};

/// Inclusive range the secret is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub min: i64,
    pub max: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { min: 1, max: 100 }
    }
}

impl GameConfig {
    pub fn validate(&self) -> GuessResult<()> {
        if self.min > self.max {
            return Err(GuessError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, n: i64) -> bool {
        (self.min..=self.max).contains(&n)
    }
}

/// Result of comparing one guess to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct { attempts: u32 },
}

#[derive(Debug, Clone)]
pub struct GuessingGame {
    secret: i64,
    attempts: u32,
    config: GameConfig,
}

impl GuessingGame {
    /// Start a game with a known secret and the default 1..=100 range.
    ///
    /// `secret` must lie in that range. Use `with_secret` for other ranges or
    /// for a checked constructor.
    pub fn new(secret: i64) -> Self {
        debug_assert!(
            GameConfig::default().contains(secret),
            "secret {secret} is outside the default range"
        );
        Self {
            secret,
            attempts: 0,
            config: GameConfig::default(),
        }
    }

    /// Start a game with a known secret, checked against `config`.
    pub fn with_secret(secret: i64, config: GameConfig) -> GuessResult<Self> {
        config.validate()?;
        if !config.contains(secret) {
            return Err(GuessError::SecretOutOfRange {
                secret,
                min: config.min,
                max: config.max,
            });
        }
        Ok(Self {
            secret,
            attempts: 0,
            config,
        })
    }

    /// Start a game with a secret drawn from the thread-local RNG.
    pub fn random(config: GameConfig) -> GuessResult<Self> {
        Self::random_with(config, &mut rand::thread_rng())
    }

    pub fn random_with<R: Rng>(config: GameConfig, rng: &mut R) -> GuessResult<Self> {
        config.validate()?;
        let secret = rng.gen_range(config.min..=config.max);
        Ok(Self {
            secret,
            attempts: 0,
            config,
        })
    }

    /// Compare `n` to the secret. Every call counts as an attempt.
    pub fn guess(&mut self, n: i64) -> Outcome {
        self.attempts = self.attempts.saturating_add(1);
        match n.cmp(&self.secret) {
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Equal => Outcome::Correct {
                attempts: self.attempts,
            },
        }
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_guess_feedback() {
        let mut game = GuessingGame::new(50);
        assert_eq!(game.guess(75), Outcome::TooHigh);
        assert_eq!(game.guess(25), Outcome::TooLow);
        assert_eq!(game.guess(50), Outcome::Correct { attempts: 3 });
        assert_eq!(game.attempts(), 3);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the default range")]
    fn test_new_rejects_secret_outside_default_range() {
        GuessingGame::new(500);
    }

    #[test]
    fn test_attempts_saturate() {
        let mut game = GuessingGame::new(50);
        game.attempts = u32::MAX - 1;

        assert_eq!(game.guess(10), Outcome::TooLow);
        assert_eq!(game.guess(50), Outcome::Correct { attempts: u32::MAX });
        assert_eq!(game.attempts(), u32::MAX);
    }

    #[test]
    fn test_random_secret_within_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = GameConfig { min: 10, max: 12 };
        for _ in 0..100 {
            let game = GuessingGame::random_with(config, &mut rng).unwrap();
            assert!(config.contains(game.secret()));
        }
    }

    #[test]
    fn test_single_value_range() {
        let game = GuessingGame::random(GameConfig { min: 5, max: 5 }).unwrap();
        assert_eq!(game.secret(), 5);
    }

    #[test]
    fn test_invalid_range() {
        let result = GuessingGame::random(GameConfig { min: 10, max: 1 });
        assert!(matches!(
            result,
            Err(GuessError::InvalidRange { min: 10, max: 1 })
        ));
    }

    #[test]
    fn test_with_secret_out_of_range() {
        let result = GuessingGame::with_secret(101, GameConfig::default());
        assert!(matches!(
            result,
            Err(GuessError::SecretOutOfRange { secret: 101, .. })
        ));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: GameConfig = serde_json::from_str(r#"{"max": 10}"#).unwrap();
        assert_eq!(config, GameConfig { min: 1, max: 10 });
    }
}
