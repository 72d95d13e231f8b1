//! Game configuration.
//!
//! `GameConfig` holds the tunable numbers of a match: seed, hand sizes and
//! the round structure. Build it with the `with_*` methods or load it from
//! JSON; missing JSON fields fall back to the defaults.
//!
//! ```
//! use politics_ccg::core::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "seed": 9, "rounds_to_win": 1, "max_rounds": 1 }"#).unwrap();
//! assert_eq!(config.seed, 9);
//! assert_eq!(config.starting_hand_size, 5);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed; the same seed replays the same shuffles and starting seat.
    pub seed: u64,

    /// Cards each player draws when the game starts.
    pub starting_hand_size: usize,

    /// Cards the active player draws at the start of each turn.
    pub draws_per_turn: usize,

    /// Round wins needed to win the match.
    pub rounds_to_win: u32,

    /// Hard cap on rounds; the match is decided on round wins after this.
    pub max_rounds: u32,

    /// Refill an empty deck from the retirement area before drawing.
    pub reshuffle_when_empty: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_hand_size: 5,
            draws_per_turn: 1,
            rounds_to_win: 2,
            max_rounds: 3,
            reshuffle_when_empty: true,
        }
    }
}

impl GameConfig {
    /// Default configuration with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: rand::random(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration. The document must be an
    /// object; missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let invalid = |e: serde_json::Error| GameError::InvalidConfig(e.to_string());
        let value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;
        if !value.is_object() {
            return Err(GameError::InvalidConfig(
                "configuration must be a JSON object".to_string(),
            ));
        }
        let config: Self = serde_json::from_value(value).map_err(invalid)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the per-turn draw count.
    #[must_use]
    pub fn with_draws_per_turn(mut self, count: usize) -> Self {
        self.draws_per_turn = count;
        self
    }

    /// Set round wins needed and the round cap.
    #[must_use]
    pub fn with_rounds(mut self, rounds_to_win: u32, max_rounds: u32) -> Self {
        self.rounds_to_win = rounds_to_win;
        self.max_rounds = max_rounds;
        self
    }

    /// Enable or disable refilling the deck from retirement.
    #[must_use]
    pub fn with_reshuffle_when_empty(mut self, enabled: bool) -> Self {
        self.reshuffle_when_empty = enabled;
        self
    }

    /// Reject configurations that can never produce a winner.
    pub fn validate(&self) -> Result<()> {
        if self.rounds_to_win == 0 {
            return Err(GameError::InvalidConfig(
                "rounds_to_win must be at least 1".to_string(),
            ));
        }
        if self.max_rounds < self.rounds_to_win {
            return Err(GameError::InvalidConfig(format!(
                "max_rounds ({}) is below rounds_to_win ({})",
                self.max_rounds, self.rounds_to_win
            )));
        }
        Ok(())
    }
}
