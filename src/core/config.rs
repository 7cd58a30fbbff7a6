//! Game setup configuration.
//!
//! `GameConfig` carries everything `init_game_with_config` needs to deal a
//! new game: the number of seats, display names, the RNG seed and the
//! starting resources. Rule constants that depend only on a player (baseline
//! production, hand and storage limits) live in `rules::effects`, not here.
//!
//! ## Example
//!
//! ```
//! use tycoon_engine::core::GameConfig;
//!
//! let config = GameConfig::new(3)
//!     .with_names(["Ada", "Brunel"])
//!     .with_seed(7);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.player_name(0), "Ada");
//! assert_eq!(config.player_name(2), "Player 3");
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game supports.
pub const MAX_PLAYERS: usize = 5;

/// Setup parameters for a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats (2..=5).
    pub player_count: usize,

    /// Display names by seat. Missing names default to `Player N`; extras are ignored.
    pub player_names: Vec<String>,

    /// Seed for every shuffle dealt at setup and during play.
    pub seed: u64,

    /// Money each player starts with.
    pub starting_money: u32,

    /// Production cards dealt to each player.
    pub starting_hand_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            player_names: Vec::new(),
            seed: 0,
            starting_money: 10,
            starting_hand_size: 3,
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` players with default settings.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the player names.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting money.
    #[must_use]
    pub fn with_starting_money(mut self, money: u32) -> Self {
        self.starting_money = money;
        self
    }

    /// Set the number of production cards dealt to each player.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Check that the config can start a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        Ok(())
    }

    /// Display name for a seat.
    #[must_use]
    pub fn player_name(&self, seat: usize) -> String {
        self.player_names
            .get(seat)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", seat + 1))
    }
}
