//! Game configuration.
//!
//! `GameConfig` carries everything fixed at construction: seat count, deal
//! size, the UNO catch penalty, the seed, and the two testing modes
//! (forced top card and blank slate). It can be built in code or loaded
//! from JSON, and is validated before an engine is created.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{Card, DECK_SIZE};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 10;

/// Invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least 2 players are required, got {0}")]
    TooFewPlayers(usize),

    #[error("at most 10 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("starting hand size must be at least 1")]
    EmptyHand,

    #[error("dealing {hand} cards to {players} players leaves no draw pile")]
    DealTooLarge { players: usize, hand: usize },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of seats. Seat order is turn order.
    pub player_count: usize,

    /// Cards dealt to each player at the start.
    pub starting_hand_size: usize,

    /// Cards drawn by a player caught holding one unshielded card.
    pub uno_penalty: usize,

    /// Reveal this card instead of drawing one. It is not removed from the
    /// draw pile, so the table holds a duplicate.
    pub forced_top_card: Option<Card>,

    /// Skip dealing and the opening card resolution. Used to build arbitrary
    /// mid-game states.
    pub blank_slate: bool,

    /// Seed for every shuffle.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            starting_hand_size: 7,
            uno_penalty: 7,
            forced_top_card: None,
            blank_slate: false,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Default configuration for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_uno_penalty(mut self, penalty: usize) -> Self {
        self.uno_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_forced_top_card(mut self, card: Card) -> Self {
        self.forced_top_card = Some(card);
        self
    }

    #[must_use]
    pub fn blank_slate(mut self) -> Self {
        self.blank_slate = true;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that a game can be set up with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count < MIN_PLAYERS {
            return Err(ConfigError::TooFewPlayers(self.player_count));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.starting_hand_size == 0 {
            return Err(ConfigError::EmptyHand);
        }
        // One card is revealed before the deal.
        if self.player_count * self.starting_hand_size >= DECK_SIZE - 1 {
            return Err(ConfigError::DealTooLarge {
                players: self.player_count,
                hand: self.starting_hand_size,
            });
        }
        Ok(())
    }
}
