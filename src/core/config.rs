//! Game configuration.
//!
//! The defaults describe the reference game:
//! - 1000 starting money per player
//! - 2 dice
//! - 2 to 11 players
//! - the 12-field reference board
//!
//! The board is a data table of [`FieldSpec`] rows, so a different board is
//! a different table and never a change to the traversal.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::player::Money;
use crate::board::{reference_layout, FieldSpec};

/// Money each player starts with.
pub const STARTING_MONEY: Money = 1000;
/// Dice rolled per turn.
pub const DICE_COUNT: usize = 2;
/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;
/// Most players a game can start with.
pub const MAX_PLAYERS: usize = 11;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Money each player starts with.
    pub starting_money: Money,

    /// Number of dice that must be added before play.
    pub dice_count: usize,

    /// Inclusive lower bound on registered players.
    pub min_players: usize,

    /// Inclusive upper bound on registered players.
    pub max_players: usize,

    /// Board fields in track order. Field 0 is where everyone starts.
    pub layout: Vec<FieldSpec>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            dice_count: DICE_COUNT,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            layout: reference_layout(),
        }
    }
}

impl GameConfig {
    /// The reference configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_money(mut self, money: Money) -> Self {
        self.starting_money = money;
        self
    }

    #[must_use]
    pub fn with_dice_count(mut self, count: usize) -> Self {
        self.dice_count = count;
        self
    }

    /// Set the inclusive range of allowed player counts.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: Vec<FieldSpec>) -> Self {
        self.layout = layout;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> GameResult<()> {
        if self.layout.is_empty() {
            return Err(GameError::InvalidConfig("board layout is empty"));
        }
        if self.dice_count == 0 {
            return Err(GameError::InvalidConfig("at least one die is required"));
        }
        if self.min_players == 0 {
            return Err(GameError::InvalidConfig("minimum player count must be positive"));
        }
        if self.min_players > self.max_players {
            return Err(GameError::InvalidConfig(
                "minimum player count exceeds maximum",
            ));
        }
        Ok(())
    }

    /// Check a registered player count against the configured bounds.
    pub fn check_player_count(&self, count: usize) -> GameResult<()> {
        if count > self.max_players {
            return Err(GameError::TooManyPlayers {
                count,
                max: self.max_players,
            });
        }
        if count < self.min_players {
            return Err(GameError::TooFewPlayers {
                count,
                min: self.min_players,
            });
        }
        Ok(())
    }
}
