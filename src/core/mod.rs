//! Core types: players, dice, configuration, errors.
//!
//! These are the leaves of the game. Nothing here knows about the board
//! traversal or the round loop.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;

pub use config::{GameConfig, DICE_COUNT, MAX_PLAYERS, MIN_PLAYERS, STARTING_MONEY};
pub use dice::{Dice, Die, FixedDie, SeededDie, ZeroDie};
pub use error::{GameError, GameResult};
pub use player::{Money, Player, PlayerStatus};
