//! Startup errors.
//!
//! Only configuration problems are errors. Running out of money is a normal
//! game outcome and is reported through player status, never through
//! `GameError`.

use thiserror::Error;

/// Errors raised before any round is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("too many players: {count} registered, at most {max} allowed")]
    TooManyPlayers { count: usize, max: usize },

    #[error("too few players: {count} registered, at least {min} required")]
    TooFewPlayers { count: usize, min: usize },

    #[error("too many dice: {count} added, game expects {expected}")]
    TooManyDice { count: usize, expected: usize },

    #[error("too few dice: {count} added, game expects {expected}")]
    TooFewDice { count: usize, expected: usize },

    #[error("invalid game configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type GameResult<T> = Result<T, GameError>;
