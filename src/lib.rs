//! # worldcup-board
//!
//! A deterministic simulation of a turn-based football board game.
//!
//! ## Rules in Brief
//!
//! Players start with 1000 on the first field of a circular 12-field board.
//! Each turn they roll the dice and move. Every field they move *through*
//! applies its pass effect; the field they stop on applies its land effect.
//! Match fields collect fees from passers and pay the pool out (weighted) to
//! the next player who stops there. A player who cannot pay goes bankrupt
//! and leaves the game. The richest remaining player wins.
//!
//! ## Determinism
//!
//! Given the same dice and the same players, a game always produces the
//! same sequence of score board notifications. Dice are injected through
//! the [`Die`](core::Die) trait, so tests can replay fixed sequences.
//!
//! ## Modules
//!
//! - `core`: players, dice, configuration, errors
//! - `board`: fields, layouts, movement
//! - `engine`: the round loop and score boards

pub mod core;
pub mod board;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Dice, Die, FixedDie, SeededDie, ZeroDie,
    GameConfig, GameError, GameResult,
    Money, Player, PlayerStatus,
};

pub use crate::board::{Board, Field, FieldKind, FieldRule, FieldSpec, Movement};

pub use crate::engine::{
    GameEvent, GameOutcome, NullScoreBoard, RecordingScoreBoard, ScoreBoard, TextScoreBoard,
    TurnSummary, WorldCup,
};
