//! The game engine and its reporting interface.
//!
//! - `game`: `WorldCup`, which owns the roster, dice and board and runs rounds
//! - `scoreboard`: the `ScoreBoard` observer and ready-made implementations

pub mod game;
pub mod scoreboard;

pub use game::{GameOutcome, WorldCup};
pub use scoreboard::{
    GameEvent, NullScoreBoard, RecordingScoreBoard, ScoreBoard, TextScoreBoard, TurnSummary,
};
