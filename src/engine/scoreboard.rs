//! Reporting: the observer notified as the game progresses.
//!
//! The engine calls a [`ScoreBoard`] at three points:
//! - at the start of every round
//! - after every player's turn, with a [`TurnSummary`]
//! - once, with the winner, when the game ends
//!
//! ## Provided score boards
//!
//! - [`NullScoreBoard`]: ignores everything (the default)
//! - [`TextScoreBoard`]: renders a plain-text log
//! - [`RecordingScoreBoard`]: keeps typed [`GameEvent`]s for inspection or
//!   JSON export
//!
//! To keep access to a score board after handing it to the engine, wrap it
//! in `Rc<RefCell<_>>` and give the engine a clone.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{Money, Player, PlayerStatus};

/// State of a player at the end of their turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub player: String,
    pub status: PlayerStatus,
    pub field: String,
    pub money: Money,
}

impl TurnSummary {
    /// Summarize `player`, who stands on the field called `field`.
    pub fn new(player: &Player, field: impl Into<String>) -> Self {
        Self {
            player: player.name().to_owned(),
            status: player.status(),
            field: field.into(),
            money: player.money(),
        }
    }
}

/// Observer of a running game.
pub trait ScoreBoard {
    /// A new round is starting. Rounds are numbered from 0.
    fn on_round(&mut self, round: u32);

    /// A player has finished their turn.
    fn on_turn(&mut self, summary: &TurnSummary);

    /// The game is over.
    fn on_win(&mut self, winner: &str);
}

impl<S: ScoreBoard + ?Sized> ScoreBoard for Rc<RefCell<S>> {
    fn on_round(&mut self, round: u32) {
        self.borrow_mut().on_round(round);
    }

    fn on_turn(&mut self, summary: &TurnSummary) {
        self.borrow_mut().on_turn(summary);
    }

    fn on_win(&mut self, winner: &str) {
        self.borrow_mut().on_win(winner);
    }
}

/// Score board that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullScoreBoard;

impl ScoreBoard for NullScoreBoard {
    fn on_round(&mut self, _round: u32) {}

    fn on_turn(&mut self, _summary: &TurnSummary) {}

    fn on_win(&mut self, _winner: &str) {}
}

/// Score board rendering one line per notification.
///
/// ```text
/// === Round: 0
/// Messi [in play] [840] - Match vs Liechtenstein
/// === Winner: Messi
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextScoreBoard {
    output: String,
}

impl TextScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything rendered so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// The rendered text from the start of the last round, without the
    /// winner line.
    #[must_use]
    pub fn last_round(&self) -> &str {
        let start = self.output.rfind("=== Round: ").unwrap_or(0);
        let tail = &self.output[start..];
        match tail.find("=== Winner: ") {
            Some(end) => &tail[..end],
            None => tail,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }
}

impl ScoreBoard for TextScoreBoard {
    fn on_round(&mut self, round: u32) {
        self.output.push_str(&format!("=== Round: {round}\n"));
    }

    fn on_turn(&mut self, summary: &TurnSummary) {
        self.output.push_str(&format!(
            "{} [{}] [{}] - {}\n",
            summary.player, summary.status, summary.money, summary.field
        ));
    }

    fn on_win(&mut self, winner: &str) {
        self.output.push_str(&format!("=== Winner: {winner}\n"));
    }
}

/// A notification received by a [`RecordingScoreBoard`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    RoundStarted { round: u32 },
    TurnEnded(TurnSummary),
    Won { winner: String },
}

/// Score board keeping every notification in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingScoreBoard {
    events: Vec<GameEvent>,
}

impl RecordingScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Turn summaries only, in order.
    pub fn turns(&self) -> impl Iterator<Item = &TurnSummary> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::TurnEnded(summary) => Some(summary),
            _ => None,
        })
    }

    /// Number of rounds that were started.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GameEvent::RoundStarted { .. }))
            .count()
    }

    /// The announced winner, if the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            GameEvent::Won { winner } => Some(winner.as_str()),
            _ => None,
        })
    }
}

impl ScoreBoard for RecordingScoreBoard {
    fn on_round(&mut self, round: u32) {
        self.events.push(GameEvent::RoundStarted { round });
    }

    fn on_turn(&mut self, summary: &TurnSummary) {
        self.events.push(GameEvent::TurnEnded(summary.clone()));
    }

    fn on_win(&mut self, winner: &str) {
        self.events.push(GameEvent::Won {
            winner: winner.to_owned(),
        });
    }
}
