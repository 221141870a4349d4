//! The game engine: roster, dice, board, and the round loop.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use super::scoreboard::{NullScoreBoard, ScoreBoard, TurnSummary};
use crate::board::Board;
use crate::core::{Dice, Die, GameConfig, GameError, GameResult, Player};

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Richest remaining player; the earliest registered wins ties.
    pub winner: String,
    /// Rounds that were started.
    pub rounds_played: u32,
    /// Bankrupt players in the order they dropped out.
    pub eliminated: Vec<String>,
}

/// A game of the football board.
///
/// ## Setup
///
/// Add dice and players, optionally set a score board, then call
/// [`play`](WorldCup::play):
///
/// ```
/// use worldcup_board::core::FixedDie;
/// use worldcup_board::engine::WorldCup;
///
/// let mut game = WorldCup::new();
/// game.add_die(Some(Box::new(FixedDie::new(vec![3]))));
/// game.add_die(Some(Box::new(FixedDie::new(vec![4]))));
/// game.add_player("Lewandowski");
/// game.add_player("Messi");
///
/// let outcome = game.play(10).unwrap();
/// assert!(outcome.rounds_played <= 10);
/// ```
///
/// ## Rounds
///
/// Every round, each player in registration order counts down any
/// suspension, rolls and moves if free to, and is reported to the score
/// board. A player who went bankrupt is then dropped from the roster; the
/// next player takes the freed slot and still plays this round. The game
/// ends after the requested number of rounds or as soon as one player is
/// left.
pub struct WorldCup {
    config: GameConfig,
    dice: Dice,
    players: Vec<Player>,
    board: Board,
    scoreboard: Box<dyn ScoreBoard>,
}

impl WorldCup {
    /// A game with the reference configuration.
    #[must_use]
    pub fn new() -> Self {
        let config = GameConfig::default();
        let dice = Dice::new(config.dice_count);
        let board = Board::from_layout(&config.layout);
        Self {
            config,
            dice,
            players: Vec::new(),
            board,
            scoreboard: Box::new(NullScoreBoard),
        }
    }

    /// A game with a custom configuration.
    pub fn with_config(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let dice = Dice::new(config.dice_count);
        let board = Board::from_layout(&config.layout);
        Ok(Self {
            config,
            dice,
            players: Vec::new(),
            board,
            scoreboard: Box::new(NullScoreBoard),
        })
    }

    /// Add a die. `None` is ignored.
    pub fn add_die(&mut self, die: Option<Box<dyn Die>>) {
        self.dice.add_die(die);
    }

    /// Register a player. Turn order is registration order.
    pub fn add_player(&mut self, name: impl Into<String>) {
        self.players.push(Player::new(name, self.config.starting_money));
    }

    /// Replace the score board. `None` keeps the current one.
    pub fn set_scoreboard(&mut self, scoreboard: Option<Box<dyn ScoreBoard>>) {
        if let Some(scoreboard) = scoreboard {
            self.scoreboard = scoreboard;
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Players still in the game, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play at most `rounds` rounds and announce the winner.
    ///
    /// # Errors
    ///
    /// Fails before anything is reported if the player count is outside the
    /// configured range or the number of dice added does not match the
    /// configured count. Bankruptcy is never an error.
    pub fn play(&mut self, rounds: u32) -> GameResult<GameOutcome> {
        if let Err(err) = self.check_ready() {
            warn!(target: "worldcup.engine", %err, "game rejected");
            return Err(err);
        }

        let mut round = 0;
        let mut eliminated = Vec::new();

        while round < rounds && self.players.len() > 1 {
            debug!(target: "worldcup.engine", round, players = self.players.len(), "round started");
            self.scoreboard.on_round(round);

            let mut index = 0;
            while index < self.players.len() {
                let player = &mut self.players[index];

                player.wait_if_needed();
                if !player.is_waiting() {
                    let steps = self.dice.roll()?;
                    self.board.player_move(player, steps);
                }

                let summary = TurnSummary::new(player, self.board.field_name(player.field()));
                self.scoreboard.on_turn(&summary);

                if player.is_bankrupt() {
                    let removed = self.players.remove(index);
                    info!(target: "worldcup.engine", round, player = removed.name(), "player bankrupt");
                    eliminated.push(removed.name().to_owned());
                    if self.players.len() == 1 {
                        break;
                    }
                } else {
                    index += 1;
                }
            }

            round += 1;
        }

        let winner = self
            .players
            .iter()
            .reduce(|best, player| if player.money() > best.money() { player } else { best })
            .map(|player| player.name().to_owned())
            .ok_or(GameError::InvalidConfig("roster is empty"))?;

        info!(target: "worldcup.engine", rounds_played = round, %winner, "game won");
        self.scoreboard.on_win(&winner);

        Ok(GameOutcome {
            winner,
            rounds_played: round,
            eliminated,
        })
    }

    fn check_ready(&self) -> GameResult<()> {
        self.config.check_player_count(self.players.len())?;
        self.dice.validate()
    }
}

impl Default for WorldCup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WorldCup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldCup")
            .field("config", &self.config)
            .field("dice", &self.dice)
            .field("players", &self.players)
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}
