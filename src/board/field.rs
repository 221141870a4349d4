//! Board fields and their effects.
//!
//! Every field reacts to two events:
//! - **pass**: a player moves through the field without stopping
//! - **land**: a player's move ends on the field
//!
//! The set of behaviors is closed, so it is a plain enum matched
//! exhaustively. Stateful variants (`Bookmaker`, `Match`) keep their state
//! inside the variant for the whole game.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Money, Player};

/// Static description of a field's behavior, as stored in a layout table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldRule {
    /// Credits `gift` on pass and on land.
    Beginning { gift: Money },
    /// Credits `bonus` on land.
    Goal { bonus: Money },
    /// Debits `fee` on land.
    Penalty { fee: Money },
    /// Suspends the lander for `turns` turns.
    Suspension { turns: u32 },
    /// Pays `bet` to the first lander of every `cycle`, collects it from the rest.
    Bookmaker { bet: Money, cycle: u32 },
    /// Collects `fee` from passers into a pool, pays `pool * weight` to the lander.
    Match { fee: Money, weight: f64 },
    /// No effect.
    Empty,
}

/// One row of a board layout table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(flatten)]
    pub rule: FieldRule,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, rule: FieldRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }
}

/// Field behavior together with its live state.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Beginning { gift: Money },
    Goal { bonus: Money },
    Penalty { fee: Money },
    Suspension { turns: u32 },
    Bookmaker {
        bet: Money,
        cycle: u32,
        /// Landings so far, modulo `cycle`.
        visits: u32,
    },
    Match {
        fee: Money,
        weight: f64,
        /// Fees collected from passers since the last payout.
        pool: Money,
    },
    Empty,
}

/// A field on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    name: String,
    kind: FieldKind,
}

impl Field {
    pub fn beginning(name: impl Into<String>, gift: Money) -> Self {
        Self::with_kind(name, FieldKind::Beginning { gift })
    }

    pub fn goal(name: impl Into<String>, bonus: Money) -> Self {
        Self::with_kind(name, FieldKind::Goal { bonus })
    }

    pub fn penalty(name: impl Into<String>, fee: Money) -> Self {
        Self::with_kind(name, FieldKind::Penalty { fee })
    }

    pub fn suspension(name: impl Into<String>, turns: u32) -> Self {
        Self::with_kind(name, FieldKind::Suspension { turns })
    }

    /// A bookmaker with the usual cycle of three.
    pub fn bookmaker(name: impl Into<String>, bet: Money) -> Self {
        Self::bookmaker_with_cycle(name, bet, 3)
    }

    /// A bookmaker paying out once per `cycle` landings. A zero cycle is
    /// treated as one.
    pub fn bookmaker_with_cycle(name: impl Into<String>, bet: Money, cycle: u32) -> Self {
        Self::with_kind(
            name,
            FieldKind::Bookmaker {
                bet,
                cycle: cycle.max(1),
                visits: 0,
            },
        )
    }

    pub fn matchday(name: impl Into<String>, fee: Money, weight: f64) -> Self {
        Self::with_kind(
            name,
            FieldKind::Match {
                fee,
                weight,
                pool: 0,
            },
        )
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self::with_kind(name, FieldKind::Empty)
    }

    fn with_kind(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Build a fresh field (empty pools, zeroed counters) from a layout row.
    #[must_use]
    pub fn from_spec(spec: &FieldSpec) -> Self {
        let name = spec.name.clone();
        match spec.rule {
            FieldRule::Beginning { gift } => Self::beginning(name, gift),
            FieldRule::Goal { bonus } => Self::goal(name, bonus),
            FieldRule::Penalty { fee } => Self::penalty(name, fee),
            FieldRule::Suspension { turns } => Self::suspension(name, turns),
            FieldRule::Bookmaker { bet, cycle } => Self::bookmaker_with_cycle(name, bet, cycle),
            FieldRule::Match { fee, weight } => Self::matchday(name, fee, weight),
            FieldRule::Empty => Self::empty(name),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Money currently pooled on a match field. `None` for other kinds.
    #[must_use]
    pub fn pool(&self) -> Option<Money> {
        match self.kind {
            FieldKind::Match { pool, .. } => Some(pool),
            _ => None,
        }
    }

    /// Apply the effect of `player` moving through this field.
    pub fn pass(&mut self, player: &mut Player) {
        match &mut self.kind {
            FieldKind::Beginning { gift } => {
                player.take(*gift);
            }
            FieldKind::Match { fee, pool, .. } => {
                let collected = player.pay(*fee);
                *pool += collected;
                debug!(
                    target: "worldcup.board",
                    field = %self.name,
                    player = player.name(),
                    collected,
                    pool = *pool,
                    "match fee collected"
                );
            }
            FieldKind::Goal { .. }
            | FieldKind::Penalty { .. }
            | FieldKind::Suspension { .. }
            | FieldKind::Bookmaker { .. }
            | FieldKind::Empty => {}
        }
    }

    /// Apply the effect of `player` stopping on this field.
    pub fn land(&mut self, player: &mut Player) {
        match &mut self.kind {
            FieldKind::Beginning { gift } => {
                player.take(*gift);
            }
            FieldKind::Goal { bonus } => {
                player.take(*bonus);
            }
            FieldKind::Penalty { fee } => {
                player.pay(*fee);
            }
            FieldKind::Suspension { turns } => {
                player.suspend(*turns);
            }
            FieldKind::Bookmaker { bet, cycle, visits } => {
                if *visits == 0 {
                    player.take(*bet);
                } else {
                    player.pay(*bet);
                }
                *visits = (*visits + 1) % *cycle;
            }
            FieldKind::Match { weight, pool, .. } => {
                // Truncates toward zero.
                let payout = (*pool as f64 * *weight) as Money;
                if player.take(payout) {
                    debug!(
                        target: "worldcup.board",
                        field = %self.name,
                        player = player.name(),
                        payout,
                        "match pool paid out"
                    );
                    *pool = 0;
                }
            }
            FieldKind::Empty => {}
        }
    }
}
