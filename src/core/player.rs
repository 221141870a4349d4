//! Player financial state and its transitions.
//!
//! ## States
//!
//! A player is always in exactly one of three states:
//! - **in play**: may roll and move on their turn
//! - **waiting(k)**: skips the next `k` turns (suspended by a field)
//! - **bankrupt**: terminal; money is 0 and credits are refused
//!
//! The state is derived from the stored counters rather than kept as a
//! separate tag, see [`Player::status`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount of money. Never negative; debits saturate into bankruptcy.
pub type Money = u64;

/// Reporting status of a player, derived from its counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    /// Active and able to move.
    InPlay,
    /// Suspended for the given number of remaining turns (always > 0).
    Waiting(u32),
    /// Out of the game for good.
    Bankrupt,
}

impl PlayerStatus {
    /// Whether the player can still take turns.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, PlayerStatus::Bankrupt)
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerStatus::InPlay => write!(f, "in play"),
            PlayerStatus::Waiting(turns) => write!(f, "*** waiting: {turns} ***"),
            PlayerStatus::Bankrupt => write!(f, "*** bankrupt ***"),
        }
    }
}

/// A single participant of the game.
///
/// Money only changes through [`pay`](Player::pay) and
/// [`take`](Player::take), which together enforce the bankruptcy invariant:
/// once bankrupt, money stays at 0 forever.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    money: Money,
    field: usize,
    suspension: u32,
    bankrupt: bool,
}

impl Player {
    /// Create a player standing on field 0 with the given starting money.
    pub fn new(name: impl Into<String>, starting_money: Money) -> Self {
        Self {
            name: name.into(),
            money: starting_money,
            field: 0,
            suspension: 0,
            bankrupt: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn money(&self) -> Money {
        self.money
    }

    /// Index of the board field the player currently stands on.
    #[must_use]
    pub const fn field(&self) -> usize {
        self.field
    }

    /// Turns left before the player may move again.
    #[must_use]
    pub const fn suspension(&self) -> u32 {
        self.suspension
    }

    #[must_use]
    pub const fn is_bankrupt(&self) -> bool {
        self.bankrupt
    }

    /// Whether the player must skip movement this turn.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.suspension > 0
    }

    /// Current status. Bankruptcy takes precedence over suspension.
    #[must_use]
    pub const fn status(&self) -> PlayerStatus {
        if self.bankrupt {
            PlayerStatus::Bankrupt
        } else if self.suspension > 0 {
            PlayerStatus::Waiting(self.suspension)
        } else {
            PlayerStatus::InPlay
        }
    }

    /// Count down one turn of suspension, if any.
    pub fn wait_if_needed(&mut self) {
        self.suspension = self.suspension.saturating_sub(1);
    }

    /// Suspend for `turns` turns, replacing any previous suspension.
    pub fn suspend(&mut self, turns: u32) {
        self.suspension = turns;
    }

    /// Relocate to a field. Money is untouched.
    pub fn move_to(&mut self, field: usize) {
        self.field = field;
    }

    /// Debit `amount` and return what was actually collected.
    ///
    /// If the player cannot cover the full amount, everything they have is
    /// collected and they go bankrupt. Callers that forward the money
    /// somewhere (e.g. a match pool) must use the returned value.
    pub fn pay(&mut self, amount: Money) -> Money {
        if self.money >= amount {
            self.money -= amount;
            amount
        } else {
            let collected = self.money;
            self.money = 0;
            self.bankrupt = true;
            collected
        }
    }

    /// Credit `amount`. Returns `false` (and changes nothing) when bankrupt.
    pub fn take(&mut self, amount: Money) -> bool {
        if self.bankrupt {
            return false;
        }
        self.money = self.money.saturating_add(amount);
        true
    }
}
