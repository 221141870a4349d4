//! The reference board layout.
//!
//! Layouts are plain data; the traversal in [`Board`](super::Board) never
//! looks at which one it was built from.

use super::field::{FieldRule, FieldSpec};
use crate::core::Money;

/// Gift for passing or landing on the season start.
pub const SEASON_START_GIFT: Money = 50;
/// Bonus for landing on the goal field.
pub const GOAL_BONUS: Money = 120;
/// Fee for landing on the penalty field.
pub const PENALTY_FEE: Money = 180;
/// Turns a yellow card keeps a player waiting.
pub const YELLOW_CARD_TURNS: u32 = 3;
/// Bookmaker stake.
pub const BOOKMAKER_BET: Money = 100;
/// Bookmaker payout cycle: one winner per this many landings.
pub const BOOKMAKER_CYCLE: u32 = 3;

/// The 12-field reference layout, starting at the season start.
#[must_use]
pub fn reference_layout() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("Season start", FieldRule::Beginning { gift: SEASON_START_GIFT }),
        FieldSpec::new("Match vs San Marino", FieldRule::Match { fee: 160, weight: 1.0 }),
        FieldSpec::new("Rest day", FieldRule::Empty),
        FieldSpec::new("Match vs Liechtenstein", FieldRule::Match { fee: 220, weight: 1.0 }),
        FieldSpec::new("Yellow card", FieldRule::Suspension { turns: YELLOW_CARD_TURNS }),
        FieldSpec::new("Match vs Mexico", FieldRule::Match { fee: 300, weight: 2.5 }),
        FieldSpec::new("Match vs Saudi Arabia", FieldRule::Match { fee: 280, weight: 2.5 }),
        FieldSpec::new(
            "Bookmaker",
            FieldRule::Bookmaker {
                bet: BOOKMAKER_BET,
                cycle: BOOKMAKER_CYCLE,
            },
        ),
        FieldSpec::new("Match vs Argentina", FieldRule::Match { fee: 250, weight: 2.5 }),
        FieldSpec::new("Goal", FieldRule::Goal { bonus: GOAL_BONUS }),
        FieldSpec::new("Match vs France", FieldRule::Match { fee: 400, weight: 4.0 }),
        FieldSpec::new("Penalty kick", FieldRule::Penalty { fee: PENALTY_FEE }),
    ]
}
