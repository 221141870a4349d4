//! Dice: the injected die capability and the aggregator that sums them.
//!
//! ## Die
//!
//! A [`Die`] produces one unsigned outcome per call. What it produces is the
//! die's own business: this module ships a replaying [`FixedDie`], a
//! [`ZeroDie`], and a deterministic [`SeededDie`] backed by ChaCha8.
//!
//! ## Dice
//!
//! [`Dice`] is configured with the number of dice the game expects. Dice are
//! added one by one before play; a roll is the sum of one outcome from each
//! die, in insertion order.
//!
//! ```
//! use worldcup_board::core::{Dice, FixedDie};
//!
//! let mut dice = Dice::new(2);
//! dice.add_die(Some(Box::new(FixedDie::new(vec![3]))));
//! dice.add_die(Some(Box::new(FixedDie::new(vec![4]))));
//!
//! assert_eq!(dice.roll().unwrap(), 7);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::trace;

use super::error::{GameError, GameResult};

/// A source of die outcomes.
pub trait Die: fmt::Debug {
    /// Produce the next outcome.
    fn roll(&mut self) -> u32;
}

/// Sums one outcome from each configured die.
#[derive(Debug)]
pub struct Dice {
    dice: SmallVec<[Box<dyn Die>; 2]>,
    expected: usize,
}

impl Dice {
    /// Create an empty aggregator expecting `expected` dice.
    #[must_use]
    pub fn new(expected: usize) -> Self {
        Self {
            dice: SmallVec::new(),
            expected,
        }
    }

    /// Add a die. `None` is accepted and ignored.
    pub fn add_die(&mut self, die: Option<Box<dyn Die>>) {
        if let Some(die) = die {
            self.dice.push(die);
        }
    }

    /// Number of dice actually added.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Number of dice the game expects.
    #[must_use]
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// Check that exactly the expected number of dice was added.
    pub fn validate(&self) -> GameResult<()> {
        let count = self.dice.len();
        if count < self.expected {
            return Err(GameError::TooFewDice {
                count,
                expected: self.expected,
            });
        }
        if count > self.expected {
            return Err(GameError::TooManyDice {
                count,
                expected: self.expected,
            });
        }
        Ok(())
    }

    /// Roll every die once and return the total.
    pub fn roll(&mut self) -> GameResult<u32> {
        self.validate()?;
        let total = self
            .dice
            .iter_mut()
            .fold(0u32, |acc, die| acc.saturating_add(die.roll()));
        trace!(target: "worldcup.dice", total, "dice rolled");
        Ok(total)
    }
}

/// A die replaying a fixed sequence of outcomes, wrapping around at the end.
///
/// Several dice can read from one sequence with [`share_cursor`]: each roll
/// on any of them consumes the next outcome.
///
/// [`share_cursor`]: FixedDie::share_cursor
#[derive(Clone, Debug)]
pub struct FixedDie {
    rolls: Rc<[u32]>,
    cursor: Rc<Cell<usize>>,
}

impl FixedDie {
    /// Create a die replaying `rolls`.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` is empty.
    pub fn new(rolls: impl Into<Vec<u32>>) -> Self {
        let rolls: Vec<u32> = rolls.into();
        assert!(!rolls.is_empty(), "FixedDie needs at least one outcome");
        Self {
            rolls: rolls.into(),
            cursor: Rc::new(Cell::new(0)),
        }
    }

    /// Create a die where every outcome of `rolls` is repeated `times` times.
    ///
    /// Useful to give each of `times` players the same outcome in a round.
    pub fn repeated(rolls: &[u32], times: usize) -> Self {
        let expanded: Vec<u32> = rolls
            .iter()
            .flat_map(|&roll| std::iter::repeat(roll).take(times))
            .collect();
        Self::new(expanded)
    }

    /// Another die reading from the same sequence and cursor.
    #[must_use]
    pub fn share_cursor(&self) -> Self {
        self.clone()
    }
}

impl Die for FixedDie {
    fn roll(&mut self) -> u32 {
        let current = self.cursor.get();
        self.cursor.set((current + 1) % self.rolls.len());
        self.rolls[current]
    }
}

/// A die that always rolls 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroDie;

impl Die for ZeroDie {
    fn roll(&mut self) -> u32 {
        0
    }
}

/// A deterministic fair die over ChaCha8.
///
/// Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct SeededDie {
    inner: ChaCha8Rng,
    faces: u32,
}

impl SeededDie {
    /// A six-sided die.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_faces(seed, 6)
    }

    /// A die with faces numbered `1..=faces`.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is 0.
    #[must_use]
    pub fn with_faces(seed: u64, faces: u32) -> Self {
        assert!(faces > 0, "a die needs at least one face");
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            faces,
        }
    }
}

impl Die for SeededDie {
    fn roll(&mut self) -> u32 {
        self.inner.gen_range(1..=self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(die: impl Die + 'static) -> Option<Box<dyn Die>> {
        Some(Box::new(die))
    }

    #[test]
    fn test_roll_sums_in_order() {
        let mut dice = Dice::new(3);
        dice.add_die(boxed(FixedDie::new(vec![1, 2])));
        dice.add_die(boxed(FixedDie::new(vec![10])));
        dice.add_die(boxed(ZeroDie));

        assert_eq!(dice.roll().unwrap(), 11);
        assert_eq!(dice.roll().unwrap(), 12);
        assert_eq!(dice.roll().unwrap(), 11);
    }

    #[test]
    fn test_none_is_ignored() {
        let mut dice = Dice::new(1);
        dice.add_die(None);
        assert!(dice.is_empty());

        dice.add_die(boxed(ZeroDie));
        dice.add_die(None);
        assert_eq!(dice.len(), 1);
        assert!(dice.validate().is_ok());
    }

    #[test]
    fn test_expected_count_is_independent_of_added() {
        let mut dice = Dice::new(2);
        assert_eq!(dice.expected(), 2);

        for _ in 0..3 {
            dice.add_die(boxed(ZeroDie));
        }
        assert_eq!(dice.expected(), 2);
        assert_eq!(dice.len(), 3);
    }

    #[test]
    fn test_too_few_dice() {
        let mut dice = Dice::new(2);
        dice.add_die(boxed(ZeroDie));

        assert_eq!(
            dice.roll(),
            Err(GameError::TooFewDice { count: 1, expected: 2 })
        );
    }

    #[test]
    fn test_too_many_dice() {
        let mut dice = Dice::new(2);
        for _ in 0..3 {
            dice.add_die(boxed(ZeroDie));
        }

        assert_eq!(
            dice.validate(),
            Err(GameError::TooManyDice { count: 3, expected: 2 })
        );
    }

    #[test]
    fn test_fixed_die_wraps() {
        let mut die = FixedDie::new(vec![4, 5, 6]);
        let rolls: Vec<_> = (0..7).map(|_| die.roll()).collect();
        assert_eq!(rolls, vec![4, 5, 6, 4, 5, 6, 4]);
    }

    #[test]
    fn test_shared_cursor_interleaves() {
        let mut first = FixedDie::new(vec![1, 1, 1, 2, 1, 3]);
        let mut second = first.share_cursor();

        let pairs: Vec<_> = (0..3).map(|_| (first.roll(), second.roll())).collect();
        assert_eq!(pairs, vec![(1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_repeated_expands_each_outcome() {
        let mut die = FixedDie::repeated(&[2, 5], 3);
        let rolls: Vec<_> = (0..6).map(|_| die.roll()).collect();
        assert_eq!(rolls, vec![2, 2, 2, 5, 5, 5]);
    }

    #[test]
    #[should_panic(expected = "FixedDie needs at least one outcome")]
    fn test_fixed_die_empty() {
        let _ = FixedDie::new(Vec::<u32>::new());
    }

    #[test]
    fn test_seeded_die_determinism() {
        let mut a = SeededDie::new(42);
        let mut b = SeededDie::new(42);

        for _ in 0..100 {
            let roll = a.roll();
            assert_eq!(roll, b.roll());
            assert!((1..=6).contains(&roll));
        }
    }

    #[test]
    fn test_seeded_die_different_seeds() {
        let mut a = SeededDie::new(1);
        let mut b = SeededDie::new(2);

        let seq_a: Vec<_> = (0..20).map(|_| a.roll()).collect();
        let seq_b: Vec<_> = (0..20).map(|_| b.roll()).collect();
        assert_ne!(seq_a, seq_b);
    }
}
