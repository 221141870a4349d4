//! The circular board and movement resolution.

use tracing::trace;

use super::field::{Field, FieldSpec};
use super::layout::reference_layout;
use crate::core::Player;

/// What a single move did: where it started, how far it went, and where it
/// ended.
///
/// The passed fields are not stored; [`passed`](Movement::passed) recomputes
/// them, so a move costs the same memory whatever the roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Movement {
    pub start: usize,
    pub destination: usize,
    pub steps: u32,
    board_len: usize,
}

impl Movement {
    /// Indices of the fields passed through, in visit order.
    pub fn passed(&self) -> impl Iterator<Item = usize> {
        let Self {
            start,
            steps,
            board_len,
            ..
        } = *self;
        (1..steps as usize).map(move |offset| (start + offset % board_len) % board_len)
    }

    /// Number of fields passed through.
    #[must_use]
    pub fn passed_count(&self) -> u32 {
        self.steps.saturating_sub(1)
    }
}

/// An ordered, circular sequence of fields.
///
/// The field count is fixed at construction.
#[derive(Clone, Debug)]
pub struct Board {
    fields: Vec<Field>,
}

impl Board {
    /// Build a board from a layout table.
    ///
    /// # Panics
    ///
    /// Panics if `layout` is empty.
    #[must_use]
    pub fn from_layout(layout: &[FieldSpec]) -> Self {
        assert!(!layout.is_empty(), "Board needs at least one field");
        Self {
            fields: layout.iter().map(Field::from_spec).collect(),
        }
    }

    /// The 12-field reference board.
    #[must_use]
    pub fn reference() -> Self {
        Self::from_layout(&reference_layout())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field at `index`, wrapping around the board.
    #[must_use]
    pub fn field(&self, index: usize) -> &Field {
        &self.fields[index % self.fields.len()]
    }

    /// Name of the field at `index`, wrapping around the board.
    #[must_use]
    pub fn field_name(&self, index: usize) -> &str {
        self.field(index).name()
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Move `player` forward by `steps`.
    ///
    /// The `steps - 1` fields strictly between the start and the destination
    /// get their pass effect, in order. Then the player is relocated and the
    /// destination gets its land effect. With `steps == 0` nothing is passed
    /// and the current field is landed on again.
    pub fn player_move(&mut self, player: &mut Player, steps: u32) -> Movement {
        let len = self.fields.len();
        let start = player.field() % len;
        let movement = Movement {
            start,
            destination: (start + steps as usize % len) % len,
            steps,
            board_len: len,
        };

        for index in movement.passed() {
            self.fields[index].pass(player);
        }

        let destination = movement.destination;
        player.move_to(destination);
        self.fields[destination].land(player);

        trace!(
            target: "worldcup.board",
            player = player.name(),
            start,
            destination,
            passed = movement.passed_count(),
            money = player.money(),
            "player moved"
        );

        movement
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::reference()
    }
}
