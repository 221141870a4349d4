//! The game board: fields, layouts, and movement.
//!
//! - `field`: the closed set of field behaviors and their live state
//! - `layout`: layout tables, including the reference 12-field board
//! - `traversal`: the circular `Board` and `player_move`

pub mod field;
pub mod layout;
pub mod traversal;

pub use field::{Field, FieldKind, FieldRule, FieldSpec};
pub use layout::reference_layout;
pub use traversal::{Board, Movement};
