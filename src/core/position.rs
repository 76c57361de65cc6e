//! Board coordinates.
//!
//! Rows and columns are 1-based, matching how the board is labelled for
//! players: row 1 is the top edge, column 1 the left edge. Whether a
//! position lies on the board depends on the ruleset, so validity is
//! checked by [`GameConfig::is_valid_position`](super::GameConfig::is_valid_position).

use serde::{Deserialize, Serialize};

/// A cell on the board, `(row, col)`.
///
/// Plain value type. Any integer pair is representable; off-board
/// coordinates simply never appear in a legal move set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position shifted by the given row and column deltas.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
