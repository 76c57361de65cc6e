//! Read-only board snapshot for presentation layers.
//!
//! `BoardView` indexes the live pieces of a state by position so a renderer
//! can walk the grid cell by cell. Its `Display` impl draws the board with
//! row and column labels:
//!
//! ```text
//!    1 2 3
//! 1  . . .
//! 2  O O O
//! 3  . * .
//! 4  X X X
//! 5  . . .
//! ```
//!
//! `*` marks an empty cell that the selected piece can move to.

use rustc_hash::FxHashMap;

use super::config::GameConfig;
use super::piece::PieceId;
use super::position::Position;
use super::state::GameState;

/// Occupancy and highlight snapshot of one state.
#[derive(Clone, Debug)]
pub struct BoardView<'a> {
    config: &'a GameConfig,
    state: &'a GameState,
    occupancy: FxHashMap<Position, PieceId>,
}

impl<'a> BoardView<'a> {
    /// Snapshot the live pieces of `state`.
    #[must_use]
    pub fn new(config: &'a GameConfig, state: &'a GameState) -> Self {
        let occupancy = state
            .pieces
            .iter()
            .filter(|p| p.alive)
            .map(|p| (p.position, p.id))
            .collect();

        Self {
            config,
            state,
            occupancy,
        }
    }

    /// The live piece on `pos`, if any.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<PieceId> {
        self.occupancy.get(&pos).copied()
    }

    /// Is `pos` a destination of the current selection?
    #[must_use]
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.state.valid_moves.contains(&pos)
    }

    /// Is `piece` the current selection?
    #[must_use]
    pub fn is_selected(&self, piece: PieceId) -> bool {
        self.state.selected == Some(piece)
    }

    /// Number of live pieces on the board.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.occupancy.len()
    }

    fn cell_char(&self, pos: Position) -> char {
        match self.occupant(pos) {
            Some(id) => self.config.player(id.owner).symbol,
            None if self.is_highlighted(pos) => '*',
            None => '.',
        }
    }
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.config.rows.to_string().len();
        let cell = self.config.cols.to_string().len();

        write!(f, "{:label$} ", "")?;
        for col in 1..=self.config.cols {
            write!(f, " {col:>cell$}")?;
        }
        writeln!(f)?;

        for row in 1..=self.config.rows {
            write!(f, "{row:>label$} ")?;
            for col in 1..=self.config.cols {
                write!(f, " {:>cell$}", self.cell_char(Position::new(row, col)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
