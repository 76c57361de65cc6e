//! Pieces and their identifiers.
//!
//! ## PieceId
//!
//! A piece is identified by its owner and its slot, the column it starts the
//! round in. Ids render as `p{player}-{slot}`, so `p1-2` is player one's
//! middle pawn on the default board.
//!
//! ```
//! use rust_pawns::core::{PieceId, PlayerId};
//!
//! let id: PieceId = "p2-3".parse().unwrap();
//! assert_eq!(id, PieceId::new(PlayerId::Two, 3));
//! assert_eq!(id.to_string(), "p2-3");
//! ```
//!
//! Every round starts from a fresh batch that reuses the same ids. Within a
//! round, ids are unique and never reassigned.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::PlayerId;
use super::position::Position;
use crate::error::ParsePieceIdError;

/// Stable identifier of a piece within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId {
    /// Owning player.
    pub owner: PlayerId,

    /// 1-based slot, equal to the starting column.
    pub slot: u8,
}

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(owner: PlayerId, slot: u8) -> Self {
        Self { owner, slot }
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}-{}", self.owner.number(), self.slot)
    }
}

impl FromStr for PieceId {
    type Err = ParsePieceIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePieceIdError(s.to_string());

        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        let (player, slot) = s
            .strip_prefix('p')
            .and_then(|rest| rest.split_once('-'))
            .filter(|&(player, slot)| digits(player) && digits(slot))
            .ok_or_else(err)?;
        let owner = player
            .parse::<u8>()
            .ok()
            .and_then(PlayerId::from_number)
            .ok_or_else(err)?;
        let slot = slot.parse::<u8>().ok().filter(|&s| s > 0).ok_or_else(err)?;

        Ok(Self::new(owner, slot))
    }
}

/// A pawn on the board.
///
/// Captured pieces stay in the state with `alive == false`; they never move,
/// block, or get selected again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub position: Position,
    pub alive: bool,
}

impl Piece {
    /// Create a live piece at the given position.
    #[must_use]
    pub const fn new(id: PieceId, position: Position) -> Self {
        Self {
            id,
            position,
            alive: true,
        }
    }

    /// The owning player.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.id.owner
    }

    /// Is this a live piece standing on `pos`?
    #[must_use]
    pub fn occupies(&self, pos: Position) -> bool {
        self.alive && self.position == pos
    }
}

/// What a completed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The piece that moved.
    pub piece: PieceId,

    /// Where it came from.
    pub from: Position,

    /// Where it landed.
    pub to: Position,

    /// The opposing piece taken on `to`, if any.
    pub captured: Option<PieceId>,
}

impl MoveRecord {
    /// Was this move a diagonal capture?
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
