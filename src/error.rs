//! Error types.
//!
//! The engine never panics or corrupts state on a bad intent. Strict entry
//! points return a [`Rejection`] describing why; the lenient entry points
//! turn any rejection into "state unchanged".

use crate::core::{GamePhase, PieceId, PlayerId, Position};

/// Why the engine refused an intent. The input state is never modified.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("operation requires phase {expected:?} but the game is in {actual:?}")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),

    #[error("piece {0} has been captured")]
    PieceCaptured(PieceId),

    #[error("piece {piece} does not belong to {current}, whose turn it is")]
    NotYourTurn { piece: PieceId, current: PlayerId },

    #[error("no piece is selected")]
    NoSelection,

    #[error("{0} is not a legal destination for the selected piece")]
    IllegalDestination(Position),
}

/// Errors that can occur when loading a ruleset.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A piece id string that is not of the form `p{player}-{slot}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid piece id {0:?}, expected p<player>-<slot>")]
pub struct ParsePieceIdError(pub String);
