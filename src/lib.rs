//! # rust-pawns
//!
//! A deterministic rules engine for a two-player pawn game on a 5x3 board,
//! played as a best-of-3 match.
//!
//! ## Rules
//!
//! - Each player has three pawns, starting on rows 2 and 4
//! - A pawn steps one row forward into an empty cell, or diagonally forward
//!   onto an opposing pawn to capture it
//! - Reaching the far edge wins the round; two round wins take the match
//! - The player who did not start a round starts the next one
//!
//! ## Design Principles
//!
//! 1. **State as a value**: every operation takes a `GameState` by reference
//!    and returns a new one. The engine holds no state between calls.
//!
//! 2. **Configuration over constants**: board size, piece count, thresholds
//!    and per-player direction come from `GameConfig`.
//!
//! 3. **Invalid intents never corrupt state**: `try_*` operations return a
//!    `Rejection`; their lenient counterparts return the input unchanged.
//!
//! ## Example
//!
//! ```
//! use rust_pawns::{GamePhase, PawnGame, PieceId, PlayerId, Position};
//!
//! let game = PawnGame::default();
//! let state = game.create_initial_state(PlayerId::One);
//!
//! let state = game.select_piece(&state, PieceId::new(PlayerId::One, 2));
//! assert_eq!(state.valid_moves.as_slice(), &[Position::new(3, 2)]);
//!
//! let state = game.move_piece(&state, Position::new(3, 2));
//! assert_eq!(state.current_player, PlayerId::Two);
//! assert_eq!(state.phase, GamePhase::Playing);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, positions, pieces, configuration, state, board view, RNG
//! - `rules`: Move validation, the round/match state machine, playouts
//! - `error`: Rejection and configuration errors

pub mod core;
pub mod rules;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    BoardView, GameConfig, GamePhase, GameRng, GameRngState, GameState, MoveList, MoveRecord,
    Piece, PieceId, PlayerConfig, PlayerId, PlayerMap, Position,
};

pub use crate::rules::{Action, MoveOutcome, PawnGame, PlayoutResult, RoundOutcome, RulesEngine};

pub use crate::error::{ConfigError, ParsePieceIdError, Rejection};
