//! Game rules: move legality, the round/match state machine, and seeded
//! playouts.
//!
//! `PawnGame` is the entry point. It owns a `GameConfig` and turns a
//! `GameState` plus an intent into the next `GameState`.

pub mod validator;
pub mod engine;
pub mod playout;

pub use validator::{is_valid_move, piece_at, valid_moves};
pub use engine::{Action, MoveOutcome, PawnGame, RoundOutcome, RulesEngine};
pub use playout::{random_match, random_match_from, PlayoutResult};
