//! Core value types: players, positions, pieces, configuration, state.
//!
//! Nothing here knows the movement rules. `rules` reads these values and
//! builds new ones.

pub mod player;
pub mod position;
pub mod piece;
pub mod config;
pub mod state;
pub mod board;
pub mod rng;

pub use player::{PlayerId, PlayerMap};
pub use position::Position;
pub use piece::{MoveRecord, Piece, PieceId};
pub use config::{GameConfig, PlayerConfig};
pub use state::{initial_pieces, GamePhase, GameState, MoveList};
pub use board::BoardView;
pub use rng::{GameRng, GameRngState};
