//! Game state: the single value every engine call consumes and produces.
//!
//! ## GameState
//!
//! - Pieces (live and captured) for the current round
//! - Whose turn it is and who started the round
//! - Round counter, scores and phase
//! - The current selection and its legal destinations
//! - Round and match winners once decided
//!
//! Pieces live in an `im::Vector`, so producing the next state from the
//! previous one is a cheap structural copy and the caller's value is never
//! touched.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::GameConfig;
use super::piece::{Piece, PieceId};
use super::player::{PlayerId, PlayerMap};
use super::position::Position;

/// Legal destinations of a piece. A pawn has at most three.
pub type MoveList = SmallVec<[Position; 3]>;

/// Coarse phase of a match.
///
/// Choosing the starting player happens before the engine is involved, so
/// there is no setup phase here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are being made.
    Playing,
    /// A round was won; waiting for the next round to be started.
    RoundEnd,
    /// A player reached the round-win threshold. Terminal.
    MatchEnd,
}

/// Complete game state.
///
/// Fields are public for inspection. Transitions go through
/// [`PawnGame`](crate::rules::PawnGame), which keeps the invariants:
/// - at most one selected piece, alive and owned by `current_player`
/// - `valid_moves` is exactly the legal set of the selection, or empty
/// - every player has exactly `pieces_per_player` pieces, live or captured
/// - scores never exceed `rounds_to_win`, and reaching it means `MatchEnd`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// All pieces of the round, captured ones included.
    pub pieces: Vector<Piece>,

    /// Player to move.
    pub current_player: PlayerId,

    /// Round number (starts at 1).
    pub round: u32,

    /// Round wins per player.
    pub scores: PlayerMap<u32>,

    /// Current phase.
    pub phase: GamePhase,

    /// Selected piece, if any.
    pub selected: Option<PieceId>,

    /// Legal destinations for `selected`.
    pub valid_moves: MoveList,

    /// Player who moved first this round.
    pub starting_player: PlayerId,

    /// Winner of the round that just ended.
    pub round_winner: Option<PlayerId>,

    /// Winner of the match, once decided.
    pub match_winner: Option<PlayerId>,
}

impl GameState {
    /// Create the state for a brand-new match.
    ///
    /// ```
    /// use rust_pawns::core::{GameConfig, GamePhase, GameState, PlayerId};
    ///
    /// let state = GameState::new(&GameConfig::default(), PlayerId::Two);
    ///
    /// assert_eq!(state.pieces.len(), 6);
    /// assert_eq!(state.current_player, PlayerId::Two);
    /// assert_eq!(state.round, 1);
    /// assert_eq!(state.phase, GamePhase::Playing);
    /// ```
    #[must_use]
    pub fn new(config: &GameConfig, starting_player: PlayerId) -> Self {
        Self {
            pieces: initial_pieces(config),
            current_player: starting_player,
            round: 1,
            scores: PlayerMap::with_value(0),
            phase: GamePhase::Playing,
            selected: None,
            valid_moves: MoveList::new(),
            starting_player,
            round_winner: None,
            match_winner: None,
        }
    }

    /// Look up a piece by id, live or captured.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// The currently selected piece.
    #[must_use]
    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected.and_then(|id| self.piece(id))
    }

    /// Iterate over a player's live pieces.
    pub fn alive_pieces(&self, player: PlayerId) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.alive && p.owner() == player)
    }

    /// Is the match over?
    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.phase == GamePhase::MatchEnd
    }
}

/// Build a fresh round's pieces at their starting positions.
///
/// Player one's pieces come first, then player two's, each in slot order.
#[must_use]
pub fn initial_pieces(config: &GameConfig) -> Vector<Piece> {
    PlayerId::ALL
        .into_iter()
        .flat_map(|player| {
            let start_row = config.player(player).start_row;
            (1..=config.pieces_per_player).map(move |slot| {
                Piece::new(
                    PieceId::new(player, slot),
                    Position::new(start_row, i32::from(slot)),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pieces_layout() {
        let pieces = initial_pieces(&GameConfig::default());

        assert_eq!(pieces.len(), 6);
        assert!(pieces.iter().all(|p| p.alive));

        let ids: Vec<_> = pieces.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, vec!["p1-1", "p1-2", "p1-3", "p2-1", "p2-2", "p2-3"]);

        for piece in &pieces {
            let expected_row = match piece.owner() {
                PlayerId::One => 2,
                PlayerId::Two => 4,
            };
            assert_eq!(piece.position, Position::new(expected_row, i32::from(piece.id.slot)));
        }
    }

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(&GameConfig::default(), PlayerId::One);

        assert_eq!(state.current_player, PlayerId::One);
        assert_eq!(state.starting_player, PlayerId::One);
        assert_eq!(state.round, 1);
        assert_eq!(state.scores, PlayerMap::with_value(0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.selected.is_none());
        assert!(state.valid_moves.is_empty());
        assert!(state.round_winner.is_none());
        assert!(state.match_winner.is_none());
        assert!(!state.is_match_over());
    }

    #[test]
    fn test_piece_lookup() {
        let mut state = GameState::new(&GameConfig::default(), PlayerId::One);
        let id = PieceId::new(PlayerId::Two, 3);

        assert_eq!(state.piece(id).map(|p| p.position), Some(Position::new(4, 3)));
        assert!(state.selected_piece().is_none());

        state.selected = Some(id);
        assert_eq!(state.selected_piece().map(|p| p.id), Some(id));
    }

    #[test]
    fn test_alive_pieces_skips_captured() {
        let mut state = GameState::new(&GameConfig::default(), PlayerId::One);
        state.pieces[3].alive = false;

        assert_eq!(state.alive_pieces(PlayerId::One).count(), 3);
        assert_eq!(state.alive_pieces(PlayerId::Two).count(), 2);
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::new(&GameConfig::default(), PlayerId::Two);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
