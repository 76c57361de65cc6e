//! The round and match state machine.
//!
//! ```text
//! Playing --win--> RoundEnd --start_next_round--> Playing --> ... --> MatchEnd
//! ```
//!
//! Every operation takes the current state by reference and returns a new
//! one. Each comes in two flavours:
//! - `try_*` returns `Err(Rejection)` for an illegal or out-of-sequence intent
//! - the plain form returns an unchanged copy of the input instead
//!
//! A move that captures and reaches the win row in one step captures first,
//! then ends the round; the captured piece is dead in the resulting state.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::validator;
use crate::core::{
    initial_pieces, GameConfig, GamePhase, GameState, MoveList, MoveRecord, Piece, PieceId,
    PlayerId, Position,
};
use crate::error::{ConfigError, Rejection};

/// A caller intent, as a single value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Select one of the current player's pieces.
    Select(PieceId),
    /// Move the selected piece.
    Move(Position),
    /// Begin the next round after a round win.
    NextRound,
}

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Who won the round.
    pub round_winner: PlayerId,
    /// Set when that round also decided the match.
    pub match_winner: Option<PlayerId>,
}

/// A successful move: the next state plus what happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub record: MoveRecord,
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `valid_moves`: Return empty for pieces that cannot act
/// - `apply`: Must be deterministic and must not touch the input state
/// - `outcome`: Return None while the round is in progress
pub trait RulesEngine {
    /// Get the ruleset.
    fn config(&self) -> &GameConfig;

    /// Legal destinations for a piece.
    fn valid_moves(&self, state: &GameState, piece: &Piece) -> MoveList;

    /// Apply an intent, producing the next state.
    fn apply(&self, state: &GameState, action: &Action) -> Result<GameState, Rejection>;

    /// The decided round, if play has stopped.
    fn outcome(&self, state: &GameState) -> Option<RoundOutcome>;

    // === Convenience Methods ===

    /// Enumerate every `(piece, destination)` the current player could play.
    fn legal_moves(&self, state: &GameState) -> Vec<(PieceId, Position)> {
        if state.phase != GamePhase::Playing {
            return vec![];
        }

        state
            .alive_pieces(state.current_player)
            .flat_map(|piece| {
                self.valid_moves(state, piece)
                    .into_iter()
                    .map(move |to| (piece.id, to))
            })
            .collect()
    }

    /// Can the current player move at all?
    fn has_legal_move(&self, state: &GameState) -> bool {
        !self.legal_moves(state).is_empty()
    }
}

/// The pawn game rules, bound to one ruleset.
#[derive(Clone, Debug, Default)]
pub struct PawnGame {
    config: GameConfig,
}

impl PawnGame {
    /// Build an engine for a validated ruleset.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    // === Match lifecycle ===

    /// State for a brand-new match.
    #[must_use]
    pub fn create_initial_state(&self, starting_player: PlayerId) -> GameState {
        GameState::new(&self.config, starting_player)
    }

    /// Discard everything and start a new match.
    #[must_use]
    pub fn reset_game(&self, starting_player: PlayerId) -> GameState {
        debug!(%starting_player, "match reset");
        self.create_initial_state(starting_player)
    }

    // === Queries ===

    /// The unique live piece on `pos`, if any.
    #[must_use]
    pub fn piece_at<'s>(&self, state: &'s GameState, pos: Position) -> Option<&'s Piece> {
        validator::piece_at(state, pos)
    }

    /// Is `to` a legal destination for `piece`?
    #[must_use]
    pub fn is_valid_move(&self, state: &GameState, piece: &Piece, to: Position) -> bool {
        validator::is_valid_move(&self.config, state, piece, to)
    }

    // === Selection ===

    /// Select a piece and compute its legal destinations.
    pub fn try_select_piece(&self, state: &GameState, id: PieceId) -> Result<GameState, Rejection> {
        require_phase(state, GamePhase::Playing)?;

        let piece = state.piece(id).ok_or(Rejection::UnknownPiece(id))?;
        if !piece.alive {
            return Err(Rejection::PieceCaptured(id));
        }
        if piece.owner() != state.current_player {
            return Err(Rejection::NotYourTurn {
                piece: id,
                current: state.current_player,
            });
        }

        let valid_moves = validator::valid_moves(&self.config, state, piece);
        trace!(piece = %id, moves = valid_moves.len(), "piece selected");

        Ok(GameState {
            selected: Some(id),
            valid_moves,
            ..state.clone()
        })
    }

    /// Select a piece; an invalid selection leaves the state unchanged.
    #[must_use]
    pub fn select_piece(&self, state: &GameState, id: PieceId) -> GameState {
        or_unchanged(state, self.try_select_piece(state, id))
    }

    // === Movement ===

    /// Move the selected piece to `to`, capturing and scoring as needed.
    pub fn try_move_piece(&self, state: &GameState, to: Position) -> Result<MoveOutcome, Rejection> {
        require_phase(state, GamePhase::Playing)?;

        let id = state.selected.ok_or(Rejection::NoSelection)?;
        let piece = *state.piece(id).ok_or(Rejection::UnknownPiece(id))?;

        if !state.valid_moves.contains(&to) || !self.is_valid_move(state, &piece, to) {
            return Err(Rejection::IllegalDestination(to));
        }

        let captured = validator::piece_at(state, to).map(|p| p.id);

        let mut pieces = state.pieces.clone();
        for p in pieces.iter_mut() {
            if p.id == id {
                p.position = to;
            } else if Some(p.id) == captured {
                p.alive = false;
            }
        }

        let record = MoveRecord {
            piece: id,
            from: piece.position,
            to,
            captured,
        };
        if let Some(victim) = captured {
            debug!(piece = %id, %victim, at = %to, "capture");
        }

        let moved = GameState {
            pieces,
            selected: None,
            valid_moves: MoveList::new(),
            ..state.clone()
        };

        let mover = piece.owner();
        let state = if to.row == self.config.player(mover).win_row {
            self.resolve_round_win(moved, mover)
        } else {
            GameState {
                current_player: mover.other(),
                ..moved
            }
        };

        Ok(MoveOutcome { state, record })
    }

    /// Move the selected piece; an illegal move leaves the state unchanged.
    #[must_use]
    pub fn move_piece(&self, state: &GameState, to: Position) -> GameState {
        or_unchanged(state, self.try_move_piece(state, to).map(|outcome| outcome.state))
    }

    fn resolve_round_win(&self, state: GameState, winner: PlayerId) -> GameState {
        let mut scores = state.scores;
        scores[winner] += 1;

        if scores[winner] >= self.config.rounds_to_win {
            debug!(%winner, round = state.round, "match won");
            GameState {
                scores,
                phase: GamePhase::MatchEnd,
                round_winner: Some(winner),
                match_winner: Some(winner),
                ..state
            }
        } else {
            debug!(%winner, round = state.round, score = scores[winner], "round won");
            GameState {
                scores,
                phase: GamePhase::RoundEnd,
                round_winner: Some(winner),
                ..state
            }
        }
    }

    // === Rounds ===

    /// Reset the board for the next round. The player who did not start
    /// the finished round starts this one; scores carry over.
    pub fn try_start_next_round(&self, state: &GameState) -> Result<GameState, Rejection> {
        require_phase(state, GamePhase::RoundEnd)?;

        let starting_player = state.starting_player.other();
        debug!(round = state.round + 1, %starting_player, "next round");

        Ok(GameState {
            pieces: initial_pieces(&self.config),
            current_player: starting_player,
            round: state.round + 1,
            phase: GamePhase::Playing,
            selected: None,
            valid_moves: MoveList::new(),
            starting_player,
            round_winner: None,
            ..state.clone()
        })
    }

    /// Start the next round; does nothing unless a round has just ended.
    #[must_use]
    pub fn start_next_round(&self, state: &GameState) -> GameState {
        or_unchanged(state, self.try_start_next_round(state))
    }
}

impl RulesEngine for PawnGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn valid_moves(&self, state: &GameState, piece: &Piece) -> MoveList {
        validator::valid_moves(&self.config, state, piece)
    }

    fn apply(&self, state: &GameState, action: &Action) -> Result<GameState, Rejection> {
        match *action {
            Action::Select(id) => self.try_select_piece(state, id),
            Action::Move(to) => self.try_move_piece(state, to).map(|outcome| outcome.state),
            Action::NextRound => self.try_start_next_round(state),
        }
    }

    fn outcome(&self, state: &GameState) -> Option<RoundOutcome> {
        match state.phase {
            GamePhase::Playing => None,
            GamePhase::RoundEnd | GamePhase::MatchEnd => {
                state.round_winner.map(|round_winner| RoundOutcome {
                    round_winner,
                    match_winner: state.match_winner,
                })
            }
        }
    }
}

fn require_phase(state: &GameState, expected: GamePhase) -> Result<(), Rejection> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(Rejection::WrongPhase {
            expected,
            actual: state.phase,
        })
    }
}

fn or_unchanged(state: &GameState, result: Result<GameState, Rejection>) -> GameState {
    result.unwrap_or_else(|reason| {
        debug!(%reason, "intent rejected");
        state.clone()
    })
}
