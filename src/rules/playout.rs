//! Seeded random playouts.
//!
//! Drives a whole match through the public engine API by picking uniformly
//! among the legal moves at every turn. Same seed, same match.

use tracing::debug;

use super::engine::{PawnGame, RulesEngine};
use crate::core::{GamePhase, GameRng, GameState};

/// How a playout ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    /// The last state reached.
    pub state: GameState,
    /// Successful moves made across all rounds.
    pub moves: u32,
    /// The current player had no legal move and play could not continue.
    pub stalemate: bool,
}

/// Play a full match from a fresh state.
///
/// The starting player is drawn from `rng` as well.
pub fn random_match(game: &PawnGame, rng: &mut GameRng) -> PlayoutResult {
    let starting_player = rng.choose_starting_player();
    random_match_from(game, game.create_initial_state(starting_player), rng)
}

/// Play on from `state` until the match ends or nobody can move.
pub fn random_match_from(game: &PawnGame, mut state: GameState, rng: &mut GameRng) -> PlayoutResult {
    let mut moves = 0;

    loop {
        match state.phase {
            GamePhase::MatchEnd => break,
            GamePhase::RoundEnd => {
                state = game.start_next_round(&state);
                continue;
            }
            GamePhase::Playing => {}
        }

        let legal = game.legal_moves(&state);
        let Some(&(piece, to)) = rng.choose(&legal) else {
            debug!(round = state.round, player = %state.current_player, "stalemate");
            return PlayoutResult {
                state,
                moves,
                stalemate: true,
            };
        };

        state = game.move_piece(&game.select_piece(&state, piece), to);
        moves += 1;
    }

    PlayoutResult {
        state,
        moves,
        stalemate: false,
    }
}
