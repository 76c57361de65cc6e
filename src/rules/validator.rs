//! Move legality.
//!
//! A live piece of the player to move may:
//! - step one row forward into an empty cell (no forward capture)
//! - step one row forward diagonally onto an opposing piece, capturing it
//!
//! Diagonals are capture-only. Nothing moves backward or sideways, and
//! pieces of the player not on move have no legal moves at all.

use crate::core::{GameConfig, GameState, MoveList, Piece, Position};

/// The unique live piece on `pos`, if any.
#[must_use]
pub fn piece_at(state: &GameState, pos: Position) -> Option<&Piece> {
    state.pieces.iter().find(|p| p.occupies(pos))
}

/// Legal destinations for `piece`, in order: forward, left diagonal, right
/// diagonal.
///
/// ```
/// use rust_pawns::core::{GameConfig, GameState, PieceId, PlayerId, Position};
/// use rust_pawns::rules::valid_moves;
///
/// let config = GameConfig::default();
/// let state = GameState::new(&config, PlayerId::One);
/// let piece = state.piece(PieceId::new(PlayerId::One, 2)).unwrap();
///
/// assert_eq!(valid_moves(&config, &state, piece).as_slice(), &[Position::new(3, 2)]);
/// ```
#[must_use]
pub fn valid_moves(config: &GameConfig, state: &GameState, piece: &Piece) -> MoveList {
    let mut moves = MoveList::new();

    if !piece.alive || piece.owner() != state.current_player {
        return moves;
    }

    let direction = config.player(piece.owner()).direction;

    let forward = piece.position.offset(direction, 0);
    if config.is_valid_position(forward) && piece_at(state, forward).is_none() {
        moves.push(forward);
    }

    for d_col in [-1, 1] {
        let diagonal = piece.position.offset(direction, d_col);
        if !config.is_valid_position(diagonal) {
            continue;
        }
        if let Some(target) = piece_at(state, diagonal) {
            if target.owner() != piece.owner() {
                moves.push(diagonal);
            }
        }
    }

    moves
}

/// Is `to` a legal destination for `piece`?
#[must_use]
pub fn is_valid_move(config: &GameConfig, state: &GameState, piece: &Piece, to: Position) -> bool {
    valid_moves(config, state, piece).contains(&to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PieceId, PlayerId};

    fn setup() -> (GameConfig, GameState) {
        let config = GameConfig::default();
        let state = GameState::new(&config, PlayerId::One);
        (config, state)
    }

    fn place(state: &mut GameState, id: PieceId, row: i32, col: i32) {
        for piece in state.pieces.iter_mut() {
            if piece.id == id {
                piece.position = Position::new(row, col);
            }
        }
    }

    #[test]
    fn test_piece_at() {
        let (_, state) = setup();

        assert_eq!(
            piece_at(&state, Position::new(4, 3)).map(|p| p.id),
            Some(PieceId::new(PlayerId::Two, 3))
        );
        assert!(piece_at(&state, Position::new(3, 3)).is_none());
        assert!(piece_at(&state, Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_piece_at_ignores_captured() {
        let (_, mut state) = setup();
        state.pieces[0].alive = false;

        assert!(piece_at(&state, Position::new(2, 1)).is_none());
    }

    #[test]
    fn test_forward_only_from_start() {
        let (config, state) = setup();

        for piece in state.alive_pieces(PlayerId::One) {
            let moves = valid_moves(&config, &state, piece);
            assert_eq!(moves.as_slice(), &[piece.position.offset(1, 0)]);
        }
    }

    #[test]
    fn test_forward_blocked_by_either_player() {
        let (config, mut state) = setup();
        let mover = PieceId::new(PlayerId::One, 2);

        // Opponent directly ahead: not capturable straight on
        place(&mut state, PieceId::new(PlayerId::Two, 2), 3, 2);
        let piece = *state.piece(mover).unwrap();
        assert!(!is_valid_move(&config, &state, &piece, Position::new(3, 2)));

        // Own piece directly ahead
        place(&mut state, PieceId::new(PlayerId::Two, 2), 4, 2);
        place(&mut state, PieceId::new(PlayerId::One, 1), 3, 2);
        let piece = *state.piece(mover).unwrap();
        assert!(!is_valid_move(&config, &state, &piece, Position::new(3, 2)));
    }

    #[test]
    fn test_diagonal_capture_requires_opponent() {
        let (config, mut state) = setup();
        place(&mut state, PieceId::new(PlayerId::Two, 1), 3, 1);
        place(&mut state, PieceId::new(PlayerId::One, 3), 3, 3);

        let piece = *state.piece(PieceId::new(PlayerId::One, 2)).unwrap();
        let moves = valid_moves(&config, &state, &piece);

        assert_eq!(moves.as_slice(), &[Position::new(3, 2), Position::new(3, 1)]);
    }

    #[test]
    fn test_order_forward_left_right() {
        let (config, mut state) = setup();
        place(&mut state, PieceId::new(PlayerId::Two, 1), 3, 1);
        place(&mut state, PieceId::new(PlayerId::Two, 3), 3, 3);

        let piece = *state.piece(PieceId::new(PlayerId::One, 2)).unwrap();
        let moves = valid_moves(&config, &state, &piece);

        assert_eq!(
            moves.as_slice(),
            &[Position::new(3, 2), Position::new(3, 1), Position::new(3, 3)]
        );
    }

    #[test]
    fn test_player_two_moves_up() {
        let config = GameConfig::default();
        let state = GameState::new(&config, PlayerId::Two);

        let piece = *state.piece(PieceId::new(PlayerId::Two, 1)).unwrap();
        assert_eq!(valid_moves(&config, &state, &piece).as_slice(), &[Position::new(3, 1)]);
    }

    #[test]
    fn test_no_moves_off_board() {
        let (config, mut state) = setup();
        place(&mut state, PieceId::new(PlayerId::One, 1), 5, 1);

        let piece = *state.piece(PieceId::new(PlayerId::One, 1)).unwrap();
        assert!(valid_moves(&config, &state, &piece).is_empty());
    }

    #[test]
    fn test_not_your_turn_or_dead_has_no_moves() {
        let (config, mut state) = setup();

        let opponent = *state.piece(PieceId::new(PlayerId::Two, 2)).unwrap();
        assert!(valid_moves(&config, &state, &opponent).is_empty());

        state.pieces[1].alive = false;
        let dead = *state.piece(PieceId::new(PlayerId::One, 2)).unwrap();
        assert!(valid_moves(&config, &state, &dead).is_empty());
    }
}
