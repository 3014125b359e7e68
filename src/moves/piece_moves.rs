//! Per-kind dispatch for the static movement rules.
//!
//! `is_move_valid` answers "could this piece go there on this board",
//! ignoring whether the mover's king is left in check. It never mutates and
//! never panics: off-board or null moves are simply `false`.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::{king_move_is_valid, king_step_is_valid};
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::{pawn_attack_squares, pawn_move_is_valid};
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

pub fn is_move_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    if !to.is_on_board() || !piece.square.is_on_board() || to == piece.square {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_valid(piece, to, game_state),
        PieceKind::Knight => knight_move_is_valid(piece, to, game_state),
        PieceKind::Bishop => bishop_move_is_valid(piece, to, game_state),
        PieceKind::Rook => rook_move_is_valid(piece, to, game_state),
        PieceKind::Queen => queen_move_is_valid(piece, to, game_state),
        PieceKind::King => king_move_is_valid(piece, to, game_state),
    }
}

/// Whether `piece` attacks `target`.
///
/// Differs from `is_move_valid` in two places: pawns attack their forward
/// diagonals even when empty and never attack with a push, and kings do not
/// attack through castling geometry.
pub fn attacks_square(piece: &Piece, target: Square, game_state: &GameState) -> bool {
    if !target.is_on_board() || target == piece.square {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_attack_squares(piece).any(|square| square == target),
        PieceKind::King => king_step_is_valid(piece, target, game_state),
        _ => is_move_valid(piece, target, game_state),
    }
}

#[cfg(test)]
mod tests {
    use super::{attacks_square, is_move_valid};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square as sq;

    #[test]
    fn off_board_destinations_are_never_valid() {
        let game = GameState::from_fen("r3k2r/pppppppp/8/3QB3/3NR3/8/PPPPPPPP/R3K2R w KQkq - 0 1")
            .expect("FEN should parse");
        let off_board = [
            Square { row: 8, col: 0 },
            Square { row: 0, col: 8 },
            Square { row: 255, col: 3 },
            Square { row: 12, col: 12 },
        ];

        for piece in game.pieces() {
            for target in off_board {
                assert!(!is_move_valid(piece, target, &game), "{piece:?} -> {target:?}");
            }
        }
    }

    #[test]
    fn staying_put_is_never_valid() {
        let game = GameState::new_game();
        for piece in game.pieces() {
            assert!(!is_move_valid(piece, piece.square, &game));
        }
    }

    #[test]
    fn pawn_attacks_empty_diagonal_but_not_push_square() {
        let game = GameState::from_fen("8/8/8/8/8/8/4P3/8 w - - 0 1").expect("FEN should parse");
        let pawn = *game.piece_at(sq("e2").expect("e2")).expect("pawn on e2");

        assert!(attacks_square(&pawn, sq("d3").expect("d3"), &game));
        assert!(attacks_square(&pawn, sq("f3").expect("f3"), &game));
        assert!(!attacks_square(&pawn, sq("e3").expect("e3"), &game));
        assert!(is_move_valid(&pawn, sq("e3").expect("e3"), &game));
    }

    #[test]
    fn sliders_attack_through_empty_squares_only() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/R2n4 w - - 0 1").expect("FEN should parse");
        let rook = *game.piece_at(sq("a1").expect("a1")).expect("rook on a1");

        assert!(attacks_square(&rook, sq("c1").expect("c1"), &game));
        assert!(attacks_square(&rook, sq("d1").expect("d1"), &game));
        assert!(!attacks_square(&rook, sq("e1").expect("e1"), &game));
    }

    #[test]
    fn king_castling_geometry_is_not_an_attack() {
        let game = GameState::from_fen("8/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        let king = *game.piece_at(sq("e1").expect("e1")).expect("king on e1");

        assert!(is_move_valid(&king, sq("g1").expect("g1"), &game));
        assert!(!attacks_square(&king, sq("g1").expect("g1"), &game));
        assert!(attacks_square(&king, sq("f1").expect("f1"), &game));
    }
}
