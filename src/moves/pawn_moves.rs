//! Pawn pushes and diagonal captures.
//!
//! En passant is not recognised here: it depends on the previous move, so
//! the move engine classifies and validates it separately.

use crate::game_state::chess_types::*;
use crate::moves::move_shared::displacement;

pub fn pawn_move_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    let forward = piece.color.forward();
    let (d_row, d_col) = displacement(piece.square, to);

    // Single push.
    if d_col == 0 && d_row == forward {
        return game_state.is_empty(to);
    }

    // Double push from the starting row.
    if d_col == 0 && d_row == 2 * forward && piece.square.row == piece.color.pawn_start_row() {
        let Some(intermediate) = piece.square.offset(forward, 0) else {
            return false;
        };
        return game_state.is_empty(intermediate) && game_state.is_empty(to);
    }

    // Capture.
    if d_col.abs() == 1 && d_row == forward {
        return pawn_capture_target(piece, to, game_state);
    }

    false
}

/// Diagonal squares this pawn attacks, whether or not they are occupied.
pub fn pawn_attack_squares(piece: &Piece) -> impl Iterator<Item = Square> {
    let forward = piece.color.forward();
    let from = piece.square;
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(forward, d_col))
}

#[inline]
fn pawn_capture_target(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    game_state
        .piece_at(to)
        .is_some_and(|target| target.color != piece.color)
}

#[cfg(test)]
mod tests {
    use super::{pawn_attack_squares, pawn_move_is_valid};
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square as sq;

    #[test]
    fn pawn_pushes_one_or_two_from_start() {
        let game = GameState::new_game();
        let e2 = *game.piece_at(sq("e2").expect("e2")).expect("pawn on e2");
        let d7 = *game.piece_at(sq("d7").expect("d7")).expect("pawn on d7");

        assert!(pawn_move_is_valid(&e2, sq("e3").expect("e3"), &game));
        assert!(pawn_move_is_valid(&e2, sq("e4").expect("e4"), &game));
        assert!(!pawn_move_is_valid(&e2, sq("e5").expect("e5"), &game));
        assert!(!pawn_move_is_valid(&e2, sq("e1").expect("e1"), &game));
        assert!(pawn_move_is_valid(&d7, sq("d6").expect("d6"), &game));
        assert!(pawn_move_is_valid(&d7, sq("d5").expect("d5"), &game));
        assert!(!pawn_move_is_valid(&d7, sq("d8").expect("d8"), &game));
    }

    #[test]
    fn double_push_needs_both_squares_empty_and_start_row() {
        let game = GameState::from_fen("8/8/8/8/8/4n3/3PP3/8 w - - 0 1").expect("FEN should parse");
        let e2 = *game.piece_at(sq("e2").expect("e2")).expect("pawn on e2");
        assert!(!pawn_move_is_valid(&e2, sq("e4").expect("e4"), &game));
        assert!(!pawn_move_is_valid(&e2, sq("e3").expect("e3"), &game));

        let d2 = *game.piece_at(sq("d2").expect("d2")).expect("pawn on d2");
        assert!(pawn_move_is_valid(&d2, sq("e3").expect("e3"), &game));

        let moved = GameState::from_fen("8/8/8/8/8/4P3/8/8 w - - 0 1").expect("FEN should parse");
        let e3 = *moved.piece_at(sq("e3").expect("e3")).expect("pawn on e3");
        assert!(!pawn_move_is_valid(&e3, sq("e5").expect("e5"), &moved));
    }

    #[test]
    fn pawn_captures_only_enemy_pieces_diagonally() {
        let game = GameState::from_fen("8/8/8/3p1P2/4P3/8/8/8 w - - 0 1").expect("FEN should parse");
        let e4 = *game.piece_at(sq("e4").expect("e4")).expect("pawn on e4");

        assert!(pawn_move_is_valid(&e4, sq("d5").expect("d5"), &game));
        assert!(!pawn_move_is_valid(&e4, sq("f5").expect("f5"), &game));
        assert!(!pawn_move_is_valid(&e4, sq("d3").expect("d3"), &game));
    }

    #[test]
    fn edge_pawn_attacks_one_square() {
        let game = GameState::from_fen("8/8/8/8/8/8/P7/8 w - - 0 1").expect("FEN should parse");
        let a2 = *game.piece_at(sq("a2").expect("a2")).expect("pawn on a2");
        let attacks: Vec<_> = pawn_attack_squares(&a2).collect();
        assert_eq!(attacks, vec![sq("b3").expect("b3")]);
    }
}
