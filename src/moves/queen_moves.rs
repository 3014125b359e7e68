use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

#[inline]
pub fn queen_move_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    rook_move_is_valid(piece, to, game_state) || bishop_move_is_valid(piece, to, game_state)
}

#[cfg(test)]
mod tests {
    use super::queen_move_is_valid;
    use crate::game_state::game_state::GameState;
    use crate::utils::algebraic::algebraic_to_square as sq;

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let game = GameState::from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").expect("FEN should parse");
        let queen = *game.piece_at(sq("d4").expect("d4")).expect("queen on d4");

        assert!(queen_move_is_valid(&queen, sq("d8").expect("d8"), &game));
        assert!(queen_move_is_valid(&queen, sq("a4").expect("a4"), &game));
        assert!(queen_move_is_valid(&queen, sq("h8").expect("h8"), &game));
        assert!(queen_move_is_valid(&queen, sq("a1").expect("a1"), &game));
        assert!(!queen_move_is_valid(&queen, sq("e6").expect("e6"), &game));
    }

    #[test]
    fn queen_is_blocked_by_start_position_pawns() {
        let game = GameState::new_game();
        let queen = *game.piece_at(sq("d1").expect("d1")).expect("queen on d1");

        assert!(!queen_move_is_valid(&queen, sq("h5").expect("h5"), &game));
        assert!(!queen_move_is_valid(&queen, sq("d3").expect("d3"), &game));
    }
}
