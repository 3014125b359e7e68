use crate::game_state::chess_types::*;
use crate::moves::move_shared::{destination_available, displacement, path_is_clear};

/// Straight slide along a row or column with a clear path.
#[inline]
pub fn rook_move_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    let (d_row, d_col) = displacement(piece.square, to);
    if (d_row == 0) == (d_col == 0) {
        return false;
    }

    path_is_clear(piece.square, to, game_state) && destination_available(piece, to, game_state)
}
