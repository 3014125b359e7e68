use crate::game_state::chess_types::*;
use crate::moves::move_shared::{destination_available, displacement};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// L-shaped jump; intervening squares are ignored.
#[inline]
pub fn knight_move_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    let (d_row, d_col) = displacement(piece.square, to);
    let (row_dist, col_dist) = (d_row.abs(), d_col.abs());
    let shape_ok = (row_dist == 2 && col_dist == 1) || (row_dist == 1 && col_dist == 2);

    shape_ok && destination_available(piece, to, game_state)
}
