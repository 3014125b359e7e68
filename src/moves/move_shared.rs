//! Helpers shared by the per-piece movement rules.

use crate::game_state::chess_types::*;

/// Destination is empty or holds a piece of the opposite color.
#[inline]
pub fn destination_available(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    match game_state.piece_at(to) {
        None => true,
        Some(target) => target.color != piece.color,
    }
}

/// Signed `(d_row, d_col)` from `from` to `to`.
#[inline]
pub fn displacement(from: Square, to: Square) -> (i8, i8) {
    (
        to.row as i8 - from.row as i8,
        to.col as i8 - from.col as i8,
    )
}

/// Every square strictly between `from` and `to` is empty.
///
/// The squares must share a row, a column, or a diagonal.
pub fn path_is_clear(from: Square, to: Square, game_state: &GameState) -> bool {
    let (d_row, d_col) = displacement(from, to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !game_state.is_empty(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }

    false
}
