//! King steps and castling geometry.
//!
//! Castling here only checks the static preconditions (unmoved king and rook,
//! empty squares between them). Whether the king starts in, passes through,
//! or lands in check is decided by the move engine.

use crate::game_state::chess_rules::castling_rook_col;
use crate::game_state::chess_types::*;
use crate::moves::move_shared::{destination_available, displacement};

pub fn king_move_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    if king_step_is_valid(piece, to, game_state) {
        return true;
    }

    castling_geometry_is_valid(piece, to, game_state)
}

/// Single step in any direction.
#[inline]
pub fn king_step_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    let (d_row, d_col) = displacement(piece.square, to);
    d_row.abs() <= 1
        && d_col.abs() <= 1
        && (d_row, d_col) != (0, 0)
        && destination_available(piece, to, game_state)
}

pub fn castling_geometry_is_valid(piece: &Piece, to: Square, game_state: &GameState) -> bool {
    let (d_row, d_col) = displacement(piece.square, to);
    if d_row != 0 || d_col.abs() != 2 || piece.has_moved {
        return false;
    }

    let row = piece.square.row;
    let rook_col = castling_rook_col(piece.square.col, to.col);
    let rook_ok = game_state
        .piece_at(Square { row, col: rook_col })
        .is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == piece.color && !rook.has_moved
        });
    if !rook_ok {
        return false;
    }

    let (low, high) = if rook_col > piece.square.col {
        (piece.square.col + 1, rook_col)
    } else {
        (rook_col + 1, piece.square.col)
    };

    (low..high).all(|col| game_state.is_empty(Square { row, col }))
}
