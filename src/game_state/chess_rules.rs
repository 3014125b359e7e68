//! Canonical chess-rule constants.
//!
//! Static layout data used to set up a new game and to locate the castling
//! rooks.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece order on each home row, file a through file h.
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king starts on.
pub const KING_START_COL: u8 = 4;

/// Column of the rook used when castling toward `king_to_col`.
#[inline]
pub const fn castling_rook_col(king_from_col: u8, king_to_col: u8) -> u8 {
    if king_to_col > king_from_col {
        7
    } else {
        0
    }
}

/// Column the rook lands on after castling toward `king_to_col`.
#[inline]
pub const fn castled_rook_col(king_from_col: u8, king_to_col: u8) -> u8 {
    if king_to_col > king_from_col {
        king_to_col - 1
    } else {
        king_to_col + 1
    }
}
