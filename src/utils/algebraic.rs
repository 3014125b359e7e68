//! Square conversions for coordinate notation.
//!
//! Parses human-readable coordinates (e.g., `e4`) into the internal
//! `(row, col)` squares used by the board, FEN parser, and command parser.
//! The reverse direction is `Square`'s `Display` impl.

use crate::game_state::chess_types::Square;

/// Convert a coordinate (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Square {
        row: b'8' - rank,
        col: file - b'a',
    })
}
