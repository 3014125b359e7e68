//! Move classification.
//!
//! Decides from piece kind and geometry alone whether a coordinate move is a
//! promotion, a castle, an en-passant capture, or an ordinary move. Validity
//! is checked afterwards.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_shared::displacement;

/// Classify `from -> to`. `promotion` is only used when a pawn reaches the
/// far rank and defaults to a queen.
pub fn classify_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Result<ChessMove, String> {
    let piece = game_state
        .piece_at(from)
        .ok_or_else(|| format!("No piece on from-square {from:?}"))?;
    let (d_row, d_col) = displacement(from, to);

    let kind = match piece.kind {
        PieceKind::Pawn if to.row == piece.color.promotion_row() => {
            MoveKind::Promotion(promotion.unwrap_or(PieceKind::Queen))
        }
        PieceKind::Pawn
            if d_row == piece.color.forward()
                && d_col.abs() == 1
                && game_state.is_empty(to)
                && game_state.en_passant_target == Some(to) =>
        {
            MoveKind::EnPassant
        }
        PieceKind::King if d_row == 0 && d_col.abs() == 2 => MoveKind::Castle,
        _ => MoveKind::Normal,
    };

    Ok(ChessMove { from, to, kind })
}
