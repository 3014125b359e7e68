//! In-place move application with exact undo.
//!
//! `make_move` mutates the board and returns an `UndoState`; `unmake_move`
//! restores every touched cell and board field. Legality testing runs through
//! `with_move_applied`, which guarantees the revert before returning.

use crate::game_state::chess_rules::{castled_rook_col, castling_rook_col};
use crate::game_state::{chess_types::*, game_state::GameState};

/// Apply `mv` to the board. Performs no legality checks beyond requiring the
/// pieces the move refers to; on error the board is untouched.
pub fn make_move(game_state: &mut GameState, mv: ChessMove) -> Result<UndoState, String> {
    let mut moving = game_state
        .piece_at(mv.from)
        .copied()
        .ok_or_else(|| format!("No piece on from-square {:?}", mv.from))?;
    if !mv.to.is_on_board() {
        return Err(format!("Destination off the board: {:?}", mv.to));
    }

    let row = mv.from.row;
    let rook_squares = if mv.kind == MoveKind::Castle {
        let rook_from = Square {
            row,
            col: castling_rook_col(mv.from.col, mv.to.col),
        };
        let rook_to = Square {
            row,
            col: castled_rook_col(mv.from.col, mv.to.col),
        };
        game_state
            .piece_at(rook_from)
            .filter(|rook| rook.kind == PieceKind::Rook && rook.color == moving.color)
            .ok_or_else(|| format!("No castling rook on {rook_from:?}"))?;
        Some((rook_from, rook_to))
    } else {
        None
    };

    let mut undo = UndoState::new(game_state);
    undo.record(game_state, mv.from);
    undo.record(game_state, mv.to);

    match mv.kind {
        MoveKind::EnPassant => {
            let captured = Square { row, col: mv.to.col };
            undo.record(game_state, captured);
            game_state.take(captured);
        }
        MoveKind::Castle => {
            if let Some((rook_from, rook_to)) = rook_squares {
                undo.record(game_state, rook_from);
                undo.record(game_state, rook_to);
                if let Some(mut rook) = game_state.take(rook_from) {
                    rook.has_moved = true;
                    game_state.put(rook_to, rook);
                }
            }
        }
        MoveKind::Promotion(kind) => {
            moving.kind = kind;
        }
        MoveKind::Normal => {}
    }

    game_state.take(mv.from);
    moving.has_moved = true;
    game_state.put(mv.to, moving);

    game_state.en_passant_target = double_push_midpoint(&moving, mv);
    game_state.side_to_move = moving.color.opposite();

    Ok(undo)
}

#[inline]
pub fn unmake_move(game_state: &mut GameState, undo: UndoState) {
    undo.restore(game_state);
}

/// Apply `mv`, run `query` against the resulting board, then revert.
pub fn with_move_applied<T>(
    game_state: &mut GameState,
    mv: ChessMove,
    query: impl FnOnce(&GameState) -> T,
) -> Result<T, String> {
    let undo = make_move(game_state, mv)?;
    let answer = query(game_state);
    unmake_move(game_state, undo);
    Ok(answer)
}

/// Square skipped by a two-square pawn advance.
fn double_push_midpoint(moved: &Piece, mv: ChessMove) -> Option<Square> {
    if moved.kind != PieceKind::Pawn || mv.from.col != mv.to.col || mv.from.row.abs_diff(mv.to.row) != 2 {
        return None;
    }

    Some(Square {
        row: (mv.from.row + mv.to.row) / 2,
        col: mv.from.col,
    })
}
