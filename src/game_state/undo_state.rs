use crate::game_state::chess_types::*;

/// Undo record for `make_move` / `unmake_move`.
///
/// Holds the exact prior contents of every cell a move touched, plus the
/// board-level fields it overwrote. Restoring it puts the board back
/// byte-for-byte, including `has_moved` flags and recorded squares.
#[derive(Debug, Clone)]
pub struct UndoState {
    touched_cells: Vec<(Square, Option<Piece>)>,
    pub prev_en_passant_target: Option<Square>,
    pub prev_side_to_move: Color,
}

impl UndoState {
    pub fn new(game_state: &GameState) -> Self {
        Self {
            // Castling touches four cells, en passant three.
            touched_cells: Vec::with_capacity(4),
            prev_en_passant_target: game_state.en_passant_target,
            prev_side_to_move: game_state.side_to_move,
        }
    }

    /// Remember the current contents of `square` unless already recorded.
    pub fn record(&mut self, game_state: &GameState, square: Square) {
        if self.touched_cells.iter().any(|(seen, _)| *seen == square) {
            return;
        }
        self.touched_cells.push((square, game_state.cell(square)));
    }

    pub fn restore(self, game_state: &mut GameState) {
        for (square, occupant) in self.touched_cells.into_iter().rev() {
            game_state.set_cell(square, occupant);
        }
        game_state.en_passant_target = self.prev_en_passant_target;
        game_state.side_to_move = self.prev_side_to_move;
    }
}
