//! Core mailbox board state.
//!
//! `GameState` is the central model for the engine. It stores an 8x8 grid of
//! optional pieces together with the side to move and the en-passant target.
//! Every piece records the square it stands on; the setters below keep that
//! field in sync with the cell that owns the piece.

use crate::game_state::chess_rules::BACK_RANK_ORDER;
use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    /// `board[row][col]`, row 0 is rank 8.
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub en_passant_target: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial layout, white to move.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();

        for color in [Color::White, Color::Black] {
            let home_row = color.home_row();
            let pawn_row = color.pawn_start_row();

            for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
                let col = col as u8;
                let home = Square { row: home_row, col };
                let pawn = Square { row: pawn_row, col };
                game_state.put(home, Piece::new(*kind, color, home));
                game_state.put(pawn, Piece::new(PieceKind::Pawn, color, pawn));
            }
        }

        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    /// Piece on `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.board[square.row as usize][square.col as usize].as_ref()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Raw cell contents, used by the undo machinery to restore exact values.
    #[inline]
    pub(crate) fn cell(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, square: Square, occupant: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = occupant;
    }

    /// Place `piece` on `square`, rewriting its recorded square.
    #[inline]
    pub fn put(&mut self, square: Square, mut piece: Piece) {
        piece.square = square;
        self.set_cell(square, Some(piece));
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        if !square.is_on_board() {
            return None;
        }
        self.board[square.row as usize][square.col as usize].take()
    }

    /// All pieces, rank 8 to rank 1, file a to file h.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.board.iter().flat_map(|row| row.iter().flatten())
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|piece| piece.square)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let built = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(built, parsed);
        assert_eq!(built.pieces().count(), 32);
        assert_eq!(built.side_to_move, Color::White);
        assert_eq!(built.en_passant_target, None);
    }

    #[test]
    fn kings_start_on_e_file() {
        let game = GameState::new_game();
        assert_eq!(game.king_square(Color::White), Some(Square { row: 7, col: 4 }));
        assert_eq!(game.king_square(Color::Black), Some(Square { row: 0, col: 4 }));
    }

    #[test]
    fn pieces_track_their_own_square() {
        let game = GameState::new_game();
        for square in Square::all() {
            if let Some(piece) = game.piece_at(square) {
                assert_eq!(piece.square, square);
            }
        }
    }

    #[test]
    fn off_board_lookups_are_empty() {
        let mut game = GameState::new_game();
        assert!(game.piece_at(Square { row: 8, col: 0 }).is_none());
        assert!(game.take(Square { row: 0, col: 8 }).is_none());
    }
}
