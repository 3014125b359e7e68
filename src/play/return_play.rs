//! UI-agnostic result of a play call.
//!
//! A read-only projection of the board into `(piece code, file, rank)`
//! records plus at most one status message.

use std::fmt;

use crate::game_state::{chess_types::*, game_state::GameState};

/// Color letter followed by kind letter.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    WP,
    WR,
    WN,
    WB,
    WQ,
    WK,
    BP,
    BR,
    BN,
    BB,
    BQ,
    BK,
}

impl PieceType {
    pub const fn from_piece(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::Pawn) => PieceType::WP,
            (Color::White, PieceKind::Rook) => PieceType::WR,
            (Color::White, PieceKind::Knight) => PieceType::WN,
            (Color::White, PieceKind::Bishop) => PieceType::WB,
            (Color::White, PieceKind::Queen) => PieceType::WQ,
            (Color::White, PieceKind::King) => PieceType::WK,
            (Color::Black, PieceKind::Pawn) => PieceType::BP,
            (Color::Black, PieceKind::Rook) => PieceType::BR,
            (Color::Black, PieceKind::Knight) => PieceType::BN,
            (Color::Black, PieceKind::Bishop) => PieceType::BB,
            (Color::Black, PieceKind::Queen) => PieceType::BQ,
            (Color::Black, PieceKind::King) => PieceType::BK,
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceFile {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl PieceFile {
    pub const ALL: [PieceFile; 8] = [
        PieceFile::A,
        PieceFile::B,
        PieceFile::C,
        PieceFile::D,
        PieceFile::E,
        PieceFile::F,
        PieceFile::G,
        PieceFile::H,
    ];

    pub fn from_col(col: u8) -> Option<Self> {
        Self::ALL.get(col as usize).copied()
    }
}

impl fmt::Display for PieceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(b'a' + *self as u8);
        write!(f, "{letter}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReturnPiece {
    pub piece_type: PieceType,
    pub piece_file: PieceFile,
    /// 1 through 8.
    pub piece_rank: u8,
}

impl fmt::Display for ReturnPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.piece_type, self.piece_file, self.piece_rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    IllegalMove,
    Draw,
    ResignBlackWins,
    ResignWhiteWins,
    CheckmateBlackWins,
    CheckmateWhiteWins,
    Check,
}

impl Message {
    pub const fn resign(resigning: Color) -> Self {
        match resigning {
            Color::White => Message::ResignBlackWins,
            Color::Black => Message::ResignWhiteWins,
        }
    }

    pub const fn checkmate(winner: Color) -> Self {
        match winner {
            Color::White => Message::CheckmateWhiteWins,
            Color::Black => Message::CheckmateBlackWins,
        }
    }

    /// Resignation and checkmate end the game; the board itself stays playable.
    pub const fn is_game_over(self) -> bool {
        matches!(
            self,
            Message::ResignBlackWins
                | Message::ResignWhiteWins
                | Message::CheckmateBlackWins
                | Message::CheckmateWhiteWins
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Message::IllegalMove => "ILLEGAL_MOVE",
            Message::Draw => "DRAW",
            Message::ResignBlackWins => "RESIGN_BLACK_WINS",
            Message::ResignWhiteWins => "RESIGN_WHITE_WINS",
            Message::CheckmateBlackWins => "CHECKMATE_BLACK_WINS",
            Message::CheckmateWhiteWins => "CHECKMATE_WHITE_WINS",
            Message::Check => "CHECK",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnPlay {
    pub pieces_on_board: Vec<ReturnPiece>,
    pub message: Option<Message>,
}

impl ReturnPlay {
    pub fn snapshot(game_state: &GameState, message: Option<Message>) -> Self {
        Self {
            pieces_on_board: convert_board(game_state),
            message,
        }
    }

    /// Piece reported on `file`/`rank`, if any.
    pub fn piece_at(&self, file: PieceFile, rank: u8) -> Option<PieceType> {
        self.pieces_on_board
            .iter()
            .find(|piece| piece.piece_file == file && piece.piece_rank == rank)
            .map(|piece| piece.piece_type)
    }
}

/// Occupied squares from rank 8 down to rank 1, file a to file h.
pub fn convert_board(game_state: &GameState) -> Vec<ReturnPiece> {
    game_state
        .pieces()
        .filter_map(|piece| {
            Some(ReturnPiece {
                piece_type: PieceType::from_piece(piece.color, piece.kind),
                piece_file: PieceFile::from_col(piece.square.col)?,
                piece_rank: piece.square.rank(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{convert_board, Message, PieceFile, PieceType, ReturnPlay};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_snapshot_is_ordered_from_rank_eight() {
        let pieces = convert_board(&GameState::new_game());
        assert_eq!(pieces.len(), 32);

        let first = pieces[0];
        assert_eq!(first.piece_type, PieceType::BR);
        assert_eq!(first.piece_file, PieceFile::A);
        assert_eq!(first.piece_rank, 8);

        let last = pieces[31];
        assert_eq!(last.piece_type, PieceType::WR);
        assert_eq!(last.piece_file, PieceFile::H);
        assert_eq!(last.piece_rank, 1);
        assert_eq!(last.to_string(), "WR:h1");
    }

    #[test]
    fn snapshot_lookup_by_file_and_rank() {
        let play = ReturnPlay::snapshot(&GameState::new_game(), None);
        assert_eq!(play.piece_at(PieceFile::E, 1), Some(PieceType::WK));
        assert_eq!(play.piece_at(PieceFile::D, 8), Some(PieceType::BQ));
        assert_eq!(play.piece_at(PieceFile::E, 4), None);
    }

    #[test]
    fn messages_render_as_status_codes() {
        assert_eq!(Message::resign(Color::White).to_string(), "RESIGN_BLACK_WINS");
        assert_eq!(Message::checkmate(Color::White).to_string(), "CHECKMATE_WHITE_WINS");
        assert_eq!(Message::IllegalMove.to_string(), "ILLEGAL_MOVE");
    }

    #[test]
    fn only_resignation_and_mate_end_the_game() {
        assert!(Message::resign(Color::Black).is_game_over());
        assert!(Message::checkmate(Color::Black).is_game_over());
        assert!(!Message::Check.is_game_over());
        assert!(!Message::Draw.is_game_over());
        assert!(!Message::IllegalMove.is_game_over());
    }
}
