//! FEN-to-GameState parser.
//!
//! Builds a mailbox board from a Forsyth-Edwards Notation string. Castling
//! rights have no field of their own here; they are folded into the
//! `has_moved` flags of the home-square king and rooks.

use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

#[derive(Debug, Clone, Copy, Default)]
struct CastlingRights {
    king_side: [bool; 2],
    queen_side: [bool; 2],
}

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    // Clocks are validated but not tracked.
    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    apply_castling_rights(&mut game_state, rights);
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if col >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            let square = Square {
                row: row as u8,
                col: col as u8,
            };
            let mut piece = Piece::new(kind, color, square);
            // Kings and rooks start as moved; castling rights clear the flag.
            piece.has_moved = matches!(kind, PieceKind::King | PieceKind::Rook);
            game_state.put(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    let mut rights = CastlingRights::default();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.king_side[Color::White.index()] = true,
            'Q' => rights.queen_side[Color::White.index()] = true,
            'k' => rights.king_side[Color::Black.index()] = true,
            'q' => rights.queen_side[Color::Black.index()] = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn apply_castling_rights(game_state: &mut GameState, rights: CastlingRights) {
    for color in [Color::White, Color::Black] {
        let row = color.home_row();
        let sides = [
            (rights.king_side[color.index()], 7u8),
            (rights.queen_side[color.index()], 0u8),
        ];

        let mut any_side = false;
        for (allowed, rook_col) in sides {
            if !allowed {
                continue;
            }
            let rook_square = Square { row, col: rook_col };
            if let Some(mut rook) = game_state.cell(rook_square) {
                if rook.kind == PieceKind::Rook && rook.color == color {
                    rook.has_moved = false;
                    game_state.put(rook_square, rook);
                    any_side = true;
                }
            }
        }

        let king_square = Square {
            row,
            col: KING_START_COL,
        };
        if let Some(mut king) = game_state.cell(king_square) {
            if any_side && king.kind == PieceKind::King && king.color == color {
                king.has_moved = false;
                game_state.put(king_square, king);
            }
        }
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
