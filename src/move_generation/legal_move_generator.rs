//! Full legality pipeline and legal move enumeration.
//!
//! A candidate move passes three gates in order: the static piece rule (or
//! the en-passant special case), a simulate-and-revert self-check test, and
//! for castling the transit-safety test. The same gates back `play_move`,
//! the checkmate scan, and the move generator.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::with_move_applied;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_under_attack};
use crate::move_generation::move_classification::classify_move;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};
use crate::moves::piece_moves::is_move_valid;

/// Check whether `mv` is legal for the piece on its from-square.
///
/// Does not check whose turn it is. The board is mutated during the
/// self-check simulation and restored before returning.
pub fn validate_move(game_state: &mut GameState, mv: ChessMove) -> Result<(), String> {
    let piece = game_state
        .piece_at(mv.from)
        .copied()
        .ok_or_else(|| format!("No piece on {}", mv.from))?;
    if !mv.to.is_on_board() {
        return Err(format!("Destination {} is off the board", mv.to));
    }

    let promotion = match mv.kind {
        MoveKind::Promotion(kind) => {
            if !PROMOTION_PIECE_KINDS.contains(&kind) {
                return Err(format!("Cannot promote to {kind:?}"));
            }
            Some(kind)
        }
        _ => None,
    };
    let expected = classify_move(game_state, mv.from, mv.to, promotion)?;
    if expected.kind != mv.kind {
        return Err(format!(
            "Move {mv} is a {:?} move, not {:?}",
            expected.kind, mv.kind
        ));
    }

    check_geometry(game_state, &piece, mv)?;

    let leaves_king_attacked =
        with_move_applied(game_state, mv, |after| is_king_in_check(after, piece.color))?;
    if leaves_king_attacked {
        return Err(format!("Move {mv} leaves the {:?} king in check", piece.color));
    }

    if mv.kind == MoveKind::Castle {
        check_castle_safety(game_state, &piece, mv)?;
    }

    Ok(())
}

#[inline]
pub fn is_legal_move(game_state: &mut GameState, mv: ChessMove) -> bool {
    validate_move(game_state, mv).is_ok()
}

/// Does `color` have at least one legal move?
pub fn has_any_legal_move(game_state: &mut GameState, color: Color) -> bool {
    let origins: Vec<Square> = game_state.pieces_of(color).map(|piece| piece.square).collect();

    for from in origins {
        for to in Square::all() {
            let Ok(mv) = classify_move(game_state, from, to, None) else {
                continue;
            };
            if is_legal_move(game_state, mv) {
                return true;
            }
        }
    }

    false
}

/// `color` is in check and has no legal move.
pub fn is_checkmate(game_state: &mut GameState, color: Color) -> bool {
    is_king_in_check(game_state, color) && !has_any_legal_move(game_state, color)
}

fn check_geometry(game_state: &GameState, piece: &Piece, mv: ChessMove) -> Result<(), String> {
    if mv.kind == MoveKind::EnPassant {
        let captured = Square {
            row: mv.from.row,
            col: mv.to.col,
        };
        return match game_state.piece_at(captured) {
            Some(target) if target.kind == PieceKind::Pawn && target.color != piece.color => Ok(()),
            _ => Err(format!("No pawn to capture en passant on {captured}")),
        };
    }

    if is_move_valid(piece, mv.to, game_state) {
        Ok(())
    } else {
        Err(format!("{:?} {:?} cannot move {mv}", piece.color, piece.kind))
    }
}

/// King is not in check now and does not cross or land on an attacked square.
fn check_castle_safety(game_state: &GameState, king: &Piece, mv: ChessMove) -> Result<(), String> {
    if is_king_in_check(game_state, king.color) {
        return Err("Cannot castle out of check".to_owned());
    }

    let enemy = king.color.opposite();
    let step: i8 = if mv.to.col > mv.from.col { 1 } else { -1 };
    let mut current = Some(mv.from);
    while let Some(square) = current {
        if is_square_under_attack(game_state, square, enemy) {
            return Err(format!("Cannot castle through attacked square {square}"));
        }
        if square == mv.to {
            break;
        }
        current = square.offset(0, step);
    }

    Ok(())
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut scratch = game_state.clone();
        let color = game_state.side_to_move;
        let origins: Vec<Square> = game_state.pieces_of(color).map(|piece| piece.square).collect();

        let mut legal = Vec::<GeneratedMove>::with_capacity(64);
        for from in origins {
            for to in Square::all() {
                let base = classify_move(&scratch, from, to, None)
                    .map_err(MoveGenerationError::InvalidState)?;
                let is_capture = base.kind == MoveKind::EnPassant || !scratch.is_empty(to);

                for mv in expand_promotions(base) {
                    if is_legal_move(&mut scratch, mv) {
                        legal.push(GeneratedMove {
                            chess_move: mv,
                            is_capture,
                        });
                    }
                }
            }
        }

        if scratch != *game_state {
            return Err(MoveGenerationError::InvalidState(
                "legality simulation did not restore the board".to_owned(),
            ));
        }

        Ok(legal)
    }
}

fn expand_promotions(mv: ChessMove) -> Vec<ChessMove> {
    match mv.kind {
        MoveKind::Promotion(_) => PROMOTION_PIECE_KINDS
            .iter()
            .map(|kind| ChessMove {
                kind: MoveKind::Promotion(*kind),
                ..mv
            })
            .collect(),
        _ => vec![mv],
    }
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, is_checkmate, validate_move, LegalMoveGenerator};
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_classification::classify_move;
    use crate::move_generation::move_generator::MoveGenerator;
    use crate::utils::algebraic::algebraic_to_square as sq;

    fn classified(game: &GameState, from: &str, to: &str) -> ChessMove {
        classify_move(game, sq(from).expect("from"), sq(to).expect("to"), None)
            .expect("move should classify")
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| !m.is_capture));
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut game =
            GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        let before = game.clone();

        let knight_jump = classified(&game, "e2", "c3");
        let err = validate_move(&mut game, knight_jump).expect_err("pinned knight must not move");
        assert!(err.contains("check"), "{err}");
        assert_eq!(game, before);

        let king_step = classified(&game, "e1", "d1");
        assert!(validate_move(&mut game, king_step).is_ok());
    }

    #[test]
    fn castling_is_refused_from_or_through_check() {
        let through = "r3k2r/8/8/8/8/8/5p2/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(through).expect("FEN should parse");
        // The f2 pawn checks e1.
        let mv = classified(&game, "e1", "g1");
        assert!(validate_move(&mut game, mv).is_err());

        let attacked_transit = "r3k2r/8/8/8/8/8/6p1/R3K2R w KQkq - 0 1";
        let mut game = GameState::from_fen(attacked_transit).expect("FEN should parse");
        // g2 attacks f1 and h1.
        let mv = classified(&game, "e1", "g1");
        assert!(validate_move(&mut game, mv).is_err());
        let mv = classified(&game, "e1", "c1");
        assert!(validate_move(&mut game, mv).is_ok());

        let rook_on_d_file = "3rk3/8/8/8/8/8/8/R3K2R w KQ - 0 1";
        let mut game = GameState::from_fen(rook_on_d_file).expect("FEN should parse");
        let mv = classified(&game, "e1", "c1");
        assert!(validate_move(&mut game, mv).is_err());
        let mv = classified(&game, "e1", "g1");
        assert!(validate_move(&mut game, mv).is_ok());
    }

    #[test]
    fn castling_needs_clear_path_and_unmoved_rook() {
        let mut game =
            GameState::from_fen("4k3/8/8/8/8/8/8/R2QK2R w K - 0 1").expect("FEN should parse");
        let mv = classified(&game, "e1", "c1");
        assert!(validate_move(&mut game, mv).is_err());
        let mv = classified(&game, "e1", "g1");
        assert!(validate_move(&mut game, mv).is_ok());
    }

    #[test]
    fn en_passant_needs_matching_target() {
        let mut game =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").expect("FEN should parse");
        let ep = classified(&game, "e5", "d6");
        assert_eq!(ep.kind, MoveKind::EnPassant);
        assert!(validate_move(&mut game, ep).is_ok());

        let mut stale =
            GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2").expect("FEN should parse");
        let plain = classified(&stale, "e5", "d6");
        assert_eq!(plain.kind, MoveKind::Normal);
        assert!(validate_move(&mut stale, plain).is_err());
    }

    #[test]
    fn en_passant_cannot_expose_the_king() {
        // Removing both pawns from the fifth rank opens the rook onto the king.
        let mut game =
            GameState::from_fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 2").expect("FEN should parse");
        let mv = classified(&game, "e5", "d6");
        assert!(validate_move(&mut game, mv).is_err());
    }

    #[test]
    fn mislabelled_moves_are_rejected() {
        let mut game = GameState::new_game();
        let wrong = ChessMove {
            from: sq("e2").expect("e2"),
            to: sq("e4").expect("e4"),
            kind: MoveKind::Castle,
        };
        assert!(validate_move(&mut game, wrong).is_err());

        let mut promo =
            GameState::from_fen("8/1P6/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let to_king = ChessMove {
            from: sq("b7").expect("b7"),
            to: sq("b8").expect("b8"),
            kind: MoveKind::Promotion(PieceKind::King),
        };
        assert!(validate_move(&mut promo, to_king).is_err());
    }

    #[test]
    fn back_rank_mate_is_detected() {
        let mut mated =
            GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(is_checkmate(&mut mated, Color::Black));

        let mut escape =
            GameState::from_fen("R5k1/5pp1/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert!(!is_checkmate(&mut escape, Color::Black));
        assert!(has_any_legal_move(&mut escape, Color::Black));
    }

    #[test]
    fn stalemate_is_not_checkmate() {
        let mut game =
            GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(!is_checkmate(&mut game, Color::Black));
        assert!(!has_any_legal_move(&mut game, Color::Black));
    }

    #[test]
    fn promotions_are_listed_per_piece() {
        let game = GameState::from_fen("8/1P6/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let moves = LegalMoveGenerator
            .generate_legal_moves(&game)
            .expect("move generation should succeed");
        let promotions = moves
            .iter()
            .filter(|m| matches!(m.chess_move.kind, MoveKind::Promotion(_)))
            .count();
        assert_eq!(promotions, 4);
    }
}
