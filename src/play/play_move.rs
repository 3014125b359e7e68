//! One full ply: parse, classify, validate, commit, report.
//!
//! Every rejection is an `Err(String)` internally, logged at debug level and
//! surfaced to the caller as `ILLEGAL_MOVE` with the board untouched.

use log::{debug, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_any_legal_move, validate_move};
use crate::move_generation::move_classification::classify_move;
use crate::play::move_command::{parse_move_command, MoveCommand};
use crate::play::return_play::{Message, ReturnPlay};

/// Play `move_text` for the side to move and report the result.
pub fn play_move(game_state: &mut GameState, move_text: &str) -> ReturnPlay {
    match try_play_move(game_state, move_text) {
        Ok(message) => {
            trace!("accepted '{}' -> {:?}", move_text.trim(), message);
            ReturnPlay::snapshot(game_state, message)
        }
        Err(reason) => {
            debug!("rejected '{}': {reason}", move_text.trim());
            ReturnPlay::snapshot(game_state, Some(Message::IllegalMove))
        }
    }
}

fn try_play_move(game_state: &mut GameState, move_text: &str) -> Result<Option<Message>, String> {
    let (from, to, promotion, draw_offer) = match parse_move_command(move_text)? {
        MoveCommand::Resign => return Ok(Some(Message::resign(game_state.side_to_move))),
        MoveCommand::Move {
            from,
            to,
            promotion,
            draw_offer,
        } => (from, to, promotion, draw_offer),
    };

    let mover = game_state.side_to_move;
    let piece = game_state
        .piece_at(from)
        .copied()
        .ok_or_else(|| format!("No piece on {from}"))?;
    if piece.color != mover {
        return Err(format!("Piece on {from} belongs to {:?}, {mover:?} to move", piece.color));
    }

    let mv = classify_move(game_state, from, to, promotion)?;
    validate_move(game_state, mv)?;
    make_move(game_state, mv)?;

    Ok(post_move_status(game_state, mover, draw_offer))
}

/// Status after `mover` has committed a move: checkmate > check > draw offer.
fn post_move_status(game_state: &mut GameState, mover: Color, draw_offer: bool) -> Option<Message> {
    let opponent = mover.opposite();

    if is_king_in_check(game_state, opponent) {
        if has_any_legal_move(game_state, opponent) {
            return Some(Message::Check);
        }
        return Some(Message::checkmate(mover));
    }

    draw_offer.then_some(Message::Draw)
}
