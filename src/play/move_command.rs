//! Move command tokenizer.
//!
//! Accepts `"<src> <dst>[ <promo>][ draw?]"` or `"resign"`; coordinates are
//! a file letter `a`-`h` followed by a rank digit `1`-`8`.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::algebraic_to_square;

pub const RESIGN_KEYWORD: &str = "resign";
pub const DRAW_OFFER_TOKEN: &str = "draw?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Resign,
    Move {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        draw_offer: bool,
    },
}

pub fn parse_move_command(text: &str) -> Result<MoveCommand, String> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(RESIGN_KEYWORD) {
        return Ok(MoveCommand::Resign);
    }

    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    let draw_offer = tokens.last() == Some(&DRAW_OFFER_TOKEN);
    if draw_offer {
        tokens.pop();
    }

    let (from_token, to_token, promotion_token) = match tokens.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, promotion] => (*from, *to, Some(*promotion)),
        _ => {
            return Err(format!(
                "Expected a source and destination square, got {} token(s)",
                tokens.len()
            ))
        }
    };

    let from = algebraic_to_square(from_token)?;
    let to = algebraic_to_square(to_token)?;
    let promotion = promotion_token.map(parse_promotion_token).transpose()?;

    Ok(MoveCommand::Move {
        from,
        to,
        promotion,
        draw_offer,
    })
}

fn parse_promotion_token(token: &str) -> Result<PieceKind, String> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => PieceKind::from_promotion_char(ch),
        _ => Err(format!("Invalid promotion token: {token}")),
    }
}
