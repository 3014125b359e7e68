use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::piece_moves::attacks_square;

/// True iff any piece of `attacker_color` attacks `square`.
pub fn is_square_under_attack(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    game_state
        .pieces_of(attacker_color)
        .any(|piece| attacks_square(piece, square, game_state))
}

/// True iff `color`'s king is attacked. A missing king counts as in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return true;
    };
    is_square_under_attack(game_state, king_sq, color.opposite())
}
