//! Caller-owned game handle.
//!
//! Wraps a `GameState` so that every mutation, including the legality
//! simulations, goes through `&mut self`. Wrap in a `Mutex` to share it
//! across threads.

use log::info;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_under_attack};
use crate::move_generation::legal_move_generator::is_checkmate;
use crate::play::play_move::play_move;
use crate::play::return_play::ReturnPlay;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    game_state: GameState,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        Ok(Self {
            game_state: GameState::from_fen(fen)?,
        })
    }

    /// Reset to the standard starting position, white to move.
    pub fn start(&mut self) {
        info!("starting a new game");
        self.game_state = GameState::new_game();
    }

    pub fn play(&mut self, move_text: &str) -> ReturnPlay {
        play_move(&mut self.game_state, move_text)
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.game_state.side_to_move
    }

    /// Current board without a status message.
    pub fn snapshot(&self) -> ReturnPlay {
        ReturnPlay::snapshot(&self.game_state, None)
    }

    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.game_state, color)
    }

    pub fn is_square_under_attack(&self, square: Square, attacker_color: Color) -> bool {
        is_square_under_attack(&self.game_state, square, attacker_color)
    }

    /// Needs `&mut self` for the simulate-and-revert scan; the board is
    /// unchanged afterwards.
    pub fn is_checkmate(&mut self, color: Color) -> bool {
        is_checkmate(&mut self.game_state, color)
    }
}
