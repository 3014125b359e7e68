//! Engine abstraction for automated opponents.
//!
//! The CLI and the randomized playout tests select a move through this trait
//! and feed it back through the normal command path.

use crate::game_state::chess_types::ChessMove;
use crate::game_state::game_state::GameState;

/// `best_move` is `None` when the side to move has no legal move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String>;
}
