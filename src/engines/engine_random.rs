//! Random-move engine.
//!
//! Selects uniformly from legal moves and is used as the CLI opponent and to
//! drive randomized playout tests.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumRules Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, String> {
        let legal_moves = self
            .move_generator
            .generate_legal_moves(game_state)
            .map_err(|e| e.to_string())?;

        debug!("{} choosing from {} legal moves", self.name(), legal_moves.len());

        Ok(EngineOutput {
            best_move: legal_moves.as_slice().choose(&mut self.rng).map(|picked| picked.chess_move),
        })
    }
}
