//! Perft node counting over the legal move generator.
//!
//! Used as a regression harness for the rules: any error in castling, en
//! passant, promotion, or the self-check filter shows up as a node-count
//! mismatch against published reference values.

use std::sync::Arc;
use std::thread;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{
    GeneratedMove, MoveGenResult, MoveGenerationError, MoveGenerator,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

/// Perft with the crate's own legal move generator.
pub fn perft_legal(game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, game_state, &mv, depth, &mut total)?;
    }

    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &root, &mv, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| MoveGenerationError::InvalidState("perft worker thread panicked".to_owned()))?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    parent: &GameState,
    mv: &GeneratedMove,
    remaining_depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let mut child = parent.clone();
    make_move(&mut child, mv.chess_move).map_err(MoveGenerationError::InvalidState)?;

    if remaining_depth == 1 {
        counts.nodes += 1;

        if mv.is_capture {
            counts.captures += 1;
        }
        match mv.chess_move.kind {
            MoveKind::EnPassant => counts.en_passant += 1,
            MoveKind::Castle => counts.castles += 1,
            MoveKind::Promotion(_) => counts.promotions += 1,
            MoveKind::Normal => {}
        }
        if is_king_in_check(&child, child.side_to_move) {
            counts.checks += 1;
        }

        return Ok(());
    }

    for next in generator.generate_legal_moves(&child)? {
        perft_recurse(generator, &child, &next, remaining_depth - 1, counts)?;
    }

    Ok(())
}
