//! Perft: exhaustive move-count regression oracle.
//!
//! Counts leaves of the legal-move tree to a fixed depth, classifying them
//! by move kind. Node counts only need the fast generator; the check and
//! checkmate tallies are populated when the annotating generator is used.

use std::sync::Arc;
use std::thread;

use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// Root-split parallel perft: one cloned state per top-level move. The
/// core has no internal locking, so each worker owns its subtree outright.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root_moves = generator.generate_legal_moves(game_state);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        total.merge(handle.join().expect("perft worker thread panicked"));
    }
    total
}

fn perft_recurse(
    generator: &dyn MoveGenerator,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        counts.nodes += 1;

        let description = mv.move_description;
        if description.is_capture() {
            counts.captures += 1;
        }
        if description.is_en_passant() {
            counts.en_passant += 1;
        }
        if description.is_castling() {
            counts.castles += 1;
        }
        if description.promotion_piece().is_some() {
            counts.promotions += 1;
        }
        if mv.annotations.gives_check {
            counts.checks += 1;
        }
        if mv.annotations.is_checkmate {
            counts.checkmates += 1;
        }

        return;
    }

    for child in generator.generate_legal_moves(&mv.game_after_move) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}
