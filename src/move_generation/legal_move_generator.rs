//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, applies each candidate
//! to a scratch copy, filters the ones that leave the mover's own king
//! attacked, and optionally annotates the survivors with check metadata.
//! Pins need no dedicated analysis: a pinned piece's illegal moves are
//! rejected by the same apply-and-test cycle as everything else.

use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::MoveDescription;

/// Check metadata attached to a legal move by the annotating generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// One legal move plus the state it leads to.
///
/// The snapshot shares the parent's repetition history; only
/// `GameState::make_move` extends it.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub move_description: MoveDescription,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

/// Move generation is total over a well-formed game state: no error
/// channel, an empty vector means no legal moves exist.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}

/// Annotates each legal move with check and mate information.
pub struct LegalMoveGenerator;

/// Skips annotations; preferred for perft inner nodes, legality checks,
/// and anywhere only the move set matters.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(game_state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        generate_legal_moves_internal(game_state, false)
    }
}

fn generate_legal_moves_internal(game_state: &GameState, annotate: bool) -> Vec<GeneratedMove> {
    let mut pseudo = Vec::<MoveDescription>::with_capacity(64);

    generate_pawn_moves(game_state, &mut pseudo);
    generate_knight_moves(game_state, &mut pseudo);
    generate_bishop_moves(game_state, &mut pseudo);
    generate_rook_moves(game_state, &mut pseudo);
    generate_queen_moves(game_state, &mut pseudo);
    generate_king_moves(game_state, &mut pseudo);

    let mut legal = Vec::<GeneratedMove>::with_capacity(pseudo.len());
    for mv in pseudo {
        let next = apply_move(game_state, mv);

        // Illegal if own king is in check after the move.
        if is_king_in_check(&next, game_state.side_to_move) {
            continue;
        }

        let annotations = if annotate {
            classify_move_annotations(&next)
        } else {
            MoveAnnotations::default()
        };

        legal.push(GeneratedMove {
            move_description: mv,
            game_after_move: next,
            annotations,
        });
    }

    legal
}

fn classify_move_annotations(next: &GameState) -> MoveAnnotations {
    let gives_check = is_king_in_check(next, next.side_to_move);
    let is_checkmate =
        gives_check && generate_legal_moves_internal(next, false).is_empty();
    MoveAnnotations {
        gives_check,
        is_checkmate,
    }
}

/// The side to move has its king attacked.
#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

/// In check with no legal reply.
pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(game_state) && generate_legal_moves_internal(game_state, false).is_empty()
}

/// Not in check, but every move would expose the king.
pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_in_check(game_state) && generate_legal_moves_internal(game_state, false).is_empty()
}
