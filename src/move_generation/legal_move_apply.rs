//! Move application.
//!
//! Total over moves produced by the generators: the packed move carries its
//! mover, captures, and promotion, so nothing here can fail on well-formed
//! input. All board mutation goes through `Board`'s synchronized operations.

use crate::game_state::chess_types::{
    Color, GameState, Piece, PieceKind, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::moves::move_descriptions::MoveDescription;

/// Apply a move to a scratch copy and return the resulting state. The
/// legality filter uses this to probe king safety without touching the
/// caller's state.
pub fn apply_move(game_state: &GameState, mv: MoveDescription) -> GameState {
    let mut next = game_state.clone();
    apply_move_in_place(&mut next, mv);
    next
}

/// Apply a move directly. Callers outside `make_move` are responsible for
/// undo bookkeeping and repetition history.
pub(crate) fn apply_move_in_place(game_state: &mut GameState, mv: MoveDescription) {
    let from = mv.from_square();
    let to = mv.to_square();
    let mover = game_state.side_to_move;
    let moved_piece = mv.moved_piece();

    // The en-passant victim does not stand on the destination square.
    if mv.is_en_passant() {
        let capture_sq = if mover == Color::Light { to - 8 } else { to + 8 };
        game_state.board.remove(capture_sq);
    }

    // Relocation clears the destination, which covers ordinary captures.
    game_state.board.relocate(from, to);

    if let Some(promotion) = mv.promotion_piece() {
        game_state.board.place(to, Piece::new(mover, promotion));
    }

    if mv.is_castling() {
        match (mover, to) {
            (Color::Light, 6) => game_state.board.relocate(7, 5),
            (Color::Light, 2) => game_state.board.relocate(0, 3),
            (Color::Dark, 62) => game_state.board.relocate(63, 61),
            (Color::Dark, 58) => game_state.board.relocate(56, 59),
            _ => {}
        }
    }

    update_castling_rights(game_state, mover, from, to, moved_piece);

    // The skipped square becomes capturable for exactly one reply.
    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some((from + to) / 2)
    } else {
        None
    };

    if moved_piece == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = mover.opposite();
}

fn update_castling_rights(
    game_state: &mut GameState,
    mover: Color,
    from: Square,
    to: Square,
    moved_piece: PieceKind,
) {
    if moved_piece == PieceKind::King {
        match mover {
            Color::Light => {
                game_state.castling_rights &= !(CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE)
            }
            Color::Dark => {
                game_state.castling_rights &= !(CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE)
            }
        }
    }

    if moved_piece == PieceKind::Rook {
        revoke_rook_home_square(game_state, from);
    }

    // Capturing a rook on its home square also removes the right.
    revoke_rook_home_square(game_state, to);
}

fn revoke_rook_home_square(game_state: &mut GameState, square: Square) {
    match square {
        0 => game_state.castling_rights &= !CASTLE_LIGHT_QUEENSIDE,
        7 => game_state.castling_rights &= !CASTLE_LIGHT_KINGSIDE,
        56 => game_state.castling_rights &= !CASTLE_DARK_QUEENSIDE,
        63 => game_state.castling_rights &= !CASTLE_DARK_KINGSIDE,
        _ => {}
    }
}
