//! Pseudo-legal king move generation, including castling.
//!
//! Castling legality tests the king's start, transit, and destination
//! squares against the opponent's attack map, which knows nothing about
//! castling, so the check can never recurse back into this module.

use crate::game_state::chess_types::{
    Color, GameState, PieceKind, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::move_generation::legal_move_checks::attack_map;
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::{MoveDescription, FLAG_CAPTURE, FLAG_CASTLING};

pub fn generate_king_moves(game_state: &GameState, out: &mut Vec<MoveDescription>) {
    let side = game_state.side_to_move;
    let own_occ = game_state.board.color_occupancy(side);
    let enemy_occ = game_state.board.color_occupancy(side.opposite());

    let Some(from) = game_state.board.king_square(side) else {
        return;
    };

    let mut targets = king_attacks(from) & !own_occ;
    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let is_capture = (1u64 << to) & enemy_occ != 0;
        let captured = if is_capture {
            enemy_piece_on(game_state, to)
        } else {
            None
        };
        out.push(MoveDescription::pack(
            from,
            to,
            PieceKind::King,
            captured,
            None,
            if is_capture { FLAG_CAPTURE } else { 0 },
        ));
        targets &= targets - 1;
    }

    generate_castling_moves(game_state, out, from);
}

fn generate_castling_moves(
    game_state: &GameState,
    out: &mut Vec<MoveDescription>,
    king_from: Square,
) {
    let side = game_state.side_to_move;
    let rights = game_state.castling_rights;

    let (kingside_right, queenside_right, home) = match side {
        Color::Light => (CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE, 4u8),
        Color::Dark => (CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, 60u8),
    };
    if king_from != home || rights & (kingside_right | queenside_right) == 0 {
        return;
    }

    // One attack map covers the out-of, through, and into-check tests. The
    // map never contains castling moves, so there is no recursion here.
    let attacked = attack_map(game_state, side.opposite());
    if attacked & (1u64 << king_from) != 0 {
        return;
    }

    let occupancy = game_state.board.occupancy();

    if rights & kingside_right != 0 {
        let between = (1u64 << (home + 1)) | (1u64 << (home + 2));
        if occupancy & between == 0 && attacked & between == 0 {
            out.push(MoveDescription::pack(
                home,
                home + 2,
                PieceKind::King,
                None,
                None,
                FLAG_CASTLING,
            ));
        }
    }

    if rights & queenside_right != 0 {
        let between = (1u64 << (home - 1)) | (1u64 << (home - 2)) | (1u64 << (home - 3));
        // The rook passes b1/b8; the king does not, so that square may be
        // attacked but must still be empty.
        let transit = (1u64 << (home - 1)) | (1u64 << (home - 2));
        if occupancy & between == 0 && attacked & transit == 0 {
            out.push(MoveDescription::pack(
                home,
                home - 2,
                PieceKind::King,
                None,
                None,
                FLAG_CASTLING,
            ));
        }
    }
}
