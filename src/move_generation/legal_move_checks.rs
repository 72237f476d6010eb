//! King-safety primitives: per-square attack probing and whole-side attack
//! maps. Castling is never consulted here, which is what breaks the mutual
//! recursion between castling legality and king-safety checks.

use crate::game_state::chess_types::{Color, GameState, PieceKind, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.king_square(color)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`. Probes each
/// piece class in turn and stops at the first hit.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let board = &game_state.board;
    let target_mask = 1u64 << square;

    let mut pawns = board.piece_mask(attacker_color, PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        if pawn_attacks(attacker_color, from) & target_mask != 0 {
            return true;
        }
        pawns &= pawns - 1;
    }

    if knight_attacks(square) & board.piece_mask(attacker_color, PieceKind::Knight) != 0 {
        return true;
    }

    if king_attacks(square) & board.piece_mask(attacker_color, PieceKind::King) != 0 {
        return true;
    }

    let diagonal_sliders = board.piece_mask(attacker_color, PieceKind::Bishop)
        | board.piece_mask(attacker_color, PieceKind::Queen);
    if bishop_attacks(square, board.occupancy()) & diagonal_sliders != 0 {
        return true;
    }

    let straight_sliders = board.piece_mask(attacker_color, PieceKind::Rook)
        | board.piece_mask(attacker_color, PieceKind::Queen);
    if rook_attacks(square, board.occupancy()) & straight_sliders != 0 {
        return true;
    }

    false
}

/// Union of every square `attacker_color` could capture on: pawn diagonal
/// attack squares (never forward pushes), leaper offsets, and slider rays
/// against the current occupancy.
pub fn attack_map(game_state: &GameState, attacker_color: Color) -> u64 {
    let board = &game_state.board;
    let occupancy = board.occupancy();
    let mut attacked = 0u64;

    let mut pawns = board.piece_mask(attacker_color, PieceKind::Pawn);
    while pawns != 0 {
        let from = pawns.trailing_zeros() as Square;
        attacked |= pawn_attacks(attacker_color, from);
        pawns &= pawns - 1;
    }

    let mut knights = board.piece_mask(attacker_color, PieceKind::Knight);
    while knights != 0 {
        let from = knights.trailing_zeros() as Square;
        attacked |= knight_attacks(from);
        knights &= knights - 1;
    }

    let mut kings = board.piece_mask(attacker_color, PieceKind::King);
    while kings != 0 {
        let from = kings.trailing_zeros() as Square;
        attacked |= king_attacks(from);
        kings &= kings - 1;
    }

    let mut diagonal_sliders = board.piece_mask(attacker_color, PieceKind::Bishop)
        | board.piece_mask(attacker_color, PieceKind::Queen);
    while diagonal_sliders != 0 {
        let from = diagonal_sliders.trailing_zeros() as Square;
        attacked |= bishop_attacks(from, occupancy);
        diagonal_sliders &= diagonal_sliders - 1;
    }

    let mut straight_sliders = board.piece_mask(attacker_color, PieceKind::Rook)
        | board.piece_mask(attacker_color, PieceKind::Queen);
    while straight_sliders != 0 {
        let from = straight_sliders.trailing_zeros() as Square;
        attacked |= rook_attacks(from, occupancy);
        straight_sliders &= straight_sliders - 1;
    }

    attacked
}

#[cfg(test)]
mod tests {
    use super::{attack_map, is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn start_position_attacks_cover_the_third_rank() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        let attacked = attack_map(&game, Color::Light);

        // Every square of rank 3 is hit by a pawn or knight.
        for square in 16..24u8 {
            assert_ne!(attacked & (1u64 << square), 0, "square {square} not attacked");
        }
        // Nothing beyond rank 3 is reachable from the start position.
        assert_eq!(attacked & (0xFFu64 << 24), 0);
    }

    #[test]
    fn pawns_attack_diagonally_but_not_forward() {
        let game = parse_fen("8/8/8/8/4P3/8/8/8 w - - 0 1").expect("FEN should parse");
        assert!(is_square_attacked(&game, 35, Color::Light));
        assert!(is_square_attacked(&game, 37, Color::Light));
        assert!(!is_square_attacked(&game, 36, Color::Light));
    }

    #[test]
    fn sliders_attack_through_empty_squares_only() {
        let game = parse_fen("8/8/8/8/1R2p3/8/8/8 w - - 0 1").expect("FEN should parse");
        // Rook b4 hits the pawn on e4 but not past it.
        assert!(is_square_attacked(&game, 28, Color::Light));
        assert!(!is_square_attacked(&game, 29, Color::Light));
    }

    #[test]
    fn check_detection_sees_a_pinless_rook_attack() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4R2K b - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&game, Color::Dark));
        assert!(!is_king_in_check(&game, Color::Light));
    }
}
