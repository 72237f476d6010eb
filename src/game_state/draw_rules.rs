//! Draw detection: fifty-move rule, threefold repetition, and insufficient
//! material. All predicates are evaluated lazily by the caller; nothing here
//! ends a game on its own.

use crate::game_state::chess_types::{Color, GameState, PieceKind};
use crate::game_state::position_fingerprint::position_fingerprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

/// Fifty full moves (one hundred halfmoves) without a capture or pawn move.
#[inline]
pub fn is_fifty_move_draw(game_state: &GameState) -> bool {
    game_state.halfmove_clock >= 100
}

/// The current position occurred at least three times. A position repeats
/// when placement, side to move, castling rights, and en-passant target all
/// match; the clocks do not participate.
pub fn is_threefold_repetition(game_state: &GameState) -> bool {
    let current = position_fingerprint(game_state);
    game_state
        .repetition_history
        .iter()
        .filter(|&&fingerprint| fingerprint == current)
        .count()
        >= 3
}

/// Material combinations from which no sequence of legal moves can deliver
/// mate: bare kings, a single minor piece, or same-colored lone bishops.
pub fn has_insufficient_material(game_state: &GameState) -> bool {
    let board = &game_state.board;

    for color in [Color::Light, Color::Dark] {
        let heavy = board.piece_mask(color, PieceKind::Pawn)
            | board.piece_mask(color, PieceKind::Rook)
            | board.piece_mask(color, PieceKind::Queen);
        if heavy != 0 {
            return false;
        }
    }

    let light_knights = board.piece_mask(Color::Light, PieceKind::Knight);
    let dark_knights = board.piece_mask(Color::Dark, PieceKind::Knight);
    let light_bishops = board.piece_mask(Color::Light, PieceKind::Bishop);
    let dark_bishops = board.piece_mask(Color::Dark, PieceKind::Bishop);

    let light_minors = (light_knights | light_bishops).count_ones();
    let dark_minors = (dark_knights | dark_bishops).count_ones();

    match (light_minors, dark_minors) {
        // King versus king.
        (0, 0) => true,
        // King and one minor versus bare king.
        (1, 0) | (0, 1) => true,
        // Lone bishops on same-colored squares cannot reach each other's
        // king safely enough to mate.
        (1, 1) if light_knights == 0 && dark_knights == 0 => {
            square_color(light_bishops.trailing_zeros() as u8)
                == square_color(dark_bishops.trailing_zeros() as u8)
        }
        _ => false,
    }
}

/// First draw rule that applies, if any.
pub fn draw_reason(game_state: &GameState) -> Option<DrawReason> {
    if is_fifty_move_draw(game_state) {
        Some(DrawReason::FiftyMoveRule)
    } else if is_threefold_repetition(game_state) {
        Some(DrawReason::ThreefoldRepetition)
    } else if has_insufficient_material(game_state) {
        Some(DrawReason::InsufficientMaterial)
    } else {
        None
    }
}

#[inline]
fn square_color(square: u8) -> u8 {
    (square % 8 + square / 8) % 2
}

#[cfg(test)]
mod tests {
    use super::{
        draw_reason, has_insufficient_material, is_fifty_move_draw, is_threefold_repetition,
        DrawReason,
    };
    use crate::game_state::chess_types::GameState;
    use crate::utils::long_algebraic::long_algebraic_to_move_description;

    #[test]
    fn fifty_move_rule_triggers_at_one_hundred_halfmoves() {
        let at_limit = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 100 80")
            .expect("FEN should parse");
        assert!(is_fifty_move_draw(&at_limit));
        assert_eq!(draw_reason(&at_limit), Some(DrawReason::FiftyMoveRule));

        let one_short = GameState::from_fen("4k2r/8/8/8/8/8/8/4K3 w - - 99 80")
            .expect("FEN should parse");
        assert!(!is_fifty_move_draw(&one_short));
        assert_eq!(draw_reason(&one_short), None);
    }

    #[test]
    fn knight_shuffle_reaches_threefold_repetition() {
        let mut game = GameState::new_game();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

        // Two full shuffles bring the start position up for the third time.
        for lap in 0..2 {
            for text in shuffle {
                assert!(
                    !is_threefold_repetition(&game),
                    "draw declared early on lap {lap}"
                );
                let mv = long_algebraic_to_move_description(text, &game)
                    .expect("move text should parse");
                game.make_move(mv).expect("shuffle moves are legal");
            }
        }

        assert!(is_threefold_repetition(&game));
        assert_eq!(draw_reason(&game), Some(DrawReason::ThreefoldRepetition));

        // Unwinding one ply leaves only two occurrences.
        game.unmake_move().expect("history is non-empty");
        assert!(!is_threefold_repetition(&game));
    }

    #[test]
    fn insufficient_material_table() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),   // K vs K
            ("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1", true), // KB vs K
            ("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1", true), // KN vs K
            ("2b1k3/8/8/8/8/8/8/2B1K3 w - - 0 1", false), // bishops c1/c8: opposite colors
            ("1b2k3/8/8/8/8/8/8/2B1K3 w - - 0 1", true), // bishops c1/b8: same color
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", false), // pawn can promote
            ("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", false), // rook mates
            ("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", false), // two knights stay on
        ];

        for (fen, expected) in cases {
            let game = GameState::from_fen(fen).expect("FEN should parse");
            assert_eq!(
                has_insufficient_material(&game),
                expected,
                "wrong verdict for {fen}"
            );
        }
    }
}
