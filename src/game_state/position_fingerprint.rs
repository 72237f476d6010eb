//! Position fingerprints for repetition tracking.
//!
//! A fingerprint covers piece placement, side to move, castling rights, and
//! the en-passant file, and nothing else; the move clocks deliberately stay
//! out so repeated positions hash equal. Keys are generated from a fixed
//! seed, so fingerprints are deterministic across runs and processes.

use std::sync::OnceLock;

use crate::game_state::chess_types::{CastlingRights, Color, GameState, PieceKind, Square};

#[derive(Debug)]
struct FingerprintTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<FingerprintTables> = OnceLock::new();

#[inline]
fn tables() -> &'static FingerprintTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> FingerprintTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    FingerprintTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn piece_square_key(color: Color, piece: PieceKind, square: Square) -> u64 {
    tables().piece_square[color.index()][piece.index()][square as usize]
}

#[inline]
fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[(castling_rights & 0x0F) as usize]
}

/// Compute the fingerprint of a position from scratch. Recomputation keeps
/// the function total and independent of how the state was reached;
/// incremental maintenance would be a pure performance optimization.
pub fn position_fingerprint(game_state: &GameState) -> u64 {
    let t = tables();
    let mut key = 0u64;

    for color in [Color::Light, Color::Dark] {
        for kind in PieceKind::ALL {
            let mut occupancy = game_state.board.piece_mask(color, kind);
            while occupancy != 0 {
                let square = occupancy.trailing_zeros() as Square;
                key ^= piece_square_key(color, kind, square);
                occupancy &= occupancy - 1;
            }
        }
    }

    if game_state.side_to_move == Color::Dark {
        key ^= t.side_to_move;
    }
    key ^= castling_key(game_state.castling_rights);
    if let Some(target) = game_state.en_passant_square {
        key ^= t.en_passant_file[(target % 8) as usize];
    }

    key
}

#[cfg(test)]
mod tests {
    use super::position_fingerprint;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn fingerprint_is_deterministic() {
        let a = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        let b = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(position_fingerprint(&a), position_fingerprint(&b));
    }

    #[test]
    fn fingerprint_covers_turn_rights_and_en_passant_but_not_clocks() {
        let base = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");

        let dark_to_move = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1")
            .expect("FEN should parse");
        assert_ne!(
            position_fingerprint(&base),
            position_fingerprint(&dark_to_move)
        );

        let fewer_rights = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1")
            .expect("FEN should parse");
        assert_ne!(
            position_fingerprint(&base),
            position_fingerprint(&fewer_rights)
        );

        let with_target = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1")
            .expect("FEN should parse");
        assert_ne!(
            position_fingerprint(&base),
            position_fingerprint(&with_target)
        );

        let later_clocks = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 7 12")
            .expect("FEN should parse");
        assert_eq!(
            position_fingerprint(&base),
            position_fingerprint(&later_clocks)
        );
    }
}
