//! Terminal-oriented board renderer.
//!
//! The board layout is fixed; the per-piece display symbol is supplied by
//! the caller, with Unicode and ASCII mappings provided for convenience.

use crate::game_state::chess_types::{Color, GameState, Piece, PieceKind, Square};

/// Render the board with a caller-chosen symbol mapping.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_board(game_state: &GameState, symbol: fn(Piece) -> char) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8 {
            out.push(symbol(game_state.board.piece_at((rank * 8 + file) as Square)));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

/// Render with Unicode chess glyphs.
#[inline]
pub fn render_game_state(game_state: &GameState) -> String {
    render_board(game_state, unicode_symbol)
}

pub fn unicode_symbol(piece: Piece) -> char {
    match piece.split() {
        None => '·',
        Some((Color::Light, PieceKind::Pawn)) => '♙',
        Some((Color::Light, PieceKind::Knight)) => '♘',
        Some((Color::Light, PieceKind::Bishop)) => '♗',
        Some((Color::Light, PieceKind::Rook)) => '♖',
        Some((Color::Light, PieceKind::Queen)) => '♕',
        Some((Color::Light, PieceKind::King)) => '♔',
        Some((Color::Dark, PieceKind::Pawn)) => '♟',
        Some((Color::Dark, PieceKind::Knight)) => '♞',
        Some((Color::Dark, PieceKind::Bishop)) => '♝',
        Some((Color::Dark, PieceKind::Rook)) => '♜',
        Some((Color::Dark, PieceKind::Queen)) => '♛',
        Some((Color::Dark, PieceKind::King)) => '♚',
    }
}

pub fn ascii_symbol(piece: Piece) -> char {
    piece.fen_char().unwrap_or('.')
}

#[cfg(test)]
mod tests {
    use super::{ascii_symbol, render_board, render_game_state};
    use crate::game_state::chess_types::GameState;

    #[test]
    fn unicode_render_places_kings_on_their_files() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        // Rank 8 is printed first, with the dark king on the e-file.
        assert!(lines[1].starts_with('8'));
        assert!(lines[1].contains('♚'));
        assert!(lines[8].contains('♔'));
    }

    #[test]
    fn caller_supplied_symbols_are_used_verbatim() {
        let rendered = render_board(&GameState::new_game(), ascii_symbol);
        assert!(rendered.contains('K'));
        assert!(rendered.contains('k'));
        assert!(rendered.contains('.'));
        assert!(!rendered.contains('♔'));
    }
}
