use crate::game_state::chess_types::{Color, GameState, PieceKind, Square};

/// Kind of the enemy piece occupying `square`, if any. The mailbox answers
/// this in one lookup.
#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<PieceKind> {
    let (color, kind) = game_state.board.piece_at(square).split()?;
    (color == game_state.side_to_move.opposite()).then_some(kind)
}

#[inline]
pub fn promotion_rank(color: Color) -> u8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

#[inline]
pub fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}
