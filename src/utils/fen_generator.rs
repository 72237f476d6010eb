//! GameState-to-FEN serializer, the inverse of `fen_parser`.

use crate::game_state::chess_types::{
    CastlingRights, Color, GameState, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let placement = game_state.board.encode_placement();
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_square);

    format!(
        "{} {} {} {} {} {}",
        placement,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights & CASTLE_LIGHT_KINGSIDE != 0 {
        out.push('K');
    }
    if rights & CASTLE_LIGHT_QUEENSIDE != 0 {
        out.push('Q');
    }
    if rights & CASTLE_DARK_KINGSIDE != 0 {
        out.push('k');
    }
    if rights & CASTLE_DARK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };
    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}
