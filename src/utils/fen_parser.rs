//! FEN-to-GameState parser.
//!
//! Decodes the six whitespace-separated FEN fields into a fully-populated
//! state: placement (delegated to `Board`), turn, castling rights,
//! en-passant target, and the two clocks. Any malformed field fails the
//! whole decode; nothing is repaired silently.

use log::debug;

use crate::errors::ParseError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    CastlingRights, Color, GameState, Square, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};
use crate::game_state::position_fingerprint::position_fingerprint;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ParseError> {
    let mut parts = fen.split_whitespace();

    let placement_part = parts.next().ok_or(ParseError::MissingField("placement"))?;
    let side_part = parts.next().ok_or(ParseError::MissingField("side-to-move"))?;
    let castling_part = parts
        .next()
        .ok_or(ParseError::MissingField("castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or(ParseError::MissingField("en-passant target"))?;
    let halfmove_part = parts
        .next()
        .ok_or(ParseError::MissingField("halfmove clock"))?;
    let fullmove_part = parts
        .next()
        .ok_or(ParseError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(ParseError::TrailingFields);
    }

    let mut game_state = GameState::new_empty();

    game_state.board = Board::decode_placement(placement_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidHalfmoveClock(halfmove_part.to_owned()))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidFullmoveNumber(fullmove_part.to_owned()))?;
    if game_state.fullmove_number == 0 {
        return Err(ParseError::InvalidFullmoveNumber(fullmove_part.to_owned()));
    }

    // The loaded position is the first entry of the repetition history.
    game_state
        .repetition_history
        .push(position_fingerprint(&game_state));

    debug!("loaded position {placement_part} with {side_part} to move");
    Ok(game_state)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ParseError> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(ParseError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ParseError> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_LIGHT_KINGSIDE,
            'Q' => rights |= CASTLE_LIGHT_QUEENSIDE,
            'k' => rights |= CASTLE_DARK_KINGSIDE,
            'q' => rights |= CASTLE_DARK_QUEENSIDE,
            _ => return Err(ParseError::InvalidCastlingChar(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ParseError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;

    // A skipped square is always on rank 3 or rank 6.
    let rank = square / 8;
    if rank != 2 && rank != 5 {
        return Err(ParseError::InvalidEnPassantTarget(
            en_passant_part.to_owned(),
        ));
    }

    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::parse_fen;
    use crate::errors::ParseError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{
        Color, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE, CASTLE_LIGHT_KINGSIDE,
        CASTLE_LIGHT_QUEENSIDE,
    };

    #[test]
    fn parse_starting_fen_populates_every_field() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game.side_to_move, Color::Light);
        assert_eq!(
            game.castling_rights,
            CASTLE_LIGHT_KINGSIDE
                | CASTLE_LIGHT_QUEENSIDE
                | CASTLE_DARK_KINGSIDE
                | CASTLE_DARK_QUEENSIDE
        );
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.repetition_history.len(), 1);
        assert!(game.board.representations_agree());
    }

    #[test]
    fn en_passant_target_is_parsed_when_present() {
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(game.en_passant_square, Some(20));
    }

    #[test_case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR" ; "placement only")]
    #[test_case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0" ; "missing fullmove")]
    fn missing_fields_are_rejected(fen: &str) {
        assert!(matches!(
            parse_fen(fen),
            Err(ParseError::MissingField(_))
        ));
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(ParseError::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1"),
            Err(ParseError::InvalidCastlingChar('X'))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1"),
            Err(ParseError::InvalidEnPassantTarget("e4".to_owned()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(ParseError::InvalidHalfmoveClock("x".to_owned()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0"),
            Err(ParseError::InvalidFullmoveNumber("0".to_owned()))
        );
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra"),
            Err(ParseError::TrailingFields)
        );
    }

    #[test]
    fn placement_errors_propagate_to_the_whole_decode() {
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
            Err(ParseError::WrongRankCount)
        );
    }
}
