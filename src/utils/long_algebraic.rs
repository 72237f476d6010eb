//! Long algebraic move text against a position.
//!
//! This is the move vocabulary a protocol front-end speaks: `e2e4`,
//! `e1g1`, `a7a8q`. Encoding a `MoveDescription` is context-free; decoding
//! needs the position to recover the mover, captures, castling, and en
//! passant.

use crate::errors::ParseError;
use crate::game_state::chess_types::{Color, GameState, PieceKind, Square};
use crate::moves::move_descriptions::{
    MoveDescription, FLAG_CAPTURE, FLAG_CASTLING, FLAG_DOUBLE_PAWN_PUSH, FLAG_EN_PASSANT,
};
use crate::utils::algebraic::algebraic_to_square;

pub fn move_description_to_long_algebraic(mv: MoveDescription) -> String {
    mv.to_string()
}

pub fn long_algebraic_to_move_description(
    text: &str,
    game_state: &GameState,
) -> Result<MoveDescription, ParseError> {
    let invalid = |reason: &'static str| ParseError::InvalidMoveText {
        text: text.to_owned(),
        reason,
    };

    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(invalid("expected four or five characters"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let (moving_color, moved_piece) = game_state
        .board
        .piece_at(from)
        .split()
        .ok_or_else(|| invalid("no piece on the from-square"))?;
    if moving_color != game_state.side_to_move {
        return Err(invalid("piece does not belong to the side to move"));
    }

    let target = game_state.board.piece_at(to).split();
    let mut captured_piece = target.map(|(_, kind)| kind);
    let mut flags = 0u64;

    if captured_piece.is_some() {
        flags |= FLAG_CAPTURE;
    }

    if moved_piece == PieceKind::Pawn && from.abs_diff(to) == 16 {
        flags |= FLAG_DOUBLE_PAWN_PUSH;
    }

    if moved_piece == PieceKind::King && from.abs_diff(to) == 2 {
        flags |= FLAG_CASTLING;
    }

    if moved_piece == PieceKind::Pawn
        && game_state.en_passant_square == Some(to)
        && from % 8 != to % 8
        && target.is_none()
    {
        let capture_square: Square = if moving_color == Color::Light {
            to - 8
        } else {
            to + 8
        };
        match game_state.board.piece_at(capture_square).split() {
            Some((color, PieceKind::Pawn)) if color != moving_color => {
                captured_piece = Some(PieceKind::Pawn);
                flags |= FLAG_CAPTURE | FLAG_EN_PASSANT;
            }
            _ => return Err(invalid("en-passant target set but no capturable pawn")),
        }
    }

    let promotion_piece = if bytes.len() == 5 {
        if moved_piece != PieceKind::Pawn {
            return Err(invalid("only pawns may promote"));
        }
        if to / 8 != 0 && to / 8 != 7 {
            return Err(invalid("promotion move must end on the last rank"));
        }
        Some(char_to_promotion(bytes[4] as char).ok_or_else(|| invalid("bad promotion piece"))?)
    } else {
        if moved_piece == PieceKind::Pawn && (to / 8 == 0 || to / 8 == 7) {
            return Err(invalid("missing promotion piece"));
        }
        None
    };

    Ok(MoveDescription::pack(
        from,
        to,
        moved_piece,
        captured_piece,
        promotion_piece,
        flags,
    ))
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}
