//! Errors surfaced by the position library.
//!
//! Only two failure modes are recoverable at this layer: malformed text
//! (positions or moves) and attempts to play a move that is not in the
//! current legal set. Move generation, attack maps, and move application
//! are total over a well-formed game state and have no error channel.

use thiserror::Error;

use crate::moves::move_descriptions::MoveDescription;

/// Malformed position or move text. Never repaired silently; the whole
/// decode fails on the first offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing {0} field in FEN")]
    MissingField(&'static str),

    #[error("FEN has extra trailing fields")]
    TrailingFields,

    #[error("placement field must contain exactly 8 ranks")]
    WrongRankCount,

    #[error("placement rank does not describe exactly 8 squares")]
    WrongRankWidth,

    #[error("unrecognized piece character '{0}' in placement field")]
    UnrecognizedPiece(char),

    #[error("invalid empty-square run '{0}' in placement field")]
    InvalidGapDigit(char),

    #[error("invalid side-to-move field '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character '{0}'")]
    InvalidCastlingChar(char),

    #[error("invalid square coordinate '{0}'")]
    InvalidSquare(String),

    #[error("en-passant target '{0}' is not on rank 3 or 6")]
    InvalidEnPassantTarget(String),

    #[error("invalid halfmove clock '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("fullmove number '{0}' must be a positive integer")]
    InvalidFullmoveNumber(String),

    #[error("invalid move text '{text}': {reason}")]
    InvalidMoveText { text: String, reason: &'static str },
}

/// A requested move is not a member of the current legal-move set.
/// The game state is left untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("move {mv} is not legal in the current position")]
pub struct IllegalMoveError {
    pub mv: MoveDescription,
}
