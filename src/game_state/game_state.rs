//! Core game state: one board plus everything the rules need beyond
//! placement — turn, castling rights, en-passant target, clocks,
//! repetition history, and the undo stack behind make/unmake.

use log::trace;

use crate::errors::{IllegalMoveError, ParseError};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square};
use crate::game_state::position_fingerprint::position_fingerprint;
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_generator::{
    FastLegalMoveGenerator, GeneratedMove, MoveGenerator,
};
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// A complete game position. Owned exclusively by its caller: there is no
/// internal locking, and generated move lists must not be interleaved with
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    // Halfmoves since the last capture or pawn move, and the fullmove
    // counter that ticks after each dark move.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // Fingerprints of every position reached so far, the current one last.
    pub repetition_history: Vec<u64>,

    // One record per made move, popped by `unmake_move`.
    pub undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition_history: Vec::new(),
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// Blank state with an empty board; `parse_fen` fills one in.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting position FEN always parses")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// All legal moves for the side to move, without annotations.
    #[inline]
    pub fn legal_moves(&self) -> Vec<GeneratedMove> {
        FastLegalMoveGenerator.generate_legal_moves(self)
    }

    /// Play `mv` if it is in the current legal set. On rejection the state
    /// is left exactly as it was.
    pub fn make_move(&mut self, mv: MoveDescription) -> Result<(), IllegalMoveError> {
        let is_legal = self
            .legal_moves()
            .iter()
            .any(|candidate| candidate.move_description == mv);
        if !is_legal {
            return Err(IllegalMoveError { mv });
        }

        self.undo_stack.push(UndoState {
            mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_square: self.en_passant_square,
            prev_halfmove_clock: self.halfmove_clock,
        });

        apply_move_in_place(self, mv);
        self.repetition_history.push(position_fingerprint(self));

        trace!("made move {mv}");
        Ok(())
    }

    /// Invert the most recent `make_move` exactly, returning the unmade
    /// move, or `None` when no move has been made.
    pub fn unmake_move(&mut self) -> Option<MoveDescription> {
        let undo = self.undo_stack.pop()?;
        self.repetition_history.pop();

        let mv = undo.mv;
        let mover = self.side_to_move.opposite();
        let from = mv.from_square();
        let to = mv.to_square();

        self.side_to_move = mover;
        if mover == Color::Dark {
            self.fullmove_number = self.fullmove_number.saturating_sub(1);
        }
        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_square = undo.prev_en_passant_square;
        self.halfmove_clock = undo.prev_halfmove_clock;

        if mv.is_castling() {
            // Walk the king and rook back to their home squares.
            self.board.relocate(to, from);
            match (mover, to) {
                (Color::Light, 6) => self.board.relocate(5, 7),
                (Color::Light, 2) => self.board.relocate(3, 0),
                (Color::Dark, 62) => self.board.relocate(61, 63),
                (Color::Dark, 58) => self.board.relocate(59, 56),
                _ => {}
            }
        } else {
            // Promotions put the pawn back instead of the promoted piece.
            self.board.remove(to);
            self.board.place(from, Piece::new(mover, mv.moved_piece()));

            if mv.is_en_passant() {
                let capture_sq = if mover == Color::Light { to - 8 } else { to + 8 };
                self.board
                    .place(capture_sq, Piece::new(mover.opposite(), PieceKind::Pawn));
            } else if let Some(captured) = mv.captured_piece() {
                self.board.place(to, Piece::new(mover.opposite(), captured));
            }
        }

        trace!("unmade move {mv}");
        Some(mv)
    }
}
