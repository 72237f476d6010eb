//! Core value types shared by every subsystem: colors, piece kinds, the
//! packed one-byte piece, board squares, and castling-rights masks.

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is represented separately for cache-friendly layouts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Conventional material value in pawns. The king has none.
    #[inline]
    pub const fn value(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }
}

/// A `(Color, PieceKind)` pair packed into one byte.
///
/// `Piece::EMPTY` is the single canonical empty value; there is no way to
/// construct an occupied piece without both a color and a kind, and the
/// bit layout is not part of the type's contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece(((color.index() as u8) << 3) | (kind.index() as u8 + 1))
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn color(self) -> Option<Color> {
        if self.is_empty() {
            None
        } else if self.0 & 0b1000 == 0 {
            Some(Color::Light)
        } else {
            Some(Color::Dark)
        }
    }

    #[inline]
    pub fn kind(self) -> Option<PieceKind> {
        match self.0 & 0b0111 {
            0 => None,
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            _ => Some(PieceKind::King),
        }
    }

    /// Both components at once, or `None` for the empty piece.
    #[inline]
    pub fn split(self) -> Option<(Color, PieceKind)> {
        Some((self.color()?, self.kind()?))
    }

    /// FEN letter for an occupied piece: uppercase for light, lowercase for
    /// dark. `None` for the empty piece.
    pub fn fen_char(self) -> Option<char> {
        let (color, kind) = self.split()?;
        let base = match kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        Some(match color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        })
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Piece::new(color, kind))
    }
}

/// Board square index (`0..=63`), rank-major: 0 = a1, 7 = h1, 63 = h8.
/// Absence of a square (en-passant target, kingless board) is expressed
/// with `Option<Square>`.
pub type Square = u8;

/// Compact castling rights bitmask.
pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub type CastlingRights = u8;
