//! Colored chess pieces.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece.
///
/// Empty squares are represented as `Option<Piece>` being `None`, so a
/// piece always has a definite color; there is no empty marker to
/// misclassify.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    /// Total number of distinct colored pieces.
    pub const COUNT: usize = 12;

    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All 12 pieces: White pieces (indices 0-5) followed by Black pieces (indices 6-11).
    pub const ALL: [Piece; 12] = [
        Self::WHITE_PAWN,
        Self::WHITE_KNIGHT,
        Self::WHITE_BISHOP,
        Self::WHITE_ROOK,
        Self::WHITE_QUEEN,
        Self::WHITE_KING,
        Self::BLACK_PAWN,
        Self::BLACK_KNIGHT,
        Self::BLACK_BISHOP,
        Self::BLACK_ROOK,
        Self::BLACK_QUEEN,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// True if `target` holds a piece of the opposite color.
    ///
    /// An empty square is nobody's enemy, so `None` yields `false`.
    #[inline]
    pub fn is_enemy_of(self, target: Option<Piece>) -> bool {
        target.is_some_and(|other| other.color != self.color)
    }

    /// Return the display letter: uppercase for White pieces, lowercase
    /// for Black pieces.
    #[inline]
    pub fn letter(self) -> char {
        let base = self.kind.letter();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind.letter().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
