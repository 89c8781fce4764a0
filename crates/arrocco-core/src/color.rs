//! Chess piece colors and their board orientation.

use std::fmt;
use std::ops::Not;

/// A chess piece color: White or Black.
///
/// Rows run from Black's back rank (row 0) to White's (row 7), so each
/// color carries its own pawn direction and home geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step (White advances toward row 0).
    #[inline]
    pub const fn pawn_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row where this color's pawns start, enabling the double step.
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row of this color's back rank (king and rook home squares).
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn of this color must reach to promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn index_values() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(Color::Black.flip(), Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn not_operator() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn pawn_geometry_mirrors() {
        assert_eq!(Color::White.pawn_step(), -1);
        assert_eq!(Color::Black.pawn_step(), 1);
        assert_eq!(Color::White.pawn_row(), 6);
        assert_eq!(Color::Black.pawn_row(), 1);
    }

    #[test]
    fn home_and_promotion_rows_oppose() {
        assert_eq!(Color::White.home_row(), 7);
        assert_eq!(Color::Black.home_row(), 0);
        assert_eq!(Color::White.promotion_row(), Color::Black.home_row());
        assert_eq!(Color::Black.promotion_row(), Color::White.home_row());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "white");
        assert_eq!(format!("{}", Color::Black), "black");
    }

    #[test]
    fn all_and_count() {
        assert_eq!(Color::COUNT, 2);
        assert_eq!(Color::ALL.len(), Color::COUNT);
        assert_eq!(Color::ALL[0], Color::White);
        assert_eq!(Color::ALL[1], Color::Black);
    }
}
