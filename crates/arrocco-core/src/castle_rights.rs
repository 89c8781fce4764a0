//! Castling availability tracked as set-only moved-flags in a `u8`.

use std::fmt;

use crate::color::Color;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Moved-flags governing castling, one bit per king or rook home square.
///
/// A flag is set the first time a move leaves the matching home square
/// and is never cleared afterwards; the API deliberately has no remove
/// operation. Castling on a side is available while the king flag and
/// that side's rook flag are both still unset.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Fresh game: nothing has moved.
    pub const NONE: CastlingRights = CastlingRights(0);

    /// White king has left e1.
    pub const WHITE_KING_MOVED: CastlingRights = CastlingRights(0b000_001);
    /// White king-side rook has left h1.
    pub const WHITE_KINGSIDE_ROOK_MOVED: CastlingRights = CastlingRights(0b000_010);
    /// White queen-side rook has left a1.
    pub const WHITE_QUEENSIDE_ROOK_MOVED: CastlingRights = CastlingRights(0b000_100);
    /// Black king has left e8.
    pub const BLACK_KING_MOVED: CastlingRights = CastlingRights(0b001_000);
    /// Black king-side rook has left h8.
    pub const BLACK_KINGSIDE_ROOK_MOVED: CastlingRights = CastlingRights(0b010_000);
    /// Black queen-side rook has left a8.
    pub const BLACK_QUEENSIDE_ROOK_MOVED: CastlingRights = CastlingRights(0b100_000);

    /// Return new rights with all flags from `other` set.
    #[inline]
    pub const fn mark(self, other: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 | other.0)
    }

    /// Return `true` if all flags in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastlingRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return `true` if no flag is set.
    #[inline]
    pub const fn is_fresh(self) -> bool {
        self.0 == 0
    }

    /// Check whether a color may still castle toward the given side.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        let king = match color {
            Color::White => Self::WHITE_KING_MOVED,
            Color::Black => Self::BLACK_KING_MOVED,
        };
        let rook = match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KINGSIDE_ROOK_MOVED,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEENSIDE_ROOK_MOVED,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KINGSIDE_ROOK_MOVED,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEENSIDE_ROOK_MOVED,
        };
        !self.contains(king) && !self.contains(rook)
    }
}

impl fmt::Debug for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABELS: [(CastlingRights, char); 6] = [
            (CastlingRights::WHITE_KING_MOVED, 'K'),
            (CastlingRights::WHITE_KINGSIDE_ROOK_MOVED, 'H'),
            (CastlingRights::WHITE_QUEENSIDE_ROOK_MOVED, 'A'),
            (CastlingRights::BLACK_KING_MOVED, 'k'),
            (CastlingRights::BLACK_KINGSIDE_ROOK_MOVED, 'h'),
            (CastlingRights::BLACK_QUEENSIDE_ROOK_MOVED, 'a'),
        ];
        write!(f, "CastlingRights(")?;
        for (flag, label) in LABELS {
            let c = if self.contains(flag) { label } else { '-' };
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleSide, CastlingRights};
    use crate::color::Color;

    #[test]
    fn fresh_rights_allow_everything() {
        let rights = CastlingRights::NONE;
        assert!(rights.is_fresh());
        for color in Color::ALL {
            assert!(rights.can_castle(color, CastleSide::KingSide));
            assert!(rights.can_castle(color, CastleSide::QueenSide));
        }
    }

    #[test]
    fn king_flag_blocks_both_sides() {
        let rights = CastlingRights::NONE.mark(CastlingRights::WHITE_KING_MOVED);
        assert!(!rights.can_castle(Color::White, CastleSide::KingSide));
        assert!(!rights.can_castle(Color::White, CastleSide::QueenSide));
        assert!(rights.can_castle(Color::Black, CastleSide::KingSide));
        assert!(rights.can_castle(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn rook_flag_blocks_only_its_side() {
        let rights = CastlingRights::NONE.mark(CastlingRights::BLACK_KINGSIDE_ROOK_MOVED);
        assert!(!rights.can_castle(Color::Black, CastleSide::KingSide));
        assert!(rights.can_castle(Color::Black, CastleSide::QueenSide));
        assert!(rights.can_castle(Color::White, CastleSide::KingSide));
    }

    #[test]
    fn marks_accumulate_and_never_clear() {
        let rights = CastlingRights::NONE
            .mark(CastlingRights::WHITE_KINGSIDE_ROOK_MOVED)
            .mark(CastlingRights::WHITE_QUEENSIDE_ROOK_MOVED);
        assert!(rights.contains(CastlingRights::WHITE_KINGSIDE_ROOK_MOVED));
        assert!(rights.contains(CastlingRights::WHITE_QUEENSIDE_ROOK_MOVED));
        assert!(!rights.can_castle(Color::White, CastleSide::KingSide));
        assert!(!rights.can_castle(Color::White, CastleSide::QueenSide));

        // Marking again is a no-op, not a toggle.
        let again = rights.mark(CastlingRights::WHITE_KINGSIDE_ROOK_MOVED);
        assert_eq!(again, rights);
    }

    #[test]
    fn contains_checks() {
        let rights = CastlingRights::NONE
            .mark(CastlingRights::WHITE_KING_MOVED)
            .mark(CastlingRights::BLACK_QUEENSIDE_ROOK_MOVED);
        assert!(rights.contains(CastlingRights::WHITE_KING_MOVED));
        assert!(rights.contains(CastlingRights::BLACK_QUEENSIDE_ROOK_MOVED));
        assert!(!rights.contains(CastlingRights::BLACK_KING_MOVED));
        assert!(!rights.is_fresh());
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", CastlingRights::NONE), "CastlingRights(------)");
        let rights = CastlingRights::NONE
            .mark(CastlingRights::WHITE_KING_MOVED)
            .mark(CastlingRights::BLACK_KINGSIDE_ROOK_MOVED);
        assert_eq!(format!("{:?}", rights), "CastlingRights(K---h-)");
    }
}
