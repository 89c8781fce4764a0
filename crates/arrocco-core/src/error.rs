//! Error types for caller-contract violations.

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors from [`Game::promote_pawn`](crate::game::Game::promote_pawn).
///
/// These mark misuse by the caller, never a playable outcome: a correct
/// front end only requests promotion for the square an accepted move
/// just reported, with a kind it offered the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    /// The square is not on row 0 or row 7.
    #[error("{square} is not on a promotion row")]
    NotPromotionRank {
        /// The offending square.
        square: Square,
    },
    /// The square does not hold a pawn.
    #[error("no pawn to promote on {square}")]
    NotAPawn {
        /// The offending square.
        square: Square,
    },
    /// The requested kind is not a legal promotion target.
    #[error("cannot promote a pawn to {kind:?}")]
    DisallowedKind {
        /// The requested kind.
        kind: PieceKind,
    },
}
