//! Attack and check queries.
//!
//! A square counts as attacked when any enemy piece lists it among its
//! pseudo-legal destinations with castling suppressed. Pawn coverage is
//! therefore exactly the pawn's move set: forward pushes count, and an
//! empty capture diagonal does not.

use crate::color::Color;
use crate::game::Game;
use crate::movegen::{self, CastlingGen};
use crate::square::Square;

/// Does any piece of `by` reach `target` pseudo-legally?
///
/// Castling is suppressed in the probe; a castle relocates the king but
/// never delivers a capture, and suppressing it keeps the query from
/// recursing back into itself.
pub fn is_square_attacked(game: &Game, target: Square, by: Color) -> bool {
    game.board()
        .piece_squares(by)
        .any(|(sq, _)| movegen::moves_from(game, sq, CastlingGen::Suppress).contains(&target))
}

/// Is the king of `color` currently attacked?
///
/// A board without that king reports `false`; probe positions are
/// allowed to omit either king.
pub fn is_king_in_check(game: &Game, color: Color) -> bool {
    match game.board().king_square(color) {
        Some(king) => is_square_attacked(game, king, color.flip()),
        None => false,
    }
}
