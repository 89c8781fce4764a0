//! Outcome report for a move attempt.

use crate::square::Square;

/// What a call to [`crate::game::Game::attempt_move`] did and discovered.
///
/// Plain flags rather than an enum: a single accepted move can put the
/// opponent in check, deliver checkmate, and offer a promotion all at
/// once, so the outcomes are not mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// The move was applied and the board changed.
    pub performed: bool,
    /// The opponent's king is attacked in the resulting position.
    pub opponent_in_check: bool,
    /// The move was geometrically valid but rejected because it would
    /// leave the mover's own king attacked. The board is unchanged.
    pub denied_self_check: bool,
    /// The opponent is in check with no legal reply.
    pub opponent_checkmate: bool,
    /// The opponent is not in check but has no legal reply.
    pub opponent_stalemate: bool,
    /// A pawn reached its final row and awaits a
    /// [`crate::game::Game::promote_pawn`] call for this square.
    pub promotion_square: Option<Square>,
}

impl MoveResult {
    /// Result for a move rejected as not pseudo-legal. Nothing happened.
    pub fn rejected() -> MoveResult {
        MoveResult::default()
    }

    /// Result for a move undone because it would expose the mover's king.
    pub fn denied() -> MoveResult {
        MoveResult {
            denied_self_check: true,
            ..MoveResult::default()
        }
    }

    /// True if this result ended the game.
    pub fn is_game_over(&self) -> bool {
        self.opponent_checkmate || self.opponent_stalemate
    }
}
