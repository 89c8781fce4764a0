//! Pseudo-legal move generation.
//!
//! "Pseudo-legal" enforces piece movement shape, blocking, and capture
//! rules but not exposure of the mover's own king; the legality filter
//! lives in [`crate::game::Game`], which simulates each candidate and
//! probes for check.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Whether the king generator offers castling candidates.
///
/// Castling legality asks "is this square attacked?", which scans every
/// enemy move; generating castling inside that scan would recurse into
/// another round of attack queries without end, so attack probes always
/// run with `Suppress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingGen {
    Include,
    Suppress,
}

/// Collect the pseudo-legal destinations for the piece on `from`.
///
/// An empty origin yields an empty list. Destination order is
/// unspecified; treat the result as a set.
pub fn moves_from(game: &Game, from: Square, castling: CastlingGen) -> Vec<Square> {
    let Some(piece) = game.board().piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawns::gen_pawn(game, from, piece.color(), &mut moves),
        PieceKind::Knight => knights::gen_knight(game, from, piece.color(), &mut moves),
        PieceKind::Bishop => sliders::gen_bishop(game, from, piece.color(), &mut moves),
        PieceKind::Rook => sliders::gen_rook(game, from, piece.color(), &mut moves),
        PieceKind::Queen => sliders::gen_queen(game, from, piece.color(), &mut moves),
        PieceKind::King => king::gen_king(game, from, piece.color(), castling, &mut moves),
    }
    moves
}

/// True if `sq` is a square the given piece may land on: empty or held
/// by the enemy.
pub(super) fn empty_or_enemy(board: &Board, piece: Piece, sq: Square) -> bool {
    !board.is_occupied(sq) || piece.is_enemy_of(board.piece_at(sq))
}
