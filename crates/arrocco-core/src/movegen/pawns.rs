//! Pawn move generation.

use crate::color::Color;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Collect pseudo-legal pawn destinations.
///
/// Forward steps need empty squares, diagonals need an enemy occupant,
/// and the en-passant diagonal needs the one-ply memory to show the
/// neighboring enemy pawn arriving by double step.
pub(super) fn gen_pawn(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    // A pawn on its final row has nowhere to go. Reachable while a
    // promotion is pending, so attack probes must tolerate it.
    if from.row() == color.promotion_row() {
        return;
    }

    let board = game.board();
    let pawn = Piece::new(PieceKind::Pawn, color);
    let step = color.pawn_step();

    // Diagonal captures.
    for dc in [-1i8, 1] {
        if let Some(diag) = from.offset(step, dc)
            && pawn.is_enemy_of(board.piece_at(diag))
        {
            moves.push(diag);
        }
    }

    // Single step, and the double step from the starting row.
    if let Some(one) = from.offset(step, 0)
        && !board.is_occupied(one)
    {
        moves.push(one);
        if from.row() == color.pawn_row()
            && let Some(two) = from.offset(step * 2, 0)
            && !board.is_occupied(two)
        {
            moves.push(two);
        }
    }

    // En passant: a neighboring enemy pawn whose recorded move was the
    // double step that landed it there. The landing square it jumped
    // over is necessarily still empty.
    for dc in [-1i8, 1] {
        let Some(beside) = from.offset(0, dc) else {
            continue;
        };
        let enemy_pawn = Piece::new(PieceKind::Pawn, color.flip());
        if board.piece_at(beside) != Some(enemy_pawn) {
            continue;
        }
        if !arrived_by_double_step(game, beside, enemy_pawn) {
            continue;
        }
        if let Some(diag) = from.offset(step, dc)
            && !moves.contains(&diag)
        {
            moves.push(diag);
        }
    }
}

/// True if the one-ply memory shows `pawn` reaching `at` by a double step.
fn arrived_by_double_step(game: &Game, at: Square, pawn: Piece) -> bool {
    match game.last_move() {
        Some(last) => {
            last.piece == pawn && Some(last.from) == at.offset(-2 * pawn.color().pawn_step(), 0)
        }
        None => false,
    }
}
