//! Sliding piece move generation: bishop, rook, and queen rays.

use crate::color::Color;
use crate::game::Game;
use crate::square::Square;

/// Diagonal ray directions as (row, col) deltas.
const DIAGONAL: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// Orthogonal ray directions as (row, col) deltas.
const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

pub(super) fn gen_bishop(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    walk_rays(game, from, color, &DIAGONAL, moves);
}

pub(super) fn gen_rook(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    walk_rays(game, from, color, &ORTHOGONAL, moves);
}

pub(super) fn gen_queen(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    walk_rays(game, from, color, &DIAGONAL, moves);
    walk_rays(game, from, color, &ORTHOGONAL, moves);
}

/// Walk each ray, collecting empty squares and stopping at the first
/// occupied one, which is included only when it holds an enemy piece.
fn walk_rays(
    game: &Game,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    let board = game.board();
    for &(dr, dc) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(dr, dc) {
            match board.piece_at(next) {
                None => moves.push(next),
                Some(other) => {
                    if other.color() != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}
