//! Knight move generation.

use crate::color::Color;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::empty_or_enemy;

/// The eight L-shaped jumps as (row, col) deltas.
const JUMPS: [(i8, i8); 8] = [
    (-2, 1),
    (-2, -1),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-1, -2),
    (1, -2),
];

/// Collect pseudo-legal knight destinations.
pub(super) fn gen_knight(game: &Game, from: Square, color: Color, moves: &mut Vec<Square>) {
    let board = game.board();
    let knight = Piece::new(PieceKind::Knight, color);
    for (dr, dc) in JUMPS {
        if let Some(to) = from.offset(dr, dc)
            && empty_or_enemy(board, knight, to)
        {
            moves.push(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::game::Game;
    use crate::movegen::{CastlingGen, moves_from};
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn central_knight_has_eight_jumps() {
        let mut board = Board::empty();
        board.place(Square::D4, Piece::WHITE_KNIGHT);
        let game = Game::with_board(board);
        assert_eq!(moves_from(&game, Square::D4, CastlingGen::Include).len(), 8);
    }

    #[test]
    fn corner_knight_has_two_jumps() {
        let mut board = Board::empty();
        board.place(Square::A1, Piece::BLACK_KNIGHT);
        let game = Game::with_board(board);
        let moves = moves_from(&game, Square::A1, CastlingGen::Include);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Square::B3));
        assert!(moves.contains(&Square::C2));
    }

    #[test]
    fn jumps_over_blockers_but_not_onto_friends() {
        let mut board = Board::empty();
        board.place(Square::D4, Piece::WHITE_KNIGHT);
        // Surround the knight completely; knights do not care.
        for (dr, dc) in [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)] {
            board.place(Square::D4.offset(dr, dc).unwrap(), Piece::BLACK_PAWN);
        }
        board.place(Square::E6, Piece::WHITE_PAWN);
        board.place(Square::C6, Piece::BLACK_ROOK);
        let game = Game::with_board(board);

        let moves = moves_from(&game, Square::D4, CastlingGen::Include);
        assert!(!moves.contains(&Square::E6), "friendly square blocked");
        assert!(moves.contains(&Square::C6), "enemy square capturable");
        assert_eq!(moves.len(), 7);
    }
}
