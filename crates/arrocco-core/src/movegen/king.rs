//! King move and castling generation.

use crate::attack;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::game::Game;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::{CastlingGen, empty_or_enemy};

/// The eight adjacent steps as (row, col) deltas.
const STEPS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];

/// Collect pseudo-legal king destinations, with castling candidates
/// unless suppressed.
pub(super) fn gen_king(
    game: &Game,
    from: Square,
    color: Color,
    castling: CastlingGen,
    moves: &mut Vec<Square>,
) {
    let board = game.board();
    let king = Piece::new(PieceKind::King, color);
    for (dr, dc) in STEPS {
        if let Some(to) = from.offset(dr, dc)
            && empty_or_enemy(board, king, to)
        {
            moves.push(to);
        }
    }

    // Castling is only a candidate from the home square; the rook
    // relocation geometry is fixed to it.
    if castling == CastlingGen::Suppress || from != Square::new(color.home_row(), 4) {
        return;
    }
    gen_castle(game, color, CastleSide::KingSide, moves);
    gen_castle(game, color, CastleSide::QueenSide, moves);
}

fn gen_castle(game: &Game, color: Color, side: CastleSide, moves: &mut Vec<Square>) {
    if !game.castling().can_castle(color, side) {
        return;
    }

    let row = color.home_row();
    let (rook_col, between, pass_col, dest_col): (u8, &[u8], u8, u8) = match side {
        CastleSide::KingSide => (7, &[5, 6], 5, 6),
        CastleSide::QueenSide => (0, &[1, 2, 3], 3, 2),
    };

    // The rook must still stand on its corner; the moved-flags cannot
    // tell a captured rook from an unmoved one.
    let rook = Piece::new(PieceKind::Rook, color);
    if game.board().piece_at(Square::new(row, rook_col)) != Some(rook) {
        return;
    }

    if between
        .iter()
        .any(|&col| game.board().is_occupied(Square::new(row, col)))
    {
        return;
    }

    // The king may not castle out of, through, or into an attack. The
    // probes suppress castling themselves, which is what breaks the
    // recursion.
    let enemy = color.flip();
    if [4, pass_col, dest_col]
        .iter()
        .any(|&col| attack::is_square_attacked(game, Square::new(row, col), enemy))
    {
        return;
    }

    moves.push(Square::new(row, dest_col));
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::game::Game;
    use crate::movegen::{CastlingGen, moves_from};
    use crate::piece::Piece;
    use crate::square::Square;

    fn game_with(pieces: &[(Square, Piece)]) -> Game {
        let mut board = Board::empty();
        for &(sq, piece) in pieces {
            board.place(sq, piece);
        }
        Game::with_board(board)
    }

    fn castle_ready_white() -> Game {
        game_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
        ])
    }

    #[test]
    fn central_king_has_eight_steps() {
        let game = game_with(&[(Square::D4, Piece::WHITE_KING)]);
        assert_eq!(moves_from(&game, Square::D4, CastlingGen::Include).len(), 8);
    }

    #[test]
    fn both_castles_offered_when_paths_are_clear() {
        let game = castle_ready_white();
        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(moves.contains(&Square::G1), "kingside castle expected");
        assert!(moves.contains(&Square::C1), "queenside castle expected");
    }

    #[test]
    fn suppress_drops_only_the_castles() {
        let game = castle_ready_white();
        let with = moves_from(&game, Square::E1, CastlingGen::Include);
        let without = moves_from(&game, Square::E1, CastlingGen::Suppress);
        assert!(!without.contains(&Square::G1));
        assert!(!without.contains(&Square::C1));
        assert_eq!(with.len(), without.len() + 2);
    }

    #[test]
    fn no_castle_without_the_rook() {
        let game = game_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
        ]);
        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(
            !moves.contains(&Square::G1),
            "kingside castle requires the h1 rook"
        );
        assert!(moves.contains(&Square::C1), "queenside is unaffected");
    }

    #[test]
    fn no_castle_through_occupied_squares() {
        let game = game_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
            (Square::B1, Piece::WHITE_KNIGHT),
            (Square::F1, Piece::WHITE_BISHOP),
        ]);
        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(!moves.contains(&Square::G1), "f1 is occupied");
        assert!(
            !moves.contains(&Square::C1),
            "b1 counts as a blocking square too"
        );
    }

    #[test]
    fn no_castle_out_of_check() {
        let game = game_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
            (Square::E5, Piece::BLACK_ROOK),
        ]);
        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(
            !moves.contains(&Square::G1),
            "castling out of check is not allowed"
        );
    }

    #[test]
    fn no_castle_through_an_attacked_square() {
        let game = game_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
            (Square::F5, Piece::BLACK_ROOK),
        ]);
        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(
            !moves.contains(&Square::G1),
            "the king may not pass through f1 under attack"
        );
    }

    #[test]
    fn pawn_push_coverage_blocks_castling() {
        // The g2 pawn covers g1 only through its forward push, which
        // the attack probe counts like any other destination.
        let game = game_with(&[
            (Square::E1, Piece::WHITE_KING),
            (Square::H1, Piece::WHITE_ROOK),
            (Square::E8, Piece::BLACK_KING),
            (Square::G2, Piece::BLACK_PAWN),
        ]);
        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(!moves.contains(&Square::G1));
    }

    #[test]
    fn no_castle_after_rights_are_marked() {
        let mut game = castle_ready_white();
        // March the king out and back; the flag stays set.
        assert!(game.attempt_move(Square::E1, Square::F1).performed);
        assert!(game.attempt_move(Square::F1, Square::E1).performed);

        let moves = moves_from(&game, Square::E1, CastlingGen::Include);
        assert!(!moves.contains(&Square::G1));
        assert!(!moves.contains(&Square::C1));
    }

    #[test]
    fn castle_from_anywhere_but_home_is_never_offered() {
        let game = game_with(&[
            (Square::D4, Piece::WHITE_KING),
            (Square::A1, Piece::WHITE_ROOK),
            (Square::H1, Piece::WHITE_ROOK),
        ]);
        let moves = moves_from(&game, Square::D4, CastlingGen::Include);
        assert!(!moves.contains(&Square::G1));
        assert!(!moves.contains(&Square::C1));
    }
}
