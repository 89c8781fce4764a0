//! Prebuilt board arrangements.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece kinds from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Return the standard starting arrangement.
///
/// Black occupies rows 0 and 1, White rows 6 and 7.
pub fn standard() -> Board {
    let mut board = Board::empty();
    for color in Color::ALL {
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.place(
                Square::new(color.home_row(), col as u8),
                Piece::new(kind, color),
            );
        }
        for col in 0u8..8 {
            board.place(
                Square::new(color.pawn_row(), col),
                Piece::new(PieceKind::Pawn, color),
            );
        }
    }
    board
}

/// Return a three-piece sandbox arrangement for reaching a stalemate
/// quickly: Black king on a8, White queen on e4, White king on h1.
pub fn stalemate_trap() -> Board {
    let mut board = Board::empty();
    board.place(Square::A8, Piece::BLACK_KING);
    board.place(Square::E4, Piece::WHITE_QUEEN);
    board.place(Square::H1, Piece::WHITE_KING);
    board
}
