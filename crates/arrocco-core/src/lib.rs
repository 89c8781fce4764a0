//! Core chess rules: board representation, move generation, and the
//! move state machine.

mod attack;
mod board;
mod castle_rights;
mod color;
mod error;
mod game;
mod move_result;
pub mod movegen;
mod piece;
mod piece_kind;
pub mod setup;
mod square;

pub use attack::{is_king_in_check, is_square_attacked};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleSide, CastlingRights};
pub use color::Color;
pub use error::PromotionError;
pub use game::{Game, LastMove};
pub use move_result::MoveResult;
pub use movegen::CastlingGen;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
