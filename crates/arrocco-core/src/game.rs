//! Full game state and the move state machine.
//!
//! [`Game`] owns the board plus the two pieces of history the rules
//! need: set-only castling flags and the one-ply memory behind en
//! passant. Moves go through [`Game::attempt_move`], which applies a
//! candidate on the real board and rolls it back exactly when the
//! mover's own king would be left attacked.

use tracing::{debug, info};

use crate::attack;
use crate::board::Board;
use crate::castle_rights::CastlingRights;
use crate::color::Color;
use crate::error::PromotionError;
use crate::move_result::MoveResult;
use crate::movegen::{self, CastlingGen};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::setup;
use crate::square::Square;

/// Moved-flags triggered by a move leaving each square.
///
/// Indexed by origin square. Only the two king home squares and the
/// four rook corners carry a flag; whatever piece moves off one of them
/// sets it, with identity never rechecked.
const MOVED_FLAGS_BY_ORIGIN: [CastlingRights; Square::COUNT] = {
    let mut table = [CastlingRights::NONE; Square::COUNT];
    table[Square::A8.index()] = CastlingRights::BLACK_QUEENSIDE_ROOK_MOVED;
    table[Square::E8.index()] = CastlingRights::BLACK_KING_MOVED;
    table[Square::H8.index()] = CastlingRights::BLACK_KINGSIDE_ROOK_MOVED;
    table[Square::A1.index()] = CastlingRights::WHITE_QUEENSIDE_ROOK_MOVED;
    table[Square::E1.index()] = CastlingRights::WHITE_KING_MOVED;
    table[Square::H1.index()] = CastlingRights::WHITE_KINGSIDE_ROOK_MOVED;
    table
};

/// The last accepted move: which piece moved and from where.
///
/// This is the one-ply memory behind en passant. Every accepted move
/// overwrites it, so a capture window lasts exactly one reply. Matching
/// is by piece value and origin square, not by piece identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMove {
    pub piece: Piece,
    pub from: Square,
}

/// Everything needed to take back one applied move exactly.
///
/// `captured` holds the victim together with the square it stood on,
/// which for en passant is not the destination. `rook` holds the extra
/// rook relocation of a castle as (from, to).
#[derive(Debug, Clone, Copy)]
struct AppliedMove {
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<(Square, Piece)>,
    rook: Option<(Square, Square)>,
}

/// A chess game: piece placement, castling flags, and en passant memory.
///
/// The game does not track whose turn it is; callers sequence the
/// players and may probe or move either color at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    rights: CastlingRights,
    last_move: Option<LastMove>,
}

impl Game {
    /// Start a game from the standard initial position.
    pub fn new() -> Game {
        Game::with_board(setup::standard())
    }

    /// Start a game from an arbitrary position, with fresh castling
    /// flags and no move history.
    pub fn with_board(board: Board) -> Game {
        Game {
            board,
            rights: CastlingRights::NONE,
            last_move: None,
        }
    }

    /// Throw away all state and start over from the initial position.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// The current piece placement.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The accumulated castling moved-flags.
    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.rights
    }

    /// The one-ply memory of the last accepted move.
    #[inline]
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Pseudo-legal destinations for the piece on `from`, castling
    /// candidates included. May contain moves that expose the mover's
    /// own king; [`Game::legal_moves_from`] filters those out.
    pub fn moves_from(&self, from: Square) -> Vec<Square> {
        movegen::moves_from(self, from, CastlingGen::Include)
    }

    /// Destinations for the piece on `from` that [`Game::attempt_move`]
    /// would actually perform.
    ///
    /// Each pseudo-legal candidate is simulated on a scratch copy and
    /// kept only if the mover's king ends up safe.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.piece_at(from) else {
            return Vec::new();
        };
        let mut probe = *self;
        movegen::moves_from(&probe, from, CastlingGen::Include)
            .into_iter()
            .filter(|&to| {
                let record = probe.plan_move(from, to, piece);
                probe.apply(&record);
                let safe = !attack::is_king_in_check(&probe, piece.color());
                probe.undo(&record);
                safe
            })
            .collect()
    }

    /// Try to move whatever stands on `from` to `to`.
    ///
    /// Returns a [`MoveResult`] describing what happened:
    ///
    /// * an empty origin or a destination outside the piece's
    ///   pseudo-legal set rejects the move outright,
    /// * a move that would leave the mover's own king attacked is
    ///   applied, detected, and rolled back, reported as denied,
    /// * anything else stands, and the result carries check, checkmate,
    ///   stalemate, and pending-promotion findings about the opponent.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveResult {
        let Some(piece) = self.board.piece_at(from) else {
            debug!(%from, %to, "rejected: empty origin");
            return MoveResult::rejected();
        };

        if !movegen::moves_from(self, from, CastlingGen::Include).contains(&to) {
            debug!(%from, %to, %piece, "rejected: not a pseudo-legal destination");
            return MoveResult::rejected();
        }

        let record = self.plan_move(from, to, piece);
        self.apply(&record);

        if attack::is_king_in_check(self, piece.color()) {
            self.undo(&record);
            debug!(%from, %to, %piece, "denied: would leave own king in check");
            return MoveResult::denied();
        }

        // The move stands. Update the memory before scanning the
        // opponent so their en passant replies are visible to the scan.
        self.last_move = Some(LastMove { piece, from });

        let mut marked = MOVED_FLAGS_BY_ORIGIN[from.index()];
        if let Some((rook_from, _)) = record.rook {
            marked = marked.mark(MOVED_FLAGS_BY_ORIGIN[rook_from.index()]);
        }
        self.rights = self.rights.mark(marked);

        let mut result = MoveResult {
            performed: true,
            ..MoveResult::default()
        };

        let opponent = piece.color().flip();
        if attack::is_king_in_check(self, opponent) {
            result.opponent_in_check = true;
            if !self.has_any_legal_move(opponent) {
                result.opponent_checkmate = true;
                info!(winner = %piece.color(), "checkmate");
            }
        } else if !self.has_any_legal_move(opponent) {
            result.opponent_stalemate = true;
            info!("stalemate");
        }

        if piece.kind() == PieceKind::Pawn && to.row() == piece.color().promotion_row() {
            result.promotion_square = Some(to);
        }

        debug!(%from, %to, %piece, check = result.opponent_in_check, "performed");
        result
    }

    /// Replace the pawn on `square` with a piece of the given kind.
    ///
    /// The caller decides the kind; [`Game::attempt_move`] only reports
    /// the pending square and leaves the pawn in place until this call.
    pub fn promote_pawn(&mut self, square: Square, kind: PieceKind) -> Result<(), PromotionError> {
        if square.row() != 0 && square.row() != 7 {
            return Err(PromotionError::NotPromotionRank { square });
        }
        let pawn = match self.board.piece_at(square) {
            Some(piece) if piece.kind() == PieceKind::Pawn => piece,
            _ => return Err(PromotionError::NotAPawn { square }),
        };
        if !matches!(
            kind,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        ) {
            return Err(PromotionError::DisallowedKind { kind });
        }

        self.board.place(square, Piece::new(kind, pawn.color()));
        debug!(%square, %kind, "pawn promoted");
        Ok(())
    }

    /// Does `color` have at least one move that leaves its king safe?
    ///
    /// Runs on a scratch copy, so probing mid-update is fine.
    fn has_any_legal_move(&self, color: Color) -> bool {
        let mut probe = *self;
        let origins: Vec<(Square, Piece)> = probe.board.piece_squares(color).collect();
        for (from, piece) in origins {
            for to in movegen::moves_from(&probe, from, CastlingGen::Include) {
                let record = probe.plan_move(from, to, piece);
                probe.apply(&record);
                let safe = !attack::is_king_in_check(&probe, color);
                probe.undo(&record);
                if safe {
                    return true;
                }
            }
        }
        false
    }

    /// Work out everything `apply` will touch, before touching it.
    fn plan_move(&self, from: Square, to: Square, piece: Piece) -> AppliedMove {
        // A pawn switching columns onto an empty square can only be the
        // en passant capture; the victim sits one row behind the
        // destination.
        let en_passant = piece.kind() == PieceKind::Pawn
            && from.col() != to.col()
            && !self.board.is_occupied(to);
        let captured = if en_passant {
            to.offset(-piece.color().pawn_step(), 0)
                .and_then(|sq| self.board.piece_at(sq).map(|victim| (sq, victim)))
        } else {
            self.board.piece_at(to).map(|victim| (to, victim))
        };

        AppliedMove {
            from,
            to,
            piece,
            captured,
            rook: castle_rook_shift(piece, from, to),
        }
    }

    fn apply(&mut self, record: &AppliedMove) {
        self.board.take(record.from);
        if let Some((sq, _)) = record.captured {
            self.board.take(sq);
        }
        self.board.place(record.to, record.piece);
        if let Some((rook_from, rook_to)) = record.rook
            && let Some(rook) = self.board.take(rook_from)
        {
            self.board.place(rook_to, rook);
        }
    }

    /// Exact inverse of [`Game::apply`], in reverse order.
    fn undo(&mut self, record: &AppliedMove) {
        if let Some((rook_from, rook_to)) = record.rook
            && let Some(rook) = self.board.take(rook_to)
        {
            self.board.place(rook_from, rook);
        }
        self.board.take(record.to);
        if let Some((sq, victim)) = record.captured {
            self.board.place(sq, victim);
        }
        self.board.place(record.from, record.piece);
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

/// The rook relocation implied by a castling king move, if this is one.
///
/// A king stepping two columns from its home square is a castle;
/// nothing else relocates a rook.
fn castle_rook_shift(piece: Piece, from: Square, to: Square) -> Option<(Square, Square)> {
    if piece.kind() != PieceKind::King {
        return None;
    }
    let row = piece.color().home_row();
    if from != Square::new(row, 4) || to.row() != row {
        return None;
    }
    match to.col() {
        6 => Some((Square::new(row, 7), Square::new(row, 5))),
        2 => Some((Square::new(row, 0), Square::new(row, 3))),
        _ => None,
    }
}
