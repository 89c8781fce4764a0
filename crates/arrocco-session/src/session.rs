//! Interactive console session driving a game of chess.
//!
//! The session owns the turn order: it refuses to move the side whose
//! turn it is not, tracks a pending promotion, and locks the board once
//! a game ends. All replies come back as printable lines, so the whole
//! loop is testable without a terminal.

use std::io::{self, BufRead};

use tracing::{debug, info, warn};

use arrocco_core::{Color, Game, PieceKind, PromotionError, Square, is_king_in_check};

use crate::command::{Command, parse_command};
use crate::error::SessionError;

/// Where the session stands between input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    /// Waiting for the side to move.
    AwaitingMove,
    /// A pawn reached its final row; waiting for the same player to
    /// pick the promotion kind for this square.
    AwaitingPromotion(Square),
    /// Checkmate or stalemate was reached; only `reset` revives play.
    GameOver,
}

/// An interactive two-player chess session over stdin and stdout.
pub struct Session {
    game: Game,
    to_move: Color,
    state: SessionState,
    finished: bool,
}

impl Session {
    /// Create a session with a fresh game, White to move.
    pub fn new() -> Session {
        Session {
            game: Game::new(),
            to_move: Color::White,
            state: SessionState::AwaitingMove,
            finished: false,
        }
    }

    /// Read lines from stdin until `quit` or the input closes.
    pub fn run(mut self) -> Result<(), SessionError> {
        info!("session open");
        println!("arrocco: two players, one board");
        println!("{}", self.game.board().pretty());
        println!("{} to move (try `help`)", self.to_move);

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            for reply in self.handle_line(&line) {
                println!("{reply}");
            }
            if self.finished {
                break;
            }
        }
        info!("session closed");
        Ok(())
    }

    /// Process one line of input and return the lines to print.
    ///
    /// This is the whole session behind a pure seam; [`Session::run`]
    /// only adds the stdin loop around it.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            debug!(cmd = %trimmed, "received command");
        }

        if let SessionState::AwaitingPromotion(square) = self.state {
            return self.promotion_reply(square, line);
        }

        match parse_command(line) {
            Ok(Command::Move { from, to }) => self.try_move(from, to),
            Ok(Command::Moves(square)) => self.list_moves(square),
            Ok(Command::Board) => vec![self.game.board().pretty().to_string()],
            Ok(Command::Reset) => self.reset(),
            Ok(Command::Help) => help_text(),
            Ok(Command::Quit) => {
                self.finished = true;
                vec!["goodbye".to_string()]
            }
            Ok(Command::Unknown(input)) if input.is_empty() => Vec::new(),
            Ok(Command::Unknown(input)) => {
                warn!(%input, "unknown command");
                vec![format!("unknown command {input:?}, try `help`")]
            }
            Err(err) => {
                warn!(error = %err, "command parse error");
                vec![err.to_string()]
            }
        }
    }

    /// True once `quit` has been processed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn try_move(&mut self, from: Square, to: Square) -> Vec<String> {
        if self.state == SessionState::GameOver {
            warn!("move received after game over, ignoring");
            return vec!["the game is over, `reset` to play again".to_string()];
        }

        match self.game.board().piece_at(from) {
            None => return vec![format!("no piece on {from}")],
            Some(piece) if piece.color() != self.to_move => {
                return vec![format!("it is {}'s turn", self.to_move)];
            }
            Some(_) => {}
        }

        let result = self.game.attempt_move(from, to);
        if result.denied_self_check {
            return vec!["that would leave your king in check".to_string()];
        }
        if !result.performed {
            return vec![format!("{from} to {to} is not a move this piece can make")];
        }

        debug!(%from, %to, mover = %self.to_move, "move accepted");
        let mover = self.to_move;
        let mut replies = vec![self.game.board().pretty().to_string()];

        if result.opponent_checkmate {
            self.state = SessionState::GameOver;
            info!(winner = %mover, "game over");
            replies.push(format!("checkmate, {mover} wins"));
            return replies;
        }
        if result.opponent_stalemate {
            self.state = SessionState::GameOver;
            info!("game over, stalemate");
            replies.push("stalemate, nobody wins".to_string());
            return replies;
        }

        if let Some(square) = result.promotion_square {
            // Same player finishes the move; the turn passes afterwards.
            self.state = SessionState::AwaitingPromotion(square);
            replies.push(format!(
                "promote the pawn on {square}: queen, rook, bishop, or knight?"
            ));
            return replies;
        }

        self.to_move = mover.flip();
        if result.opponent_in_check {
            replies.push(format!("{} is in check", self.to_move));
        }
        replies.push(format!("{} to move", self.to_move));
        replies
    }

    fn promotion_reply(&mut self, square: Square, line: &str) -> Vec<String> {
        let Some(kind) = parse_promotion_kind(line) else {
            return vec!["pick one of queen, rook, bishop, or knight".to_string()];
        };

        match self.game.promote_pawn(square, kind) {
            Ok(()) => {
                info!(%square, %kind, "promotion chosen");
                self.state = SessionState::AwaitingMove;
                self.to_move = self.to_move.flip();

                let mut replies = vec![self.game.board().pretty().to_string()];
                if is_king_in_check(&self.game, self.to_move) {
                    replies.push(format!("{} is in check", self.to_move));
                }
                replies.push(format!("{} to move", self.to_move));
                replies
            }
            Err(err @ PromotionError::DisallowedKind { .. }) => {
                vec![
                    err.to_string(),
                    "pick one of queen, rook, bishop, or knight".to_string(),
                ]
            }
            // The session only ever asks about the square an accepted
            // move just reported, so these mean the state went bad;
            // drop back to normal input rather than looping forever.
            Err(err) => {
                self.state = SessionState::AwaitingMove;
                vec![err.to_string()]
            }
        }
    }

    fn list_moves(&self, square: Square) -> Vec<String> {
        if self.game.board().piece_at(square).is_none() {
            return vec![format!("no piece on {square}")];
        }
        let moves = self.game.legal_moves_from(square);
        if moves.is_empty() {
            return vec![format!("{square} has no legal moves")];
        }
        let list: Vec<String> = moves.iter().map(Square::to_string).collect();
        vec![format!("{square}: {}", list.join(" "))]
    }

    fn reset(&mut self) -> Vec<String> {
        info!("game reset");
        self.game.reset();
        self.to_move = Color::White;
        self.state = SessionState::AwaitingMove;
        vec![
            self.game.board().pretty().to_string(),
            format!("{} to move", self.to_move),
        ]
    }
}

impl Default for Session {
    fn default() -> Session {
        Session::new()
    }
}

/// Interpret a promotion reply: a full kind name or its single letter.
fn parse_promotion_kind(line: &str) -> Option<PieceKind> {
    let token = line.trim().to_ascii_lowercase();
    match token.as_str() {
        "queen" => Some(PieceKind::Queen),
        "rook" => Some(PieceKind::Rook),
        "bishop" => Some(PieceKind::Bishop),
        "knight" => Some(PieceKind::Knight),
        "king" => Some(PieceKind::King),
        "pawn" => Some(PieceKind::Pawn),
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => PieceKind::from_letter(letter),
                _ => None,
            }
        }
    }
}

fn help_text() -> Vec<String> {
    vec![
        "commands:".to_string(),
        "  e2 e4 (or e2e4)   move the piece on e2 to e4".to_string(),
        "  moves <square>    list that piece's legal moves".to_string(),
        "  board             print the position".to_string(),
        "  reset             start a new game".to_string(),
        "  quit              leave".to_string(),
    ]
}
