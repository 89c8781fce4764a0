//! Console command parsing.

use arrocco_core::Square;

use crate::error::SessionError;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2 e4` or `e2e4`: attempt a move.
    Move {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },
    /// `moves e2`: list the legal destinations from a square.
    Moves(Square),
    /// `board`: print the current position.
    Board,
    /// `reset`: throw the game away and start over.
    Reset,
    /// `help`: list the commands.
    Help,
    /// `quit` or `exit`: end the session.
    Quit,
    /// Anything unrecognized, echoed back in the reply.
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
///
/// Moves come as two squares, either space-separated or glued together.
/// A blank line parses to an empty [`Command::Unknown`], which the
/// session ignores.
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Ok(Command::Unknown(String::new())),
        ["board"] => Ok(Command::Board),
        ["reset"] => Ok(Command::Reset),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["moves"] => Err(SessionError::MissingSquare),
        ["moves", square] => Ok(Command::Moves(parse_square(square)?)),
        [pair] if pair.len() == 4 => {
            let (from, to) = pair.split_at(2);
            match (Square::from_algebraic(from), Square::from_algebraic(to)) {
                (Some(from), Some(to)) => Ok(Command::Move { from, to }),
                _ => Ok(Command::Unknown((*pair).to_string())),
            }
        }
        [from, to] => Ok(Command::Move {
            from: parse_square(from)?,
            to: parse_square(to)?,
        }),
        _ => Ok(Command::Unknown(line.trim().to_string())),
    }
}

fn parse_square(token: &str) -> Result<Square, SessionError> {
    Square::from_algebraic(token).ok_or_else(|| SessionError::BadSquare {
        token: token.to_string(),
    })
}
