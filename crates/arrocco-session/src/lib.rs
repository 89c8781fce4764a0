//! Console front end for arrocco.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::SessionError;
pub use session::Session;
