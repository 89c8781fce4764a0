//! Console session errors.

/// Errors from parsing console input or reading stdin.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A token where a board square was expected did not parse.
    #[error("not a board square: {token:?}")]
    BadSquare {
        /// The offending token.
        token: String,
    },

    /// `moves` was given without the square to query.
    #[error("moves needs a square, e.g. `moves e2`")]
    MissingSquare,

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::SessionError;

    #[test]
    fn display_messages() {
        let err = SessionError::BadSquare {
            token: "z9".to_string(),
        };
        assert_eq!(format!("{err}"), "not a board square: \"z9\"");
        assert_eq!(
            format!("{}", SessionError::MissingSquare),
            "moves needs a square, e.g. `moves e2`"
        );
    }
}
