use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Bad FEN, square or move text.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// Not pseudo-legal, missing castling right, attacked castling path, or king left in check.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// A state correct upstream legality makes unreachable, such as a king capture.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl ChessError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ChessError::MalformedInput(message.into())
    }

    pub(crate) fn illegal(message: impl Into<String>) -> Self {
        ChessError::IllegalMove(message.into())
    }
}
