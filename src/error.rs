//! Error types for deck and session operations.

use thiserror::Error;

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The deck has no cards left.
    #[error("the deck is empty")]
    Empty,
    /// More cards were requested than remain in the deck.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// Errors that can occur while parsing menu input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseOptionError {
    /// Input is not a menu option.
    #[error("unknown menu option `{0}`")]
    UnknownOption(String),
    /// Input is not a sort key.
    #[error("unknown sort key `{0}`")]
    UnknownSortKey(String),
}

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
