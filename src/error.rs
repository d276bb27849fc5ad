//! Error types shared by the search, the agents and the game loop.

use derive_more::{Display, Error};

/// Why a line of console input could not be turned into a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The input was not a non-negative integer.
    #[display("Invalid input. Enter a number between 0 and 8.")]
    NotANumber {
        /// The offending input, trimmed.
        input: String,
    },
    /// The number does not name an empty cell.
    #[display("Invalid move. Try again.")]
    Unavailable {
        /// The requested cell, saturated if it does not fit.
        position: i128,
    },
}

/// Errors raised by move-choosing code when no move can be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// The game is already over, so there is nothing to choose.
    #[display("no move can be chosen: the position is terminal")]
    TerminalPosition,
}

/// Errors that end a game before it reaches an outcome.
#[derive(Debug, Display, Error)]
pub enum GameError {
    /// An agent could not pick a move.
    #[display("{_0}")]
    Search(#[error(source)] SearchError),
    /// An agent picked a move that is not in the legal move list.
    #[display("{agent} chose an unavailable move {mv}")]
    IllegalMove {
        /// Name of the offending agent.
        agent: String,
        /// The rejected move, formatted with `Debug`.
        mv: String,
    },
    /// The console reached end of input while waiting for a move.
    #[display("input closed before a move was entered")]
    InputClosed,
    /// Reading input or rendering the board failed.
    #[display("I/O error: {_0}")]
    Io(#[error(source)] std::io::Error),
}

impl From<SearchError> for GameError {
    fn from(err: SearchError) -> Self {
        Self::Search(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
