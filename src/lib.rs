//! Tic-Tac-Toe played by an exhaustive minimax search.
//!
//! The search explores every move sequence from the current position, mutating a
//! single board in place and undoing each move on the way back up. It has no
//! pruning and no caching: a 3x3 board is small enough to search completely.
//!
//! # Example
//!
//! ```rust
//! use minimax_ttt::boards::tic_tac_toe::{Mark, Move, TicTacToeBoard};
//! use minimax_ttt::minimax::Minimax;
//!
//! // X to move with two in a row on top
//! let mut board: TicTacToeBoard = "XX- OO- ---".parse().unwrap();
//!
//! let mut ai = Minimax::new(Mark::X);
//! let best_move = ai.best_move(&mut board).unwrap();
//!
//! assert_eq!(best_move, Move::new(2));
//! println!("Evaluated {} positions", ai.evaluated_states());
//! ```

/// Contains the `Board` and `Side` traits and the `GameOutcome` enum.
pub mod board;
/// Contains pre-made implementations of the `Board` trait.
pub mod boards;
/// Command-line arguments of the `minimax-ttt` binary.
pub mod cli;
/// Error types.
pub mod error;
/// The loop that alternates two agents until a game ends.
pub mod game;
/// The core module of the library, containing the `Minimax` search.
pub mod minimax;
/// Agents that pick moves: console humans and random movers.
pub mod players;
/// Contains traits and implementations for random number generation.
pub mod random;
