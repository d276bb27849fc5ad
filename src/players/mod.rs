//! Agents that choose moves, and the trait they share.

mod console;
mod random;

pub use console::{ConsolePlayer, parse_move};
pub use random::RandomPlayer;

use crate::board::Board;
use crate::error::GameError;

/// Anything that can pick the next move for a board.
///
/// The board is borrowed mutably so that searching agents can explore it in
/// place; every implementation must leave it as it found it.
pub trait Agent<B: Board> {
    /// Returns the move to play on `board`.
    fn choose_move(&mut self, board: &mut B) -> Result<B::Move, GameError>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}
