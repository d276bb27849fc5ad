use super::Agent;
use crate::board::Board;
use crate::error::{GameError, SearchError};
use crate::random::RandomGenerator;
use tracing::debug;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone, Default)]
pub struct RandomPlayer<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> RandomPlayer<K> {
    /// Creates a player drawing its moves from `random`.
    pub fn new(random: K) -> Self {
        Self { random }
    }
}

impl<B: Board, K: RandomGenerator> Agent<B> for RandomPlayer<K> {
    fn choose_move(&mut self, board: &mut B) -> Result<B::Move, GameError> {
        let available_moves = board.available_moves();
        let b_move = *self
            .random
            .choose(&available_moves)
            .ok_or(SearchError::TerminalPosition)?;
        debug!(?b_move, "random move chosen");
        Ok(b_move)
    }

    fn name(&self) -> &str {
        "random"
    }
}
