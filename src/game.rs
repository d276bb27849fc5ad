use crate::board::{Board, GameOutcome, Side};
use crate::error::GameError;
use crate::players::Agent;
use std::fmt::Display;
use std::io::Write;
use tracing::{info, instrument};

/// Alternates two agents on one board until the game ends.
///
/// `first` plays [`Side::FIRST`], `second` plays its opponent.
pub struct GameLoop<'a, B: Board> {
    first: &'a mut dyn Agent<B>,
    second: &'a mut dyn Agent<B>,
}

impl<'a, B: Board + Display> GameLoop<'a, B> {
    /// Seats `first` and `second`.
    pub fn new(first: &'a mut dyn Agent<B>, second: &'a mut dyn Agent<B>) -> Self {
        Self { first, second }
    }

    /// Plays `board` to the end, rendering it to `out` before every move and once at the end.
    ///
    /// Moves that are not in [`Board::available_moves`] are rejected with
    /// [`GameError::IllegalMove`] instead of being applied.
    #[instrument(
        level = "info",
        skip_all,
        fields(first = self.first.name(), second = self.second.name())
    )]
    pub fn run<W: Write>(
        &mut self,
        board: &mut B,
        out: &mut W,
    ) -> Result<GameOutcome<B::Player>, GameError> {
        let mut player = B::Player::FIRST;
        loop {
            writeln!(out, "{board}\n")?;
            let outcome = board.outcome();
            if outcome != GameOutcome::InProgress {
                info!(?outcome, "game over");
                return Ok(outcome);
            }

            let agent = if player == B::Player::FIRST {
                &mut *self.first
            } else {
                &mut *self.second
            };
            let b_move = agent.choose_move(board)?;
            if !board.available_moves().contains(&b_move) {
                return Err(GameError::IllegalMove {
                    agent: agent.name().to_string(),
                    mv: format!("{b_move:?}"),
                });
            }

            info!(agent = agent.name(), ?player, ?b_move, "move played");
            board.make_move(b_move, player);
            player = player.opponent();
        }
    }
}
