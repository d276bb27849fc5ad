use super::Agent;
use crate::board::Board;
use crate::boards::tic_tac_toe::{Move, TicTacToeBoard};
use crate::error::{GameError, MoveError};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

const PROMPT: &str = "Enter your move (0-8): ";

/// Turns one line of input into a move that is currently available on `board`.
///
/// Any well-formed integer, however large, is a number; it is then rejected as
/// unavailable unless it names an empty cell.
pub fn parse_move(input: &str, board: &TicTacToeBoard) -> Result<Move, MoveError> {
    let input = input.trim();
    let position = match input.parse::<i128>() {
        Ok(position) => position,
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => i128::MAX,
            IntErrorKind::NegOverflow => i128::MIN,
            _ => {
                return Err(MoveError::NotANumber {
                    input: input.to_string(),
                });
            }
        },
    };

    board
        .available_moves()
        .into_iter()
        .find(|m| i128::from(m.position()) == position)
        .ok_or(MoveError::Unavailable { position })
}

/// A human typing cell numbers, one per line.
///
/// Bad input is reported on the writer and the prompt repeats until a legal
/// move is entered or the input ends.
pub struct ConsolePlayer<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a player that reads moves from `input` and writes prompts to `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Agent<TicTacToeBoard> for ConsolePlayer<R, W> {
    fn choose_move(&mut self, board: &mut TicTacToeBoard) -> Result<Move, GameError> {
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(GameError::InputClosed);
            }

            // Undecodable bytes become replacement characters and fail to parse.
            let line = String::from_utf8_lossy(&buf);
            match parse_move(&line, board) {
                Ok(b_move) => return Ok(b_move),
                Err(err) => {
                    debug!(player = %self.name, %err, "rejected input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
