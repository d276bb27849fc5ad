use crate::board::{Board, Side};
use derive_more::{Display, Error};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

const CELLS: usize = 9;

const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A mark placed on the board. `X` always moves first.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Display)]
pub enum Mark {
    /// Moves first.
    X,
    /// Moves second.
    O,
}

impl Side for Mark {
    const FIRST: Self = Mark::X;

    fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell index in row-major order: `0 1 2` is the top row, `6 7 8` the bottom one.
///
/// The position is not validated here; moves are obtained from
/// [`TicTacToeBoard::available_moves`] or checked by the caller.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Display)]
#[display("{position}")]
pub struct Move {
    position: u8,
}

impl Move {
    /// Creates a move for the cell at `position`; `0..=8` is expected.
    pub const fn new(position: u8) -> Self {
        Self { position }
    }

    /// Returns the targeted cell index.
    pub const fn position(self) -> u8 {
        self.position
    }

    const fn index(self) -> usize {
        self.position as usize
    }
}

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The board is represented by a 9-element array, where each element corresponds to a cell.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TicTacToeBoard {
    field: [Option<Mark>; CELLS],
}

impl TicTacToeBoard {
    /// Returns the content of the cell targeted by `b_move`.
    pub fn cell(&self, b_move: Move) -> Option<Mark> {
        self.field[b_move.index()]
    }

    /// Returns the number of marks on the board.
    pub fn occupied(&self) -> usize {
        self.field.iter().filter(|x| x.is_some()).count()
    }
}

impl Board for TicTacToeBoard {
    type Move = Move;
    type Player = Mark;

    fn make_move(&mut self, b_move: Move, player: Mark) {
        let cell = &mut self.field[b_move.index()];
        if let Some(owner) = *cell {
            trace!(%b_move, %owner, %player, "ignoring move onto an occupied cell");
        } else {
            *cell = Some(player);
        }
    }

    fn undo_move(&mut self, b_move: Move) {
        let cell = &mut self.field[b_move.index()];
        debug_assert!(cell.is_some(), "undoing move {b_move} on an empty cell");
        *cell = None;
    }

    fn available_moves(&self) -> Vec<Move> {
        self.field
            .iter()
            .enumerate()
            .filter(|(_, x)| x.is_none())
            .map(|(i, _)| Move::new(i as u8))
            .collect()
    }

    fn is_winner(&self, player: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.field[i] == Some(player)))
    }

    fn is_full(&self) -> bool {
        self.field.iter().all(|x| x.is_some())
    }
}

impl fmt::Display for TicTacToeBoard {
    /// Three rows of three space-separated glyphs, `-` marking an empty cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.field.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let glyphs: Vec<&str> = cells
                .iter()
                .map(|cell| match cell {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => "-",
                })
                .collect();
            write!(f, "{}", glyphs.join(" "))?;
        }
        Ok(())
    }
}

/// Errors produced when parsing a board from its glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The input did not hold exactly nine glyphs.
    #[display("expected 9 cells, found {found}")]
    WrongLength { found: usize },
    /// A glyph other than `X`, `O` or `-`.
    #[display("unknown cell glyph {glyph:?}")]
    UnknownGlyph { glyph: char },
}

impl FromStr for TicTacToeBoard {
    type Err = BoardParseError;

    /// Parses nine `X`, `O` or `-` glyphs in row-major order; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != CELLS {
            return Err(BoardParseError::WrongLength {
                found: glyphs.len(),
            });
        }

        let mut board = TicTacToeBoard::default();
        for (cell, glyph) in board.field.iter_mut().zip(glyphs) {
            *cell = match glyph {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '-' => None,
                glyph => return Err(BoardParseError::UnknownGlyph { glyph }),
            };
        }
        Ok(board)
    }
}
