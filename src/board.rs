use std::fmt::{self, Debug, Display};

/// A participant in a two-player game, as seen by the search.
///
/// The set of sides is closed: every side has exactly one opponent, and
/// `opponent` applied twice returns the original side.
pub trait Side: Copy + Eq + Debug {
    /// The side that makes the first move of a game.
    const FIRST: Self;

    /// Returns the other side.
    fn opponent(self) -> Self;
}

/// The central trait of the library, defining the interface for a game state.
///
/// The search works by mutating a single board in place: it applies a move,
/// recurses, and undoes the same move before trying the next one. Implementors
/// therefore have to make `undo_move` the exact inverse of a `make_move` that
/// was applied to an empty cell.
pub trait Board {
    /// The type representing a move in the game.
    type Move: Copy + Eq + Debug;

    /// The type of the marks placed on the board.
    type Player: Side;

    /// Places `player`'s mark for `b_move`.
    ///
    /// Occupied targets are left untouched. Callers are expected to only pass
    /// moves taken from [`Board::available_moves`].
    fn make_move(&mut self, b_move: Self::Move, player: Self::Player);

    /// Clears the target of `b_move`, whatever it currently holds.
    fn undo_move(&mut self, b_move: Self::Move);

    /// Returns every legal move from the current state, in a stable order.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// Returns `true` if `player` has completed a winning line.
    fn is_winner(&self, player: Self::Player) -> bool;

    /// Returns `true` if no move is left.
    fn is_full(&self) -> bool;

    /// Returns the current outcome of the game.
    fn outcome(&self) -> GameOutcome<Self::Player> {
        let first = Self::Player::FIRST;
        if self.is_winner(first) {
            GameOutcome::Winner(first)
        } else if self.is_winner(first.opponent()) {
            GameOutcome::Winner(first.opponent())
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Returns `true` once either side has won or the board is full.
    fn is_terminal(&self) -> bool {
        self.outcome() != GameOutcome::InProgress
    }
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome<P> {
    /// The game is still ongoing.
    InProgress,
    /// The given side completed a line.
    Winner(P),
    /// The board filled up without a winner.
    Draw,
}

impl<P: Display> Display for GameOutcome<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "Game in progress"),
            GameOutcome::Winner(player) => write!(f, "Player {player} wins!"),
            GameOutcome::Draw => write!(f, "It's a tie!"),
        }
    }
}
