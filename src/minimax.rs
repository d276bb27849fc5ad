use crate::board::{Board, Side};
use crate::error::{GameError, SearchError};
use crate::players::Agent;
use tracing::{debug, instrument};

/// Value of a position from the searching side's point of view.
pub type Score = i8;

/// The searching side has completed a line.
pub const WIN: Score = 1;
/// The board filled up without a winner.
pub const DRAW: Score = 0;
/// The opponent has completed a line.
pub const LOSS: Score = -1;

/// Exhaustive minimax search.
///
/// Every reachable position below the current one is visited, with no pruning
/// and no caching. The board passed in is mutated in place while searching and
/// restored before any method returns.
#[derive(Debug, Clone)]
pub struct Minimax<P: Side> {
    player: P,
    evaluated_states: u64,
}

impl<P: Side> Minimax<P> {
    /// Creates a search that plays as `player`.
    pub fn new(player: P) -> Self {
        Self {
            player,
            evaluated_states: 0,
        }
    }

    /// Returns the side this search plays as.
    pub fn player(&self) -> P {
        self.player
    }

    /// Returns how many positions have been evaluated over the lifetime of this instance.
    pub fn evaluated_states(&self) -> u64 {
        self.evaluated_states
    }

    /// Returns the move with the best guaranteed outcome.
    ///
    /// Moves are tried in the order of [`Board::available_moves`] and only a strictly
    /// better score replaces the current choice, so ties go to the earliest move.
    /// Fails with [`SearchError::TerminalPosition`] if the game is already over.
    #[instrument(level = "debug", skip_all, fields(player = ?self.player))]
    pub fn best_move<B>(&mut self, board: &mut B) -> Result<B::Move, SearchError>
    where
        B: Board<Player = P>,
    {
        let evaluated_before = self.evaluated_states;
        let mut best: Option<(B::Move, Score)> = None;
        for (b_move, score) in self.score_moves(board)? {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((b_move, score));
            }
        }

        let (b_move, score) = best.ok_or(SearchError::TerminalPosition)?;
        debug!(
            ?b_move,
            score,
            evaluated = self.evaluated_states - evaluated_before,
            "best move found"
        );
        Ok(b_move)
    }

    /// Scores every available move, in the order of [`Board::available_moves`].
    pub fn score_moves<B>(&mut self, board: &mut B) -> Result<Vec<(B::Move, Score)>, SearchError>
    where
        B: Board<Player = P>,
    {
        if board.is_terminal() {
            return Err(SearchError::TerminalPosition);
        }

        let available_moves = board.available_moves();
        let mut scores = Vec::with_capacity(available_moves.len());
        for b_move in available_moves {
            board.make_move(b_move, self.player);
            let score = self.evaluate(board, false);
            board.undo_move(b_move);
            scores.push((b_move, score));
        }
        Ok(scores)
    }

    /// Scores `board`, with `is_maximizing` telling whether it is this side's turn.
    fn evaluate<B>(&mut self, board: &mut B, is_maximizing: bool) -> Score
    where
        B: Board<Player = P>,
    {
        self.evaluated_states += 1;
        if board.is_winner(self.player) {
            return WIN;
        }
        if board.is_winner(self.player.opponent()) {
            return LOSS;
        }
        if board.is_full() {
            return DRAW;
        }

        let (mover, mut best_value) = if is_maximizing {
            (self.player, Score::MIN)
        } else {
            (self.player.opponent(), Score::MAX)
        };
        for b_move in board.available_moves() {
            board.make_move(b_move, mover);
            let value = self.evaluate(board, !is_maximizing);
            board.undo_move(b_move);
            best_value = if is_maximizing {
                best_value.max(value)
            } else {
                best_value.min(value)
            };
        }
        best_value
    }
}

impl<B, P> Agent<B> for Minimax<P>
where
    B: Board<Player = P>,
    P: Side,
{
    fn choose_move(&mut self, board: &mut B) -> Result<B::Move, GameError> {
        Ok(self.best_move(board)?)
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome, Side};
    use crate::boards::tic_tac_toe::{Mark, Move, TicTacToeBoard};
    use crate::error::SearchError;
    use crate::minimax::{DRAW, LOSS, Minimax, WIN};

    fn board(glyphs: &str) -> TicTacToeBoard {
        glyphs.parse().unwrap()
    }

    /// Plays `ai` against every possible sequence of opponent replies and fails on any loss.
    fn assert_never_loses(ai: &mut Minimax<Mark>, board: &mut TicTacToeBoard, to_move: Mark) {
        match board.outcome() {
            GameOutcome::Winner(mark) => {
                assert_eq!(mark, ai.player(), "lost on\n{board}");
                return;
            }
            GameOutcome::Draw => return,
            GameOutcome::InProgress => {}
        }

        if to_move == ai.player() {
            let b_move = ai.best_move(board).unwrap();
            board.make_move(b_move, to_move);
            assert_never_loses(ai, board, to_move.opponent());
            board.undo_move(b_move);
        } else {
            for b_move in board.available_moves() {
                board.make_move(b_move, to_move);
                assert_never_loses(ai, board, to_move.opponent());
                board.undo_move(b_move);
            }
        }
    }

    #[test]
    fn test1_empty_board_picks_first_cell() {
        // arrange
        let mut board = TicTacToeBoard::default();
        let mut ai = Minimax::new(Mark::X);

        // act
        let best = ai.best_move(&mut board).unwrap();

        // assert
        assert_eq!(best, Move::new(0));
        assert_eq!(board, TicTacToeBoard::default());
        assert!(ai.evaluated_states() > 0);
    }

    #[test]
    fn test2_takes_immediate_win() {
        // arrange
        let mut board = board("XX- OO- ---");
        let mut ai = Minimax::new(Mark::X);

        // act
        let best = ai.best_move(&mut board).unwrap();

        // assert
        assert_eq!(best, Move::new(2));
    }

    #[test]
    fn test3_blocks_immediate_threat() {
        // arrange
        let mut board = board("XX- -O- ---");
        let mut ai = Minimax::new(Mark::O);

        // act
        let best = ai.best_move(&mut board).unwrap();

        // assert
        assert_eq!(best, Move::new(2));
    }

    #[test]
    fn test4_scores_every_available_move() {
        // arrange
        let mut board = board("XX- -O- ---");
        let mut ai = Minimax::new(Mark::O);

        // act
        let scores = ai.score_moves(&mut board).unwrap();

        // assert
        let moves: Vec<u8> = scores.iter().map(|(m, _)| m.position()).collect();
        assert_eq!(moves, vec![2, 3, 5, 6, 7, 8]);
        assert_eq!(scores[0].1, DRAW);
        assert!(scores[1..].iter().all(|&(_, score)| score == LOSS));
    }

    #[test]
    fn test5_winning_move_scores_win() {
        let mut board = board("XX- OO- ---");
        let mut ai = Minimax::new(Mark::X);
        let scores = ai.score_moves(&mut board).unwrap();
        assert_eq!(scores[0], (Move::new(2), WIN));
    }

    #[test]
    fn test6_is_deterministic() {
        // arrange
        let mut board = board("X-- -O- ---");
        let mut ai = Minimax::new(Mark::X);

        // act
        let first = ai.best_move(&mut board).unwrap();
        let after_first = ai.evaluated_states();
        let second = ai.best_move(&mut board).unwrap();
        let after_second = ai.evaluated_states();

        // assert
        assert_eq!(first, second);
        assert_eq!(after_first * 2, after_second);
        assert_eq!(board, self::board("X-- -O- ---"));
    }

    #[test]
    fn test7_counts_every_visited_node() {
        // One empty cell: a single child that fills the board.
        let mut board = board("XOX XOO OX-");
        let mut ai = Minimax::new(Mark::X);
        let best = ai.best_move(&mut board).unwrap();
        assert_eq!(best, Move::new(8));
        assert_eq!(ai.evaluated_states(), 1);
    }

    #[test]
    fn test8_terminal_position_is_an_error() {
        let mut ai = Minimax::new(Mark::X);
        let mut full = board("XOX XOO OXX");
        assert_eq!(ai.best_move(&mut full), Err(SearchError::TerminalPosition));
        let mut won = board("XXX OO- ---");
        assert_eq!(ai.best_move(&mut won), Err(SearchError::TerminalPosition));
        assert_eq!(ai.evaluated_states(), 0);
    }

    #[test]
    fn test9_first_mover_never_loses() {
        let mut ai = Minimax::new(Mark::X);
        let mut board = TicTacToeBoard::default();
        assert_never_loses(&mut ai, &mut board, Mark::X);
        assert_eq!(board, TicTacToeBoard::default());
    }

    #[test]
    fn test10_second_mover_never_loses() {
        let mut ai = Minimax::new(Mark::O);
        let mut board = TicTacToeBoard::default();
        assert_never_loses(&mut ai, &mut board, Mark::X);
    }
}
