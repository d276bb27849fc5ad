use anyhow::Result;
use clap::Parser;
use minimax_ttt::board::Side;
use minimax_ttt::boards::tic_tac_toe::{Mark, TicTacToeBoard};
use minimax_ttt::cli::{Cli, Opponent};
use minimax_ttt::game::GameLoop;
use minimax_ttt::minimax::Minimax;
use minimax_ttt::players::{Agent, ConsolePlayer, RandomPlayer};
use minimax_ttt::random::{SeededRandomGenerator, StandardRandomGenerator};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let computer_mark = Mark::from(cli.computer);
    let mut computer = Minimax::new(computer_mark);
    let mut opponent: Box<dyn Agent<TicTacToeBoard>> = match (cli.opponent, cli.seed) {
        (Opponent::Human, _) => Box::new(ConsolePlayer::new(
            "human",
            io::stdin().lock(),
            io::stdout(),
        )),
        (Opponent::Random, Some(seed)) => {
            Box::new(RandomPlayer::new(SeededRandomGenerator::new(seed)))
        }
        (Opponent::Random, None) => Box::new(RandomPlayer::new(StandardRandomGenerator)),
        (Opponent::Minimax, _) => Box::new(Minimax::new(computer_mark.opponent())),
    };
    info!(computer = %computer_mark, opponent = opponent.name(), "starting game");

    let mut board = TicTacToeBoard::default();
    let outcome = if computer_mark == Mark::FIRST {
        GameLoop::<TicTacToeBoard>::new(&mut computer, opponent.as_mut())
            .run(&mut board, &mut io::stdout())?
    } else {
        GameLoop::<TicTacToeBoard>::new(opponent.as_mut(), &mut computer)
            .run(&mut board, &mut io::stdout())?
    };

    println!("{outcome}");
    info!(evaluated_states = computer.evaluated_states(), "game finished");
    Ok(())
}
