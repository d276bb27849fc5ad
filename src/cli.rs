use crate::boards::tic_tac_toe::Mark;
use clap::{Parser, ValueEnum};

/// Play Tic-Tac-Toe against an exhaustive minimax search
#[derive(Parser, Debug)]
#[command(name = "minimax-ttt")]
#[command(about = "Play Tic-Tac-Toe against an exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Mark played by the computer (X moves first)
    #[arg(long, value_enum, default_value_t = MarkArg::X)]
    pub computer: MarkArg,

    /// Who plays against the computer
    #[arg(long, value_enum, default_value_t = Opponent::Human)]
    pub opponent: Opponent,

    /// Seed for the random opponent; unseeded games are not reproducible
    #[arg(long)]
    pub seed: Option<u64>,
}

/// A mark as typed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Available opponents for the computer.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    /// Moves typed at the console
    Human,
    /// Uniformly random legal moves
    Random,
    /// A second minimax search
    Minimax,
}

#[cfg(test)]
mod tests {
    use crate::boards::tic_tac_toe::Mark;
    use crate::cli::{Cli, MarkArg, Opponent};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_computer_x_against_a_human() {
        let cli = Cli::parse_from(["minimax-ttt"]);
        assert_eq!(cli.computer, MarkArg::X);
        assert_eq!(cli.opponent, Opponent::Human);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_every_flag() {
        let cli = Cli::parse_from([
            "minimax-ttt",
            "--computer",
            "o",
            "--opponent",
            "random",
            "--seed",
            "17",
        ]);
        assert_eq!(Mark::from(cli.computer), Mark::O);
        assert_eq!(cli.opponent, Opponent::Random);
        assert_eq!(cli.seed, Some(17));
    }
}
