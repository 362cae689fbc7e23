//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "scratch_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults are used when it does not exist.
    #[arg(short, long, global = true, default_value = "scratch_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Log file, overriding the settings file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a move list to a fresh game and print the result
    Replay {
        /// 0-based cell indices separated by commas or spaces, e.g. "0,3,1,4,2"
        moves: String,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { log_file: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::try_parse_from(["scratch_tictactoe"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Play { log_file: None });
        assert_eq!(cli.config, PathBuf::from("scratch_tictactoe.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli =
            Cli::try_parse_from(["scratch_tictactoe", "replay", "0,3,1", "--json", "-c", "x.toml"])
                .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: "0,3,1".to_string(),
                json: true,
            })
        );
        assert_eq!(cli.config, PathBuf::from("x.toml"));
    }
}
