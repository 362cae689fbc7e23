//! scratch_tictactoe - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use scratch_tui::{
    init_file_logging, init_stderr_logging, parse_moves, run_replay, run_tui, Cli, CliCommand,
    Settings,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        CliCommand::Play { log_file } => {
            let settings = match log_file {
                Some(path) => settings.with_log_file(path),
                None => settings,
            };
            init_file_logging(settings.log_file(), settings.log_filter())?;
            info!(config = %cli.config.display(), "Starting scratch_tictactoe");
            run_tui(settings).await
        }
        CliCommand::Replay { moves, json } => {
            init_stderr_logging(settings.log_filter());
            let indices = parse_moves(&moves)?;
            let mut stdout = std::io::stdout().lock();
            run_replay(&indices, json, &mut stdout)?;
            Ok(())
        }
    }
}
