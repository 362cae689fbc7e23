//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Input**: crossterm key and mouse events become [`Command`]s
//! - **App**: owns the single [`scratch_engine::Engine`] and applies commands
//! - **Renderer**: [`TerminalRenderer`] observes the engine and keeps a view
//!   model plus deferred cosmetic effects
//! - **UI**: stateless ratatui drawing of the view model
//! - **Replay**: headless move-list playback for scripting

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod effects;
mod input;
mod logging;
mod renderer;
mod replay;
mod settings;
mod strike;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command as CliCommand};
pub use effects::{Effect, Effects};
pub use input::{move_cursor, translate, Command, Direction};
pub use logging::{init_file as init_file_logging, init_stderr as init_stderr_logging};
pub use renderer::{BoardView, Strike, TerminalRenderer};
pub use replay::{parse_moves, run as run_replay};
pub use settings::{ConfigError, Settings};
pub use strike::{Point, StrikeLine, StrikeWidget};
pub use terminal::run as run_tui;
pub use ui::{draw, ScreenLayout};
