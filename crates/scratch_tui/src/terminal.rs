//! Terminal setup and the event loop.

use crate::app::App;
use crate::input;
use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Runs the terminal UI until the user quits.
pub async fn run(settings: Settings) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let res = match setup() {
        Ok(mut terminal) => event_loop(&mut terminal, &settings).await,
        Err(e) => Err(e),
    };
    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    let restored = restore(&mut io::stdout(), disable_raw_mode);
    res.and(restored.map_err(anyhow::Error::from))
}

fn setup() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves the alternate screen and raw mode. Every step runs; the first
/// failure is returned.
fn restore(
    out: &mut impl Write,
    disable_raw: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let raw = disable_raw();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    if let Err(e) = &raw {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = &screen {
        warn!(error = %e, "Failed to restore the screen");
    }
    raw.and(screen)
}

/// Forwards terminal events until the receiver is dropped.
fn spawn_input_reader(tx: mpsc::UnboundedSender<Event>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(true) => match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to read terminal event");
                        break;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    warn!(error = %e, "Failed to poll terminal events");
                    break;
                }
            }
        }
        debug!("Input reader stopped");
    })
}

#[instrument(skip_all)]
async fn event_loop(terminal: &mut Tui, settings: &Settings) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(event_tx);
    let mut ticker = tokio::time::interval(settings.tick_interval());
    let mut app = App::new(settings);

    let result = loop {
        if let Err(e) = terminal.draw(|f| app.draw(f)) {
            break Err(anyhow::Error::from(e));
        }

        tokio::select! {
            maybe_event = event_rx.recv() => match maybe_event {
                Some(ev) => {
                    if let Some(command) = input::translate(&ev) {
                        app.handle(command);
                    }
                }
                None => break Err(anyhow::anyhow!("Input channel closed")),
            },
            _ = ticker.tick() => app.tick(Instant::now()),
        }

        if app.should_quit() {
            break Ok(());
        }
    };

    drop(event_rx);
    if let Err(e) = reader.await {
        warn!(error = %e, "Input reader task failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_writes_screen_reset() {
        let mut out = Vec::new();
        restore(&mut out, || Ok(())).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b[?1049l"));
        assert!(text.contains("\x1b[?25h"));
    }

    #[test]
    fn test_restore_leaves_screen_when_raw_mode_fails() {
        let mut out = Vec::new();
        let err = restore(&mut out, || Err(io::Error::other("raw mode"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
        assert!(String::from_utf8(out).unwrap().contains("\x1b[?1049l"));
    }

    #[test]
    fn test_restore_disables_raw_mode_when_screen_fails() {
        let ran = Cell::new(false);
        let err = restore(&mut BrokenPipe, || {
            ran.set(true);
            Ok(())
        })
        .unwrap_err();
        assert!(ran.get());
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
