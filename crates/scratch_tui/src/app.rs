//! Application state and logic.

use crate::input::{move_cursor, Command};
use crate::renderer::{BoardView, TerminalRenderer};
use crate::settings::Settings;
use crate::ui::{self, ScreenLayout};
use ratatui::{layout::Rect, Frame};
use scratch_engine::{Engine, MoveOutcome, Position};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the single engine instance; commands are applied one at a time.
pub struct App {
    engine: Engine,
    renderer: TerminalRenderer,
    cursor: Position,
    layout: ScreenLayout,
    strike_extension: f64,
    should_quit: bool,
}

impl App {
    /// Creates the application and starts the first game.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let mut renderer = TerminalRenderer::new(settings);
        let mut engine = Engine::new();
        engine.initialize(&mut renderer);
        Self {
            engine,
            renderer,
            cursor: Position::Center,
            layout: ScreenLayout::new(Rect::default()),
            strike_extension: *settings.strike_extension(),
            should_quit: false,
        }
    }

    /// The engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The current view model.
    pub fn view(&self) -> &BoardView {
        self.renderer.view()
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Recomputes the layout used for mouse hit-testing.
    pub fn resize(&mut self, area: Rect) {
        self.layout = ScreenLayout::new(area);
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Activate(index) => self.activate(index),
            Command::ActivateCursor => self.activate(self.cursor.to_index()),
            Command::Click { column, row } => match self.layout.cell_at(column, row) {
                Some(index) => {
                    if let Some(pos) = Position::from_index(index) {
                        self.cursor = pos;
                    }
                    self.activate(index);
                }
                None => debug!(column, row, "Click outside the board"),
            },
            Command::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Command::Restart => {
                info!("Restarting game");
                self.engine.initialize(&mut self.renderer);
            }
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    fn activate(&mut self, index: usize) {
        let outcome = self.engine.apply_move(index, &mut self.renderer);
        if let MoveOutcome::Rejected(rejection) = outcome {
            debug!(index, %rejection, "Activation ignored");
        }
    }

    /// Applies cosmetic effects due at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.renderer.tick(now);
    }

    /// Draws one frame and remembers its layout.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.resize(frame.area());
        ui::draw(frame, self.renderer.view(), self.cursor, self.strike_extension);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use scratch_engine::{GameStatus, Player};
    use std::time::Duration;

    fn app() -> App {
        let mut app = App::new(&Settings::default());
        app.resize(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_cursor_activation() {
        let mut app = app();
        app.handle(Command::MoveCursor(Direction::Up));
        app.handle(Command::ActivateCursor);
        assert_eq!(app.view().marks[1], Some(Player::X));
        assert_eq!(app.engine().current_player(), Player::O);
    }

    #[test]
    fn test_click_activates_cell() {
        let mut app = app();
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        let target = layout.cells[8];
        app.handle(Command::Click {
            column: target.x + 1,
            row: target.y + 1,
        });
        assert_eq!(app.view().marks[8], Some(Player::X));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_click_outside_board_does_nothing() {
        let mut app = app();
        app.handle(Command::Click { column: 0, row: 0 });
        assert!(app.engine().history().is_empty());
    }

    #[test]
    fn test_restart_after_win() {
        let mut app = app();
        for index in [0, 3, 1, 4, 2] {
            app.handle(Command::Activate(index));
        }
        assert_eq!(app.engine().status(), GameStatus::Won(Player::X));
        app.tick(Instant::now() + Duration::from_secs(1));
        assert!(app.view().is_struck(1));

        app.handle(Command::Activate(5));
        assert_eq!(app.view().marks[5], None);

        app.handle(Command::Restart);
        assert_eq!(app.engine().status(), GameStatus::InProgress);
        assert_eq!(app.view().strike, None);
        assert_eq!(app.view().status, "Player X's turn");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Command::Quit);
        assert!(app.should_quit());
    }
}
