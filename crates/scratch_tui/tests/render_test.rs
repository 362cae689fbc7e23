//! Renders full frames into a test backend.

use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use scratch_tui::{App, Command, ScreenLayout, Settings};
use std::time::{Duration, Instant};

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(app: &mut App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal
}

#[test]
fn test_initial_frame_shows_turn_and_numbers() {
    let mut app = App::new(&Settings::default());
    let text = screen_text(&render(&mut app));

    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Player X's turn"));
    for n in 1..=9 {
        assert!(text.contains(&n.to_string()));
    }
}

#[test]
fn test_marks_and_win_status_rendered() {
    let mut app = App::new(&Settings::default());
    for index in [0, 3, 1, 4, 2] {
        app.handle(Command::Activate(index));
    }
    let text = screen_text(&render(&mut app));

    assert!(text.contains("Player X wins!"));
    assert!(text.contains('X'));
    assert!(text.contains('O'));
}

#[test]
fn test_strike_drawn_only_after_reveal() {
    let mut app = App::new(&Settings::default());
    for index in [0, 3, 1, 4, 2] {
        app.handle(Command::Activate(index));
    }

    let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
    // Between the first two cells of the top row, on the centre line.
    let gap_x = layout.cells[0].right();
    let mid_y = layout.cells[0].y + layout.cells[0].height / 2;

    let before = render(&mut app);
    assert_eq!(before.backend().buffer()[(gap_x, mid_y)].symbol(), "│");

    app.tick(Instant::now() + Duration::from_secs(1));
    let after = render(&mut app);
    assert_eq!(after.backend().buffer()[(gap_x, mid_y)].symbol(), "─");
}

#[test]
fn test_draw_status_rendered() {
    let mut app = App::new(&Settings::default());
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        app.handle(Command::Activate(index));
    }
    let text = screen_text(&render(&mut app));
    assert!(text.contains("Draw!"));
}
