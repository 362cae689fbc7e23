//! Stateless UI rendering for tic-tac-toe.

use crate::renderer::BoardView;
use crate::strike::{StrikeLine, StrikeWidget};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scratch_engine::{Player, Position, CELL_COUNT};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title row.
    pub title: Rect,
    /// The whole 3x3 board including separators.
    pub board: Rect,
    /// One rect per cell, index order.
    pub cells: [Rect; CELL_COUNT],
    /// Bordered status line.
    pub status: Rect,
    /// Key help row.
    pub help: Rect,
}

impl ScreenLayout {
    /// Computes the layout for a terminal of size `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Min(BOARD_HEIGHT),    // Board
                Constraint::Length(3),            // Status
                Constraint::Length(1),            // Help
            ])
            .split(area);

        let board = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let mut cells = [Rect::default(); CELL_COUNT];
        for pos in Position::ALL {
            let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
            let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
            cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(board);
        }

        Self {
            title: chunks[0],
            board,
            cells,
            status: chunks[2],
            help: chunks[3],
        }
    }

    /// Cell under the terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        self.cells.iter().position(|rect| {
            !rect.is_empty()
                && column >= rect.left()
                && column < rect.right()
                && row >= rect.top()
                && row < rect.bottom()
        })
    }
}

/// Renders title, board, strike-through, status and help.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Position, strike_extension: f64) {
    let layout = ScreenLayout::new(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, view, cursor);

    if let Some(strike) = view.strike.filter(|s| s.revealed) {
        let line = StrikeLine::between(
            layout.cells[strike.line.first()],
            layout.cells[strike.line.last()],
            strike_extension,
        );
        let style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        frame.render_widget(StrikeWidget::new(line, style), layout.board);
    }

    let status_style = if view.status_visible {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    let status = Paragraph::new(view.status.as_str())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new("1-9/arrows+enter/click: move   r: restart   q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, view: &BoardView, cursor: Position) {
    let separator = Style::default().fg(Color::DarkGray);
    let board = layout.board;

    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        let area = Rect::new(board.x, y, board.width, 1).intersection(board);
        frame.render_widget(
            Paragraph::new("─".repeat(board.width as usize)).style(separator),
            area,
        );
    }
    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        let area = Rect::new(x, board.y, 1, board.height).intersection(board);
        let lines: Vec<Line> = (0..board.height)
            .map(|y| {
                if (y + 1) % (CELL_HEIGHT + 1) == 0 {
                    Line::from("┼")
                } else {
                    Line::from("│")
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines).style(separator), area);
    }

    for pos in Position::ALL {
        draw_cell(frame, layout.cells[pos.to_index()], view, cursor, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView, cursor: Position, pos: Position) {
    let index = pos.to_index();
    let (symbol, base_style) = match view.marks[index] {
        None => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if view.is_struck(index) {
        base_style.add_modifier(Modifier::REVERSED)
    } else if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically centre the symbol within the cell.
    let mut lines = vec![Line::default(); (area.height / 2) as usize];
    lines.push(Line::from(Span::styled(symbol, style)));
    let paragraph = Paragraph::new(lines)
        .style(if pos == cursor { style } else { Style::default() })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
