//! Observer contract between the engine and whatever draws the game.
//!
//! The engine pushes one-way notifications after each committed state
//! change. Renderers never feed anything back into game logic.

use super::rules::WinningLine;
use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Receives notifications from the [`Engine`](crate::Engine).
pub trait Renderer {
    /// Board cleared, strike-through removed, X to move.
    fn on_reset(&mut self);

    /// `player` claimed the cell at `index`.
    fn on_cell_marked(&mut self, index: usize, player: Player);

    /// It is now `player`'s turn.
    fn on_turn_changed(&mut self, player: Player);

    /// `player` completed `line`.
    fn on_game_won(&mut self, player: Player, line: WinningLine);

    /// Board full with no winner.
    fn on_game_draw(&mut self);
}

/// Renderer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn on_reset(&mut self) {}
    fn on_cell_marked(&mut self, _index: usize, _player: Player) {}
    fn on_turn_changed(&mut self, _player: Player) {}
    fn on_game_won(&mut self, _player: Player, _line: WinningLine) {}
    fn on_game_draw(&mut self) {}
}

/// A notification as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEvent {
    /// See [`Renderer::on_reset`].
    Reset,
    /// See [`Renderer::on_cell_marked`].
    CellMarked {
        /// Claimed cell.
        index: usize,
        /// Claiming player.
        player: Player,
    },
    /// See [`Renderer::on_turn_changed`].
    TurnChanged(Player),
    /// See [`Renderer::on_game_won`].
    GameWon {
        /// Winner.
        player: Player,
        /// First completed combination.
        line: WinningLine,
    },
    /// See [`Renderer::on_game_draw`].
    GameDraw,
}

impl RenderEvent {
    /// Status line shown for this event, if it changes the status.
    pub fn status_text(&self) -> Option<String> {
        match self {
            RenderEvent::Reset => Some(turn_text(Player::X)),
            RenderEvent::CellMarked { .. } => None,
            RenderEvent::TurnChanged(player) => Some(turn_text(*player)),
            RenderEvent::GameWon { player, .. } => Some(win_text(*player)),
            RenderEvent::GameDraw => Some(draw_text()),
        }
    }
}

/// "Player X's turn"
pub fn turn_text(player: Player) -> String {
    format!("Player {player}'s turn")
}

/// "Player X wins!"
pub fn win_text(player: Player) -> String {
    format!("Player {player} wins!")
}

/// "Draw!"
pub fn draw_text() -> String {
    "Draw!".to_string()
}

/// Renderer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<RenderEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// The status line implied by the most recent status-changing event.
    pub fn last_status(&self) -> Option<String> {
        self.events.iter().rev().find_map(RenderEvent::status_text)
    }

    #[instrument(skip(self))]
    fn push(&mut self, event: RenderEvent) {
        self.events.push(event);
    }
}

impl Renderer for EventLog {
    fn on_reset(&mut self) {
        self.push(RenderEvent::Reset);
    }

    fn on_cell_marked(&mut self, index: usize, player: Player) {
        self.push(RenderEvent::CellMarked { index, player });
    }

    fn on_turn_changed(&mut self, player: Player) {
        self.push(RenderEvent::TurnChanged(player));
    }

    fn on_game_won(&mut self, player: Player, line: WinningLine) {
        self.push(RenderEvent::GameWon { player, line });
    }

    fn on_game_draw(&mut self) {
        self.push(RenderEvent::GameDraw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WINNING_LINES;

    #[test]
    fn test_status_strings() {
        assert_eq!(turn_text(Player::O), "Player O's turn");
        assert_eq!(win_text(Player::X), "Player X wins!");
        assert_eq!(draw_text(), "Draw!");
    }

    #[test]
    fn test_last_status_skips_cell_marks() {
        let mut log = EventLog::new();
        log.on_reset();
        log.on_cell_marked(0, Player::X);
        assert_eq!(log.last_status().as_deref(), Some("Player X's turn"));

        log.on_game_won(Player::X, WINNING_LINES[0]);
        assert_eq!(log.last_status().as_deref(), Some("Player X wins!"));
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = EventLog::new();
        log.on_game_draw();
        assert_eq!(log.drain(), vec![RenderEvent::GameDraw]);
        assert!(log.events().is_empty());
    }
}
