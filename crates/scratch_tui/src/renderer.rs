//! Terminal renderer: turns engine notifications into a view model.

use crate::effects::{Effect, Effects};
use crate::settings::Settings;
use scratch_engine::{draw_text, turn_text, win_text, Player, Renderer, WinningLine, CELL_COUNT};
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Strike-through annotation for a won game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strike {
    /// The completed combination.
    pub line: WinningLine,
    /// False until the reveal effect fires.
    pub revealed: bool,
}

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// Symbol shown in each cell.
    pub marks: [Option<Player>; CELL_COUNT],
    /// Status line text.
    pub status: String,
    /// False while the status line is still fading in.
    pub status_visible: bool,
    /// Present once a game has been won.
    pub strike: Option<Strike>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            marks: [None; CELL_COUNT],
            status: turn_text(Player::X),
            status_visible: false,
            strike: None,
        }
    }
}

impl BoardView {
    /// Whether `index` lies on the revealed strike-through line.
    pub fn is_struck(&self, index: usize) -> bool {
        self.strike
            .is_some_and(|strike| strike.revealed && strike.line.contains(index))
    }
}

/// [`Renderer`] backed by a [`BoardView`] and deferred [`Effects`].
#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    view: BoardView,
    effects: Effects,
    fade_in: Duration,
    strike_reveal: Duration,
}

impl TerminalRenderer {
    /// Creates a renderer using the delays from `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self::with_delays(settings.fade_in_delay(), settings.strike_reveal_delay())
    }

    /// Creates a renderer with explicit delays.
    pub fn with_delays(fade_in: Duration, strike_reveal: Duration) -> Self {
        Self {
            view: BoardView::default(),
            effects: Effects::new(),
            fade_in,
            strike_reveal,
        }
    }

    /// Current view model.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Whether any cosmetic effect is still waiting.
    pub fn has_pending_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Applies every effect due at `now`.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) {
        for effect in self.effects.take_due(now) {
            match effect {
                Effect::FadeInStatus => self.view.status_visible = true,
                Effect::RevealStrike => {
                    if let Some(strike) = self.view.strike.as_mut() {
                        strike.revealed = true;
                    }
                }
            }
        }
    }

    fn set_status(&mut self, status: String) {
        debug!(%status, "Status changed");
        self.view.status = status;
        self.view.status_visible = false;
        self.effects
            .schedule(Instant::now(), self.fade_in, Effect::FadeInStatus);
    }
}

impl Renderer for TerminalRenderer {
    fn on_reset(&mut self) {
        self.effects.clear();
        self.view = BoardView::default();
        self.set_status(turn_text(Player::X));
    }

    fn on_cell_marked(&mut self, index: usize, player: Player) {
        if let Some(mark) = self.view.marks.get_mut(index) {
            *mark = Some(player);
        }
    }

    fn on_turn_changed(&mut self, player: Player) {
        self.set_status(turn_text(player));
    }

    fn on_game_won(&mut self, player: Player, line: WinningLine) {
        self.set_status(win_text(player));
        self.view.strike = Some(Strike {
            line,
            revealed: false,
        });
        self.effects
            .schedule(Instant::now(), self.strike_reveal, Effect::RevealStrike);
    }

    fn on_game_draw(&mut self) {
        self.set_status(draw_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratch_engine::{Engine, WINNING_LINES};

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(5)
    }

    fn renderer() -> TerminalRenderer {
        TerminalRenderer::with_delays(Duration::from_millis(300), Duration::from_millis(50))
    }

    #[test]
    fn test_reset_view() {
        let mut r = renderer();
        let mut engine = Engine::new();
        engine.initialize(&mut r);

        assert_eq!(r.view().status, "Player X's turn");
        assert!(!r.view().status_visible);
        assert!(r.view().marks.iter().all(Option::is_none));

        r.tick(later());
        assert!(r.view().status_visible);
    }

    #[test]
    fn test_win_reveals_strike_after_tick() {
        let mut r = renderer();
        Engine::replay(&[0, 3, 1, 4, 2], &mut r);

        assert_eq!(r.view().status, "Player X wins!");
        assert_eq!(
            r.view().strike,
            Some(Strike {
                line: WINNING_LINES[0],
                revealed: false,
            })
        );
        assert!(!r.view().is_struck(0));

        r.tick(later());
        assert!(r.view().is_struck(0));
        assert!(r.view().is_struck(2));
        assert!(!r.view().is_struck(3));
        assert!(!r.has_pending_effects());
    }

    #[test]
    fn test_reset_removes_strike_and_cancels_effects() {
        let mut r = renderer();
        let mut engine = Engine::replay(&[0, 3, 1, 4, 2], &mut r);
        engine.initialize(&mut r);

        assert_eq!(r.view().strike, None);
        r.tick(later());
        assert_eq!(r.view().strike, None);
        assert_eq!(r.view().status, "Player X's turn");
    }

    #[test]
    fn test_draw_status() {
        let mut r = renderer();
        Engine::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], &mut r);
        assert_eq!(r.view().status, "Draw!");
        assert!(r.view().marks.iter().all(Option::is_some));
        assert_eq!(r.view().marks[4], Some(Player::O));
    }
}
