//! Status consistency: status, winning line and board agree.

use super::super::rules;
use super::super::{Engine, GameStatus};
use super::Invariant;

/// Invariant: a winning line is recorded exactly when the game is won and
/// is owned by the winner; a draw implies a full board with no winner; an
/// in-progress game has no completed line.
pub struct StatusConsistentInvariant;

impl Invariant<Engine> for StatusConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let board = engine.board();
        match (engine.status(), engine.winning_line()) {
            (GameStatus::Won(winner), Some(line)) => line.owned_by(board, winner),
            (GameStatus::Draw, None) => rules::is_draw(board),
            (GameStatus::InProgress, None) => rules::check_winner(board).is_none(),
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Status and winning line agree with the board"
    }
}
