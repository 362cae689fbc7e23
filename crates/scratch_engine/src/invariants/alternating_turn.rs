//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Engine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show the X, O, X, ... pattern starting with X. While
/// the game is in progress, the player to move is the one the history
/// parity predicts; once over, it is the player who moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(n, record)| {
            let expected = if n % 2 == 0 { Player::X } else { Player::O };
            record.player == expected
        });
        if !alternates {
            return false;
        }

        match history.last() {
            None => engine.current_player() == Player::X,
            Some(last) if engine.is_over() => engine.current_player() == last.player,
            Some(last) => engine.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
