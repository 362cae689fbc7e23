//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Engine, Square};
use super::Invariant;

/// Invariant: replaying the history onto an empty board never overwrites a
/// square and reproduces the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Engine> for MonotonicBoardInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new();

        for record in engine.history() {
            if !reconstructed.is_empty(record.index) {
                return false;
            }
            if reconstructed
                .set(record.index, Square::Occupied(record.player))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
