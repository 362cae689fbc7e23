//! Tic-tac-toe game engine.
//!
//! The engine owns the canonical board, whose turn it is and the game
//! status. Presentation layers observe it through the [`Renderer`] trait
//! and never participate in game-logic decisions.
//!
//! # Example
//!
//! ```
//! use scratch_engine::{Engine, EventLog, GameStatus, MoveOutcome, Player};
//!
//! let mut log = EventLog::new();
//! let mut engine = Engine::new();
//! engine.initialize(&mut log);
//!
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index, &mut log);
//! }
//! let outcome = engine.apply_move(2, &mut log);
//!
//! assert!(matches!(outcome, MoveOutcome::Won(Player::X, _)));
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(log.last_status().as_deref(), Some("Player X wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
pub mod invariants;
mod position;
mod renderer;
pub mod rules;
mod types;

pub use engine::{Engine, GameSnapshot, MoveOutcome, Rejection};
pub use position::Position;
pub use renderer::{
    draw_text, turn_text, win_text, EventLog, NullRenderer, RenderEvent, Renderer,
};
pub use rules::{WinningLine, WINNING_LINES};
pub use types::{Board, BoardError, GameStatus, MoveRecord, Player, Square, CELL_COUNT};
