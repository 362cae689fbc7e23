//! The game engine: owns the board and drives the state machine.

use super::invariants::{EngineInvariants, InvariantSet};
use super::renderer::Renderer;
use super::rules::{self, WinningLine};
use super::types::{Board, GameStatus, MoveRecord, Player, Square};
use super::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Rejection {
    /// The index is not a board cell.
    #[display("Position {_0} out of bounds (must be 0-8)")]
    OutOfRange(usize),
    /// The cell is already claimed.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),
    /// The game has ended.
    #[display("Game is already over")]
    GameOver,
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move accepted; the payload is the player now to move.
    Continue(Player),
    /// Move accepted and completed a line.
    Won(Player, WinningLine),
    /// Move accepted and filled the board without a winner.
    Draw,
    /// Move ignored. Nothing changed and nothing was notified.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Whether the engine accepted the move.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

/// Serializable copy of the engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move (or who moved last, once the game is over).
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Winning combination, present only when won.
    pub winning_line: Option<WinningLine>,
    /// Accepted moves of this game.
    pub history: Vec<MoveRecord>,
}

/// Tic-tac-toe game engine.
///
/// A single instance is owned by the front end. Every mutation goes
/// through [`Engine::initialize`] or [`Engine::apply_move`], each of which
/// runs to completion before notifying the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    history: Vec<MoveRecord>,
}

impl Engine {
    /// Creates an engine in the initial state without notifying anyone.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Resets to the initial state and tells the renderer.
    #[instrument(skip_all)]
    pub fn initialize<R: Renderer + ?Sized>(&mut self, renderer: &mut R) {
        *self = Self::new();
        info!("Game initialized, Player X to move");
        renderer.on_reset();
    }

    /// Claims `index` for the current player.
    ///
    /// Moves on occupied cells, out-of-range indices and moves after the
    /// game has ended are ignored: state is untouched and the renderer is
    /// not called.
    #[instrument(skip(self, renderer), fields(player = %self.current_player))]
    pub fn apply_move<R: Renderer + ?Sized>(
        &mut self,
        index: usize,
        renderer: &mut R,
    ) -> MoveOutcome {
        if let Err(rejection) = self.check_move(index) {
            match rejection {
                Rejection::OutOfRange(_) => warn!(%rejection, "Ignoring move"),
                _ => debug!(%rejection, "Ignoring move"),
            }
            return MoveOutcome::Rejected(rejection);
        }

        let player = self.current_player;
        self.board.squares_mut()[index] = Square::Occupied(player);
        self.history.push(MoveRecord::new(player, index));

        let outcome = if let Some(line) = rules::find_winning_line(&self.board, player) {
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line);
            MoveOutcome::Won(player, line)
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            MoveOutcome::Draw
        } else {
            self.current_player = player.opponent();
            MoveOutcome::Continue(self.current_player)
        };

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated: {:?}",
            EngineInvariants::check_all(self)
        );

        renderer.on_cell_marked(index, player);
        match outcome {
            MoveOutcome::Won(winner, line) => {
                info!(%winner, %line, "Game won");
                renderer.on_game_won(winner, line);
            }
            MoveOutcome::Draw => {
                info!("Game drawn");
                renderer.on_game_draw();
            }
            MoveOutcome::Continue(next) => {
                debug!(%next, "Turn passes");
                renderer.on_turn_changed(next);
            }
            MoveOutcome::Rejected(_) => {}
        }

        outcome
    }

    fn check_move(&self, index: usize) -> Result<(), Rejection> {
        if self.status.is_terminal() {
            return Err(Rejection::GameOver);
        }
        let position = Position::from_index(index).ok_or(Rejection::OutOfRange(index))?;
        if !self.board.is_empty(index) {
            return Err(Rejection::Occupied(position));
        }
        Ok(())
    }

    /// Initializes a fresh game and applies `indices` in order.
    #[instrument(skip(renderer))]
    pub fn replay<R: Renderer + ?Sized>(indices: &[usize], renderer: &mut R) -> Self {
        let mut engine = Self::new();
        engine.initialize(renderer);
        for &index in indices {
            engine.apply_move(index, renderer);
        }
        engine
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning combination, present only when the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Accepted moves since the last initialize.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Copies the state into a serializable snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            status: self.status,
            winning_line: self.winning_line,
            history: self.history.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
