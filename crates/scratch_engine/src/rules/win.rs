//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An ordered triple of board indices forming a winning combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

/// The 8 winning combinations in canonical order: rows top to bottom,
/// columns left to right, then both diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

impl WinningLine {
    /// The three cell indices, in order.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// First cell of the line.
    pub fn first(&self) -> usize {
        self.0[0]
    }

    /// Last cell of the line.
    pub fn last(&self) -> usize {
        self.0[2]
    }

    /// Whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Whether every cell of the line belongs to `player`.
    pub fn owned_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|&i| board.get(i) == Some(Square::Occupied(player)))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{a}, {b}, {c}]")
    }
}

/// Returns the first canonical combination fully owned by `player`.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    WINNING_LINES
        .iter()
        .copied()
        .find(|line| line.owned_by(board, player))
}

/// Checks if there is a winner on the board.
///
/// Returns the winner and the first canonical combination they own.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES.iter().copied().find_map(|line| {
        let [a, _, _] = line.cells();
        let player = board.get(a)?.player()?;
        line.owned_by(board, player).then_some((player, line))
    })
}
