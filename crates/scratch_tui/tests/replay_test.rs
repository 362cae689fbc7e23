//! Tests for headless replay output.

use scratch_engine::{GameSnapshot, GameStatus, Player};
use scratch_tui::{parse_moves, run_replay};

fn replay(moves: &str, json: bool) -> (scratch_engine::Engine, String) {
    let indices = parse_moves(moves).expect("valid move list");
    let mut out = Vec::new();
    let engine = run_replay(&indices, json, &mut out).expect("replay succeeds");
    (engine, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_replay_win() {
    let (engine, out) = replay("0,3,1,4,2", false);

    assert_eq!(engine.status(), GameStatus::Won(Player::X));
    assert!(out.contains("move 1: 0 -> Player O's turn"));
    assert!(out.contains("move 5: 2 -> Player X wins!"));
    assert!(out.contains("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9"));
}

#[test]
fn test_replay_reports_ignored_moves() {
    let (engine, out) = replay("0 0 9", false);

    assert_eq!(engine.history().len(), 1);
    assert!(out.contains("move 2: 0 ignored (Square Top-left is already occupied)"));
    assert!(out.contains("move 3: 9 ignored (Position 9 out of bounds (must be 0-8))"));
    assert!(out.trim_end().ends_with("Player O's turn"));
}

#[test]
fn test_replay_json_snapshot() {
    let (_, out) = replay("0,1,2,4,3,5,7,6,8", true);

    let json_start = out.find('{').expect("json in output");
    let snapshot: GameSnapshot = serde_json::from_str(&out[json_start..]).unwrap();
    assert_eq!(snapshot.status, GameStatus::Draw);
    assert_eq!(snapshot.winning_line, None);
    assert_eq!(snapshot.history.len(), 9);
}

#[test]
fn test_move_after_game_over_ignored() {
    let (_, out) = replay("0,3,1,4,2,5", false);
    assert!(out.contains("move 6: 5 ignored (Game is already over)"));
}
