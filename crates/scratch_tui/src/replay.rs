//! Headless replay of a move list.

use anyhow::{Context, Result};
use scratch_engine::{Engine, EventLog, MoveOutcome, Position};
use std::io::Write;
use tracing::{info, instrument};

/// Parses moves separated by commas and/or whitespace.
///
/// Each move is a 0-based index or a position label such as `center`.
/// Numbers are passed through unchecked so the engine can reject them.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<usize>> {
    moves
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_move)
        .collect()
}

fn parse_move(token: &str) -> Result<usize> {
    match token.parse::<usize>() {
        Ok(index) => Ok(index),
        Err(e) => Position::from_label(token)
            .map(Position::to_index)
            .ok_or(e)
            .with_context(|| {
                format!("Invalid move {:?}: expected a cell index or label", token)
            }),
    }
}

/// Plays `indices` on a fresh engine, writing one line per move, the final
/// board and, when `json` is set, the final snapshot.
#[instrument(skip(out))]
pub fn run(indices: &[usize], json: bool, out: &mut impl Write) -> Result<Engine> {
    let mut log = EventLog::new();
    let mut engine = Engine::new();
    engine.initialize(&mut log);

    for (n, &index) in indices.iter().enumerate() {
        let outcome = engine.apply_move(index, &mut log);
        let status = log.last_status().unwrap_or_default();
        match outcome {
            MoveOutcome::Rejected(rejection) => {
                writeln!(out, "move {}: {} ignored ({})", n + 1, index, rejection)?;
            }
            _ => writeln!(out, "move {}: {} -> {}", n + 1, index, status)?,
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", engine.board().display())?;
    writeln!(out)?;
    writeln!(out, "{}", log.last_status().unwrap_or_default())?;

    if json {
        let snapshot = serde_json::to_string_pretty(&engine.snapshot())
            .context("Failed to serialize game snapshot")?;
        writeln!(out, "{}", snapshot)?;
    }

    info!(moves = indices.len(), status = ?engine.status(), "Replay finished");
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(parse_moves("0,3, 1 4\t2").unwrap(), vec![0, 3, 1, 4, 2]);
        assert!(parse_moves("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            parse_moves("center, Top-left 8").unwrap(),
            vec![4, 0, 8]
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_moves("0,x").unwrap_err();
        assert!(err.to_string().contains("\"x\""));
        assert!(parse_moves("-1").is_err());
    }
}
