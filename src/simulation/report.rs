//! Status-line formatting and the sinks that receive the lines.
//!
//! The simulation never prints directly. It hands each formatted line to a
//! `ReportSink`, so the binary writes to stdout while tests collect lines.

use std::io::{self, Write};

use crate::board::position::Position;
use crate::errors::{WalkError, WalkResult};
use crate::pieces::piece_kind::PieceKind;

pub trait ReportSink {
    fn emit(&mut self, line: &str) -> WalkResult<()>;
}

/// `"{step}: I am {NAME}. My position is {position}"`
pub fn initial_line(step: u32, piece: PieceKind, position: Position) -> String {
    format!(
        "{step}: I am {}. My position is {position}",
        piece.display_name()
    )
}

/// `"{step}: I am {NAME}. My last position is {from}, and my current position is {to}"`
pub fn move_line(step: u32, piece: PieceKind, from: Position, to: Position) -> String {
    format!(
        "{step}: I am {}. My last position is {from}, and my current position is {to}",
        piece.display_name()
    )
}

/// Writes each line to stdout and flushes.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    fn emit(&mut self, line: &str) -> WalkResult<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        writeln!(lock, "{line}")
            .and_then(|_| lock.flush())
            .map_err(|e| WalkError::Report(e.to_string()))
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default, Clone)]
pub struct VecSink {
    pub lines: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for VecSink {
    fn emit(&mut self, line: &str) -> WalkResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn emit(&mut self, _line: &str) -> WalkResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn initial_line_format() {
        assert_eq!(
            initial_line(0, PieceKind::Knight, pos(2, 6)),
            "0: I am KNIGHT. My position is (2, 6)"
        );
    }

    #[test]
    fn move_line_format() {
        assert_eq!(
            move_line(4, PieceKind::Queen, pos(1, 1), pos(1, 8)),
            "4: I am QUEUE. My last position is (1, 1), and my current position is (1, 8)"
        );
    }

    #[test]
    fn vec_sink_keeps_order() {
        let mut sink = VecSink::new();
        sink.emit("a").unwrap();
        sink.emit("b").unwrap();
        assert_eq!(sink.lines, vec!["a".to_string(), "b".to_string()]);
    }
}
