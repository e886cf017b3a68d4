//! Error type shared by the board, move generation and the simulation loop.

use std::error::Error;
use std::fmt;

use crate::board::position::Position;
use crate::pieces::piece_kind::PieceKind;

pub type WalkResult<T> = Result<T, WalkError>;

/// Stage of the simulation whose retry loop ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStage {
    /// Rejection sampling of the initial placement.
    Placement(PieceKind),
    /// Candidate sampling during a move.
    Move(PieceKind),
}

/// Every failure the simulation can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// A coordinate fell outside `1..=8`.
    PositionOutOfRange { x: i8, y: i8 },
    /// `play` or `step` was called before the pieces were placed.
    SetupIncomplete,
    /// Pieces were already placed on this walk.
    AlreadySetUp,
    /// Two pieces were asked to start on the same square.
    Collision {
        first: PieceKind,
        second: PieceKind,
        square: Position,
    },
    /// The piece has no reachable square that is free of the other pieces.
    NoLegalMove { piece: PieceKind, from: Position },
    /// The random selector was handed nothing to choose from.
    EmptySelection,
    /// A rejection-sampling loop hit its configured cap.
    RetryLimitExceeded { stage: RetryStage, attempts: u32 },
    /// The report sink failed to accept a line.
    Report(String),
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::PositionOutOfRange { x, y } => {
                write!(f, "position ({x}, {y}) is outside the 8x8 board")
            }
            WalkError::SetupIncomplete => write!(f, "pieces have not been placed yet"),
            WalkError::AlreadySetUp => write!(f, "pieces have already been placed"),
            WalkError::Collision {
                first,
                second,
                square,
            } => write!(
                f,
                "{} and {} cannot both start on {square}",
                first.display_name(),
                second.display_name()
            ),
            WalkError::NoLegalMove { piece, from } => {
                write!(f, "{} has no free square to move to from {from}", piece.display_name())
            }
            WalkError::EmptySelection => write!(f, "cannot choose from an empty list"),
            WalkError::RetryLimitExceeded { stage, attempts } => match stage {
                RetryStage::Placement(piece) => write!(
                    f,
                    "placing {} gave up after {attempts} attempts",
                    piece.display_name()
                ),
                RetryStage::Move(piece) => write!(
                    f,
                    "moving {} gave up after {attempts} attempts",
                    piece.display_name()
                ),
            },
            WalkError::Report(msg) => write!(f, "failed to write report line: {msg}"),
        }
    }
}

impl Error for WalkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_piece_and_square() {
        let err = WalkError::NoLegalMove {
            piece: PieceKind::Knight,
            from: Position::new(1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "KNIGHT has no free square to move to from (1, 1)"
        );
    }

    #[test]
    fn out_of_range_reports_raw_coordinates() {
        let err = WalkError::PositionOutOfRange { x: 9, y: 0 };
        assert_eq!(err.to_string(), "position (9, 0) is outside the 8x8 board");
    }
}
