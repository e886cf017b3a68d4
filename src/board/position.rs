//! Board coordinates for the 8x8 walk.
//!
//! Squares are 1-indexed on both axes, so `(1, 1)` and `(8, 8)` are opposite
//! corners. A `Position` can only be built on the board; move generators
//! rely on that when they step along rays.

use std::fmt;

use crate::errors::{WalkError, WalkResult};

pub const BOARD_MIN: i8 = 1;
pub const BOARD_MAX: i8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: i8,
    y: i8,
}

impl Position {
    /// Builds a position, rejecting coordinates outside `1..=8`.
    pub fn new(x: i8, y: i8) -> WalkResult<Self> {
        if Self::on_board(x, y) {
            Ok(Self { x, y })
        } else {
            Err(WalkError::PositionOutOfRange { x, y })
        }
    }

    #[inline]
    pub const fn x(self) -> i8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i8 {
        self.y
    }

    #[inline]
    pub const fn on_board(x: i8, y: i8) -> bool {
        x >= BOARD_MIN && x <= BOARD_MAX && y >= BOARD_MIN && y <= BOARD_MAX
    }

    /// The square displaced by `(dx, dy)`, or `None` when it leaves the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x.checked_add(dx)?;
        let y = self.y.checked_add(dy)?;
        Self::new(x, y).ok()
    }

    /// All 64 squares, row by row starting from `(1, 1)`.
    pub fn all() -> impl Iterator<Item = Position> {
        (BOARD_MIN..=BOARD_MAX)
            .flat_map(|y| (BOARD_MIN..=BOARD_MAX).map(move |x| Position { x, y }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_format() {
        let p = Position::new(3, 7).unwrap();
        assert_eq!(p.to_string(), "(3, 7)");
    }

    #[test]
    fn construction_rejects_off_board_coordinates() {
        assert_eq!(
            Position::new(0, 4),
            Err(WalkError::PositionOutOfRange { x: 0, y: 4 })
        );
        assert!(Position::new(4, 9).is_err());
        assert!(Position::new(1, 8).is_ok());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Position::new(2, 5).unwrap(), Position::new(2, 5).unwrap());
        assert_ne!(Position::new(2, 5).unwrap(), Position::new(5, 2).unwrap());
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let corner = Position::new(8, 8).unwrap();
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(-2, -1), Position::new(6, 7).ok());
    }

    #[test]
    fn all_covers_the_board_once() {
        let squares: Vec<Position> = Position::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Position::new(1, 1).unwrap());
        assert_eq!(squares[63], Position::new(8, 8).unwrap());
    }
}
