//! Bishop move generation.
//!
//! The diagonal reach computed here is also the first half of the queen's
//! geometry; `QueenMoves` delegates to it instead of recomputing diagonals.

use crate::board::position::{Position, BOARD_MAX, BOARD_MIN};
use crate::errors::WalkResult;
use crate::moves::move_generator::MoveGenerator;
use crate::moves::ray_walk::{walk_rays, Step};

/// Diagonal directions, in the order their squares are emitted.
pub const DIAGONAL_STEPS: [Step; 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

#[derive(Debug, Clone, Copy, Default)]
pub struct BishopMoves;

impl BishopMoves {
    /// How many squares fit along each of `DIAGONAL_STEPS` before the edge.
    pub fn diagonal_reach(&self, from: Position) -> [i8; 4] {
        let (x, y) = (from.x(), from.y());
        let right = BOARD_MAX - x;
        let left = x - BOARD_MIN;
        let up = BOARD_MAX - y;
        let down = y - BOARD_MIN;

        [right.min(up), left.min(down), right.min(down), left.min(up)]
    }
}

impl MoveGenerator for BishopMoves {
    fn valid_moves(&self, from: Position) -> WalkResult<Vec<Position>> {
        walk_rays(from, &DIAGONAL_STEPS, &self.diagonal_reach(from))
    }
}
