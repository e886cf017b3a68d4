use crate::board::position::{Position, BOARD_MAX, BOARD_MIN};
use crate::errors::WalkResult;
use crate::moves::bishop_moves::{BishopMoves, DIAGONAL_STEPS};
use crate::moves::move_generator::MoveGenerator;
use crate::moves::ray_walk::{walk_rays, Step};

/// Orthogonal directions, emitted after the diagonals.
pub const ORTHOGONAL_STEPS: [Step; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Queen geometry: the bishop's diagonals followed by the four orthogonals.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueenMoves {
    diagonals: BishopMoves,
}

impl QueenMoves {
    pub fn new() -> Self {
        Self {
            diagonals: BishopMoves,
        }
    }

    /// Reach along `DIAGONAL_STEPS` then `ORTHOGONAL_STEPS`.
    pub fn reach(&self, from: Position) -> [i8; 8] {
        let (x, y) = (from.x(), from.y());
        let [d0, d1, d2, d3] = self.diagonals.diagonal_reach(from);
        [
            d0,
            d1,
            d2,
            d3,
            BOARD_MAX - x,
            BOARD_MAX - y,
            x - BOARD_MIN,
            y - BOARD_MIN,
        ]
    }
}

impl MoveGenerator for QueenMoves {
    fn valid_moves(&self, from: Position) -> WalkResult<Vec<Position>> {
        let mut steps = [(0, 0); 8];
        steps[..4].copy_from_slice(&DIAGONAL_STEPS);
        steps[4..].copy_from_slice(&ORTHOGONAL_STEPS);
        walk_rays(from, &steps, &self.reach(from))
    }
}
