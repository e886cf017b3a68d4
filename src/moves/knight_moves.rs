//! Knight move generation.

use crate::board::position::Position;
use crate::errors::WalkResult;
use crate::moves::move_generator::MoveGenerator;
use crate::moves::ray_walk::Step;

/// The eight L-shaped jumps, clockwise from one square right and two up.
pub const KNIGHT_STEPS: [Step; 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct KnightMoves;

impl MoveGenerator for KnightMoves {
    fn valid_moves(&self, from: Position) -> WalkResult<Vec<Position>> {
        Ok(KNIGHT_STEPS
            .iter()
            .filter_map(|&(dx, dy)| from.offset(dx, dy))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::KnightMoves;
    use crate::board::position::Position;
    use crate::moves::move_generator::MoveGenerator;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let mut moves = KnightMoves.valid_moves(pos(1, 1)).unwrap();
        moves.sort_by_key(|p| (p.x(), p.y()));
        assert_eq!(moves, vec![pos(2, 3), pos(3, 2)]);
    }

    #[test]
    fn knight_in_centre_has_eight_targets() {
        assert_eq!(KnightMoves.valid_moves(pos(4, 4)).unwrap().len(), 8);
    }

    #[test]
    fn knight_targets_are_l_shaped() {
        for from in Position::all() {
            for to in KnightMoves.valid_moves(from).unwrap() {
                let dx = (to.x() - from.x()).abs();
                let dy = (to.y() - from.y()).abs();
                assert!((dx, dy) == (1, 2) || (dx, dy) == (2, 1));
            }
        }
    }
}
