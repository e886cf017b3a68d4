//! Move generation abstraction shared by every piece.

use crate::board::position::Position;
use crate::errors::WalkResult;

/// Produces every square a piece can reach from `from` under its movement
/// geometry, bounded to the board. Occupancy is ignored here; the
/// simulation filters out squares held by other pieces.
///
/// Fails only if the geometry itself steps off the board.
pub trait MoveGenerator: Send + Sync {
    fn valid_moves(&self, from: Position) -> WalkResult<Vec<Position>>;
}
