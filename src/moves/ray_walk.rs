//! Shared ray stepping for the sliding pieces.

use crate::board::position::Position;
use crate::errors::WalkResult;

/// Unit step along one ray, as `(dx, dy)`.
pub type Step = (i8, i8);

/// Walks each ray out to its reach, nearest square first.
///
/// `steps[i]` is paired with `reach[i]`; rays are emitted in slice order.
/// A reach of zero contributes nothing for that ray. A reach that runs off
/// the board fails with `PositionOutOfRange`.
pub fn walk_rays(from: Position, steps: &[Step], reach: &[i8]) -> WalkResult<Vec<Position>> {
    debug_assert_eq!(steps.len(), reach.len());

    let mut out = Vec::with_capacity(reach.iter().map(|r| (*r).max(0) as usize).sum());
    for (&(dx, dy), &max_dist) in steps.iter().zip(reach) {
        for dist in 1..=max_dist {
            out.push(Position::new(
                from.x().saturating_add(dx.saturating_mul(dist)),
                from.y().saturating_add(dy.saturating_mul(dist)),
            )?);
        }
    }
    Ok(out)
}
