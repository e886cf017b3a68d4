//! Tunables for the simulation's rejection-sampling loops.

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// Draws allowed when placing the bishop, and again for the queen.
    pub max_placement_attempts: u32,
    /// Candidate draws allowed for a single move.
    pub max_move_attempts: u32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_placement_attempts: DEFAULT_MAX_ATTEMPTS,
            max_move_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
