//! Random walk of the knight, bishop and queen.
//!
//! `setup` scatters the three pieces on distinct squares, then each `play`
//! step picks a piece at random and moves it to a random reachable square
//! that the other two pieces do not hold. The random source is injected so
//! seeded runs replay exactly.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::board::position::{Position, BOARD_MAX, BOARD_MIN};
use crate::errors::{RetryStage, WalkError, WalkResult};
use crate::pieces::piece_kind::PieceKind;
use crate::pieces::piece_register::PieceRegister;
use crate::simulation::report::{initial_line, move_line, ReportSink};
use crate::simulation::walk_config::WalkConfig;

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub step: u32,
    pub piece: PieceKind,
    pub from: Position,
    pub to: Position,
    /// Candidates drawn and thrown away because another piece held them.
    pub rejected: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub moves_played: u32,
    pub rejected_candidates: u64,
    /// Indexed by `PieceKind::index`.
    pub moves_by_piece: [u32; 3],
    pub info_lines: Vec<String>,
}

impl WalkSummary {
    fn record(&mut self, record: &MoveRecord) {
        self.moves_played += 1;
        self.rejected_candidates += u64::from(record.rejected);
        self.moves_by_piece[record.piece.index()] += 1;
    }

    pub fn report(&self) -> String {
        format!(
            "moves={} rejected={} knight={} bishop={} queen={}",
            self.moves_played,
            self.rejected_candidates,
            self.moves_by_piece[PieceKind::Knight.index()],
            self.moves_by_piece[PieceKind::Bishop.index()],
            self.moves_by_piece[PieceKind::Queen.index()],
        )
    }
}

pub struct RandomWalk<R: Rng> {
    register: PieceRegister,
    rng: R,
    config: WalkConfig,
    seed: Option<u64>,
}

impl RandomWalk<StdRng> {
    /// A walk whose every draw is fixed by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let mut walk = Self::new(StdRng::seed_from_u64(seed));
        walk.seed = Some(seed);
        walk
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomWalk<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, WalkConfig::default())
    }

    pub fn with_config(rng: R, config: WalkConfig) -> Self {
        Self::with_register(rng, config, PieceRegister::new())
    }

    /// A walk over a prepared register, e.g. one built with custom
    /// generators.
    pub fn with_register(rng: R, config: WalkConfig, register: PieceRegister) -> Self {
        Self {
            register,
            rng,
            config,
            seed: None,
        }
    }

    pub fn register(&self) -> &PieceRegister {
        &self.register
    }

    pub fn position(&self, piece: PieceKind) -> Option<Position> {
        self.register.position(piece)
    }

    /// Places the knight anywhere, then redraws the bishop and the queen
    /// until each lands on a square nobody holds yet.
    pub fn setup(&mut self) -> WalkResult<()> {
        if self.register.any_placed() {
            return Err(WalkError::AlreadySetUp);
        }

        let knight = self.random_square()?;
        let bishop = self.place_apart(PieceKind::Bishop, &[knight])?;
        let queen = self.place_apart(PieceKind::Queen, &[knight, bishop])?;

        self.register.set_position(PieceKind::Knight, knight);
        self.register.set_position(PieceKind::Bishop, bishop);
        self.register.set_position(PieceKind::Queen, queen);
        Ok(())
    }

    /// Places the pieces on fixed squares instead of random ones.
    pub fn setup_with(
        &mut self,
        knight: Position,
        bishop: Position,
        queen: Position,
    ) -> WalkResult<()> {
        if self.register.any_placed() {
            return Err(WalkError::AlreadySetUp);
        }

        let placed = [
            (PieceKind::Knight, knight),
            (PieceKind::Bishop, bishop),
            (PieceKind::Queen, queen),
        ];
        for (i, &(first, a)) in placed.iter().enumerate() {
            for &(second, b) in &placed[i + 1..] {
                if a == b {
                    return Err(WalkError::Collision {
                        first,
                        second,
                        square: a,
                    });
                }
            }
        }

        for (kind, square) in placed {
            self.register.set_position(kind, square);
        }
        Ok(())
    }

    /// Reports the starting squares as step 0, then plays `moves` random
    /// moves, reporting each as it is applied.
    pub fn play<S: ReportSink + ?Sized>(
        &mut self,
        moves: u32,
        sink: &mut S,
    ) -> WalkResult<WalkSummary> {
        if !self.register.is_placed() {
            return Err(WalkError::SetupIncomplete);
        }

        for record in self.register.iter() {
            let position = record.position.ok_or(WalkError::SetupIncomplete)?;
            sink.emit(&initial_line(0, record.kind, position))?;
        }

        let mut summary = WalkSummary::default();
        for step in 1..=moves {
            let record = self.step(step)?;
            sink.emit(&move_line(step, record.piece, record.from, record.to))?;
            summary.record(&record);
        }

        if let Some(seed) = self.seed {
            summary
                .info_lines
                .push(format!("info string random_walk seed {seed}"));
        }
        summary.info_lines.push(format!(
            "info string random_walk moves {} rejected_candidates {}",
            summary.moves_played, summary.rejected_candidates
        ));
        for kind in PieceKind::ALL {
            summary.info_lines.push(format!(
                "info string random_walk piece {} moves {}",
                kind.display_name(),
                summary.moves_by_piece[kind.index()]
            ));
        }

        Ok(summary)
    }

    /// Moves a randomly chosen piece without reporting it.
    pub fn step(&mut self, step: u32) -> WalkResult<MoveRecord> {
        if !self.register.is_placed() {
            return Err(WalkError::SetupIncomplete);
        }
        let piece = choose(&mut self.rng, &PieceKind::ALL)?;
        self.move_piece(piece, step)
    }

    /// Moves `piece` to a random reachable square not held by the other two.
    pub fn move_piece(&mut self, piece: PieceKind, step: u32) -> WalkResult<MoveRecord> {
        if !self.register.is_placed() {
            return Err(WalkError::SetupIncomplete);
        }
        let from = self.register.require_position(piece)?;
        let candidates = self.register.reachable(piece)?;

        // Rejection sampling below would never end on a fully blocked list.
        if candidates
            .iter()
            .all(|square| self.register.occupied_by_other(piece, *square))
        {
            return Err(WalkError::NoLegalMove { piece, from });
        }

        let mut attempts = 0u32;
        loop {
            if attempts >= self.config.max_move_attempts {
                return Err(WalkError::RetryLimitExceeded {
                    stage: RetryStage::Move(piece),
                    attempts,
                });
            }
            attempts += 1;

            let to = choose(&mut self.rng, &candidates)?;
            if !self.register.occupied_by_other(piece, to) {
                self.register.set_position(piece, to);
                return Ok(MoveRecord {
                    step,
                    piece,
                    from,
                    to,
                    rejected: attempts - 1,
                });
            }
        }
    }

    fn random_square(&mut self) -> WalkResult<Position> {
        let x = self.rng.random_range(BOARD_MIN..=BOARD_MAX);
        let y = self.rng.random_range(BOARD_MIN..=BOARD_MAX);
        Position::new(x, y)
    }

    fn place_apart(&mut self, piece: PieceKind, taken: &[Position]) -> WalkResult<Position> {
        for _ in 0..self.config.max_placement_attempts {
            let square = self.random_square()?;
            if !taken.contains(&square) {
                return Ok(square);
            }
        }
        Err(WalkError::RetryLimitExceeded {
            stage: RetryStage::Placement(piece),
            attempts: self.config.max_placement_attempts,
        })
    }
}

fn choose<R: Rng + ?Sized, T: Copy>(rng: &mut R, items: &[T]) -> WalkResult<T> {
    items.choose(rng).copied().ok_or(WalkError::EmptySelection)
}
