//! The three pieces on the board, keyed by identity.

use std::fmt;

use crate::board::position::Position;
use crate::errors::{WalkError, WalkResult};
use crate::moves::bishop_moves::BishopMoves;
use crate::moves::knight_moves::KnightMoves;
use crate::moves::move_generator::MoveGenerator;
use crate::moves::queen_moves::QueenMoves;
use crate::pieces::piece_kind::PieceKind;

/// One piece: who it is, how it moves, and where it stands.
pub struct PieceRecord {
    pub kind: PieceKind,
    pub generator: Box<dyn MoveGenerator>,
    /// `None` until the pieces are placed.
    pub position: Option<Position>,
}

impl PieceRecord {
    pub fn new(kind: PieceKind, generator: Box<dyn MoveGenerator>) -> Self {
        Self {
            kind,
            generator,
            position: None,
        }
    }

    #[inline]
    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl fmt::Debug for PieceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieceRecord")
            .field("kind", &self.kind)
            .field("position", &self.position)
            .finish()
    }
}

#[derive(Debug)]
pub struct PieceRegister {
    records: [PieceRecord; 3],
}

impl PieceRegister {
    pub fn new() -> Self {
        Self::with_generators(
            Box::new(KnightMoves),
            Box::new(BishopMoves),
            Box::new(QueenMoves::new()),
        )
    }

    /// A register whose pieces move by the given generators instead of
    /// their standard geometry.
    pub fn with_generators(
        knight: Box<dyn MoveGenerator>,
        bishop: Box<dyn MoveGenerator>,
        queen: Box<dyn MoveGenerator>,
    ) -> Self {
        Self {
            records: [
                PieceRecord::new(PieceKind::Knight, knight),
                PieceRecord::new(PieceKind::Bishop, bishop),
                PieceRecord::new(PieceKind::Queen, queen),
            ],
        }
    }

    #[inline]
    pub fn record(&self, kind: PieceKind) -> &PieceRecord {
        &self.records[kind.index()]
    }

    /// Records in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = &PieceRecord> {
        self.records.iter()
    }

    #[inline]
    pub fn position(&self, kind: PieceKind) -> Option<Position> {
        self.records[kind.index()].position
    }

    /// Position of `kind`, failing when the pieces have not been placed.
    pub fn require_position(&self, kind: PieceKind) -> WalkResult<Position> {
        self.position(kind).ok_or(WalkError::SetupIncomplete)
    }

    pub fn set_position(&mut self, kind: PieceKind, position: Position) {
        self.records[kind.index()].position = Some(position);
    }

    pub fn is_placed(&self) -> bool {
        self.records.iter().all(|r| r.position.is_some())
    }

    pub fn any_placed(&self) -> bool {
        self.records.iter().any(|r| r.position.is_some())
    }

    /// Every square `kind` can reach from where it stands, ignoring the
    /// other pieces.
    pub fn reachable(&self, kind: PieceKind) -> WalkResult<Vec<Position>> {
        let from = self.require_position(kind)?;
        self.record(kind).generator.valid_moves(from)
    }

    /// True when `square` is held by one of the pieces other than `kind`.
    pub fn occupied_by_other(&self, kind: PieceKind, square: Position) -> bool {
        kind.others()
            .iter()
            .any(|other| self.position(*other) == Some(square))
    }

    /// The piece standing on `square`, if any.
    pub fn piece_at(&self, square: Position) -> Option<PieceKind> {
        self.records
            .iter()
            .find(|r| r.position == Some(square))
            .map(|r| r.kind)
    }

    /// True when all placed pieces stand on distinct squares.
    pub fn positions_distinct(&self) -> bool {
        let placed: Vec<Position> = self.records.iter().filter_map(|r| r.position).collect();
        placed
            .iter()
            .enumerate()
            .all(|(i, a)| placed[i + 1..].iter().all(|b| a != b))
    }
}

impl Default for PieceRegister {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i8, y: i8) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn unplaced_register_refuses_move_queries() {
        let register = PieceRegister::new();
        assert!(!register.is_placed());
        assert_eq!(
            register.reachable(PieceKind::Bishop),
            Err(WalkError::SetupIncomplete)
        );
    }

    #[test]
    fn records_are_keyed_by_kind() {
        let mut register = PieceRegister::new();
        register.set_position(PieceKind::Queen, pos(5, 5));
        assert_eq!(register.record(PieceKind::Queen).display_name(), "QUEUE");
        assert_eq!(register.position(PieceKind::Queen), Some(pos(5, 5)));
        assert_eq!(register.position(PieceKind::Knight), None);
        assert!(register.any_placed());
    }

    #[test]
    fn occupancy_ignores_the_moving_piece() {
        let mut register = PieceRegister::new();
        register.set_position(PieceKind::Knight, pos(1, 1));
        register.set_position(PieceKind::Bishop, pos(2, 3));
        register.set_position(PieceKind::Queen, pos(3, 2));

        assert!(register.occupied_by_other(PieceKind::Knight, pos(2, 3)));
        assert!(!register.occupied_by_other(PieceKind::Knight, pos(1, 1)));
        assert_eq!(register.piece_at(pos(3, 2)), Some(PieceKind::Queen));
        assert!(register.positions_distinct());
    }

    #[test]
    fn generators_follow_the_piece_kind() {
        let mut register = PieceRegister::new();
        for kind in PieceKind::ALL {
            register.set_position(kind, pos(4, 4));
        }
        assert!(!register.positions_distinct());
        assert_eq!(register.reachable(PieceKind::Knight).unwrap().len(), 8);
        assert_eq!(register.reachable(PieceKind::Bishop).unwrap().len(), 13);
        assert_eq!(register.reachable(PieceKind::Queen).unwrap().len(), 27);
    }
}
