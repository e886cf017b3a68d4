//! Identities of the three walking pieces.

/// Piece identity. Declaration order is the reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Knight,
    Bishop,
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Knight => 0,
            PieceKind::Bishop => 1,
            PieceKind::Queen => 2,
        }
    }

    /// Name printed in status lines.
    ///
    /// The queen reports as "QUEUE"; downstream consumers of the status
    /// lines match on that literal.
    pub const fn display_name(self) -> &'static str {
        match self {
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Queen => "QUEUE",
        }
    }

    /// Single-letter marker used by the board renderer.
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
        }
    }

    /// The two pieces other than `self`, in reporting order.
    pub fn others(self) -> [PieceKind; 2] {
        match self {
            PieceKind::Knight => [PieceKind::Bishop, PieceKind::Queen],
            PieceKind::Bishop => [PieceKind::Knight, PieceKind::Queen],
            PieceKind::Queen => [PieceKind::Knight, PieceKind::Bishop],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PieceKind;

    #[test]
    fn index_matches_all_order() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn others_never_include_self() {
        for kind in PieceKind::ALL {
            let others = kind.others();
            assert!(!others.contains(&kind));
            assert_ne!(others[0], others[1]);
        }
    }

    #[test]
    fn queen_keeps_its_report_name() {
        assert_eq!(PieceKind::Queen.display_name(), "QUEUE");
    }
}
