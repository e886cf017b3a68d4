//! Text board renderer.
//!
//! Draws the walk's board for diagnostics, with `y = 8` on the top row.

use crate::board::position::{Position, BOARD_MAX, BOARD_MIN};
use crate::pieces::piece_register::PieceRegister;

/// Render the board with `N`, `B`, `Q` markers and `·` for empty squares.
pub fn render_board(register: &PieceRegister) -> String {
    let mut out = String::new();

    out.push_str("  1 2 3 4 5 6 7 8\n");

    for y in (BOARD_MIN..=BOARD_MAX).rev() {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for x in BOARD_MIN..=BOARD_MAX {
            let marker = Position::new(x, y)
                .ok()
                .and_then(|square| register.piece_at(square))
                .map(|kind| kind.symbol())
                .unwrap_or('·');
            out.push(marker);

            if x < BOARD_MAX {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + y as u8));
        out.push('\n');
    }

    out.push_str("  1 2 3 4 5 6 7 8");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board::position::Position;
    use crate::pieces::piece_kind::PieceKind;
    use crate::pieces::piece_register::PieceRegister;

    #[test]
    fn empty_register_renders_blank_board() {
        let text = render_board(&PieceRegister::new());
        assert_eq!(text.lines().count(), 10);
        assert!(!text.contains('N'));
        assert_eq!(text.matches('·').count(), 64);
    }

    #[test]
    fn markers_land_on_their_squares() {
        let mut register = PieceRegister::new();
        register.set_position(PieceKind::Knight, Position::new(1, 1).unwrap());
        register.set_position(PieceKind::Bishop, Position::new(8, 8).unwrap());
        register.set_position(PieceKind::Queen, Position::new(4, 5).unwrap());

        let text = render_board(&register);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows[1], "8 · · · · · · · B 8");
        assert_eq!(rows[4], "5 · · · Q · · · · 5");
        assert_eq!(rows[8], "1 N · · · · · · · 1");
    }
}
