//! Check detection built directly on top of [`crate::chess::movegen`]: a
//! square is attacked if any opponent's piece has it among its pseudo-legal
//! destinations.
//!
//! This regenerates moves for every opponent's piece on each query, which is
//! fine for searches 3-4 plies deep but does not scale beyond that.

use crate::chess::board::Board;
use crate::chess::core::{Color, PieceKind, Square};
use crate::chess::movegen::pseudo_moves;

/// Returns the square of `color`'s king, if there is one on the board.
#[must_use]
pub fn king_square(color: Color, board: &Board) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
}

/// Returns `true` if any of `attacker`'s pieces can move to `target`.
///
/// Pawn pushes count as reaching their destination too, which only matters
/// for empty targets: an occupied square is never a push destination.
#[must_use]
pub fn is_attacked(target: Square, attacker: Color, board: &Board) -> bool {
    board
        .pieces_of(attacker)
        .any(|(square, piece)| pseudo_moves(piece, square, board).contains(&target))
}

/// Returns `true` if `color`'s king is attacked. A board without `color`'s
/// king is never in check, so partial test positions do not need one.
#[must_use]
pub fn in_check(color: Color, board: &Board) -> bool {
    king_square(color, board).is_some_and(|king| is_attacked(king, color.opponent(), board))
}

#[cfg(test)]
mod test {
    use super::*;

    fn setup(fen: &str) -> Board {
        Board::from_fen(fen).expect("parsing valid position").0
    }

    #[test]
    fn kings() {
        let board = Board::starting();
        assert_eq!(king_square(Color::White, &board), Some(Square::E1));
        assert_eq!(king_square(Color::Black, &board), Some(Square::E8));
        assert_eq!(king_square(Color::Black, &setup("8/8/8/8/8/8/8/4K3")), None);
    }

    #[test]
    fn no_check_at_start() {
        let board = Board::starting();
        assert!(!in_check(Color::White, &board));
        assert!(!in_check(Color::Black, &board));
    }

    #[test]
    fn checks_by_every_piece() {
        // Rook along the file.
        assert!(in_check(Color::White, &setup("4r2k/8/8/8/8/8/8/4K3")));
        // Bishop along the diagonal.
        assert!(in_check(Color::White, &setup("7k/8/8/b7/8/8/8/4K3")));
        // Queen.
        assert!(in_check(Color::Black, &setup("4k3/8/8/8/Q7/8/8/4K3")));
        // Knight.
        assert!(in_check(Color::Black, &setup("4k3/8/3N4/8/8/8/8/4K3")));
        // Pawns capture diagonally towards the opponent.
        assert!(in_check(Color::White, &setup("7k/8/8/8/8/8/3p4/4K3")));
        assert!(in_check(Color::Black, &setup("4k3/3P4/8/8/8/8/8/4K3")));
        assert!(!in_check(Color::White, &setup("7k/8/8/8/8/8/4p3/4K3")));
    }

    #[test]
    fn blocked_rays() {
        assert!(!in_check(Color::White, &setup("4r2k/8/8/8/8/8/4P3/4K3")));
        assert!(!in_check(Color::White, &setup("7k/8/8/b7/8/2n5/8/4K3")));
    }

    #[test]
    fn missing_king() {
        assert!(!in_check(Color::White, &setup("4r2k/8/8/8/8/8/8/8")));
        assert!(!in_check(Color::Black, &Board::empty()));
    }

    #[test]
    fn attacked_squares() {
        let board = Board::starting();
        assert!(is_attacked(Square::F3, Color::White, &board));
        assert!(is_attacked(Square::E4, Color::White, &board));
        assert!(!is_attacked(Square::E5, Color::White, &board));
        assert!(is_attacked(Square::C6, Color::Black, &board));
    }
}
