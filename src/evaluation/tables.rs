//! Piece-square tables: positional bonuses on top of material. Tables are
//! written from White's point of view with row 0 being Black's back rank, the
//! way the board is printed. Black reads them mirrored vertically.
//!
//! The king has no table.

use crate::chess::core::{Color, Piece, PieceKind, Square, BOARD_WIDTH};

type Table = [[i32; BOARD_WIDTH as usize]; BOARD_WIDTH as usize];

#[rustfmt::skip]
const PAWN: Table = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  27,  27,  10,   5,   5],
    [  0,   0,   0,  25,  25,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -25, -25,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const KNIGHT: Table = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP: Table = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK: Table = [
    [  0,   0,   0,   5,   5,   0,   0,   0],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [ -5,   0,   0,   0,   0,   0,   0,  -5],
    [  5,  10,  10,  10,  10,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
const QUEEN: Table = [
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,   5,   5,   5,   0, -10],
    [ -5,   0,   5,   5,   5,   5,   0,  -5],
    [  0,   0,   5,   5,   5,   5,   0,  -5],
    [-10,   5,   5,   5,   5,   5,   0, -10],
    [-10,   0,   5,   0,   0,   0,   0, -10],
    [-20, -10, -10,  -5,  -5, -10, -10, -20],
];

const fn table(kind: PieceKind) -> Option<&'static Table> {
    match kind {
        PieceKind::Pawn => Some(&PAWN),
        PieceKind::Knight => Some(&KNIGHT),
        PieceKind::Bishop => Some(&BISHOP),
        PieceKind::Rook => Some(&ROOK),
        PieceKind::Queen => Some(&QUEEN),
        PieceKind::King => None,
    }
}

/// Positional bonus of `piece` standing on `square`, signed like the rest of
/// the evaluation: White's bonuses are positive, Black's are negative.
#[must_use]
pub fn positional_bonus(piece: Piece, square: Square) -> i32 {
    let Some(table) = table(piece.kind) else {
        return 0;
    };
    match piece.color {
        Color::White => table[square.row() as usize][square.column() as usize],
        Color::Black => {
            let square = square.flipped();
            -table[square.row() as usize][square.column() as usize]
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_values() {
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(positional_bonus(white_pawn, Square::D2), -25);
        assert_eq!(positional_bonus(white_pawn, Square::D4), 25);
        assert_eq!(positional_bonus(white_pawn, Square::A7), 50);

        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);
        assert_eq!(positional_bonus(black_pawn, Square::D7), 25);
        assert_eq!(positional_bonus(black_pawn, Square::D5), -25);
        assert_eq!(positional_bonus(black_pawn, Square::A2), -50);

        let white_knight = Piece::new(Color::White, PieceKind::Knight);
        assert_eq!(positional_bonus(white_knight, Square::A1), -50);
        assert_eq!(positional_bonus(white_knight, Square::E4), 20);

        let black_rook = Piece::new(Color::Black, PieceKind::Rook);
        assert_eq!(positional_bonus(black_rook, Square::B7), -10);
        assert_eq!(positional_bonus(black_rook, Square::A2), 5);

        // The queen's table is not left-right symmetric.
        let white_queen = Piece::new(Color::White, PieceKind::Queen);
        assert_eq!(positional_bonus(white_queen, Square::A4), 0);
        assert_eq!(positional_bonus(white_queen, Square::H4), -5);
    }

    #[test]
    fn king_has_no_table() {
        for square in Square::iter() {
            for color in [Color::White, Color::Black] {
                assert_eq!(
                    positional_bonus(Piece::new(color, PieceKind::King), square),
                    0
                );
            }
        }
    }

    #[test]
    fn colors_mirror_each_other() {
        for kind in [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
        ] {
            for square in Square::iter() {
                assert_eq!(
                    positional_bonus(Piece::new(Color::White, kind), square),
                    -positional_bonus(Piece::new(Color::Black, kind), square.flipped())
                );
            }
        }
    }
}
