//! Material balance using the piece values of the "[Simplified Evaluation
//! Function]". The king's value only makes sure no trade ever looks better
//! than keeping it.
//!
//! [Simplified Evaluation Function]: https://www.chessprogramming.org/Simplified_Evaluation_Function

use crate::chess::board::Board;
use crate::chess::core::{Color, PieceKind};

const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;
const KING_VALUE: i32 = 20_000;

/// Value of a single piece in centipawns.
#[must_use]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Material of White's pieces minus material of Black's pieces.
#[must_use]
pub fn material_advantage(board: &Board) -> i32 {
    board
        .pieces()
        .map(|(_, piece)| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}
