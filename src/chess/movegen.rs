//! Pseudo-legal move generation: where a piece may go by its movement rules
//! alone, regardless of whether the move would leave its own king in check.
//! [`crate::chess::legal`] filters the result down to legal moves.
//!
//! Castling and en passant are not generated. Promotion is not a separate
//! move either: a pawn simply moves to the last rank.

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Piece, PieceKind, Square};

/// A queen in the middle of an empty board reaches 27 squares, no piece can do
/// better.
pub const MAX_DESTINATIONS: usize = 27;

/// Destination squares of a single piece.
pub type Destinations = ArrayVec<Square, MAX_DESTINATIONS>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Calculates squares `piece` standing on `from` can move to.
///
/// The destination order is stable (the search relies on it for tie-breaks):
/// pawn pushes before pawn captures, offsets and rays in their fixed order.
#[must_use]
pub fn pseudo_moves(piece: Piece, from: Square, board: &Board) -> Destinations {
    let mut destinations = Destinations::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(piece, from, board, &mut destinations),
        PieceKind::Knight => jumps(piece, from, board, &KNIGHT_OFFSETS, &mut destinations),
        PieceKind::Bishop => slides(piece, from, board, &BISHOP_DIRECTIONS, &mut destinations),
        PieceKind::Rook => slides(piece, from, board, &ROOK_DIRECTIONS, &mut destinations),
        PieceKind::Queen => slides(piece, from, board, &QUEEN_DIRECTIONS, &mut destinations),
        PieceKind::King => {
            for rows in -1..=1 {
                for columns in -1..=1 {
                    if rows == 0 && columns == 0 {
                        continue;
                    }
                    if let Some(to) = from.offset(rows, columns) {
                        if can_land(piece, to, board) {
                            destinations.push(to);
                        }
                    }
                }
            }
        },
    }
    destinations
}

/// Empty squares and squares with opponent's pieces are reachable.
fn can_land(piece: Piece, to: Square, board: &Board) -> bool {
    board.at(to).map_or(true, |target| target.color != piece.color)
}

fn pawn_moves(piece: Piece, from: Square, board: &Board, destinations: &mut Destinations) {
    let direction = piece.color.pawn_direction();
    if let Some(single_push) = from.offset(direction, 0) {
        if board.at(single_push).is_none() {
            destinations.push(single_push);
            if from.row() == piece.color.pawn_starting_row() {
                if let Some(double_push) = from.offset(2 * direction, 0) {
                    if board.at(double_push).is_none() {
                        destinations.push(double_push);
                    }
                }
            }
        }
    }
    for side in [-1, 1] {
        if let Some(to) = from.offset(direction, side) {
            if board.at(to).is_some_and(|target| target.color != piece.color) {
                destinations.push(to);
            }
        }
    }
}

fn jumps(
    piece: Piece,
    from: Square,
    board: &Board,
    offsets: &[(i8, i8)],
    destinations: &mut Destinations,
) {
    for &(rows, columns) in offsets {
        if let Some(to) = from.offset(rows, columns) {
            if can_land(piece, to, board) {
                destinations.push(to);
            }
        }
    }
}

/// Scans each ray until the board edge or the first occupied square, which is
/// included only when it holds an opponent's piece.
fn slides(
    piece: Piece,
    from: Square,
    board: &Board,
    directions: &[(i8, i8)],
    destinations: &mut Destinations,
) {
    for &(rows, columns) in directions {
        let mut current = from;
        while let Some(to) = current.offset(rows, columns) {
            match board.at(to) {
                None => destinations.push(to),
                Some(target) => {
                    if target.color != piece.color {
                        destinations.push(to);
                    }
                    break;
                },
            }
            current = to;
        }
    }
}
