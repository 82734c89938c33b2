//! The single definition of a legal move used throughout the engine: a
//! pseudo-legal move that does not leave the mover's own king in check.
//! Checkmate and stalemate detection are built on the same filter.

use crate::chess::attacks::in_check;
use crate::chess::board::Board;
use crate::chess::core::{Color, Move, Square};
use crate::chess::movegen::{pseudo_moves, Destinations};

/// Game state from the perspective of the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// There is at least one legal move.
    Ongoing,
    /// No legal moves and the king is in check.
    Checkmate,
    /// No legal moves but the king is not in check.
    Stalemate,
}

/// Legal destinations of the piece standing on `from`, empty if the square is
/// empty. The piece's own color decides which king has to stay safe.
#[must_use]
pub fn legal_destinations(from: Square, board: &Board) -> Destinations {
    let Some(piece) = board.at(from) else {
        return Destinations::new();
    };
    let mut destinations = pseudo_moves(piece, from, board);
    destinations.retain(|to| !in_check(piece.color, &board.apply(Move::new(from, *to))));
    destinations
}

/// Calculates a list of legal moves for `color`, i.e. the moves that do not
/// leave `color`'s king in check.
///
/// Moves are listed by source square index (Black's back rank first), then in
/// the generator's destination order.
#[must_use]
pub fn legal_moves(color: Color, board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(50);
    for (from, _) in board.pieces_of(color) {
        moves.extend(
            legal_destinations(from, board)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Checkmate holds iff `color` is in check and has no legal moves.
#[must_use]
pub fn is_checkmate(color: Color, board: &Board) -> bool {
    in_check(color, board) && legal_moves(color, board).is_empty()
}

/// Stalemate holds iff `color` is not in check and has no legal moves.
#[must_use]
pub fn is_stalemate(color: Color, board: &Board) -> bool {
    !in_check(color, board) && legal_moves(color, board).is_empty()
}

#[allow(missing_docs)]
#[must_use]
pub fn status(color: Color, board: &Board) -> Status {
    if !legal_moves(color, board).is_empty() {
        return Status::Ongoing;
    }
    if in_check(color, board) {
        Status::Checkmate
    } else {
        Status::Stalemate
    }
}
