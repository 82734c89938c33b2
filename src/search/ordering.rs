//! [Move ordering] for the pruning search: captures are tried before quiet
//! moves, which tends to tighten the alpha-beta window early.
//!
//! [Move ordering]: https://www.chessprogramming.org/Move_Ordering

use crate::chess::board::Board;
use crate::chess::core::{Color, Move};
use crate::chess::legal::legal_moves;

/// Legal moves of `color` with all captures first. Within each group the
/// legal move generator's order is kept. With `captures_only` set, quiet
/// moves are dropped entirely (used by quiescence search).
#[must_use]
pub fn ordered_moves(color: Color, board: &Board, captures_only: bool) -> Vec<Move> {
    let (mut captures, quiet): (Vec<_>, Vec<_>) = legal_moves(color, board)
        .into_iter()
        .partition(|next_move| board.is_capture(*next_move));
    if !captures_only {
        captures.extend(quiet);
    }
    captures
}
