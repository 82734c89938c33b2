//! Implementation of the [Minimax] algorithm: every line is explored up to the
//! requested depth and leaves are scored by the static evaluation.
//!
//! [Minimax]: https://en.wikipedia.org/wiki/Minimax

use super::{finish, pick_best, terminal_score, Depth, Search, SearchConfig, SearchResult};
use crate::chess::board::Board;
use crate::chess::core::Color;
use crate::chess::legal::legal_moves;
use crate::evaluation::{evaluate, Score};

/// Exhaustive fixed-depth search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Minimax;

impl Minimax {
    /// Value of `board` with `side` to move, looking `depth` plies ahead.
    fn value(board: &Board, depth: Depth, side: Color, nodes: &mut u64) -> Score {
        *nodes += 1;
        if depth == 0 {
            return evaluate(board);
        }
        let moves = legal_moves(side, board);
        if moves.is_empty() {
            return terminal_score(side, board);
        }
        let children = moves.into_iter().map(|next_move| {
            Self::value(&board.apply(next_move), depth - 1, side.opponent(), nodes)
        });
        match side {
            Color::White => children.fold(-Score::INFINITY, Score::max),
            Color::Black => children.fold(Score::INFINITY, Score::min),
        }
    }
}

impl Search for Minimax {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&self, board: &Board, config: SearchConfig) -> SearchResult {
        let SearchConfig { depth, side } = config;
        let mut nodes = 1;
        let best = pick_best(
            side,
            legal_moves(side, board).into_iter().map(|next_move| {
                let value = Self::value(
                    &board.apply(next_move),
                    depth.saturating_sub(1),
                    side.opponent(),
                    &mut nodes,
                );
                (next_move, value)
            }),
        );
        finish(self.name(), side, board, best, nodes)
    }
}
