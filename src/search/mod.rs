//! Game tree search: picks the best move for the side to move by looking a
//! fixed number of plies ahead.
//!
//! Two interchangeable strategies implement the [`Search`] trait:
//!
//! - [`Minimax`] explores the whole tree up to the requested depth.
//! - [`AlphaBeta`] prunes subtrees that can not affect the result, tries
//!   captures first and extends the horizon with a capture-only
//!   [quiescence] search.
//!
//! Both score positions from White's perspective: White maximizes and Black
//! minimizes. An empty result ([`SearchResult::best_move`] is `None`) means
//! the side to move has no legal moves; the caller decides between checkmate
//! and stalemate with [`crate::chess::attacks::in_check`].
//!
//! [quiescence]: https://www.chessprogramming.org/Quiescence_Search

mod alphabeta;
mod minimax;
pub mod ordering;

use std::fmt::Display;

pub use alphabeta::{quiescence, AlphaBeta};
pub use minimax::Minimax;

use crate::chess::attacks::in_check;
use crate::chess::board::Board;
use crate::chess::core::{Color, Move};
use crate::evaluation::Score;

/// Search depth in plies.
pub type Depth = u8;

/// Parameters of a single root search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of plies to look ahead. Depth 0 and 1 both score every root
    /// move by its immediate result.
    pub depth: Depth,
    /// Side to move at the root.
    pub side: Color,
}

impl SearchConfig {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(depth: Depth, side: Color) -> Self {
        Self { depth, side }
    }
}

/// Outcome of a root search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` if and only if the side to move has no legal moves.
    pub best_move: Option<Move>,
    /// Value of the position for White after `best_move`, or the terminal
    /// value of the root when there is no move.
    pub score: Score,
    /// Number of visited positions, quiescence included.
    pub nodes: u64,
}

/// Selects a move given a board, search depth and side to move.
pub trait Search {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Scores every legal root move and keeps the best one for
    /// `config.side`.
    fn search(&self, board: &Board, config: SearchConfig) -> SearchResult;

    /// Best move only, `None` for checkmate or stalemate.
    fn choose_move(&self, board: &Board, config: SearchConfig) -> Option<Move> {
        self.search(board, config).best_move
    }
}

/// Search strategy selector for callers that pick one at runtime.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    /// Exhaustive search.
    Minimax,
    /// Alpha-beta with quiescence search.
    #[default]
    AlphaBeta,
}

impl Algorithm {
    /// Runs the selected strategy with its default settings.
    #[must_use]
    pub fn search(self, board: &Board, config: SearchConfig) -> SearchResult {
        match self {
            Self::Minimax => Minimax.search(board, config),
            Self::AlphaBeta => AlphaBeta::default().search(board, config),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minimax => write!(f, "minimax"),
            Self::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Returns the best move for `side` or `None` if it has no legal moves.
///
/// ```
/// use versus::chess::board::Board;
/// use versus::chess::core::Color;
/// use versus::search::{choose_move, Algorithm};
///
/// let (board, _) = Board::from_fen("4k3/8/8/3q4/8/8/8/3QK3 w").unwrap();
/// let best = choose_move(&board, 1, Color::White, Algorithm::Minimax).unwrap();
/// assert_eq!(best.to_string(), "d1d5");
/// ```
#[must_use]
pub fn choose_move(board: &Board, depth: Depth, side: Color, algorithm: Algorithm) -> Option<Move> {
    algorithm.search(board, SearchConfig::new(depth, side)).best_move
}

/// Value of a position where `side` has no legal moves: being checkmated is
/// the worst possible outcome for that side, stalemate is a draw.
pub(crate) fn terminal_score(side: Color, board: &Board) -> Score {
    if !in_check(side, board) {
        return Score::DRAW;
    }
    match side {
        Color::White => -Score::INFINITY,
        Color::Black => Score::INFINITY,
    }
}

/// Keeps the best scored root move for `side`. The first move seen wins
/// ties, so a move is returned whenever there is at least one candidate.
pub(crate) fn pick_best(
    side: Color,
    candidates: impl IntoIterator<Item = (Move, Score)>,
) -> Option<(Move, Score)> {
    let mut best: Option<(Move, Score)> = None;
    for (next_move, score) in candidates {
        let improves = match best {
            None => true,
            Some((_, best_score)) => match side {
                Color::White => score > best_score,
                Color::Black => score < best_score,
            },
        };
        if improves {
            best = Some((next_move, score));
        }
    }
    best
}

/// Wraps up a root search and logs its result.
pub(crate) fn finish(
    name: &'static str,
    side: Color,
    board: &Board,
    best: Option<(Move, Score)>,
    nodes: u64,
) -> SearchResult {
    let (best_move, score) = match best {
        Some((next_move, score)) => (Some(next_move), score),
        None => (None, terminal_score(side, board)),
    };
    tracing::debug!(
        algorithm = name,
        %side,
        best_move = ?best_move.map(|m| m.to_string()),
        %score,
        nodes,
        "search finished"
    );
    SearchResult {
        best_move,
        score,
        nodes,
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::Square;

    fn setup(fen: &str) -> (Board, Color) {
        Board::from_fen(fen).expect("parsing valid position")
    }

    #[test]
    fn terminal_scores() {
        let (board, side) = setup("R5k1/5ppp/8/8/8/8/8/6K1 b");
        assert_eq!(terminal_score(side, &board), Score::INFINITY);
        let (board, side) = setup("7k/5Q2/6K1/8/8/8/8/8 b");
        assert_eq!(terminal_score(side, &board), Score::DRAW);
        let (board, side) = setup("6rk/8/8/8/8/8/5PPP/r5K1 w");
        assert_eq!(terminal_score(side, &board), -Score::INFINITY);
    }

    #[test]
    fn first_seen_wins_ties() {
        let e2e4 = Move::new(Square::E2, Square::E4);
        let d2d4 = Move::new(Square::D2, Square::D4);
        let g1f3 = Move::new(Square::G1, Square::F3);
        let candidates = [
            (e2e4, Score::cp(10)),
            (d2d4, Score::cp(10)),
            (g1f3, Score::cp(-5)),
        ];
        assert_eq!(
            pick_best(Color::White, candidates),
            Some((e2e4, Score::cp(10)))
        );
        assert_eq!(
            pick_best(Color::Black, candidates),
            Some((g1f3, Score::cp(-5)))
        );
        assert_eq!(pick_best(Color::White, []), None);
    }

    #[test]
    fn hopeless_root_still_moves() {
        let e2e4 = Move::new(Square::E2, Square::E4);
        let d2d4 = Move::new(Square::D2, Square::D4);
        assert_eq!(
            pick_best(
                Color::White,
                [(e2e4, -Score::INFINITY), (d2d4, -Score::INFINITY)]
            ),
            Some((e2e4, -Score::INFINITY))
        );
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::default(), Algorithm::AlphaBeta);
        assert_eq!(Algorithm::Minimax.to_string(), "minimax");
        assert_eq!(Algorithm::AlphaBeta.to_string(), "alpha-beta");
    }

    #[test]
    fn no_move() {
        let (board, side) = setup("R5k1/5ppp/8/8/8/8/8/6K1 b");
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let result = algorithm.search(&board, SearchConfig::new(3, side));
            assert_eq!(result.best_move, None);
            assert_eq!(result.score, Score::INFINITY);
            assert_eq!(choose_move(&board, 3, side, algorithm), None);
        }
    }
}
