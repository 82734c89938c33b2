//! Minimax with [Alpha-Beta pruning], captures-first move ordering and a
//! capture-only [quiescence search] at the horizon.
//!
//! Every root move is searched with its own full `(-inf, +inf)` window.
//!
//! [Alpha-Beta pruning]: https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
//! [quiescence search]: https://www.chessprogramming.org/Quiescence_Search

use super::ordering::ordered_moves;
use super::{finish, pick_best, terminal_score, Depth, Search, SearchConfig, SearchResult};
use crate::chess::board::Board;
use crate::chess::core::Color;
use crate::evaluation::{evaluate, Score};

/// Depth-limited minimax with alpha-beta cutoffs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlphaBeta {
    /// Resolve captures past the horizon instead of evaluating leaves
    /// directly. With this off, the search returns the same values as
    /// [`super::Minimax`].
    pub quiescence: bool,
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self { quiescence: true }
    }
}

impl AlphaBeta {
    fn alpha_beta(
        self,
        board: &Board,
        depth: Depth,
        mut alpha: Score,
        mut beta: Score,
        side: Color,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;
        if depth == 0 {
            return if self.quiescence {
                quiesce(board, alpha, beta, side, nodes)
            } else {
                evaluate(board)
            };
        }
        let moves = ordered_moves(side, board, false);
        if moves.is_empty() {
            return terminal_score(side, board);
        }
        match side {
            Color::White => {
                let mut best = -Score::INFINITY;
                for next_move in moves {
                    let value = self.alpha_beta(
                        &board.apply(next_move),
                        depth - 1,
                        alpha,
                        beta,
                        Color::Black,
                        nodes,
                    );
                    best = best.max(value);
                    alpha = alpha.max(value);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            },
            Color::Black => {
                let mut best = Score::INFINITY;
                for next_move in moves {
                    let value = self.alpha_beta(
                        &board.apply(next_move),
                        depth - 1,
                        alpha,
                        beta,
                        Color::White,
                        nodes,
                    );
                    best = best.min(value);
                    beta = beta.min(value);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            },
        }
    }
}

impl Search for AlphaBeta {
    fn name(&self) -> &'static str {
        if self.quiescence {
            "alpha-beta"
        } else {
            "alpha-beta (no quiescence)"
        }
    }

    fn search(&self, board: &Board, config: SearchConfig) -> SearchResult {
        let SearchConfig { depth, side } = config;
        let mut nodes = 1;
        let best = pick_best(
            side,
            ordered_moves(side, board, false)
                .into_iter()
                .map(|next_move| {
                    let value = self.alpha_beta(
                        &board.apply(next_move),
                        depth.saturating_sub(1),
                        -Score::INFINITY,
                        Score::INFINITY,
                        side.opponent(),
                        &mut nodes,
                    );
                    (next_move, value)
                }),
        );
        finish(self.name(), side, board, best, nodes)
    }
}

/// Full-window quiescence search of `board` with `side` to move: the static
/// evaluation once no capture improves on it for the side to move.
#[must_use]
pub fn quiescence(board: &Board, side: Color) -> Score {
    let mut nodes = 0;
    quiesce(board, -Score::INFINITY, Score::INFINITY, side, &mut nodes)
}

/// Fail-hard quiescence: the result is clamped to `[alpha, beta]`. Only
/// captures are searched and each one removes a piece, so the recursion is
/// finite.
fn quiesce(
    board: &Board,
    mut alpha: Score,
    mut beta: Score,
    side: Color,
    nodes: &mut u64,
) -> Score {
    *nodes += 1;
    let stand_pat = evaluate(board);
    match side {
        Color::White => {
            if stand_pat >= beta {
                return beta;
            }
            alpha = alpha.max(stand_pat);
        },
        Color::Black => {
            if stand_pat <= alpha {
                return alpha;
            }
            beta = beta.min(stand_pat);
        },
    }
    for capture in ordered_moves(side, board, true) {
        let score = quiesce(&board.apply(capture), alpha, beta, side.opponent(), nodes);
        match side {
            Color::White => {
                if score >= beta {
                    return beta;
                }
                alpha = alpha.max(score);
            },
            Color::Black => {
                if score <= alpha {
                    return alpha;
                }
                beta = beta.min(score);
            },
        }
    }
    match side {
        Color::White => alpha,
        Color::Black => beta,
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::{Move, Square};
    use crate::search::Minimax;

    fn setup(fen: &str) -> (Board, Color) {
        Board::from_fen(fen).expect("parsing valid position")
    }

    #[test]
    fn quiescence_resolves_hanging_piece() {
        // White wins the rook on d5 with its own rook.
        let (board, side) = setup("4k3/8/8/3r4/8/8/8/3RK3 w");
        assert_eq!(evaluate(&board), Score::cp(0));
        assert_eq!(quiescence(&board, side), Score::cp(500));
    }

    #[test]
    fn quiescence_resolves_hanging_piece_for_black() {
        // Black wins the rook on d4 with its own rook.
        let (board, side) = setup("3rk3/8/8/8/3R4/8/8/4K3 b");
        assert_eq!(evaluate(&board), Score::cp(0));
        assert_eq!(quiescence(&board, side), Score::cp(-500));
        let mut nodes = 0;
        assert_eq!(
            quiesce(&board, Score::cp(-100), Score::cp(50), side, &mut nodes),
            Score::cp(-100)
        );
    }

    #[test]
    fn quiescence_stands_pat_without_captures() {
        let board = Board::starting();
        assert_eq!(quiescence(&board, Color::White), evaluate(&board));
        assert_eq!(quiescence(&board, Color::Black), evaluate(&board));
    }

    #[test]
    fn quiescence_is_clamped_to_window() {
        let (board, side) = setup("4k3/8/8/3r4/8/8/8/3RK3 w");
        let mut nodes = 0;
        assert_eq!(
            quiesce(&board, Score::cp(-50), Score::cp(100), side, &mut nodes),
            Score::cp(100)
        );
        assert_eq!(
            quiesce(&board, Score::cp(700), Score::cp(900), side, &mut nodes),
            Score::cp(700)
        );
    }

    #[test]
    fn captures_hanging_queen() {
        let (board, side) = setup("4k3/8/8/3q4/8/8/8/3QK3 w");
        for quiescence in [true, false] {
            for depth in 1..=3 {
                assert_eq!(
                    AlphaBeta { quiescence }.choose_move(&board, SearchConfig::new(depth, side)),
                    Some(Move::new(Square::D1, Square::D5)),
                    "depth {depth}, quiescence {quiescence}"
                );
            }
        }
    }

    #[test]
    fn finds_mate_in_one() {
        let (board, side) = setup("6k1/5ppp/8/8/8/8/8/R5K1 w");
        let result = AlphaBeta::default().search(&board, SearchConfig::new(2, side));
        assert_eq!(result.best_move, Some(Move::new(Square::A1, Square::A8)));
        assert_eq!(result.score, Score::INFINITY);
    }

    #[test]
    fn agrees_with_minimax() {
        let plain = AlphaBeta { quiescence: false };
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
            "4k3/8/8/3q4/8/8/8/3QK3 b",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w",
        ] {
            let (board, side) = setup(fen);
            for depth in 1..=2 {
                let config = SearchConfig::new(depth, side);
                assert_eq!(
                    plain.search(&board, config).score,
                    Minimax.search(&board, config).score,
                    "{fen} at depth {depth}"
                );
            }
        }
    }

    #[test]
    fn prunes() {
        let board = Board::starting();
        let config = SearchConfig::new(3, Color::White);
        let pruned = AlphaBeta { quiescence: false }.search(&board, config);
        let full = Minimax.search(&board, config);
        assert_eq!(pruned.score, full.score);
        assert!(pruned.nodes < full.nodes);
    }
}
