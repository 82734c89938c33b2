//! This module implements "static" [evaluation], i.e. predicting the value of
//! a given position without [`crate::search`].
//!
//! The score is returned in centipawn units and is always oriented towards
//! White. Checkmate and stalemate are not detected here: the search assigns
//! those values itself.
//!
//! [evaluation]: https://www.chessprogramming.org/Evaluation

pub mod material;
mod score;
pub mod tables;

pub use score::Score;

use crate::chess::board::Board;

/// Sums material and piece-square bonuses over all pieces on the board.
///
/// ```
/// use versus::chess::board::Board;
/// use versus::evaluation::{evaluate, Score};
///
/// assert_eq!(evaluate(&Board::starting()), Score::cp(0));
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> Score {
    let placement: i32 = board
        .pieces()
        .map(|(square, piece)| tables::positional_bonus(piece, square))
        .sum();
    Score::cp(material::material_advantage(board) + placement)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::{Move, Square};

    fn setup(fen: &str) -> Board {
        Board::from_fen(fen).expect("parsing valid position").0
    }

    #[test]
    fn starting_position() {
        assert_eq!(evaluate(&Board::starting()), Score::cp(0));
    }

    #[test]
    fn material_and_placement() {
        // Kings only: no tables, material cancels out.
        assert_eq!(evaluate(&setup("4k3/8/8/8/8/8/8/4K3")), Score::cp(0));
        // A white knight on e4 is worth its value plus the central bonus.
        assert_eq!(
            evaluate(&setup("4k3/8/8/8/4N3/8/8/4K3")),
            Score::cp(320 + 20)
        );
        // A black knight on e5 mirrors it.
        assert_eq!(
            evaluate(&setup("4k3/8/8/4n3/8/8/8/4K3")),
            Score::cp(-320 - 20)
        );
        // The first pawn move in the main line is a small gain.
        assert_eq!(
            evaluate(&Board::starting().apply(Move::new(Square::E2, Square::E4))),
            Score::cp(50)
        );
    }

    #[test]
    fn material_is_counted_once() {
        for (fen, material, placement) in [
            ("4k3/8/8/8/4N3/8/8/4K3", 320, 20),
            ("4k3/8/8/4n3/8/8/8/4K3", -320, -20),
            ("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR", 0, 50),
            ("4k3/8/8/3r4/8/8/8/3RK3", 0, 0),
        ] {
            let board = setup(fen);
            assert_eq!(material::material_advantage(&board), material, "{fen}");
            assert_eq!(evaluate(&board), Score::cp(material + placement), "{fen}");
        }
    }

    #[test]
    fn symmetry() {
        for fen in [
            "rnbq1bnr/pp4pp/4kp2/2pp4/8/N7/PPPPPP1P/R1BQ1K1R",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "2n4k/1PP5/6K1/3Pp1Q1/3N4/3P4/P3R3/8",
        ] {
            let board = setup(fen);
            assert_eq!(evaluate(&board.mirrored()), -evaluate(&board), "{fen}");
        }
    }
}
