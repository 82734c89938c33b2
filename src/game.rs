//! Self-play driver: two engines take turns on an authoritative board.
//!
//! The driver is the caller the search core expects: it applies the returned
//! moves, resolves pawn promotion and decides whether "no move" means
//! checkmate or stalemate.

use std::fmt::Display;

use crate::chess::attacks::in_check;
use crate::chess::board::Board;
use crate::chess::core::{Color, Move, Piece, PieceKind, Square};
use crate::chess::legal::is_checkmate;
use crate::search::{choose_move, Algorithm, Depth};

/// Engine playing one side of the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Player {
    pub algorithm: Algorithm,
    pub depth: Depth,
}

impl Player {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(algorithm: Algorithm, depth: Depth) -> Self {
        Self { algorithm, depth }
    }
}

/// How a game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move is in check and has no legal moves.
    Checkmate {
        /// Side that delivered the mate.
        winner: Color,
    },
    /// The side to move is not in check and has no legal moves.
    Stalemate,
    /// The game was stopped after [`Game::with_max_plies`] moves.
    PlyLimit,
}

impl Display for Outcome {
    /// Prints the result in PGN notation; an unfinished game is `*`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checkmate {
                winner: Color::White,
            } => write!(f, "1-0"),
            Self::Checkmate {
                winner: Color::Black,
            } => write!(f, "0-1"),
            Self::Stalemate => write!(f, "1/2-1/2"),
            Self::PlyLimit => write!(f, "*"),
        }
    }
}

/// A game between two engines, played one ply at a time.
pub struct Game {
    board: Board,
    side: Color,
    white: Player,
    black: Player,
    promotion: PieceKind,
    max_plies: usize,
    history: Vec<Move>,
    outcome: Option<Outcome>,
}

impl Game {
    /// Number of plies after which the game is stopped unless configured
    /// otherwise. There are no draw rules besides stalemate, so games between
    /// engines could go on forever.
    pub const DEFAULT_MAX_PLIES: usize = 200;

    /// Starts a game from `board` with `side` to move. Pawns are promoted to
    /// queens.
    #[must_use]
    pub fn new(board: Board, side: Color, white: Player, black: Player) -> Self {
        Self {
            board,
            side,
            white,
            black,
            promotion: PieceKind::Queen,
            max_plies: Self::DEFAULT_MAX_PLIES,
            history: Vec::new(),
            outcome: None,
        }
    }

    /// Sets the piece pawns are promoted to.
    ///
    /// # Panics
    ///
    /// Pawns can only be promoted to a knight, bishop, rook or queen.
    #[must_use]
    pub fn with_promotion(mut self, promotion: PieceKind) -> Self {
        assert!(
            !matches!(promotion, PieceKind::Pawn | PieceKind::King),
            "can not promote to {promotion}"
        );
        self.promotion = promotion;
        self
    }

    /// Sets the number of plies after which the game is stopped.
    #[must_use]
    pub const fn with_max_plies(mut self, max_plies: usize) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Current position.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    #[must_use]
    pub const fn side(&self) -> Color {
        self.side
    }

    /// Moves played so far.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// `None` while the game is in progress.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    const fn player(&self, side: Color) -> Player {
        match side {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Asks the side to move for a move and plays it. Returns `None` once the
    /// game is over.
    pub fn step(&mut self) -> Option<Move> {
        if self.outcome.is_some() {
            return None;
        }
        if self.history.len() >= self.max_plies {
            self.finish(Outcome::PlyLimit);
            return None;
        }
        let player = self.player(self.side);
        let Some(next_move) = choose_move(&self.board, player.depth, self.side, player.algorithm)
        else {
            let outcome = if in_check(self.side, &self.board) {
                Outcome::Checkmate {
                    winner: self.side.opponent(),
                }
            } else {
                Outcome::Stalemate
            };
            self.finish(outcome);
            return None;
        };
        self.play_move(next_move);
        if is_checkmate(self.side, &self.board) {
            self.finish(Outcome::Checkmate {
                winner: self.side.opponent(),
            });
        }
        Some(next_move)
    }

    /// Steps until the game is over.
    pub fn play(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.outcome {
                return outcome;
            }
            let _ = self.step();
        }
    }

    fn play_move(&mut self, next_move: Move) {
        self.board = self.board.apply(next_move);
        self.promote(next_move.to);
        self.history.push(next_move);
        tracing::info!(
            ply = self.history.len(),
            side = %self.side,
            %next_move,
            "move played"
        );
        self.side = self.side.opponent();
    }

    fn promote(&mut self, square: Square) {
        if let Some(piece) = self.board.at(square) {
            if piece.kind == PieceKind::Pawn && square.row() == piece.color.promotion_row() {
                self.board
                    .place(square, Piece::new(piece.color, self.promotion));
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        tracing::info!(plies = self.history.len(), %outcome, "game over");
        self.outcome = Some(outcome);
    }
}
