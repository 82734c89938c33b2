//! [`Board`] is the only state the engine reasons about: 64 squares, each
//! either empty or holding a [`Piece`]. It is a plain value (`Copy`), so
//! simulating a move never affects the board it was made on.

use std::fmt::{self, Write};

use anyhow::bail;

use crate::chess::core::{Color, Move, Piece, PieceKind, Square, BOARD_SIZE, BOARD_WIDTH};

/// Standard chess starting position with White to move.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

const BACK_RANK: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Square-centric board representation.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
}

impl Board {
    /// Creates a board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
        }
    }

    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use versus::chess::board::Board;
    ///
    /// assert_eq!(
    ///     &Board::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (column, kind) in (0..BOARD_WIDTH).zip(BACK_RANK) {
            board.place(Square::new(0, column), Piece::new(Color::Black, kind));
            board.place(
                Square::new(1, column),
                Piece::new(Color::Black, PieceKind::Pawn),
            );
            board.place(
                Square::new(6, column),
                Piece::new(Color::White, PieceKind::Pawn),
            );
            board.place(Square::new(7, column), Piece::new(Color::White, kind));
        }
        board
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Puts `piece` on `square`, replacing whatever was there.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = Some(piece);
    }

    /// Clears `square` and returns the piece that stood there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Returns a copy of the board with the piece on `next_move.from` moved to
    /// `next_move.to`, capturing whatever stood on the destination. The
    /// original board is left untouched.
    #[must_use]
    pub fn apply(&self, next_move: Move) -> Self {
        let mut next = *self;
        if let Some(piece) = next.remove(next_move.from) {
            next.place(next_move.to, piece);
        }
        next
    }

    /// Returns `true` if the move lands on an occupied square.
    #[must_use]
    pub const fn is_capture(&self, next_move: Move) -> bool {
        self.at(next_move.to).is_some()
    }

    /// Iterates over occupied squares in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.at(square).map(|piece| (square, piece)))
    }

    /// Iterates over the squares occupied by `color`'s pieces.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Swaps the colors of all pieces and flips the board vertically: the
    /// resulting position is the same one seen from the other side.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut mirrored = Self::empty();
        for (square, piece) in self.pieces() {
            mirrored.place(
                square.flipped(),
                Piece::new(piece.color.opponent(), piece.kind),
            );
        }
        mirrored
    }

    /// Parses the piece placement and the side to move from [Forsyth-Edwards
    /// Notation]. The side to move defaults to White when the field is
    /// missing. Castling rights, en passant square and move counters may be
    /// present but are ignored: the engine does not implement these rules.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_fen(input: &str) -> anyhow::Result<(Self, Color)> {
        let mut parts = input.split_ascii_whitespace();
        let Some(placement) = parts.next() else {
            bail!("incorrect FEN: missing pieces placement");
        };
        let mut board = Self::empty();
        let mut row: u8 = 0;
        for rank_fen in placement.split('/') {
            if row == BOARD_WIDTH {
                bail!("incorrect FEN: expected 8 ranks, got {placement}");
            }
            let mut column: u8 = 0;
            for symbol in rank_fen.chars() {
                if column >= BOARD_WIDTH {
                    bail!("incorrect FEN: rank {rank_fen} is longer than {BOARD_WIDTH} squares");
                }
                if let '1'..='8' = symbol {
                    column += symbol as u8 - b'0';
                    continue;
                }
                board.place(Square::new(row, column), Piece::try_from(symbol)?);
                column += 1;
            }
            if column != BOARD_WIDTH {
                bail!("incorrect FEN: rank size should be exactly {BOARD_WIDTH}, got {rank_fen}");
            }
            row += 1;
        }
        if row != BOARD_WIDTH {
            bail!("incorrect FEN: there should be 8 ranks, got {placement}");
        }
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings > 1 {
                bail!("expected at most 1 {color} king, got {kings}");
            }
        }
        let side_to_move = match parts.next() {
            Some(value) => Color::try_from(value)?,
            None => Color::White,
        };
        Ok((board, side_to_move))
    }
}

impl fmt::Display for Board {
    /// Prints piece placement in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            let mut empty_squares = 0;
            for column in 0..BOARD_WIDTH {
                match self.at(Square::new(row, column)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(f, "{empty_squares}")?;
                            empty_squares = 0;
                        }
                        write!(f, "{piece}")?;
                    },
                    None => empty_squares += 1,
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if row != BOARD_WIDTH - 1 {
                f.write_char('/')?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            for column in 0..BOARD_WIDTH {
                match self.at(Square::new(row, column)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if column != BOARD_WIDTH - 1 {
                    f.write_str(SQUARE_SEPARATOR)?;
                }
            }
            if row != BOARD_WIDTH - 1 {
                f.write_str(LINE_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
