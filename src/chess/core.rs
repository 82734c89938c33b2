//! Chess primitives commonly used within [`crate::chess`].

use std::fmt;
use std::mem;

use anyhow::bail;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// A move only names the square the piece leaves and the square it lands on.
/// The moving piece is whatever occupies `from` on the board the move is
/// applied to. There is no promotion field: a pawn reaching the last rank is
/// promoted by the caller after the move is made, see
/// [`crate::game::Game::step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Square,
    #[allow(missing_docs)]
    pub to: Square,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format] without the promotion suffix.
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;

    fn try_from(input: &str) -> anyhow::Result<Self> {
        if input.len() != 4 || !input.is_ascii() {
            bail!("move should be four ASCII chars (e.g. e2e4), got {input}");
        }
        let (from, to) = input.split_at(2);
        Ok(Self::new(from.try_into()?, to.try_into()?))
    }
}

/// Board squares, listed the way the board is printed: from Black's back rank
/// (row 0) down to White's back rank (row 7), and from the a-file to the
/// h-file within each row.
///
/// ```
/// use versus::chess::core::Square;
///
/// assert_eq!(Square::A8 as u8, 0);
/// assert_eq!(Square::H8 as u8, 7);
/// assert_eq!(Square::E2.row(), 6);
/// assert_eq!(Square::E2.column(), 4);
/// assert_eq!(Square::H1 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use versus::chess::core::Square;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A8, B8, C8, D8, E8, F8, G8, H8,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A1, B1, C1, D1, E1, F1, G1, H1,
}

impl Square {
    /// Connects row and column to form a full square.
    ///
    /// # Panics
    ///
    /// Both coordinates have to be within 0..[`BOARD_WIDTH`].
    #[must_use]
    pub const fn new(row: u8, column: u8) -> Self {
        assert!(row < BOARD_WIDTH && column < BOARD_WIDTH);
        unsafe { mem::transmute(row * BOARD_WIDTH + column) }
    }

    /// Row index: 0 is Black's back rank (rank 8), 7 is White's back rank
    /// (rank 1).
    #[must_use]
    pub const fn row(self) -> u8 {
        self as u8 / BOARD_WIDTH
    }

    /// Column index: 0 is the a-file, 7 is the h-file.
    #[must_use]
    pub const fn column(self) -> u8 {
        self as u8 % BOARD_WIDTH
    }

    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Returns the square `rows` and `columns` away or `None` when that falls
    /// off the board.
    #[must_use]
    pub fn offset(self, rows: i8, columns: i8) -> Option<Self> {
        const WIDTH: i8 = BOARD_WIDTH as i8;
        let row = self.row() as i8 + rows;
        let column = self.column() as i8 + columns;
        if (0..WIDTH).contains(&row) && (0..WIDTH).contains(&column) {
            Some(Self::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// The same column on the opposite side of the board.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(BOARD_WIDTH - 1 - self.row(), self.column())
    }

    /// All 64 squares in index order.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).map(|index| Self::new(index / BOARD_WIDTH, index % BOARD_WIDTH))
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its index on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        if square_index >= BOARD_SIZE {
            bail!("square index should be in 0..BOARD_SIZE, got {square_index}");
        }
        Ok(Self::new(square_index / BOARD_WIDTH, square_index % BOARD_WIDTH))
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let Some((file, rank)) = square.chars().collect_tuple() else {
            bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            );
        };
        let column = match file {
            'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let row = match rank {
            '1'..='8' => b'8' - rank as u8,
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        Ok(Self::new(row, column))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.column()) as char,
            (b'8' - self.row()) as char
        )
    }
}

/// A side in the game of chess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a single pawn push: White moves towards row 0, Black
    /// towards row 7.
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row the pawns start from; only from here a double push is allowed.
    #[must_use]
    pub(crate) const fn pawn_starting_row(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Opponent's back rank: a pawn that reaches it is promoted.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => BOARD_WIDTH - 1,
        }
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(color: &str) -> anyhow::Result<Self> {
        match color {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("color should be 'w' or 'b', got '{color}'"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Self::White => 'w',
                Self::Black => 'b',
            }
        )
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                Self::Pawn => 'p',
                Self::Knight => 'n',
                Self::Bishop => 'b',
                Self::Rook => 'r',
                Self::Queen => 'q',
                Self::King => 'k',
            }
        )
    }
}

/// Represents a specific piece owned by a player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    /// Parses the [FEN] symbol: uppercase for White, lowercase for Black.
    ///
    /// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = PieceKind::try_from(symbol)?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Self { color, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.color {
            Color::White => write!(f, "{}", symbol.to_ascii_uppercase()),
            Color::Black => write!(f, "{symbol}"),
        }
    }
}
