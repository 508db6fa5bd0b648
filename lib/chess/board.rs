use crate::chess::{Color, File, ParsePieceError, Piece, Rank, Role, Square};
use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, ops::Index, str::FromStr};

/// The piece placement on the board.
///
/// This type does not validate whether the placement it holds is reachable
/// under any set of rules, it merely stores what occupies each square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board([[Option<Piece>; 8]; 8]);

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        proptest::collection::vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut board = Board::empty();

                board
                    .0
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(s, p)| *s = p);

                board
            })
            .boxed()
    }
}

const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

impl Default for Board {
    /// The standard starting placement.
    fn default() -> Self {
        let mut board = Board::empty();

        for (f, &role) in File::iter().zip(&BACK_RANK) {
            board.set(Square(f, Rank::Eighth), Some(Piece(Color::Black, role)));
            board.set(Square(f, Rank::Seventh), Some(Piece(Color::Black, Role::Pawn)));
            board.set(Square(f, Rank::Second), Some(Piece(Color::White, Role::Pawn)));
            board.set(Square(f, Rank::First), Some(Piece(Color::White, role)));
        }

        board
    }
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Self {
        Board([[None; 8]; 8])
    }

    /// The [`Piece`] on a [`Square`], if any.
    #[inline(always)]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.0[sq.row() as usize][sq.col() as usize]
    }

    /// Overwrites the contents of a [`Square`].
    #[inline(always)]
    pub fn set(&mut self, sq: Square, p: Option<Piece>) {
        self.0[sq.row() as usize][sq.col() as usize] = p;
    }

    /// Clears every [`Square`] that holds exactly this [`Piece`].
    ///
    /// Returns how many squares were cleared.
    pub fn remove_all(&mut self, p: Piece) -> usize {
        let mut cleared = 0;

        for s in self.0.iter_mut().flatten() {
            if *s == Some(p) {
                *s = None;
                cleared += 1;
            }
        }

        cleared
    }

    /// The grid of squares, indexed by `[row][col]`.
    #[inline(always)]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.0
    }

    /// An iterator over the occupied [`Square`]s and the [`Piece`]s on them.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self.get(sq)?)))
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.row() as usize][sq.col() as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "   {}", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;

        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self[Square(file, rank)] {
                    Some(p) if f.alternate() => write!(f, " {:#} |", p)?,
                    Some(p) => write!(f, " {} |", p)?,
                    None => write!(f, "   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, "   {}", file)?;
        }

        Ok(())
    }
}

/// The reason why parsing a [`Board`] from the piece placement field of [FEN] failed.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseBoardError {
    #[display(fmt = "expected exactly 8 ranks separated by `/`")]
    WrongNumberOfRanks,
    #[display(fmt = "expected exactly 8 squares on rank {}", _0)]
    WrongNumberOfSquares(#[error(not(source))] Rank),
    #[display(fmt = "invalid piece")]
    InvalidPiece(ParsePieceError),
}

#[doc(hidden)]
impl From<ParsePieceError> for ParseBoardError {
    fn from(e: ParsePieceError) -> Self {
        ParseBoardError::InvalidPiece(e)
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = Vec::from_iter(s.split('/'));
        if rows.len() != 8 {
            return Err(ParseBoardError::WrongNumberOfRanks);
        }

        let mut board = Board::empty();
        for (rank, row) in Rank::iter().rev().zip(rows) {
            let mut files = File::iter();
            for c in row.chars() {
                match c.to_digit(10) {
                    Some(n @ 1..=8) => {
                        for _ in 0..n {
                            files
                                .next()
                                .ok_or(ParseBoardError::WrongNumberOfSquares(rank))?;
                        }
                    }

                    _ => {
                        let file = files
                            .next()
                            .ok_or(ParseBoardError::WrongNumberOfSquares(rank))?;

                        board.set(Square(file, rank), Some(c.try_into()?));
                    }
                }
            }

            if files.next().is_some() {
                return Err(ParseBoardError::WrongNumberOfSquares(rank));
            }
        }

        Ok(board)
    }
}
