use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use crate::util::Integer;
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A square on the chess board.
///
/// Squares are also addressed by grid coordinates `(row, col)`, where row `0` is the eighth
/// rank, the back rank of the black pieces, and row `7` is the first rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Square(pub File, pub Rank);

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Square(f, r)
    }

    /// Constructs [`Square`] from grid coordinates, if they are within bounds.
    #[inline(always)]
    pub fn from_coords(row: i8, col: i8) -> Option<Self> {
        Some(Square(File::convert(col)?, Rank::convert(Rank::MAX.checked_sub(row)?)?))
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        self.0
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        self.1
    }

    /// This square's row on the grid.
    #[inline(always)]
    pub fn row(&self) -> i8 {
        Rank::MAX - self.rank().get()
    }

    /// This square's column on the grid.
    #[inline(always)]
    pub fn col(&self) -> i8 {
        self.file().get()
    }

    /// An iterator over all squares, row by row starting from the eighth rank.
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Rank::iter()
            .rev()
            .flat_map(|r| File::iter().map(move |f| Square(f, r)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
