use crate::chess::{Color, Role};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }

    fn figurine(&self) -> char {
        use Color::*;
        use Role::*;
        match *self {
            Piece(White, Pawn) => '♙',
            Piece(White, Knight) => '♘',
            Piece(White, Bishop) => '♗',
            Piece(White, Rook) => '♖',
            Piece(White, Queen) => '♕',
            Piece(White, King) => '♔',
            Piece(Black, Pawn) => '♟',
            Piece(Black, Knight) => '♞',
            Piece(Black, Bishop) => '♝',
            Piece(Black, Rook) => '♜',
            Piece(Black, Queen) => '♛',
            Piece(Black, King) => '♚',
        }
    }
}

impl From<Piece> for char {
    fn from(p: Piece) -> char {
        use Color::*;
        use Role::*;
        match p {
            Piece(White, Pawn) => 'P',
            Piece(White, Knight) => 'N',
            Piece(White, Bishop) => 'B',
            Piece(White, Rook) => 'R',
            Piece(White, Queen) => 'Q',
            Piece(White, King) => 'K',
            Piece(Black, Pawn) => 'p',
            Piece(Black, Knight) => 'n',
            Piece(Black, Bishop) => 'b',
            Piece(Black, Rook) => 'r',
            Piece(Black, Queen) => 'q',
            Piece(Black, King) => 'k',
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `PNBRQK` or `pnbrqk`")]
pub struct ParsePieceError;

impl TryFrom<char> for Piece {
    type Error = ParsePieceError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        use Color::*;
        use Role::*;
        match c {
            'P' => Ok(Piece(White, Pawn)),
            'N' => Ok(Piece(White, Knight)),
            'B' => Ok(Piece(White, Bishop)),
            'R' => Ok(Piece(White, Rook)),
            'Q' => Ok(Piece(White, Queen)),
            'K' => Ok(Piece(White, King)),
            'p' => Ok(Piece(Black, Pawn)),
            'n' => Ok(Piece(Black, Knight)),
            'b' => Ok(Piece(Black, Bishop)),
            'r' => Ok(Piece(Black, Rook)),
            'q' => Ok(Piece(Black, Queen)),
            'k' => Ok(Piece(Black, King)),
            _ => Err(ParsePieceError),
        }
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParsePieceError),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_char(self.figurine())
        } else {
            f.write_char((*self).into())
        }
    }
}
