use crate::chess::{Board, Color, Piece, Role};
use crate::util::Integer;

/// How many pieces of each [`Role`] each side has left.
///
/// The catalog is only ever decremented, once per capture, so it may drift
/// from what the [`Board`] holds when a capture clears more than one square.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Catalog([[u8; 6]; 2]);

impl Default for Catalog {
    /// The standard complement of pieces for both sides.
    fn default() -> Self {
        Catalog::from(&Board::default())
    }
}

impl Catalog {
    /// How many pieces of a [`Color`] and [`Role`] remain.
    #[inline(always)]
    pub fn count(&self, c: Color, r: Role) -> u8 {
        self.0[c.get() as usize][r.get() as usize]
    }

    /// Accounts for the capture of a [`Piece`].
    ///
    /// Returns how many pieces of the same kind remain.
    pub fn remove(&mut self, p: Piece) -> u8 {
        let n = &mut self.0[p.color().get() as usize][p.role().get() as usize];
        *n = n.saturating_sub(1);
        *n
    }

    /// The total number of pieces a [`Color`] has left.
    pub fn total(&self, c: Color) -> usize {
        self.0[c.get() as usize].iter().map(|&n| n as usize).sum()
    }
}

impl From<&Board> for Catalog {
    fn from(board: &Board) -> Self {
        let mut catalog = Catalog([[0; 6]; 2]);

        for (_, p) in board.iter() {
            catalog.0[p.color().get() as usize][p.role().get() as usize] += 1;
        }

        catalog
    }
}
