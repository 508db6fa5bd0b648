use crate::chess::Color;
use derive_more::Display;

/// Whether a game is still being played or which side won it.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameState {
    #[default]
    #[display(fmt = "in progress")]
    InProgress,

    #[display(fmt = "white won")]
    WhiteWon,

    #[display(fmt = "black won")]
    BlackWon,
}

impl GameState {
    /// The state of a game won by a side.
    pub fn won_by(c: Color) -> Self {
        match c {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    /// Whether the game has been decided.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// The winning side, if the game [is over](`Self::is_over`).
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameState::InProgress => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }
}
