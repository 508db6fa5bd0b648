use crate::chess::{Board, Catalog, Color, Move, ParseSquareError, Piece, Role, Square};
use crate::rules::is_legal;
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

mod state;

pub use state::*;

/// The reason why a move was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum MoveError {
    #[display(fmt = "the game is over")]
    GameOver,

    #[display(fmt = "invalid coordinate")]
    InvalidCoordinate(ParseSquareError),

    #[display(fmt = "move `{}` is illegal", _0)]
    IllegalMove(#[error(not(source))] Move),
}

#[doc(hidden)]
impl From<ParseSquareError> for MoveError {
    fn from(e: ParseSquareError) -> Self {
        MoveError::InvalidCoordinate(e)
    }
}

/// A game of elimination chess.
///
/// The first side to capture every piece of some [`Role`] of the opponent wins.
/// There is no check nor checkmate, and neither castling, en passant, nor promotion.
///
/// A game is not internally synchronized, every move takes `&mut self`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Game {
    board: Board,
    catalog: Catalog,
    turn: Color,
    state: GameState,
}

impl Default for Game {
    /// A game from the standard starting placement with white to move.
    fn default() -> Self {
        Game::new(Board::default(), Color::White)
    }
}

impl Game {
    /// Starts a game from an arbitrary placement.
    ///
    /// The pieces remaining for each side are counted from the board.
    pub fn new(board: Board, turn: Color) -> Self {
        Game {
            catalog: Catalog::from(&board),
            board,
            turn,
            state: GameState::InProgress,
        }
    }

    /// The current placement.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the game is in progress or who won it.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The pieces remaining for each side.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// How many pieces of a [`Color`] and [`Role`] remain.
    pub fn remaining(&self, c: Color, r: Role) -> u8 {
        self.catalog.count(c, r)
    }

    /// Plays a move given the coordinates of its source and destination squares, e.g. `e2` and `e4`.
    #[instrument(level = "debug", skip(self), err)]
    pub fn make_move(&mut self, whence: &str, whither: &str) -> Result<(), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }

        let m = Move(whence.parse()?, whither.parse()?);
        self.play(m)?;
        Ok(())
    }

    /// Plays a [`Move`] if legal, returning the [`Piece`] captured, if any.
    ///
    /// Capturing a piece clears every square that holds the same kind of piece of
    /// the same side, although only one is accounted for in the [`Catalog`].
    #[instrument(level = "debug", skip(self), ret, err, fields(turn = %self.turn))]
    pub fn play(&mut self, m: Move) -> Result<Option<Piece>, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }

        let (whence, whither) = (m.whence(), m.whither());
        if !is_legal(&self.board, self.turn, whence, whither) {
            return Err(MoveError::IllegalMove(m));
        }

        let capture = self.board[whither];
        self.board.set(whither, self.board[whence]);
        self.board.set(whence, None);

        if let Some(p) = capture {
            self.capture(p);
        }

        self.turn = !self.turn;
        Ok(capture)
    }

    fn capture(&mut self, p: Piece) {
        let remaining = self.catalog.remove(p);
        let cleared = self.board.remove_all(p);
        debug!(piece = %p, remaining, cleared, "captured");

        if remaining == 0 {
            self.state = GameState::won_by(self.turn);
            info!(winner = %self.turn, eliminated = %p, "game over");
        }
    }

    /// The [`Square`]s the piece on `whence` may move to.
    pub fn destinations(&self, whence: Square) -> impl Iterator<Item = Square> + '_ {
        Square::iter().filter(move |&whither| {
            !self.state.is_over() && is_legal(&self.board, self.turn, whence, whither)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn game_starts_from_standard_placement_with_white_to_move() {
        let g = Game::default();
        assert_eq!(g.board(), &Board::default());
        assert_eq!(g.turn(), Color::White);
        assert_eq!(g.state(), GameState::InProgress);
        assert_eq!(g.catalog(), &Catalog::default());
    }

    #[test]
    fn legal_move_relocates_piece_and_passes_the_turn() {
        let mut g = Game::default();
        assert_eq!(g.make_move("e2", "e4"), Ok(()));
        assert_eq!(g.board()[sq("e2")], None);
        assert_eq!(g.board()[sq("e4")], Some(Piece(Color::White, Role::Pawn)));
        assert_eq!(g.turn(), Color::Black);
        assert_eq!(g.state(), GameState::InProgress);
    }

    #[proptest]
    fn invalid_coordinates_are_rejected(
        #[filter(#s.parse::<Square>().is_err())] s: String,
        t: Square,
    ) {
        let mut g = Game::default();
        let t = t.to_string();

        assert!(matches!(
            g.make_move(&s, &t),
            Err(MoveError::InvalidCoordinate(_))
        ));

        assert!(matches!(
            g.make_move(&t, &s),
            Err(MoveError::InvalidCoordinate(_))
        ));

        assert_eq!(g, Game::default());
    }

    #[proptest]
    fn illegal_moves_leave_the_game_untouched(
        #[filter(!is_legal(&Board::default(), Color::White, #m.whence(), #m.whither()))] m: Move,
    ) {
        let mut g = Game::default();
        assert_eq!(g.play(m), Err(MoveError::IllegalMove(m)));
        assert_eq!(g, Game::default());
    }

    #[test]
    fn moving_an_opponent_piece_is_illegal() {
        let mut g = Game::default();
        let m = Move(sq("e7"), sq("e5"));
        assert_eq!(g.play(m), Err(MoveError::IllegalMove(m)));
        assert_eq!(g, Game::default());
    }

    #[test]
    fn capture_decrements_the_count_of_the_captured_kind() {
        let mut g = Game::new("4k3/8/8/3p4/4P3/8/8/4K3".parse().unwrap(), Color::White);
        assert_eq!(g.remaining(Color::Black, Role::Pawn), 1);
        assert_eq!(g.play(Move(sq("e4"), sq("d5"))), Ok(Some(Piece(Color::Black, Role::Pawn))));
        assert_eq!(g.remaining(Color::Black, Role::Pawn), 0);
        assert_eq!(g.remaining(Color::White, Role::Pawn), 1);
        assert_eq!(g.state(), GameState::WhiteWon);
    }

    #[test]
    fn capture_clears_every_like_piece_but_counts_only_one() {
        let mut g = Game::new("4k2r/8/8/8/8/8/N6N/4K3".parse().unwrap(), Color::Black);
        assert_eq!(g.remaining(Color::White, Role::Knight), 2);
        assert_eq!(g.play(Move(sq("h8"), sq("h2"))), Ok(Some(Piece(Color::White, Role::Knight))));
        assert_eq!(g.board()[sq("a2")], None);
        assert_eq!(g.board()[sq("h2")], Some(Piece(Color::Black, Role::Rook)));
        assert_eq!(g.remaining(Color::White, Role::Knight), 1);
        assert_eq!(g.state(), GameState::InProgress);
    }

    #[proptest]
    fn capturing_the_last_piece_of_a_kind_wins_the_game(c: Color) {
        let mut board = Board::empty();
        board.set(sq("a1"), Some(Piece(c, Role::Rook)));
        board.set(sq("a8"), Some(Piece(!c, Role::Knight)));
        board.set(sq("h8"), Some(Piece(!c, Role::Queen)));

        let mut g = Game::new(board, c);
        assert_eq!(g.play(Move(sq("a1"), sq("a8"))), Ok(Some(Piece(!c, Role::Knight))));
        assert_eq!(g.remaining(!c, Role::Knight), 0);
        assert_eq!(g.state(), GameState::won_by(c));
        assert_eq!(g.state().winner(), Some(c));
    }

    #[proptest]
    fn no_move_is_accepted_once_the_game_is_over(m: Move, s: Square, t: Square) {
        let mut g = Game::default();
        g.make_move("e2", "e4")?;
        g.make_move("d8", "d1")?;
        assert_eq!(g.state(), GameState::BlackWon);

        let before = g.clone();
        assert_eq!(g.play(m), Err(MoveError::GameOver));
        assert_eq!(g.make_move(&s.to_string(), &t.to_string()), Err(MoveError::GameOver));
        assert_eq!(g.make_move("zz", "e4"), Err(MoveError::GameOver));
        assert_eq!(g, before);
        assert_eq!(g.destinations(s).count(), 0);
    }

    #[test]
    fn game_starting_without_a_kind_is_not_won_until_a_count_drops_to_zero() {
        let mut g = Game::new("4k3/4p3/8/8/8/8/4P3/4K3".parse().unwrap(), Color::White);
        assert_eq!(g.remaining(Color::Black, Role::Queen), 0);
        assert_eq!(g.make_move("e2", "e4"), Ok(()));
        assert_eq!(g.state(), GameState::InProgress);
    }

    #[test]
    fn destinations_lists_the_legal_moves_of_a_piece() {
        let g = Game::default();
        assert_eq!(
            Vec::from_iter(g.destinations(sq("g1"))),
            vec![sq("f3"), sq("h3")]
        );

        assert_eq!(g.destinations(sq("g8")).count(), 0);
    }
}
