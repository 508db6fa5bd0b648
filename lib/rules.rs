use crate::chess::{Board, Color, Piece, Role, Square};

/// The direction pawns of a [`Color`] advance along the rows of the grid.
#[inline(always)]
fn direction(c: Color) -> i8 {
    match c {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// The row on which pawns of a [`Color`] start.
#[inline(always)]
fn starting_row(c: Color) -> i8 {
    match c {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Whether moving the piece on `whence` to `whither` is legal for the side to move.
///
/// The checks short-circuit in order: the piece moved must belong to `turn`, the
/// destination must not hold a piece of `turn`, and the displacement must match the
/// geometry of the piece's [`Role`].
///
/// Sliding pieces are not obstructed by pieces in between, and the king's safety is
/// never taken into account.
pub fn is_legal(board: &Board, turn: Color, whence: Square, whither: Square) -> bool {
    let piece = match board[whence] {
        Some(p) if p.color() == turn => p,
        _ => return false,
    };

    if matches!(board[whither], Some(p) if p.color() == turn) {
        return false;
    }

    debug_assert!(Square::from_coords(whence.row(), whence.col()).is_some());
    debug_assert!(Square::from_coords(whither.row(), whither.col()).is_some());

    let dr = whither.row() - whence.row();
    let dc = whither.col() - whence.col();

    match piece.role() {
        Role::Pawn => pawn(board, piece, whence, whither),
        Role::Knight => knight(dr, dc),
        Role::Bishop => bishop(dr, dc),
        Role::Rook => rook(dr, dc),
        Role::Queen => bishop(dr, dc) || rook(dr, dc),
        Role::King => king(dr, dc),
    }
}

fn pawn(board: &Board, piece: Piece, whence: Square, whither: Square) -> bool {
    let color = piece.color();
    let forward = direction(color);
    let dr = whither.row() - whence.row();
    let dc = whither.col() - whence.col();

    match board[whither] {
        None if dc == 0 => {
            dr == forward || (dr == 2 * forward && whence.row() == starting_row(color))
        }

        Some(p) => p.color() != color && dc.abs() == 1 && dr == forward,

        None => false,
    }
}

fn knight(dr: i8, dc: i8) -> bool {
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}

fn bishop(dr: i8, dc: i8) -> bool {
    dr.abs() == dc.abs()
}

fn rook(dr: i8, dc: i8) -> bool {
    dr == 0 || dc == 0
}

fn king(dr: i8, dc: i8) -> bool {
    dr.abs() <= 1 && dc.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{File, Rank};
    use test_strategy::proptest;

    fn board(placement: &str) -> Board {
        placement.parse().unwrap()
    }

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn destinations(b: &Board, turn: Color, whence: Square) -> Vec<String> {
        let mut squares = Vec::from_iter(
            Square::iter()
                .filter(|&whither| is_legal(b, turn, whence, whither))
                .map(|s| s.to_string()),
        );

        squares.sort();
        squares
    }

    #[proptest]
    fn moving_from_an_empty_square_is_illegal(b: Board, c: Color, whence: Square, whither: Square) {
        let mut b = b;
        b.set(whence, None);
        assert!(!is_legal(&b, c, whence, whither));
    }

    #[proptest]
    fn moving_an_opponent_piece_is_illegal(
        b: Board,
        c: Color,
        r: Role,
        whence: Square,
        whither: Square,
    ) {
        let mut b = b;
        b.set(whence, Some(Piece(!c, r)));
        assert!(!is_legal(&b, c, whence, whither));
    }

    #[proptest]
    fn capturing_an_own_piece_is_illegal(
        b: Board,
        c: Color,
        r: Role,
        s: Role,
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut b = b;
        b.set(whence, Some(Piece(c, r)));
        b.set(whither, Some(Piece(c, s)));
        assert!(!is_legal(&b, c, whence, whither));
    }

    #[test]
    fn pawns_advance_two_squares_from_their_starting_rank() {
        let b = Board::default();
        assert_eq!(destinations(&b, Color::White, sq("e2")), ["e3", "e4"]);
        assert_eq!(destinations(&b, Color::Black, sq("d7")), ["d5", "d6"]);
    }

    #[test]
    fn pawns_advance_one_square_elsewhere() {
        let b = board("8/8/8/3p4/8/4P3/8/8");
        assert_eq!(destinations(&b, Color::White, sq("e3")), ["e4"]);
        assert_eq!(destinations(&b, Color::Black, sq("d5")), ["d4"]);
    }

    #[test]
    fn pawns_cannot_advance_onto_an_occupied_square() {
        let b = board("8/8/8/8/4p3/4P3/8/8");
        assert_eq!(destinations(&b, Color::White, sq("e3")), Vec::<String>::new());
    }

    #[test]
    fn pawns_double_step_does_not_check_the_square_in_between() {
        let b = board("8/8/8/8/8/4n3/4P3/8");
        assert_eq!(destinations(&b, Color::White, sq("e2")), ["e4"]);
    }

    #[test]
    fn pawns_capture_diagonally_forward() {
        let b = board("8/8/8/3p1p2/4P3/8/8/8");
        assert_eq!(destinations(&b, Color::White, sq("e4")), ["d5", "e5", "f5"]);

        let b = board("8/8/8/4p3/3P1P2/8/8/8");
        assert_eq!(destinations(&b, Color::Black, sq("e5")), ["d4", "e4", "f4"]);
    }

    #[test]
    fn pawns_never_move_backwards() {
        let b = board("8/8/8/8/4P3/3p1p2/8/8");
        assert_eq!(destinations(&b, Color::White, sq("e4")), ["e5"]);
    }

    #[proptest]
    fn knights_move_to_the_l_shaped_offsets_within_bounds(whence: Square) {
        let mut b = Board::empty();
        b.set(whence, Some(Piece(Color::White, Role::Knight)));

        let mut expected = Vec::from_iter(
            [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)]
                .into_iter()
                .filter_map(|(dr, dc)| Square::from_coords(whence.row() + dr, whence.col() + dc))
                .map(|s| s.to_string()),
        );

        expected.sort();
        assert_eq!(destinations(&b, Color::White, whence), expected);
    }

    #[proptest]
    fn bishops_move_diagonally(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut b = Board::empty();
        b.set(whence, Some(Piece(Color::Black, Role::Bishop)));

        let diagonal = (whither.row() - whence.row()).abs() == (whither.col() - whence.col()).abs();
        assert_eq!(is_legal(&b, Color::Black, whence, whither), diagonal);
    }

    #[proptest]
    fn rooks_move_along_ranks_and_files(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut b = Board::empty();
        b.set(whence, Some(Piece(Color::White, Role::Rook)));

        let straight = whither.rank() == whence.rank() || whither.file() == whence.file();
        assert_eq!(is_legal(&b, Color::White, whence, whither), straight);
    }

    #[proptest]
    fn queens_move_like_bishops_or_rooks(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut b = Board::empty();
        b.set(whence, Some(Piece(Color::White, Role::Queen)));

        let dr = whither.row() - whence.row();
        let dc = whither.col() - whence.col();
        let expected = dr.abs() == dc.abs() || dr == 0 || dc == 0;
        assert_eq!(is_legal(&b, Color::White, whence, whither), expected);
    }

    #[test]
    fn sliding_pieces_jump_over_obstacles() {
        let b = Board::default();
        assert!(is_legal(&b, Color::White, sq("a1"), sq("a7")));
        assert!(is_legal(&b, Color::White, sq("c1"), sq("h6")));
        assert!(is_legal(&b, Color::Black, sq("d8"), sq("d1")));
    }

    #[proptest]
    fn kings_move_one_square_in_any_direction(
        whence: Square,
        #[filter(#whence != #whither)] whither: Square,
    ) {
        let mut b = Board::empty();
        b.set(whence, Some(Piece(Color::Black, Role::King)));

        let adjacent = (whither.row() - whence.row()).abs() <= 1
            && (whither.col() - whence.col()).abs() <= 1;

        assert_eq!(is_legal(&b, Color::Black, whence, whither), adjacent);
    }

    #[test]
    fn king_geometry_admits_the_null_displacement() {
        assert!(king(0, 0));
    }

    #[proptest]
    fn staying_in_place_is_illegal_since_the_destination_holds_an_own_piece(
        b: Board,
        c: Color,
        r: Role,
        sq: Square,
    ) {
        let mut b = b;
        b.set(sq, Some(Piece(c, r)));
        assert!(!is_legal(&b, c, sq, sq));
    }

    #[test]
    fn only_knights_and_pawns_can_leave_the_back_rank_without_jumping() {
        let b = Board::default();
        assert_eq!(destinations(&b, Color::White, sq("b1")), ["a3", "c3"]);
        assert_eq!(destinations(&b, Color::White, Square(File::E, Rank::First)), Vec::<String>::new());
    }
}
