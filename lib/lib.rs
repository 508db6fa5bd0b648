/// Chess domain types.
pub mod chess;
/// Elimination chess games.
pub mod game;
/// Legality of moves.
pub mod rules;
/// Assorted utilities.
pub mod util;
