use crate::io::Io;
use anyhow::{anyhow, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Color};
use lib::game::Game;
use std::io::{stdin, stdout, Read, Write};
use tracing::{instrument, warn};

/// Plays a sequence of moves, printing the board after each one.
#[derive(Debug, Parser)]
pub struct Replay {
    /// The starting placement, as in the first field of FEN.
    #[clap(short, long)]
    position: Option<Board>,

    /// The side to move first.
    #[clap(short, long, default_value_t = Color::White)]
    turn: Color,

    /// Print pieces as figurines instead of letters.
    #[clap(short, long)]
    figurines: bool,

    /// Moves in pure coordinate notation, e.g. `e2e4`.
    ///
    /// If omitted, moves are read line by line from the standard input,
    /// either as `e2e4` or as `e2 e4`.
    moves: Vec<String>,
}

impl Default for Replay {
    fn default() -> Self {
        Replay {
            position: None,
            turn: Color::White,
            figurines: false,
            moves: Vec::new(),
        }
    }
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut io = Io::new(stdout(), stdin());
        self.replay(&mut io)?;
        Ok(())
    }

    fn replay<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<Game, Anyhow> {
        let mut game = Game::new(self.position.unwrap_or_default(), self.turn);
        let mut moves = self.moves.iter().cloned();

        self.show(io, &game)?;

        while !game.state().is_over() {
            let line = if self.moves.is_empty() {
                io.recv()?
            } else {
                moves.next()
            };

            let Some(line) = line else {
                break;
            };

            match play(&mut game, &line) {
                Ok(()) => self.show(io, &game)?,
                Err(e) => {
                    warn!(%line, "{}", e);
                    io.send(format_args!("{}: {}", line.trim(), e))?;
                }
            }
        }

        io.send(game.state())?;
        io.flush()?;
        Ok(game)
    }

    fn show<W: Write, R: Read>(&self, io: &mut Io<W, R>, game: &Game) -> Result<(), Anyhow> {
        if self.figurines {
            io.send(format_args!("{:#}", game.board()))?;
        } else {
            io.send(game.board())?;
        }

        io.send(format_args!("{} to move", game.turn()))?;
        Ok(())
    }
}

fn play(game: &mut Game, line: &str) -> Result<(), Anyhow> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(whence), Some(whither), None) => Ok(game.make_move(whence, whither)?),
        (Some(m), None, None) => {
            let i = m.char_indices().nth(2).map_or_else(|| m.len(), |(i, _)| i);
            Ok(game.make_move(&m[..i], &m[i..])?)
        }
        _ => Err(anyhow!("expected a move such as `e2e4` or `e2 e4`")),
    }
}
