use std::io::{BufRead, Write};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe::{Coordinate, Game};

/// Makes moves for the human seats of a game.
pub trait Player {
    fn name(&self) -> &str;

    /// Picks a free cell for [`Game::current_player()`].
    fn choose_move(&mut self, game: &Game) -> anyhow::Result<Coordinate>;
}

/// Moves on a free cell chosen uniformly at random.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(name: &str, rng: StdRng) -> Self {
        Self {
            name: String::from(name),
            rng,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game: &Game) -> anyhow::Result<Coordinate> {
        let free_cells: Vec<Coordinate> = game.board().free_cells().collect();
        free_cells
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No free cell left for {}", self.name))
    }
}

/// Asks for moves on a text terminal, one `x y` pair per line.
pub struct TerminalPlayer<R, W> {
    name: String,
    input: R,
    output: W,
    show_scores: bool,
    // A re-usable buffer for reading lines.
    // Should always be empty before and after choose_move().
    buf: String,
}

impl<R: BufRead, W: Write> TerminalPlayer<R, W> {
    pub fn new(name: &str, input: R, output: W) -> Self {
        Self {
            name: String::from(name),
            input,
            output,
            show_scores: false,
            buf: String::new(),
        }
    }

    /// Whether to print every bot's view of the board before asking for a move.
    pub fn with_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
    }

    // Reads lines until one holds a free cell.
    fn read_move(&mut self, game: &Game) -> anyhow::Result<Coordinate> {
        loop {
            write!(
                self.output,
                "Player {}, enter your move as \"x y\": ",
                game.current_player()
            )?;
            self.output.flush()?;
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                anyhow::bail!(
                    "Input ended before player {} made a move",
                    game.current_player()
                );
            }
            match parse_coordinate(&self.buf) {
                None => writeln!(
                    self.output,
                    "Could not read a move from '{}'",
                    self.buf.trim()
                )?,
                Some(pos) if !game.is_free(pos) => {
                    writeln!(self.output, "{} is not a free cell", pos)?
                }
                Some(pos) => return Ok(pos),
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for TerminalPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game: &Game) -> anyhow::Result<Coordinate> {
        if self.show_scores {
            for bot in game.bots() {
                write!(self.output, "{}", bot.debug_grid(game.board()))?;
            }
        }
        writeln!(self.output, "{}", game)?;
        let pos = self.read_move(game);
        self.buf.clear();
        pos
    }
}

/// Parses two integers separated by whitespace or a comma, like `1 2` or `1,2`.
pub fn parse_coordinate(s: &str) -> Option<Coordinate> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(x, y))
}
