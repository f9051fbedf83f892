use crate::{Board, Bot, Coordinate, FREE};

impl std::fmt::Display for Board {
    /// One line per row, with the occupant of every cell (0 if free).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size() {
            for x in 0..self.size() {
                write!(f, "{} ", self.get_player(Coordinate::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Shows what `bot` thinks of every free cell.
///
/// Taken cells show their occupant, free cells their score in brackets.
pub fn visualize_scores(board: &Board, bot: &Bot) -> String {
    let mut result = format!("Bot {}\n", bot.id());
    for y in 0..board.size() {
        for x in 0..board.size() {
            let cell = Coordinate::new(x, y);
            match board.get_player(cell) {
                FREE => result += &format!("[{}]", bot.score(board, cell)),
                player => result += &format!(" {} ", player),
            }
        }
        result += "\n";
    }
    result += "\n";
    result
}
