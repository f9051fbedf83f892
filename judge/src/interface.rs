use std::io::Write;

use tictactoe::UserInterface;
use tracing::{info, warn};

/// Reports results to the log, for unattended games.
pub struct LoggingInterface {
    game_idx: usize,
}

impl LoggingInterface {
    pub fn new(game_idx: usize) -> Self {
        Self { game_idx }
    }
}

impl UserInterface for LoggingInterface {
    fn show_result(&mut self, message: &str) {
        info!(game_idx = self.game_idx, "{}", message);
    }
}

/// Prints results for the people at the terminal.
pub struct PrintingInterface<W: Write> {
    output: W,
}

impl<W: Write> PrintingInterface<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> UserInterface for PrintingInterface<W> {
    fn show_result(&mut self, message: &str) {
        // The trait has no way to report failures
        if let Err(err) = writeln!(self.output, "{}", message).and_then(|_| self.output.flush()) {
            warn!(%err, "Could not show result");
        }
    }
}
