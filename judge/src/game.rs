use anyhow::Context;
use tictactoe::{Game, Outcome, PlayerId};
use tracing::trace;

use crate::player::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer { player: PlayerId },
    Draw,
}

/// Plays `game` until it reports a result.
///
/// The human seats are handed out to `players` in turn: with two players, the
/// first one moves for humans 1, 3, 5 and so on. A single player can take every
/// seat, like several people sharing one terminal.
///
/// Returns an error when a player cannot come up with a move or makes an
/// illegal one. When the last move both wins and fills the board, the win
/// counts.
pub fn play_game(game: &mut Game, players: &mut [Box<dyn Player>]) -> anyhow::Result<GameResult> {
    if players.is_empty() {
        anyhow::bail!("Nobody is there to play the human seats");
    }

    loop {
        let seat = game.current_player();
        let player_idx = (seat as usize - 1) % players.len();
        let player = &mut players[player_idx];

        let pos = player.choose_move(game)?;
        let position = serde_json::to_string(&pos)?;
        trace!(name: "Move", player = player.name(), seat, position = %position);
        game.add_move(pos)
            .with_context(|| format!("Illegal move by {} for player {}", player.name(), seat))?;
        trace!("{}", game);

        if let Some(&outcome) = game.check_result().first() {
            return Ok(match outcome {
                Outcome::Win(player) => GameResult::WonByPlayer { player },
                Outcome::Draw => GameResult::Draw,
            });
        }
    }
}
