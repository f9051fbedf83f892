mod probe;

use std::collections::BTreeMap;

pub use probe::*;
use tracing::debug;

use crate::{visualize_scores, Board, Coordinate, PlayerId, FREE};

/// Added for every line the bot completes by moving on a cell. Outweighs all other terms combined.
pub const WIN_BONUS: i32 = 3_141_592;
/// Added for every line an opponent would complete on a cell.
pub const BLOCK_BONUS: i32 = 100;
/// Taken off a [`BLOCK_BONUS`] for every player moving between the bot and the blocked opponent.
pub const PROXIMITY_DISCOUNT: i32 = 10;
/// Taken off when the cell an opponent is forced onto is already contested, see [`is_overlapped()`].
pub const OVERLAP_PENALTY: i32 = 20;
/// The score of a cell somebody already moved on.
pub const OCCUPIED_SCORE: i32 = i32::MIN;

/// A computer player that looks one move ahead.
///
/// Every free cell is scored from the twelve lines of three through it (see [`probes()`]):
/// - +1 for every line the bot could still complete,
/// - [`WIN_BONUS`] for every line the bot completes by moving there,
/// - [`BLOCK_BONUS`] for every line an opponent would complete there, minus a
///   [`PROXIMITY_DISCOUNT`] for each player whose turn comes between the bot and that opponent,
/// - minus [`OVERLAP_PENALTY`] if the move forces an opponent onto a cell
///   that some player already has two lines through.
///
/// The bot then moves on the cell with the highest score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bot {
    id: PlayerId,
    num_players: u32,
}

impl Bot {
    /// Creates a bot playing as `id` in a game of `num_players`.
    ///
    /// Panics if `id` is [`FREE`] or there are no players.
    pub fn new(id: PlayerId, num_players: u32) -> Self {
        assert!(id != FREE, "A bot cannot play as the free player");
        assert!(num_players > 0, "A bot needs at least one player in the game");
        Self { id, num_players }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn num_players(&self) -> u32 {
        self.num_players
    }

    /// Returns the free cell with the highest score.
    ///
    /// Cells are visited in [`Board::cells()`] order and a later cell only
    /// replaces the current choice with a strictly higher score, starting
    /// from `(0, 0)` with a score of -1.
    ///
    /// If no free cell scores above -1 and `(0, 0)` is taken, the first free
    /// cell is returned instead. If there is no free cell, `(0, 0)` is returned.
    pub fn choose_move(&self, board: &Board) -> Coordinate {
        let mut best_move = Coordinate::new(0, 0);
        let mut best_score = -1;
        for cell in board.free_cells() {
            let score = self.score(board, cell);
            if score > best_score {
                best_move = cell;
                best_score = score;
                debug!(bot = self.id, %cell, score, "New best move");
            }
        }
        if !board.is_free(best_move) {
            if let Some(cell) = board.free_cells().next() {
                debug!(bot = self.id, %cell, "Only negative scores, taking first free cell");
                best_move = cell;
            }
        }
        best_move
    }

    /// The value of moving on `cell` for this bot.
    pub fn score(&self, board: &Board, cell: Coordinate) -> i32 {
        if !board.is_free(cell) {
            return OCCUPIED_SCORE;
        }

        let lines = surroundings(board, cell);
        let mut score = self.num_attack_lines(&lines);

        for line in lines {
            match line {
                Line::Same(player) if player == self.id => score += WIN_BONUS,
                Line::Same(player) => {
                    score += BLOCK_BONUS - PROXIMITY_DISCOUNT * self.players_in_between(player)
                }
                _ => {}
            }
        }

        if let Some(forced) = self.forced_location(board, cell) {
            if is_overlapped(board, forced) {
                score -= OVERLAP_PENALTY;
            }
        }

        score
    }

    /// Renders every free cell's score in brackets, see [`visualize_scores()`].
    pub fn debug_grid(&self, board: &Board) -> String {
        visualize_scores(board, self)
    }

    // Lines that are empty or already started by the bot.
    fn num_attack_lines(&self, lines: &[Line]) -> i32 {
        lines
            .iter()
            .filter(|line| match line {
                Line::Empty => true,
                Line::OneSided(player) | Line::Same(player) => *player == self.id,
                Line::MixedOrOutOfBounds => false,
            })
            .count() as i32
    }

    // How many players move after the bot and before `player`.
    fn players_in_between(&self, player: PlayerId) -> i32 {
        let num_players = i64::from(self.num_players);
        ((i64::from(player) - i64::from(self.id) - 1 + num_players) % num_players) as i32
    }

    /// The cell an opponent must take after the bot moves on `cell`, since the
    /// bot would complete a line there otherwise.
    ///
    /// Only the first such line in probe order is considered.
    fn forced_location(&self, board: &Board, cell: Coordinate) -> Option<Coordinate> {
        probes(cell)
            .into_iter()
            .find(|&probe| classify(board, probe) == Line::OneSided(self.id))
            .map(|probe| {
                if board.is_free(probe.first) {
                    probe.first
                } else {
                    probe.second
                }
            })
    }
}

/// Whether a single player, whoever it is, could complete two or more lines through `cell`.
pub fn is_overlapped(board: &Board, cell: Coordinate) -> bool {
    let mut lines_per_player: BTreeMap<PlayerId, usize> = BTreeMap::new();
    for player in surroundings(board, cell).into_iter().filter_map(Line::owner) {
        *lines_per_player.entry(player).or_default() += 1;
    }
    lines_per_player.values().any(|&num_lines| num_lines >= 2)
}
