use tracing::debug;

use crate::{Board, Bot, Coordinate, IllegalMove, InvalidSetup, PlayerId, FREE};

/// The front-end a [`Game`] reports its results to.
pub trait UserInterface {
    fn show_result(&mut self, message: &str);
}

/// A result found by [`Game::check_result()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "Player {} wins!", player),
            Outcome::Draw => write!(f, "This is a DRAW!"),
        }
    }
}

/// A game between humans and bots, taking turns on one board.
///
/// The humans are players `1..=num_humans` and make their moves through
/// [`Self::add_move()`]. The bots are the remaining players, and move on their
/// own right after the last human.
pub struct Game {
    /// Always a human between calls.
    current_player: PlayerId,
    num_players: u32,
    num_bots: u32,
    board: Board,
    /// Ordered by id.
    bots: Vec<Bot>,
    ui: Option<Box<dyn UserInterface>>,
}

impl Game {
    pub fn new(num_humans: u32, num_bots: u32) -> Result<Self, InvalidSetup> {
        if num_humans == 0 {
            return Err(InvalidSetup::NoHumans);
        }
        let num_players = num_humans + num_bots;
        if num_players < 2 {
            return Err(InvalidSetup::TooFewPlayers { num_players });
        }

        let bots = (num_humans + 1..=num_players)
            .map(|id| Bot::new(id, num_players))
            .collect();

        Ok(Self {
            current_player: 1,
            num_players,
            num_bots,
            board: Board::new(num_players),
            bots,
            ui: None,
        })
    }

    pub fn title(&self) -> String {
        format!("{}-way Tic Tac Toe", self.num_players)
    }

    pub fn set_user_interface(&mut self, ui: Box<dyn UserInterface>) {
        self.ui = Some(ui);
    }

    /// The human whose move comes next.
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn num_players(&self) -> u32 {
        self.num_players
    }

    pub fn num_bots(&self) -> u32 {
        self.num_bots
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    pub fn horizontal_size(&self) -> i32 {
        self.board.size()
    }

    pub fn vertical_size(&self) -> i32 {
        self.board.size()
    }

    /// Whether `pos` is on the board and nobody moved there yet.
    pub fn is_free(&self, pos: Coordinate) -> bool {
        self.is_on_board(pos) && self.board.is_free(pos)
    }

    /// The text to show for a cell: the player that moved there, or nothing.
    pub fn content(&self, pos: Coordinate) -> String {
        if !self.is_on_board(pos) {
            return String::new();
        }
        match self.board.get_player(pos) {
            FREE => String::new(),
            player => player.to_string(),
        }
    }

    /// Makes the move of the current player, followed by the bots' moves if
    /// the current player is the last human.
    ///
    /// Each bot sees the moves of the bots before it, and always finds a free
    /// cell unless the board is full. The turn only passes on if the current
    /// player's move was legal.
    pub fn add_move(&mut self, pos: Coordinate) -> Result<(), IllegalMove> {
        self.board.add_move(pos, self.current_player)?;

        if self.current_player == self.num_players - self.num_bots {
            for bot in &self.bots {
                // Nowhere left to go
                if self.board.is_full() {
                    break;
                }
                let bot_move = bot.choose_move(&self.board);
                debug!(bot = bot.id(), %bot_move, "Bot moved");
                self.board.add_move(bot_move, bot.id())?;
            }
            self.current_player = self.num_players;
        }

        self.current_player = if self.current_player == self.num_players {
            1
        } else {
            self.current_player + 1
        };
        Ok(())
    }

    /// Looks for a winner and for a full board, reporting each to the user
    /// interface.
    ///
    /// Both checks are independent, so a move that fills the board and
    /// completes a line yields a win followed by a draw.
    pub fn check_result(&mut self) -> Vec<Outcome> {
        let mut outcomes = Vec::new();
        if let Some(winner) = self.board.winner() {
            outcomes.push(Outcome::Win(winner));
        }
        if self.board.is_full() {
            outcomes.push(Outcome::Draw);
        }

        if let Some(ui) = self.ui.as_mut() {
            for outcome in &outcomes {
                ui.show_result(&outcome.to_string());
            }
        }
        outcomes
    }

    fn is_on_board(&self, pos: Coordinate) -> bool {
        pos.in_bounds(self.board.size(), self.board.size())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Board before Player {} of {}'s turn:\n{}",
            self.current_player, self.num_players, self.board
        )
    }
}
