use crate::{Coordinate, PlayerId};

/// The error type for [`Board::add_move()`](crate::Board::add_move), i.e. for placing a single mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { position: Coordinate },
    InvalidPlayer { player: PlayerId },
    CellOccupied {
        position: Coordinate,
        occupant: PlayerId,
    },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { position } => {
                write!(f, "Cannot make a move at {}, outside of the board", position)
            }
            IllegalMove::InvalidPlayer { player } => {
                write!(f, "Player {} cannot make a move on this board", player)
            }
            IllegalMove::CellOccupied { position, occupant } => write!(
                f,
                "Cannot make a move at {}, player {} already moved there",
                position, occupant
            ),
        }
    }
}

/// The error type for [`Game::new()`](crate::Game::new).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidSetup {
    NoHumans,
    TooFewPlayers { num_players: u32 },
}

impl std::error::Error for InvalidSetup {}

impl std::fmt::Display for InvalidSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSetup::NoHumans => write!(f, "At least one human player must play"),
            InvalidSetup::TooFewPlayers { num_players } => write!(
                f,
                "At least 2 players must play, but there are only {}",
                num_players
            ),
        }
    }
}
