mod config;
mod game;
mod interface;
mod player;
pub use config::*;
pub use game::*;
pub use interface::*;
pub use player::*;
