pub use board::*;
pub use bot::*;
pub use coordinate::*;
pub use errors::*;
pub use game::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod bot;
mod coordinate;
mod errors;
mod game;
mod visualization;
