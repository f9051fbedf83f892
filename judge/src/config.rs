use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tictactoe::Game;

/// The most human players that can join a game.
pub const MAX_HUMANS: u32 = 5;
/// The most bots that can join a game.
pub const MAX_BOTS: u32 = 5;

/// Who takes part in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub humans: u32,
    #[serde(default)]
    pub bots: u32,
}

impl GameConfig {
    /// Reads a config from a JSON file and validates it.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_HUMANS).contains(&self.humans) {
            anyhow::bail!(
                "Between 1 and {} human players can play, not {}",
                MAX_HUMANS,
                self.humans
            );
        }
        if self.bots > MAX_BOTS {
            anyhow::bail!("At most {} bots can play, not {}", MAX_BOTS, self.bots);
        }
        if self.humans + self.bots < 2 {
            anyhow::bail!("At least 2 players must play");
        }
        Ok(())
    }

    pub fn num_players(&self) -> u32 {
        self.humans + self.bots
    }

    /// Sets up a fresh game with these players.
    pub fn new_game(&self) -> anyhow::Result<Game> {
        Ok(Game::new(self.humans, self.bots)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json() {
        let config: GameConfig = serde_json::from_str(r#"{"humans": 2, "bots": 3}"#).unwrap();
        assert_eq!(config, GameConfig { humans: 2, bots: 3 });
        assert!(config.validate().is_ok());
        assert_eq!(config.num_players(), 5);

        let config: GameConfig = serde_json::from_str(r#"{"humans": 2}"#).unwrap();
        assert_eq!(config.bots, 0);
    }

    #[test]
    fn validation() {
        assert!(GameConfig { humans: 0, bots: 2 }.validate().is_err());
        assert!(GameConfig { humans: 6, bots: 0 }.validate().is_err());
        assert!(GameConfig { humans: 1, bots: 6 }.validate().is_err());
        assert!(GameConfig { humans: 1, bots: 0 }.validate().is_err());
        assert!(GameConfig { humans: 1, bots: 1 }.validate().is_ok());
        assert!(GameConfig { humans: 5, bots: 5 }.validate().is_ok());
    }

    #[test]
    fn new_game_sizes_board() {
        let game = GameConfig { humans: 1, bots: 2 }.new_game().unwrap();
        assert_eq!(game.title(), "3-way Tic Tac Toe");
        assert_eq!(game.horizontal_size(), 4);
    }

    #[test]
    fn missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/ttt_config.json")).unwrap_err();
        assert!(err.to_string().contains("Could not open config file"));
    }
}
