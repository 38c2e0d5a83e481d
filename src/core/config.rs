//! Game setup configuration.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Supported table sizes.
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 5;

/// Parameters for dealing a new game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (default: 4).
    pub player_count: usize,

    /// Cards per hand. `None` uses the standard size for the table:
    /// 5 cards for 2-3 players, 4 cards for 4-5 players.
    pub hand_size: Option<usize>,

    /// Seed for the deal.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            hand_size: None,
            seed: 42,
        }
    }
}

impl GameConfig {
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = Some(size);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cards dealt to each player.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
            .unwrap_or(if self.player_count <= 3 { 5 } else { 4 })
    }

    /// Check the table size and hand size.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidPlayerCount(self.player_count));
        }
        let hand_size = self.hand_size();
        if !(1..=5).contains(&hand_size) {
            return Err(GameError::InvalidHandSize(hand_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 4);
        assert_eq!(config.hand_size(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_standard_hand_sizes() {
        assert_eq!(GameConfig::default().with_player_count(2).hand_size(), 5);
        assert_eq!(GameConfig::default().with_player_count(3).hand_size(), 5);
        assert_eq!(GameConfig::default().with_player_count(5).hand_size(), 4);
        assert_eq!(GameConfig::default().with_hand_size(3).hand_size(), 3);
    }

    #[test]
    fn test_validate_rejects_bad_counts() {
        assert_eq!(
            GameConfig::default().with_player_count(1).validate(),
            Err(GameError::InvalidPlayerCount(1))
        );
        assert_eq!(
            GameConfig::default().with_player_count(6).validate(),
            Err(GameError::InvalidPlayerCount(6))
        );
        assert_eq!(
            GameConfig::default().with_hand_size(0).validate(),
            Err(GameError::InvalidHandSize(0))
        );
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
