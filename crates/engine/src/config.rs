use serde::{Deserialize, Serialize};

use crate::board::MAX_PLAYERS;
use crate::error::RulesError;

/// Table setup for a new match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of boards, 1 through 4
    pub player_count: usize,
    /// Seat that opens the first round
    pub first_player: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_count: 2,
            first_player: 0,
        }
    }
}

impl GameConfig {
    pub fn new(player_count: usize, first_player: usize) -> Self {
        GameConfig {
            player_count,
            first_player,
        }
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.player_count == 0 || self.player_count > MAX_PLAYERS {
            return Err(RulesError::PlayerCount {
                max: MAX_PLAYERS,
                actual: self.player_count,
            });
        }
        if self.first_player >= self.player_count {
            return Err(RulesError::BoardIndex {
                index: self.first_player,
                count: self.player_count,
            });
        }
        Ok(())
    }
}
