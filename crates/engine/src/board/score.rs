use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Score track position. Never negative; subtraction stops at zero.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct GameScore(u32);

impl GameScore {
    pub fn new(score: u32) -> Self {
        GameScore(score)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn add(self, points: u32) -> GameScore {
        GameScore(self.0.saturating_add(points))
    }

    pub fn sub(self, points: u32) -> GameScore {
        GameScore(self.0.saturating_sub(points))
    }

    /// Apply a signed delta, clamping the result at zero.
    pub fn apply(self, delta: i32) -> GameScore {
        if delta >= 0 {
            self.add(delta.unsigned_abs())
        } else {
            self.sub(delta.unsigned_abs())
        }
    }
}

impl TryFrom<i64> for GameScore {
    type Error = RulesError;

    fn try_from(score: i64) -> Result<Self, Self::Error> {
        if score < 0 {
            return Err(RulesError::NegativeScore(score));
        }
        u32::try_from(score)
            .map(GameScore)
            .map_err(|_| RulesError::ScoreOutOfRange(score))
    }
}

impl std::fmt::Display for GameScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
