//! End of game bonuses.

use serde::{Deserialize, Serialize};

use crate::board::{GameScore, Wall, WALL_SIZE};
use crate::tiles::ALL_COLORS;

pub const ROW_BONUS: u32 = 2;
pub const COLUMN_BONUS: u32 = 7;
pub const COLOR_BONUS: u32 = 10;

/// Completed sets on a finished wall.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bonuses {
    pub rows: u32,
    pub columns: u32,
    pub colors: u32,
}

impl Bonuses {
    pub fn of(wall: &Wall) -> Bonuses {
        Bonuses {
            rows: (0..WALL_SIZE).filter(|&row| wall.is_row_complete(row)).count() as u32,
            columns: (0..WALL_SIZE).filter(|&col| wall.is_column_complete(col)).count() as u32,
            colors: ALL_COLORS
                .iter()
                .filter(|&&color| wall.is_color_complete(color))
                .count() as u32,
        }
    }

    pub fn points(&self) -> u32 {
        self.rows * ROW_BONUS + self.columns * COLUMN_BONUS + self.colors * COLOR_BONUS
    }
}

/// `score` plus 2 per complete row, 7 per complete column and 10 per color
/// with all five tiles on the wall.
pub fn score_bonuses(wall: &Wall, score: GameScore) -> GameScore {
    score.add(Bonuses::of(wall).points())
}
