//! A player board and its sections.

mod floor;
mod pattern;
mod score;
mod wall;

use serde::{Deserialize, Serialize};

use crate::error::RulesError;

pub use floor::*;
pub use pattern::*;
pub use score::*;
pub use wall::*;

pub const MAX_PLAYERS: usize = 4;

/// Complete state for one player slot. Every change builds a new value.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub score: GameScore,
    pub pattern_lines: PatternLines,
    pub floor_line: FloorLine,
    pub wall: Wall,
}

impl Board {
    pub fn new(
        score: GameScore,
        pattern_lines: PatternLines,
        floor_line: FloorLine,
        wall: Wall,
    ) -> Self {
        Board {
            score,
            pattern_lines,
            floor_line,
            wall,
        }
    }
}

/// Boards in seat order plus the seat that opens the current round.
///
/// Turn order is cyclic from `starting_index`; seats never move, so a board
/// index identifies the same player for the whole match.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardsSnapshot")]
pub struct Boards {
    boards: Vec<Board>,
    starting_index: usize,
}

#[derive(Deserialize)]
struct BoardsSnapshot {
    boards: Vec<Board>,
    starting_index: usize,
}

impl TryFrom<BoardsSnapshot> for Boards {
    type Error = RulesError;

    fn try_from(snapshot: BoardsSnapshot) -> Result<Self, Self::Error> {
        Boards::new(snapshot.boards, snapshot.starting_index)
    }
}

impl Boards {
    pub fn new(boards: Vec<Board>, starting_index: usize) -> Result<Boards, RulesError> {
        if boards.is_empty() || boards.len() > MAX_PLAYERS {
            return Err(RulesError::PlayerCount {
                max: MAX_PLAYERS,
                actual: boards.len(),
            });
        }
        if starting_index >= boards.len() {
            return Err(RulesError::BoardIndex {
                index: starting_index,
                count: boards.len(),
            });
        }
        Ok(Boards {
            boards,
            starting_index,
        })
    }

    /// `player_count` default boards.
    pub fn with_players(player_count: usize, starting_index: usize) -> Result<Boards, RulesError> {
        Boards::new(vec![Board::default(); player_count], starting_index)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    pub fn as_slice(&self) -> &[Board] {
        &self.boards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    pub fn starting_index(&self) -> usize {
        self.starting_index
    }

    /// Board indices in playing order, starting with `starting_index`.
    pub fn turn_order(&self) -> impl Iterator<Item = usize> + '_ {
        let count = self.boards.len();
        (0..count).map(move |offset| (self.starting_index + offset) % count)
    }

    /// Index of the board that plays after `index`.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.boards.len()
    }

    pub fn replace(&self, index: usize, board: Board) -> Boards {
        let mut boards = self.boards.clone();
        boards[index] = board;
        Boards {
            boards,
            starting_index: self.starting_index,
        }
    }

    pub fn with_starting_index(&self, starting_index: usize) -> Result<Boards, RulesError> {
        Boards::new(self.boards.clone(), starting_index)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.boards.iter().map(|board| &board.wall)
    }
}
