//! Invariant violations.
//!
//! An illegal move is not an error: drafting operations return `None` and the
//! driver asks again. `RulesError` is reserved for states that can only be
//! reached through a bug upstream (a hand-built display with three tiles, a
//! wall whose colors are out of order, a round that ended with the starting
//! player marker nowhere to be found).

use thiserror::Error;

use crate::tiles::ColoredTile;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RulesError {
    #[error("factory display must hold {expected} tiles, got {actual}")]
    FactoryDisplaySize { expected: usize, actual: usize },

    #[error("pattern lines section must have {expected} lines, got {actual}")]
    PatternLineCount { expected: usize, actual: usize },

    #[error("pattern line {index} holds {count} tiles but its capacity is {capacity}")]
    PatternLineOverCapacity {
        index: usize,
        count: u8,
        capacity: u8,
    },

    #[error("populated pattern line {index} must hold at least one tile")]
    EmptyPopulatedLine { index: usize },

    #[error("floor line holds {actual} tiles but its capacity is {capacity}")]
    FloorLineOverCapacity { actual: usize, capacity: usize },

    #[error("floor line holds {0} starting player markers")]
    DuplicateMarker(usize),

    #[error("wall space {position} breaks the wall color sequence")]
    WallSpaceSequence { position: usize },

    #[error("wall line {index} does not start with the expected color")]
    WallLineSequence { index: usize },

    #[error("wall must have {expected} lines, got {actual}")]
    WallLineCount { expected: usize, actual: usize },

    #[error("wall line must have {expected} spaces, got {actual}")]
    WallSpaceCount { expected: usize, actual: usize },

    #[error("game score cannot be negative: {0}")]
    NegativeScore(i64),

    #[error("game score does not fit the score track: {0}")]
    ScoreOutOfRange(i64),

    #[error("no board holds the starting player marker")]
    MissingStartingMarker,

    #[error("starting player ambiguous: {0} boards hold the starting player marker")]
    AmbiguousStartingMarker(usize),

    #[error("game needs between 1 and {max} players, got {actual}")]
    PlayerCount { max: usize, actual: usize },

    #[error("board index {index} out of range for {count} boards")]
    BoardIndex { index: usize, count: usize },

    #[error("no tiles left to deal the opening round")]
    ExhaustedSupply,

    #[error("selection strategy chose {0:?}, which is not in the tile bag")]
    SelectionOutsideBag(ColoredTile),
}
