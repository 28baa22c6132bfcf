//! Azul Game Engine
//!
//! Rules core for the board game Azul. State is plain data built from
//! immutable values; the rules are free functions that take a snapshot and
//! return the next one. Randomness comes in through a [`SelectionStrategy`]
//! so a seeded generator (or a fixed sequence) reproduces a whole match.
//!
//! [`game`] wires the phases into a state machine:
//! `RoundSetup -> FactoryOffer -> WallTiling -> (RoundSetup | GameEnd)`.

pub mod board;
pub mod config;
pub mod error;
pub mod factory;
pub mod game;
pub mod phases;
pub mod tiles;

pub use board::{
    Board, Boards, FloorLine, GameScore, PatternLine, PatternLines, Wall, WallLine, WallSpace,
    FLOOR_CAPACITY, FLOOR_PENALTY, MAX_PLAYERS, PATTERN_LINE_COUNT, WALL_PATTERN, WALL_SEQUENCE,
    WALL_SIZE,
};
pub use config::GameConfig;
pub use error::RulesError;
pub use factory::{DisplayId, FactoryDisplay, FactoryDisplays, TableCenter, TilePool};
pub use game::{
    legal_moves, new_game, Census, Destination, FactoryOffer, Game, GameEnd, GameState, Move,
    RoundSetup, WallTiling,
};
pub use tiles::{
    ColoredTile, RandomSelection, SelectionStrategy, Tile, TileBag, TileDiscard, ALL_COLORS,
};
