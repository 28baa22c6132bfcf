//! The rules for each phase of a round, as free functions over immutable
//! values. [`crate::game`] strings them together.

pub mod end_of_game;
pub mod factory_offer;
pub mod round_setup;
pub mod wall_tiling;

pub use end_of_game::{score_bonuses, Bonuses};
pub use factory_offer::{
    phase_end, place_tiles, place_tiles_on_floor, place_tiles_tracked, select_tiles, Placement,
    SelectTiles,
};
pub use round_setup::{
    display_count, draw_tile, reset_boards, reset_tile_pools, ResetBoards, ResetTilePools,
};
pub use wall_tiling::{game_end, next_starting_board, score_tile, tile_board, tile_boards};
