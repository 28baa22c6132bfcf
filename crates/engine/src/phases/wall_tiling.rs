//! Wall tiling: move full pattern lines onto the wall and score them.

use tracing::{debug, warn};

use crate::board::{Board, Boards, PatternLine, Wall, PATTERN_LINE_COUNT, WALL_SIZE};
use crate::error::RulesError;
use crate::tiles::{ColoredTile, TileDiscard};

/// Length of the contiguous populated run through `(row, col)` along one axis.
fn run_length(wall: &Wall, row: usize, col: usize, d_row: isize, d_col: isize) -> u32 {
    let step = |row: usize, col: usize, sign: isize| -> Option<(usize, usize)> {
        let r = row.checked_add_signed(d_row * sign)?;
        let c = col.checked_add_signed(d_col * sign)?;
        (r < WALL_SIZE && c < WALL_SIZE).then_some((r, c))
    };

    let mut length = 1;
    for sign in [-1, 1] {
        let mut cursor = (row, col);
        while let Some((r, c)) = step(cursor.0, cursor.1, sign) {
            if !wall.is_populated(r, c) {
                break;
            }
            length += 1;
            cursor = (r, c);
        }
    }
    length
}

/// Points for a tile just placed at `(row, col)`.
///
/// Each axis counts its run length only when the run is longer than the tile
/// itself; a tile with no neighbours is still worth one point.
pub fn score_tile(wall: &Wall, row: usize, col: usize) -> u32 {
    let horizontal = run_length(wall, row, col, 0, 1);
    let vertical = run_length(wall, row, col, 1, 0);

    let axis = |run: u32| if run > 1 { run } else { 0 };
    (axis(horizontal) + axis(vertical)).max(1)
}

/// Tile one board: full pattern lines go to the wall (scoring as they land, top
/// row first), floor tiles are penalised and discarded, the floor is emptied.
pub fn tile_board(board: &Board, discard: &TileDiscard) -> (Board, TileDiscard) {
    let mut score = board.score;
    let mut pattern_lines = board.pattern_lines;
    let mut wall = board.wall;
    let mut discard = discard.clone();
    let mut earned = 0;

    for index in 0..PATTERN_LINE_COUNT {
        let line = board.pattern_lines.get(index).unwrap_or_default();
        let PatternLine::Populated { color, count } = line else {
            continue;
        };
        if !line.is_full(index) {
            continue;
        }

        pattern_lines = pattern_lines.cleared(index);
        let col = wall.lines()[index].column_of(color);
        if wall.is_populated(index, col) {
            warn!(row = index, ?color, "wall space already populated, discarding line");
            discard = discard.add_repeated(color, count as usize);
            continue;
        }

        wall = wall.populate(index, color);
        let points = score_tile(&wall, index, col);
        earned += points;
        score = score.add(points);
        discard = discard.add_repeated(color, count as usize - 1);
    }

    let penalty = board.floor_line.penalty();
    score = score.apply(penalty);
    let floor_tiles: Vec<ColoredTile> = board.floor_line.colored_tiles().collect();
    discard = discard.add(&floor_tiles);

    debug!(
        earned,
        penalty,
        score = score.value(),
        "board tiled"
    );

    let tiled = Board::new(score, pattern_lines, Default::default(), wall);
    (tiled, discard)
}

/// Tile every board in turn order, threading the discard through.
pub fn tile_boards(boards: &Boards, discard: &TileDiscard) -> (Boards, TileDiscard) {
    let mut tiled = boards.clone();
    let mut discard = discard.clone();

    for index in boards.turn_order() {
        let (board, next_discard) = tile_board(&boards.as_slice()[index], &discard);
        tiled = tiled.replace(index, board);
        discard = next_discard;
    }

    (tiled, discard)
}

/// Index of the one board whose floor line holds the starting player marker.
pub fn next_starting_board(boards: &[Board]) -> Result<usize, RulesError> {
    let mut holders = boards
        .iter()
        .enumerate()
        .filter(|(_, board)| board.floor_line.has_marker())
        .map(|(index, _)| index);

    match (holders.next(), holders.count()) {
        (None, _) => Err(RulesError::MissingStartingMarker),
        (Some(index), 0) => Ok(index),
        (Some(_), others) => Err(RulesError::AmbiguousStartingMarker(others + 1)),
    }
}

/// The match ends once any wall has a complete horizontal row.
pub fn game_end<'a>(walls: impl IntoIterator<Item = &'a Wall>) -> bool {
    walls
        .into_iter()
        .any(|wall| (0..WALL_SIZE).any(|row| wall.is_row_complete(row)))
}
