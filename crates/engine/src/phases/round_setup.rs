//! Round setup: refill the factory displays and clear last round's leftovers.

use tracing::{trace, warn};

use crate::board::{Board, Boards, MAX_PLAYERS};
use crate::error::RulesError;
use crate::factory::{
    DisplayId, FactoryDisplay, FactoryDisplays, TableCenter, FACTORY_CAPACITY,
};
use crate::tiles::{reset_tile_bag, ColoredTile, SelectionStrategy, TileBag, TileDiscard};

/// Number of factory displays filled for `player_count` players
pub fn display_count(player_count: usize) -> usize {
    player_count + 1
}

/// Draw a single tile from the bag, refilling from discard if needed.
/// Returns `None` only if both bag and discard are empty.
pub fn draw_tile(
    bag: &TileBag,
    discard: &TileDiscard,
    strategy: &mut impl SelectionStrategy,
) -> Result<(Option<ColoredTile>, TileBag, TileDiscard), RulesError> {
    let (tile, bag) = bag.pull(strategy)?;
    if tile.is_some() {
        return Ok((tile, bag, discard.clone()));
    }
    if discard.is_empty() {
        trace!("bag and discard both empty");
        return Ok((None, bag, discard.clone()));
    }

    let (bag, discard) = reset_tile_bag(&bag, discard);
    let (tile, bag) = bag.pull(strategy)?;
    Ok((tile, bag, discard))
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResetTilePools {
    pub factory_displays: FactoryDisplays,
    pub table_center: TableCenter,
    pub bag: TileBag,
    pub discard: TileDiscard,
}

/// Fill `player_count + 1` factory displays one tile at a time and put out a
/// fresh, unpicked table center.
///
/// When the bag and the discard run dry mid-fill the display keeps whatever
/// was drawn; a display that would stay empty is not put out at all.
pub fn reset_tile_pools(
    player_count: usize,
    bag: &TileBag,
    discard: &TileDiscard,
    strategy: &mut impl SelectionStrategy,
) -> Result<ResetTilePools, RulesError> {
    if player_count == 0 || player_count > MAX_PLAYERS {
        return Err(RulesError::PlayerCount {
            max: MAX_PLAYERS,
            actual: player_count,
        });
    }

    let mut bag = bag.clone();
    let mut discard = discard.clone();
    let mut displays = Vec::with_capacity(display_count(player_count));

    'fill: for index in 0..display_count(player_count) {
        let id = DisplayId(index as u8);
        let mut pulled = Vec::with_capacity(FACTORY_CAPACITY);

        while pulled.len() < FACTORY_CAPACITY {
            let (tile, next_bag, next_discard) = draw_tile(&bag, &discard, strategy)?;
            bag = next_bag;
            discard = next_discard;
            match tile {
                Some(tile) => pulled.push(tile),
                None => {
                    warn!(display = index, drawn = pulled.len(), "tile supply exhausted");
                    if !pulled.is_empty() {
                        displays.push(FactoryDisplay::short(id, pulled));
                    }
                    break 'fill;
                }
            }
        }

        displays.push(FactoryDisplay::new(id, &pulled)?);
    }

    Ok(ResetTilePools {
        factory_displays: FactoryDisplays::new(displays),
        table_center: TableCenter::default(),
        bag,
        discard,
    })
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResetBoards {
    pub boards: Boards,
    pub discard: TileDiscard,
}

fn clear_board(board: &Board, discard: TileDiscard) -> (Board, TileDiscard) {
    let mut pattern_lines = board.pattern_lines;
    let mut discard = discard;

    for (index, line) in board.pattern_lines.iter().enumerate() {
        if let Some(color) = line.color() {
            if line.is_full(index) {
                discard = discard.add_repeated(color, line.count() as usize);
                pattern_lines = pattern_lines.cleared(index);
            }
        }
    }

    let floor_tiles: Vec<ColoredTile> = board.floor_line.colored_tiles().collect();
    let discard = discard.add(&floor_tiles);

    let cleared = Board::new(
        board.score,
        pattern_lines,
        Default::default(),
        board.wall,
    );
    (cleared, discard)
}

/// Clear full pattern lines and floor lines into the discard and make the
/// board holding the starting player marker open the next round.
pub fn reset_boards(boards: &Boards, discard: &TileDiscard) -> Result<ResetBoards, RulesError> {
    let holders: Vec<usize> = boards
        .iter()
        .enumerate()
        .filter(|(_, board)| board.floor_line.has_marker())
        .map(|(index, _)| index)
        .collect();

    let first = match holders.as_slice() {
        [] => return Err(RulesError::MissingStartingMarker),
        [index] => *index,
        _ => return Err(RulesError::AmbiguousStartingMarker(holders.len())),
    };

    let mut discard = discard.clone();
    let mut cleared = Vec::with_capacity(boards.len());
    for board in boards.iter() {
        let (board, next_discard) = clear_board(board, discard);
        discard = next_discard;
        cleared.push(board);
    }

    Ok(ResetBoards {
        boards: Boards::new(cleared, first)?,
        discard,
    })
}
