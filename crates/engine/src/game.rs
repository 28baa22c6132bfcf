//! The phase state machine.
//!
//! A match moves through `RoundSetup -> FactoryOffer -> WallTiling` until some
//! wall has a complete row, then stops in `GameEnd`. Every phase owns a
//! [`GameState`] snapshot and every transition takes `&self` and builds the
//! next phase, so an old value can be kept around, compared or replayed.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::board::{Board, Boards, GameScore, PATTERN_LINE_COUNT};
use crate::config::GameConfig;
use crate::error::RulesError;
use crate::factory::{FactoryDisplays, TableCenter, TilePool};
use crate::phases::{
    game_end, next_starting_board, phase_end, place_tiles_on_floor, place_tiles_tracked,
    reset_tile_pools, score_bonuses, select_tiles, tile_boards,
};
use crate::tiles::{
    color_counts, ColoredTile, SelectionStrategy, TileBag, TileDiscard, ALL_COLORS, TILE_COLORS,
    TILES_PER_COLOR,
};

/// Everything on the table at one point of a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub boards: Boards,
    pub factory_displays: FactoryDisplays,
    pub table_center: TableCenter,
    pub bag: TileBag,
    pub discard: TileDiscard,
    /// Tiles that fell off a full floor line and left the game.
    pub dropped: Vec<ColoredTile>,
    /// Rounds dealt so far.
    pub round: u32,
}

/// Where every tile is, summed over bag, discard, pools, boards and dropped.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub colors: [usize; TILE_COLORS],
    pub markers: usize,
}

impl Census {
    /// Twenty of every color and exactly one starting player marker.
    pub fn is_conserved(&self) -> bool {
        self.colors.iter().all(|&count| count == TILES_PER_COLOR) && self.markers == 1
    }
}

impl GameState {
    /// Fresh table: default boards and a full bag, nothing dealt yet.
    pub fn new(config: &GameConfig) -> Result<GameState, RulesError> {
        config.validate()?;
        Ok(GameState {
            boards: Boards::with_players(config.player_count, config.first_player)?,
            factory_displays: FactoryDisplays::default(),
            table_center: TableCenter::default(),
            bag: TileBag::default(),
            discard: TileDiscard::default(),
            dropped: Vec::new(),
            round: 0,
        })
    }

    pub fn census(&self) -> Census {
        let mut colors = color_counts(self.bag.tiles());
        let mut tally = |counts: [usize; TILE_COLORS]| {
            for (total, count) in colors.iter_mut().zip(counts) {
                *total += count;
            }
        };

        tally(color_counts(self.discard.tiles()));
        tally(color_counts(&self.dropped));
        tally(color_counts(self.table_center.tiles()));
        for display in self.factory_displays.iter() {
            tally(color_counts(display.tiles()));
        }
        for board in self.boards.iter() {
            let floor: Vec<ColoredTile> = board.floor_line.colored_tiles().collect();
            tally(color_counts(&floor));
            tally(ALL_COLORS.map(|color| {
                board.pattern_lines.tile_count(color) + board.wall.color_count(color)
            }));
        }

        let on_floors = self
            .boards
            .iter()
            .filter(|board| board.floor_line.has_marker())
            .count();
        let in_center = usize::from(self.table_center.has_marker());

        Census {
            colors,
            markers: on_floors + in_center,
        }
    }
}

/// Where drafted tiles go.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Destination {
    PatternLine(usize),
    Floor,
}

/// One turn of the factory offer: take `color` from `pool`, put it at
/// `destination`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub pool: TilePool,
    pub color: ColoredTile,
    pub destination: Destination,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Game {
    RoundSetup(RoundSetup),
    FactoryOffer(FactoryOffer),
    WallTiling(WallTiling),
    GameEnd(GameEnd),
}

impl Game {
    pub fn state(&self) -> &GameState {
        match self {
            Game::RoundSetup(phase) => &phase.state,
            Game::FactoryOffer(phase) => &phase.state,
            Game::WallTiling(phase) => &phase.state,
            Game::GameEnd(phase) => &phase.state,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Game::GameEnd(_))
    }
}

/// Set up the table and deal the first round.
pub fn new_game(
    config: &GameConfig,
    strategy: &mut impl SelectionStrategy,
) -> Result<FactoryOffer, RulesError> {
    let setup = RoundSetup {
        state: GameState::new(config)?,
    };
    debug!(
        players = config.player_count,
        first_player = config.first_player,
        "new game"
    );

    match setup.round_setup(strategy)? {
        Game::FactoryOffer(offer) => Ok(offer),
        _ => Err(RulesError::ExhaustedSupply),
    }
}

/// Between rounds: boards are tiled, the factory displays are empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSetup {
    state: GameState,
}

impl RoundSetup {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Deal the factory displays for the next round.
    ///
    /// Goes straight to [`GameEnd`] when bag and discard are both empty.
    pub fn round_setup(&self, strategy: &mut impl SelectionStrategy) -> Result<Game, RulesError> {
        let state = &self.state;
        let pools = reset_tile_pools(state.boards.len(), &state.bag, &state.discard, strategy)?;

        if pools.factory_displays.is_empty() {
            warn!(round = state.round, "nothing left to deal, ending the game");
            let state = GameState {
                bag: pools.bag,
                discard: pools.discard,
                ..state.clone()
            };
            return Ok(Game::GameEnd(GameEnd::new(state)));
        }

        let state = GameState {
            factory_displays: pools.factory_displays,
            table_center: pools.table_center,
            bag: pools.bag,
            discard: pools.discard,
            round: state.round + 1,
            ..state.clone()
        };
        debug!(
            round = state.round,
            displays = state.factory_displays.len(),
            bag = state.bag.len(),
            starting_index = state.boards.starting_index(),
            "round set up"
        );

        Ok(Game::FactoryOffer(FactoryOffer {
            next_board_index: state.boards.starting_index(),
            state,
        }))
    }
}

/// Drafting: boards take turns picking from the pools.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct FactoryOffer {
    state: GameState,
    next_board_index: usize,
}

impl FactoryOffer {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Seat whose turn it is.
    pub fn next_board_index(&self) -> usize {
        self.next_board_index
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.state.boards.get(self.next_board_index)
    }

    /// Take `color` from `pool` onto pattern line `line_index` of the current
    /// board.
    pub fn factory_offer(
        &self,
        pool: TilePool,
        color: ColoredTile,
        line_index: usize,
    ) -> Option<Game> {
        self.play(Move {
            pool,
            color,
            destination: Destination::PatternLine(line_index),
        })
    }

    /// Play one move for the current board. `None` leaves the offer as it was
    /// and the same board has to try again.
    pub fn play(&self, mv: Move) -> Option<Game> {
        let state = &self.state;
        let index = self.next_board_index;
        let board = state.boards.get(index)?;

        let Some(selection) =
            select_tiles(&state.factory_displays, &state.table_center, mv.pool, mv.color)
        else {
            trace!(board = index, ?mv, "selection rejected");
            return None;
        };
        let placed = match mv.destination {
            Destination::PatternLine(line) => place_tiles_tracked(board, line, &selection.tiles),
            Destination::Floor => place_tiles_on_floor(board, &selection.tiles),
        };
        let Some(placement) = placed else {
            trace!(board = index, ?mv, "placement rejected");
            return None;
        };

        let mut dropped = state.dropped.clone();
        dropped.extend(placement.dropped);
        let state = GameState {
            boards: state.boards.replace(index, placement.board),
            factory_displays: selection.factory_displays,
            table_center: selection.table_center,
            dropped,
            ..state.clone()
        };
        trace!(board = index, ?mv, "move played");

        if phase_end(&state.factory_displays, &state.table_center) {
            debug!(round = state.round, "factory offer over");
            return Some(Game::WallTiling(WallTiling { state }));
        }
        if state.factory_displays.is_empty() && state.table_center.is_empty() {
            warn!(round = state.round, "pools ran dry before the center was picked");
            return Some(Game::WallTiling(WallTiling { state }));
        }

        let next_board_index = state.boards.next_index(index);
        Some(Game::FactoryOffer(FactoryOffer {
            state,
            next_board_index,
        }))
    }
}

/// Every move [`FactoryOffer::play`] would accept for the current board.
///
/// Pools in table order (displays, then the center), colors in
/// [`ALL_COLORS`] order, pattern lines top to bottom, floor last.
pub fn legal_moves(offer: &FactoryOffer) -> Vec<Move> {
    let Some(board) = offer.current_board() else {
        return Vec::new();
    };
    let state = &offer.state;

    let mut pools: Vec<(TilePool, [usize; TILE_COLORS])> = state
        .factory_displays
        .iter()
        .map(|display| {
            (
                TilePool::FactoryDisplay(display.id()),
                color_counts(display.tiles()),
            )
        })
        .collect();
    pools.push((TilePool::TableCenter, color_counts(state.table_center.tiles())));

    let mut moves = Vec::new();
    for (pool, counts) in pools {
        for color in ALL_COLORS {
            if counts[color.index()] == 0 {
                continue;
            }
            let lines = (0..PATTERN_LINE_COUNT)
                .filter(|&line| board.pattern_lines.try_add(line, 1, color).is_some())
                .map(Destination::PatternLine);
            moves.extend(
                lines
                    .chain([Destination::Floor])
                    .map(|destination| Move {
                        pool,
                        color,
                        destination,
                    }),
            );
        }
    }
    moves
}

/// Drafting is over; full pattern lines are waiting to go to the walls.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WallTiling {
    state: GameState,
}

impl WallTiling {
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Tile every board, hand the first turn to the marker holder, and either
    /// start the next round or end the game.
    pub fn tile_boards(&self) -> Result<Game, RulesError> {
        let state = &self.state;

        let starting_index = if state.table_center.has_marker() {
            warn!(round = state.round, "starting player marker never claimed");
            state.boards.starting_index()
        } else {
            next_starting_board(state.boards.as_slice())?
        };

        let (boards, discard) = tile_boards(&state.boards, &state.discard);
        let state = GameState {
            boards: boards.with_starting_index(starting_index)?,
            factory_displays: FactoryDisplays::default(),
            table_center: TableCenter::default(),
            discard,
            ..state.clone()
        };

        let scores: Vec<u32> = state.boards.iter().map(|board| board.score.value()).collect();
        debug!(round = state.round, starting_index, ?scores, "walls tiled");

        if game_end(state.boards.walls()) {
            return Ok(Game::GameEnd(GameEnd::new(state)));
        }
        Ok(Game::RoundSetup(RoundSetup { state }))
    }
}

/// Terminal phase. End of game bonuses are already in the scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameEnd {
    state: GameState,
}

impl GameEnd {
    fn new(state: GameState) -> GameEnd {
        let boards = state
            .boards
            .iter()
            .enumerate()
            .fold(state.boards.clone(), |boards, (index, board)| {
                let score = score_bonuses(&board.wall, board.score);
                boards.replace(index, Board { score, ..board.clone() })
            });

        let scores: Vec<u32> = boards.iter().map(|board| board.score.value()).collect();
        debug!(rounds = state.round, ?scores, "game over");

        GameEnd {
            state: GameState { boards, ..state },
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn final_scores(&self) -> Vec<GameScore> {
        self.state.boards.iter().map(|board| board.score).collect()
    }

    /// Seats with the highest score; more than one on a tie.
    pub fn winners(&self) -> Vec<usize> {
        let scores = self.final_scores();
        let Some(best) = scores.iter().max().copied() else {
            return Vec::new();
        };
        scores
            .iter()
            .enumerate()
            .filter(|(_, score)| **score == best)
            .map(|(index, _)| index)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{wall_column, FloorLine, PatternLine, PatternLines, Wall, WALL_PATTERN};
    use crate::factory::{DisplayId, FactoryDisplay, FACTORY_CAPACITY};
    use crate::tiles::{RandomSelection, Tile, TOTAL_TILES};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use ColoredTile::*;

    fn seeded(seed: u64) -> RandomSelection<StdRng> {
        RandomSelection::new(StdRng::seed_from_u64(seed))
    }

    /// Play random legal moves until the game ends, checking the census after
    /// every transition.
    fn play_out(config: GameConfig, seed: u64) -> GameEnd {
        let mut strategy = seeded(seed);
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
        let mut game = Game::FactoryOffer(new_game(&config, &mut strategy).unwrap());

        for _ in 0..10_000 {
            assert!(game.state().census().is_conserved(), "{:?}", game.state().census());
            game = match game {
                Game::RoundSetup(setup) => setup.round_setup(&mut strategy).unwrap(),
                Game::FactoryOffer(offer) => {
                    let moves = legal_moves(&offer);
                    assert!(!moves.is_empty());
                    let mv = moves[rng.random_range(0..moves.len())];
                    offer.play(mv).unwrap()
                }
                Game::WallTiling(tiling) => tiling.tile_boards().unwrap(),
                Game::GameEnd(end) => return end,
            };
        }
        panic!("game did not finish");
    }

    fn offer_with(state: GameState, next_board_index: usize) -> FactoryOffer {
        FactoryOffer {
            state,
            next_board_index,
        }
    }

    #[test]
    fn test_new_game_deals_first_round() {
        let offer = new_game(&GameConfig::new(3, 2), &mut seeded(7)).unwrap();
        let state = offer.state();

        assert_eq!(state.round, 1);
        assert_eq!(state.factory_displays.len(), 4);
        assert!(state
            .factory_displays
            .iter()
            .all(|display| display.tiles().len() == FACTORY_CAPACITY));
        assert_eq!(state.bag.len(), TOTAL_TILES - 16);
        assert_eq!(state.table_center, TableCenter::default());
        assert_eq!(state.boards.starting_index(), 2);
        assert_eq!(offer.next_board_index(), 2);
        assert!(state.census().is_conserved());
    }

    #[test]
    fn test_new_game_rejects_bad_config() {
        assert_eq!(
            new_game(&GameConfig::new(0, 0), &mut seeded(1)),
            Err(RulesError::PlayerCount { max: 4, actual: 0 })
        );
        assert_eq!(
            new_game(&GameConfig::new(2, 2), &mut seeded(1)),
            Err(RulesError::BoardIndex { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_play_advances_turn_cursor() {
        let offer = new_game(&GameConfig::default(), &mut seeded(11)).unwrap();
        let mv = legal_moves(&offer)[0];

        let Some(Game::FactoryOffer(next)) = offer.play(mv) else {
            panic!("first move should keep drafting");
        };

        assert_eq!(next.next_board_index(), 1);
        assert_eq!(next.state().factory_displays.len(), 2);
        assert_eq!(next.state().boards.starting_index(), 0);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let displays = FactoryDisplays::new([FactoryDisplay::new(
            DisplayId(0),
            &[Blue, Blue, Black, Black],
        )
        .unwrap()]);
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.factory_displays = displays;
        let offer = offer_with(state, 0);
        let before = offer.clone();

        let missing_color = Move {
            pool: TilePool::FactoryDisplay(DisplayId(0)),
            color: Red,
            destination: Destination::Floor,
        };
        let bad_line = Move {
            pool: TilePool::FactoryDisplay(DisplayId(0)),
            color: Blue,
            destination: Destination::PatternLine(5),
        };

        assert_eq!(offer.play(missing_color), None);
        assert_eq!(offer.play(bad_line), None);
        assert_eq!(offer.factory_offer(TilePool::TableCenter, Blue, 0), None);
        assert_eq!(offer, before);
    }

    #[test]
    fn test_every_legal_move_is_accepted() {
        let offer = new_game(&GameConfig::new(4, 0), &mut seeded(5)).unwrap();
        let moves = legal_moves(&offer);

        // Five displays, each with at least one color, six destinations per color
        assert!(moves.len() >= 5 * 6);
        for mv in moves {
            assert!(offer.play(mv).is_some(), "{mv:?} rejected");
        }
    }

    #[test]
    fn test_legal_moves_skip_lines_holding_another_color() {
        let lines = PatternLines::new(&[
            PatternLine::Populated { color: Red, count: 1 },
            PatternLine::Empty,
            PatternLine::Empty,
            PatternLine::Empty,
            PatternLine::Empty,
        ])
        .unwrap();
        let mut state = GameState::new(&GameConfig::new(1, 0)).unwrap();
        state.boards = state.boards.replace(
            0,
            Board::new(GameScore::default(), lines, FloorLine::default(), Wall::default()),
        );
        state.table_center = TableCenter::Unpicked { tiles: vec![Blue] };

        let moves = legal_moves(&offer_with(state, 0));
        let destinations: Vec<_> = moves.iter().map(|mv| mv.destination).collect();

        assert_eq!(
            destinations,
            vec![
                Destination::PatternLine(1),
                Destination::PatternLine(2),
                Destination::PatternLine(3),
                Destination::PatternLine(4),
                Destination::Floor,
            ]
        );
    }

    #[test]
    fn test_last_pick_moves_to_wall_tiling() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.table_center = TableCenter::Unpicked {
            tiles: vec![Yellow, Yellow],
        };
        let offer = offer_with(state, 1);

        let Some(Game::WallTiling(tiling)) = offer.factory_offer(TilePool::TableCenter, Yellow, 1)
        else {
            panic!("empty pools should end the factory offer");
        };

        let board = tiling.state().boards.get(1).unwrap();
        assert_eq!(
            board.pattern_lines.get(1),
            Some(PatternLine::Populated {
                color: Yellow,
                count: 2
            })
        );
        assert_eq!(board.floor_line.tiles(), &[Tile::StartingPlayerMarker]);
    }

    #[test]
    fn test_dry_pools_with_unpicked_center_end_the_offer() {
        let mut state = GameState::new(&GameConfig::new(2, 1)).unwrap();
        state.factory_displays =
            FactoryDisplays::new([FactoryDisplay::new(DisplayId(0), &[Red; 4]).unwrap()]);
        state.table_center = TableCenter::default();
        let offer = offer_with(state, 1);

        let Some(Game::WallTiling(tiling)) =
            offer.factory_offer(TilePool::FactoryDisplay(DisplayId(0)), Red, 3)
        else {
            panic!("nothing is left to draft");
        };

        let state = tiling.state();
        assert!(!phase_end(&state.factory_displays, &state.table_center));
        assert!(state.table_center.has_marker());
        assert_eq!(
            state.boards.get(1).unwrap().pattern_lines.get(3),
            Some(PatternLine::Populated {
                color: Red,
                count: 4
            })
        );

        let Ok(Game::RoundSetup(setup)) = tiling.tile_boards() else {
            panic!("no wall row is complete");
        };
        assert_eq!(setup.state().boards.starting_index(), 1);
        assert!(setup.state().boards.get(1).unwrap().wall.is_populated(3, wall_column(3, Red)));
    }

    #[test]
    fn test_tiling_hands_first_turn_to_marker_holder() {
        let mut state = GameState::new(&GameConfig::new(3, 0)).unwrap();
        let mut holder = Board::default();
        holder.floor_line = FloorLine::new(&[Tile::StartingPlayerMarker]).unwrap();
        state.boards = state.boards.replace(2, holder);
        state.table_center = TableCenter::Picked { tiles: vec![] };

        let Ok(Game::RoundSetup(setup)) = (WallTiling { state }).tile_boards() else {
            panic!("no wall row is complete");
        };

        assert_eq!(setup.state().boards.starting_index(), 2);
        assert!(setup.state().boards.iter().all(|board| board.floor_line.is_empty()));
        assert_eq!(setup.state().table_center, TableCenter::default());
        // Marker penalty only
        assert_eq!(setup.state().boards.get(2).unwrap().score, GameScore::new(0));
    }

    #[test]
    fn test_unclaimed_marker_keeps_starting_index() {
        let mut state = GameState::new(&GameConfig::new(2, 1)).unwrap();
        state.table_center = TableCenter::Unpicked { tiles: vec![] };

        let Ok(Game::RoundSetup(setup)) = (WallTiling { state }).tile_boards() else {
            panic!("no wall row is complete");
        };

        assert_eq!(setup.state().boards.starting_index(), 1);
    }

    #[test]
    fn test_missing_marker_is_an_error() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.table_center = TableCenter::Picked { tiles: vec![] };

        assert_eq!(
            (WallTiling { state }).tile_boards(),
            Err(RulesError::MissingStartingMarker)
        );
    }

    #[test]
    fn test_complete_row_ends_game_with_bonuses() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        let almost_row = Wall::with_populated(&[
            (0, WALL_PATTERN[0][0]),
            (0, WALL_PATTERN[0][1]),
            (0, WALL_PATTERN[0][2]),
            (0, WALL_PATTERN[0][3]),
        ]);
        let mut lines = [PatternLine::Empty; PATTERN_LINE_COUNT];
        lines[0] = PatternLine::Populated {
            color: WALL_PATTERN[0][4],
            count: 1,
        };
        let finisher = Board::new(
            GameScore::new(20),
            PatternLines::new(&lines).unwrap(),
            FloorLine::new(&[Tile::StartingPlayerMarker]).unwrap(),
            almost_row,
        );
        state.boards = state.boards.replace(0, finisher);
        state.table_center = TableCenter::Picked { tiles: vec![] };

        let Ok(Game::GameEnd(end)) = (WallTiling { state }).tile_boards() else {
            panic!("a complete row ends the game");
        };

        // 20 + 5 for the row run - 1 marker + 2 row bonus
        assert_eq!(end.final_scores(), vec![GameScore::new(26), GameScore::new(0)]);
        assert_eq!(end.winners(), vec![0]);
    }

    #[test]
    fn test_tied_winners_share() {
        let state = GameState::new(&GameConfig::new(3, 0)).unwrap();
        let end = GameEnd::new(state);
        assert_eq!(end.winners(), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_supply_ends_game() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        state.bag = TileBag::empty();

        let game = (RoundSetup { state }).round_setup(&mut seeded(0)).unwrap();

        assert!(game.is_over());
        assert_eq!(game.state().round, 0);
    }

    #[test]
    fn test_full_games_conserve_tiles() {
        for players in 1..=4 {
            let end = play_out(GameConfig::new(players, 0), 100 + players as u64);
            let state = end.state();

            assert!(state.census().is_conserved());
            assert!(state.round >= 1);
            assert!(!end.winners().is_empty());
            let complete_row = game_end(state.boards.walls());
            assert!(complete_row || (state.bag.is_empty() && state.discard.is_empty()));
        }
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let first = play_out(GameConfig::new(3, 1), 2024);
        let second = play_out(GameConfig::new(3, 1), 2024);
        assert_eq!(first, second);
    }

    #[test]
    fn test_snapshot_serializes() {
        let offer = new_game(&GameConfig::default(), &mut seeded(9)).unwrap();
        let json = serde_json::to_string(&Game::FactoryOffer(offer.clone())).unwrap();
        let back: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Game::FactoryOffer(offer));
    }
}
