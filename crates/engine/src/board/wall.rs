//! The wall: a 5x5 grid whose color layout is the same on every board.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::tiles::ColoredTile;

pub const WALL_SIZE: usize = 5;

/// Canonical color cycle; row `r` starts at `WALL_SEQUENCE[r]`.
pub const WALL_SEQUENCE: [ColoredTile; WALL_SIZE] = [
    ColoredTile::Blue,
    ColoredTile::Yellow,
    ColoredTile::Red,
    ColoredTile::Black,
    ColoredTile::White,
];

/// Wall pattern: WALL_PATTERN[row][col] = color printed at that space
pub const WALL_PATTERN: [[ColoredTile; WALL_SIZE]; WALL_SIZE] = build_wall_pattern();

const fn build_wall_pattern() -> [[ColoredTile; WALL_SIZE]; WALL_SIZE] {
    let mut pattern = [[ColoredTile::Blue; WALL_SIZE]; WALL_SIZE];
    let mut row = 0;
    while row < WALL_SIZE {
        let mut col = 0;
        while col < WALL_SIZE {
            pattern[row][col] = WALL_SEQUENCE[(row + col) % WALL_SIZE];
            col += 1;
        }
        row += 1;
    }
    pattern
}

fn sequence_position(color: ColoredTile) -> usize {
    match color {
        ColoredTile::Blue => 0,
        ColoredTile::Yellow => 1,
        ColoredTile::Red => 2,
        ColoredTile::Black => 3,
        ColoredTile::White => 4,
    }
}

/// Column of `color` in wall row `row`.
pub fn wall_column(row: usize, color: ColoredTile) -> usize {
    (sequence_position(color) + WALL_SIZE - row % WALL_SIZE) % WALL_SIZE
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WallSpace {
    Empty { expected: ColoredTile },
    Populated { color: ColoredTile },
}

impl WallSpace {
    /// Color printed on (or placed in) this space.
    pub fn color(self) -> ColoredTile {
        match self {
            WallSpace::Empty { expected } => expected,
            WallSpace::Populated { color } => color,
        }
    }

    pub fn is_populated(self) -> bool {
        matches!(self, WallSpace::Populated { .. })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WallLineSnapshot")]
pub struct WallLine {
    spaces: [WallSpace; WALL_SIZE],
}

#[derive(Deserialize)]
struct WallLineSnapshot {
    spaces: Vec<WallSpace>,
}

impl TryFrom<WallLineSnapshot> for WallLine {
    type Error = RulesError;

    fn try_from(snapshot: WallLineSnapshot) -> Result<Self, Self::Error> {
        WallLine::new(&snapshot.spaces)
    }
}

impl WallLine {
    /// Empty line whose colors run along the cycle from `leftmost`.
    pub fn from_leftmost(leftmost: ColoredTile) -> WallLine {
        let start = sequence_position(leftmost);
        WallLine {
            spaces: std::array::from_fn(|col| WallSpace::Empty {
                expected: WALL_SEQUENCE[(start + col) % WALL_SIZE],
            }),
        }
    }

    pub fn new(spaces: &[WallSpace]) -> Result<WallLine, RulesError> {
        let spaces: [WallSpace; WALL_SIZE] =
            spaces.try_into().map_err(|_| RulesError::WallSpaceCount {
                expected: WALL_SIZE,
                actual: spaces.len(),
            })?;

        let start = sequence_position(spaces[0].color());
        for (position, space) in spaces.iter().enumerate() {
            if space.color() != WALL_SEQUENCE[(start + position) % WALL_SIZE] {
                return Err(RulesError::WallSpaceSequence { position });
            }
        }

        Ok(WallLine { spaces })
    }

    pub fn leftmost(&self) -> ColoredTile {
        self.spaces[0].color()
    }

    pub fn get(&self, col: usize) -> Option<WallSpace> {
        self.spaces.get(col).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = WallSpace> + '_ {
        self.spaces.iter().copied()
    }

    /// Column holding `color` in this line.
    pub fn column_of(&self, color: ColoredTile) -> usize {
        (sequence_position(color) + WALL_SIZE - sequence_position(self.leftmost())) % WALL_SIZE
    }

    /// The line with the space for `color` populated.
    pub fn populate(&self, color: ColoredTile) -> WallLine {
        let mut spaces = self.spaces;
        spaces[self.column_of(color)] = WallSpace::Populated { color };
        WallLine { spaces }
    }

    pub fn is_complete(&self) -> bool {
        self.spaces.iter().all(|space| space.is_populated())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WallSnapshot")]
pub struct Wall {
    lines: [WallLine; WALL_SIZE],
}

#[derive(Deserialize)]
struct WallSnapshot {
    lines: Vec<WallLine>,
}

impl TryFrom<WallSnapshot> for Wall {
    type Error = RulesError;

    fn try_from(snapshot: WallSnapshot) -> Result<Self, Self::Error> {
        Wall::new(&snapshot.lines)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Wall {
            lines: std::array::from_fn(|row| WallLine::from_leftmost(WALL_SEQUENCE[row])),
        }
    }
}

impl Wall {
    pub fn new(lines: &[WallLine]) -> Result<Wall, RulesError> {
        let lines: [WallLine; WALL_SIZE] =
            lines.try_into().map_err(|_| RulesError::WallLineCount {
                expected: WALL_SIZE,
                actual: lines.len(),
            })?;

        for (index, line) in lines.iter().enumerate() {
            if line.leftmost() != WALL_SEQUENCE[index] {
                return Err(RulesError::WallLineSequence { index });
            }
        }

        Ok(Wall { lines })
    }

    /// Default wall with the given `(row, color)` spaces populated.
    pub fn with_populated(spaces: &[(usize, ColoredTile)]) -> Wall {
        spaces
            .iter()
            .fold(Wall::default(), |wall, &(row, color)| wall.populate(row, color))
    }

    pub fn lines(&self) -> &[WallLine; WALL_SIZE] {
        &self.lines
    }

    pub fn line(&self, row: usize) -> Option<&WallLine> {
        self.lines.get(row)
    }

    /// False for a `(row, col)` outside the wall.
    pub fn is_populated(&self, row: usize, col: usize) -> bool {
        self.lines
            .get(row)
            .and_then(|line| line.get(col))
            .is_some_and(|space| space.is_populated())
    }

    /// The wall with the space for `color` in `row` populated. A row outside
    /// the wall leaves it unchanged.
    pub fn populate(&self, row: usize, color: ColoredTile) -> Wall {
        let mut lines = self.lines;
        if let Some(line) = lines.get_mut(row) {
            *line = line.populate(color);
        }
        Wall { lines }
    }

    pub fn populated_count(&self) -> usize {
        self.lines
            .iter()
            .flat_map(|line| line.iter())
            .filter(|space| space.is_populated())
            .count()
    }

    pub fn color_count(&self, color: ColoredTile) -> usize {
        self.lines
            .iter()
            .flat_map(|line| line.iter())
            .filter(|&space| space == WallSpace::Populated { color })
            .count()
    }

    pub fn is_row_complete(&self, row: usize) -> bool {
        self.lines.get(row).is_some_and(|line| line.is_complete())
    }

    pub fn is_column_complete(&self, col: usize) -> bool {
        (0..WALL_SIZE).all(|row| self.is_populated(row, col))
    }

    pub fn is_color_complete(&self, color: ColoredTile) -> bool {
        self.color_count(color) == WALL_SIZE
    }
}
