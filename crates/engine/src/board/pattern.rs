//! Pattern lines: five triangular staging rows, row `i` holds up to `i + 1` tiles.

use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::tiles::ColoredTile;

pub const PATTERN_LINE_COUNT: usize = 5;

/// Capacity of pattern line `index`.
pub const fn line_capacity(index: usize) -> u8 {
    index as u8 + 1
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PatternLine {
    #[default]
    Empty,
    Populated { color: ColoredTile, count: u8 },
}

impl PatternLine {
    pub fn color(self) -> Option<ColoredTile> {
        match self {
            PatternLine::Empty => None,
            PatternLine::Populated { color, .. } => Some(color),
        }
    }

    pub fn count(self) -> u8 {
        match self {
            PatternLine::Empty => 0,
            PatternLine::Populated { count, .. } => count,
        }
    }

    /// Whether the line at `index` holds as many tiles as it can.
    pub fn is_full(self, index: usize) -> bool {
        self.count() == line_capacity(index)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PatternLinesSnapshot")]
pub struct PatternLines {
    lines: [PatternLine; PATTERN_LINE_COUNT],
}

/// Unchecked wire form; deserializing goes through [`PatternLines::new`].
#[derive(Deserialize)]
struct PatternLinesSnapshot {
    lines: Vec<PatternLine>,
}

impl TryFrom<PatternLinesSnapshot> for PatternLines {
    type Error = RulesError;

    fn try_from(snapshot: PatternLinesSnapshot) -> Result<Self, Self::Error> {
        PatternLines::new(&snapshot.lines)
    }
}

impl PatternLines {
    pub fn new(lines: &[PatternLine]) -> Result<PatternLines, RulesError> {
        let lines: [PatternLine; PATTERN_LINE_COUNT] =
            lines.try_into().map_err(|_| RulesError::PatternLineCount {
                expected: PATTERN_LINE_COUNT,
                actual: lines.len(),
            })?;

        for (index, line) in lines.iter().enumerate() {
            if let PatternLine::Populated { count, .. } = *line {
                if count == 0 {
                    return Err(RulesError::EmptyPopulatedLine { index });
                }
                let capacity = line_capacity(index);
                if count > capacity {
                    return Err(RulesError::PatternLineOverCapacity {
                        index,
                        count,
                        capacity,
                    });
                }
            }
        }

        Ok(PatternLines { lines })
    }

    pub fn get(&self, index: usize) -> Option<PatternLine> {
        self.lines.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = PatternLine> + '_ {
        self.lines.iter().copied()
    }

    /// Add `count` tiles of `color` to line `index`.
    ///
    /// Returns the updated lines and how many tiles did not fit, or `None` if
    /// the index is out of range or the line already holds another color.
    pub fn try_add(
        &self,
        index: usize,
        count: usize,
        color: ColoredTile,
    ) -> Option<(PatternLines, usize)> {
        let existing = match self.get(index)? {
            PatternLine::Empty => 0,
            PatternLine::Populated {
                color: held,
                count: held_count,
            } => {
                if held != color {
                    return None;
                }
                held_count as usize
            }
        };

        let capacity = line_capacity(index) as usize;
        let accepted = count.min(capacity.saturating_sub(existing));
        let remainder = count - accepted;
        let total = existing + accepted;

        let mut lines = self.lines;
        // Adding zero tiles to an empty line leaves it empty
        lines[index] = if total == 0 {
            PatternLine::Empty
        } else {
            PatternLine::Populated {
                color,
                count: total as u8,
            }
        };

        Some((PatternLines { lines }, remainder))
    }

    /// The lines with line `index` emptied.
    pub(crate) fn cleared(&self, index: usize) -> PatternLines {
        let mut lines = self.lines;
        lines[index] = PatternLine::Empty;
        PatternLines { lines }
    }

    pub fn tile_count(&self, color: ColoredTile) -> usize {
        self.iter()
            .filter(|line| line.color() == Some(color))
            .map(|line| line.count() as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ColoredTile::*;

    #[test]
    fn test_new_requires_five_lines() {
        assert_eq!(
            PatternLines::new(&[PatternLine::Empty; 4]),
            Err(RulesError::PatternLineCount {
                expected: 5,
                actual: 4
            })
        );
        assert!(PatternLines::new(&[PatternLine::Empty; 5]).is_ok());
    }

    #[test]
    fn test_new_rejects_over_capacity() {
        let mut lines = [PatternLine::Empty; 5];
        lines[1] = PatternLine::Populated {
            color: Red,
            count: 3,
        };
        assert_eq!(
            PatternLines::new(&lines),
            Err(RulesError::PatternLineOverCapacity {
                index: 1,
                count: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_try_add_splits_overflow() {
        let lines = PatternLines::default();
        let (lines, remainder) = lines.try_add(2, 4, Black).unwrap();

        assert_eq!(
            lines.get(2),
            Some(PatternLine::Populated {
                color: Black,
                count: 3
            })
        );
        assert_eq!(remainder, 1);
        assert!(lines.get(2).unwrap().is_full(2));
    }

    #[test]
    fn test_try_add_tops_up_existing_line() {
        let (lines, _) = PatternLines::default().try_add(4, 2, Blue).unwrap();
        let (lines, remainder) = lines.try_add(4, 2, Blue).unwrap();
        assert_eq!(lines.get(4).unwrap().count(), 4);
        assert_eq!(remainder, 0);

        let (lines, remainder) = lines.try_add(4, 3, Blue).unwrap();
        assert_eq!(lines.get(4).unwrap().count(), 5);
        assert_eq!(remainder, 2);
    }

    #[test]
    fn test_try_add_rejects_other_color_and_bad_index() {
        let (lines, _) = PatternLines::default().try_add(3, 1, White).unwrap();
        assert_eq!(lines.try_add(3, 1, Red), None);
        assert_eq!(lines.try_add(5, 1, Red), None);
    }

    #[test]
    fn test_capacity_is_never_exceeded() {
        for index in 0..PATTERN_LINE_COUNT {
            for count in 0..8 {
                let (lines, remainder) =
                    PatternLines::default().try_add(index, count, Yellow).unwrap();
                let placed = lines.get(index).unwrap().count();
                assert!(placed <= line_capacity(index));
                assert_eq!(placed as usize + remainder, count);
            }
        }
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let (lines, _) = PatternLines::default().try_add(1, 2, Red).unwrap();
        let json = serde_json::to_string(&lines).unwrap();
        assert_eq!(serde_json::from_str::<PatternLines>(&json).unwrap(), lines);

        let over_capacity = serde_json::json!({
            "lines": ["Empty", { "Populated": { "color": "Red", "count": 3 } }, "Empty", "Empty", "Empty"]
        });
        let err = serde_json::from_value::<PatternLines>(over_capacity).unwrap_err();
        assert!(err.to_string().contains("capacity"), "{err}");

        let four_lines = serde_json::json!({ "lines": ["Empty", "Empty", "Empty", "Empty"] });
        assert!(serde_json::from_value::<PatternLines>(four_lines).is_err());
    }
}
