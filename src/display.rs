//! Shared display utilities for rendering Azul game state in the terminal
//!
//! Provides colorized, human-readable output for boards, pools, and moves.

use azul_engine::{
    Board, ColoredTile, Destination, FactoryDisplays, GameState, Move, PatternLine, TableCenter,
    Tile, TilePool, WallSpace, PATTERN_LINE_COUNT,
};

// ANSI color codes for tile display
pub const BLUE: &str = "\x1b[94m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const BLACK: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[97m";
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub fn color_code(color: ColoredTile) -> &'static str {
    match color {
        ColoredTile::Blue => BLUE,
        ColoredTile::Yellow => YELLOW,
        ColoredTile::Red => RED,
        ColoredTile::Black => BLACK,
        ColoredTile::White => WHITE,
    }
}

pub fn color_char(color: ColoredTile) -> char {
    match color {
        ColoredTile::Blue => 'B',
        ColoredTile::Yellow => 'Y',
        ColoredTile::Red => 'R',
        ColoredTile::Black => 'K',
        ColoredTile::White => 'W',
    }
}

pub fn color_name(color: ColoredTile) -> &'static str {
    match color {
        ColoredTile::Blue => "Blue",
        ColoredTile::Yellow => "Yellow",
        ColoredTile::Red => "Red",
        ColoredTile::Black => "Black",
        ColoredTile::White => "White",
    }
}

pub fn display_tile(color: ColoredTile) -> String {
    format!("{}{}{}", color_code(color), color_char(color), RESET)
}

pub fn display_token(tile: Tile) -> String {
    match tile {
        Tile::Colored(color) => display_tile(color),
        Tile::StartingPlayerMarker => format!("{BOLD}1{RESET}"),
    }
}

fn format_pool(pool: TilePool) -> String {
    match pool {
        TilePool::FactoryDisplay(id) => format!("F{}", id.0),
        TilePool::TableCenter => "Center".to_string(),
    }
}

/// Format a move for display
pub fn format_move(mv: &Move) -> String {
    let dest = match mv.destination {
        Destination::PatternLine(line) => format!("Line {}", line + 1),
        Destination::Floor => "Floor".to_string(),
    };
    format!(
        "{} {} -> {}",
        format_pool(mv.pool),
        display_tile(mv.color),
        dest
    )
}

/// Same as [`format_move`] without escape codes.
pub fn format_move_plain(mv: &Move) -> String {
    let dest = match mv.destination {
        Destination::PatternLine(line) => format!("L{}", line + 1),
        Destination::Floor => "Floor".to_string(),
    };
    format!("{} {} {}", format_pool(mv.pool), color_name(mv.color), dest)
}

fn render_pools(factories: &FactoryDisplays, center: &TableCenter) -> String {
    let mut out = format!("{BOLD}FACTORIES:{RESET}\n");
    if factories.is_empty() {
        out.push_str(&format!("  {DIM}(none){RESET}\n"));
    }
    for display in factories.iter() {
        let tiles: Vec<String> = display.tiles().iter().map(|&c| display_tile(c)).collect();
        out.push_str(&format!("  F{}: {}\n", display.id().0, tiles.join(" ")));
    }

    out.push_str(&format!("\n{BOLD}CENTER:{RESET} "));
    if center.has_marker() {
        out.push_str(&display_token(Tile::StartingPlayerMarker));
        out.push(' ');
    }
    if center.is_empty() {
        out.push_str(&format!("{DIM}(empty){RESET}"));
    }
    let tiles: Vec<String> = center.tiles().iter().map(|&c| display_tile(c)).collect();
    out.push_str(&tiles.join(" "));
    out.push('\n');
    out
}

/// Pattern lines (right-aligned) next to the wall, then the floor line.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  Pattern Lines          Wall\n");

    for (row, wall_line) in board.wall.lines().iter().enumerate() {
        let capacity = row + 1;
        let line = board.pattern_lines.get(row).unwrap_or_default();
        let filled = line.count() as usize;

        out.push_str("  ");
        out.push_str(&"  ".repeat(PATTERN_LINE_COUNT - capacity));
        out.push_str(&format!("{DIM}. {RESET}").repeat(capacity - filled));
        if let PatternLine::Populated { color, count } = line {
            for _ in 0..count {
                out.push_str(&display_tile(color));
                out.push(' ');
            }
        }

        out.push_str(" -> ");

        for space in wall_line.iter() {
            match space {
                WallSpace::Populated { color } => out.push_str(&display_tile(color)),
                // Show expected color dimmed
                WallSpace::Empty { expected } => {
                    out.push_str(&format!("{DIM}{}{RESET}", color_char(expected)))
                }
            }
            out.push(' ');
        }
        out.push('\n');
    }

    out.push_str("  Floor: ");
    if board.floor_line.is_empty() {
        out.push_str(&format!("{DIM}(empty){RESET}"));
    }
    let floor: Vec<String> = board
        .floor_line
        .tiles()
        .iter()
        .map(|&tile| display_token(tile))
        .collect();
    out.push_str(&floor.join(" "));
    out.push('\n');
    out
}

/// Display the full table with every board
///
/// If `highlight_player` is Some, that player's board will be shown with emphasis.
pub fn display_game(state: &GameState, highlight_player: Option<usize>) {
    println!("\n{BOLD}══════════════════════════════════════════════════════════════{RESET}");
    println!(
        "{BOLD}  Round {}{RESET}   |   Starting Player: {}",
        state.round,
        state.boards.starting_index()
    );
    println!("{BOLD}══════════════════════════════════════════════════════════════{RESET}\n");

    println!("{}", render_pools(&state.factory_displays, &state.table_center));

    for (seat, board) in state.boards.iter().enumerate() {
        let header = format!("PLAYER {} (Score: {})", seat, board.score);
        if highlight_player == Some(seat) {
            println!("{BOLD}{header}{RESET}");
        } else {
            println!("{DIM}{header}{RESET}");
        }
        println!("{}", render_board(board));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azul_engine::DisplayId;

    #[test]
    fn test_format_move_plain() {
        let mv = Move {
            pool: TilePool::FactoryDisplay(DisplayId(3)),
            color: ColoredTile::White,
            destination: Destination::PatternLine(0),
        };
        assert_eq!(format_move_plain(&mv), "F3 White L1");

        let to_floor = Move {
            pool: TilePool::TableCenter,
            color: ColoredTile::Red,
            destination: Destination::Floor,
        };
        assert_eq!(format_move_plain(&to_floor), "Center Red Floor");
    }

    #[test]
    fn test_render_board_has_one_row_per_wall_line() {
        let rendered = render_board(&Board::default());
        assert_eq!(rendered.lines().count(), 1 + 5 + 1);
        assert!(rendered.contains("(empty)"));
    }
}
