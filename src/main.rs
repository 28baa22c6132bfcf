//! Terminal driver for Azul
//!
//! Plays one match. Seats passed with `--human` are read from stdin; every
//! other seat plays a uniformly random legal move.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use azul::display::{
    color_name, display_game, format_move, format_move_plain, BOLD, DIM, RESET,
};
use azul::{
    legal_moves, new_game, ColoredTile, Destination, DisplayId, FactoryOffer, Game, GameConfig,
    Move, RandomSelection, TilePool, ALL_COLORS, PATTERN_LINE_COUNT,
};

/// Play Azul in the terminal
#[derive(Parser, Debug)]
#[command(name = "azul")]
#[command(about = "Play a match of Azul against random opponents", long_about = None)]
struct Args {
    /// Number of players (1-4)
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Seat that opens the first round
    #[arg(long, default_value_t = 0)]
    first_player: usize,

    /// Random seed for bag draws and random seats
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seat played from stdin (repeat for several humans)
    #[arg(long = "human")]
    humans: Vec<usize>,

    /// Print the final game state as JSON
    #[arg(long)]
    json: bool,

    /// Stop after this many rounds even if no wall row is complete
    #[arg(long)]
    max_rounds: Option<u32>,
}

fn parse_color(token: &str) -> Option<ColoredTile> {
    let token = token.to_ascii_lowercase();
    ALL_COLORS.into_iter().find(|&color| {
        let name = color_name(color).to_ascii_lowercase();
        // Black is `k` so it does not clash with Blue
        let short = match color {
            ColoredTile::Black => "k".to_string(),
            _ => name[..1].to_string(),
        };
        token == name || token == short
    })
}

/// Parse `<pool> <color> <line>`, e.g. `f0 red 3` or `c k floor`.
fn parse_move(input: &str) -> Option<Move> {
    let mut tokens = input.split_whitespace();
    let pool = match tokens.next()?.to_ascii_lowercase().as_str() {
        "c" | "center" => TilePool::TableCenter,
        other => {
            let id = other.strip_prefix('f')?.parse::<u8>().ok()?;
            TilePool::FactoryDisplay(DisplayId(id))
        }
    };
    let color = parse_color(tokens.next()?)?;
    let destination = match tokens.next()?.to_ascii_lowercase().as_str() {
        "floor" | "fl" => Destination::Floor,
        line => {
            let line = line.parse::<usize>().ok()?;
            if line == 0 || line > PATTERN_LINE_COUNT {
                return None;
            }
            Destination::PatternLine(line - 1)
        }
    };
    if tokens.next().is_some() {
        return None;
    }
    Some(Move {
        pool,
        color,
        destination,
    })
}

/// Prompt until the seat makes a move the engine accepts. `None` on quit/EOF.
fn play_human(offer: &FactoryOffer, input: &mut impl BufRead) -> io::Result<Option<Game>> {
    display_game(offer.state(), Some(offer.next_board_index()));
    println!(
        "{BOLD}Player {} to move.{RESET} {DIM}<pool> <color> <line>, e.g. `f0 red 3` or `c k floor`; `?` lists moves, `q` quits{RESET}",
        offer.next_board_index()
    );

    loop {
        print!("{BOLD}> {RESET}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "q" | "quit" => return Ok(None),
            "?" => {
                for mv in legal_moves(offer) {
                    println!("  {}", format_move(&mv));
                }
            }
            text => match parse_move(text) {
                None => println!("Could not read that move, try again."),
                Some(mv) => match offer.play(mv) {
                    Some(game) => return Ok(Some(game)),
                    None => println!("{} is not allowed, try again.", format_move(&mv)),
                },
            },
        }
    }
}

fn play_random(offer: &FactoryOffer, rng: &mut impl Rng) -> Option<Game> {
    let moves = legal_moves(offer);
    if moves.is_empty() {
        return None;
    }
    let mv = moves[rng.random_range(0..moves.len())];
    info!(seat = offer.next_board_index(), mv = %format_move_plain(&mv), "random move");
    offer.play(mv)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::new(args.players, args.first_player);
    config.validate()?;
    if let Some(seat) = args.humans.iter().find(|&&seat| seat >= args.players) {
        return Err(format!("--human {seat} is not a seat at a {}-player table", args.players).into());
    }

    let mut strategy = RandomSelection::new(StdRng::seed_from_u64(args.seed));
    let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(1));
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut game = Game::FactoryOffer(new_game(&config, &mut strategy)?);
    loop {
        game = match game {
            Game::RoundSetup(setup) => {
                if args.max_rounds.is_some_and(|max| setup.state().round >= max) {
                    info!(rounds = setup.state().round, "round limit reached");
                    game = Game::RoundSetup(setup);
                    break;
                }
                setup.round_setup(&mut strategy)?
            }
            Game::FactoryOffer(offer) => {
                let next = if args.humans.contains(&offer.next_board_index()) {
                    play_human(&offer, &mut input)?
                } else {
                    play_random(&offer, &mut rng)
                };
                match next {
                    Some(next) => next,
                    None => {
                        println!("Goodbye!");
                        return Ok(());
                    }
                }
            }
            Game::WallTiling(tiling) => tiling.tile_boards()?,
            Game::GameEnd(end) => {
                game = Game::GameEnd(end);
                break;
            }
        };
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(game.state())?);
        return Ok(());
    }

    display_game(game.state(), None);
    println!("{BOLD}═══════════════════════════════════════{RESET}");
    match &game {
        Game::GameEnd(end) => {
            println!("{BOLD}                GAME OVER{RESET}");
            for (seat, score) in end.final_scores().iter().enumerate() {
                println!("Player {seat}: {score}");
            }
            let winners: Vec<String> = end.winners().iter().map(|seat| seat.to_string()).collect();
            println!("\n{BOLD}Winner: Player {}{RESET}", winners.join(", "));
        }
        _ => {
            println!("{BOLD}          STOPPED AFTER {} ROUNDS{RESET}", game.state().round);
            for (seat, board) in game.state().boards.iter().enumerate() {
                println!("Player {seat}: {}", board.score);
            }
        }
    }

    Ok(())
}
