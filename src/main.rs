//! Reversi-Rust: an Othello/Reversi rules engine.
//!
//! ## Usage
//!
//! - `reversi-rust` - Start the text front end on an 8x8 board
//! - `reversi-rust text --height 6 --width 6` - Text front end on another size
//! - `reversi-rust selfplay --games 100 --seed 1` - Play random games
//! - `reversi-rust demo` - Print a short scripted game

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use reversi_rust::board::{Board, parse_coord, str_coord};
use reversi_rust::constants::{DEFAULT_GAMES, DEFAULT_SIZE};
use reversi_rust::disk::Disk;
use reversi_rust::selfplay::run_games;
use reversi_rust::text::TextEngine;

/// Reversi-Rust: an Othello/Reversi rules engine
#[derive(Parser)]
#[command(name = "reversi-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Text {
        /// Board rows (at least 4)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        height: usize,
        /// Board columns (at least 4)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        width: usize,
        /// Seed for `genmove`
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play random games and report the results
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value_t = DEFAULT_GAMES)]
        games: usize,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Board rows (at least 4)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        height: usize,
        /// Board columns (at least 4)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        width: usize,
        /// Report every game on stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Run a short scripted game
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Text {
            height,
            width,
            seed,
        }) => run_text(height, width, seed),
        Some(Commands::Selfplay {
            games,
            seed,
            height,
            width,
            verbose,
        }) => run_selfplay(games, seed, height, width, verbose),
        Some(Commands::Demo) => run_demo(),
        None => run_text(DEFAULT_SIZE, DEFAULT_SIZE, None),
    }
}

fn run_text(height: usize, width: usize, seed: Option<u64>) -> Result<()> {
    let mut engine = TextEngine::new(height, width);
    if let Some(seed) = seed {
        engine.seed(seed);
    }
    let stdin = io::stdin();
    engine
        .run(stdin.lock(), io::stdout())
        .context("text front end I/O failed")
}

fn run_selfplay(
    games: usize,
    seed: Option<u64>,
    height: usize,
    width: usize,
    verbose: bool,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let records = run_games(games, height, width, &mut rng, verbose)
        .context("self-play hit an illegal move")?;

    let mut wins_dark = 0;
    let mut wins_light = 0;
    let mut draws = 0;
    for record in &records {
        match record.winner {
            Disk::DARK => wins_dark += 1,
            Disk::LIGHT => wins_light += 1,
            _ => draws += 1,
        }
    }
    println!("games: {}", records.len());
    println!("dark wins: {wins_dark}");
    println!("light wins: {wins_light}");
    println!("draws: {draws}");
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Reversi-Rust: Othello rules engine\n");

    let mut board = Board::default();
    board.prepare_next_turn();
    println!("Dark to move, hints marked with '*':");
    println!("{board}");

    for coord in ["d3", "c3", "c4", "e3"] {
        let player = board.current_player();
        let pos = parse_coord(coord).context("bad demo coordinate")?;
        let flipped = board
            .play(pos)
            .with_context(|| format!("demo move {coord} was refused"))?;
        println!(
            "{} plays {} and flips {} disk(s)",
            player.player_name(),
            str_coord(pos),
            flipped.len()
        );
        board.prepare_next_turn();
    }

    println!("\n{board}");
    println!("Score: {}", board.score());
    println!("Next to move: {}", board.current_player().player_name());
    Ok(())
}
