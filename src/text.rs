//! Line-oriented text front end.
//!
//! A small GTP-style protocol for driving one board from a terminal or a
//! controlling program. Each input line is an optional numeric id followed
//! by a command and its arguments. Each response is `=id message` on
//! success or `?id message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the loop
//! - `boardsize <height> [width]` - Start a new game on a board of that size
//! - `clear_board` - Reset the board to the starting position
//! - `showboard` - Print the board
//! - `hints` - Mark and list the moves of the player to move
//! - `play <coord>` - Play at a coordinate (`c4` or `row,col`)
//! - `genmove` - Play a random legal move
//! - `next` - Advance the turn, passing if needed
//! - `score` - Disk counts
//! - `winner` - Leading player, or `draw`
//! - `turn` - Player to move, or `none` once the game is over
//!
//! ## Example
//!
//! ```
//! use reversi_rust::text::TextEngine;
//!
//! let mut engine = TextEngine::new(8, 8);
//! let mut out = Vec::new();
//! engine.run("play d3\nscore\n".as_bytes(), &mut out).unwrap();
//! let out = String::from_utf8(out).unwrap();
//! assert!(out.contains("= light 1 dark 4"));
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Board, parse_coord, str_coord};
use crate::constants::MAX_TEXT_SIZE;
use crate::selfplay::choose_random_move;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "hints",
    "known_command",
    "list_commands",
    "name",
    "next",
    "play",
    "quit",
    "score",
    "showboard",
    "turn",
    "version",
    "winner",
];

/// Text front end state.
pub struct TextEngine {
    /// Current game
    board: Board,
    /// Source of `genmove` choices
    rng: fastrand::Rng,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::with_board(Board::default())
    }
}

impl TextEngine {
    /// Create an engine with a fresh board of the given size.
    pub fn new(height: usize, width: usize) -> Self {
        Self::with_board(Board::new(height, width))
    }

    /// Create an engine around an existing board.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            rng: fastrand::Rng::new(),
        }
    }

    /// Seed the `genmove` generator for reproducible sessions.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command id from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute one command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let height = args[0].parse::<usize>();
                let width = args.get(1).map_or(height.clone(), |w| w.parse::<usize>());
                match (height, width) {
                    (Ok(h), Ok(w)) if h > MAX_TEXT_SIZE || w > MAX_TEXT_SIZE => (
                        false,
                        format!("unacceptable size, at most {MAX_TEXT_SIZE} is supported"),
                    ),
                    (Ok(h), Ok(w)) => {
                        self.board = Board::new(h, w);
                        (true, format!("{}x{}", self.board.height(), self.board.width()))
                    }
                    _ => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.board.reset();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.board.to_string().trim_end())),

            "hints" => {
                self.board.clear_hints();
                let count = self.board.add_and_count_hints();
                let coords: Vec<String> = self.board.hints().into_iter().map(str_coord).collect();
                (true, format!("{count} {}", coords.join(" ")).trim_end().to_string())
            }

            "play" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let Some(pos) = parse_coord(args[0]) else {
                    return (false, format!("invalid coordinate: {}", args[0]));
                };
                match self.board.play(pos) {
                    Ok(flipped) => {
                        self.board.prepare_next_turn();
                        (true, format!("flipped {}", flipped.len()))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                if self.board.prepare_next_turn().is_empty() {
                    return (false, "game is over".to_string());
                }
                let Some(pos) = choose_random_move(&self.board, &mut self.rng) else {
                    return (false, "no legal move".to_string());
                };
                match self.board.play(pos) {
                    Ok(_) => {
                        self.board.prepare_next_turn();
                        (true, str_coord(pos))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "next" => (true, self.board.prepare_next_turn().player_name().to_string()),

            "score" => (true, self.board.score().to_string()),

            "winner" => {
                let winner = self.board.winner();
                let name = if winner.is_empty() { "draw" } else { winner.player_name() };
                (true, name.to_string())
            }

            "turn" => (true, self.board.current_player().player_name().to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
