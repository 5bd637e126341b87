//! Reversi-Rust: an Othello/Reversi rules engine.
//!
//! The crate keeps a rectangular board of disks, computes legal moves,
//! flips captured disks, alternates turns with forced passes and decides
//! the winner. It never performs I/O itself; the text front end and the
//! command-line binary are ordinary callers of the board.
//!
//! ## Modules
//!
//! - [`constants`] - Board size defaults and rendering characters
//! - [`direction`] - The eight probing directions
//! - [`disk`] - Cell values and the disk glyph mapping
//! - [`board`] - The board and all game rules
//! - [`selfplay`] - Random games played through the public turn flow
//! - [`text`] - Line-oriented command front end
//!
//! ## Example
//!
//! ```
//! use reversi_rust::board::{Board, Position};
//! use reversi_rust::disk::Disk;
//!
//! let mut board = Board::new(8, 8);
//!
//! // Mark the moves available to dark
//! assert_eq!(board.prepare_next_turn(), Disk::DARK);
//! assert_eq!(board.hints().len(), 4);
//!
//! // Play one and hand the turn over
//! let flipped = board.play(Position::new(2, 3)).unwrap();
//! assert_eq!(flipped, vec![Position::new(3, 3)]);
//! assert_eq!(board.prepare_next_turn(), Disk::LIGHT);
//! assert_eq!(board.score().dark, 4);
//! ```

pub mod board;
pub mod constants;
pub mod direction;
pub mod disk;
pub mod selfplay;
pub mod text;
