//! Constants for board geometry and front-end limits.
//!
//! Board dimensions are chosen at runtime (see [`crate::board::Board::new`]),
//! so this module only holds the defaults and the bounds applied to them.

// =============================================================================
// Board Geometry
// =============================================================================

/// Side length used when no size is given. Standard Othello is 8x8.
pub const DEFAULT_SIZE: usize = 8;

/// Smallest accepted side length. Smaller requests are raised to this.
pub const MIN_SIZE: usize = 4;

/// Largest side length the text front end accepts for `boardsize`.
pub const MAX_TEXT_SIZE: usize = 64;

// =============================================================================
// Board Rendering
// =============================================================================

/// ASCII character for a light disk in the board's text rendering.
pub const CHAR_LIGHT: char = 'O';

/// ASCII character for a dark disk in the board's text rendering.
pub const CHAR_DARK: char = 'X';

/// ASCII character for a hinted cell.
pub const CHAR_HINT: char = '*';

/// ASCII character for an empty cell.
pub const CHAR_EMPTY: char = '.';

// =============================================================================
// Self-play
// =============================================================================

/// Default number of games for the `selfplay` subcommand.
pub const DEFAULT_GAMES: usize = 10;
