//! The Reversi board: cells, the player to move, and every game rule.
//!
//! The board is a plain owned value. Callers drive a game by alternating
//! [`Board::prepare_next_turn`] (which writes hints for the player to move)
//! and [`Board::play`]. Nothing here performs I/O.

use std::fmt;
use std::iter::FusedIterator;

use crate::constants::{CHAR_DARK, CHAR_EMPTY, CHAR_HINT, CHAR_LIGHT, DEFAULT_SIZE, MIN_SIZE};
use crate::direction::Direction;
use crate::disk::Disk;

/// A cell coordinate, counted from the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Reasons [`Board::play`] refuses a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Neither player can move any more
    GameOver,
    /// Position lies outside the board
    OutOfBounds(Position),
    /// Cell already holds a disk
    Occupied(Position),
    /// Playing here would not flip anything
    NoCapture(Position),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "illegal move: the game is over"),
            MoveError::OutOfBounds(pos) => write!(f, "illegal move: {pos} is off the board"),
            MoveError::Occupied(pos) => write!(f, "illegal move: {pos} is not empty"),
            MoveError::NoCapture(pos) => write!(f, "illegal move: {pos} captures nothing"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Disk counts for both players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub light: usize,
    pub dark: usize,
}

impl Score {
    /// `DARK` or `LIGHT` for the player with more disks, `EMPTY` on a tie.
    pub fn winner(self) -> Disk {
        if self.dark > self.light {
            Disk::DARK
        } else if self.light > self.dark {
            Disk::LIGHT
        } else {
            Disk::EMPTY
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light {} dark {}", self.light, self.dark)
    }
}

/// Row-major iterator over every position of a board.
///
/// Holds only the board's dimensions, so cells may be written while it runs.
#[derive(Clone, Debug)]
pub struct Positions {
    width: usize,
    next: usize,
    end: usize,
}

impl Iterator for Positions {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.end {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Position::new(i / self.width, i % self.width))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Positions {}
impl FusedIterator for Positions {}

/// Positions strictly beyond a start cell along one direction, stopping at
/// the edge of the board.
#[derive(Clone, Debug)]
pub struct Walk {
    height: usize,
    width: usize,
    current: Option<Position>,
    direction: Direction,
}

impl Iterator for Walk {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let pos = self.current?;
        let row = pos.row.checked_add_signed(self.direction.dr);
        let col = pos.col.checked_add_signed(self.direction.dc);
        self.current = match (row, col) {
            (Some(row), Some(col)) if row < self.height && col < self.width => {
                Some(Position::new(row, col))
            }
            _ => None,
        };
        self.current
    }
}

impl FusedIterator for Walk {}

/// A rectangular Reversi board and the player to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Disk>,
    /// `DARK` or `LIGHT` while the game runs, `EMPTY` once it is over
    current_player: Disk,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_SIZE)
    }
}

impl Board {
    /// Create a board in the starting position. Each side is raised to at
    /// least [`MIN_SIZE`].
    pub fn new(height: usize, width: usize) -> Self {
        let height = height.max(MIN_SIZE);
        let width = width.max(MIN_SIZE);
        let mut board = Self {
            height,
            width,
            cells: vec![Disk::EMPTY; height * width],
            current_player: Disk::EMPTY,
        };
        board.reset();
        board
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The player to move, or `EMPTY` when the game is over.
    pub fn current_player(&self) -> Disk {
        self.current_player
    }

    /// Hand the turn to `player` without playing. Used to set up positions.
    pub fn set_current_player(&mut self, player: Disk) {
        self.current_player = player;
    }

    pub fn is_game_over(&self) -> bool {
        self.current_player.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn idx(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside the {}x{} board",
            self.height,
            self.width
        );
        pos.row * self.width + pos.col
    }

    /// Empty the board, place the four centre disks and give dark the move.
    ///
    /// The centre quad spans rows `floor((h-1)/2)..=ceil((h-1)/2)` and the
    /// same for columns. On an odd side both bounds coincide and later
    /// placements overwrite earlier ones, leaving 2 disks (one odd side) or
    /// a single light disk (both sides odd).
    pub fn reset(&mut self) {
        self.cells.fill(Disk::EMPTY);
        let (r0, r1) = ((self.height - 1) / 2, self.height / 2);
        let (c0, c1) = ((self.width - 1) / 2, self.width / 2);
        self.set_value_at(Position::new(r0, c0), Disk::LIGHT);
        self.set_value_at(Position::new(r0, c1), Disk::DARK);
        self.set_value_at(Position::new(r1, c0), Disk::DARK);
        self.set_value_at(Position::new(r1, c1), Disk::LIGHT);
        self.current_player = Disk::DARK;
    }

    /// Every position in row-major order. Each call starts a fresh pass.
    pub fn positions(&self) -> Positions {
        Positions {
            width: self.width,
            next: 0,
            end: self.height * self.width,
        }
    }

    /// Value of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is outside the board.
    pub fn value_at(&self, pos: Position) -> Disk {
        self.cells[self.idx(pos)]
    }

    /// Overwrite the cell at `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is outside the board.
    pub fn set_value_at(&mut self, pos: Position, value: Disk) {
        let i = self.idx(pos);
        self.cells[i] = value;
    }

    /// Checked read: `None` when `pos` is outside the board.
    pub fn get(&self, pos: Position) -> Option<Disk> {
        self.contains(pos).then(|| self.cells[pos.row * self.width + pos.col])
    }

    /// Drop the hint fraction from every cell.
    pub fn clear_hints(&mut self) {
        for cell in &mut self.cells {
            *cell = cell.without_hint();
        }
    }

    /// Positions holding a hint, in row-major order.
    pub fn hints(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.value_at(pos).is_hint())
            .collect()
    }

    /// Walk from `pos` (exclusive) in `direction` until the board edge.
    pub fn walk_from_position_in_direction(&self, pos: Position, direction: Direction) -> Walk {
        Walk {
            height: self.height,
            width: self.width,
            current: Some(pos),
            direction,
        }
    }

    /// Opponent disks the player to move would flip along one direction by
    /// playing at `pos`.
    ///
    /// The run must start right next to `pos` and be closed by one of the
    /// mover's own disks; otherwise nothing is flipped.
    pub fn disks_to_flip_from_position_in_direction(
        &self,
        pos: Position,
        direction: Direction,
    ) -> Vec<Position> {
        let player = self.current_player;
        if !player.is_disk() {
            return Vec::new();
        }
        let opponent = player.opponent();
        let mut run = Vec::new();
        for step in self.walk_from_position_in_direction(pos, direction) {
            let value = self.value_at(step);
            if value == opponent {
                run.push(step);
            } else if value == player {
                return run;
            } else {
                break;
            }
        }
        Vec::new()
    }

    /// Every disk flipped by playing at `pos`, over all eight directions.
    pub fn disks_to_flip(&self, pos: Position) -> Vec<Position> {
        Direction::all()
            .flat_map(|d| self.disks_to_flip_from_position_in_direction(pos, d))
            .collect()
    }

    /// True if the cell is empty and playing there flips something.
    pub fn is_playable(&self, pos: Position) -> bool {
        self.value_at(pos) == Disk::EMPTY
            && Direction::all()
                .any(|d| !self.disks_to_flip_from_position_in_direction(pos, d).is_empty())
    }

    /// Legal moves for the player to move. Hinted cells count as empty, so
    /// this does not depend on whether hints are currently shown.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.positions()
            .filter(|&pos| {
                self.value_at(pos).without_hint().is_empty() && !self.disks_to_flip(pos).is_empty()
            })
            .collect()
    }

    /// Mark every playable cell with a hint for the player to move and
    /// return how many were marked.
    ///
    /// Expects a board without hints; call [`Board::clear_hints`] first when
    /// recomputing.
    pub fn add_and_count_hints(&mut self) -> usize {
        let hint = self.current_player.as_hint();
        let mut count = 0;
        for pos in self.positions() {
            if self.is_playable(pos) {
                self.set_value_at(pos, hint);
                count += 1;
            }
        }
        count
    }

    /// Play the player to move at `pos`, flip the captured disks and pass
    /// the turn to the opponent. Returns the flipped positions.
    ///
    /// A cell holding a hint counts as empty. Hints elsewhere are left in
    /// place; [`Board::prepare_next_turn`] recomputes them.
    pub fn play(&mut self, pos: Position) -> Result<Vec<Position>, MoveError> {
        let player = self.current_player;
        if !player.is_disk() {
            return Err(MoveError::GameOver);
        }
        let Some(value) = self.get(pos) else {
            return Err(MoveError::OutOfBounds(pos));
        };
        if !value.without_hint().is_empty() {
            return Err(MoveError::Occupied(pos));
        }

        let flips = self.disks_to_flip(pos);
        if flips.is_empty() {
            return Err(MoveError::NoCapture(pos));
        }

        self.set_value_at(pos, player);
        for &flip in &flips {
            self.set_value_at(flip, player);
        }
        self.current_player = player.opponent();
        Ok(flips)
    }

    /// Count the light and dark disks. Hints and empty cells are ignored.
    pub fn score(&self) -> Score {
        self.cells.iter().fold(Score::default(), |mut score, &cell| {
            if cell == Disk::LIGHT {
                score.light += 1;
            } else if cell == Disk::DARK {
                score.dark += 1;
            }
            score
        })
    }

    /// Player with more disks, or `EMPTY` on a tie.
    pub fn winner(&self) -> Disk {
        self.score().winner()
    }

    /// Advance the turn after a play.
    ///
    /// Recomputes hints for the player to move. If that player has no move
    /// the turn passes to the opponent; if the opponent has none either the
    /// game is over and the player to move becomes `EMPTY`. Returns the
    /// player to move.
    pub fn prepare_next_turn(&mut self) -> Disk {
        self.clear_hints();
        if self.is_game_over() {
            return Disk::EMPTY;
        }
        if self.add_and_count_hints() > 0 {
            return self.current_player;
        }

        // pass
        self.current_player = self.current_player.opponent();
        if self.add_and_count_hints() > 0 {
            return self.current_player;
        }

        self.current_player = Disk::EMPTY;
        Disk::EMPTY
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.value_at(Position::new(row, col));
                let ch = if cell.is_hint() {
                    CHAR_HINT
                } else {
                    match cell.signum() {
                        1 => CHAR_LIGHT,
                        -1 => CHAR_DARK,
                        _ => CHAR_EMPTY,
                    }
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate.
///
/// Accepts letter-number notation (`"c4"`: column `c`, 1-based row 4) or a
/// 0-based `"row,col"` pair. Returns `None` for anything else.
pub fn parse_coord(s: &str) -> Option<Position> {
    let s = s.trim();
    if let Some((row, col)) = s.split_once(',') {
        let row = row.trim().parse().ok()?;
        let col = col.trim().parse().ok()?;
        return Some(Position::new(row, col));
    }

    let mut chars = s.chars();
    let letter = chars.next()?.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Position::new(row - 1, (letter as u8 - b'a') as usize))
}

/// Format a position in letter-number notation, falling back to `"row,col"`
/// when the column has no letter.
pub fn str_coord(pos: Position) -> String {
    if pos.col < 26 {
        format!("{}{}", (b'a' + pos.col as u8) as char, pos.row + 1)
    } else {
        format!("{},{}", pos.row, pos.col)
    }
}
