//! Random self-play.
//!
//! Plays a whole game with uniformly random legal moves, driving the board
//! only through its public turn flow: `prepare_next_turn`, pick one of the
//! hinted cells, `play`. Every play adds a disk, so a game never lasts more
//! plays than the board has cells.

use crate::board::{Board, MoveError, Position, Score};
use crate::disk::Disk;

/// Outcome of one self-play game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// Moves in order, with the player who made each
    pub moves: Vec<(Disk, Position)>,
    /// Turns skipped because the player to move had no legal play
    pub passes: usize,
    pub score: Score,
    /// `DARK`, `LIGHT`, or `EMPTY` for a draw
    pub winner: Disk,
}

/// Choose a random hinted cell, or `None` if the board shows no hints.
pub fn choose_random_move(board: &Board, rng: &mut fastrand::Rng) -> Option<Position> {
    let hints = board.hints();
    if hints.is_empty() {
        None
    } else {
        Some(hints[rng.usize(..hints.len())])
    }
}

/// Play `board` to the end with random moves.
///
/// The board is left in its final position. Fails only if the board hands
/// out a hint it then refuses to play, which would be an engine bug.
pub fn play_random_game(board: &mut Board, rng: &mut fastrand::Rng) -> Result<GameRecord, MoveError> {
    let max_plays = board.height() * board.width();
    let mut moves = Vec::new();
    let mut passes = 0;

    let mut expected = board.current_player();
    while moves.len() <= max_plays {
        let player = board.prepare_next_turn();
        if player.is_empty() {
            break;
        }
        if player != expected {
            passes += 1;
        }
        let Some(pos) = choose_random_move(board, rng) else {
            break;
        };
        board.play(pos)?;
        moves.push((player, pos));
        expected = board.current_player();
    }

    let score = board.score();
    Ok(GameRecord {
        moves,
        passes,
        score,
        winner: score.winner(),
    })
}

/// Play `games` random games on fresh `height` x `width` boards.
///
/// With `verbose`, each finished game is reported on stderr.
pub fn run_games(
    games: usize,
    height: usize,
    width: usize,
    rng: &mut fastrand::Rng,
    verbose: bool,
) -> Result<Vec<GameRecord>, MoveError> {
    let mut records = Vec::with_capacity(games);
    for i in 0..games {
        let mut board = Board::new(height, width);
        let record = play_random_game(&mut board, rng)?;
        if verbose {
            eprintln!(
                "game {}: {} moves, {} passes, {}, winner {}",
                i + 1,
                record.moves.len(),
                record.passes,
                record.score,
                record.winner.player_name()
            );
        }
        records.push(record);
    }
    Ok(records)
}
