//! Tile spawning - places a new tile after an accepted slide.

use rand::Rng;

use crate::board::Board;
use crate::types::SPAWN_VALUE;

/// Place a [`SPAWN_VALUE`] tile in an empty cell chosen uniformly at random.
///
/// The caller must check [`Board::is_full`] first. A full board is returned
/// unchanged and no randomness is consumed.
///
/// Exactly one `random_range` draw is made per spawn, so games replay
/// identically from the same seed.
pub fn spawn<R: Rng>(board: &Board, rng: &mut R) -> Board {
    spawn_at(board, rng).map(|(b, _)| b).unwrap_or(*board)
}

/// Like [`spawn`], but also reports the (row, col) that received the tile.
/// Returns `None` on a full board.
pub fn spawn_at<R: Rng>(board: &Board, rng: &mut R) -> Option<(Board, (usize, usize))> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let (row, col) = empty[rng.random_range(0..empty.len())];
    let next = board.with_tile(row, col, SPAWN_VALUE)?;
    Some((next, (row, col)))
}
