//! Scoring module
//!
//! The displayed score is the raw sum of all tiles on the board. Because
//! slides conserve that sum, the score only grows when a tile is spawned.
//! It is not the cumulative merge total some 2048 variants show.

use crate::board::Board;

/// Sum of all tile values currently on the board.
pub fn score(board: &Board) -> u64 {
    board.tiles().sum()
}
