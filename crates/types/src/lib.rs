//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so they can be used
//! by the rule engine, the input mapping and the terminal view alike.
//!
//! # Board Layout
//!
//! - **Size**: 4x4 cells (`BOARD_SIZE`)
//! - **Addressing**: `(row, col)`, row-major, both `0..BOARD_SIZE`
//! - **Orientation**: the grid is y-up. Row 0 is the bottom edge when drawn,
//!   so [`Direction::Up`] moves tiles toward row `BOARD_SIZE - 1`.
//!
//! # Tiles
//!
//! A [`Tile`] is `0` (empty) or a power of two. New tiles always have the
//! value [`SPAWN_VALUE`]. The view colors a tile by its base-2 logarithm, see
//! [`palette_index`].
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{palette_index, Direction, BOARD_SIZE};
//!
//! assert_eq!(BOARD_SIZE, 4);
//! assert_eq!(Direction::Up.as_str(), "up");
//!
//! // Palette index is log2 of the tile value
//! assert_eq!(palette_index(2048), 11);
//! ```

/// Board side length in cells
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Value of every newly spawned tile
pub const SPAWN_VALUE: Tile = 2;

/// Number of palette entries the view provides (tiles up to 8192)
pub const PALETTE_LEN: usize = 14;

/// Palette index reserved for empty cells
pub const EMPTY_PALETTE_INDEX: usize = 0;

/// Frame budget in milliseconds (16ms ≈ 60 FPS). At most one slide is
/// consumed per frame.
pub const FRAME_MS: u64 = 16;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 124;

/// A single cell value: 0 for empty, otherwise a power of two.
pub type Tile = u64;

/// One board row (or a column, after a transpose).
pub type Row = [Tile; BOARD_SIZE];

/// Fixed-size nested array backing a board.
pub type Grid = [Row; BOARD_SIZE];

/// Map a tile value to its palette index.
///
/// Value `2^k` maps to `k`, an empty cell maps to [`EMPTY_PALETTE_INDEX`].
/// No clamping happens here: tiles beyond 8192 produce indices past
/// `PALETTE_LEN - 1`, and the view has to guard against that.
///
/// # Examples
///
/// ```
/// use tui_2048_types::{palette_index, EMPTY_PALETTE_INDEX};
///
/// assert_eq!(palette_index(0), EMPTY_PALETTE_INDEX);
/// assert_eq!(palette_index(2), 1);
/// assert_eq!(palette_index(8192), 13);
/// assert_eq!(palette_index(16384), 14);
/// ```
pub fn palette_index(tile: Tile) -> usize {
    if tile == 0 {
        EMPTY_PALETTE_INDEX
    } else {
        tile.trailing_zeros() as usize
    }
}

/// Slide directions
///
/// `Left`/`Right` act on rows, `Up`/`Down` act on columns. With the y-up
/// layout, `Up` pushes tiles toward the last row and `Down` toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order terminal detection checks them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Game actions that can be applied to a running game
///
/// Produced by the key mapping and consumed by the turn protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in the given direction
    Slide(Direction),
    /// Throw the current board away and start a new episode
    Restart,
}
