//! Board module - the 4x4 tile grid
//!
//! The board is an immutable value: it is `Copy`, and every operation returns
//! a new board instead of mutating in place. Storage is a nested fixed-size
//! array (`[[Tile; 4]; 4]`), so boards never touch the heap.
//! Coordinates: (row, col), both ranging 0..4. Row 0 is the bottom edge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Grid, Row, Tile, BOARD_SIZE, CELL_COUNT};

/// The game board - 4 rows x 4 columns of tile values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: Grid,
}

impl Board {
    /// Create a new empty board
    pub const fn new() -> Self {
        Self {
            rows: [[0; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from literal rows
    pub const fn from_rows(rows: Grid) -> Self {
        Self { rows }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    pub fn rows(&self) -> &Grid {
        &self.rows
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Copy of this board with one tile replaced
    /// Returns None if out of bounds
    pub fn with_tile(&self, row: usize, col: usize, value: Tile) -> Option<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        let mut next = *self;
        next.rows[row][col] = value;
        Some(next)
    }

    /// Apply `f` to every row independently
    pub fn map_rows(&self, f: impl Fn(Row) -> Row) -> Self {
        Self {
            rows: self.rows.map(f),
        }
    }

    /// Swap the roles of rows and columns
    pub fn transpose(&self) -> Self {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (i, out) in rows.iter_mut().enumerate() {
            for (j, cell) in out.iter_mut().enumerate() {
                *cell = self.rows[j][i];
            }
        }
        Self { rows }
    }

    /// Reverse the order of the rows, leaving each row's contents alone
    pub fn reverse_rows(&self) -> Self {
        let mut rows = self.rows;
        rows.reverse();
        Self { rows }
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|&v| v != 0)
    }

    /// Coordinates of all empty cells, row-major order
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), CELL_COUNT> {
        let mut cells = ArrayVec::new();
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    pub fn empty_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.rows.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Iterate all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.rows.iter().flatten().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One row per line, values separated by spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The row with its elements in opposite order
pub fn reverse_row(row: Row) -> Row {
    let mut out = row;
    out.reverse();
    out
}
