//! Row merging - slide one row toward index 0 and combine equal neighbours.
//!
//! Every directional move is reduced to this single routine by the
//! transforms in [`crate::moves`].

use crate::types::{Row, BOARD_SIZE};

/// Slide all tiles of `input` toward index 0, merging equal pairs.
///
/// Runs in two passes:
/// 1. Merge: scan left to right keeping a pending merge target. A nonzero
///    value equal to the target doubles it and clears the target, so a tile
///    produced by a merge never merges again in the same slide.
/// 2. Compact: move the remaining values to the front, preserving order.
///
/// # Examples
///
/// ```
/// use tui_2048_core::merge_row_left;
///
/// assert_eq!(merge_row_left([2, 0, 2, 2]), [4, 2, 0, 0]);
/// assert_eq!(merge_row_left([2, 2, 2, 2]), [4, 4, 0, 0]);
/// ```
pub fn merge_row_left(input: Row) -> Row {
    let mut row = input;

    let mut target: Option<usize> = None;
    for i in 0..BOARD_SIZE {
        let v = row[i];
        if v == 0 {
            continue;
        }
        match target {
            Some(t) if row[t] == v => {
                row[t] *= 2;
                row[i] = 0;
                target = None;
            }
            _ => target = Some(i),
        }
    }

    let mut write = 0;
    for read in 0..BOARD_SIZE {
        let v = row[read];
        if v == 0 {
            continue;
        }
        if write != read {
            row[write] = v;
            row[read] = 0;
        }
        write += 1;
    }

    row
}
