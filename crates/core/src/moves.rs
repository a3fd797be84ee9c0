//! Directional moves and terminal-state detection.
//!
//! Only [`merge_row_left`] knows how tiles combine. The other three
//! directions are expressed through geometric transforms of the board:
//! reversing rows for `Right`, and rotating a quarter turn for `Up`/`Down`.
//! All functions here are pure and never consult randomness.

use arrayvec::ArrayVec;

use crate::board::{reverse_row, Board};
use crate::merge::merge_row_left;
use crate::types::Direction;

/// Transpose, then reverse every row.
pub fn rotate_clockwise(board: &Board) -> Board {
    board.transpose().map_rows(reverse_row)
}

/// Transpose, then reverse the order of the rows (not their contents).
pub fn rotate_counter_clockwise(board: &Board) -> Board {
    board.transpose().reverse_rows()
}

pub fn push_left(board: &Board) -> Board {
    board.map_rows(merge_row_left)
}

pub fn push_right(board: &Board) -> Board {
    board.map_rows(|row| reverse_row(merge_row_left(reverse_row(row))))
}

/// Slide toward the last row.
pub fn push_up(board: &Board) -> Board {
    rotate_counter_clockwise(&push_left(&rotate_clockwise(board)))
}

/// Slide toward row 0.
pub fn push_down(board: &Board) -> Board {
    rotate_clockwise(&push_left(&rotate_counter_clockwise(board)))
}

/// Slide every tile of `board` in `direction`.
///
/// The tile sum is conserved: a merge replaces two tiles `v` with one `2v`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::{push, Board};
/// use tui_2048_core::types::Direction;
///
/// let board = Board::from_rows([
///     [2, 2, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ]);
/// let moved = push(Direction::Right, &board);
/// assert_eq!(moved.rows()[0], [0, 0, 0, 4]);
/// ```
pub fn push(direction: Direction, board: &Board) -> Board {
    match direction {
        Direction::Left => push_left(board),
        Direction::Right => push_right(board),
        Direction::Up => push_up(board),
        Direction::Down => push_down(board),
    }
}

/// Directions whose slide would change `board`, in [`Direction::ALL`] order.
pub fn legal_directions(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&d| push(d, board) != *board)
        .collect()
}

/// True when no slide in any direction changes `board`.
pub fn is_terminal(board: &Board) -> bool {
    Direction::ALL.iter().all(|&d| push(d, board) == *board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Board {
        Board::from_rows([
            [1, 2, 3, 4],
            [5, 6, 7, 8],
            [9, 10, 11, 12],
            [13, 14, 15, 16],
        ])
    }

    #[test]
    fn test_rotate_clockwise_layout() {
        // Row i of the result is column i read from the last row back to row 0.
        let r = rotate_clockwise(&sample());
        assert_eq!(r.rows()[0], [13, 9, 5, 1]);
        assert_eq!(r.rows()[3], [16, 12, 8, 4]);
    }

    #[test]
    fn test_rotate_counter_clockwise_layout() {
        let r = rotate_counter_clockwise(&sample());
        assert_eq!(r.rows()[0], [4, 8, 12, 16]);
        assert_eq!(r.rows()[3], [1, 5, 9, 13]);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let b = sample();
        assert_eq!(rotate_counter_clockwise(&rotate_clockwise(&b)), b);
        assert_eq!(rotate_clockwise(&rotate_counter_clockwise(&b)), b);
    }

    #[test]
    fn test_push_left_and_right() {
        let b = Board::from_rows([[2, 2, 0, 4], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(push_left(&b).rows()[0], [4, 4, 0, 0]);
        assert_eq!(push_right(&b).rows()[0], [0, 0, 4, 4]);
    }

    #[test]
    fn test_push_right_merges_from_the_right_end() {
        let b = Board::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(push_right(&b).rows()[0], [0, 0, 2, 4]);
    }

    #[test]
    fn test_push_up_moves_toward_last_row() {
        let b = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0, 0, 0, 8]]);
        let up = push_up(&b);
        assert_eq!(up.rows()[3], [4, 0, 0, 8]);
        assert_eq!(up.tile_count(), 2);
    }

    #[test]
    fn test_push_down_moves_toward_row_zero() {
        let b = Board::from_rows([[0; 4], [0, 4, 0, 0], [0; 4], [0, 4, 0, 2]]);
        let down = push_down(&b);
        assert_eq!(down.rows()[0], [0, 8, 0, 2]);
        assert_eq!(down.tile_count(), 2);
    }

    #[test]
    fn test_push_dispatch_matches_named_functions() {
        let b = Board::from_rows([[2, 0, 2, 4], [0, 4, 4, 0], [8, 0, 0, 8], [2, 2, 2, 2]]);
        assert_eq!(push(Direction::Left, &b), push_left(&b));
        assert_eq!(push(Direction::Right, &b), push_right(&b));
        assert_eq!(push(Direction::Up, &b), push_up(&b));
        assert_eq!(push(Direction::Down, &b), push_down(&b));
    }

    #[test]
    fn test_empty_board_is_terminal() {
        // Nothing can move on an empty board either.
        assert!(is_terminal(&Board::new()));
        assert!(legal_directions(&Board::new()).is_empty());
    }

    #[test]
    fn test_checkerboard_is_terminal() {
        let b = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_terminal(&b));
    }

    #[test]
    fn test_full_board_with_vertical_pair_is_not_terminal() {
        let b = Board::from_rows([[2, 4, 2, 4], [2, 8, 4, 2], [8, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(b.is_full());
        assert!(!is_terminal(&b));
        let legal = legal_directions(&b);
        assert_eq!(legal.as_slice(), &[Direction::Up, Direction::Down]);
    }
}
