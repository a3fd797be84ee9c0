//! Board and directional move tests against the public facade.

use tui_2048::core::{
    is_terminal, legal_directions, merge_row_left, push, push_down, push_left, push_right,
    push_up, rotate_clockwise, rotate_counter_clockwise, score, Board,
};
use tui_2048::types::{Direction, BOARD_SIZE};

fn column(board: &Board, col: usize) -> [u64; BOARD_SIZE] {
    let rows = board.rows();
    [rows[0][col], rows[1][col], rows[2][col], rows[3][col]]
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert_eq!(board.empty_count(), 16);
    assert_eq!(board.tile_count(), 0);
    assert!(!board.is_full());
    assert!(board.tiles().all(|t| t == 0));
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(0, 0), Some(0));
    assert_eq!(board.get(BOARD_SIZE, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE), None);
    assert_eq!(board.with_tile(4, 4, 2), None);
}

#[test]
fn test_required_row_cases() {
    assert_eq!(merge_row_left([2, 2, 0, 0]), [4, 0, 0, 0]);
    assert_eq!(merge_row_left([2, 0, 2, 2]), [4, 2, 0, 0]);
    assert_eq!(merge_row_left([0, 0, 0, 2]), [2, 0, 0, 0]);
    assert_eq!(merge_row_left([2, 2, 2, 2]), [4, 4, 0, 0]);
}

#[test]
fn test_push_left_and_right() {
    let board = Board::from_rows([
        [2, 2, 4, 0],
        [0, 4, 0, 4],
        [8, 0, 0, 0],
        [2, 4, 8, 16],
    ]);

    let left = push_left(&board);
    assert_eq!(
        *left.rows(),
        [[4, 4, 0, 0], [8, 0, 0, 0], [8, 0, 0, 0], [2, 4, 8, 16]]
    );

    let right = push_right(&board);
    assert_eq!(
        *right.rows(),
        [[0, 0, 4, 4], [0, 0, 0, 8], [0, 0, 0, 8], [2, 4, 8, 16]]
    );
}

#[test]
fn test_push_up_moves_toward_last_row() {
    // Column 0 bottom to top: 2, 2, 2, 0.
    let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]);
    let up = push_up(&board);
    // The pair nearest the top merges first.
    assert_eq!(column(&up, 0), [0, 0, 2, 4]);
    assert_eq!(up, push(Direction::Up, &board));
}

#[test]
fn test_push_down_moves_toward_row_zero() {
    let board = Board::from_rows([[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]);
    let down = push_down(&board);
    assert_eq!(column(&down, 0), [4, 2, 0, 0]);
    assert_eq!(down, push(Direction::Down, &board));
}

#[test]
fn test_vertical_pushes_mirror_each_other() {
    let board = Board::from_rows([
        [0, 2, 4, 2],
        [2, 2, 0, 4],
        [0, 8, 4, 4],
        [2, 0, 8, 0],
    ]);
    assert_eq!(
        push_up(&board),
        push_down(&board.reverse_rows()).reverse_rows()
    );
}

#[test]
fn test_rotations_are_inverse() {
    let board = Board::from_rows([
        [2, 4, 8, 16],
        [32, 64, 128, 256],
        [512, 1024, 2048, 0],
        [0, 0, 2, 4],
    ]);
    let cw = rotate_clockwise(&board);
    // Row 0 of the clockwise rotation reads column 0 from the last row up.
    assert_eq!(cw.rows()[0], [0, 512, 32, 2]);
    assert_eq!(rotate_counter_clockwise(&cw), board);
}

#[test]
fn test_full_board_without_neighbours_is_terminal() {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(board.is_full());
    assert!(is_terminal(&board));
    assert!(legal_directions(&board).is_empty());
    for d in Direction::ALL {
        assert_eq!(push(d, &board), board, "{d:?} should not move a dead board");
    }
}

#[test]
fn test_full_board_with_a_pair_is_not_terminal() {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 4],
    ]);
    assert!(board.is_full());
    assert!(!is_terminal(&board));
    let legal = legal_directions(&board);
    assert!(legal.contains(&Direction::Left));
    assert!(legal.contains(&Direction::Right));
}

#[test]
fn test_score_is_literal_sum() {
    let board = Board::from_rows([
        [2, 4, 8, 16],
        [0, 0, 0, 0],
        [32, 0, 0, 2],
        [0, 0, 0, 1024],
    ]);
    assert_eq!(score(&board), 1088);
    assert_eq!(score(&Board::new()), 0);
}

#[test]
fn test_display_lists_rows() {
    let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]);
    let text = board.to_string();
    assert_eq!(text.lines().count(), BOARD_SIZE);
    assert!(text.starts_with("2 0 0 0"));
}
