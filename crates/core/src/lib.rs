//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile game. It has **no
//! dependencies** on terminal I/O, which makes it:
//!
//! - **Deterministic**: the only randomness is an explicitly seeded `SmallRng`
//!   owned by [`GameState`]; same seed and inputs give the same game
//! - **Value-based**: a [`Board`] is a `Copy` 4x4 array, every operation
//!   returns a new board
//! - **Allocation-free**: boards, moves and spawns never touch the heap
//!
//! # Module Structure
//!
//! - [`board`]: the grid value type with transpose, row reversal and fullness
//! - [`merge`]: the single-row slide-and-merge routine
//! - [`moves`]: the four directional pushes and terminal detection
//! - [`spawn`]: uniform placement of new tiles
//! - [`scoring`]: the displayed score
//! - [`game_state`]: the turn protocol tying everything together
//! - [`snapshot`]: plain data handed to the presentation layer
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameState, TurnOutcome};
//! use tui_2048_core::types::Direction;
//!
//! let mut game = GameState::new(124);
//! game.start();
//! assert_eq!(game.board().tile_count(), 1);
//!
//! // Either the slide moves the tile (and spawns another) or it is rejected.
//! match game.slide(Direction::Left) {
//!     TurnOutcome::Moved { .. } => assert_eq!(game.board().tile_count(), 2),
//!     TurnOutcome::Rejected(_) => assert_eq!(game.board().tile_count(), 1),
//!     TurnOutcome::Idle => unreachable!(),
//! }
//! assert!(game.score() >= 2);
//! ```

pub mod board;
pub mod game_state;
pub mod merge;
pub mod moves;
pub mod scoring;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{reverse_row, Board};
pub use game_state::{GameState, TurnOutcome};
pub use merge::merge_row_left;
pub use moves::{
    is_terminal, legal_directions, push, push_down, push_left, push_right, push_up,
    rotate_clockwise, rotate_counter_clockwise,
};
pub use scoring::score;
pub use snapshot::GameSnapshot;
pub use spawn::{spawn, spawn_at};
