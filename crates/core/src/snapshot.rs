//! Plain-data view of a game handed to the renderer each frame.

use crate::game_state::TurnOutcome;
use crate::types::{Grid, Tile, BOARD_SIZE};

/// Everything the presentation layer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub score: u64,
    pub max_tile: Tile,
    pub moves: u32,
    pub game_over: bool,
    pub started: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub last_outcome: Option<TurnOutcome>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.started && !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            max_tile: 0,
            moves: 0,
            game_over: false,
            started: false,
            episode_id: 0,
            seed: 0,
            last_outcome: None,
        }
    }
}
