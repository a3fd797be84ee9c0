//! Game state module - the turn protocol
//!
//! This module ties together the board, the moves, spawning and scoring.
//! One call to [`GameState::slide`] is one turn:
//!
//! 1. Compute the candidate board for the direction.
//! 2. If nothing moved, reject the turn. The board is untouched and no
//!    randomness is consumed.
//! 3. Otherwise accept the candidate and, unless it is full, spawn a tile.
//! 4. Evaluate the terminal condition on the resulting board.
//!
//! A terminal board does not block input. Every later slide is simply
//! rejected in step 2.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::moves::{is_terminal, push};
use crate::scoring::score;
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_at;
use crate::types::{Direction, GameAction};

/// Result of feeding one input to the turn protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// No direction was supplied this frame
    Idle,
    /// The slide would not change the board
    Rejected(Direction),
    /// The slide was applied
    Moved {
        direction: Direction,
        /// Cell that received the new tile (`None` if the slide left no gap)
        spawned: Option<(usize, usize)>,
        /// The resulting board admits no further moves
        terminal: bool,
    },
}

impl TurnOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, TurnOutcome::Moved { .. })
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    rng: SmallRng,
    seed: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted slides in the current episode.
    moves: u32,
    last_outcome: Option<TurnOutcome>,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The board stays empty until [`GameState::start`] spawns the first tile.
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            rng: SmallRng::seed_from_u64(seed),
            seed,
            episode_id: 0,
            moves: 0,
            last_outcome: None,
            game_over: false,
            started: false,
        }
    }

    /// Start the game and spawn the first tile
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        if let Some((board, _)) = spawn_at(&self.board, &mut self.rng) {
            self.board = board;
        }
        self.game_over = is_terminal(&self.board);
        info!("episode {} started (seed {})", self.episode_id, self.seed);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_outcome(&self) -> Option<TurnOutcome> {
        self.last_outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        score(&self.board)
    }

    /// Replace the board with a given position and mark the game started.
    ///
    /// Move counters are kept; the random stream is not touched.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.started = true;
        self.game_over = is_terminal(&board);
        debug!("board set to position with {} tiles", board.tile_count());
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.score = self.score();
        out.max_tile = self.board.max_tile();
        out.moves = self.moves;
        out.game_over = self.game_over;
        out.started = self.started;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.last_outcome = self.last_outcome;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Run one turn with an optional direction.
    ///
    /// `None` means no input this frame and has no side effects.
    pub fn step(&mut self, input: Option<Direction>) -> TurnOutcome {
        match input {
            Some(direction) => self.slide(direction),
            None => TurnOutcome::Idle,
        }
    }

    /// Run one turn in `direction`.
    pub fn slide(&mut self, direction: Direction) -> TurnOutcome {
        let candidate = push(direction, &self.board);
        if candidate == self.board {
            debug!("cannot move {}: board unchanged", direction.as_str());
            let outcome = TurnOutcome::Rejected(direction);
            self.last_outcome = Some(outcome);
            return outcome;
        }

        self.board = candidate;
        let mut spawned = None;
        if !self.board.is_full() {
            if let Some((board, at)) = spawn_at(&self.board, &mut self.rng) {
                self.board = board;
                spawned = Some(at);
            }
        }
        self.moves = self.moves.wrapping_add(1);

        let terminal = is_terminal(&self.board);
        if terminal && !self.game_over {
            info!(
                "game over after {} moves: score {}, best tile {}",
                self.moves,
                self.score(),
                self.board.max_tile()
            );
        }
        self.game_over = terminal;

        let outcome = TurnOutcome::Moved {
            direction,
            spawned,
            terminal,
        };
        self.last_outcome = Some(outcome);
        outcome
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed the game.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Slide(direction) => self.slide(direction).accepted(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start a new episode on an empty board.
    ///
    /// The random stream continues from where the previous episode left off,
    /// so consecutive episodes differ while the whole session still replays
    /// from the seed.
    fn restart(&mut self) {
        info!(
            "restarting episode {} (score {}, {} moves)",
            self.episode_id,
            self.score(),
            self.moves
        );
        self.board = Board::new();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.moves = 0;
        self.last_outcome = None;
        self.game_over = false;
        self.started = false;
        self.start();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_SEED)
    }
}
