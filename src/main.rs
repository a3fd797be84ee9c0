//! Terminal 2048 runner (default binary).
//!
//! Reads `TUI2048_*` configuration, optionally logs to a file, then runs a
//! frame loop: draw the current snapshot, wait up to one frame for a key and
//! feed at most one action to the turn protocol.

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use tui_2048::config::GameConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging::init_logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::FRAME_MS;

fn main() -> Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;
    init_logging(&config)?;
    info!("starting with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to enter terminal mode")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game_state = GameState::new(config.seed);
    game_state.start();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let frame = Duration::from_millis(FRAME_MS);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!(
                        "quit at episode {} with score {}",
                        game_state.episode_id(),
                        game_state.score()
                    );
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game_state.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
