//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It knows
//! nothing about the board; the turn protocol decides what a slide does.

pub mod map;

pub use tui_2048_types as types;

pub use map::{direction_for, handle_key_event, should_quit};
