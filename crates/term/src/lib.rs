//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a plain framebuffer which is then
//! flushed to the terminal with crossterm. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: pure layout of board, tiles and side panel
//! - [`renderer`]: full and diff redraws to a terminal writer

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, AnchorY, GameView, Viewport, MAX_TILE_SIZE, PALETTE};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
