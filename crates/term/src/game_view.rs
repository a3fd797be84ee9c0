//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, TurnOutcome};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{palette_index, Tile, BOARD_SIZE, PALETTE_LEN};

/// Tile colors indexed by `log2(value)`; index 0 is the empty cell.
pub const PALETTE: [Rgb; PALETTE_LEN] = [
    Rgb::new(225, 225, 225), // empty
    Rgb::new(255, 204, 21),  // 2
    Rgb::new(251, 146, 60),  // 4
    Rgb::new(248, 113, 113), // 8
    Rgb::new(96, 165, 250),  // 16
    Rgb::new(74, 222, 128),  // 32
    Rgb::new(163, 230, 53),  // 64
    Rgb::new(52, 211, 153),  // 128
    Rgb::new(45, 212, 191),  // 256
    Rgb::new(129, 140, 248), // 512
    Rgb::new(167, 139, 250), // 1024
    Rgb::new(192, 132, 252), // 2048
    Rgb::new(232, 121, 249), // 4096
    Rgb::new(251, 113, 133), // 8192
];

const BACKGROUND: Rgb = Rgb::new(130, 130, 130);

/// Largest tile width or height accepted by [`GameView::new`].
pub const MAX_TILE_SIZE: u16 = 64;

/// Palette color for a tile. Tiles past the palette reuse the last entry.
pub fn tile_color(tile: Tile) -> Rgb {
    let idx = palette_index(tile).min(PALETTE_LEN - 1);
    PALETTE[idx]
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Lays out the board and side panel for one frame.
///
/// Each tile is a `tile_w` x `tile_h` block with a one-cell gutter around it.
/// Board row 0 is drawn at the bottom.
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Labels up to seven digits fit.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    /// Tile sizes are clamped to `1..=MAX_TILE_SIZE`.
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.clamp(1, MAX_TILE_SIZE),
            tile_h: tile_h.clamp(1, MAX_TILE_SIZE),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let inner_w = n * self.tile_w + (n + 1);
        let inner_h = n * self.tile_h + (n + 1);
        (inner_w + 2, inner_h + 2)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::WHITE, Rgb::BLACK).cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + 1) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::WHITE, BACKGROUND),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, &tile) in cells.iter().enumerate() {
                self.draw_tile(fb, (start_x, start_y), row, col, tile);
            }
        }

        // Score line under the board.
        let score_y = start_y.saturating_add(frame_h);
        let mut x = fb.put_str(start_x, score_y, "Score: ", border.bold());
        x = fb.put_str(x, score_y, &snap.score.to_string(), border);
        if let Some(TurnOutcome::Rejected(d)) = snap.last_outcome {
            let note = CellStyle::new(Rgb::new(160, 160, 160), Rgb::BLACK).dim();
            x = fb.put_str(x + 2, score_y, "cannot move ", note);
            fb.put_str(x, score_y, d.as_str(), note);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " GAME OVER ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of the tile at board (row, col).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: usize, col: usize) -> (u16, u16) {
        let screen_row = (BOARD_SIZE - 1 - row) as u16;
        let x = start_x + 2 + col as u16 * (self.tile_w + 1);
        let y = start_y + 2 + screen_row * (self.tile_h + 1);
        (x, y)
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        row: usize,
        col: usize,
        tile: Tile,
    ) {
        let (x, y) = self.tile_origin(origin.0, origin.1, row, col);
        let style = CellStyle::new(Rgb::WHITE, tile_color(tile)).bold();
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        if tile != 0 {
            let label = tile.to_string();
            fb.put_str_centered(x, y + self.tile_h / 2, self.tile_w, &label, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 14 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
        let hint = value.dim();

        let mut y = start_y;
        for (title, v) in [
            ("SCORE", snap.score),
            ("BEST TILE", snap.max_tile),
            ("MOVES", snap.moves as u64),
        ] {
            fb.put_str(panel_x, y, title, label);
            fb.put_str(panel_x, y + 1, &v.to_string(), value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/wasd slide", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let style = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();
    fb.put_str_centered(x, y.saturating_add(h / 2), w, text, style);
}
