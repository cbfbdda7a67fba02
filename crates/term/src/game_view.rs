//! GameView: maps the composed game screen into a terminal framebuffer.
//!
//! The 320x240 screen is downsampled with nearest-neighbour sampling onto
//! half-block cells: each cell shows two vertically stacked pixels, the upper
//! one as the `▀` foreground and the lower one as the background. The picture
//! keeps the screen's 4:3 aspect ratio and is letterboxed inside the viewport.
//! Score text is drawn over the picture as terminal characters.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write;

use arrayvec::ArrayString;

use crate::core::{GameSnapshot, PixelBuffer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GAME_OVER_SCORE_Y, SCORE_PADDING, SCREEN_HEIGHT, SCREEN_WIDTH};

const UPPER_HALF: char = '\u{2580}';

/// Hint shown under the final score.
pub const GAME_OVER_HINT: &str = "r: restart  q: quit";

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

/// Where the picture lands inside the viewport, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Layout {
    /// Viewport column showing screen x `px`.
    pub fn col_of(&self, px: u32) -> u16 {
        let col = px.min(SCREEN_WIDTH - 1) * self.cols as u32 / SCREEN_WIDTH;
        self.x + col as u16
    }

    /// Viewport row showing screen y `py`.
    pub fn row_of(&self, py: u32) -> u16 {
        let pixel_rows = self.rows as u32 * 2;
        let row = py.min(SCREEN_HEIGHT - 1) * pixel_rows / SCREEN_HEIGHT / 2;
        self.y + row as u16
    }

    fn sample_x(&self, col: u16) -> i32 {
        (col as u32 * SCREEN_WIDTH / self.cols as u32) as i32
    }

    fn sample_y(&self, pixel_row: u32) -> i32 {
        (pixel_row * SCREEN_HEIGHT / (self.rows as u32 * 2)) as i32
    }
}

/// Renders a game screen plus HUD text into a framebuffer.
pub struct GameView {
    letterbox: Rgb,
    text: Rgb,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            letterbox: Rgb::new(0, 0, 0),
            text: Rgb::new(255, 255, 255),
        }
    }
}

impl GameView {
    /// Fit the screen into `viewport`; `None` when nothing fits.
    pub fn layout(&self, viewport: Viewport) -> Option<Layout> {
        let avail_w = viewport.width as u32;
        let avail_px_h = viewport.height as u32 * 2;

        let cols = avail_w.min(avail_px_h * SCREEN_WIDTH / SCREEN_HEIGHT);
        let rows = cols * SCREEN_HEIGHT / SCREEN_WIDTH / 2;
        if cols == 0 || rows == 0 {
            return None;
        }

        let (cols, rows) = (cols as u16, rows as u16);
        let x = (viewport.width - cols) / 2;
        let y = (viewport.height - rows) / 2;
        Some(Layout { x, y, cols, rows })
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has its final size. Callers can reuse a
    /// framebuffer across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        screen: &PixelBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(self.letterbox, self.letterbox).into_cell(' '));

        let Some(layout) = self.layout(viewport) else {
            return;
        };

        for row in 0..layout.rows {
            let upper_y = layout.sample_y(row as u32 * 2);
            let lower_y = layout.sample_y(row as u32 * 2 + 1);
            for col in 0..layout.cols {
                let sx = layout.sample_x(col);
                let upper = Rgb::from(screen.get(sx, upper_y));
                let lower = Rgb::from(screen.get(sx, lower_y));
                let ch = if upper == lower { ' ' } else { UPPER_HALF };
                fb.put_char(
                    layout.x + col,
                    layout.y + row,
                    ch,
                    CellStyle::new(upper, lower),
                );
            }
        }

        if snap.terminated {
            self.draw_final_score(fb, &layout, snap.display_score);
        } else {
            let mut text = ArrayString::<32>::new();
            let _ = write!(text, "{}", snap.display_score);
            let row = layout.row_of(SCREEN_HEIGHT - SCORE_PADDING - 1);
            fb.overlay_str(layout.col_of(SCORE_PADDING), row, &text, self.text, true);
        }
    }

    fn draw_final_score(&self, fb: &mut FrameBuffer, layout: &Layout, score: u64) {
        let mut text = ArrayString::<32>::new();
        let _ = write!(text, "score: {score}");
        let row = layout.row_of(GAME_OVER_SCORE_Y - 1);
        fb.overlay_str(centered(layout, &text), row, &text, self.text, true);

        let hint_row = if row + 1 < layout.y + layout.rows {
            row + 1
        } else {
            row.saturating_sub(1)
        };
        if hint_row != row {
            let x = centered(layout, GAME_OVER_HINT);
            fb.overlay_str(x, hint_row, GAME_OVER_HINT, self.text, false);
        }
    }
}

fn centered(layout: &Layout, text: &str) -> u16 {
    let len = text.chars().count() as u16;
    layout.x + layout.cols.saturating_sub(len) / 2
}
