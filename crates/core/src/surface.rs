//! Pixel surfaces and sprite sheets.
//!
//! The simulation only ever issues two kinds of raster operations: region
//! copies ([`PixelBuffer::blit`]) and clears ([`PixelBuffer::clear_rect`]).
//! Alpha is binary: a source pixel with `a == 0` leaves the destination alone,
//! anything else overwrites it. Cleared pixels are fully transparent.

use crate::error::CoreError;
use crate::types::{
    IMG_OFFSET_MONEY, IMG_OFFSET_PLAYER, IMG_OFFSET_TILE, MONEY_SIZE, PLAYER_HEIGHT,
    PLAYER_WIDTH, SCREEN_FRAMES, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_ATLAS_HEIGHT, TILE_SIZE,
};

/// 32-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// Linear blend, `t_256` in `0..=256`.
    pub const fn lerp(a: Rgba, b: Rgba, t_256: u16) -> Rgba {
        let t = t_256 as i32;
        Rgba::opaque(
            (a.r as i32 + (b.r as i32 - a.r as i32) * t / 256) as u8,
            (a.g as i32 + (b.g as i32 - a.g as i32) * t / 256) as u8,
            (a.b as i32 + (b.b as i32 - a.b as i32) * t / 256) as u8,
        )
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Fixed-size RGBA raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    px: Vec<Rgba>,
}

impl PixelBuffer {
    /// New fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            px: vec![Rgba::TRANSPARENT; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing pixels (row-major). Returns `None` on a length mismatch.
    pub fn from_pixels(width: u32, height: u32, px: Vec<Rgba>) -> Option<Self> {
        if px.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self { width, height, px })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.px
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Pixel at `(x, y)`, transparent outside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Rgba {
        self.idx(x, y).map_or(Rgba::TRANSPARENT, |i| self.px[i])
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgba) {
        if let Some(i) = self.idx(x, y) {
            self.px[i] = c;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, c: Rgba) {
        for dy in 0..rect.h as i32 {
            for dx in 0..rect.w as i32 {
                self.set(rect.x + dx, rect.y + dy, c);
            }
        }
    }

    pub fn clear(&mut self) {
        self.px.fill(Rgba::TRANSPARENT);
    }

    pub fn clear_rect(&mut self, rect: Rect) {
        self.fill_rect(rect, Rgba::TRANSPARENT);
    }

    /// Copy `src_rect` of `src` to `(dst_x, dst_y)`, skipping transparent pixels.
    ///
    /// Clipped against both buffers. `src` must be a different buffer; shifting
    /// a buffer onto itself goes through a scratch buffer.
    pub fn blit(&mut self, src: &PixelBuffer, src_rect: Rect, dst_x: i32, dst_y: i32) {
        for dy in 0..src_rect.h as i32 {
            for dx in 0..src_rect.w as i32 {
                let c = src.get(src_rect.x + dx, src_rect.y + dy);
                if !c.is_transparent() {
                    self.set(dst_x + dx, dst_y + dy, c);
                }
            }
        }
    }
}

/// Sprites in the tile atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Ground,
    Player,
    Money,
}

impl Sprite {
    pub const fn rect(self) -> Rect {
        match self {
            Sprite::Ground => Rect::new(0, IMG_OFFSET_TILE as i32, TILE_SIZE, TILE_SIZE),
            Sprite::Player => Rect::new(0, IMG_OFFSET_PLAYER as i32, PLAYER_WIDTH, PLAYER_HEIGHT),
            Sprite::Money => Rect::new(0, IMG_OFFSET_MONEY as i32, MONEY_SIZE, MONEY_SIZE),
        }
    }
}

/// Frames in the screen atlas, stacked vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenFrame {
    Play = 0,
    GameOver = 1,
}

impl ScreenFrame {
    pub const fn rect(self) -> Rect {
        Rect::new(
            0,
            (self as u32 * SCREEN_HEIGHT) as i32,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        )
    }
}

/// The two sprite sheets the game draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSheets {
    tiles: PixelBuffer,
    screens: PixelBuffer,
}

impl SpriteSheets {
    /// Validate sheet sizes against the fixed atlas layout.
    pub fn new(tiles: PixelBuffer, screens: PixelBuffer) -> Result<Self, CoreError> {
        check_size("tile", &tiles, TILE_SIZE.max(PLAYER_WIDTH), TILE_ATLAS_HEIGHT)?;
        check_size(
            "screen",
            &screens,
            SCREEN_WIDTH,
            SCREEN_HEIGHT * SCREEN_FRAMES,
        )?;
        Ok(Self { tiles, screens })
    }

    pub fn tiles(&self) -> &PixelBuffer {
        &self.tiles
    }

    pub fn screens(&self) -> &PixelBuffer {
        &self.screens
    }
}

fn check_size(
    sheet: &'static str,
    buf: &PixelBuffer,
    min_width: u32,
    min_height: u32,
) -> Result<(), CoreError> {
    if buf.width() < min_width || buf.height() < min_height {
        return Err(CoreError::SheetTooSmall {
            sheet,
            width: buf.width(),
            height: buf.height(),
            min_width,
            min_height,
        });
    }
    Ok(())
}
