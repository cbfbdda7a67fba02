//! Scroll buffer - the painted level strip and its column window
//!
//! The strip is one column wider than the screen so the next column is
//! already painted before it scrolls into view. Each frame only bumps the
//! scroll offset; once a full tile has scrolled past, the strip is shifted
//! left by one tile, a fresh column is painted on the right and the leftmost
//! column record is evicted. That recycle is the only place the column window
//! changes shape.

use log::debug;
use serde::Serialize;

use crate::column::{Column, ColumnStrip};
use crate::error::CoreError;
use crate::generator::LevelGenerator;
use crate::surface::{PixelBuffer, Rect, Sprite, SpriteSheets};
use crate::types::{BUFFER_COLUMNS, LEVEL_WIDTH, SCREEN_HEIGHT, TILE_SIZE};

/// Result of one recycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recycle {
    pub evicted: Column,
    pub appended: Column,
}

/// Sliding window of columns plus the raster they are painted on.
#[derive(Debug, Clone)]
pub struct ScrollBuffer {
    strip: ColumnStrip,
    level: PixelBuffer,
    scratch: PixelBuffer,
    offset: u32,
    generator: LevelGenerator,
    recycles: u64,
}

impl ScrollBuffer {
    /// Generate and paint the opening window.
    pub fn new(mut generator: LevelGenerator, sheets: &SpriteSheets) -> Self {
        let columns = generator.initial_columns();
        Self::paint_window(columns, generator, sheets)
    }

    /// Start from a caller-chosen window; `generator` supplies what follows.
    ///
    /// The window must hold exactly `BUFFER_COLUMNS` columns.
    pub fn with_columns(
        columns: Vec<Column>,
        generator: LevelGenerator,
        sheets: &SpriteSheets,
    ) -> Result<Self, CoreError> {
        if columns.len() != BUFFER_COLUMNS {
            return Err(CoreError::WindowLength {
                expected: BUFFER_COLUMNS,
                actual: columns.len(),
            });
        }
        Ok(Self::paint_window(columns, generator, sheets))
    }

    fn paint_window(
        columns: Vec<Column>,
        generator: LevelGenerator,
        sheets: &SpriteSheets,
    ) -> Self {
        let mut level = PixelBuffer::new(LEVEL_WIDTH, SCREEN_HEIGHT);
        for (slot, column) in columns.iter().enumerate() {
            paint_column(&mut level, slot, column, sheets);
        }

        Self {
            strip: ColumnStrip::new(columns),
            scratch: PixelBuffer::new(LEVEL_WIDTH, SCREEN_HEIGHT),
            level,
            offset: 0,
            generator,
            recycles: 0,
        }
    }

    pub fn strip(&self) -> &ColumnStrip {
        &self.strip
    }

    pub fn level(&self) -> &PixelBuffer {
        &self.level
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn recycles(&self) -> u64 {
        self.recycles
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Scroll one pixel.
    pub fn advance(&mut self) {
        self.offset += 1;
    }

    pub fn at_tile_boundary(&self) -> bool {
        self.offset >= TILE_SIZE
    }

    /// Top surface y of the column under screen x `x`.
    pub fn column_top_at(&self, x: i32) -> i32 {
        self.strip
            .column_at(x, self.offset)
            .map_or(SCREEN_HEIGHT as i32, Column::top)
    }

    /// Slot under screen x `x` (clamped to the window).
    pub fn slot_at(&self, x: i32) -> usize {
        self.strip.slot_at(x, self.offset)
    }

    /// Remove a pickup and erase its glyph. Returns whether one was present.
    pub fn clear_pickup(&mut self, slot: usize) -> Result<bool, CoreError> {
        let column = *self.strip.column(slot)?;
        let removed = self.strip.clear_pickup(slot)?;
        if removed {
            self.level.clear_rect(Rect::new(
                slot as i32 * TILE_SIZE as i32,
                column.pickup_top(),
                TILE_SIZE,
                TILE_SIZE,
            ));
        }
        Ok(removed)
    }

    /// Shift in a new column if a whole tile has scrolled past.
    pub fn recycle_if_needed(&mut self, sheets: &SpriteSheets) -> Option<Recycle> {
        if !self.at_tile_boundary() {
            return None;
        }

        let width = self.level.width();
        let height = self.level.height();
        let kept = width - TILE_SIZE;

        // Same-buffer overlapping copies are not allowed, so go via scratch.
        self.scratch.clear();
        self.scratch
            .blit(&self.level, Rect::new(TILE_SIZE as i32, 0, kept, height), 0, 0);
        self.level.clear();
        self.level
            .blit(&self.scratch, Rect::new(0, 0, kept, height), 0, 0);

        let previous = self.strip.last().map_or(1, |c| c.height);
        let appended = self.generator.generate_column(previous, None);
        paint_column(&mut self.level, self.strip.len() - 1, &appended, sheets);

        let evicted = self.strip.recycle(appended)?;
        self.offset = 0;
        self.recycles += 1;

        debug!(
            "recycled column {} -> {} (height {}, money {})",
            evicted.index, appended.index, appended.height, appended.has_pickup
        );
        Some(Recycle { evicted, appended })
    }
}

/// Paint one column into `slot` of the level strip.
fn paint_column(level: &mut PixelBuffer, slot: usize, column: &Column, sheets: &SpriteSheets) {
    let x = slot as i32 * TILE_SIZE as i32;
    for row in 0..column.height as i32 {
        let y = SCREEN_HEIGHT as i32 - TILE_SIZE as i32 * (row + 1);
        level.blit(sheets.tiles(), Sprite::Ground.rect(), x, y);
    }
    if column.has_pickup {
        level.blit(sheets.tiles(), Sprite::Money.rect(), x, column.pickup_top());
    }
}
