//! Column model - the buffered window of level columns
//!
//! Columns are stored left to right in generation order. Slot 0 is the column
//! currently at (or partly scrolled past) the left edge of the screen.
//!
//! Lookup policy:
//! - Raw slot lookups (`height_at`, `has_pickup_at`, `clear_pickup`) fail with
//!   [`CoreError::OutOfRange`] outside the window.
//! - World-x lookups ([`ColumnStrip::slot_at`]) clamp to the nearest buffered
//!   column, so a player hanging off either screen edge samples the edge column.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{SCREEN_HEIGHT, TILE_SIZE};

/// One tile-wide stack of ground tiles plus an optional money pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Absolute generation index (0 = first column of the run)
    pub index: u64,
    /// Height in tiles
    pub height: u8,
    pub has_pickup: bool,
}

impl Column {
    pub fn new(index: u64, height: u8, has_pickup: bool) -> Self {
        Self {
            index,
            height,
            has_pickup,
        }
    }

    /// Pixel y of the column's top surface.
    pub fn top(&self) -> i32 {
        column_top(self.height)
    }

    /// Pixel y of the top of the pickup sitting on this column.
    pub fn pickup_top(&self) -> i32 {
        self.top() - TILE_SIZE as i32
    }
}

/// Pixel y of the top surface of a column `height` tiles tall.
#[inline]
pub fn column_top(height: u8) -> i32 {
    SCREEN_HEIGHT as i32 - height as i32 * TILE_SIZE as i32
}

/// Ordered, fixed-length window of columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStrip {
    columns: VecDeque<Column>,
}

impl ColumnStrip {
    /// Build a strip from columns in left-to-right order.
    ///
    /// The strip keeps this length for its whole life.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns: columns.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn first(&self) -> Option<&Column> {
        self.columns.front()
    }

    pub fn last(&self) -> Option<&Column> {
        self.columns.back()
    }

    pub fn column(&self, slot: usize) -> Result<&Column, CoreError> {
        self.columns.get(slot).ok_or(CoreError::OutOfRange {
            slot,
            len: self.columns.len(),
        })
    }

    pub fn height_at(&self, slot: usize) -> Result<u8, CoreError> {
        self.column(slot).map(|c| c.height)
    }

    pub fn has_pickup_at(&self, slot: usize) -> Result<bool, CoreError> {
        self.column(slot).map(|c| c.has_pickup)
    }

    /// Remove the pickup in `slot`. Returns whether one was present.
    pub fn clear_pickup(&mut self, slot: usize) -> Result<bool, CoreError> {
        let len = self.columns.len();
        let column = self
            .columns
            .get_mut(slot)
            .ok_or(CoreError::OutOfRange { slot, len })?;
        Ok(std::mem::replace(&mut column.has_pickup, false))
    }

    /// Slot under screen x `x` given the current scroll offset (clamped).
    pub fn slot_at(&self, x: i32, scroll_offset: u32) -> usize {
        let raw = (x + scroll_offset as i32).div_euclid(TILE_SIZE as i32);
        let max = self.columns.len().saturating_sub(1) as i32;
        raw.clamp(0, max) as usize
    }

    /// Column under screen x `x` (clamped).
    pub fn column_at(&self, x: i32, scroll_offset: u32) -> Option<&Column> {
        self.columns.get(self.slot_at(x, scroll_offset))
    }

    /// Evict the leftmost column and append `fresh` on the right.
    ///
    /// Both halves happen in this one call so the length never changes.
    pub(crate) fn recycle(&mut self, fresh: Column) -> Option<Column> {
        let evicted = self.columns.pop_front();
        self.columns.push_back(fresh);
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(heights: &[u8]) -> ColumnStrip {
        ColumnStrip::new(
            heights
                .iter()
                .enumerate()
                .map(|(i, &h)| Column::new(i as u64, h, false))
                .collect(),
        )
    }

    #[test]
    fn column_top_counts_tiles_from_the_bottom() {
        assert_eq!(column_top(1), 220);
        assert_eq!(column_top(3), 180);
        assert_eq!(Column::new(0, 3, true).pickup_top(), 160);
    }

    #[test]
    fn raw_lookup_outside_window_is_out_of_range() {
        let s = strip(&[1, 2, 3]);
        assert_eq!(s.height_at(2), Ok(3));
        assert_eq!(
            s.height_at(3),
            Err(CoreError::OutOfRange { slot: 3, len: 3 })
        );
        assert!(s.has_pickup_at(7).is_err());
    }

    #[test]
    fn slot_at_uses_scroll_offset_and_clamps() {
        let s = strip(&[1, 2, 3]);
        assert_eq!(s.slot_at(0, 0), 0);
        assert_eq!(s.slot_at(19, 0), 0);
        assert_eq!(s.slot_at(19, 1), 1);
        assert_eq!(s.slot_at(-5, 0), 0);
        assert_eq!(s.slot_at(500, 0), 2);
    }

    #[test]
    fn clear_pickup_is_idempotent() {
        let mut s = ColumnStrip::new(vec![Column::new(0, 2, true)]);
        assert_eq!(s.clear_pickup(0), Ok(true));
        assert_eq!(s.clear_pickup(0), Ok(false));
        assert_eq!(s.has_pickup_at(0), Ok(false));
    }

    #[test]
    fn recycle_keeps_length() {
        let mut s = strip(&[1, 2, 3]);
        let evicted = s.recycle(Column::new(3, 4, false));
        assert_eq!(evicted.map(|c| c.index), Some(0));
        assert_eq!(s.len(), 3);
        assert_eq!(s.last().map(|c| c.height), Some(4));
    }
}
