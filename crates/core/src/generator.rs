//! Level generator - procedural columns
//!
//! Heights follow a bounded random walk: each generated column stays within
//! `MAX_COL_DELTA` tiles of its predecessor and inside
//! `[MIN_COL_HEIGHT, MAX_COL_HEIGHT]`. Money appears independently with
//! probability `MONEY_PROBABILITY`.
//!
//! The opening stretch of a run is forced flat (height 1, no money) so the
//! player always gets a safe launch pad.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::column::Column;
use crate::types::{
    BUFFER_COLUMNS, INTRO_COL_HEIGHT, MAX_COL_DELTA, MAX_COL_HEIGHT, MIN_COL_HEIGHT,
    MONEY_PROBABILITY, NUM_INTRO_TILES,
};

/// Seeded column generator.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    rng: Pcg32,
    seed: u64,
    next_index: u64,
}

impl LevelGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            seed,
            next_index: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Absolute index the next generated column will get.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// Produce the next column.
    ///
    /// With `forced_height` the column is flat and never carries money, and
    /// no random numbers are drawn.
    pub fn generate_column(&mut self, previous_height: u8, forced_height: Option<u8>) -> Column {
        let index = self.next_index;
        self.next_index += 1;

        if let Some(height) = forced_height {
            return Column::new(index, height, false);
        }

        let (min, max) = height_bounds(previous_height);
        let height = self.rng.random_range(min..=max);
        let has_pickup = self.rng.random_bool(MONEY_PROBABILITY);
        Column::new(index, height, has_pickup)
    }

    /// Build the opening window of `BUFFER_COLUMNS` columns.
    pub fn initial_columns(&mut self) -> Vec<Column> {
        let mut columns: Vec<Column> = Vec::with_capacity(BUFFER_COLUMNS);
        for _ in 0..BUFFER_COLUMNS {
            let previous = columns.last().map_or(INTRO_COL_HEIGHT, |c| c.height);
            let forced = is_intro_index(self.next_index).then_some(INTRO_COL_HEIGHT);
            columns.push(self.generate_column(previous, forced));
        }
        columns
    }
}

/// Whether the column at absolute `index` is part of the flat intro.
pub fn is_intro_index(index: u64) -> bool {
    index == 1 || index < NUM_INTRO_TILES
}

/// Inclusive height range allowed after a column of `previous_height`.
pub fn height_bounds(previous_height: u8) -> (u8, u8) {
    let previous = previous_height.clamp(MIN_COL_HEIGHT, MAX_COL_HEIGHT);
    let max = previous.saturating_add(MAX_COL_DELTA).min(MAX_COL_HEIGHT);
    let min = previous.saturating_sub(MAX_COL_DELTA).max(MIN_COL_HEIGHT);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn bounds_clip_at_floor_and_ceiling() {
        assert_eq!(height_bounds(1), (1, 5));
        assert_eq!(height_bounds(6), (2, 10));
        assert_eq!(height_bounds(10), (6, 10));
    }

    #[test]
    fn forced_column_has_no_pickup_and_consumes_no_randomness() {
        let mut a = LevelGenerator::new(9);
        let mut b = LevelGenerator::new(9);

        let forced = a.generate_column(7, Some(1));
        assert_eq!(forced.height, 1);
        assert!(!forced.has_pickup);

        // Skip the index b would have used; the random streams must still line up.
        b.next_index += 1;
        assert_eq!(a.generate_column(3, None), b.generate_column(3, None));
    }

    #[test]
    fn initial_window_starts_flat() {
        let mut generator = LevelGenerator::new(42);
        let columns = generator.initial_columns();
        assert_eq!(columns.len(), BUFFER_COLUMNS);
        for column in columns.iter().take(NUM_INTRO_TILES as usize) {
            assert_eq!(column.height, INTRO_COL_HEIGHT);
            assert!(!column.has_pickup);
        }
        assert_eq!(generator.next_index(), BUFFER_COLUMNS as u64);
    }

    #[test]
    fn same_seed_same_level() {
        let mut a = LevelGenerator::new(1234);
        let mut b = LevelGenerator::new(1234);
        assert_eq!(a.initial_columns(), b.initial_columns());
        for _ in 0..100 {
            let (x, y) = (a.generate_column(5, None), b.generate_column(5, None));
            assert_eq!(x, y);
        }
    }

    #[test]
    fn money_shows_up_at_roughly_the_configured_rate() {
        let mut generator = LevelGenerator::new(7);
        let draws = 10_000;
        let hits = (0..draws)
            .filter(|_| generator.generate_column(5, None).has_pickup)
            .count();
        let rate = hits as f64 / draws as f64;
        assert!((0.07..0.13).contains(&rate), "pickup rate {rate}");
    }

    proptest! {
        #[test]
        fn generated_heights_stay_within_walk_bounds(seed in any::<u64>(), steps in 1usize..300) {
            let mut generator = LevelGenerator::new(seed);
            let mut previous = generator
                .initial_columns()
                .last()
                .map_or(INTRO_COL_HEIGHT, |c| c.height);
            for _ in 0..steps {
                let column = generator.generate_column(previous, None);
                prop_assert!(column.height >= MIN_COL_HEIGHT);
                prop_assert!(column.height <= MAX_COL_HEIGHT);
                prop_assert!(column.height.abs_diff(previous) <= MAX_COL_DELTA);
                previous = column.height;
            }
        }
    }
}
