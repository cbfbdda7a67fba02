//! Level generation and scroll buffer invariants, exercised through the facade.

use proptest::prelude::*;

use money_run::assets::builtin_sprite_sheets;
use money_run::core::generator::{height_bounds, is_intro_index};
use money_run::core::{Game, LevelGenerator, ScrollBuffer};
use money_run::types::{
    InputSnapshot, BUFFER_COLUMNS, FRAME_MS, INTRO_COL_HEIGHT, MAX_COL_DELTA, MAX_COL_HEIGHT,
    MIN_COL_HEIGHT, NUM_INTRO_TILES, TILE_SIZE,
};

#[test]
fn opening_window_is_flat_and_without_money() {
    let mut generator = LevelGenerator::new(77);
    let columns = generator.initial_columns();

    assert_eq!(columns.len(), BUFFER_COLUMNS);
    for column in columns.iter().take(NUM_INTRO_TILES as usize) {
        assert_eq!(column.height, INTRO_COL_HEIGHT, "column {}", column.index);
        assert!(!column.has_pickup);
    }
    let indices: Vec<u64> = columns.iter().map(|c| c.index).collect();
    assert_eq!(indices, (0..BUFFER_COLUMNS as u64).collect::<Vec<_>>());
}

#[test]
fn same_seed_same_level() {
    let mut a = LevelGenerator::new(2024);
    let mut b = LevelGenerator::new(2024);
    let mut prev_a = 1;
    let mut prev_b = 1;
    for _ in 0..500 {
        let ca = a.generate_column(prev_a, None);
        let cb = b.generate_column(prev_b, None);
        assert_eq!(ca, cb);
        prev_a = ca.height;
        prev_b = cb.height;
    }
}

#[test]
fn forced_heights_are_honoured() {
    let mut generator = LevelGenerator::new(1);
    let column = generator.generate_column(5, Some(7));
    assert_eq!(column.height, 7);
    assert!(!column.has_pickup);
}

#[test]
fn height_bounds_stay_in_range_at_the_edges() {
    assert_eq!(height_bounds(MIN_COL_HEIGHT), (MIN_COL_HEIGHT, MIN_COL_HEIGHT + MAX_COL_DELTA));
    assert_eq!(height_bounds(MAX_COL_HEIGHT), (MAX_COL_HEIGHT - MAX_COL_DELTA, MAX_COL_HEIGHT));
    assert!(is_intro_index(1));
    assert!(is_intro_index(NUM_INTRO_TILES - 1));
    assert!(!is_intro_index(NUM_INTRO_TILES));
}

#[test]
fn buffer_recycles_once_per_tile_with_consecutive_indices() {
    let sheets = builtin_sprite_sheets().unwrap();
    let mut buffer = ScrollBuffer::new(LevelGenerator::new(31), &sheets);

    let mut expected_next = BUFFER_COLUMNS as u64;
    for frame in 1..=(TILE_SIZE * 50) {
        buffer.advance();
        match buffer.recycle_if_needed(&sheets) {
            Some(recycle) => {
                assert_eq!(frame % TILE_SIZE, 0);
                assert_eq!(recycle.appended.index, expected_next);
                assert_eq!(recycle.evicted.index + BUFFER_COLUMNS as u64, expected_next);
                expected_next += 1;
            }
            None => assert_ne!(frame % TILE_SIZE, 0),
        }
        assert_eq!(buffer.strip().len(), BUFFER_COLUMNS);

        let indices: Vec<u64> = buffer.strip().iter().map(|c| c.index).collect();
        assert!(indices.windows(2).all(|w| w[1] == w[0] + 1));
    }
    assert_eq!(buffer.recycles(), 50);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_heights_walk_within_bounds(
        seed in any::<u64>(),
        start in MIN_COL_HEIGHT..=MAX_COL_HEIGHT,
    ) {
        let mut generator = LevelGenerator::new(seed);
        let mut previous = start;
        for _ in 0..200 {
            let column = generator.generate_column(previous, None);
            prop_assert!((MIN_COL_HEIGHT..=MAX_COL_HEIGHT).contains(&column.height));
            prop_assert!(column.height.abs_diff(previous) <= MAX_COL_DELTA);
            previous = column.height;
        }
    }

    #[test]
    fn window_shape_holds_for_any_input(
        seed in any::<u64>(),
        inputs in proptest::collection::vec((any::<bool>(), any::<bool>(), any::<bool>()), 0..200),
    ) {
        let mut game = Game::new(seed, builtin_sprite_sheets().unwrap());
        for (left, right, jump) in inputs {
            game.step(FRAME_MS, InputSnapshot { left, right, jump });
            prop_assert_eq!(game.buffer().strip().len(), BUFFER_COLUMNS);
            prop_assert!(game.buffer().offset() < TILE_SIZE);
        }
    }
}
