use criterion::{black_box, criterion_group, criterion_main, Criterion};
use money_run::assets::builtin_sprite_sheets;
use money_run::core::{Game, LevelGenerator};
use money_run::term::{FrameBuffer, GameView, Viewport};
use money_run::types::{InputSnapshot, FRAME_MS};

fn fresh_game() -> Game {
    Game::new(12345, builtin_sprite_sheets().expect("builtin sheets"))
}

fn bench_step(c: &mut Criterion) {
    let mut game = fresh_game();
    let input = InputSnapshot {
        right: true,
        ..Default::default()
    };

    c.bench_function("game_step_16ms", |b| {
        b.iter(|| {
            if game.is_over() {
                game = fresh_game();
            }
            game.step(black_box(FRAME_MS), input);
        })
    });
}

fn bench_generate_column(c: &mut Criterion) {
    let mut generator = LevelGenerator::new(12345);
    let mut previous = 1u8;

    c.bench_function("generate_column", |b| {
        b.iter(|| {
            let column = generator.generate_column(black_box(previous), None);
            previous = column.height;
            column
        })
    });
}

fn bench_recycle_window(c: &mut Criterion) {
    // 20 frames scroll exactly one tile, so each iteration includes one recycle.
    c.bench_function("twenty_frames_with_recycle", |b| {
        let mut game = fresh_game();
        b.iter(|| {
            if game.is_over() {
                game = fresh_game();
            }
            for _ in 0..20 {
                game.step(FRAME_MS, InputSnapshot::default());
            }
        })
    });
}

fn bench_view_render(c: &mut Criterion) {
    let game = fresh_game();
    let view = GameView::default();
    let viewport = Viewport::new(120, 45);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("game_view_render_120x45", |b| {
        b.iter(|| {
            view.render_into(game.screen(), &game.snapshot(), black_box(viewport), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_generate_column,
    bench_recycle_window,
    bench_view_render
);
criterion_main!(benches);
