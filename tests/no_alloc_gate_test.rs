use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use money_run::assets::builtin_sprite_sheets;
use money_run::core::Game;
use money_run::term::{FrameBuffer, GameView, Viewport};
use money_run::types::{InputSnapshot, FRAME_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test in this binary so no other thread allocates while counting.
#[test]
fn frame_step_and_view_render_are_allocation_free_after_warmup() {
    let mut game = Game::new(7, builtin_sprite_sheets().unwrap());
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let input = InputSnapshot { right: true, ..Default::default() };

    // Warmup: first render sizes the framebuffer.
    view.render_into(game.screen(), &game.snapshot(), viewport, &mut fb);

    // Covers recycles (every 20 frames) and pickups along the way.
    let allocs = with_alloc_counting(|| {
        for i in 0..200u32 {
            let jump = i % 30 == 0;
            game.step(FRAME_MS, InputSnapshot { jump, ..input });
            view.render_into(game.screen(), &game.snapshot(), viewport, &mut fb);
        }
    });
    assert_eq!(allocs, 0, "expected no allocations in the frame path");

    // Game over rendering, including the final score line.
    while !game.is_over() {
        game.step(FRAME_MS, InputSnapshot::default());
    }
    let allocs = with_alloc_counting(|| {
        view.render_into(game.screen(), &game.snapshot(), viewport, &mut fb);
    });
    assert_eq!(allocs, 0);
}
