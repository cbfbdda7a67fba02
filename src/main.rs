//! Money Run terminal runner (default binary).
//!
//! Startup is a sequence of fallible steps (config, logging, sprite sheets,
//! trace, terminal); the first failure aborts with context. The loop then
//! waits for input until the next frame deadline, steps the game once and
//! redraws.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use money_run::assets::{builtin_sprite_sheets, load_sprite_sheets};
use money_run::config::GameConfig;
use money_run::core::{Game, SpriteSheets};
use money_run::input::{should_quit, InputHandler};
use money_run::logging;
use money_run::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use money_run::trace::FrameTrace;
use money_run::types::{GameAction, FRAME_MS};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    logging::init(&config)?;

    let sheets = load_sheets(&config)?;
    let mut trace = config
        .trace_path
        .as_deref()
        .map(FrameTrace::create)
        .transpose()?;

    let seed = config.run_seed();
    info!("starting: seed {seed}");
    let game = Game::new(seed, sheets);

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;
    info!(
        "terminal ready, key release events {}",
        if term.keyboard_enhanced() { "requested" } else { "unavailable" }
    );

    let result = run(&mut term, &config, game, trace.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Some(trace) = trace.as_mut() {
        let _ = trace.flush();
    }
    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

fn load_sheets(config: &GameConfig) -> Result<SpriteSheets> {
    match &config.assets_dir {
        Some(dir) => {
            info!("asset source: {}", dir.display());
            load_sprite_sheets(dir)
                .with_context(|| format!("failed to load sprite sheets from {}", dir.display()))
        }
        None => {
            info!("asset source: built-in");
            builtin_sprite_sheets().context("failed to paint built-in sprite sheets")
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    config: &GameConfig,
    mut game: Game,
    mut trace: Option<&mut FrameTrace>,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut input = InputHandler::new().with_key_release_timeout_ms(config.key_release_ms);
    let mut run_number: u32 = 1;

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_step = Instant::now();
    let mut next_frame = last_step + frame;

    draw(term, &view, &game, &mut fb)?;

    loop {
        // Input until the next frame is due.
        let timeout = next_frame.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    let action = input.handle_key_event(key, Instant::now());
                    if action == Some(GameAction::Restart) && game.is_over() {
                        let seed = config.run_seed();
                        info!("restart: run {} seed {seed}", run_number + 1);
                        game = Game::new(seed, game.sheets().clone());
                        input.reset();
                        run_number += 1;
                        last_step = Instant::now();
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            continue;
        }

        // Frame.
        let now = Instant::now();
        let dt_ms = u32::try_from(now.duration_since(last_step).as_millis()).unwrap_or(u32::MAX);
        last_step = now;
        next_frame += frame;
        if next_frame < now {
            next_frame = now + frame;
        }

        let report = game.step(dt_ms, input.poll(now));
        if report.simulated {
            if let Some(trace) = trace.as_deref_mut() {
                trace.record(run_number, &report, &game.snapshot())?;
            }
        }

        draw(term, &view, &game, &mut fb)?;
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &Game,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(game.screen(), &game.snapshot(), Viewport::new(w, h), fb);
    term.draw_swap(fb)
}
