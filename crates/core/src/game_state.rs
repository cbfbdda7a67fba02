//! Game state module - one run of the game
//!
//! [`Game`] owns everything a run needs: the scroll buffer, the player, the
//! session score and the composed screen. The loop driver calls
//! [`Game::step`] once per display frame with the elapsed time and a polled
//! input snapshot. The order inside a frame is fixed:
//!
//! 1. physics (wall nudge, integration, grounding)
//! 2. input (walk / jump)
//! 3. money pickups
//! 4. scroll one pixel (`offset += 1`, `player.x -= 1`)
//! 5. compose the screen
//! 6. recycle the strip if a tile boundary was reached
//! 7. score drift
//! 8. termination check (compose the game over screen when it triggers)
//!
//! Once the run is over, `step` does nothing.

use arrayvec::ArrayVec;
use log::info;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::generator::LevelGenerator;
use crate::physics::{self, Player, PlayerState};
use crate::render;
use crate::scroll::{Recycle, ScrollBuffer};
use crate::snapshot::GameSnapshot;
use crate::surface::{PixelBuffer, SpriteSheets};
use crate::types::{InputSnapshot, MONEY_SCORE, SCORE_DELTA_PER_FRAME, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Score and termination flag of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub score: f64,
    pub terminated: bool,
}

impl Session {
    /// Score as shown on screen.
    pub fn display_score(&self) -> u64 {
        self.score.floor() as u64
    }
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    /// False when the run was already over and nothing was simulated.
    pub simulated: bool,
    pub player_state: PlayerState,
    pub collected: ArrayVec<Column, 2>,
    pub recycle: Option<Recycle>,
    pub score: f64,
    pub terminated: bool,
}

/// A single run.
#[derive(Debug, Clone)]
pub struct Game {
    sheets: SpriteSheets,
    buffer: ScrollBuffer,
    player: Player,
    player_state: PlayerState,
    session: Session,
    screen: PixelBuffer,
    frame: u64,
}

impl Game {
    /// New run with a freshly generated level.
    pub fn new(seed: u64, sheets: SpriteSheets) -> Self {
        let buffer = ScrollBuffer::new(LevelGenerator::new(seed), &sheets);
        Self::with_buffer(buffer, sheets)
    }

    /// New run over an existing scroll buffer, player at the start position.
    pub fn with_buffer(buffer: ScrollBuffer, sheets: SpriteSheets) -> Self {
        let mut game = Self {
            sheets,
            buffer,
            player: Player::default(),
            player_state: PlayerState::Airborne,
            session: Session::default(),
            screen: PixelBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            frame: 0,
        };
        game.compose_play();
        info!("new run: seed {}", game.buffer.seed());
        game
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Replace the player (tests, debugging tools).
    pub fn set_player(&mut self, player: Player) {
        self.player = player;
    }

    pub fn player_state(&self) -> PlayerState {
        self.player_state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn score(&self) -> f64 {
        self.session.score
    }

    pub fn display_score(&self) -> u64 {
        self.session.display_score()
    }

    pub fn is_over(&self) -> bool {
        self.session.terminated
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn buffer(&self) -> &ScrollBuffer {
        &self.buffer
    }

    pub fn sheets(&self) -> &SpriteSheets {
        &self.sheets
    }

    /// The last composed frame.
    pub fn screen(&self) -> &PixelBuffer {
        &self.screen
    }

    /// Simulate one display frame.
    pub fn step(&mut self, dt_ms: u32, input: InputSnapshot) -> FrameReport {
        if self.session.terminated {
            return FrameReport {
                frame: self.frame,
                simulated: false,
                player_state: self.player_state,
                collected: ArrayVec::new(),
                recycle: None,
                score: self.session.score,
                terminated: true,
            };
        }

        self.frame += 1;

        self.player_state = physics::apply_forces(&self.buffer, &mut self.player, dt_ms);
        physics::apply_input(&self.buffer, &mut self.player, input);

        let collected = physics::collect_pickups(&mut self.buffer, &self.player);
        self.session.score += MONEY_SCORE * collected.len() as f64;

        self.buffer.advance();
        self.player.x -= 1;
        self.compose_play();

        let recycle = self.buffer.recycle_if_needed(&self.sheets);

        self.session.score += SCORE_DELTA_PER_FRAME;

        if self.player.is_off_screen() {
            self.session.terminated = true;
            render::compose_game_over(&mut self.screen, &self.sheets);
            info!(
                "run over after {} frames, score {}",
                self.frame,
                self.display_score()
            );
        }

        FrameReport {
            frame: self.frame,
            simulated: true,
            player_state: self.player_state,
            collected,
            recycle,
            score: self.session.score,
            terminated: self.session.terminated,
        }
    }

    /// Plain-data view of the run for renderers and traces.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(self)
    }

    fn compose_play(&mut self) {
        render::compose_play(
            &mut self.screen,
            &self.sheets,
            self.buffer.level(),
            self.buffer.offset(),
            &self.player,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_sheets, GAME_OVER_BG};
    use crate::types::{BUFFER_COLUMNS, FRAME_MS, TILE_SIZE};

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    #[test]
    fn score_drifts_a_quarter_per_frame() {
        let mut game = Game::new(3, test_sheets());
        for _ in 0..10 {
            game.step(FRAME_MS, idle());
        }
        assert_eq!(game.score(), 2.5);
        assert_eq!(game.display_score(), 2);
    }

    #[test]
    fn drift_ignores_frame_time() {
        let mut a = Game::new(3, test_sheets());
        let mut b = Game::new(3, test_sheets());
        a.step(1, idle());
        b.step(100, idle());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn idle_player_drifts_off_and_run_ends() {
        let mut game = Game::new(11, test_sheets());
        let mut frames = 0;
        while !game.is_over() {
            let report = game.step(FRAME_MS, idle());
            assert_eq!(game.buffer().strip().len(), BUFFER_COLUMNS);
            assert!(game.buffer().offset() < TILE_SIZE);
            frames += 1;
            assert_eq!(report.frame, frames);
            assert!(frames < 1000);
        }
        // Starts at x = 60 and drifts one pixel per frame to x = -20.
        assert_eq!(frames, 80);
        assert_eq!(game.screen().get(160, 120), GAME_OVER_BG);
    }

    #[test]
    fn finished_run_never_steps_again() {
        let mut game = Game::new(11, test_sheets());
        while !game.is_over() {
            game.step(FRAME_MS, idle());
        }
        let frame = game.frame();
        let score = game.score();
        let player = *game.player();
        let offset = game.buffer().offset();

        let report = game.step(FRAME_MS, InputSnapshot { right: true, jump: true, left: false });
        assert!(!report.simulated);
        assert!(report.terminated);
        assert_eq!(game.frame(), frame);
        assert_eq!(game.score(), score);
        assert_eq!(*game.player(), player);
        assert_eq!(game.buffer().offset(), offset);
    }

    #[test]
    fn recycle_reported_every_tile() {
        let mut game = Game::new(5, test_sheets());
        let mut recycled_on = Vec::new();
        for _ in 0..60 {
            let report = game.step(FRAME_MS, InputSnapshot { right: true, ..Default::default() });
            if report.recycle.is_some() {
                recycled_on.push(report.frame);
            }
        }
        assert_eq!(recycled_on, vec![20, 40, 60]);
    }
}
