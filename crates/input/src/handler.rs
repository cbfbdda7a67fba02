//! Held-key input handler for terminal environments.
//!
//! Walking is level-triggered (a key is either held or not) while jumping is
//! edge-triggered (one press, one jump). Terminals that do not report key
//! releases are handled with a timeout: a held key lapses unless a press or
//! repeat refreshes it in time. Once a real release event arrives the timeout
//! is switched off for the rest of the session.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::action_for_code;
use crate::types::{GameAction, InputSnapshot};

/// Default lapse for held keys when the terminal sends no releases.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held walk keys and the jump latch between frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Last press/repeat of the left key, while held
    left: Option<Instant>,
    /// Last press/repeat of the right key, while held
    right: Option<Instant>,
    jump_latched: bool,
    key_release_timeout: Duration,
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left: None,
            right: None,
            jump_latched: false,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS as u64),
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms as u64);
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout.as_millis() as u32
    }

    /// Whether the terminal has proven it reports key releases.
    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Feed one terminal key event. Returns the mapped action for presses.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Press => self.handle_key_press(key.code, now),
            KeyEventKind::Repeat => {
                self.handle_key_press(key.code, now);
                None
            }
            KeyEventKind::Release => {
                self.handle_key_release(key.code);
                None
            }
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode, now: Instant) -> Option<GameAction> {
        let action = action_for_code(code)?;
        match action {
            GameAction::MoveLeft => self.left = Some(now),
            GameAction::MoveRight => self.right = Some(now),
            GameAction::Jump => self.jump_latched = true,
            GameAction::Restart => {}
        }
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        match action_for_code(code) {
            Some(GameAction::MoveLeft) => self.left = None,
            Some(GameAction::MoveRight) => self.right = None,
            _ => {}
        }
    }

    /// Sample the input for one frame; consumes a pending jump.
    pub fn poll(&mut self, now: Instant) -> InputSnapshot {
        if !self.release_events_seen {
            let timeout = self.key_release_timeout;
            let lapsed = |held: Option<Instant>| {
                held.filter(|&at| now.saturating_duration_since(at) <= timeout)
            };
            self.left = lapsed(self.left);
            self.right = lapsed(self.right);
        }

        InputSnapshot {
            left: self.left.is_some(),
            right: self.right.is_some(),
            jump: std::mem::take(&mut self.jump_latched),
        }
    }

    /// Forget all held keys and pending presses.
    pub fn reset(&mut self) {
        self.left = None;
        self.right = None;
        self.jump_latched = false;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
