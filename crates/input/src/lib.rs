//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`] and turns
//! the event stream into one [`crate::types::InputSnapshot`] per frame,
//! including in terminals without key-release events.

pub mod handler;
pub mod map;

pub use money_run_types as types;

pub use handler::{InputHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{action_for_code, action_for_key, should_quit};
