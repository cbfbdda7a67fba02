//! Terminal "game renderer" module.
//!
//! Renders the composed 320x240 game screen as half-block characters into a
//! simple framebuffer, then flushes only the changed cells to the terminal.
//! No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout and HUD placement can be unit-tested
//! - Keep the picture at the screen's aspect ratio in any terminal size

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use money_run_core as core;
pub use money_run_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport, GAME_OVER_HINT};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
