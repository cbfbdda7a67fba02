//! Core game logic - pure, deterministic and testable
//!
//! Everything the run needs lives here: level generation, the scroll buffer,
//! player physics, screen composition and the per-frame driver. There is no
//! terminal, file or clock access in this crate; the caller supplies elapsed
//! time, polled input and decoded sprite sheets.
//!
//! # Module Structure
//!
//! - [`column`]: column records and the sliding window over them
//! - [`generator`]: seeded procedural column generation
//! - [`surface`]: RGBA buffers, blits and the sprite sheet layout
//! - [`scroll`]: the painted level strip, scrolling and recycling
//! - [`physics`]: gravity, ground contact, walls and money pickups
//! - [`render`]: composing the 320x240 frame
//! - [`game_state`]: one run, stepped once per display frame
//! - [`snapshot`]: plain-data copies for views and traces
//!
//! # Example
//!
//! ```no_run
//! use money_run_core::{Game, SpriteSheets, PixelBuffer};
//! use money_run_types::{InputSnapshot, FRAME_MS};
//!
//! # fn sheets() -> SpriteSheets {
//! #     SpriteSheets::new(PixelBuffer::new(20, 68), PixelBuffer::new(320, 480)).unwrap()
//! # }
//! let mut game = Game::new(12345, sheets());
//! while !game.is_over() {
//!     game.step(FRAME_MS, InputSnapshot { right: true, ..Default::default() });
//! }
//! println!("score: {}", game.display_score());
//! ```
//!
//! # Timing
//!
//! Vertical motion scales with the elapsed milliseconds passed to
//! [`Game::step`]; scrolling and score drift advance by a fixed amount per
//! call regardless of elapsed time.

pub mod column;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod physics;
pub mod render;
pub mod scroll;
pub mod snapshot;
pub mod surface;

pub use money_run_types as types;

pub use column::{column_top, Column, ColumnStrip};
pub use error::CoreError;
pub use game_state::{FrameReport, Game, Session};
pub use generator::LevelGenerator;
pub use physics::{Player, PlayerState};
pub use scroll::{Recycle, ScrollBuffer};
pub use snapshot::GameSnapshot;
pub use surface::{PixelBuffer, Rect, Rgba, ScreenFrame, Sprite, SpriteSheets};
