//! Core types module - shared constants and small data structures
//!
//! Everything here is plain data with no behavior beyond parsing helpers, so
//! it can be used from the simulation, the terminal view and the input layer
//! alike.
//!
//! # Geometry
//!
//! The game runs on a fixed 320x240 logical canvas divided into 20x20 tiles.
//! Coordinates are pixels with `(0, 0)` at the top-left corner and `y`
//! growing downwards.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 320 | Logical canvas width |
//! | `SCREEN_HEIGHT` | 240 | Logical canvas height |
//! | `TILE_SIZE` | 20 | Width/height of one level tile |
//! | `BUFFER_COLUMNS` | 17 | Columns kept in the scroll buffer (screen + 1) |
//! | `LEVEL_WIDTH` | 340 | Width of the painted level strip |
//!
//! # Level generation
//!
//! Column heights follow a bounded random walk between `MIN_COL_HEIGHT` and
//! `MAX_COL_HEIGHT`, never changing by more than `MAX_COL_DELTA` tiles from one
//! column to the next. The first `NUM_INTRO_TILES` columns are flat.
//!
//! # Timing
//!
//! The loop targets one frame every `FRAME_MS` milliseconds. Physics scales
//! elapsed milliseconds by `TIMESTEP_SCALE`, so a 16 ms frame advances the
//! simulation by 0.17 units.
//!
//! # Examples
//!
//! ```
//! use money_run_types::{GameAction, InputSnapshot, BUFFER_COLUMNS, LEVEL_WIDTH, TILE_SIZE};
//!
//! assert_eq!(LEVEL_WIDTH, BUFFER_COLUMNS as u32 * TILE_SIZE);
//! assert_eq!(GameAction::Jump.as_str(), "jump");
//! assert!(InputSnapshot::default().is_idle());
//! ```

use serde::{Deserialize, Serialize};

/// Logical canvas width in pixels
pub const SCREEN_WIDTH: u32 = 320;

/// Logical canvas height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Size of one level tile (and of a money pickup)
pub const TILE_SIZE: u32 = 20;

/// Player sprite width
pub const PLAYER_WIDTH: u32 = 20;

/// Player sprite height
pub const PLAYER_HEIGHT: u32 = 28;

/// Row of the ground tile inside the tile atlas
pub const IMG_OFFSET_TILE: u32 = 0;

/// Row of the player sprite inside the tile atlas
pub const IMG_OFFSET_PLAYER: u32 = TILE_SIZE;

/// Row of the money sprite inside the tile atlas
pub const IMG_OFFSET_MONEY: u32 = IMG_OFFSET_PLAYER + PLAYER_HEIGHT;

/// Minimum tile atlas height (ground + player + money)
pub const TILE_ATLAS_HEIGHT: u32 = IMG_OFFSET_MONEY + MONEY_SIZE;

/// Number of frames stacked vertically in the screen atlas
pub const SCREEN_FRAMES: u32 = 2;

/// Columns held in the scroll buffer: the visible window plus one ahead
pub const BUFFER_COLUMNS: usize = (SCREEN_WIDTH / TILE_SIZE) as usize + 1;

/// Width of the painted level strip
pub const LEVEL_WIDTH: u32 = BUFFER_COLUMNS as u32 * TILE_SIZE;

/// Initial player x (screen space)
pub const PLAYER_START_OFFSET: i32 = (TILE_SIZE * 3) as i32;

/// Number of flat columns at the start of a run
pub const NUM_INTRO_TILES: u64 = 10;

/// Height of forced intro columns
pub const INTRO_COL_HEIGHT: u8 = 1;

/// Lowest column height in tiles
pub const MIN_COL_HEIGHT: u8 = 1;

/// Tallest column height in tiles (two rows of headroom)
pub const MAX_COL_HEIGHT: u8 = (SCREEN_HEIGHT / TILE_SIZE) as u8 - 2;

/// Largest height change between neighbouring generated columns
pub const MAX_COL_DELTA: u8 = 4;

/// Money pickup size (one tile)
pub const MONEY_SIZE: u32 = TILE_SIZE;

/// Chance that a generated column carries money
pub const MONEY_PROBABILITY: f64 = 0.1;

/// Score awarded per collected pickup
pub const MONEY_SCORE: f64 = 100.0;

/// Score drift added every frame
pub const SCORE_DELTA_PER_FRAME: f64 = 0.25;

/// Padding of the in-game score from the bottom-left corner
pub const SCORE_PADDING: u32 = 4;

/// Baseline of the score line on the game over screen
pub const GAME_OVER_SCORE_Y: u32 = 205;

/// Velocity set by a jump (negative = upwards)
pub const JUMP_VELOCITY: f32 = -40.0;

/// Gravity added to velocity per simulation unit
pub const GRAVITY_ACCELERATION: f32 = 9.8;

/// Simulation units per elapsed millisecond (0.17 per 16 ms frame)
pub const TIMESTEP_SCALE: f32 = 0.17 / 16.0;

/// Target frame interval in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Pixels moved per frame while right is held
pub const RIGHT_STEP: i32 = 2;

/// Pixels moved per frame while left is held
pub const LEFT_STEP: i32 = 1;

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Walk left (held)
    MoveLeft,
    /// Walk right (held)
    MoveRight,
    /// Jump (pressed)
    Jump,
    /// Start a new run after game over
    Restart,
}

impl GameAction {
    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Jump => "jump",
            GameAction::Restart => "restart",
        }
    }
}

/// Input state sampled once per frame.
///
/// `left`/`right` are level-triggered (held), `jump` is edge-triggered
/// (pressed since the previous snapshot).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputSnapshot {
    pub fn is_idle(&self) -> bool {
        !self.left && !self.right && !self.jump
    }
}
