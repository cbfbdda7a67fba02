//! Sprite sheet sources for Money Run
//!
//! Two sheets drive all drawing: a tile atlas (ground, player, money stacked
//! vertically) and a screen atlas (play background over game over
//! background). They are either decoded from PNG files in an asset directory
//! or painted procedurally.

pub mod builtin;
pub mod decode;
pub mod error;

pub use builtin::builtin_sprite_sheets;
pub use decode::{decode_png, load_png, load_sprite_sheets, SCREENS_FILE, TILES_FILE};
pub use error::AssetError;
