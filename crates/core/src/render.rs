//! Screen composition.
//!
//! Builds the 320x240 frame from the sprite sheets, the painted level strip
//! and the player. Text (score, game over line) is left to the display layer.

use crate::physics::Player;
use crate::surface::{PixelBuffer, Rect, ScreenFrame, Sprite, SpriteSheets};
use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Draw the in-game frame: background, visible level window, player.
pub fn compose_play(
    screen: &mut PixelBuffer,
    sheets: &SpriteSheets,
    level: &PixelBuffer,
    scroll_offset: u32,
    player: &Player,
) {
    screen.clear();
    screen.blit(sheets.screens(), ScreenFrame::Play.rect(), 0, 0);
    screen.blit(
        level,
        Rect::new(scroll_offset as i32, 0, SCREEN_WIDTH, SCREEN_HEIGHT),
        0,
        0,
    );
    screen.blit(
        sheets.tiles(),
        Sprite::Player.rect(),
        player.x,
        player.y.floor() as i32,
    );
}

/// Draw the game over frame.
pub fn compose_game_over(screen: &mut PixelBuffer, sheets: &SpriteSheets) {
    screen.clear();
    screen.blit(sheets.screens(), ScreenFrame::GameOver.rect(), 0, 0);
}
