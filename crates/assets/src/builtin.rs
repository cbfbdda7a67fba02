//! Built-in sprite sheets, painted at startup.
//!
//! Used when no asset directory is configured. The layout matches what a
//! `tiles.png` / `screens.png` pair would provide.

use money_run_core::types::{
    MONEY_SIZE, PLAYER_HEIGHT, PLAYER_WIDTH, SCREEN_FRAMES, SCREEN_HEIGHT, SCREEN_WIDTH,
    TILE_ATLAS_HEIGHT, TILE_SIZE,
};
use money_run_core::{CoreError, PixelBuffer, Rect, Rgba, ScreenFrame, Sprite, SpriteSheets};

// ── Palette ─────────────────────────────────────────────────────────────────

const SKY_TOP: Rgba = Rgba::opaque(70, 180, 200);
const SKY_BOT: Rgba = Rgba::opaque(190, 232, 245);
const HILL_FAR: Rgba = Rgba::opaque(120, 195, 75);
const HILL_NEAR: Rgba = Rgba::opaque(95, 175, 55);
const GRASS: Rgba = Rgba::opaque(84, 168, 55);
const GRASS_LIGHT: Rgba = Rgba::opaque(110, 200, 70);
const DIRT: Rgba = Rgba::opaque(210, 185, 110);
const DIRT_DARK: Rgba = Rgba::opaque(185, 160, 90);
const SKIN: Rgba = Rgba::opaque(240, 195, 150);
const SHIRT: Rgba = Rgba::opaque(200, 60, 50);
const PANTS: Rgba = Rgba::opaque(50, 70, 140);
const HAIR: Rgba = Rgba::opaque(70, 45, 25);
const EYE: Rgba = Rgba::opaque(20, 20, 20);
const GOLD: Rgba = Rgba::opaque(245, 200, 66);
const GOLD_HI: Rgba = Rgba::opaque(255, 225, 100);
const GOLD_DARK: Rgba = Rgba::opaque(185, 140, 30);
const DUSK_TOP: Rgba = Rgba::opaque(25, 20, 45);
const DUSK_BOT: Rgba = Rgba::opaque(110, 40, 60);
const BANNER: Rgba = Rgba::opaque(15, 10, 25);

/// Paint both sheets.
pub fn builtin_sprite_sheets() -> Result<SpriteSheets, CoreError> {
    SpriteSheets::new(paint_tiles(), paint_screens())
}

fn paint_tiles() -> PixelBuffer {
    let mut tiles = PixelBuffer::new(TILE_SIZE.max(PLAYER_WIDTH), TILE_ATLAS_HEIGHT);
    paint_ground(&mut tiles, Sprite::Ground.rect());
    paint_player(&mut tiles, Sprite::Player.rect());
    paint_money(&mut tiles, Sprite::Money.rect());
    tiles
}

fn paint_screens() -> PixelBuffer {
    let mut screens = PixelBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT * SCREEN_FRAMES);
    paint_sky(&mut screens, ScreenFrame::Play.rect());
    paint_game_over(&mut screens, ScreenFrame::GameOver.rect());
    screens
}

/// Grass cap over checkered dirt.
fn paint_ground(buf: &mut PixelBuffer, r: Rect) {
    for dy in 0..r.h as i32 {
        for dx in 0..r.w as i32 {
            let c = match dy {
                0 => GRASS_LIGHT,
                1..=3 => GRASS,
                _ if (dx / 4 + dy / 4) % 2 == 0 => DIRT,
                _ => DIRT_DARK,
            };
            buf.set(r.x + dx, r.y + dy, c);
        }
    }
}

/// A small runner, transparent around the silhouette.
fn paint_player(buf: &mut PixelBuffer, r: Rect) {
    let (x, y) = (r.x, r.y);
    // head
    buf.fill_rect(Rect::new(x + 6, y, 8, 3), HAIR);
    buf.fill_rect(Rect::new(x + 6, y + 3, 8, 6), SKIN);
    buf.set(x + 11, y + 5, EYE);
    // body and arms
    buf.fill_rect(Rect::new(x + 5, y + 9, 10, 9), SHIRT);
    buf.fill_rect(Rect::new(x + 2, y + 10, 3, 6), SHIRT);
    buf.fill_rect(Rect::new(x + 15, y + 10, 3, 6), SHIRT);
    buf.fill_rect(Rect::new(x + 2, y + 16, 3, 2), SKIN);
    buf.fill_rect(Rect::new(x + 15, y + 16, 3, 2), SKIN);
    // legs
    let legs_h = PLAYER_HEIGHT - 18;
    buf.fill_rect(Rect::new(x + 5, y + 18, 4, legs_h), PANTS);
    buf.fill_rect(Rect::new(x + 11, y + 18, 4, legs_h), PANTS);
}

/// Gold coin with a darker rim and a vertical stroke.
fn paint_money(buf: &mut PixelBuffer, r: Rect) {
    let c = MONEY_SIZE as i32 / 2;
    let outer = (c - 1) * (c - 1);
    let inner = (c - 3) * (c - 3);
    for dy in 0..r.h as i32 {
        for dx in 0..r.w as i32 {
            let (ox, oy) = (dx - c, dy - c);
            let d2 = ox * ox + oy * oy;
            if d2 > outer {
                continue;
            }
            let stroke = dx == c && (4..r.h as i32 - 4).contains(&dy);
            let color = if d2 > inner || stroke {
                GOLD_DARK
            } else if ox < 0 && oy < 0 {
                GOLD_HI
            } else {
                GOLD
            };
            buf.set(r.x + dx, r.y + dy, color);
        }
    }
}

/// Vertical sky gradient with two rows of hills.
fn paint_sky(buf: &mut PixelBuffer, r: Rect) {
    let h = r.h as i32;
    for dy in 0..h {
        let c = Rgba::lerp(SKY_TOP, SKY_BOT, (dy * 256 / h) as u16);
        buf.fill_rect(Rect::new(r.x, r.y + dy, r.w, 1), c);
    }
    paint_hills(buf, r, 150, 36, 90, HILL_FAR);
    paint_hills(buf, r, 180, 24, 60, HILL_NEAR);
}

/// Rounded humps of `height` pixels rising above `base`, one every `period`.
fn paint_hills(buf: &mut PixelBuffer, r: Rect, base: i32, height: i32, period: i32, c: Rgba) {
    let half = period / 2;
    for dx in 0..r.w as i32 {
        let t = (dx % period) - half;
        let rise = height - height * t * t / (half * half);
        let top = base - rise.max(0);
        buf.fill_rect(Rect::new(r.x + dx, r.y + top, 1, (r.h as i32 - top).max(0) as u32), c);
    }
}

/// Dark gradient with a band behind the score line.
fn paint_game_over(buf: &mut PixelBuffer, r: Rect) {
    let h = r.h as i32;
    for dy in 0..h {
        let c = Rgba::lerp(DUSK_TOP, DUSK_BOT, (dy * 256 / h) as u16);
        buf.fill_rect(Rect::new(r.x, r.y + dy, r.w, 1), c);
    }
    buf.fill_rect(Rect::new(r.x + 40, r.y + 190, r.w - 80, 30), BANNER);
}
