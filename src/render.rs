//! Draw pass
//!
//! Renders one frame: sky, parallax background, then every entity through
//! the camera transform, then the HUD overlay. Entities whose texture
//! failed to load fall back to solid placeholder shapes.

use macroquad::prelude::{
    clear_background, draw_circle, draw_rectangle, draw_text, draw_texture, draw_texture_ex, vec2,
    Color, DrawTextureParams, Texture2D, WHITE,
};

use crate::assets::Assets;
use crate::game::constants::*;
use crate::game::rect::Rect;
use crate::game::World;

const SKY: Color = Color::new(0.55, 0.78, 1.0, 1.0);
const PLATFORM_FILL: Color = Color::new(0.39, 0.20, 0.08, 1.0);
const ENEMY_FILL: Color = Color::new(0.71, 0.16, 0.16, 1.0);
const COIN_FILL: Color = Color::new(1.0, 0.84, 0.0, 1.0);
/// Classic missing-texture magenta
const PLACEHOLDER: Color = Color::new(1.0, 0.0, 1.0, 1.0);
const HUD_TEXT: Color = Color::new(0.08, 0.08, 0.08, 1.0);

/// Draw the whole world for this frame
pub fn draw_world(world: &World, assets: &Assets) {
    clear_background(SKY);
    draw_background(world.camera.offset, &assets.background);

    for platform in &world.platforms {
        draw_sprite(&assets.tile, &world.camera.apply(&platform.rect), PLATFORM_FILL);
    }
    for coin in &world.coins {
        draw_coin(&assets.coin, &world.camera.apply(&coin.rect));
    }
    for enemy in &world.enemies {
        draw_sprite(&assets.enemy, &world.camera.apply(&enemy.rect), ENEMY_FILL);
    }
    for projectile in &world.projectiles {
        let tex = match projectile.kind {
            crate::game::entities::ProjectileKind::Lipstick => &assets.lipstick,
            crate::game::entities::ProjectileKind::Polish => &assets.polish,
        };
        draw_sprite(tex, &world.camera.apply(&projectile.rect), PLACEHOLDER);
    }
    draw_sprite(&assets.player, &world.camera.apply(&world.player.rect), PLACEHOLDER);

    draw_text(
        &format!("Level: {}   Coins: {}", world.level, world.player.coins),
        10.0,
        24.0,
        28.0,
        HUD_TEXT,
    );
}

/// Win-screen overlay, drawn on top of the last frame of the world
pub fn draw_win_screen() {
    draw_text(
        "You finished Glamrun! Press ESC to exit.",
        WINDOW_WIDTH * 0.5 - 220.0,
        WINDOW_HEIGHT * 0.5,
        28.0,
        HUD_TEXT,
    );
}

/// Horizontally tiled background layer scrolling slower than the camera
fn draw_background(camera_offset: f32, background: &Option<Texture2D>) {
    let Some(bg) = background else { return };
    let bgw = bg.width();
    if bgw <= 0.0 {
        return;
    }
    let start_x = (-(camera_offset * PARALLAX_FACTOR)).rem_euclid(bgw);
    let mut x = start_x - bgw;
    while x < WINDOW_WIDTH + bgw {
        draw_texture(bg, x, 0.0, WHITE);
        x += bgw;
    }
}

/// Texture stretched to the rect, or a solid fill when it failed to load
fn draw_sprite(texture: &Option<Texture2D>, rect: &Rect, fallback: Color) {
    match texture {
        Some(tex) => draw_texture_ex(
            tex,
            rect.x,
            rect.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, fallback),
    }
}

/// Coins get a drawn circle rather than a square placeholder
fn draw_coin(texture: &Option<Texture2D>, rect: &Rect) {
    match texture {
        Some(_) => draw_sprite(texture, rect, COIN_FILL),
        None => draw_circle(rect.center_x(), rect.center_y(), rect.w * 0.5, COIN_FILL),
    }
}
