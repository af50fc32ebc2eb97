//! Asset loading
//!
//! Everything loads once at startup, best-effort. A missing or unreadable
//! image leaves a `None` behind and the renderer substitutes a solid
//! placeholder of the right size; a missing sound simply never plays.
//! No asset failure is ever fatal.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

/// All textures and sounds the game uses. Every slot is optional.
pub struct Assets {
    pub player: Option<Texture2D>,
    pub tile: Option<Texture2D>,
    pub enemy: Option<Texture2D>,
    pub coin: Option<Texture2D>,
    pub lipstick: Option<Texture2D>,
    pub polish: Option<Texture2D>,
    /// Parallax background layer
    pub background: Option<Texture2D>,
    pub jump: Option<Sound>,
    pub music: Option<Sound>,
}

impl Assets {
    /// Load everything from the assets directory
    pub async fn load() -> Self {
        Self {
            player: try_texture("assets/player.png").await,
            tile: try_texture("assets/tiles/ground.png").await,
            enemy: try_texture("assets/enemy.png").await,
            coin: try_texture("assets/coin.png").await,
            lipstick: try_texture("assets/lipstick.png").await,
            polish: try_texture("assets/polish.png").await,
            background: try_texture("assets/tiles/bg_layer1.png").await,
            jump: try_sound("assets/music/jump.wav").await,
            music: try_sound("assets/music/bg1.wav").await,
        }
    }
}

async fn try_texture(path: &str) -> Option<Texture2D> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Nearest);
            Some(tex)
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}, using placeholder", path, e);
            None
        }
    }
}

async fn try_sound(path: &str) -> Option<Sound> {
    // Absent audio is imperceptible failure; no placeholder, no log
    load_sound(path).await.ok()
}
