//! Tuning constants for the simulation and presentation.
//!
//! All motion is in fixed per-frame increments at the 60 FPS target,
//! so these are pixels-per-frame values, not pixels-per-second.

/// Window width in pixels
pub const WINDOW_WIDTH: f32 = 900.0;
/// Window height in pixels
pub const WINDOW_HEIGHT: f32 = 600.0;
/// Target simulation rate (frames per second)
pub const TARGET_FPS: f64 = 60.0;

/// Default platform tile width
pub const TILE_SIZE: f32 = 64.0;

// =============================================================================
// Player
// =============================================================================

/// Downward acceleration applied to the player every frame
pub const GRAVITY: f32 = 0.5;
/// Terminal fall speed
pub const MAX_FALL_SPEED: f32 = 18.0;
/// Horizontal run speed
pub const PLAYER_SPEED: f32 = 4.5;
/// Upward jump impulse (applied as negative y velocity)
pub const JUMP_POWER: f32 = 11.0;
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 56.0;
/// Fixed respawn point, also the start of every level
pub const PLAYER_SPAWN_X: f32 = 50.0;
pub const PLAYER_SPAWN_Y: f32 = WINDOW_HEIGHT - 200.0;
/// Frames between shots
pub const SHOOT_COOLDOWN_FRAMES: i32 = 12;
/// Projectile spawn offset from the player's center, along the facing direction
pub const SHOT_OFFSET_X: f32 = 20.0;
pub const SHOT_OFFSET_Y: f32 = -8.0;
/// Upward bounce after stomping an enemy
pub const STOMP_BOUNCE: f32 = -6.0;
/// Coins lost when an enemy catches the player
pub const DEATH_COIN_PENALTY: u32 = 3;

// =============================================================================
// Enemies / coins / projectiles
// =============================================================================

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 40.0;
/// Patrol speed magnitude; the sign flips at the patrol bounds
pub const ENEMY_SPEED: f32 = 1.7;

pub const COIN_SIZE: f32 = 20.0;

pub const PROJECTILE_WIDTH: f32 = 10.0;
pub const PROJECTILE_HEIGHT: f32 = 6.0;
/// Horizontal projectile speed (sign comes from the firing direction)
pub const PROJECTILE_SPEED: f32 = 8.0;
/// Initial upward lift giving shots a slight arc
pub const PROJECTILE_LIFT: f32 = -1.2;
/// Per-frame gravity on projectiles (much weaker than player gravity)
pub const PROJECTILE_GRAVITY: f32 = 0.18;
/// Generous off-world culling window; not a screen-boundary test
pub const CULL_MIN_X: f32 = -2000.0;
pub const CULL_MAX_X: f32 = 20000.0;
pub const CULL_MAX_Y: f32 = 2000.0;

// =============================================================================
// Camera / progression
// =============================================================================

/// The camera keeps the player roughly a third of the way into the window
pub const CAMERA_LEAD: f32 = 0.33;
/// Background layer scroll factor relative to the camera
pub const PARALLAX_FACTOR: f32 = 0.3;

/// Distance from the level end at which the transition fires
pub const LEVEL_END_MARGIN: f32 = 50.0;
/// Completing this level wins the game
pub const FINAL_LEVEL: u32 = 3;

/// Background track volume
pub const MUSIC_VOLUME: f32 = 0.4;
