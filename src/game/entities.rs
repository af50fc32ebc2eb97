//! Non-player entities
//!
//! Platforms, patrolling enemies, coins and projectiles. These are plain
//! data structs with self-contained per-frame updates; cross-entity rules
//! (hits, pickups, stomps) live in the world tick.

use super::constants::*;
use super::rect::Rect;

// =============================================================================
// Platforms
// =============================================================================

/// A static platform the player collides with
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }

    /// A single default-sized platform tile
    pub fn tile(x: f32, y: f32) -> Self {
        Self::new(x, y, TILE_SIZE, TILE_SIZE * 0.5)
    }
}

// =============================================================================
// Enemies
// =============================================================================

/// A patrolling enemy. No gravity, no platform collision: the patrol
/// trusts the level geometry it was placed on.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub rect: Rect,
    /// Spawn-point x the patrol is measured from
    origin_x: f32,
    /// Maximum displacement from the origin before reversing
    patrol: f32,
    /// Signed speed; magnitude stays constant, sign flips at the bounds
    pub speed: f32,
}

impl Enemy {
    /// Spawn an enemy with its feet at (x, bottom)
    pub fn new(x: f32, bottom: f32, patrol_width: f32) -> Self {
        Self {
            rect: Rect::mid_bottom_at(x, bottom, ENEMY_WIDTH, ENEMY_HEIGHT),
            origin_x: x,
            patrol: patrol_width,
            speed: ENEMY_SPEED,
        }
    }

    /// Advance one patrol step, reversing at the patrol bounds
    pub fn update(&mut self) {
        self.rect.x += self.speed;
        if self.rect.x > self.origin_x + self.patrol {
            self.speed = -self.speed.abs();
        }
        if self.rect.x < self.origin_x - self.patrol {
            self.speed = self.speed.abs();
        }
    }
}

// =============================================================================
// Coins
// =============================================================================

/// A collectible coin
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    /// Spawn a coin centered at (x, y)
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::centered_at(x, y, COIN_SIZE, COIN_SIZE),
        }
    }
}

// =============================================================================
// Projectiles
// =============================================================================

/// The two shot types; consecutive shots strictly alternate between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    Lipstick,
    Polish,
}

/// A fired projectile with a slight ballistic arc
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub kind: ProjectileKind,
}

impl Projectile {
    /// Spawn a projectile centered at (x, y) travelling in `facing` (±1)
    pub fn new(x: f32, y: f32, facing: f32, kind: ProjectileKind) -> Self {
        Self {
            rect: Rect::centered_at(x, y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            vx: PROJECTILE_SPEED * facing,
            vy: PROJECTILE_LIFT,
            kind,
        }
    }

    /// Advance one frame. Returns false once the projectile leaves the
    /// culling window and should be removed from the live set.
    pub fn update(&mut self) -> bool {
        self.rect.x += self.vx;
        self.vy += PROJECTILE_GRAVITY;
        self.rect.y += self.vy;

        self.rect.x >= CULL_MIN_X && self.rect.x <= CULL_MAX_X && self.rect.y <= CULL_MAX_Y
    }
}
