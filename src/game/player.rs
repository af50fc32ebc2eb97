//! Player character
//!
//! Movement, jumping and shooting, plus axis-separated collision against
//! the static platforms. The update order is load-bearing: horizontal
//! motion is applied and resolved before vertical motion, which is what
//! keeps the player from tunneling into or sticking to platform corners.

use macroquad::math::{vec2, Vec2};

use super::constants::*;
use super::entities::{Platform, Projectile, ProjectileKind};
use super::event::{Events, FiredEvent, JumpedEvent};
use super::rect::Rect;
use crate::input::InputSnapshot;

/// The player character. Created once per run; death resets it in place.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// Resting on a platform top? Recomputed from scratch every frame.
    pub grounded: bool,
    /// Facing direction, +1.0 or -1.0
    pub facing: f32,
    pub coins: u32,
    /// Frames until the next shot is allowed
    shoot_cooldown: i32,
    /// Counts shots so consecutive ones alternate kind
    shot_parity: u32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            grounded: false,
            facing: 1.0,
            coins: 0,
            shoot_cooldown: 0,
            shot_parity: 0,
        }
    }

    /// Player at the fixed spawn point
    pub fn at_spawn() -> Self {
        Self::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y)
    }

    /// Run one frame of player simulation
    pub fn update(
        &mut self,
        platforms: &[Platform],
        input: &InputSnapshot,
        projectiles: &mut Vec<Projectile>,
        events: &mut Events,
    ) {
        // Horizontal velocity comes straight from the held keys; no
        // acceleration or friction model.
        self.vel.x = 0.0;
        if input.left {
            self.vel.x = -PLAYER_SPEED;
            self.facing = -1.0;
        }
        if input.right {
            self.vel.x = PLAYER_SPEED;
            self.facing = 1.0;
        }

        // Gravity, clamped to terminal fall speed
        self.vel.y += GRAVITY;
        if self.vel.y > MAX_FALL_SPEED {
            self.vel.y = MAX_FALL_SPEED;
        }

        // Jump overrides the accumulated gravity for this frame
        if input.jump && self.grounded {
            self.vel.y = -JUMP_POWER;
            self.grounded = false;
            events.jumped.send(JumpedEvent);
        }

        if input.shoot && self.shoot_cooldown <= 0 {
            let kind = self.shoot(projectiles);
            self.shoot_cooldown = SHOOT_COOLDOWN_FRAMES;
            events.fired.send(FiredEvent { kind });
        }
        if self.shoot_cooldown > 0 {
            self.shoot_cooldown -= 1;
        }

        // Move and collide, one axis at a time
        self.rect.x += self.vel.x;
        self.resolve_horizontal(platforms);
        self.rect.y += self.vel.y;
        self.grounded = false;
        self.resolve_vertical(platforms);
    }

    /// Snap out of any platform overlapped by horizontal motion
    fn resolve_horizontal(&mut self, platforms: &[Platform]) {
        for p in platforms {
            if self.rect.overlaps(&p.rect) {
                if self.vel.x > 0.0 {
                    self.rect.x = p.rect.x - self.rect.w;
                } else if self.vel.x < 0.0 {
                    self.rect.x = p.rect.right();
                }
                self.vel.x = 0.0;
            }
        }
    }

    /// Snap out of any platform overlapped by vertical motion,
    /// setting grounded when landing on a top surface
    fn resolve_vertical(&mut self, platforms: &[Platform]) {
        for p in platforms {
            if self.rect.overlaps(&p.rect) {
                if self.vel.y > 0.0 {
                    self.rect.y = p.rect.y - self.rect.h;
                    self.grounded = true;
                    self.vel.y = 0.0;
                } else if self.vel.y < 0.0 {
                    self.rect.y = p.rect.bottom();
                    self.vel.y = 0.0;
                }
            }
        }
    }

    /// Spawn one projectile in front of the player, alternating kinds
    fn shoot(&mut self, projectiles: &mut Vec<Projectile>) -> ProjectileKind {
        let kind = if self.shot_parity % 2 == 0 {
            ProjectileKind::Lipstick
        } else {
            ProjectileKind::Polish
        };
        self.shot_parity += 1;

        let x = self.rect.center_x() + SHOT_OFFSET_X * self.facing;
        let y = self.rect.center_y() + SHOT_OFFSET_Y;
        projectiles.push(Projectile::new(x, y, self.facing, kind));
        kind
    }

    /// Reset to spawn after an enemy catches the player: teleport,
    /// zero velocity, dock coins (floored at zero). Returns coins lost.
    pub fn punish(&mut self) -> u32 {
        self.rect.x = PLAYER_SPAWN_X;
        self.rect.y = PLAYER_SPAWN_Y;
        self.vel = vec2(0.0, 0.0);
        let lost = self.coins.min(DEATH_COIN_PENALTY);
        self.coins -= lost;
        lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_input() -> InputSnapshot {
        InputSnapshot::default()
    }

    /// Ground strip plus a wall, enough for most movement tests
    fn ground() -> Vec<Platform> {
        vec![Platform::new(0.0, 536.0, 3000.0, 64.0)]
    }

    /// Run updates until the player comes to rest on the ground
    fn settle(player: &mut Player, platforms: &[Platform]) {
        let mut events = Events::new();
        let mut projectiles = Vec::new();
        for _ in 0..100 {
            player.update(platforms, &no_input(), &mut projectiles, &mut events);
            if player.grounded {
                return;
            }
        }
        panic!("player never landed");
    }

    #[test]
    fn test_landing_snaps_to_platform_top() {
        let platforms = ground();
        let mut player = Player::new(100.0, 400.0);
        settle(&mut player, &platforms);

        assert!((player.rect.bottom() - 536.0).abs() < 0.001);
        assert!(player.grounded);
        assert_eq!(player.vel.y, 0.0);
    }

    #[test]
    fn test_horizontal_collision_snaps_and_zeroes_velocity() {
        let mut platforms = ground();
        // Wall directly to the player's right
        platforms.push(Platform::new(200.0, 400.0, 64.0, 136.0));

        let mut player = Player::new(150.0, 440.0);
        let mut events = Events::new();
        let mut projectiles = Vec::new();
        let input = InputSnapshot {
            right: true,
            ..Default::default()
        };
        for _ in 0..30 {
            player.update(&platforms, &input, &mut projectiles, &mut events);
        }

        assert!((player.rect.right() - 200.0).abs() < 0.001);
        assert_eq!(player.vel.x, 0.0);
        for p in &platforms {
            assert!(!player.rect.overlaps(&p.rect));
        }
    }

    #[test]
    fn test_ceiling_hit_zeroes_upward_velocity() {
        let platforms = vec![Platform::new(0.0, 320.0, 500.0, 32.0)];
        let mut player = Player::new(100.0, 360.0);
        player.vel.y = -10.0;

        let mut events = Events::new();
        let mut projectiles = Vec::new();
        player.update(&platforms, &no_input(), &mut projectiles, &mut events);

        assert!((player.rect.y - 352.0).abs() < 0.001);
        assert_eq!(player.vel.y, 0.0);
        assert!(!player.grounded);
    }

    #[test]
    fn test_jump_applies_impulse_and_clears_grounded() {
        let platforms = ground();
        let mut player = Player::at_spawn();
        settle(&mut player, &platforms);

        let mut events = Events::new();
        let mut projectiles = Vec::new();
        let input = InputSnapshot {
            jump: true,
            ..Default::default()
        };
        player.update(&platforms, &input, &mut projectiles, &mut events);

        assert_eq!(player.vel.y, -JUMP_POWER);
        assert!(!player.grounded);
        assert_eq!(events.jumped.len(), 1);
    }

    #[test]
    fn test_jump_requires_ground() {
        let platforms = ground();
        let mut player = Player::new(100.0, 200.0); // airborne
        let mut events = Events::new();
        let mut projectiles = Vec::new();
        let input = InputSnapshot {
            jump: true,
            ..Default::default()
        };
        player.update(&platforms, &input, &mut projectiles, &mut events);

        assert!(events.jumped.is_empty());
        assert!(player.vel.y > -JUMP_POWER);
    }

    #[test]
    fn test_shots_alternate_strictly() {
        let mut player = Player::at_spawn();
        let mut projectiles = Vec::new();

        for _ in 0..4 {
            player.shoot(&mut projectiles);
        }

        assert_eq!(projectiles.len(), 4);
        assert_eq!(projectiles[0].kind, ProjectileKind::Lipstick);
        assert_eq!(projectiles[1].kind, ProjectileKind::Polish);
        assert_eq!(projectiles[2].kind, ProjectileKind::Lipstick);
        assert_eq!(projectiles[3].kind, ProjectileKind::Polish);
    }

    #[test]
    fn test_shot_spawn_offset_follows_facing() {
        let mut player = Player::at_spawn();
        let mut projectiles = Vec::new();

        player.facing = 1.0;
        player.shoot(&mut projectiles);
        player.facing = -1.0;
        player.shoot(&mut projectiles);

        let cx = player.rect.center_x();
        assert!(projectiles[0].rect.center_x() > cx);
        assert!(projectiles[1].rect.center_x() < cx);
        // Same vertical offset regardless of facing
        assert!((projectiles[0].rect.y - projectiles[1].rect.y).abs() < 0.001);
    }

    #[test]
    fn test_shoot_cooldown_blocks_repeat_fire() {
        let platforms = ground();
        let mut player = Player::at_spawn();
        settle(&mut player, &platforms);

        let mut events = Events::new();
        let mut projectiles = Vec::new();
        let input = InputSnapshot {
            shoot: true,
            ..Default::default()
        };

        player.update(&platforms, &input, &mut projectiles, &mut events);
        assert_eq!(projectiles.len(), 1);

        // Held trigger stays silent until the cooldown runs out
        for _ in 0..SHOOT_COOLDOWN_FRAMES - 1 {
            player.update(&platforms, &input, &mut projectiles, &mut events);
            assert_eq!(projectiles.len(), 1);
        }
        player.update(&platforms, &input, &mut projectiles, &mut events);
        assert_eq!(projectiles.len(), 2);
    }

    #[test]
    fn test_punish_resets_and_floors_coins() {
        let mut player = Player::new(700.0, 100.0);
        player.vel = vec2(3.0, -5.0);
        player.coins = 2;

        let lost = player.punish();

        assert_eq!(lost, 2);
        assert_eq!(player.coins, 0);
        assert!((player.rect.x - PLAYER_SPAWN_X).abs() < 0.001);
        assert!((player.rect.y - PLAYER_SPAWN_Y).abs() < 0.001);
        assert_eq!(player.vel, Vec2::ZERO);

        player.coins = 10;
        assert_eq!(player.punish(), DEATH_COIN_PENALTY);
        assert_eq!(player.coins, 10 - DEATH_COIN_PENALTY);
    }

    #[test]
    fn test_fall_speed_clamped() {
        let platforms: Vec<Platform> = Vec::new();
        let mut player = Player::new(0.0, 0.0);
        let mut events = Events::new();
        let mut projectiles = Vec::new();
        for _ in 0..100 {
            player.update(&platforms, &no_input(), &mut projectiles, &mut events);
        }
        assert_eq!(player.vel.y, MAX_FALL_SPEED);
    }
}
