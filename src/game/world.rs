//! Game world
//!
//! Owns the player, the per-type entity collections, and the camera, and
//! runs one frame of simulation per tick: player update, enemy patrols,
//! projectile motion and culling, the fixed-priority pairwise collision
//! rules, camera follow, and level advancement.
//!
//! Entity collections are dense vectors; removals happen by index or
//! `retain`, never through shared references.

use super::camera::Camera;
use super::constants::*;
use super::entities::{Coin, Enemy, Platform, Projectile};
use super::event::{
    CoinCollectedEvent, EnemyStompedEvent, Events, GameWonEvent, LevelAdvancedEvent,
    PlayerHurtEvent,
};
use super::level::Level;
use super::player::Player;
use crate::input::InputSnapshot;

/// Top-level game mode. `Won` is terminal: the world stops simulating
/// and the outer loop waits for the player to acknowledge and quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Playing,
    Won,
}

pub struct World {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub projectiles: Vec<Projectile>,
    pub camera: Camera,
    /// Current level index, 1-based
    pub level: u32,
    pub level_length: f32,
    pub mode: Mode,
}

impl World {
    /// Fresh world at the start of level 1
    pub fn new() -> Self {
        let level = Level::build(1);
        Self {
            player: Player::at_spawn(),
            platforms: level.platforms,
            enemies: level.enemies,
            coins: level.coins,
            projectiles: Vec::new(),
            camera: Camera::new(),
            level: 1,
            level_length: level.length,
            mode: Mode::Playing,
        }
    }

    /// Run one frame of simulation
    pub fn tick(&mut self, input: &InputSnapshot, events: &mut Events) {
        if self.mode != Mode::Playing {
            return;
        }

        self.player
            .update(&self.platforms, input, &mut self.projectiles, events);

        for enemy in &mut self.enemies {
            enemy.update();
        }

        // Projectile motion; culled ones drop out of the live set here
        self.projectiles.retain_mut(|p| p.update());

        self.resolve_projectile_hits();
        self.resolve_player_vs_enemies(events);
        self.collect_coins(events);

        self.camera.update(&self.player.rect);

        self.check_level_advance(events);
    }

    /// Each projectile dies with the first enemy it overlaps
    fn resolve_projectile_hits(&mut self) {
        let Self {
            projectiles,
            enemies,
            ..
        } = self;
        projectiles.retain(|p| {
            if let Some(i) = enemies.iter().position(|e| p.rect.overlaps(&e.rect)) {
                enemies.remove(i);
                false
            } else {
                true
            }
        });
    }

    /// Descending onto an enemy destroys it and bounces the player;
    /// any other contact punishes the player. The bounce flips the
    /// velocity upward, so a second simultaneous overlap punishes.
    fn resolve_player_vs_enemies(&mut self, events: &mut Events) {
        let mut i = 0;
        while i < self.enemies.len() {
            if !self.player.rect.overlaps(&self.enemies[i].rect) {
                i += 1;
                continue;
            }
            if self.player.vel.y > 0.0 {
                let dead = self.enemies.remove(i);
                self.player.vel.y = STOMP_BOUNCE;
                events.enemy_stomped.send(EnemyStompedEvent {
                    x: dead.rect.center_x(),
                    y: dead.rect.center_y(),
                });
            } else {
                let coins_lost = self.player.punish();
                events.player_hurt.send(PlayerHurtEvent { coins_lost });
                i += 1;
            }
        }
    }

    /// Every overlapping coin is collected
    fn collect_coins(&mut self, events: &mut Events) {
        let Self { player, coins, .. } = self;
        coins.retain(|c| {
            if player.rect.overlaps(&c.rect) {
                player.coins += 1;
                events
                    .coin_collected
                    .send(CoinCollectedEvent { total: player.coins });
                false
            } else {
                true
            }
        });
    }

    /// Advance once the player's center crosses the level-end threshold.
    /// Past the final level the world enters the terminal win mode.
    fn check_level_advance(&mut self, events: &mut Events) {
        if self.player.rect.center_x() <= self.level_length - LEVEL_END_MARGIN {
            return;
        }

        self.level += 1;
        if self.level > FINAL_LEVEL {
            self.mode = Mode::Won;
            events.game_won.send(GameWonEvent);
            return;
        }

        self.load_level(self.level);
        events
            .level_advanced
            .send(LevelAdvancedEvent { level: self.level });
    }

    /// Swap in a level's entities and reset player position and camera
    fn load_level(&mut self, index: u32) {
        let level = Level::build(index);
        self.platforms = level.platforms;
        self.enemies = level.enemies;
        self.coins = level.coins;
        self.level_length = level.length;
        self.projectiles.clear();
        self.player.rect.x = PLAYER_SPAWN_X;
        self.player.rect.y = PLAYER_SPAWN_Y;
        self.camera.reset();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
