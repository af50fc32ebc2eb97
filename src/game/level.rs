//! Level layouts
//!
//! Three hand-authored levels as static data. No generation, no
//! validation: the tables below are the levels.

use super::constants::WINDOW_HEIGHT;
use super::entities::{Coin, Enemy, Platform};

/// Everything the world swaps out on a level transition
#[derive(Debug, Clone)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    /// World-space x at which the level ends
    pub length: f32,
}

impl Level {
    /// Build the layout for a level index. Indices 1 and 2 have bespoke
    /// layouts; everything else falls through to the third layout. The
    /// loop never asks for an index past 3 (the win screen intercepts
    /// first), so the catch-all is only ever reached as level 3.
    pub fn build(index: u32) -> Self {
        let h = WINDOW_HEIGHT;
        match index {
            1 => Self {
                platforms: vec![
                    Platform::new(0.0, h - 64.0, 3000.0, 64.0),
                    Platform::new(400.0, h - 160.0, 160.0, 32.0),
                    Platform::new(700.0, h - 240.0, 160.0, 32.0),
                    Platform::new(1100.0, h - 200.0, 220.0, 32.0),
                ],
                enemies: vec![
                    Enemy::new(600.0, h - 64.0, 200.0),
                    Enemy::new(1250.0, h - 200.0, 120.0),
                ],
                coins: vec![
                    Coin::new(420.0, h - 200.0 - 30.0),
                    Coin::new(720.0, h - 240.0 - 30.0),
                ],
                length: 1800.0,
            },
            2 => Self {
                platforms: vec![
                    Platform::new(0.0, h - 64.0, 3000.0, 64.0),
                    Platform::new(350.0, h - 220.0, 200.0, 32.0),
                    Platform::new(620.0, h - 300.0, 200.0, 32.0),
                    Platform::new(950.0, h - 220.0, 200.0, 32.0),
                ],
                enemies: vec![
                    Enemy::new(500.0, h - 64.0, 300.0),
                    Enemy::new(900.0, h - 220.0, 160.0),
                ],
                coins: [380.0, 660.0, 980.0, 1400.0, 1500.0]
                    .iter()
                    .map(|&x| Coin::new(x, h - 220.0 - 30.0))
                    .collect(),
                length: 2200.0,
            },
            _ => Self {
                platforms: vec![
                    Platform::new(0.0, h - 64.0, 4000.0, 64.0),
                    Platform::new(450.0, h - 200.0, 200.0, 32.0),
                    Platform::new(800.0, h - 260.0, 200.0, 32.0),
                ],
                enemies: vec![
                    Enemy::new(700.0, h - 64.0, 400.0),
                    Enemy::new(1700.0, h - 64.0, 500.0),
                ],
                coins: (500..1900)
                    .step_by(200)
                    .map(|x| Coin::new(x as f32 + 40.0, h - 64.0 - 30.0))
                    .collect(),
                length: 3000.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_layout_table() {
        let level = Level::build(1);
        assert_eq!(level.platforms.len(), 4);
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.coins.len(), 2);
        assert_eq!(level.length, 1800.0);

        // Ground strip spans the whole level
        let ground = &level.platforms[0];
        assert_eq!(ground.rect.x, 0.0);
        assert_eq!(ground.rect.y, 536.0);
        assert_eq!(ground.rect.w, 3000.0);
    }

    #[test]
    fn test_level_two_layout_table() {
        let level = Level::build(2);
        assert_eq!(level.platforms.len(), 4);
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.coins.len(), 5);
        assert_eq!(level.length, 2200.0);
    }

    #[test]
    fn test_level_three_is_the_catch_all() {
        let three = Level::build(3);
        assert_eq!(three.platforms.len(), 3);
        assert_eq!(three.enemies.len(), 2);
        assert_eq!(three.coins.len(), 7);
        assert_eq!(three.length, 3000.0);

        // Any higher index yields the same layout
        let seven = Level::build(7);
        assert_eq!(seven.platforms.len(), three.platforms.len());
        assert_eq!(seven.coins.len(), three.coins.len());
        assert_eq!(seven.length, three.length);
    }

    #[test]
    fn test_no_level_places_overlapping_platforms_above_ground() {
        // Collision resolution handles overlapping platforms in iteration
        // order; the layouts avoid depending on that by never overlapping
        // the floating platforms.
        for index in 1..=3 {
            let level = Level::build(index);
            let floats = &level.platforms[1..];
            for (i, a) in floats.iter().enumerate() {
                for b in &floats[i + 1..] {
                    assert!(!a.rect.overlaps(&b.rect));
                }
            }
        }
    }
}
