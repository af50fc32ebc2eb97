//! Core simulation
//!
//! Everything that happens inside one frame of the game, kept free of
//! windowing, rendering, and audio so it runs headless under test:
//! - Entity: player, platforms, enemies, coins, projectiles (plain data
//!   plus per-type updates)
//! - World: owns the entity collections and runs the per-frame tick
//! - Events: what the tick wants the outer loop to do (sounds, logging)
//!
//! All motion is in fixed per-frame increments; the outer loop paces
//! frames at 60 FPS rather than scaling physics by elapsed time.

pub mod camera;
pub mod constants;
pub mod entities;
pub mod event;
pub mod level;
pub mod player;
pub mod rect;
pub mod world;

pub use event::Events;
pub use world::{Mode, World};
