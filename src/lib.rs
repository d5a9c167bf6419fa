//! Nova Barrage - procedural content core for an arcade space shooter
//!
//! Core modules:
//! - `rng`: Deterministic seeded sequence source
//! - `difficulty`: Difficulty tiers and every scaling table
//! - `level`: Level plans (spawn schedules, theming, bosses) and their generator
//! - `bullets`: Bullet pattern catalog, geometry library, live simulation
//!
//! This crate is a pure, single-threaded logic core. Rendering, input, audio,
//! collision and persistence are external collaborators: they consume the
//! plans and projectile snapshots produced here and feed back spawn origins
//! and frame deltas, but no platform dependency crosses into this crate.

pub mod bullets;
pub mod difficulty;
pub mod level;
pub mod rng;

pub use bullets::{BulletEngine, PatternSpec, Projectile, Topology, WaveSpec};
pub use difficulty::{Archetype, Difficulty};
pub use level::{Level, LevelGenerator, LevelStats, WorldBounds};
pub use rng::SeededRng;

use glam::Vec2;

/// Shared tuning constants
pub mod consts {
    /// Default playfield width in pixels
    pub const WORLD_WIDTH: f32 = 800.0;
    /// Default playfield height in pixels
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Horizontal margin kept free of spawns at both edges
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Entities enter from just above the top edge (screen coords, y down)
    pub const SPAWN_ENTRY_Y: f32 = -50.0;

    /// Probability that a level plan includes a boss
    pub const BOSS_CHANCE: f32 = 0.30;
    /// Fraction of the level duration at which the boss spawns
    pub const BOSS_SPAWN_FRACTION: f32 = 0.8;
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn unit_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Offset of length `radius` along `angle` (radians)
#[inline]
pub fn polar_offset(radius: f32, angle: f32) -> Vec2 {
    Vec2::new(radius * angle.cos(), radius * angle.sin())
}
