//! Bullet pattern catalog, geometry and live simulation
//!
//! - `catalog`: the closed, hand-authored pattern/wave catalog
//! - `geometry`: ten pure placement rules, one per topology
//! - `engine`: live projectile list plus the active pattern/wave timers
//!
//! The engine owns all live bullet state exclusively; collaborators read it
//! through snapshot getters and never mutate it.

pub mod catalog;
pub mod engine;
pub mod geometry;

pub use catalog::{
    PatternSpec, Topology, WaveSpec, all_patterns, all_waves, pattern, patterns_by_difficulty,
    wave, waves_by_difficulty,
};
pub use engine::BulletEngine;
pub use geometry::{PALETTE, Projectile};
