//! Level plans and their generator
//!
//! A [`Level`] is a static, immutable plan: timed spawn schedules for enemies,
//! power-ups and obstacles, a background theme, a music cue and an optional
//! boss. Plans describe *what should appear when*; materializing entities as
//! the level clock crosses each spawn offset is the runtime collaborator's
//! job, not this module's.

pub mod generator;
pub mod plan;

pub use generator::LevelGenerator;
pub use plan::{
    Ability, BackgroundEffect, BackgroundTheme, BossAttack, BossDescriptor, BossKind, EnemySpawn,
    Level, LevelStats, MusicCue, ObstacleKind, ObstacleSpawn, PowerUpKind, PowerUpSpawn, Rarity,
    WorldBounds,
};
