//! Level plan data model
//!
//! Everything here is descriptive data: spawn records carry a time offset
//! (ms, relative to level start), a position and category attributes, but
//! never move by themselves. All types serialize so a plan can be persisted
//! or shipped to tooling as-is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::difficulty::{Archetype, Difficulty};

/// Playfield dimensions supplied by the host (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            width: consts::WORLD_WIDTH,
            height: consts::WORLD_HEIGHT,
        }
    }
}

/// Enemy special abilities (each enemy gets 1-3 unique ones)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    Shielded,
    Cloaking,
    Teleport,
    Regenerating,
    SplitOnDeath,
    HomingShots,
    SpeedBurst,
    EmpPulse,
}

impl Ability {
    pub const ALL: [Ability; 8] = [
        Ability::Shielded,
        Ability::Cloaking,
        Ability::Teleport,
        Ability::Regenerating,
        Ability::SplitOnDeath,
        Ability::HomingShots,
        Ability::SpeedBurst,
        Ability::EmpPulse,
    ];
}

/// A scheduled enemy appearance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Spawn time offset from level start (ms)
    pub offset: f32,
    pub pos: Vec2,
    pub archetype: Archetype,
    pub health: f32,
    /// Travel speed in px/s
    pub speed: f32,
    pub damage: f32,
    pub abilities: Vec<Ability>,
}

/// Power-up categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    RepairKit,
    Shield,
    RapidFire,
    SpreadShot,
    LaserBeam,
    NovaBomb,
    Magnet,
    ScoreMultiplier,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 8] = [
        PowerUpKind::RepairKit,
        PowerUpKind::Shield,
        PowerUpKind::RapidFire,
        PowerUpKind::SpreadShot,
        PowerUpKind::LaserBeam,
        PowerUpKind::NovaBomb,
        PowerUpKind::Magnet,
        PowerUpKind::ScoreMultiplier,
    ];

    /// Base effect duration (ms). Instant effects report zero.
    pub fn base_duration(&self) -> f32 {
        match self {
            PowerUpKind::RepairKit => 0.0,
            PowerUpKind::Shield => 8000.0,
            PowerUpKind::RapidFire => 6000.0,
            PowerUpKind::SpreadShot => 7000.0,
            PowerUpKind::LaserBeam => 5000.0,
            PowerUpKind::NovaBomb => 0.0,
            PowerUpKind::Magnet => 10000.0,
            PowerUpKind::ScoreMultiplier => 12000.0,
        }
    }

    /// Base effect magnitude. Meaning is category-specific (hp restored,
    /// shield points, fire-rate multiplier, blast damage, pull radius...).
    pub fn base_value(&self) -> f32 {
        match self {
            PowerUpKind::RepairKit => 25.0,
            PowerUpKind::Shield => 50.0,
            PowerUpKind::RapidFire => 2.0,
            PowerUpKind::SpreadShot => 3.0,
            PowerUpKind::LaserBeam => 40.0,
            PowerUpKind::NovaBomb => 100.0,
            PowerUpKind::Magnet => 150.0,
            PowerUpKind::ScoreMultiplier => 2.0,
        }
    }
}

/// Power-up rarity, classified from a single sequence draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Classify a draw in `[0, 1)`: <0.60 common, <0.80 rare, <0.95 epic,
    /// else legendary.
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.60 {
            Rarity::Common
        } else if roll < 0.80 {
            Rarity::Rare
        } else if roll < 0.95 {
            Rarity::Epic
        } else {
            Rarity::Legendary
        }
    }

    pub fn duration_mult(&self) -> f32 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
        }
    }

    pub fn value_mult(&self) -> f32 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Epic => 2.5,
            Rarity::Legendary => 4.0,
        }
    }
}

/// A scheduled power-up drop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpSpawn {
    /// Spawn time offset from level start (ms)
    pub offset: f32,
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub rarity: Rarity,
    /// Effect duration (ms), already rarity-scaled
    pub duration: f32,
    /// Effect magnitude, already rarity-scaled
    pub value: f32,
}

/// Obstacle categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Asteroid,
    Mine,
    LaserGate,
    Turret,
    GravityWell,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::Asteroid,
        ObstacleKind::Mine,
        ObstacleKind::LaserGate,
        ObstacleKind::Turret,
        ObstacleKind::GravityWell,
    ];

    pub fn base_damage(&self) -> f32 {
        match self {
            ObstacleKind::Asteroid => 15.0,
            ObstacleKind::Mine => 40.0,
            ObstacleKind::LaserGate => 10.0,
            ObstacleKind::Turret => 8.0,
            ObstacleKind::GravityWell => 5.0,
        }
    }

    /// Base lifetime on the field (ms)
    pub fn base_duration(&self) -> f32 {
        match self {
            ObstacleKind::Asteroid => 20000.0,
            ObstacleKind::Mine => 15000.0,
            ObstacleKind::LaserGate => 8000.0,
            ObstacleKind::Turret => 12000.0,
            ObstacleKind::GravityWell => 10000.0,
        }
    }

    /// How the obstacle harms the player
    pub fn effect(&self) -> &'static str {
        match self {
            ObstacleKind::Asteroid => "impact",
            ObstacleKind::Mine => "explosion",
            ObstacleKind::LaserGate => "beam",
            ObstacleKind::Turret => "turret-fire",
            ObstacleKind::GravityWell => "pull",
        }
    }
}

/// A scheduled obstacle appearance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSpawn {
    /// Spawn time offset from level start (ms)
    pub offset: f32,
    pub pos: Vec2,
    pub kind: ObstacleKind,
    /// Contact damage, already tier-scaled
    pub damage: f32,
    /// Lifetime on the field (ms)
    pub duration: f32,
}

/// Background themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundTheme {
    Nebula,
    DeepSpace,
    AsteroidBelt,
    IonStorm,
    GalacticCore,
    CrimsonVoid,
}

impl BackgroundTheme {
    pub const ALL: [BackgroundTheme; 6] = [
        BackgroundTheme::Nebula,
        BackgroundTheme::DeepSpace,
        BackgroundTheme::AsteroidBelt,
        BackgroundTheme::IonStorm,
        BackgroundTheme::GalacticCore,
        BackgroundTheme::CrimsonVoid,
    ];
}

/// Ambient background effect tags (a level gets 1-3 unique ones)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundEffect {
    Starfield,
    DustDrift,
    Aurora,
    LightningArcs,
    MeteorShower,
    SolarFlare,
}

impl BackgroundEffect {
    pub const ALL: [BackgroundEffect; 6] = [
        BackgroundEffect::Starfield,
        BackgroundEffect::DustDrift,
        BackgroundEffect::Aurora,
        BackgroundEffect::LightningArcs,
        BackgroundEffect::MeteorShower,
        BackgroundEffect::SolarFlare,
    ];
}

/// Music cues the audio collaborator can map to tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicCue {
    PulseRunner,
    NeonAssault,
    DarkOrbit,
    Hyperdrive,
    FinalSector,
}

impl MusicCue {
    pub const ALL: [MusicCue; 5] = [
        MusicCue::PulseRunner,
        MusicCue::NeonAssault,
        MusicCue::DarkOrbit,
        MusicCue::Hyperdrive,
        MusicCue::FinalSector,
    ];
}

/// Boss kinds, each with its own base health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossKind {
    DreadnoughtPrime,
    VoidLeviathan,
    TwinReaper,
    OmegaCore,
}

impl BossKind {
    pub const ALL: [BossKind; 4] = [
        BossKind::DreadnoughtPrime,
        BossKind::VoidLeviathan,
        BossKind::TwinReaper,
        BossKind::OmegaCore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BossKind::DreadnoughtPrime => "Dreadnought Prime",
            BossKind::VoidLeviathan => "Void Leviathan",
            BossKind::TwinReaper => "Twin Reaper",
            BossKind::OmegaCore => "Omega Core",
        }
    }

    pub fn base_health(&self) -> f32 {
        match self {
            BossKind::DreadnoughtPrime => 800.0,
            BossKind::VoidLeviathan => 1200.0,
            BossKind::TwinReaper => 1500.0,
            BossKind::OmegaCore => 2000.0,
        }
    }
}

/// Boss special attacks (each boss gets 3-6 unique ones)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossAttack {
    BulletRing,
    LaserSweep,
    MissileBarrage,
    DroneSwarm,
    ShockwavePulse,
    BeamCross,
    MineDrop,
    PhaseShift,
}

impl BossAttack {
    pub const ALL: [BossAttack; 8] = [
        BossAttack::BulletRing,
        BossAttack::LaserSweep,
        BossAttack::MissileBarrage,
        BossAttack::DroneSwarm,
        BossAttack::ShockwavePulse,
        BossAttack::BeamCross,
        BossAttack::MineDrop,
        BossAttack::PhaseShift,
    ];
}

/// Optional end-of-level boss. Spawns at 80% of the level duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossDescriptor {
    pub kind: BossKind,
    /// Spawn time offset from level start (ms)
    pub offset: f32,
    /// Health, already tier-scaled
    pub health: f32,
    /// Fight phases (2-4)
    pub phases: u32,
    pub attacks: Vec<BossAttack>,
}

/// A complete level plan. Immutable after generation; regenerating the same
/// id replaces the stored plan wholesale (last generation wins, no merge).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    /// Constructor seed of the generator that produced this plan
    pub seed: u64,
    pub difficulty: Difficulty,
    /// Level length (ms)
    pub duration: f32,
    pub enemies: Vec<EnemySpawn>,
    pub power_ups: Vec<PowerUpSpawn>,
    pub obstacles: Vec<ObstacleSpawn>,
    pub background: BackgroundTheme,
    pub background_effects: Vec<BackgroundEffect>,
    pub music: MusicCue,
    pub boss: Option<BossDescriptor>,
}

/// Read-model summary of a stored plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelStats {
    pub id: String,
    pub difficulty: Difficulty,
    pub duration: f32,
    pub enemy_count: usize,
    pub power_up_count: usize,
    pub obstacle_count: usize,
    pub has_boss: bool,
}
