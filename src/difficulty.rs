//! Difficulty tiers and scaling tables
//!
//! Static lookup data only, no behavior: every count, multiplier and bullet
//! parameter in the crate is keyed off one of the five ordered tiers. Tier
//! lookups never fail; unrecognized names fall back to `Medium`.

use serde::{Deserialize, Serialize};

/// The five ordered difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Extreme,
    Nightmare,
}

impl Difficulty {
    /// All tiers, in ascending order
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
        Difficulty::Nightmare,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
            Difficulty::Nightmare => "nightmare",
        }
    }

    /// Parse a tier name. Unknown names fall back to `Medium` rather than fail.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" | "med" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "extreme" => Difficulty::Extreme,
            "nightmare" => Difficulty::Nightmare,
            _ => Difficulty::Medium,
        }
    }

    /// Enemies scheduled per level
    pub fn enemy_count(&self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 40,
            Difficulty::Hard => 80,
            Difficulty::Extreme => 160,
            Difficulty::Nightmare => 320,
        }
    }

    /// Power-ups scheduled per level
    pub fn powerup_count(&self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 20,
            Difficulty::Hard => 40,
            Difficulty::Extreme => 80,
            Difficulty::Nightmare => 160,
        }
    }

    /// Obstacles scheduled per level
    pub fn obstacle_count(&self) -> u32 {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 12,
            Difficulty::Hard => 24,
            Difficulty::Extreme => 48,
            Difficulty::Nightmare => 96,
        }
    }

    /// Multiplier applied to archetype base health
    pub fn health_mult(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
            Difficulty::Extreme => 3.0,
            Difficulty::Nightmare => 5.0,
        }
    }

    /// Multiplier applied to archetype base speed
    pub fn speed_mult(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.2,
            Difficulty::Hard => 1.5,
            Difficulty::Extreme => 1.8,
            Difficulty::Nightmare => 2.2,
        }
    }

    /// Multiplier applied to archetype/obstacle base damage
    pub fn damage_mult(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
            Difficulty::Extreme => 3.0,
            Difficulty::Nightmare => 4.0,
        }
    }

    /// Projectiles materialized per pattern start
    pub fn bullet_count(&self) -> u32 {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 16,
            Difficulty::Hard => 32,
            Difficulty::Extreme => 64,
            Difficulty::Nightmare => 128,
        }
    }

    /// Projectile speed for patterns of this tier
    pub fn bullet_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Medium => 3.0,
            Difficulty::Hard => 4.0,
            Difficulty::Extreme => 5.0,
            Difficulty::Nightmare => 6.0,
        }
    }
}

/// Enemy archetypes. Final stats are base value x tier multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Drone,
    Striker,
    Bomber,
    Interceptor,
    Gunship,
    Phantom,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::Drone,
        Archetype::Striker,
        Archetype::Bomber,
        Archetype::Interceptor,
        Archetype::Gunship,
        Archetype::Phantom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Drone => "drone",
            Archetype::Striker => "striker",
            Archetype::Bomber => "bomber",
            Archetype::Interceptor => "interceptor",
            Archetype::Gunship => "gunship",
            Archetype::Phantom => "phantom",
        }
    }

    pub fn base_health(&self) -> f32 {
        match self {
            Archetype::Drone => 20.0,
            Archetype::Striker => 35.0,
            Archetype::Bomber => 60.0,
            Archetype::Interceptor => 30.0,
            Archetype::Gunship => 90.0,
            Archetype::Phantom => 45.0,
        }
    }

    /// Base travel speed in px/s
    pub fn base_speed(&self) -> f32 {
        match self {
            Archetype::Drone => 80.0,
            Archetype::Striker => 140.0,
            Archetype::Bomber => 50.0,
            Archetype::Interceptor => 180.0,
            Archetype::Gunship => 40.0,
            Archetype::Phantom => 120.0,
        }
    }

    pub fn base_damage(&self) -> f32 {
        match self {
            Archetype::Drone => 5.0,
            Archetype::Striker => 10.0,
            Archetype::Bomber => 25.0,
            Archetype::Interceptor => 8.0,
            Archetype::Gunship => 20.0,
            Archetype::Phantom => 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nightmare_is_sixteen_times_easy() {
        assert_eq!(
            Difficulty::Nightmare.enemy_count(),
            16 * Difficulty::Easy.enemy_count()
        );
    }

    #[test]
    fn counts_double_per_tier() {
        for pair in Difficulty::ALL.windows(2) {
            let ratio = pair[1].enemy_count() / pair[0].enemy_count();
            assert_eq!(ratio, 2);
        }
    }

    #[test]
    fn bullet_counts_match_tier_table() {
        let counts: Vec<u32> = Difficulty::ALL.iter().map(|d| d.bullet_count()).collect();
        assert_eq!(counts, vec![8, 16, 32, 64, 128]);
    }

    #[test]
    fn unknown_tier_falls_back_to_medium() {
        assert_eq!(Difficulty::from_str("brutal"), Difficulty::Medium);
        assert_eq!(Difficulty::from_str(""), Difficulty::Medium);
        assert_eq!(Difficulty::from_str("NIGHTMARE"), Difficulty::Nightmare);
    }

    #[test]
    fn multipliers_are_monotonic() {
        let mults: Vec<f32> = Difficulty::ALL.iter().map(|d| d.health_mult()).collect();
        assert!(mults.windows(2).all(|w| w[0] < w[1]));
    }
}
