//! Hand-authored bullet pattern and wave catalog
//!
//! The catalog is closed data: fifteen patterns spanning the five tiers and
//! five waves grouping three patterns each. Nothing here is generated or
//! mutated at runtime; the scheduler looks entries up by id and the entry's
//! tier decides how many projectiles materialize and how fast they fly.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// Geometric family of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topology {
    Spiral,
    Wave,
    Circle,
    Diamond,
    Cross,
    Star,
    Vortex,
    Chaos,
    Dance,
    Storm,
}

impl Topology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Spiral => "spiral",
            Topology::Wave => "wave",
            Topology::Circle => "circle",
            Topology::Diamond => "diamond",
            Topology::Cross => "cross",
            Topology::Star => "star",
            Topology::Vortex => "vortex",
            Topology::Chaos => "chaos",
            Topology::Dance => "dance",
            Topology::Storm => "storm",
        }
    }
}

/// A catalog pattern entry
#[derive(Debug, Clone, Copy)]
pub struct PatternSpec {
    pub id: &'static str,
    pub topology: Topology,
    /// Tier driving bullet count and speed
    pub difficulty: Difficulty,
    /// How long the pattern stays registered as active (ms)
    pub duration: f32,
    /// Suggested minimum delay before refiring (ms); the schedule walker
    /// honors this, the engine itself does not enforce it
    pub cooldown: f32,
}

/// A catalog wave entry: three patterns fired together
#[derive(Debug, Clone, Copy)]
pub struct WaveSpec {
    pub id: &'static str,
    pub patterns: [&'static str; 3],
    pub difficulty: Difficulty,
    /// How long the wave stays registered as active (ms)
    pub duration: f32,
}

const PATTERNS: [PatternSpec; 15] = [
    // Easy
    PatternSpec {
        id: "spiral-drift",
        topology: Topology::Spiral,
        difficulty: Difficulty::Easy,
        duration: 4000.0,
        cooldown: 2000.0,
    },
    PatternSpec {
        id: "ripple-wall",
        topology: Topology::Wave,
        difficulty: Difficulty::Easy,
        duration: 4500.0,
        cooldown: 2500.0,
    },
    PatternSpec {
        id: "halo-bloom",
        topology: Topology::Circle,
        difficulty: Difficulty::Easy,
        duration: 3500.0,
        cooldown: 1800.0,
    },
    // Medium
    PatternSpec {
        id: "diamond-edge",
        topology: Topology::Diamond,
        difficulty: Difficulty::Medium,
        duration: 5000.0,
        cooldown: 2200.0,
    },
    PatternSpec {
        id: "quad-cross",
        topology: Topology::Cross,
        difficulty: Difficulty::Medium,
        duration: 4500.0,
        cooldown: 2000.0,
    },
    PatternSpec {
        id: "star-shard",
        topology: Topology::Star,
        difficulty: Difficulty::Medium,
        duration: 5500.0,
        cooldown: 2500.0,
    },
    // Hard
    PatternSpec {
        id: "vortex-pull",
        topology: Topology::Vortex,
        difficulty: Difficulty::Hard,
        duration: 6000.0,
        cooldown: 2800.0,
    },
    PatternSpec {
        id: "waltz-lattice",
        topology: Topology::Dance,
        difficulty: Difficulty::Hard,
        duration: 6500.0,
        cooldown: 3000.0,
    },
    PatternSpec {
        id: "twin-helix",
        topology: Topology::Spiral,
        difficulty: Difficulty::Hard,
        duration: 6000.0,
        cooldown: 2600.0,
    },
    // Extreme
    PatternSpec {
        id: "entropy-bloom",
        topology: Topology::Chaos,
        difficulty: Difficulty::Extreme,
        duration: 7000.0,
        cooldown: 3200.0,
    },
    PatternSpec {
        id: "maelstrom",
        topology: Topology::Vortex,
        difficulty: Difficulty::Extreme,
        duration: 7500.0,
        cooldown: 3400.0,
    },
    PatternSpec {
        id: "tempest-front",
        topology: Topology::Storm,
        difficulty: Difficulty::Extreme,
        duration: 7000.0,
        cooldown: 3000.0,
    },
    // Nightmare
    PatternSpec {
        id: "event-horizon",
        topology: Topology::Storm,
        difficulty: Difficulty::Nightmare,
        duration: 9000.0,
        cooldown: 4000.0,
    },
    PatternSpec {
        id: "pandemonium",
        topology: Topology::Chaos,
        difficulty: Difficulty::Nightmare,
        duration: 8500.0,
        cooldown: 3800.0,
    },
    PatternSpec {
        id: "danse-macabre",
        topology: Topology::Dance,
        difficulty: Difficulty::Nightmare,
        duration: 9500.0,
        cooldown: 4200.0,
    },
];

const WAVES: [WaveSpec; 5] = [
    WaveSpec {
        id: "opening-gambit",
        patterns: ["spiral-drift", "ripple-wall", "halo-bloom"],
        difficulty: Difficulty::Easy,
        duration: 12000.0,
    },
    WaveSpec {
        id: "geometry-lesson",
        patterns: ["diamond-edge", "quad-cross", "star-shard"],
        difficulty: Difficulty::Medium,
        duration: 14000.0,
    },
    WaveSpec {
        id: "gravity-well",
        patterns: ["vortex-pull", "waltz-lattice", "twin-helix"],
        difficulty: Difficulty::Hard,
        duration: 16000.0,
    },
    WaveSpec {
        id: "storm-season",
        patterns: ["entropy-bloom", "maelstrom", "tempest-front"],
        difficulty: Difficulty::Extreme,
        duration: 18000.0,
    },
    WaveSpec {
        id: "the-gauntlet",
        patterns: ["event-horizon", "pandemonium", "danse-macabre"],
        difficulty: Difficulty::Nightmare,
        duration: 20000.0,
    },
];

/// Look up a pattern by id.
pub fn pattern(id: &str) -> Option<&'static PatternSpec> {
    PATTERNS.iter().find(|p| p.id == id)
}

/// Look up a wave by id.
pub fn wave(id: &str) -> Option<&'static WaveSpec> {
    WAVES.iter().find(|w| w.id == id)
}

pub fn all_patterns() -> &'static [PatternSpec] {
    &PATTERNS
}

pub fn all_waves() -> &'static [WaveSpec] {
    &WAVES
}

pub fn patterns_by_difficulty(difficulty: Difficulty) -> Vec<&'static PatternSpec> {
    PATTERNS.iter().filter(|p| p.difficulty == difficulty).collect()
}

pub fn waves_by_difficulty(difficulty: Difficulty) -> Vec<&'static WaveSpec> {
    WAVES.iter().filter(|w| w.difficulty == difficulty).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(all_patterns().len(), 15);
        assert_eq!(all_waves().len(), 5);
    }

    #[test]
    fn pattern_ids_are_unique() {
        for (i, p) in PATTERNS.iter().enumerate() {
            assert!(
                !PATTERNS[i + 1..].iter().any(|q| q.id == p.id),
                "duplicate pattern id {}",
                p.id
            );
        }
    }

    #[test]
    fn three_patterns_per_tier() {
        for tier in Difficulty::ALL {
            assert_eq!(patterns_by_difficulty(tier).len(), 3, "{}", tier.as_str());
            assert_eq!(waves_by_difficulty(tier).len(), 1, "{}", tier.as_str());
        }
    }

    #[test]
    fn wave_constituents_exist_and_match_tier() {
        for w in all_waves() {
            for id in w.patterns {
                let p = pattern(id).expect("wave references unknown pattern");
                assert_eq!(p.difficulty, w.difficulty);
            }
            // Distinct constituents: the fan-out property relies on this
            assert_ne!(w.patterns[0], w.patterns[1]);
            assert_ne!(w.patterns[1], w.patterns[2]);
            assert_ne!(w.patterns[0], w.patterns[2]);
        }
    }

    #[test]
    fn unknown_ids_yield_none() {
        assert!(pattern("not-a-real-id").is_none());
        assert!(wave("not-a-real-id").is_none());
    }
}
