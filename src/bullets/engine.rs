//! Live bullet scheduling and simulation
//!
//! [`BulletEngine`] owns the live projectile list and the active
//! pattern/wave countdowns exclusively. `start_pattern`/`start_wave`
//! materialize catalog entries through the geometry library;
//! `update_bullets` advances and culls once per frame. Collaborators read
//! state through the snapshot getters and never mutate it.

use std::collections::HashMap;

use glam::Vec2;

use super::catalog;
use super::geometry::{self, Projectile};
use crate::rng::SeededRng;

/// Frame-driven bullet simulation plus the pattern/wave scheduler.
///
/// Single-threaded by design: all mutation happens inside `update_bullets`
/// and the discrete `start_*` calls. Time values are milliseconds throughout,
/// matching the plan side.
#[derive(Debug, Clone)]
pub struct BulletEngine {
    bullets: Vec<Projectile>,
    /// pattern id -> remaining active time (ms)
    active_patterns: HashMap<&'static str, f32>,
    /// wave id -> remaining active time (ms)
    active_waves: HashMap<&'static str, f32>,
    /// Runtime sequence source for the random topologies. Deliberately
    /// separate from any level generator's source, so firing patterns never
    /// disturbs plan reproducibility.
    rng: SeededRng,
    next_id: u64,
    next_burst: u64,
}

impl BulletEngine {
    /// Engine with an entropy-seeded runtime source.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Engine with a fixed runtime source, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            bullets: Vec::new(),
            active_patterns: HashMap::new(),
            active_waves: HashMap::new(),
            rng: SeededRng::new(seed),
            next_id: 1,
            next_burst: 1,
        }
    }

    /// Fire a catalog pattern at `origin`. Returns false (and changes
    /// nothing) when the id is unknown. On success the pattern's countdown
    /// is (re)registered and its projectiles join the live list at once.
    pub fn start_pattern(&mut self, id: &str, origin: Vec2) -> bool {
        let Some(spec) = catalog::pattern(id) else {
            log::warn!("unknown bullet pattern: {id}");
            return false;
        };

        let count = spec.difficulty.bullet_count();
        let speed = spec.difficulty.bullet_speed();
        let burst = self.next_burst;
        self.next_burst += 1;

        let mut batch = geometry::emit(spec.topology, origin, count, speed, &mut self.rng);
        for b in &mut batch {
            b.id = self.next_id;
            self.next_id += 1;
            b.burst = burst;
        }
        log::debug!(
            "pattern {} ({}) fired {} bullets",
            spec.id,
            spec.topology.as_str(),
            batch.len()
        );
        self.bullets.append(&mut batch);
        self.active_patterns.insert(spec.id, spec.duration);
        true
    }

    /// Fire a catalog wave at `origin`: its three constituent patterns all
    /// start at the same point. Returns false for unknown ids.
    pub fn start_wave(&mut self, id: &str, origin: Vec2) -> bool {
        let Some(spec) = catalog::wave(id) else {
            log::warn!("unknown bullet wave: {id}");
            return false;
        };
        for pattern_id in spec.patterns {
            self.start_pattern(pattern_id, origin);
        }
        self.active_waves.insert(spec.id, spec.duration);
        true
    }

    /// Advance every live projectile by `dt` ms, then run timer housekeeping.
    ///
    /// Projectiles move before timers are evicted, so a pattern expiring this
    /// frame still sees its bullets advance this frame. Timer eviction is
    /// pure bookkeeping: projectiles spawned by an expiring pattern stay
    /// alive on their own clock.
    pub fn update_bullets(&mut self, dt: f32) {
        for b in &mut self.bullets {
            b.pos += b.dir * b.speed * dt;
            b.life -= dt;
        }
        self.bullets.retain(|b| b.life > 0.0);

        self.active_patterns.retain(|_, remaining| {
            *remaining -= dt;
            *remaining > 0.0
        });
        self.active_waves.retain(|_, remaining| {
            *remaining -= dt;
            *remaining > 0.0
        });
    }

    /// Drop every live projectile and every active countdown. Used for level
    /// transitions and error recovery; there is no partial cancellation.
    pub fn clear_all_bullets(&mut self) {
        self.bullets.clear();
        self.active_patterns.clear();
        self.active_waves.clear();
    }

    /// Read-only snapshot for the render/collision collaborator.
    pub fn active_bullets(&self) -> &[Projectile] {
        &self.bullets
    }

    /// Remaining active time (ms) per pattern id.
    pub fn active_patterns(&self) -> &HashMap<&'static str, f32> {
        &self.active_patterns
    }

    /// Remaining active time (ms) per wave id.
    pub fn active_waves(&self) -> &HashMap<&'static str, f32> {
        &self.active_waves
    }

    pub fn active_bullet_count(&self) -> usize {
        self.bullets.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.active_patterns.len()
    }

    pub fn wave_count(&self) -> usize {
        self.active_waves.len()
    }
}

impl Default for BulletEngine {
    fn default() -> Self {
        Self::new()
    }
}
