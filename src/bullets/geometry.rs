//! Closed-form bullet pattern geometry
//!
//! Ten pure generators, one per topology. Each turns (origin, count, speed)
//! into a batch of projectile records with positions and unit travel
//! directions already resolved; the engine only has to advance them. Any
//! randomness comes from the sequence source passed in, never from a hidden
//! global, so a fixed seed reproduces the exact batch.

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::catalog::Topology;
use crate::rng::SeededRng;
use crate::{polar_offset, unit_from_angle};

/// Render palette; projectiles carry an index into this table
pub const PALETTE: [&str; 8] = [
    "#ff3b3b", "#ff9f1c", "#ffe74c", "#6bf178", "#35d0ba", "#4d9de0", "#b267e6", "#ff66c4",
];

/// A live projectile record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Engine-assigned id, unique within a run
    pub id: u64,
    /// Pattern-start event this projectile belongs to (diagnostics only)
    pub burst: u64,
    pub topology: Topology,
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    pub speed: f32,
    pub size: f32,
    /// Index into [`PALETTE`]
    pub color: u32,
    pub damage: f32,
    /// Remaining lifetime (ms)
    pub life: f32,
}

/// Base record for a topology; id/burst are stamped by the engine.
fn bullet(topology: Topology, pos: Vec2, dir: Vec2, speed: f32) -> Projectile {
    let (size, color, damage, life) = match topology {
        Topology::Spiral => (5.0, 0, 8.0, 4000.0),
        Topology::Wave => (6.0, 1, 8.0, 5000.0),
        Topology::Circle => (5.0, 2, 10.0, 4000.0),
        Topology::Diamond => (7.0, 3, 12.0, 4500.0),
        Topology::Cross => (6.0, 4, 10.0, 4500.0),
        Topology::Star => (5.0, 5, 10.0, 4000.0),
        Topology::Vortex => (5.0, 6, 12.0, 5000.0),
        Topology::Chaos => (4.0, 7, 9.0, 3500.0),
        Topology::Dance => (5.0, 2, 9.0, 4500.0),
        // Storm color is re-drawn per bullet from the palette
        Topology::Storm => (4.0, 0, 11.0, 3500.0),
    };
    Projectile {
        id: 0,
        burst: 0,
        topology,
        pos,
        dir,
        speed,
        size,
        color,
        damage,
        life,
    }
}

/// Materialize `count` projectiles of `topology` around `origin`.
pub fn emit(
    topology: Topology,
    origin: Vec2,
    count: u32,
    speed: f32,
    rng: &mut SeededRng,
) -> Vec<Projectile> {
    match topology {
        Topology::Spiral => spiral(origin, count, speed, rng),
        Topology::Wave => wave(origin, count, speed, rng),
        Topology::Circle => circle(origin, count, speed, rng),
        Topology::Diamond => diamond(origin, count, speed, rng),
        Topology::Cross => cross(origin, count, speed, rng),
        Topology::Star => star(origin, count, speed, rng),
        Topology::Vortex => vortex(origin, count, speed, rng),
        Topology::Chaos => chaos(origin, count, speed, rng),
        Topology::Dance => dance(origin, count, speed, rng),
        Topology::Storm => storm(origin, count, speed, rng),
    }
}

/// Two full turns of outward-stepping bullets moving tangentially.
pub fn spiral(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = i as f32 / count as f32 * 4.0 * PI;
        let radius = 50.0 + 2.0 * i as f32;
        let pos = origin + polar_offset(radius, angle);
        let dir = unit_from_angle(angle + PI / 2.0);
        out.push(bullet(Topology::Spiral, pos, dir, speed));
    }
    out
}

/// A sinuous curtain descending the screen: lateral sine offset, rows 10px
/// apart, every bullet heading straight down.
pub fn wave(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU;
        let pos = Vec2::new(
            origin.x + (3.0 * angle).sin() * 30.0,
            origin.y + 10.0 * i as f32,
        );
        out.push(bullet(Topology::Wave, pos, Vec2::new(0.0, 1.0), speed));
    }
    out
}

/// An even ring at radius 100 expanding radially.
pub fn circle(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU;
        let pos = origin + polar_offset(100.0, angle);
        out.push(bullet(Topology::Circle, pos, unit_from_angle(angle), speed));
    }
    out
}

const DIAMOND_OFFSETS: [Vec2; 4] = [
    Vec2::new(0.0, -50.0),
    Vec2::new(50.0, 0.0),
    Vec2::new(0.0, 50.0),
    Vec2::new(-50.0, 0.0),
];

/// Four fixed vertex points cycled by index, expanding through the vertex.
pub fn diamond(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let offset = DIAMOND_OFFSETS[(i % 4) as usize];
        let pos = origin + offset;
        let dir = offset.normalize();
        out.push(bullet(Topology::Diamond, pos, dir, speed));
    }
    out
}

const CROSS_DIRS: [Vec2; 4] = [
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];

/// Four axis-aligned arms, bullets placed 50 units out along each.
pub fn cross(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let dir = CROSS_DIRS[(i % 4) as usize];
        let pos = origin + dir * 50.0;
        out.push(bullet(Topology::Cross, pos, dir, speed));
    }
    out
}

/// A five-pointed ring: radius modulated by sin(5a), expanding radially.
pub fn star(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU;
        let radius = 80.0 + (5.0 * angle).sin() * 20.0;
        let pos = origin + polar_offset(radius, angle);
        out.push(bullet(Topology::Star, pos, unit_from_angle(angle), speed));
    }
    out
}

/// A progressively twisted ring moving tangentially to the twist.
pub fn vortex(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let angle = i as f32 / count as f32 * TAU + 0.1 * i as f32;
        let radius = 60.0 + 2.0 * i as f32;
        let pos = origin + polar_offset(radius, angle);
        let dir = unit_from_angle(angle + PI / 2.0);
        out.push(bullet(Topology::Vortex, pos, dir, speed));
    }
    out
}

/// Fully random scatter within radius 100; speed jittered up to +2.
pub fn chaos(origin: Vec2, count: u32, speed: f32, rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let angle = rng.next() * TAU;
        let radius = rng.next() * 100.0;
        let pos = origin + polar_offset(radius, angle);
        let jittered = speed + rng.next() * 2.0;
        out.push(bullet(Topology::Chaos, pos, unit_from_angle(angle), jittered));
    }
    out
}

/// A swaying ring: radius breathes with sin(3a), heading perturbed by
/// sin(2a) * 0.5.
pub fn dance(origin: Vec2, count: u32, speed: f32, _rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for i in 0..count {
        let base = i as f32 / count as f32 * TAU;
        let radius = 70.0 + (3.0 * base).sin() * 30.0;
        let angle = base + (2.0 * base).sin() * 0.5;
        let pos = origin + polar_offset(radius, angle);
        out.push(bullet(Topology::Dance, pos, unit_from_angle(angle), speed));
    }
    out
}

/// Random scatter within radius 150, speed jittered up to +3, each bullet
/// colored from a random palette draw.
pub fn storm(origin: Vec2, count: u32, speed: f32, rng: &mut SeededRng) -> Vec<Projectile> {
    let mut out = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let angle = rng.next() * TAU;
        let radius = rng.next() * 150.0;
        let pos = origin + polar_offset(radius, angle);
        let jittered = speed + rng.next() * 3.0;
        let mut b = bullet(Topology::Storm, pos, unit_from_angle(angle), jittered);
        b.color = rng.index(PALETTE.len()) as u32;
        out.push(b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn all_topologies() -> [Topology; 10] {
        [
            Topology::Spiral,
            Topology::Wave,
            Topology::Circle,
            Topology::Diamond,
            Topology::Cross,
            Topology::Star,
            Topology::Vortex,
            Topology::Chaos,
            Topology::Dance,
            Topology::Storm,
        ]
    }

    #[test]
    fn every_topology_emits_requested_count() {
        let origin = Vec2::new(400.0, 300.0);
        for topology in all_topologies() {
            let mut rng = SeededRng::new(1);
            let batch = emit(topology, origin, 32, 4.0, &mut rng);
            assert_eq!(batch.len(), 32, "{}", topology.as_str());
            for b in &batch {
                assert_eq!(b.topology, topology);
                assert!((b.dir.length() - 1.0).abs() < EPS);
                assert!(b.life > 0.0);
            }
        }
    }

    #[test]
    fn circle_ring_radius_and_radial_motion() {
        let origin = Vec2::new(100.0, 100.0);
        let mut rng = SeededRng::new(1);
        for b in circle(origin, 16, 3.0, &mut rng) {
            let radial = b.pos - origin;
            assert!((radial.length() - 100.0).abs() < EPS);
            // Outward: direction parallel to the radial offset
            assert!(radial.normalize().dot(b.dir) > 1.0 - EPS);
        }
    }

    #[test]
    fn spiral_is_tangential_and_steps_outward() {
        let origin = Vec2::ZERO;
        let mut rng = SeededRng::new(1);
        let batch = spiral(origin, 16, 2.0, &mut rng);
        for (i, b) in batch.iter().enumerate() {
            let radial = b.pos - origin;
            assert!((radial.length() - (50.0 + 2.0 * i as f32)).abs() < EPS);
            // Tangential: direction orthogonal to the radial offset
            assert!(radial.normalize().dot(b.dir).abs() < EPS);
        }
    }

    #[test]
    fn wave_descends_in_rows() {
        let origin = Vec2::new(200.0, 0.0);
        let mut rng = SeededRng::new(1);
        let batch = wave(origin, 8, 2.0, &mut rng);
        for (i, b) in batch.iter().enumerate() {
            assert!((b.pos.y - 10.0 * i as f32).abs() < EPS);
            assert!((b.pos.x - origin.x).abs() <= 30.0 + EPS);
            assert_eq!(b.dir, Vec2::new(0.0, 1.0));
        }
    }

    #[test]
    fn diamond_cycles_four_vertices() {
        let origin = Vec2::new(50.0, 50.0);
        let mut rng = SeededRng::new(1);
        let batch = diamond(origin, 8, 3.0, &mut rng);
        for (i, b) in batch.iter().enumerate() {
            let expected = origin + DIAMOND_OFFSETS[i % 4];
            assert!((b.pos - expected).length() < EPS);
            assert!((b.dir - DIAMOND_OFFSETS[i % 4].normalize()).length() < EPS);
        }
    }

    #[test]
    fn cross_places_bullets_on_axes() {
        let origin = Vec2::ZERO;
        let mut rng = SeededRng::new(1);
        let batch = cross(origin, 8, 3.0, &mut rng);
        for (i, b) in batch.iter().enumerate() {
            let dir = CROSS_DIRS[i % 4];
            assert!((b.pos - dir * 50.0).length() < EPS);
            assert_eq!(b.dir, dir);
        }
    }

    #[test]
    fn star_radius_stays_in_band() {
        let mut rng = SeededRng::new(1);
        for b in star(Vec2::ZERO, 32, 3.0, &mut rng) {
            let r = b.pos.length();
            assert!((60.0 - EPS..=100.0 + EPS).contains(&r));
        }
    }

    #[test]
    fn vortex_radius_steps_outward() {
        let mut rng = SeededRng::new(1);
        let batch = vortex(Vec2::ZERO, 16, 4.0, &mut rng);
        for (i, b) in batch.iter().enumerate() {
            assert!((b.pos.length() - (60.0 + 2.0 * i as f32)).abs() < EPS);
            assert!(b.pos.normalize().dot(b.dir).abs() < EPS);
        }
    }

    #[test]
    fn chaos_bounds_radius_and_jitter() {
        let mut rng = SeededRng::new(7);
        for b in chaos(Vec2::ZERO, 64, 4.0, &mut rng) {
            assert!(b.pos.length() < 100.0);
            assert!(b.speed >= 4.0 && b.speed < 6.0);
        }
    }

    #[test]
    fn dance_radius_stays_in_band() {
        let mut rng = SeededRng::new(1);
        for b in dance(Vec2::ZERO, 32, 3.0, &mut rng) {
            let r = b.pos.length();
            assert!((40.0 - EPS..=100.0 + EPS).contains(&r));
        }
    }

    #[test]
    fn storm_bounds_radius_jitter_and_palette() {
        let mut rng = SeededRng::new(7);
        for b in storm(Vec2::ZERO, 64, 5.0, &mut rng) {
            assert!(b.pos.length() < 150.0);
            assert!(b.speed >= 5.0 && b.speed < 8.0);
            assert!((b.color as usize) < PALETTE.len());
        }
    }

    #[test]
    fn random_topologies_reproduce_under_same_seed() {
        for topology in [Topology::Chaos, Topology::Storm] {
            let mut a = SeededRng::new(4242);
            let mut b = SeededRng::new(4242);
            let ba = emit(topology, Vec2::ZERO, 32, 4.0, &mut a);
            let bb = emit(topology, Vec2::ZERO, 32, 4.0, &mut b);
            for (x, y) in ba.iter().zip(&bb) {
                assert_eq!(x.pos, y.pos);
                assert_eq!(x.speed, y.speed);
                assert_eq!(x.color, y.color);
            }
        }
    }
}
