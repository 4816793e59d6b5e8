//! Integration tests for the explosion system.
//!
//! These drive `ExplosionSystem` only through its public API: spawn, advance,
//! render, and the read-only inspection methods.

use skyblast::canvas::{DrawList, Shape};
use skyblast::random::RandomRange;
use skyblast::{ExplosionSystem, ExplosionType, Rgba8, Vec2};
use std::f32::consts::PI;

const DT: f32 = 0.01;

fn render(system: &ExplosionSystem<impl RandomRange>) -> DrawList {
    let mut list = DrawList::new();
    system.render(&mut list);
    list
}

fn is_smoke(color: Rgba8) -> bool {
    color.r == color.g && color.g == color.b
}

/// Always returns the middle of the requested range.
struct Midpoint;

impl RandomRange for Midpoint {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        (min + max) / 2.0
    }
}

// ============================================================================
// Spawning
// ============================================================================

#[test]
fn test_preset_particle_counts() {
    let mut system = ExplosionSystem::seeded(1);
    system.spawn(Vec2::ZERO, ExplosionType::SmallHit);
    system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);

    let explosions = system.explosions();
    assert_eq!(explosions.len(), 2);
    assert_eq!(explosions[0].particles().len(), 20);
    assert_eq!(explosions[1].particles().len(), 120);

    let smoke = explosions[1].particles().iter().filter(|p| is_smoke(p.color())).count();
    assert_eq!(smoke, 40);
}

#[test]
fn test_injected_rng_draws_midpoints() {
    let mut system = ExplosionSystem::with_rng(Midpoint);
    system.spawn(Vec2::new(50.0, 50.0), ExplosionType::SmallHit);

    for particle in system.explosions()[0].particles() {
        assert_eq!(particle.radius(), 2.25);
        assert_eq!(particle.lifetime_total(), 0.25);
        assert_eq!(particle.lifetime_remaining(), 0.25);
        // Channels truncate: 227.5 -> 227.
        assert_eq!(particle.color(), Rgba8::new(255, 227, 0, 255));

        // Heading pi at speed 200 points straight left.
        let v = particle.velocity();
        assert!((v.x + 200.0).abs() < 1e-3);
        assert!(v.y.abs() < 1e-3);
    }
}

#[test]
fn test_smoke_rises() {
    let mut system = ExplosionSystem::seeded(21);
    system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);

    let up_cone = (-PI / 2.0 - 0.5 - 1e-4)..=(-PI / 2.0 + 0.5 + 1e-4);
    for particle in system.explosions()[0].particles() {
        if !is_smoke(particle.color()) {
            continue;
        }
        let v = particle.velocity();
        assert!(v.y < 0.0, "smoke must move up, got {v:?}");
        assert!(up_cone.contains(&v.y.atan2(v.x)));
        assert!((30.0 - 1e-3..=80.0 + 1e-3).contains(&v.length()));
        assert_eq!(particle.color().a, 150);
    }
}

// ============================================================================
// Advancing
// ============================================================================

#[test]
fn test_lifetime_never_increases() {
    let mut system = ExplosionSystem::seeded(5);
    system.spawn(Vec2::new(300.0, 200.0), ExplosionType::BigExplosion);

    let mut previous: Vec<f32> = system.explosions()[0]
        .particles()
        .iter()
        .map(|p| p.lifetime_remaining())
        .collect();

    for step in 0..400 {
        // Mix of frame lengths, including zero.
        let dt = [0.0, 0.004, 0.016, 0.033][step % 4];
        system.advance(dt);
        let Some(explosion) = system.explosions().first() else {
            break;
        };

        for (particle, before) in explosion.particles().iter().zip(&mut previous) {
            let now = particle.lifetime_remaining();
            assert!(now <= *before);
            if *before <= 0.0 {
                assert_eq!(now, *before, "dead particles stay frozen");
            }
            *before = now;
        }
    }
}

#[test]
fn test_fire_alpha_fades_monotonically() {
    let mut system = ExplosionSystem::seeded(8);
    system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);

    let fire: Vec<u8> = system.explosions()[0]
        .particles()
        .iter()
        .filter(|p| !is_smoke(p.color()))
        .map(|p| p.color().a)
        .collect();
    assert_eq!(fire.len(), 80);
    assert!(fire.iter().all(|&a| a == 255));

    let mut previous = fire;
    while !system.is_empty() {
        system.advance(0.02);
        let Some(explosion) = system.explosions().first() else {
            break;
        };
        let alphas = explosion
            .particles()
            .iter()
            .filter(|p| !is_smoke(p.color()))
            .map(|p| p.color().a);
        for (alpha, before) in alphas.zip(&mut previous) {
            assert!(alpha <= *before);
            *before = alpha;
        }
    }
}

#[test]
fn test_explosions_expire_after_max_lifetime() {
    for kind in ExplosionType::ALL {
        let mut system = ExplosionSystem::seeded(13);
        system.spawn(Vec2::ZERO, kind);

        let mut elapsed = 0.0;
        while elapsed <= kind.max_lifetime() {
            system.advance(DT);
            elapsed += DT;
        }
        system.advance(DT);

        assert!(system.is_empty(), "{kind:?} outlived its presets");
        assert_eq!(system.live_particle_count(), 0);
        assert!(render(&system).is_empty());
    }
}

#[test]
fn test_independent_explosions_expire_separately() {
    let mut system = ExplosionSystem::seeded(34);
    system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);
    system.spawn(Vec2::ONE, ExplosionType::SmallHit);

    system.advance(0.45);
    assert_eq!(system.len(), 1);
    assert_eq!(system.explosions()[0].kind(), ExplosionType::BigExplosion);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_is_idempotent() {
    let mut system = ExplosionSystem::seeded(55);
    system.spawn(Vec2::new(10.0, 20.0), ExplosionType::BigExplosion);
    system.spawn(Vec2::new(90.0, 20.0), ExplosionType::SmallHit);
    system.advance(0.2);

    let first = render(&system);
    let second = render(&system);
    assert_eq!(first, second);
    assert_eq!(first.len(), system.live_particle_count());
}

#[test]
fn test_render_only_draws_circles() {
    let mut system = ExplosionSystem::seeded(89);
    system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);

    let list = render(&system);
    assert!(list.shapes().iter().all(|s| matches!(s, Shape::Circle { .. })));
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_small_hit_scenario() {
    let mut system = ExplosionSystem::seeded(144);
    let origin = Vec2::new(10.0, 10.0);
    system.spawn(origin, ExplosionType::SmallHit);

    let list = render(&system);
    assert_eq!(list.len(), 20);
    for (center, radius, color) in list.circles() {
        assert_eq!(center, origin);
        assert!((1.5..=3.0).contains(&radius));
        assert_eq!(color.a, 255);
        assert_eq!(color.r, 255);
        assert_eq!(color.b, 0);
        assert!(color.g >= 200);
    }

    system.advance(0.5);
    assert!(render(&system).is_empty());
    assert!(system.is_empty());
}

#[test]
fn test_big_explosion_scenario() {
    let mut system = ExplosionSystem::seeded(233);
    system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);
    assert_eq!(render(&system).len(), 120);

    // 1.3 s: every fire particle is gone, only smoke may remain.
    for _ in 0..130 {
        system.advance(DT);
    }
    let list = render(&system);
    assert!(list.len() <= 40);
    assert!(list.circles().all(|(_, _, color)| is_smoke(color)));

    // 2.6 s: smoke is gone too and the explosion has been removed.
    for _ in 0..130 {
        system.advance(DT);
    }
    assert!(render(&system).is_empty());
    assert!(system.is_empty());
}
