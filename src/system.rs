//! The explosion system: spawn, advance, render.
//!
//! # Frame Order
//!
//! ```ignore
//! let mut explosions = ExplosionSystem::new();
//!
//! // every frame
//! explosions.advance(dt);
//! if bullet_hit_enemy {
//!     explosions.spawn(enemy_center, ExplosionType::SmallHit);
//! }
//! explosions.render(&mut canvas);
//! ```
//!
//! Explosions are never removed by hand. Each one disappears in the frame
//! its last particle runs out of lifetime.

use crate::canvas::Canvas;
use crate::explosion::Explosion;
use crate::particle::Particle;
use crate::preset::ExplosionType;
use crate::random::{self, RandomRange};
use glam::Vec2;
use rand::rngs::SmallRng;
use tracing::{debug, trace};

/// Owns every active explosion and the generator used to build them.
///
/// `R` is the random source. The default is a [`SmallRng`] seeded from the
/// clock; [`seeded`](ExplosionSystem::seeded) and
/// [`with_rng`](ExplosionSystem::with_rng) make runs reproducible.
#[derive(Debug)]
pub struct ExplosionSystem<R = SmallRng> {
    explosions: Vec<Explosion>,
    rng: R,
}

impl ExplosionSystem<SmallRng> {
    /// Empty system with a clock-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(random::time_seeded())
    }

    /// Empty system with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(random::seeded(seed))
    }
}

impl Default for ExplosionSystem<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomRange> ExplosionSystem<R> {
    /// Empty system drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self {
            explosions: Vec::new(),
            rng,
        }
    }

    /// Start a new explosion of `kind` at `position`.
    pub fn spawn(&mut self, position: Vec2, kind: ExplosionType) {
        let explosion = Explosion::spawn(position, kind, &mut self.rng);
        trace!(
            ?kind,
            x = position.x,
            y = position.y,
            particles = explosion.particles().len(),
            "spawned explosion"
        );
        self.explosions.push(explosion);
    }

    /// Step every explosion forward by `dt` seconds and drop the finished ones.
    ///
    /// `dt` must not be negative.
    pub fn advance(&mut self, dt: f32) {
        for explosion in &mut self.explosions {
            explosion.advance(dt);
        }

        let before = self.explosions.len();
        self.explosions.retain(Explosion::is_alive);
        let culled = before - self.explosions.len();
        if culled > 0 {
            debug!(culled, remaining = self.explosions.len(), "explosions finished");
        }
    }

    /// Draw every live particle as a filled circle.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for particle in self.live_particles() {
            canvas.fill_circle(particle.position(), particle.radius(), particle.color());
        }
    }

    /// Active explosions, in no particular order.
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    pub fn len(&self) -> usize {
        self.explosions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.explosions.is_empty()
    }

    /// Every particle that would be drawn right now.
    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.explosions.iter().flat_map(|e| e.live_particles())
    }

    pub fn live_particle_count(&self) -> usize {
        self.live_particles().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawList;

    #[test]
    fn test_spawn_appends() {
        let mut system = ExplosionSystem::seeded(1);
        assert!(system.is_empty());

        system.spawn(Vec2::ZERO, ExplosionType::SmallHit);
        system.spawn(Vec2::ONE, ExplosionType::BigExplosion);

        assert_eq!(system.len(), 2);
        assert_eq!(system.live_particle_count(), 140);
        assert!(system.explosions().iter().all(Explosion::is_alive));
    }

    #[test]
    fn test_advance_culls_finished() {
        let mut system = ExplosionSystem::seeded(2);
        system.spawn(Vec2::ZERO, ExplosionType::SmallHit);
        system.spawn(Vec2::ZERO, ExplosionType::BigExplosion);

        // Past every SmallHit lifetime, well inside the smoke lifetime.
        system.advance(0.45);
        assert_eq!(system.len(), 1);
        assert_eq!(system.explosions()[0].kind(), ExplosionType::BigExplosion);
    }

    #[test]
    fn test_render_draws_live_only() {
        let mut system = ExplosionSystem::seeded(3);
        system.spawn(Vec2::new(5.0, 5.0), ExplosionType::BigExplosion);
        // Past all fire; smoke lives at least 1s.
        system.advance(0.6);
        system.advance(0.65);

        let mut list = DrawList::new();
        system.render(&mut list);
        assert!(!list.is_empty());
        assert!(list.len() <= 40);
        assert_eq!(list.len(), system.live_particle_count());
        for (_, _, color) in list.circles() {
            assert_eq!(color.r, color.g);
            assert_eq!(color.g, color.b);
        }
    }

    #[test]
    fn test_same_seed_same_explosions() {
        let mut a = ExplosionSystem::seeded(42);
        let mut b = ExplosionSystem::seeded(42);
        a.spawn(Vec2::ZERO, ExplosionType::BigExplosion);
        b.spawn(Vec2::ZERO, ExplosionType::BigExplosion);
        a.advance(0.1);
        b.advance(0.1);

        let (mut la, mut lb) = (DrawList::new(), DrawList::new());
        a.render(&mut la);
        b.render(&mut lb);
        assert_eq!(la, lb);
    }
}
