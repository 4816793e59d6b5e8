//! A single explosion: a fixed batch of particles spawned together.

use crate::particle::Particle;
use crate::preset::{ExplosionPreset, ExplosionType};
use crate::random::RandomRange;
use glam::Vec2;

/// Particles spawned by one [`ExplosionSystem::spawn`](crate::ExplosionSystem::spawn).
///
/// The particle list never grows or shrinks after creation. Dead particles
/// stay in their slots and are skipped; the explosion as a whole is dropped
/// by the system once none of its particles is alive.
#[derive(Debug, Clone)]
pub struct Explosion {
    kind: ExplosionType,
    origin: Vec2,
    particles: Vec<Particle>,
    alive: bool,
}

impl Explosion {
    /// Build the full particle set for `kind` at `origin`.
    pub(crate) fn spawn<R: RandomRange + ?Sized>(origin: Vec2, kind: ExplosionType, rng: &mut R) -> Self {
        let preset = kind.preset();
        let mut particles = Vec::with_capacity(preset.particle_count());

        push_fire(&mut particles, preset, origin, rng);
        push_smoke(&mut particles, preset, origin, rng);

        Self {
            kind,
            origin,
            particles,
            alive: true,
        }
    }

    #[inline]
    pub fn kind(&self) -> ExplosionType {
        self.kind
    }

    /// Where the explosion was spawned.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Whether any particle was alive during the last advance.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// All particles, dead ones included.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Particles with lifetime left.
    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> + '_ {
        self.particles.iter().filter(|p| p.is_alive())
    }

    /// Step every live particle by `dt` and refresh the alive flag.
    ///
    /// The explosion stays alive while at least one particle has lifetime
    /// left after the step, so it dies in the same frame as its last particle.
    /// Returns the new flag. An explosion that is already dead is left alone.
    pub(crate) fn advance(&mut self, dt: f32) -> bool {
        if !self.alive {
            return false;
        }

        let mut any_alive = false;
        for particle in &mut self.particles {
            any_alive |= particle.advance(dt);
        }

        self.alive = any_alive;
        self.alive
    }
}

fn push_fire<R: RandomRange + ?Sized>(
    particles: &mut Vec<Particle>,
    preset: &ExplosionPreset,
    origin: Vec2,
    rng: &mut R,
) {
    let fire = &preset.fire;
    for _ in 0..fire.count {
        let radius = fire.radius.sample(rng);
        let angle = rng.angle();
        let speed = fire.speed.sample(rng);
        let lifetime = fire.lifetime.sample(rng);
        let color = fire.color(rng);

        particles.push(Particle::new(
            radius,
            origin,
            Vec2::from_angle(angle) * speed,
            color,
            lifetime,
        ));
    }
}

fn push_smoke<R: RandomRange + ?Sized>(
    particles: &mut Vec<Particle>,
    preset: &ExplosionPreset,
    origin: Vec2,
    rng: &mut R,
) {
    let Some(smoke) = &preset.smoke else {
        return;
    };

    for _ in 0..preset.smoke_count() {
        let radius = smoke.radius.sample(rng);
        let angle = smoke.heading.sample(rng);
        let speed = smoke.speed.sample(rng);
        let lifetime = smoke.lifetime.sample(rng);
        let color = smoke.color(rng);

        particles.push(Particle::new(
            radius,
            origin,
            Vec2::from_angle(angle) * speed,
            color,
            lifetime,
        ));
    }
}
