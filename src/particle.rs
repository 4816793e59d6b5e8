//! A single explosion particle.

use crate::color::{unit_to_byte, Rgba8};
use glam::Vec2;

/// One filled circle flying away from an explosion.
///
/// Radius, velocity and RGB are fixed when the particle is created. Each
/// [`advance`](Particle::advance) moves it, burns down its lifetime and
/// recomputes the alpha channel from the fraction of lifetime left. Once the
/// lifetime reaches zero the particle is frozen: it is neither moved nor drawn
/// again, but keeps its slot in the parent explosion.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    radius: f32,
    position: Vec2,
    velocity: Vec2,
    color: Rgba8,
    lifetime: f32,
    total_lifetime: f32,
}

impl Particle {
    /// `lifetime` must be strictly positive.
    pub(crate) fn new(radius: f32, position: Vec2, velocity: Vec2, color: Rgba8, lifetime: f32) -> Self {
        debug_assert!(lifetime > 0.0, "particle lifetime must be positive");
        Self {
            radius,
            position,
            velocity,
            color,
            lifetime,
            total_lifetime: lifetime,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Seconds left before the particle dies. Zero or negative once dead.
    #[inline]
    pub fn lifetime_remaining(&self) -> f32 {
        self.lifetime
    }

    #[inline]
    pub fn lifetime_total(&self) -> f32 {
        self.total_lifetime
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Fraction of lifetime left, clamped to `0.0..=1.0`.
    #[inline]
    pub fn life_ratio(&self) -> f32 {
        (self.lifetime / self.total_lifetime).clamp(0.0, 1.0)
    }

    /// Step the particle forward by `dt` seconds.
    ///
    /// Returns whether the particle still has lifetime left after the step.
    /// Dead particles are left untouched.
    pub(crate) fn advance(&mut self, dt: f32) -> bool {
        if !self.is_alive() {
            return false;
        }

        self.lifetime -= dt;
        self.position += self.velocity * dt;
        self.color.a = unit_to_byte(self.life_ratio());

        self.is_alive()
    }
}
