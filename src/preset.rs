//! Explosion presets.
//!
//! Every explosion is built from one row of a small, compiled-in table keyed
//! by [`ExplosionType`]. A row describes the burst of fire particles and,
//! optionally, a plume of smoke rising from the same point.
//!
//! | Parameter | `SmallHit` | `BigExplosion` |
//! |-----------|------------|----------------|
//! | fire particles | 20 | 80 |
//! | speed (px/s) | 100–300 | 50–200 |
//! | radius (px) | 1.5–3.0 | 3.0–7.0 |
//! | lifetime (s) | 0.1–0.4 | 0.5–1.2 |
//! | green channel | 200–255 | 50–150 |
//! | smoke particles | none | half the fire count |
//!
//! Adding a preset means adding a variant and a row, nothing else.

use crate::color::Rgba8;
use crate::random::RandomRange;
use std::f32::consts::FRAC_PI_2;

/// Closed interval `[min, max]` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw a value from the interval.
    #[inline]
    pub fn sample<R: RandomRange + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.range(self.min, self.max)
    }

    /// Draw a value and truncate it to a color channel.
    #[inline]
    pub fn sample_channel<R: RandomRange + ?Sized>(&self, rng: &mut R) -> u8 {
        self.sample(rng) as u8
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// The two canned effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplosionType {
    /// Short spray of sparks where a bullet hits an enemy.
    SmallHit,
    /// Large fireball plus rising smoke when the player crashes.
    BigExplosion,
}

impl ExplosionType {
    pub const ALL: [ExplosionType; 2] = [ExplosionType::SmallHit, ExplosionType::BigExplosion];

    /// The preset row for this effect.
    pub fn preset(self) -> &'static ExplosionPreset {
        match self {
            ExplosionType::SmallHit => &SMALL_HIT,
            ExplosionType::BigExplosion => &BIG_EXPLOSION,
        }
    }

    /// Total particles per explosion, smoke included.
    pub fn particle_count(self) -> usize {
        self.preset().particle_count()
    }

    /// Longest lifetime any particle of this effect can be given.
    pub fn max_lifetime(self) -> f32 {
        self.preset().max_lifetime()
    }
}

/// Fire particles: an omnidirectional burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirePreset {
    pub count: usize,
    pub speed: Span,
    pub radius: Span,
    pub lifetime: Span,
    /// Red is always full; green is drawn from this span, blue is zero.
    pub green: Span,
}

impl FirePreset {
    /// Opaque fire color with a random green channel.
    pub fn color<R: RandomRange + ?Sized>(&self, rng: &mut R) -> Rgba8 {
        Rgba8::new(255, self.green.sample_channel(rng), 0, 255)
    }
}

/// Smoke particles: a slow plume inside a narrow upward cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokePreset {
    pub speed: Span,
    pub radius: Span,
    pub lifetime: Span,
    /// Heading in radians. 0 points along +x, angles grow toward +y (down).
    pub heading: Span,
    /// Gray level shared by the three channels.
    pub gray: Span,
    pub alpha: u8,
}

impl SmokePreset {
    pub fn color<R: RandomRange + ?Sized>(&self, rng: &mut R) -> Rgba8 {
        Rgba8::gray(self.gray.sample_channel(rng), self.alpha)
    }
}

/// One row of the preset table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionPreset {
    pub fire: FirePreset,
    pub smoke: Option<SmokePreset>,
}

impl ExplosionPreset {
    /// Smoke particles spawned alongside the fire, half the fire count.
    pub fn smoke_count(&self) -> usize {
        if self.smoke.is_some() {
            self.fire.count / 2
        } else {
            0
        }
    }

    pub fn particle_count(&self) -> usize {
        self.fire.count + self.smoke_count()
    }

    pub fn max_lifetime(&self) -> f32 {
        match &self.smoke {
            Some(smoke) => self.fire.lifetime.max.max(smoke.lifetime.max),
            None => self.fire.lifetime.max,
        }
    }
}

/// Straight up on screen (y grows downward).
const UP: f32 = -FRAC_PI_2;
const SMOKE_CONE_HALF_ANGLE: f32 = 0.5;

const SMOKE: SmokePreset = SmokePreset {
    speed: Span::new(30.0, 80.0),
    radius: Span::new(5.0, 12.0),
    lifetime: Span::new(1.0, 2.5),
    heading: Span::new(UP - SMOKE_CONE_HALF_ANGLE, UP + SMOKE_CONE_HALF_ANGLE),
    gray: Span::new(50.0, 100.0),
    alpha: 150,
};

const SMALL_HIT: ExplosionPreset = ExplosionPreset {
    fire: FirePreset {
        count: 20,
        speed: Span::new(100.0, 300.0),
        radius: Span::new(1.5, 3.0),
        lifetime: Span::new(0.1, 0.4),
        green: Span::new(200.0, 255.0),
    },
    smoke: None,
};

const BIG_EXPLOSION: ExplosionPreset = ExplosionPreset {
    fire: FirePreset {
        count: 80,
        speed: Span::new(50.0, 200.0),
        radius: Span::new(3.0, 7.0),
        lifetime: Span::new(0.5, 1.2),
        green: Span::new(50.0, 150.0),
    },
    smoke: Some(SMOKE),
};
