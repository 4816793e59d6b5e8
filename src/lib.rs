//! # Skyblast
//!
//! A small top-down arcade shooter built around a CPU particle explosion
//! system.
//!
//! The heart of the crate is [`ExplosionSystem`]: spawn a preset explosion at
//! a point, advance it every frame, draw whatever is still alive. Particles
//! fly outward in a straight line, fade out over their lifetime and are
//! cleaned up automatically.
//!
//! ## Quick Start
//!
//! ```ignore
//! use skyblast::prelude::*;
//!
//! let mut explosions = ExplosionSystem::seeded(7);
//! let mut frame = DrawList::new();
//!
//! explosions.spawn(Vec2::new(120.0, 80.0), ExplosionType::BigExplosion);
//!
//! // every frame
//! explosions.advance(1.0 / 60.0);
//! frame.clear();
//! explosions.render(&mut frame);
//! ```
//!
//! ## Presets
//!
//! | Preset | Particles | Look |
//! |--------|-----------|------|
//! | [`ExplosionType::SmallHit`] | 20 fire | quick yellow sparks |
//! | [`ExplosionType::BigExplosion`] | 80 fire + 40 smoke | orange burst, rising gray smoke |
//!
//! ## Drawing
//!
//! Everything draws through the [`Canvas`] trait. [`DrawList`] records
//! shapes for the GPU [`Renderer`](gpu::Renderer); `image::RgbaImage`
//! rasterizes directly for headless snapshots (see [`raster`]).
//!
//! ## The Game
//!
//! [`Game`] wires the explosions into a playable loop (player, bullets,
//! falling enemies) and [`window::run`] puts it in a window.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod explosion;
pub mod game;
pub mod gpu;
pub mod input;
pub mod particle;
pub mod preset;
pub mod random;
pub mod raster;
pub mod system;
pub mod time;
pub mod window;

pub use canvas::{Canvas, DrawList, Shape};
pub use color::Rgba8;
pub use config::GameConfig;
pub use error::{GameError, GpuError, SnapshotError};
pub use explosion::Explosion;
pub use game::{Autopilot, Controls, Game, GameEvent, GameStats};
pub use glam::Vec2;
pub use particle::Particle;
pub use preset::ExplosionType;
pub use system::ExplosionSystem;
pub use time::FrameClock;

/// Everything needed to spawn, advance and draw explosions.
pub mod prelude {
    pub use crate::canvas::{Canvas, DrawList};
    pub use crate::color::Rgba8;
    pub use crate::config::GameConfig;
    pub use crate::game::{Autopilot, Controls, Game, GameEvent};
    pub use crate::preset::ExplosionType;
    pub use crate::random::RandomRange;
    pub use crate::system::ExplosionSystem;
    pub use crate::time::FrameClock;
    pub use crate::Vec2;
}
