//! Game configuration.
//!
//! Every tunable of the arcade layer lives in [`GameConfig`]. Defaults match
//! the classic 700×500 field; the builder methods cover what the command line
//! exposes. Explosion presets are not configurable here (see
//! [`crate::preset`]).

use crate::color::Rgba8;
use crate::preset::Span;
use glam::Vec2;

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Play-field size in pixels.
    pub field_size: Vec2,
    pub background: Rgba8,

    pub player_size: Vec2,
    /// Top-left corner at start and after every crash.
    pub player_start: Vec2,
    /// Pixels per second, per axis.
    pub player_speed: f32,
    pub player_color: Rgba8,

    pub enemy_count: usize,
    pub enemy_size: Vec2,
    /// Downward speed shared by every enemy.
    pub enemy_fall_speed: f32,
    /// Per-enemy horizontal speed, redrawn on every respawn.
    pub enemy_drift: Span,
    /// Respawn x range for the enemy's left edge.
    pub enemy_spawn_x: Span,
    /// Enemies respawn up to this far above the field.
    pub enemy_spawn_depth: f32,
    /// Enemies below this y respawn.
    pub enemy_despawn_y: f32,
    pub enemy_color: Rgba8,

    pub bullet_radius: f32,
    /// Upward speed in pixels per second.
    pub bullet_speed: f32,
    /// Bullets above this y are dropped.
    pub bullet_despawn_y: f32,
    /// Minimum seconds between shots.
    pub fire_cooldown: f32,
    pub bullet_color: Rgba8,

    /// Seed for enemy placement and explosions. `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(700.0, 500.0),
            background: Rgba8::rgb(50, 50, 50),

            player_size: Vec2::new(40.0, 40.0),
            player_start: Vec2::new(350.0, 450.0),
            player_speed: 200.0,
            player_color: Rgba8::rgb(90, 170, 255),

            enemy_count: 5,
            enemy_size: Vec2::new(36.0, 36.0),
            enemy_fall_speed: 200.0,
            enemy_drift: Span::new(-80.0, 20.0),
            enemy_spawn_x: Span::new(50.0, 700.0),
            enemy_spawn_depth: 300.0,
            enemy_despawn_y: 600.0,
            enemy_color: Rgba8::rgb(200, 60, 160),

            bullet_radius: 5.0,
            bullet_speed: 500.0,
            bullet_despawn_y: -10.0,
            fire_cooldown: 0.15,
            bullet_color: Rgba8::RED,

            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make enemy placement and explosions reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_enemy_count(mut self, count: usize) -> Self {
        self.enemy_count = count;
        self
    }

    /// Resize the play field. The player start and enemy spawn band follow
    /// the new width and height.
    pub fn with_field_size(mut self, width: f32, height: f32) -> Self {
        let scale = Vec2::new(width, height) / self.field_size;
        self.player_start *= scale;
        self.enemy_spawn_x = Span::new(self.enemy_spawn_x.min * scale.x, self.enemy_spawn_x.max * scale.x);
        self.enemy_despawn_y = height + (self.enemy_despawn_y - self.field_size.y);
        self.field_size = Vec2::new(width, height);
        self
    }

    /// Field size in whole pixels, for window and image dimensions.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.field_size.x.round() as u32, self.field_size.y.round() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_field() {
        let config = GameConfig::default();
        assert_eq!(config.pixel_size(), (700, 500));
        assert_eq!(config.enemy_count, 5);
        assert_eq!(config.fire_cooldown, 0.15);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let config = GameConfig::new().with_seed(9).with_enemy_count(12);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.enemy_count, 12);
    }

    #[test]
    fn test_field_resize_moves_start() {
        let config = GameConfig::new().with_field_size(1400.0, 1000.0);
        assert_eq!(config.pixel_size(), (1400, 1000));
        assert_eq!(config.player_start, Vec2::new(700.0, 900.0));
        assert_eq!(config.enemy_spawn_x.max, 1400.0);
        assert_eq!(config.enemy_despawn_y, 1100.0);
    }
}
