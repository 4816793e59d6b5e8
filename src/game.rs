//! The arcade game around the explosion system.
//!
//! A player ship moves inside the field and shoots upward; enemies fall from
//! above with a little sideways drift. Shooting an enemy sets off a
//! [`ExplosionType::SmallHit`], crashing into one sets off a
//! [`ExplosionType::BigExplosion`].
//!
//! [`Game::update`] runs one frame and reports what happened as
//! [`GameEvent`]s, which is where a front end would play sounds.
//! [`Game::draw`] emits the frame onto any [`Canvas`].

use crate::canvas::Canvas;
use crate::config::GameConfig;
use crate::preset::ExplosionType;
use crate::random;
use crate::system::ExplosionSystem;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::debug;

/// Buttons held during a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl Controls {
    /// Unit-axis movement direction, y pointing down. Opposite keys cancel.
    pub fn direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Something that happened during [`Game::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player fired a bullet.
    Shot,
    /// A bullet destroyed an enemy; `at` is where the explosion went off.
    EnemyHit { at: Vec2 },
    /// An enemy rammed the player.
    PlayerHit { at: Vec2 },
}

/// Axis-aligned box, top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub size: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap; boxes that only touch do not intersect.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.cmplt(other.max()).all() && other.min.cmplt(self.max()).all()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    /// Center of the bullet.
    pub position: Vec2,
    pub radius: f32,
}

impl Bullet {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position - Vec2::splat(self.radius), Vec2::splat(self.radius * 2.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub position: Vec2,
    pub size: Vec2,
    /// Horizontal speed in pixels per second.
    pub drift: f32,
}

impl Enemy {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }
}

/// Running totals for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameStats {
    pub frames: u64,
    pub shots: u64,
    pub enemy_hits: u64,
    pub player_hits: u64,
}

/// Complete game state.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    player: Player,
    bullets: Vec<Bullet>,
    enemies: Vec<Enemy>,
    shoot_timer: f32,
    explosions: ExplosionSystem,
    rng: SmallRng,
    stats: GameStats,
    events: Vec<GameEvent>,
}

impl Game {
    /// Start a session. The explosion system gets its own generator, seeded
    /// from the game's, so one seed reproduces the whole run.
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => random::seeded(seed),
            None => random::time_seeded(),
        };
        let explosions = ExplosionSystem::seeded(rng.gen());

        let player = Player {
            position: config.player_start,
            size: config.player_size,
        };

        let mut game = Self {
            player,
            bullets: Vec::new(),
            enemies: Vec::with_capacity(config.enemy_count),
            shoot_timer: 0.0,
            explosions,
            rng,
            stats: GameStats::default(),
            events: Vec::new(),
            config,
        };

        for _ in 0..game.config.enemy_count {
            let enemy = game.respawned_enemy();
            game.enemies.push(enemy);
        }

        debug!(enemies = game.enemies.len(), seed = ?game.config.seed, "game started");
        game
    }

    /// Advance the game by `dt` seconds and return this frame's events.
    pub fn update(&mut self, dt: f32, controls: Controls) -> &[GameEvent] {
        self.events.clear();
        self.stats.frames += 1;

        self.explosions.advance(dt);
        self.shoot_timer += dt;

        self.move_player(dt, controls);
        if controls.fire && self.shoot_timer >= self.config.fire_cooldown {
            self.fire();
        }
        self.move_bullets(dt);
        self.move_enemies(dt);
        self.handle_bullet_hits();
        self.handle_player_hits();

        &self.events
    }

    /// Draw the frame: player, bullets, enemies, then explosions on top.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.fill_rect(self.player.position, self.player.size, self.config.player_color);
        for bullet in &self.bullets {
            canvas.fill_circle(bullet.position, bullet.radius, self.config.bullet_color);
        }
        for enemy in &self.enemies {
            canvas.fill_rect(enemy.position, enemy.size, self.config.enemy_color);
        }
        self.explosions.render(canvas);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn explosions(&self) -> &ExplosionSystem {
        &self.explosions
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    fn move_player(&mut self, dt: f32, controls: Controls) {
        let step = controls.direction() * self.config.player_speed * dt;
        let max = (self.config.field_size - self.player.size).max(Vec2::ZERO);
        self.player.position = (self.player.position + step).clamp(Vec2::ZERO, max);
    }

    fn fire(&mut self) {
        let radius = self.config.bullet_radius;
        let top = self.player.bounds();
        let position = Vec2::new(top.center().x, top.min.y + radius);
        self.bullets.push(Bullet { position, radius });

        self.shoot_timer = 0.0;
        self.stats.shots += 1;
        self.emit(GameEvent::Shot);
    }

    fn move_bullets(&mut self, dt: f32) {
        let step = self.config.bullet_speed * dt;
        let despawn_y = self.config.bullet_despawn_y;
        for bullet in &mut self.bullets {
            bullet.position.y -= step;
        }
        self.bullets.retain(|b| b.bounds().min.y >= despawn_y);
    }

    fn move_enemies(&mut self, dt: f32) {
        let field_width = self.config.field_size.x;
        for index in 0..self.enemies.len() {
            let enemy = &mut self.enemies[index];
            enemy.position += Vec2::new(enemy.drift, self.config.enemy_fall_speed) * dt;

            if enemy.position.y > self.config.enemy_despawn_y {
                self.enemies[index] = self.respawned_enemy();
                continue;
            }

            if enemy.position.x < -enemy.size.x {
                enemy.position.x = field_width;
            } else if enemy.position.x > field_width {
                enemy.position.x = -enemy.size.x;
            }
        }
    }

    /// Each enemy takes at most one bullet per frame.
    fn handle_bullet_hits(&mut self) {
        for index in 0..self.enemies.len() {
            let bounds = self.enemies[index].bounds();
            let Some(hit) = self.bullets.iter().position(|b| b.bounds().intersects(&bounds)) else {
                continue;
            };

            let at = bounds.center();
            self.explosions.spawn(at, ExplosionType::SmallHit);
            self.enemies[index] = self.respawned_enemy();
            self.bullets.remove(hit);

            self.stats.enemy_hits += 1;
            self.emit(GameEvent::EnemyHit { at });
        }
    }

    fn handle_player_hits(&mut self) {
        for index in 0..self.enemies.len() {
            if !self.player.bounds().intersects(&self.enemies[index].bounds()) {
                continue;
            }

            let at = self.player.bounds().center();
            self.explosions.spawn(at, ExplosionType::BigExplosion);
            self.player.position = self.config.player_start;
            self.enemies[index] = self.respawned_enemy();

            self.stats.player_hits += 1;
            self.emit(GameEvent::PlayerHit { at });
        }
    }

    /// Fresh enemy somewhere above the field.
    fn respawned_enemy(&mut self) -> Enemy {
        let x = self.config.enemy_spawn_x.sample(&mut self.rng);
        let y = -self.rng.gen_range(0.0..self.config.enemy_spawn_depth.max(f32::EPSILON));
        let drift = self.config.enemy_drift.sample(&mut self.rng);
        Enemy {
            position: Vec2::new(x, y),
            size: self.config.enemy_size,
            drift,
        }
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, frame = self.stats.frames, "game event");
        self.events.push(event);
    }
}

/// Scripted controls for headless runs: fire held the whole time while the
/// ship sweeps left and right.
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Seconds for one full left-then-right sweep.
    period: f32,
    elapsed: f32,
}

impl Autopilot {
    pub fn new(period: f32) -> Self {
        Self {
            period: period.max(f32::EPSILON),
            elapsed: 0.0,
        }
    }

    /// Controls for the next frame of length `dt`.
    pub fn next(&mut self, dt: f32) -> Controls {
        let phase = self.elapsed / self.period;
        self.elapsed = (self.elapsed + dt) % self.period;

        let going_left = phase < 0.5;
        Controls {
            left: going_left,
            right: !going_left,
            fire: true,
            ..Controls::default()
        }
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(4.0)
    }
}
