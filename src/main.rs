//! Skyblast binary: play in a window, or run the autopilot headless.
//!
//! Usage:
//!   skyblast [--seed N] [--enemies N]
//!   skyblast --headless [--frames N] [--snapshot out.png]
//!   RUST_LOG=skyblast=debug skyblast

use clap::Parser;
use skyblast::raster::{rasterize, save_png};
use skyblast::{Autopilot, DrawList, Game, GameConfig, GameEvent};
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::filter::EnvFilter;

/// Simulation step for headless runs.
const HEADLESS_DT: f32 = 1.0 / 60.0;

#[derive(Parser)]
#[command(name = "skyblast")]
#[command(about = "Top-down arcade shooter with particle explosions")]
struct Args {
    /// Seed for enemy placement and explosions (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of falling enemies
    #[arg(long, default_value_t = 5)]
    enemies: usize,

    /// Run without a window, driven by the autopilot
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode
    #[arg(long, default_value_t = 600, requires = "headless")]
    frames: u64,

    /// Write the final headless frame to this PNG file
    #[arg(long, requires = "headless")]
    snapshot: Option<std::path::PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skyblast=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = GameConfig::new().with_enemy_count(args.enemies);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let result = if args.headless {
        run_headless(config, args.frames, args.snapshot.as_deref())
    } else {
        skyblast::window::run(config).map_err(Into::into)
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run_headless(
    config: GameConfig,
    frames: u64,
    snapshot: Option<&std::path::Path>,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = config.pixel_size();
    let background = config.background;
    let mut game = Game::new(config);
    let mut pilot = Autopilot::default();

    info!(frames, "running headless");
    for _ in 0..frames {
        let controls = pilot.next(HEADLESS_DT);
        for event in game.update(HEADLESS_DT, controls) {
            if let GameEvent::PlayerHit { at } = event {
                info!(x = at.x, y = at.y, "player crashed");
            }
        }
    }

    let stats = game.stats();
    info!(
        frames = stats.frames,
        shots = stats.shots,
        enemy_hits = stats.enemy_hits,
        player_hits = stats.player_hits,
        explosions = game.explosions().len(),
        live_particles = game.explosions().live_particle_count(),
        "headless run finished"
    );

    if let Some(path) = snapshot {
        let mut frame = DrawList::new();
        game.draw(&mut frame);
        let image = rasterize(&frame, width, height, background);
        save_png(&image, path)?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(())
}
