//! Benchmarks for the CPU explosion system and the software rasterizer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skyblast::raster::rasterize;
use skyblast::{Autopilot, DrawList, ExplosionSystem, ExplosionType, Game, GameConfig, Rgba8, Vec2};

const DT: f32 = 1.0 / 60.0;

/// System with `count` explosions of `kind`, spread across the field.
fn populated(kind: ExplosionType, count: usize) -> ExplosionSystem {
    let mut system = ExplosionSystem::seeded(42);
    for i in 0..count {
        let x = (i % 20) as f32 * 35.0;
        let y = (i / 20) as f32 * 25.0;
        system.spawn(Vec2::new(x, y), kind);
    }
    system
}

fn bench_spawn(c: &mut Criterion) {
    let mut group = c.benchmark_group("spawn");

    for kind in ExplosionType::ALL {
        group.bench_function(format!("{kind:?}"), |b| {
            let mut system = ExplosionSystem::seeded(1);
            b.iter(|| {
                system.spawn(black_box(Vec2::new(350.0, 250.0)), kind);
                // Keep the system from growing without bound.
                if system.len() >= 64 {
                    system.advance(10.0);
                }
            })
        });
    }

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [1usize, 10, 100] {
        group.bench_with_input(BenchmarkId::new("big_explosion", count), &count, |b, &count| {
            b.iter_batched(
                || populated(ExplosionType::BigExplosion, count),
                |mut system| {
                    system.advance(black_box(DT));
                    system
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let system = populated(ExplosionType::BigExplosion, 100);
    let mut list = DrawList::new();

    group.bench_function("draw_list_100_big", |b| {
        b.iter(|| {
            list.clear();
            system.render(&mut list);
            black_box(list.len())
        })
    });

    list.clear();
    system.render(&mut list);
    group.bench_function("rasterize_100_big", |b| {
        b.iter(|| black_box(rasterize(&list, 700, 500, Rgba8::rgb(50, 50, 50))))
    });

    group.finish();
}

fn bench_game_frame(c: &mut Criterion) {
    c.bench_function("game_frame", |b| {
        let mut game = Game::new(GameConfig::new().with_seed(7));
        let mut pilot = Autopilot::default();
        let mut list = DrawList::new();
        b.iter(|| {
            let controls = pilot.next(DT);
            game.update(DT, controls);
            list.clear();
            game.draw(&mut list);
            black_box(list.len())
        })
    });
}

criterion_group!(benches, bench_spawn, bench_advance, bench_render, bench_game_frame);
criterion_main!(benches);
