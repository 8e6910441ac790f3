//! Benchmarks for squishy physics simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use squishy::*;

fn bench_default_scene(c: &mut Criterion) {
    c.bench_function("default_scene_60_frames", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::with_default_scene().unwrap();
            let input = FrameInput::idle(Vec2::new(0.0, 0.0));
            for _ in 0..60 {
                world.frame(1.0 / 60.0, &input, &mut NoOpStepObserver);
            }
            world.snapshot()
        });
    });
}

fn bench_large_body(c: &mut Criterion) {
    c.bench_function("body_20x20_60_steps", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::new(WorldConfig::new(), SolverConfig::new()).unwrap();
            world.spawn_with(Vec2::new(400.0, 100.0), &BodyConfig::new(20, 20)).unwrap();
            for _ in 0..60 {
                world.step(1.0 / 60.0, &mut NoOpStepObserver);
            }
            world.bodies()[0].positions()
        });
    });
}

fn bench_crowded_scene(c: &mut Criterion) {
    c.bench_function("eight_bodies_dragged_60_frames", |b| {
        b.iter(|| {
            let mut world: World<f32> = World::new(WorldConfig::new(), SolverConfig::new()).unwrap();
            for i in 0..8 {
                let x = 100.0 + (i % 4) as f32 * 400.0;
                let y = 100.0 + (i / 4) as f32 * 350.0;
                world.spawn(Vec2::new(x, y)).unwrap();
            }
            let mut pointer = Vec2::new(101.0, 101.0);
            world.frame(1.0 / 60.0, &FrameInput { pressed: true, held: true, ..FrameInput::idle(pointer) }, &mut NoOpStepObserver);
            for _ in 0..60 {
                pointer = pointer + Vec2::new(8.0, 3.0);
                world.frame(1.0 / 60.0, &FrameInput { held: true, ..FrameInput::idle(pointer) }, &mut NoOpStepObserver);
            }
            world.snapshot()
        });
    });
}

criterion_group!(benches, bench_default_scene, bench_large_body, bench_crowded_scene);
criterion_main!(benches);
