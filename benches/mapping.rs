use anglemap::{map_angle, DirectionMode};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_frames(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let camera = ((i * 7) % 180) as f64 - 90.0;
            let actuator = ((i * 3) % 720) as f64 - 360.0;
            (camera, actuator)
        })
        .collect()
}

fn bench_mapper(c: &mut Criterion) {
    let frames = make_frames(10_000);

    c.bench_function("map_angle_mixed_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for &(camera, actuator) in &frames {
                acc += map_angle(
                    black_box(camera),
                    black_box(actuator),
                    false,
                    DirectionMode::Mixed,
                );
            }
            acc
        })
    });

    c.bench_function("map_angle_offset_cw_10k", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for &(camera, actuator) in &frames {
                acc += map_angle(
                    black_box(camera),
                    black_box(actuator.abs()),
                    true,
                    DirectionMode::Clockwise,
                );
            }
            acc
        })
    });
}

criterion_group!(benches, bench_mapper);
criterion_main!(benches);
