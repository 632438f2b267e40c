use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;

use burrow_blocks::default_materials;
use burrow_world::{ChunkCoords, Generator};

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat");
    let generator = Generator::new(0xC0FFEE, default_materials()).unwrap();
    group.bench_function("flat_32x32x62", |b| {
        b.iter(|| black_box(generator.flat(black_box(3), black_box(-7))))
    });
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.measurement_time(Duration::from_secs(10));
    let generator = Generator::new(1337, default_materials()).unwrap();
    group.bench_function("generate_32x32x62", |b| {
        b.iter(|| black_box(generator.generate(black_box(0), black_box(0))))
    });
    // 3x3 ring around the origin, the area a player can walk.
    let ring: Vec<ChunkCoords> = (-1..=1)
        .flat_map(|y| (-1..=1).map(move |x| ChunkCoords::new(x, y)))
        .collect();
    group.bench_function("generate_many_3x3", |b| {
        b.iter(|| black_box(generator.generate_many(&ring)))
    });
    group.finish();
}

criterion_group!(benches, bench_flat, bench_generate);
criterion_main!(benches);
