use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quadrot::{compose_rotate, rotate_direct, Execution, PixelGrid, RotationAngle};
use std::hint::black_box;

fn make_grid(rows: usize, cols: usize) -> PixelGrid {
    PixelGrid::from_fn(rows, cols, 3, |r, c, ch| {
        (((c * 13) ^ (r * 7) ^ (c * r) ^ ch) & 0xFF) as u8
    })
    .unwrap()
}

fn bench_rotators(c: &mut Criterion) {
    let grid = make_grid(1080, 1920);
    let mut group = c.benchmark_group("rotate_1920x1080");

    for angle in RotationAngle::ALL {
        let deg = angle.degrees();
        group.bench_with_input(BenchmarkId::new("direct_seq", deg), &angle, |b, &angle| {
            b.iter(|| black_box(rotate_direct(&grid, angle, Execution::Sequential).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("direct_par", deg), &angle, |b, &angle| {
            b.iter(|| black_box(rotate_direct(&grid, angle, Execution::Parallel).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("compose", deg), &angle, |b, &angle| {
            b.iter(|| black_box(compose_rotate(&grid, angle).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rotators);
criterion_main!(benches);
