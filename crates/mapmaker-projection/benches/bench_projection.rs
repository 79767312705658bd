use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mapmaker_projection::{Interval, Projection};

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Projection");

    let source = Interval::new(-180.0, -90.0, 180.0, 90.0).unwrap();
    let screen = Interval::new(0.0, 0.0, 1920.0, 1080.0).unwrap();

    let projections = [
        ("affine", Projection::new(source, screen)),
        ("unit", Projection::unit(source)),
        ("symmetric_unit", Projection::symmetric_unit(source)),
        ("identity", Projection::identity(source)),
    ];

    for num_points in [1_000usize, 100_000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));

        let points = (0..*num_points)
            .map(|i| {
                let t = i as f64 / *num_points as f64;
                (-180.0 + 360.0 * t, -90.0 + 180.0 * (1.0 - t))
            })
            .collect::<Vec<_>>();

        for (name, projection) in projections.iter() {
            group.bench_with_input(
                BenchmarkId::new(*name, num_points),
                &points,
                |b, points| {
                    b.iter(|| {
                        for &(x, y) in points.iter() {
                            black_box(projection.translate(black_box(x), black_box(y)));
                        }
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
