use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use crux_algebra::{Matrix3D, Vector3D};

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix3d");
    let a = Matrix3D::from_rows([[1.0, 2.0, 3.0], [3.0, 2.0, 1.0], [1.0, 2.0, 3.0]]);
    let b = Matrix3D::from_rows([[4.0, 5.0, 6.0], [6.0, 5.0, 4.0], [4.0, 6.0, 5.0]]);
    let grid = vec![vec![1.0_f32; 3]; 3];

    group.bench_function(BenchmarkId::new("mul", ""), |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });

    group.bench_function(BenchmarkId::new("eq", ""), |bench| {
        bench.iter(|| black_box(black_box(a) == black_box(b)))
    });

    group.bench_function(BenchmarkId::new("try_from_grid", ""), |bench| {
        bench.iter(|| black_box(Matrix3D::try_from_grid(black_box(grid.as_slice()))))
    });

    group.finish();
}

fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector3d");
    let v = Vector3D::new(3.0, 4.0, 12.0);

    group.bench_function(BenchmarkId::new("normalize", ""), |bench| {
        bench.iter(|| black_box(black_box(v).normalize()))
    });

    group.finish();
}

criterion_group!(benches, bench_matrix, bench_vector);
criterion_main!(benches);
