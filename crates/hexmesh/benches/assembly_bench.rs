//! Criterion benchmarks for mesh assembly (vertex/edge dedup + wire linking).
//! Focus sizes: n³ box grids for n in {2, 3, 4}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexmesh::construct::Operation;
use hexmesh::geometry::Vec3;
use hexmesh::grading::Chop;
use hexmesh::Mesh;

fn grid_mesh(n: usize) -> Mesh {
    let mut mesh = Mesh::new();
    for x in 0..n {
        for y in 0..n {
            for z in 0..n {
                let origin = Vec3::new(x as f64, y as f64, z as f64);
                let mut op = Operation::cuboid(origin, origin + Vec3::new(1.0, 1.0, 1.0));
                if x == 0 && y == 0 && z == 0 {
                    for axis in 0..3 {
                        op.chop(axis, Chop::new().count(8));
                    }
                }
                mesh.add(&op).unwrap();
            }
        }
    }
    mesh
}

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("assembly");
    for &n in &[2usize, 3, 4] {
        group.bench_with_input(BenchmarkId::new("box_grid", n), &n, |b, &n| {
            b.iter_batched(
                || grid_mesh(n),
                |mut mesh| {
                    mesh.assemble().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_assembly);
criterion_main!(benches);
