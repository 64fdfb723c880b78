//! Criterion benchmarks for grading propagation over a chain of blocks
//! where only the first block carries chops.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hexmesh::construct::Operation;
use hexmesh::geometry::Vec3;
use hexmesh::grading::Chop;
use hexmesh::Mesh;

fn chain_mesh(length: usize) -> Mesh {
    let mut mesh = Mesh::new();
    for i in 0..length {
        let origin = Vec3::new(i as f64, 0.0, 0.0);
        let mut op = Operation::cuboid(origin, origin + Vec3::new(1.0, 1.0, 1.0));
        if i == 0 {
            op.chop(0, Chop::new().count(10));
            op.chop(1, Chop::new().start_size(0.02).end_size(0.2));
            op.chop(2, Chop::new().count(10));
        }
        mesh.add(&op).unwrap();
    }
    mesh.assemble().unwrap();
    mesh
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("grading");
    for &n in &[4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::new("propagate_chain", n), &n, |b, &n| {
            b.iter_batched(
                || chain_mesh(n),
                |mut mesh| {
                    mesh.ensure_graded().unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_propagation);
criterion_main!(benches);
