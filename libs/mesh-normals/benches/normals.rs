use config::constants::{NormalsConfig, SMOOTHING_THRESHOLD_COS};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mesh_normals::primitives::create_sphere;
use mesh_normals::{
    build_face_face_adjacency, build_vertex_face_adjacency, compute_corner_normals,
    compute_face_normals, compute_vertex_normals, compute_vertex_normals_with_config,
};

const SEGMENTS: [u32; 3] = [32, 128, 256];

fn bench_adjacency(c: &mut Criterion) {
    let mut group = c.benchmark_group("adjacency");

    for &segments in &SEGMENTS {
        let mesh = create_sphere(1.0, segments).unwrap();
        group.bench_with_input(
            BenchmarkId::new("face_face", format!("{}f", mesh.face_count())),
            &mesh,
            |b, mesh| {
                b.iter(|| {
                    let vf = build_vertex_face_adjacency(mesh).unwrap();
                    black_box(build_face_face_adjacency(mesh, &vf).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_normals(c: &mut Criterion) {
    let mut group = c.benchmark_group("normals");

    for &segments in &SEGMENTS {
        let mesh = create_sphere(1.0, segments).unwrap();
        let id = format!("{}f", mesh.face_count());

        group.bench_with_input(BenchmarkId::new("face", &id), &mesh, |b, mesh| {
            b.iter(|| black_box(compute_face_normals(mesh).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("vertex", &id), &mesh, |b, mesh| {
            b.iter(|| black_box(compute_vertex_normals(mesh).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("corner", &id), &mesh, |b, mesh| {
            b.iter(|| black_box(compute_corner_normals(mesh, SMOOTHING_THRESHOLD_COS).unwrap()));
        });
    }

    group.finish();
}

fn bench_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_normals_parallel");
    group.sample_size(20);

    let mesh = create_sphere(1.0, 256).unwrap();
    let configs = [
        ("sequential", NormalsConfig::sequential()),
        ("parallel", NormalsConfig::default().with_parallel_threshold(1)),
    ];

    for (name, config) in &configs {
        group.bench_with_input(BenchmarkId::from_parameter(name), config, |b, config| {
            b.iter(|| black_box(compute_vertex_normals_with_config(&mesh, config).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_adjacency,
    bench_normals,
    bench_parallel_threshold
);
criterion_main!(benches);
