mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use geom_kernel::{Context, Geometry, GeometryType, Metrics};
use utils::get_random_shells;

pub fn build_polygons_benchmark(c: &mut Criterion) {
    let context = Context::new().unwrap();
    let mut group = c.benchmark_group("build_polygons");

    for &n_vertices in &[8, 64, 512] {
        let shells = get_random_shells(100, n_vertices, 342);
        group.bench_function(BenchmarkId::new("polygon", n_vertices), |b| {
            b.iter(|| {
                for shell in &shells {
                    let polygon = Geometry::polygon(&context, shell, &[]).unwrap();
                    black_box(polygon.area().unwrap());
                }
            })
        });
        group.bench_function(BenchmarkId::new("multi_polygon", n_vertices), |b| {
            b.iter(|| {
                let polygons = shells
                    .iter()
                    .map(|shell| Geometry::polygon(&context, shell, &[]))
                    .collect::<geom_kernel::Result<Vec<_>>>()
                    .unwrap();
                let multi =
                    Geometry::multi_geometry(&context, polygons, GeometryType::MultiPolygon)
                        .unwrap();
                black_box(multi.collection.unwrap());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, build_polygons_benchmark);

criterion_main!(benches);
