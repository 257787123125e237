use criterion::{criterion_group, criterion_main, Criterion};
use geojson_relate::Shape;

/// A closed counter-clockwise ring with `vertices` corners around a center.
fn ring(center: (f64, f64), vertices: usize, radius: f64) -> Vec<(f64, f64)> {
    let mut coordinates: Vec<(f64, f64)> = (0..vertices)
        .map(|i| {
            let angle = (i as f64) / (vertices as f64) * std::f64::consts::PI * 2.0;
            (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            )
        })
        .collect();
    coordinates.push(coordinates[0]);
    coordinates
}

pub fn point_in_polygon_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    let polygon = Shape::polygon(vec![ring((0., 0.), 512, 10.)]);
    let inside = Shape::point(0.5, 0.5);
    let outside = Shape::point(50., 50.);
    group.bench_function("point_in_polygon", |b| {
        b.iter(|| {
            polygon.intersects(&inside).unwrap();
            polygon.intersects(&outside).unwrap();
        })
    });
    group.finish();
}

pub fn polygon_pair_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    group.sample_size(50);
    let a = Shape::polygon(vec![ring((0., 0.), 128, 10.)]);
    let b = Shape::polygon(vec![ring((5., 5.), 128, 10.)]);
    let far = Shape::polygon(vec![ring((50., 50.), 128, 10.)]);
    group.bench_function("polygon_intersects_polygon", |bench| {
        bench.iter(|| {
            a.intersects(&b).unwrap();
            a.intersects(&far).unwrap();
        })
    });
    group.bench_function("polygon_contains_polygon", |bench| {
        let small = Shape::polygon(vec![ring((0., 0.), 64, 1.)]);
        bench.iter(|| a.contains(&small).unwrap())
    });
    group.finish();
}

pub fn circle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");
    let circle = Shape::circle((0., 0.), "250km");
    let line = Shape::line_string(ring((3., 3.), 64, 2.));
    group.bench_function("circle_intersects_line", |b| {
        b.iter(|| circle.intersects(&line).unwrap())
    });
    group.finish();
}

criterion_group!(benches, point_in_polygon_bench, polygon_pair_bench, circle_bench);
criterion_main!(benches);
