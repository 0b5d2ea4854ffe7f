//! Benchmark of single-cell triangulation and outline extraction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marching_cube::{
  outline_segments, triangulate_configuration, triangulate_into, CornerStates, CubeGeometry,
  TriangleSoup, MAX_POINTS,
};

/// Triangulate every configuration once per iteration.
fn bench_all_configurations(c: &mut Criterion) {
  let geometry = CubeGeometry::default();

  c.bench_function("triangulate (all 256 configurations)", |b| {
    b.iter(|| {
      for configuration in 0..=255u8 {
        black_box(triangulate_configuration(black_box(configuration), &geometry));
      }
    })
  });
}

/// Reuse one soup across passes, as the visualizer does.
fn bench_triangulate_into(c: &mut Criterion) {
  let geometry = CubeGeometry::default();
  let mut soup = TriangleSoup::new();
  soup.positions.reserve(MAX_POINTS);

  c.bench_function("triangulate_into (reused soup)", |b| {
    b.iter(|| {
      for configuration in 0..=255u8 {
        let corners = CornerStates::from_configuration(configuration);
        triangulate_into(&corners, &geometry, &mut soup);
        black_box(&soup);
      }
    })
  });
}

fn bench_outline(c: &mut Criterion) {
  let geometry = CubeGeometry::default();
  let mut group = c.benchmark_group("outline_segments");

  // Single triangle, planar quad, and a five-triangle case
  for configuration in [0b0000_0001u8, 0b0000_0011, 0b0011_1101] {
    let soup = triangulate_configuration(configuration, &geometry);
    group.bench_with_input(
      BenchmarkId::from_parameter(format!("{configuration:#010b}")),
      &soup,
      |b, soup| b.iter(|| black_box(outline_segments(soup, 1.0))),
    );
  }

  group.finish();
}

criterion_group!(
  benches,
  bench_all_configurations,
  bench_triangulate_into,
  bench_outline
);
criterion_main!(benches);
