use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geocell::{cell_to_boundary, cell_to_geo, geo_to_cell, grid_distance, GeoCoord};

fn bench_indexing(c: &mut Criterion) {
  let geo = GeoCoord::from_degrees(37.775_270_2, -122.418_879_7);
  let cell = geo_to_cell(&geo, 9).unwrap();
  let other = geo_to_cell(&GeoCoord::from_degrees(37.789, -122.402), 9).unwrap();

  c.bench_function("geo_to_cell res 9", |b| {
    b.iter(|| geo_to_cell(black_box(&geo), black_box(9)).unwrap());
  });

  c.bench_function("cell_to_geo res 9", |b| {
    b.iter(|| cell_to_geo(black_box(cell)).unwrap());
  });

  c.bench_function("cell_to_boundary res 9", |b| {
    b.iter(|| cell_to_boundary(black_box(cell)).unwrap());
  });

  c.bench_function("grid_distance res 9", |b| {
    b.iter(|| grid_distance(black_box(cell), black_box(other)).unwrap());
  });
}

criterion_group!(benches, bench_indexing);
criterion_main!(benches);
