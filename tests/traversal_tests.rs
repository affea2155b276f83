use geocell::{
  are_neighbors, geo_to_cell, grid_distance, grid_line, grid_line_size, local_ij_to_cell, local_ijk_to_cell,
  to_local_ij, to_local_ijk, CellIndex, CoordIjk, GeoCoord, GridError,
};

#[test]
fn distance_and_line_scenario() {
  let a = CellIndex(0x8928308280fffff);
  let b = CellIndex(0x8928308280bffff);
  assert_eq!(grid_distance(a, b), Ok(1));
  assert_eq!(grid_line(a, b).unwrap(), vec![a, b]);
}

#[test]
fn local_ijk_round_trips_a_neighborhood() {
  let origin = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 7).unwrap();

  let ijk = to_local_ijk(origin, origin).unwrap();
  assert_eq!(ijk, CoordIjk::default());
  assert_eq!(local_ijk_to_cell(origin, &ijk), Ok(origin));

  // every immediate neighbor unfolds to a unit coordinate and folds back
  for edge in geocell::edges_from_cell(origin).unwrap() {
    if edge == CellIndex::NULL {
      continue;
    }
    let neighbor = geocell::edge_destination(edge).unwrap();
    let ijk = to_local_ijk(origin, neighbor).unwrap();
    assert_eq!(CoordIjk::default().distance_to(ijk), 1);
    assert_eq!(local_ijk_to_cell(origin, &ijk), Ok(neighbor));
  }
}

#[test]
fn line_properties_along_a_walk() {
  let start = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 9).unwrap();
  let end = geo_to_cell(&GeoCoord::from_degrees(37.789, -122.402), 9).unwrap();

  let distance = grid_distance(start, end).unwrap();
  assert!(distance > 1, "test points are several cells apart");

  let line = grid_line(start, end).unwrap();
  assert_eq!(line.len() as i64, distance + 1);
  assert_eq!(grid_line_size(start, end), Ok(distance + 1));
  assert_eq!(line.first(), Some(&start));
  assert_eq!(line.last(), Some(&end));

  for pair in line.windows(2) {
    assert_eq!(are_neighbors(pair[0], pair[1]), Ok(true), "line cells are consecutive neighbors");
  }

  // distance along the line is monotonic
  for (i, cell) in line.iter().enumerate() {
    assert_eq!(grid_distance(start, *cell), Ok(i as i64));
  }
}

#[test]
fn local_ij_round_trip() {
  let origin = geo_to_cell(&GeoCoord::from_degrees(48.86, 2.35), 6).unwrap();
  let nearby = geo_to_cell(&GeoCoord::from_degrees(48.9, 2.41), 6).unwrap();

  let ij = to_local_ij(origin, nearby).unwrap();
  assert_eq!(local_ij_to_cell(origin, &ij), Ok(nearby));
}

#[test]
fn mismatched_resolutions_fail() {
  let a = geo_to_cell(&GeoCoord::from_degrees(10.0, 10.0), 5).unwrap();
  let b = geo_to_cell(&GeoCoord::from_degrees(10.0, 10.0), 6).unwrap();
  assert_eq!(grid_distance(a, b), Err(GridError::ResMismatch));
  assert_eq!(to_local_ijk(a, b), Err(GridError::ResMismatch));
}

#[test]
fn symmetric_distances() {
  let a = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 8).unwrap();
  let b = geo_to_cell(&GeoCoord::from_degrees(37.78, -122.41), 8).unwrap();
  assert_eq!(grid_distance(a, b), grid_distance(b, a));
}
