use geocell::{
  are_neighbors, cell_area_km2, directed_edge, edge_boundary, edge_destination, edge_origin, edges_from_cell,
  exact_edge_length_km, geo_to_cell, hex_edge_length_avg_km, is_pentagon, is_valid_directed_edge, CellIndex, GeoCoord,
};

#[test]
fn pentagon_edges_scenario() {
  let pentagon = CellIndex(0x801dfffffffffff);
  assert!(is_pentagon(pentagon));

  let edges = edges_from_cell(pentagon).unwrap();
  assert_eq!(edges[0], CellIndex::NULL, "slot 0 is the deleted k axis");
  for edge in &edges[1..] {
    assert!(is_valid_directed_edge(*edge));
    assert_eq!(edge_origin(*edge), Ok(pentagon));
  }
}

#[test]
fn edge_identifiers_encode_adjacency() {
  let origin = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 9).unwrap();

  for edge in edges_from_cell(origin).unwrap() {
    let destination = edge_destination(edge).unwrap();
    assert_eq!(are_neighbors(origin, destination), Ok(true));
    assert_eq!(are_neighbors(destination, origin), Ok(true), "adjacency is symmetric");

    // re-deriving the edge from its endpoints reproduces it
    assert_eq!(directed_edge(origin, destination), Ok(edge));

    // the reverse edge exists and points back
    let reverse = directed_edge(destination, origin).unwrap();
    assert_eq!(edge_origin(reverse), Ok(destination));
    assert_eq!(edge_destination(reverse), Ok(origin));
  }
}

#[test]
fn forward_and_reverse_edges_share_geometry() {
  let origin = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 8).unwrap();
  for edge in edges_from_cell(origin).unwrap() {
    let destination = edge_destination(edge).unwrap();
    let reverse = directed_edge(destination, origin).unwrap();

    let forward_len = exact_edge_length_km(edge).unwrap();
    let reverse_len = exact_edge_length_km(reverse).unwrap();
    assert!(
      (forward_len - reverse_len).abs() < 1e-6,
      "shared edge has one length: {forward_len} vs {reverse_len}"
    );
  }
}

#[test]
fn edge_lengths_are_plausible() {
  let origin = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 9).unwrap();
  let avg = hex_edge_length_avg_km(9).unwrap();
  for edge in edges_from_cell(origin).unwrap() {
    let len = exact_edge_length_km(edge).unwrap();
    assert!(len > avg * 0.3 && len < avg * 3.0, "length {len} vs average {avg}");
  }
}

#[test]
fn edge_boundaries_have_two_or_more_vertices() {
  let origin = geo_to_cell(&GeoCoord::from_degrees(-36.85, 174.76), 7).unwrap();
  for edge in edges_from_cell(origin).unwrap() {
    let boundary = edge_boundary(edge).unwrap();
    assert!((2..=4).contains(&boundary.num_verts));
  }
}

#[test]
fn cell_area_scenario() {
  let cell = CellIndex(0x8928308280fffff);
  let area = cell_area_km2(cell).unwrap();
  assert!((area - 0.1053).abs() < 1e-3, "res 9 cell area, got {area}");
}
