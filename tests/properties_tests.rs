use geocell::{
  cell_to_geo, center_child, children, compact, format_id, geo_to_cell, grid_distance, grid_line,
  hex_edge_length_avg_km, is_valid_cell, parent, parse_id, point_distance_km, GeoCoord,
};
use proptest::prelude::*;

fn arb_geo() -> impl Strategy<Value = GeoCoord> {
  (-89.0f64..89.0, -179.9f64..179.9).prop_map(|(lat, lng)| GeoCoord::from_degrees(lat, lng))
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(64))]

  #[test]
  fn geo_round_trip_stays_within_cell(geo in arb_geo(), res in 0i32..=9) {
    let cell = geo_to_cell(&geo, res).unwrap();
    prop_assert!(is_valid_cell(cell));

    let center = cell_to_geo(cell).unwrap();
    // the center is within a cell radius of the input; max edge length is
    // bounded by a small multiple of the per-resolution average
    let bound_km = hex_edge_length_avg_km(res).unwrap() * 4.0;
    prop_assert!(point_distance_km(&center, &geo) <= bound_km);
  }

  #[test]
  fn string_round_trip(geo in arb_geo(), res in 0i32..=12) {
    let cell = geo_to_cell(&geo, res).unwrap();
    prop_assert_eq!(parse_id(&format_id(cell)).unwrap(), cell);
    prop_assert_eq!(parse_id(&format_id(cell).to_uppercase()).unwrap(), cell);
  }

  #[test]
  fn parent_of_children_is_identity(geo in arb_geo(), res in 0i32..=8, delta in 1i32..=2) {
    let cell = geo_to_cell(&geo, res).unwrap();
    for child in children(cell, res + delta).unwrap() {
      prop_assert_eq!(parent(child, res).unwrap(), cell);
      prop_assert_eq!(parent(child, res + delta).unwrap(), child);
    }
  }

  #[test]
  fn center_child_composes(geo in arb_geo(), res in 0i32..=6) {
    let cell = geo_to_cell(&geo, res).unwrap();
    let r1 = res + 2;
    let r2 = res + 4;
    let via = center_child(center_child(cell, r1).unwrap(), r2).unwrap();
    prop_assert_eq!(center_child(cell, r2).unwrap(), via);
  }

  #[test]
  fn compact_children_yields_parent(geo in arb_geo(), res in 0i32..=7) {
    let cell = geo_to_cell(&geo, res).unwrap();
    let kids = children(cell, res + 1).unwrap();
    prop_assert_eq!(compact(&kids).unwrap(), vec![cell]);
  }

  #[test]
  fn lines_are_contiguous(geo in arb_geo(), res in 5i32..=9) {
    let start = geo_to_cell(&geo, res).unwrap();
    // a destination a few cells away in a fixed bearing
    let nearby = GeoCoord {
      lat: geo.lat + 3e-3,
      lng: geo.lng + 3e-3,
    };
    let end = geo_to_cell(&nearby, res).unwrap();

    match grid_distance(start, end) {
      Ok(distance) => {
        let line = grid_line(start, end).unwrap();
        prop_assert_eq!(line.len() as i64, distance + 1);
        prop_assert_eq!(line[0], start);
        prop_assert_eq!(*line.last().unwrap(), end);
        for pair in line.windows(2) {
          prop_assert_eq!(grid_distance(pair[0], pair[1]).unwrap(), 1);
        }
      }
      // pentagon distortion can make the pair unreachable; that is a
      // legitimate outcome, not a property violation
      Err(geocell::GridError::Pentagon) | Err(geocell::GridError::NotNeighbor) => {}
      Err(e) => prop_assert!(false, "unexpected error {:?}", e),
    }
  }
}
