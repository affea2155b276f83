//! Exact cell and edge metrics on the sphere.

use crate::cell::is_valid_cell;
use crate::constants::{EARTH_RADIUS_KM, MAX_RES};
use crate::edges::edge_boundary;
use crate::error::GridError;
use crate::indexing::{cell_to_boundary, cell_to_geo};
use crate::math::spherical::point_distance_rads;
use crate::types::{CellIndex, GeoCoord};

/// Spherical excess of a triangle with the given great-circle side
/// lengths, by L'Huilier's theorem.
fn triangle_edge_lengths_to_area(a: f64, b: f64, c: f64) -> f64 {
  let s = (a + b + c) / 2.0;
  let t = ((s / 2.0).tan() * ((s - a) / 2.0).tan() * ((s - b) / 2.0).tan() * ((s - c) / 2.0).tan()).max(0.0);
  4.0 * t.sqrt().atan()
}

fn triangle_area(a: &GeoCoord, b: &GeoCoord, c: &GeoCoord) -> f64 {
  triangle_edge_lengths_to_area(
    point_distance_rads(a, b),
    point_distance_rads(b, c),
    point_distance_rads(c, a),
  )
}

/// Cell area in square radians: the boundary fanned into spherical
/// triangles about the cell center, summed.
pub fn cell_area_rads2(cell: CellIndex) -> Result<f64, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }
  let center = cell_to_geo(cell)?;
  let boundary = cell_to_boundary(cell)?;

  let mut area = 0.0;
  for i in 0..boundary.num_verts {
    let j = (i + 1) % boundary.num_verts;
    area += triangle_area(&boundary.verts[i], &boundary.verts[j], &center);
  }
  Ok(area)
}

/// Cell area in square kilometers.
pub fn cell_area_km2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Cell area in square meters.
pub fn cell_area_m2(cell: CellIndex) -> Result<f64, GridError> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

/// Exact length of a directed edge in radians: the haversine arc lengths
/// between consecutive boundary vertices, summed.
pub fn exact_edge_length_rads(edge: CellIndex) -> Result<f64, GridError> {
  let boundary = edge_boundary(edge)?;
  let mut length = 0.0;
  for pair in boundary.verts().windows(2) {
    length += point_distance_rads(&pair[0], &pair[1]);
  }
  Ok(length)
}

/// Exact length of a directed edge in kilometers.
pub fn exact_edge_length_km(edge: CellIndex) -> Result<f64, GridError> {
  Ok(exact_edge_length_rads(edge)? * EARTH_RADIUS_KM)
}

/// Exact length of a directed edge in meters.
pub fn exact_edge_length_m(edge: CellIndex) -> Result<f64, GridError> {
  Ok(exact_edge_length_km(edge)? * 1000.0)
}

/// Average hexagon area per resolution in square kilometers (pentagons
/// excluded).
pub fn hex_area_avg_km2(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const AREAS_KM2: [f64; (MAX_RES + 1) as usize] = [
    4.357_449_416_078_383e6, 6.097_884_417_941_332e5, 8.680_178_039_899_72e4,
    1.239_343_465_508_816e4, 1.770_347_654_491_307e3, 2.529_038_581_819_449e2,
    3.612_906_216_441_245e1, 5.161_293_359_717_191, 7.373_275_975_944_177e-1,
    1.053_325_134_272_067e-1, 1.504_750_190_766_435e-2, 2.149_643_129_451_879e-3,
    3.070_918_756_316_06e-4, 4.387_026_794_728_296e-5, 6.267_181_135_324_313e-6,
    8.953_115_907_605_79e-7,
  ];
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidArg);
  }
  Ok(AREAS_KM2[res as usize])
}

/// Average hexagon area per resolution in square meters.
pub fn hex_area_avg_m2(res: i32) -> Result<f64, GridError> {
  Ok(hex_area_avg_km2(res)? * 1e6)
}

/// Average hexagon edge length per resolution in kilometers.
pub fn hex_edge_length_avg_km(res: i32) -> Result<f64, GridError> {
  #[rustfmt::skip]
  const LENS_KM: [f64; (MAX_RES + 1) as usize] = [
    1281.256_011, 483.056_839_1, 182.512_956_5, 68.979_221_79, 26.071_759_68,
    9.854_090_99, 3.724_532_667, 1.406_475_763, 0.531_414_01, 0.200_786_148,
    0.075_863_783, 0.028_663_897, 0.010_830_188, 0.004_092_01, 0.001_546_1,
    0.000_584_169,
  ];
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidArg);
  }
  Ok(LENS_KM[res as usize])
}

/// Average hexagon edge length per resolution in meters.
pub fn hex_edge_length_avg_m(res: i32) -> Result<f64, GridError> {
  Ok(hex_edge_length_avg_km(res)? * 1000.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::edges::edges_from_cell;
  use crate::indexing::geo_to_cell;

  #[test]
  fn known_cell_area() {
    let cell = CellIndex(0x85283473fffffff);
    let area = cell_area_km2(cell).unwrap();
    assert!((area - 265.092_558_128_3).abs() < 1.0, "res 5 hexagon near SF, got {area}");

    let rads2 = cell_area_rads2(cell).unwrap();
    assert!((rads2 - 6.531e-6).abs() < 1e-8, "got {rads2}");
  }

  #[test]
  fn area_units_are_consistent() {
    let cell = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 9).unwrap();
    let rads2 = cell_area_rads2(cell).unwrap();
    let km2 = cell_area_km2(cell).unwrap();
    let m2 = cell_area_m2(cell).unwrap();
    assert!((km2 - rads2 * EARTH_RADIUS_KM * EARTH_RADIUS_KM).abs() < 1e-12);
    assert!((m2 - km2 * 1e6).abs() < 1e-3);
  }

  #[test]
  fn cell_area_tracks_average() {
    for res in 0..=6 {
      let cell = geo_to_cell(&GeoCoord::from_degrees(17.0, 5.0), res).unwrap();
      let area = cell_area_km2(cell).unwrap();
      let avg = hex_area_avg_km2(res).unwrap();
      assert!(
        area > avg * 0.4 && area < avg * 2.5,
        "res {res}: area {area} vs average {avg}"
      );
    }
  }

  #[test]
  fn edge_lengths_are_positive_and_consistent() {
    let cell = geo_to_cell(&GeoCoord::from_degrees(37.775, -122.418), 8).unwrap();
    let avg = hex_edge_length_avg_km(8).unwrap();
    for edge in edges_from_cell(cell).unwrap() {
      let rads = exact_edge_length_rads(edge).unwrap();
      let km = exact_edge_length_km(edge).unwrap();
      assert!(rads > 0.0);
      assert!((km - rads * EARTH_RADIUS_KM).abs() < 1e-12);
      assert!((exact_edge_length_m(edge).unwrap() - km * 1000.0).abs() < 1e-6);
      assert!(km > avg * 0.3 && km < avg * 3.0, "edge length {km} vs average {avg}");
    }
  }

  #[test]
  fn invalid_inputs_are_rejected() {
    assert_eq!(cell_area_rads2(CellIndex::NULL), Err(GridError::InvalidArg));
    assert_eq!(exact_edge_length_rads(CellIndex::NULL), Err(GridError::InvalidArg));
    assert_eq!(hex_area_avg_km2(16), Err(GridError::InvalidArg));
    assert_eq!(hex_edge_length_avg_km(-1), Err(GridError::InvalidArg));
  }
}
