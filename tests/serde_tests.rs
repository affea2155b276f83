#![cfg(feature = "serde")]

use geocell::{CellIndex, CoordIjk, Digit, GeoCoord};

#[test]
fn cell_index_serializes_as_integer() {
  let cell = CellIndex(0x8928308280fffff);
  let json = serde_json::to_string(&cell).unwrap();
  assert_eq!(json, "617700169958293503");
  let back: CellIndex = serde_json::from_str(&json).unwrap();
  assert_eq!(back, cell);

  assert_eq!(serde_json::to_string(&CellIndex::NULL).unwrap(), "0");
}

#[test]
fn geo_coord_round_trip() {
  let geo = GeoCoord { lat: 0.5, lng: -1.2 };
  let json = serde_json::to_string(&geo).unwrap();
  assert_eq!(json, r#"{"lat":0.5,"lng":-1.2}"#);
  let back: GeoCoord = serde_json::from_str(&json).unwrap();
  assert_eq!(back, geo);
}

#[test]
fn digit_serializes_as_discriminant() {
  let json = serde_json::to_string(&Digit::K).unwrap();
  assert_eq!(json, "1");
  let back: Digit = serde_json::from_str(&json).unwrap();
  assert_eq!(back, Digit::K);
}

#[test]
fn coord_ijk_round_trip() {
  let coord = CoordIjk::new(3, 0, 1);
  let back: CoordIjk = serde_json::from_str(&serde_json::to_string(&coord).unwrap()).unwrap();
  assert_eq!(back, coord);
}
