//! Core value types of the cell-index system.

use crate::constants::MAX_BOUNDARY_VERTS;
use crate::error::GridError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit cell or directed-edge identifier.
///
/// The bit layout is shared with the established H3 v3 format: one high bit
/// (always zero for valid identifiers), a 4-bit mode, 3 reserved bits, a
/// 4-bit resolution, a 7-bit base cell and fifteen 3-bit direction digits.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellIndex(pub u64);

impl CellIndex {
  /// The null identifier. Structurally invalid; used as an in-band sentinel
  /// where the bit format requires one.
  pub const NULL: CellIndex = CellIndex(0);
}

/// Spherical coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoCoord {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl GeoCoord {
  /// Builds a coordinate from degrees.
  #[must_use]
  pub fn from_degrees(lat_deg: f64, lng_deg: f64) -> Self {
    GeoCoord {
      lat: lat_deg.to_radians(),
      lng: lng_deg.to_radians(),
    }
  }
}

/// The vertices of a cell boundary, counter-clockwise.
///
/// Hexagons have 6 vertices and pentagons 5; either may gain distortion
/// vertices where the cell crosses an icosahedron edge, hence the fixed
/// capacity of 10.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoBoundary {
  /// Number of vertices actually populated.
  pub num_verts: usize,
  /// Vertex storage; entries past `num_verts` are not significant.
  pub verts: [GeoCoord; MAX_BOUNDARY_VERTS],
}

impl GeoBoundary {
  /// The populated vertices as a slice.
  #[must_use]
  pub fn verts(&self) -> &[GeoCoord] {
    &self.verts[..self.num_verts]
  }
}

/// Two-axis hex coordinates relative to an origin cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIj {
  pub i: i32,
  pub j: i32,
}

/// Three-axis hex coordinates with a redundancy axis.
///
/// The normalized form has at least one zero component and no negative
/// components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIjk {
  pub i: i32,
  pub j: i32,
  pub k: i32,
}

impl CoordIjk {
  #[must_use]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    CoordIjk { i, j, k }
  }
}

/// An icosahedron face number together with IJK coordinates in that face's
/// aperture-7 lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIjk {
  /// Face number, 0..19.
  pub face: i32,
  /// Coordinates on that face.
  pub coord: CoordIjk,
}

/// 2D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// 3D Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// A direction digit of the identifier: the center or one of the six IJK
/// axis combinations. `Invalid` (7) pads digit positions finer than an
/// identifier's resolution.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Digit {
  #[default]
  Center = 0,
  /// The k axis, deleted at pentagon centers.
  K = 1,
  J = 2,
  Jk = 3,
  I = 4,
  Ik = 5,
  Ij = 6,
  Invalid = 7,
}

impl Digit {
  /// The six traversable directions, in digit order.
  pub const NEIGHBOR_SET: [Digit; 6] = [Digit::K, Digit::J, Digit::Jk, Digit::I, Digit::Ik, Digit::Ij];

  /// Reinterprets the low three bits of `v` as a digit.
  #[inline]
  #[must_use]
  pub(crate) fn from_bits(v: u64) -> Digit {
    match v & 0b111 {
      0 => Digit::Center,
      1 => Digit::K,
      2 => Digit::J,
      3 => Digit::Jk,
      4 => Digit::I,
      5 => Digit::Ik,
      6 => Digit::Ij,
      _ => Digit::Invalid,
    }
  }

  /// Rotates the digit 60 degrees clockwise.
  #[inline]
  #[must_use]
  pub fn rotate60_cw(self) -> Digit {
    match self {
      Digit::K => Digit::Jk,
      Digit::Jk => Digit::J,
      Digit::J => Digit::Ij,
      Digit::Ij => Digit::I,
      Digit::I => Digit::Ik,
      Digit::Ik => Digit::K,
      other => other,
    }
  }

  /// Rotates the digit 60 degrees counter-clockwise.
  #[inline]
  #[must_use]
  pub fn rotate60_ccw(self) -> Digit {
    match self {
      Digit::K => Digit::Ik,
      Digit::Ik => Digit::I,
      Digit::I => Digit::Ij,
      Digit::Ij => Digit::J,
      Digit::J => Digit::Jk,
      Digit::Jk => Digit::K,
      other => other,
    }
  }
}

impl TryFrom<u8> for Digit {
  type Error = GridError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(GridError::InvalidArg);
    }
    Ok(Digit::from_bits(u64::from(value)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digit_rotations_cycle() {
    let mut d = Digit::K;
    for _ in 0..6 {
      d = d.rotate60_cw();
    }
    assert_eq!(d, Digit::K, "six cw rotations return to start");

    for d in Digit::NEIGHBOR_SET {
      assert_eq!(d.rotate60_cw().rotate60_ccw(), d, "cw then ccw is identity");
    }
    assert_eq!(Digit::Center.rotate60_cw(), Digit::Center);
    assert_eq!(Digit::Invalid.rotate60_ccw(), Digit::Invalid);
  }

  #[test]
  fn digit_from_bits() {
    for v in 0..=7u8 {
      assert_eq!(Digit::try_from(v).unwrap() as u8, v);
    }
    assert!(Digit::try_from(8).is_err());
  }

  #[test]
  fn boundary_defaults_empty() {
    let b = GeoBoundary::default();
    assert_eq!(b.num_verts, 0);
    assert!(b.verts().is_empty());
  }
}
