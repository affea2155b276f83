//! Unit-sphere vector helpers used for face selection.

use crate::math::numerics::square;
use crate::types::{GeoCoord, Vec3d};

impl Vec3d {
  /// The 3D Cartesian point on the unit sphere for a spherical coordinate.
  #[must_use]
  pub(crate) fn from_geo(geo: &GeoCoord) -> Self {
    let r = geo.lat.cos();
    Vec3d {
      x: geo.lng.cos() * r,
      y: geo.lng.sin() * r,
      z: geo.lat.sin(),
    }
  }

  /// Squared Euclidean distance to another point.
  #[inline]
  #[must_use]
  pub(crate) fn square_dist(&self, other: &Vec3d) -> f64 {
    square(self.x - other.x) + square(self.y - other.y) + square(self.z - other.z)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::f64::consts::FRAC_PI_2;

  #[test]
  fn from_geo_lands_on_unit_sphere() {
    let origin = Vec3d::default();
    let equator = Vec3d::from_geo(&GeoCoord { lat: 0.0, lng: 0.0 });
    assert!((equator.square_dist(&origin) - 1.0).abs() < 1e-15);
    assert!((equator.x - 1.0).abs() < f64::EPSILON);

    let pole = Vec3d::from_geo(&GeoCoord {
      lat: FRAC_PI_2,
      lng: 0.0,
    });
    assert!((pole.z - 1.0).abs() < f64::EPSILON);
    assert!((equator.square_dist(&pole) - 2.0).abs() < 1e-15);
  }
}
