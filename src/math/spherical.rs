//! Great-circle geometry on the unit sphere.

use crate::constants::{EARTH_RADIUS_KM, EPSILON_RAD};
use crate::math::numerics::{constrain_lng, normalize_radians};
use crate::types::GeoCoord;
use std::f64::consts::{FRAC_PI_2, PI};

/// Whether two coordinates agree within `threshold` radians per component.
#[cfg(test)]
#[must_use]
pub(crate) fn geo_almost_eq_threshold(p1: &GeoCoord, p2: &GeoCoord, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Whether two coordinates agree within the standard epsilon.
#[cfg(test)]
#[must_use]
pub(crate) fn geo_almost_eq(p1: &GeoCoord, p2: &GeoCoord) -> bool {
  geo_almost_eq_threshold(p1, p2, EPSILON_RAD)
}

/// Azimuth from `p1` to `p2` in radians.
#[inline]
#[must_use]
pub(crate) fn azimuth_rads(p1: &GeoCoord, p2: &GeoCoord) -> f64 {
  (p2.lat.cos() * (p2.lng - p1.lng).sin())
    .atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * (p2.lng - p1.lng).cos())
}

/// The point at the given azimuth and great-circle distance from `p1`.
#[must_use]
pub(crate) fn point_at_azimuth(p1: &GeoCoord, az: f64, distance: f64) -> GeoCoord {
  if distance < EPSILON_RAD {
    return *p1;
  }

  let az = normalize_radians(az);
  let mut p2 = GeoCoord::default();

  if az < EPSILON_RAD || (az - PI).abs() < EPSILON_RAD {
    // due north or south
    p2.lat = if az < EPSILON_RAD {
      p1.lat + distance
    } else {
      p1.lat - distance
    };

    if (p2.lat - FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = FRAC_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = -FRAC_PI_2;
      p2.lng = 0.0;
    } else {
      p2.lng = constrain_lng(p1.lng);
    }
  } else {
    let sin_lat =
      (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
    p2.lat = sin_lat.asin();

    if (p2.lat - FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = FRAC_PI_2;
      p2.lng = 0.0;
    } else if (p2.lat + FRAC_PI_2).abs() < EPSILON_RAD {
      p2.lat = -FRAC_PI_2;
      p2.lng = 0.0;
    } else {
      let inv_cos_lat2 = 1.0 / p2.lat.cos();
      let sin_lng = (az.sin() * distance.sin() * inv_cos_lat2).clamp(-1.0, 1.0);
      let cos_lng =
        ((distance.cos() - p1.lat.sin() * p2.lat.sin()) / p1.lat.cos() * inv_cos_lat2).clamp(-1.0, 1.0);
      p2.lng = constrain_lng(p1.lng + sin_lng.atan2(cos_lng));
    }
  }
  p2
}

/// Haversine great-circle distance between two points, in radians.
#[must_use]
pub fn point_distance_rads(a: &GeoCoord, b: &GeoCoord) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Haversine great-circle distance in kilometers.
#[must_use]
pub fn point_distance_km(a: &GeoCoord, b: &GeoCoord) -> f64 {
  point_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Haversine great-circle distance in meters.
#[must_use]
pub fn point_distance_m(a: &GeoCoord, b: &GeoCoord) -> f64 {
  point_distance_km(a, b) * 1000.0
}
