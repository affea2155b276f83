//! Angle normalization and integer arithmetic.

use crate::constants::M_2PI;
use crate::error::GridError;
use std::f64::consts::{FRAC_PI_2, PI};

/// Shifts `rads` into `[0, 2*pi)`.
#[inline]
#[must_use]
pub fn normalize_radians(rads: f64) -> f64 {
  let mut tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  while tmp >= M_2PI {
    tmp -= M_2PI;
  }
  if tmp == -0.0 {
    tmp = 0.0;
  }
  tmp
}

/// Folds a latitude into `[-pi/2, pi/2]`.
#[inline]
#[must_use]
pub fn constrain_lat(mut lat: f64) -> f64 {
  while lat > FRAC_PI_2 {
    lat -= PI;
  }
  lat
}

/// Wraps a longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub fn constrain_lng(mut lng: f64) -> f64 {
  while lng > PI {
    lng -= M_2PI;
  }
  while lng < -PI {
    lng += M_2PI;
  }
  lng
}

/// Converts degrees to radians.
#[inline]
#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians.to_degrees()
}

/// Binary exponentiation over `i64`, erroring instead of wrapping.
pub fn pow_i64(mut base: i64, mut exp: u32) -> Result<i64, GridError> {
  let mut result: i64 = 1;
  loop {
    if exp & 1 != 0 {
      result = result.checked_mul(base).ok_or(GridError::Overflow)?;
    }
    exp >>= 1;
    if exp == 0 {
      return Ok(result);
    }
    base = base.checked_mul(base).ok_or(GridError::Overflow)?;
  }
}

/// x squared.
#[inline]
#[must_use]
pub(crate) fn square(x: f64) -> f64 {
  x * x
}

/// Whether a resolution's lattice is Class III (odd resolutions are rotated
/// relative to Class II).
#[inline]
#[must_use]
pub fn is_class_iii(res: i32) -> bool {
  res % 2 == 1
}
