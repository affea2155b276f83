//! Three-axis hex lattice coordinates.
//!
//! The (i,j,k) representation is redundant: subtracting the componentwise
//! minimum yields a canonical form with at least one zero axis. All
//! operations here return normalized values unless stated otherwise.

use crate::constants::RSIN60;
use crate::error::GridError;
use crate::types::{CoordIj, CoordIjk, Digit, Vec2d};

/// Unit vectors for the seven direction digits, indexed by digit value.
#[rustfmt::skip]
pub(crate) static UNIT_VECS: [CoordIjk; 7] = [
  CoordIjk { i: 0, j: 0, k: 0 }, // Center
  CoordIjk { i: 0, j: 0, k: 1 }, // K
  CoordIjk { i: 0, j: 1, k: 0 }, // J
  CoordIjk { i: 0, j: 1, k: 1 }, // Jk
  CoordIjk { i: 1, j: 0, k: 0 }, // I
  CoordIjk { i: 1, j: 0, k: 1 }, // Ik
  CoordIjk { i: 1, j: 1, k: 0 }, // Ij
];

/// Rounds like C's `lround`: ties away from zero.
#[inline]
fn lround(v: f64) -> i32 {
  v.round() as i32
}

impl CoordIjk {
  /// Componentwise sum. Saturating, as with all arithmetic here: the grid
  /// never approaches `i32` bounds for valid inputs.
  #[inline]
  #[must_use]
  pub fn add(self, other: CoordIjk) -> CoordIjk {
    CoordIjk {
      i: self.i.saturating_add(other.i),
      j: self.j.saturating_add(other.j),
      k: self.k.saturating_add(other.k),
    }
  }

  /// Componentwise difference.
  #[inline]
  #[must_use]
  pub fn sub(self, other: CoordIjk) -> CoordIjk {
    CoordIjk {
      i: self.i.saturating_sub(other.i),
      j: self.j.saturating_sub(other.j),
      k: self.k.saturating_sub(other.k),
    }
  }

  /// Uniform scale.
  #[inline]
  #[must_use]
  pub fn scale(self, factor: i32) -> CoordIjk {
    CoordIjk {
      i: self.i.saturating_mul(factor),
      j: self.j.saturating_mul(factor),
      k: self.k.saturating_mul(factor),
    }
  }

  /// Canonical form: no negative components and at least one zero axis.
  #[must_use]
  pub fn normalize(mut self) -> CoordIjk {
    if self.i < 0 {
      self.j = self.j.saturating_sub(self.i);
      self.k = self.k.saturating_sub(self.i);
      self.i = 0;
    }
    if self.j < 0 {
      self.i = self.i.saturating_sub(self.j);
      self.k = self.k.saturating_sub(self.j);
      self.j = 0;
    }
    if self.k < 0 {
      self.i = self.i.saturating_sub(self.k);
      self.j = self.j.saturating_sub(self.k);
      self.k = 0;
    }

    let min = self.i.min(self.j).min(self.k);
    if min > 0 {
      self.i -= min;
      self.j -= min;
      self.k -= min;
    }
    self
  }

  /// The neighboring coordinate one step in the given direction.
  #[inline]
  #[must_use]
  pub fn neighbor(self, digit: Digit) -> CoordIjk {
    match digit {
      Digit::Center | Digit::Invalid => self,
      d => self.add(UNIT_VECS[d as usize]).normalize(),
    }
  }

  /// The digit whose unit vector this coordinate normalizes to, or
  /// `Digit::Invalid` if it is not a unit or zero vector.
  #[must_use]
  pub(crate) fn unit_digit(self) -> Digit {
    let c = self.normalize();
    for d in 0..7 {
      if c == UNIT_VECS[d] {
        return Digit::from_bits(d as u64);
      }
    }
    Digit::Invalid
  }

  /// Rotates 60 degrees counter-clockwise about the origin.
  #[must_use]
  pub fn rotate60_ccw(self) -> CoordIjk {
    // image of each unit vector under the rotation
    let iv = CoordIjk::new(1, 1, 0).scale(self.i);
    let jv = CoordIjk::new(0, 1, 1).scale(self.j);
    let kv = CoordIjk::new(1, 0, 1).scale(self.k);
    iv.add(jv).add(kv).normalize()
  }

  /// Rotates 60 degrees clockwise about the origin.
  #[must_use]
  pub fn rotate60_cw(self) -> CoordIjk {
    let iv = CoordIjk::new(1, 0, 1).scale(self.i);
    let jv = CoordIjk::new(1, 1, 0).scale(self.j);
    let kv = CoordIjk::new(0, 1, 1).scale(self.k);
    iv.add(jv).add(kv).normalize()
  }

  /// The indexing parent on the counter-clockwise aperture-7 grid
  /// (Class III orientation).
  #[must_use]
  pub(crate) fn up_ap7(self) -> CoordIjk {
    let i = self.i - self.k;
    let j = self.j - self.k;
    CoordIjk {
      i: lround((3 * i - j) as f64 / 7.0),
      j: lround((i + 2 * j) as f64 / 7.0),
      k: 0,
    }
    .normalize()
  }

  /// The indexing parent on the clockwise aperture-7 grid
  /// (Class II orientation).
  #[must_use]
  pub(crate) fn up_ap7r(self) -> CoordIjk {
    let i = self.i - self.k;
    let j = self.j - self.k;
    CoordIjk {
      i: lround((2 * i + j) as f64 / 7.0),
      j: lround((3 * j - i) as f64 / 7.0),
      k: 0,
    }
    .normalize()
  }

  /// This coordinate re-expressed on the next finer counter-clockwise
  /// aperture-7 grid (Class III orientation).
  #[must_use]
  pub(crate) fn down_ap7(self) -> CoordIjk {
    let iv = CoordIjk::new(3, 0, 1).scale(self.i);
    let jv = CoordIjk::new(1, 3, 0).scale(self.j);
    let kv = CoordIjk::new(0, 1, 3).scale(self.k);
    iv.add(jv).add(kv).normalize()
  }

  /// This coordinate re-expressed on the next finer clockwise aperture-7
  /// grid (Class II orientation).
  #[must_use]
  pub(crate) fn down_ap7r(self) -> CoordIjk {
    let iv = CoordIjk::new(3, 1, 0).scale(self.i);
    let jv = CoordIjk::new(0, 3, 1).scale(self.j);
    let kv = CoordIjk::new(1, 0, 3).scale(self.k);
    iv.add(jv).add(kv).normalize()
  }

  /// This coordinate on the next finer counter-clockwise aperture-3 grid.
  /// Used only by the substrate grid that carries cell vertices.
  #[must_use]
  pub(crate) fn down_ap3(self) -> CoordIjk {
    let iv = CoordIjk::new(2, 0, 1).scale(self.i);
    let jv = CoordIjk::new(1, 2, 0).scale(self.j);
    let kv = CoordIjk::new(0, 1, 2).scale(self.k);
    iv.add(jv).add(kv).normalize()
  }

  /// This coordinate on the next finer clockwise aperture-3 grid.
  #[must_use]
  pub(crate) fn down_ap3r(self) -> CoordIjk {
    let iv = CoordIjk::new(2, 1, 0).scale(self.i);
    let jv = CoordIjk::new(0, 2, 1).scale(self.j);
    let kv = CoordIjk::new(1, 0, 2).scale(self.k);
    iv.add(jv).add(kv).normalize()
  }

  /// Grid distance to another coordinate.
  #[must_use]
  pub fn distance_to(self, other: CoordIjk) -> i32 {
    let diff = self.sub(other).normalize();
    diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
  }

  /// Cube coordinates (i + j + k = 0) for interpolation.
  #[inline]
  #[must_use]
  pub(crate) fn to_cube(self) -> CoordIjk {
    let i = -self.i + self.k;
    let j = self.j - self.k;
    CoordIjk { i, j, k: -i - j }
  }

  /// Back from cube coordinates to the canonical form.
  #[inline]
  #[must_use]
  pub(crate) fn from_cube(cube: CoordIjk) -> CoordIjk {
    CoordIjk {
      i: cube.i.saturating_neg(),
      j: cube.j,
      k: 0,
    }
    .normalize()
  }

  /// Two-axis form relative to the same origin.
  #[inline]
  #[must_use]
  pub fn to_ij(self) -> CoordIj {
    CoordIj {
      i: self.i - self.k,
      j: self.j - self.k,
    }
  }

  /// Canonical three-axis form of a two-axis coordinate. Errors when the
  /// components are extreme enough that normalization would overflow.
  pub fn from_ij(ij: CoordIj) -> Result<CoordIjk, GridError> {
    let (max, min) = if ij.i > ij.j { (ij.i, ij.j) } else { (ij.j, ij.i) };
    if min < 0
      && (max.checked_add(min).is_none()
        || 0i32.checked_sub(min).is_none()
        || max.checked_sub(min).is_none())
    {
      return Err(GridError::InvalidArg);
    }
    Ok(CoordIjk { i: ij.i, j: ij.j, k: 0 }.normalize())
  }

  /// The center of the containing cell in face-local 2D coordinates.
  #[must_use]
  pub(crate) fn to_hex2d(self) -> Vec2d {
    let i = (self.i - self.k) as f64;
    let j = (self.j - self.k) as f64;
    Vec2d {
      x: i - 0.5 * j,
      y: j * crate::constants::SIN60,
    }
  }

  /// The coordinate of the cell containing a face-local 2D point
  /// (quantization from DGGRID).
  #[must_use]
  pub(crate) fn from_hex2d(v: &Vec2d) -> CoordIjk {
    let a1 = v.x.abs();
    let a2 = v.y.abs();

    // reverse the conversion
    let x2 = a2 * RSIN60;
    let x1 = a1 + x2 / 2.0;

    let m1 = x1 as i32;
    let m2 = x2 as i32;

    let r1 = x1 - f64::from(m1);
    let r2 = x2 - f64::from(m2);

    let mut h = CoordIjk::default();

    if r1 < 0.5 {
      if r1 < 1.0 / 3.0 {
        h.i = m1;
        h.j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
      } else {
        h.j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
        h.i = if (1.0 - r1) <= r2 && r2 < 2.0 * r1 { m1 + 1 } else { m1 };
      }
    } else if r1 < 2.0 / 3.0 {
      h.j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
      h.i = if (2.0 * r1 - 1.0) < r2 && r2 < 1.0 - r1 { m1 } else { m1 + 1 };
    } else {
      h.i = m1 + 1;
      h.j = if r2 < r1 / 2.0 { m2 } else { m2 + 1 };
    }

    // fold across the axes if necessary
    if v.x < 0.0 {
      if h.j % 2 == 0 {
        let axis_i = i64::from(h.j) / 2;
        let diff = i64::from(h.i) - axis_i;
        h.i = (i64::from(h.i) - 2 * diff) as i32;
      } else {
        let axis_i = (i64::from(h.j) + 1) / 2;
        let diff = i64::from(h.i) - axis_i;
        h.i = (i64::from(h.i) - (2 * diff + 1)) as i32;
      }
    }

    if v.y < 0.0 {
      h.i = (i64::from(h.i) - (2 * i64::from(h.j) + 1) / 2) as i32;
      h.j = -h.j;
    }

    h.normalize()
  }
}

/// Rounds fractional cube coordinates to the nearest cell, correcting the
/// axis with the largest rounding error so the components still sum to zero.
#[must_use]
pub(crate) fn cube_round(i: f64, j: f64, k: f64) -> CoordIjk {
  let mut ri = lround(i);
  let mut rj = lround(j);
  let mut rk = lround(k);

  let i_diff = (f64::from(ri) - i).abs();
  let j_diff = (f64::from(rj) - j).abs();
  let k_diff = (f64::from(rk) - k).abs();

  if i_diff > j_diff && i_diff > k_diff {
    ri = -rj - rk;
  } else if j_diff > k_diff {
    rj = -ri - rk;
  } else {
    rk = -ri - rj;
  }

  CoordIjk { i: ri, j: rj, k: rk }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_examples() {
    assert_eq!(CoordIjk::new(0, 0, 0).normalize(), CoordIjk::new(0, 0, 0));
    assert_eq!(CoordIjk::new(2, 3, 4).normalize(), CoordIjk::new(0, 1, 2));
    assert_eq!(CoordIjk::new(-2, -3, -4).normalize(), CoordIjk::new(2, 1, 0));
    assert_eq!(CoordIjk::new(2, -1, 0).normalize(), CoordIjk::new(3, 0, 1));
    assert_eq!(CoordIjk::new(10, 20, 5).normalize(), CoordIjk::new(5, 15, 0));
  }

  #[test]
  fn unit_digit_recognizes_units() {
    for d in 0..7u64 {
      assert_eq!(UNIT_VECS[d as usize].unit_digit(), Digit::from_bits(d));
    }
    // scaled and shifted forms
    assert_eq!(CoordIjk::new(2, 2, 2).unit_digit(), Digit::Center);
    assert_eq!(CoordIjk::new(1, 1, 2).unit_digit(), Digit::K);
    assert_eq!(CoordIjk::new(2, 0, 0).unit_digit(), Digit::Invalid);
  }

  #[test]
  fn neighbor_steps() {
    let origin = CoordIjk::default();
    assert_eq!(origin.neighbor(Digit::Center), origin);
    assert_eq!(origin.neighbor(Digit::I), UNIT_VECS[Digit::I as usize]);
    assert_eq!(origin.neighbor(Digit::Invalid), origin);
  }

  #[test]
  fn rotations_are_inverse() {
    let c = CoordIjk::new(3, 1, 0);
    assert_eq!(c.rotate60_ccw().rotate60_cw(), c);
    // six rotations return home
    let mut r = c;
    for _ in 0..6 {
      r = r.rotate60_cw();
    }
    assert_eq!(r, c);
  }

  #[test]
  fn rotation_moves_unit_vectors() {
    // the i axis rotates ccw onto ij, cw onto ik
    assert_eq!(
      UNIT_VECS[Digit::I as usize].rotate60_ccw(),
      UNIT_VECS[Digit::Ij as usize]
    );
    assert_eq!(
      UNIT_VECS[Digit::I as usize].rotate60_cw(),
      UNIT_VECS[Digit::Ik as usize]
    );
  }

  #[test]
  fn aperture7_roundtrips_center() {
    let c = CoordIjk::new(2, 1, 0);
    assert_eq!(c.down_ap7().up_ap7(), c);
    assert_eq!(c.down_ap7r().up_ap7r(), c);
  }

  #[test]
  fn up_ap7_known_value() {
    assert_eq!(CoordIjk::new(46, 100, 0).up_ap7(), CoordIjk::new(5, 35, 0));
  }

  #[test]
  fn hex2d_roundtrip() {
    for &c in &[
      CoordIjk::new(0, 0, 0),
      CoordIjk::new(1, 0, 0),
      CoordIjk::new(0, 3, 1),
      CoordIjk::new(7, 2, 0),
    ] {
      let v = c.to_hex2d();
      assert_eq!(CoordIjk::from_hex2d(&v), c.normalize());
    }
  }

  #[test]
  fn cube_roundtrip_and_distance() {
    for &c in &[
      CoordIjk::new(0, 0, 0),
      CoordIjk::new(1, 0, 0),
      CoordIjk::new(0, 2, 1),
      CoordIjk::new(4, 0, 3),
    ] {
      let cube = c.to_cube();
      assert_eq!(cube.i + cube.j + cube.k, 0, "cube coords sum to zero");
      assert_eq!(CoordIjk::from_cube(cube), c.normalize());
    }

    let a = CoordIjk::new(0, 0, 0);
    assert_eq!(a.distance_to(CoordIjk::new(1, 0, 0)), 1);
    assert_eq!(a.distance_to(CoordIjk::new(0, 2, 0)), 2);
    assert_eq!(a.distance_to(a), 0);
  }

  #[test]
  fn ij_roundtrip() {
    for &c in &[CoordIjk::new(0, 0, 0), CoordIjk::new(3, 0, 1), CoordIjk::new(0, 5, 2)] {
      let ij = c.to_ij();
      assert_eq!(CoordIjk::from_ij(ij).unwrap(), c.normalize());
    }
    assert_eq!(
      CoordIjk::from_ij(CoordIj {
        i: i32::MAX,
        j: i32::MIN,
      }),
      Err(GridError::InvalidArg)
    );
  }

  #[test]
  fn cube_round_prefers_small_error() {
    assert_eq!(cube_round(0.0, 0.0, 0.0), CoordIjk::new(0, 0, 0));
    let r = cube_round(1.2, -0.7, -0.5);
    assert_eq!(r.i + r.j + r.k, 0);
  }
}
