//! Planar vector helpers for the face-local coordinate systems.

use crate::types::Vec2d;

impl Vec2d {
  #[must_use]
  pub(crate) const fn new(x: f64, y: f64) -> Self {
    Vec2d { x, y }
  }

  /// Vector magnitude.
  #[inline]
  #[must_use]
  pub(crate) fn mag(&self) -> f64 {
    (self.x * self.x + self.y * self.y).sqrt()
  }

  /// Componentwise equality within `f64::EPSILON`.
  #[inline]
  #[must_use]
  pub(crate) fn almost_eq(&self, other: &Vec2d) -> bool {
    (self.x - other.x).abs() < f64::EPSILON && (self.y - other.y).abs() < f64::EPSILON
  }
}

/// Intersection of the lines `p0`-`p1` and `p2`-`p3`.
///
/// The caller guarantees the lines are not parallel; the overage geometry
/// only ever intersects a cell edge with an icosahedron edge it crosses.
#[inline]
#[must_use]
pub(crate) fn line_intersection(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
  let s1 = Vec2d::new(p1.x - p0.x, p1.y - p0.y);
  let s2 = Vec2d::new(p3.x - p2.x, p3.y - p2.y);

  let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);

  Vec2d::new(p0.x + t * s1.x, p0.y + t * s1.y)
}
