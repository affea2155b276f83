//! Stepping from a cell to its neighbor in a given direction.

use crate::base_cells::{
  base_cell_is_cw_offset, base_cell_to_face_ijk, is_base_cell_pentagon, is_base_cell_polar_pentagon,
  BASE_CELL_NEIGHBORS, BASE_CELL_NEIGHBOR_60CCW_ROTS, INVALID_BASE_CELL,
};
use crate::cell::is_pentagon;
use crate::constants::NUM_BASE_CELLS;
use crate::error::GridError;
use crate::math::numerics::is_class_iii;
use crate::types::{CellIndex, Digit};

use Digit::{Center, Ij, Ik, Invalid, Jk, I, J, K};

// Digit at the current position after moving in a direction, and the
// direction the move continues with in the next coarser ring, for Class II
// and Class III parities. Indexed by [current digit][direction].

#[rustfmt::skip]
static NEW_DIGIT_II: [[Digit; 7]; 7] = [
  [Center, K, J, Jk, I, Ik, Ij],
  [K, I, Jk, Ij, Ik, J, Center],
  [J, Jk, K, I, Ij, Center, Ik],
  [Jk, Ij, I, Ik, Center, K, J],
  [I, Ik, Ij, Center, J, Jk, K],
  [Ik, J, Center, K, Jk, Ij, I],
  [Ij, Center, Ik, J, K, I, Jk],
];

#[rustfmt::skip]
static NEW_ADJUSTMENT_II: [[Digit; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, K, Center, K, Center, Ik, Center],
  [Center, Center, J, Jk, Center, Center, J],
  [Center, K, Jk, Jk, Center, Center, Center],
  [Center, Center, Center, Center, I, I, Ij],
  [Center, Ik, Center, Center, I, Ik, Center],
  [Center, Center, J, Center, Ij, Center, Ij],
];

#[rustfmt::skip]
static NEW_DIGIT_III: [[Digit; 7]; 7] = [
  [Center, K, J, Jk, I, Ik, Ij],
  [K, J, Jk, I, Ik, Ij, Center],
  [J, Jk, I, Ik, Ij, Center, K],
  [Jk, I, Ik, Ij, Center, K, J],
  [I, Ik, Ij, Center, K, J, Jk],
  [Ik, Ij, Center, K, J, Jk, I],
  [Ij, Center, K, J, Jk, I, Ik],
];

#[rustfmt::skip]
static NEW_ADJUSTMENT_III: [[Digit; 7]; 7] = [
  [Center, Center, Center, Center, Center, Center, Center],
  [Center, K, Center, Jk, Center, K, Center],
  [Center, Center, J, J, Center, Center, Ij],
  [Center, Jk, J, Jk, Center, Center, Center],
  [Center, Center, Center, Center, I, Ik, I],
  [Center, K, Center, Center, Ik, Ik, Center],
  [Center, Center, Ij, Center, I, Center, Ij],
];

/// Returns the neighbor of `origin` in direction `dir`.
///
/// `rotations` carries the accumulated ccw rotation of the caller's
/// direction frame relative to the origin cell; it is updated with the
/// rotations introduced by this step (base cell orientation changes and
/// pentagon deleted-subsequence repairs).
pub(crate) fn neighbor_rotations(
  origin: CellIndex,
  mut dir: Digit,
  rotations: &mut i32,
) -> Result<CellIndex, GridError> {
  if dir == Center || dir == Invalid {
    return Err(GridError::InvalidArg);
  }

  *rotations = rotations.rem_euclid(6);
  for _ in 0..*rotations {
    dir = dir.rotate60_ccw();
  }

  let mut current = origin;
  let mut new_rotations = 0;
  let old_base_cell = current.base_cell();
  if old_base_cell >= NUM_BASE_CELLS {
    return Err(GridError::InvalidArg);
  }
  let old_leading_digit = current.leading_non_zero_digit();

  // Walk the digit path from the finest digit up, adjusting digits until
  // the step stops propagating; crossing the coarsest digit moves to a
  // neighboring base cell.
  let mut r = current.resolution() - 1;
  loop {
    if r == -1 {
      if is_base_cell_pentagon(old_base_cell) && dir == K {
        // no neighbor across the deleted axis
        return Err(GridError::Pentagon);
      }

      current.set_base_cell(BASE_CELL_NEIGHBORS[old_base_cell as usize][dir as usize]);
      new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][dir as usize];

      if current.base_cell() == INVALID_BASE_CELL {
        // The k neighbor of this hexagon is a pentagon whose k axis is
        // deleted; this edge actually borders the ik neighbor.
        current.set_base_cell(BASE_CELL_NEIGHBORS[old_base_cell as usize][Ik as usize]);
        new_rotations = BASE_CELL_NEIGHBOR_60CCW_ROTS[old_base_cell as usize][Ik as usize];

        current = current.rotate60_ccw();
        *rotations += 1;
      }
      break;
    }

    let old_digit = current.digit(r + 1);
    if old_digit == Invalid {
      return Err(GridError::InvalidArg);
    }

    let next_dir;
    if is_class_iii(r + 1) {
      current.set_digit(r + 1, NEW_DIGIT_II[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_II[old_digit as usize][dir as usize];
    } else {
      current.set_digit(r + 1, NEW_DIGIT_III[old_digit as usize][dir as usize]);
      next_dir = NEW_ADJUSTMENT_III[old_digit as usize][dir as usize];
    }

    if next_dir == Center {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = current.base_cell();
  if is_base_cell_pentagon(new_base_cell) {
    let mut adjusted_k_subsequence = false;

    if current.leading_non_zero_digit() == K {
      if old_base_cell != new_base_cell {
        // traversed into the deleted k subsequence of a pentagon from a
        // different base cell; the offset face decides the rotation
        if base_cell_is_cw_offset(new_base_cell, base_cell_to_face_ijk(old_base_cell).face) {
          current = current.rotate60_cw();
        } else {
          current = current.rotate60_ccw();
        }
        adjusted_k_subsequence = true;
      } else {
        // traversed into the deleted k subsequence from within the same
        // pentagon base cell
        match old_leading_digit {
          Center => return Err(GridError::Pentagon),
          Jk => {
            current = current.rotate60_ccw();
            *rotations += 1;
          }
          Ik => {
            current = current.rotate60_cw();
            *rotations += 5;
          }
          _ => return Err(GridError::BadData),
        }
      }
    }

    for _ in 0..new_rotations {
      current = current.rotate_pent60_ccw();
    }

    if old_base_cell != new_base_cell {
      if is_base_cell_polar_pentagon(new_base_cell) {
        // polar pentagons have all-i neighbors
        if old_base_cell != 118 && old_base_cell != 8 && current.digit(current.resolution()) != Jk {
          *rotations += 1;
        }
      } else if current.digit(current.resolution()) == Ik && !adjusted_k_subsequence {
        // distortion introduced to the ik neighbor by the deleted
        // subsequence
        *rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      current = current.rotate60_ccw();
    }
  }

  *rotations = (*rotations + new_rotations).rem_euclid(6);
  Ok(current)
}

/// The direction from `origin` to a directly adjacent cell, or
/// `Digit::Invalid` when the cells are not neighbors.
pub(crate) fn direction_to_neighbor(origin: CellIndex, destination: CellIndex) -> Digit {
  if origin == destination {
    return Center;
  }

  // the deleted k axis of a pentagon is skipped
  let start = if is_pentagon(origin) { J as u8 } else { K as u8 };
  for dir_val in start..=(Ij as u8) {
    let dir = Digit::from_bits(u64::from(dir_val));
    let mut rotations = 0;
    match neighbor_rotations(origin, dir, &mut rotations) {
      Ok(neighbor) if neighbor == destination => return dir,
      _ => {}
    }
  }
  Invalid
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::{is_valid_cell, make_cell};
  use crate::indexing::geo_to_cell;
  use crate::types::GeoCoord;

  fn ring1(origin: CellIndex) -> Vec<CellIndex> {
    let mut out = Vec::new();
    for dir in Digit::NEIGHBOR_SET {
      let mut rotations = 0;
      match neighbor_rotations(origin, dir, &mut rotations) {
        Ok(n) => out.push(n),
        Err(GridError::Pentagon) => {}
        Err(e) => panic!("unexpected error {e:?}"),
      }
    }
    out
  }

  #[test]
  fn hexagon_has_six_distinct_neighbors() {
    let origin = geo_to_cell(&GeoCoord::from_degrees(37.779_265, -122.419_277), 9).unwrap();
    let neighbors = ring1(origin);
    assert_eq!(neighbors.len(), 6);
    for (i, n) in neighbors.iter().enumerate() {
      assert!(is_valid_cell(*n));
      assert_ne!(*n, origin);
      for m in &neighbors[i + 1..] {
        assert_ne!(n, m, "neighbors are distinct");
      }
    }
  }

  #[test]
  fn pentagon_has_five_neighbors() {
    let pentagon = make_cell(2, 4, Digit::Center);
    let neighbors = ring1(pentagon);
    assert_eq!(neighbors.len(), 5, "k direction is deleted");
    for n in &neighbors {
      assert!(is_valid_cell(*n));
    }
  }

  #[test]
  fn direction_roundtrip() {
    let origin = geo_to_cell(&GeoCoord::from_degrees(37.779, -122.419), 9).unwrap();
    for n in ring1(origin) {
      let dir = direction_to_neighbor(origin, n);
      assert_ne!(dir, Invalid);
      assert_ne!(dir, Center);
      let mut rotations = 0;
      assert_eq!(neighbor_rotations(origin, dir, &mut rotations).unwrap(), n);
    }

    assert_eq!(direction_to_neighbor(origin, origin), Center);
  }

  #[test]
  fn neighbors_are_mutual() {
    let origin = geo_to_cell(&GeoCoord::from_degrees(-12.0, 33.0), 6).unwrap();
    for n in ring1(origin) {
      assert_ne!(direction_to_neighbor(n, origin), Invalid, "adjacency is symmetric");
    }
  }

  #[test]
  fn center_direction_is_rejected() {
    let origin = make_cell(1, 0, Digit::Center);
    let mut rotations = 0;
    assert_eq!(
      neighbor_rotations(origin, Center, &mut rotations),
      Err(GridError::InvalidArg)
    );
    assert_eq!(
      neighbor_rotations(origin, Invalid, &mut rotations),
      Err(GridError::InvalidArg)
    );
  }
}
