//! Collapsing cell sets to coarser resolutions and expanding them back.

use std::collections::HashMap;

use crate::cell::{is_pentagon, is_valid_cell};
use crate::constants::MAX_RES;
use crate::error::GridError;
use crate::hierarchy::{children, max_children_size, parent};
use crate::types::CellIndex;

/// Compacts a set of cells, possibly of mixed resolution, into the minimal
/// set covering the same area.
///
/// Full sibling groups (7 under a hexagon, 6 under a pentagon) collapse to
/// their parent, repeatedly, from the finest resolution present upward.
/// Duplicates are removed; output order is unspecified.
pub fn compact(cells: &[CellIndex]) -> Result<Vec<CellIndex>, GridError> {
  let mut pool: Vec<CellIndex> = Vec::with_capacity(cells.len());
  let mut result: Vec<CellIndex> = Vec::new();

  let mut max_res = 0;
  for &cell in cells {
    if !is_valid_cell(cell) {
      return Err(GridError::InvalidArg);
    }
    let res = cell.resolution();
    if res == 0 {
      result.push(cell);
    } else {
      max_res = max_res.max(res);
      pool.push(cell);
    }
  }
  result.sort_unstable();
  result.dedup();
  pool.sort_unstable();
  pool.dedup();

  let mut r = max_res;
  while !pool.is_empty() && r > 0 {
    let (this_res, mut rest): (Vec<CellIndex>, Vec<CellIndex>) =
      pool.into_iter().partition(|cell| cell.resolution() == r);

    let mut groups: HashMap<CellIndex, Vec<CellIndex>> = HashMap::new();
    for cell in this_res {
      let p = parent(cell, r - 1)?;
      groups.entry(p).or_default().push(cell);
    }

    for (p, members) in groups {
      if !is_valid_cell(p) {
        return Err(GridError::BadData);
      }
      let full = if is_pentagon(p) { 6 } else { 7 };
      if members.len() == full {
        rest.push(p);
      } else {
        result.extend(members);
      }
    }

    rest.sort_unstable();
    rest.dedup();
    pool = rest;
    r -= 1;
  }

  result.extend(pool);
  result.sort_unstable();
  result.dedup();
  Ok(result)
}

/// The number of cells `uncompact` would produce at `res`.
pub fn uncompact_size(cells: &[CellIndex], res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidArg);
  }

  let mut count: i64 = 0;
  for &cell in cells {
    if cell == CellIndex::NULL {
      continue;
    }
    if cell.resolution() > res {
      return Err(GridError::ResMismatch);
    }
    count = count
      .checked_add(max_children_size(cell, res)?)
      .ok_or(GridError::Overflow)?;
  }
  Ok(count)
}

/// Expands every cell in the set to its children at `res`.
pub fn uncompact(cells: &[CellIndex], res: i32) -> Result<Vec<CellIndex>, GridError> {
  let size = uncompact_size(cells, res)?;
  let mut out = Vec::with_capacity(size as usize);
  for &cell in cells {
    if cell == CellIndex::NULL {
      continue;
    }
    out.extend(children(cell, res)?);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cell::make_cell;
  use crate::types::Digit;

  #[test]
  fn compact_full_sibling_group() {
    let p = CellIndex(0x85283473fffffff);
    let kids = children(p, 6).unwrap();
    let compacted = compact(&kids).unwrap();
    assert_eq!(compacted, vec![p]);
  }

  #[test]
  fn compact_cascades_up() {
    let p = CellIndex(0x85283473fffffff);
    let grandchildren = children(p, 7).unwrap();
    let compacted = compact(&grandchildren).unwrap();
    assert_eq!(compacted, vec![p], "two levels collapse in one call");
  }

  #[test]
  fn compact_partial_group_is_kept() {
    let p = CellIndex(0x85283473fffffff);
    let mut kids = children(p, 6).unwrap();
    kids.pop();
    let mut compacted = compact(&kids).unwrap();
    compacted.sort_unstable();
    let mut expected = kids.clone();
    expected.sort_unstable();
    assert_eq!(compacted, expected, "six of seven children stay put");
  }

  #[test]
  fn compact_pentagon_group() {
    let pentagon = make_cell(0, 4, Digit::Center);
    let kids = children(pentagon, 1).unwrap();
    assert_eq!(kids.len(), 6);
    assert_eq!(compact(&kids).unwrap(), vec![pentagon]);
  }

  #[test]
  fn compact_mixed_resolution_input() {
    let p = CellIndex(0x85283473fffffff);
    let mut cells = children(p, 6).unwrap();
    // replace one child with its own full child set: still the same union
    let child = cells.pop().unwrap();
    cells.extend(children(child, 7).unwrap());
    let compacted = compact(&cells).unwrap();
    assert_eq!(compacted, vec![p]);
  }

  #[test]
  fn compact_dedups_and_is_idempotent() {
    let p = CellIndex(0x85283473fffffff);
    let mut cells = children(p, 6).unwrap();
    cells.extend_from_slice(&cells.clone());
    let compacted = compact(&cells).unwrap();
    assert_eq!(compacted, vec![p]);
    assert_eq!(compact(&compacted).unwrap(), vec![p]);
  }

  #[test]
  fn compact_keeps_res0_and_rejects_junk() {
    let res0 = make_cell(0, 7, Digit::Center);
    assert_eq!(compact(&[res0]).unwrap(), vec![res0]);
    assert_eq!(compact(&[CellIndex::NULL]), Err(GridError::InvalidArg));
    assert_eq!(compact(&[]).unwrap(), Vec::new());
  }

  #[test]
  fn uncompact_roundtrip() {
    let p = CellIndex(0x85283473fffffff);
    assert_eq!(uncompact_size(&[p], 6), Ok(7));
    let mut expanded = uncompact(&[p], 6).unwrap();
    expanded.sort_unstable();
    let mut kids = children(p, 6).unwrap();
    kids.sort_unstable();
    assert_eq!(expanded, kids);
    assert_eq!(compact(&expanded).unwrap(), vec![p]);

    assert_eq!(uncompact_size(&[p], 4), Err(GridError::ResMismatch));
  }
}
