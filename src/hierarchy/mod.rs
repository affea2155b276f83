//! Hierarchical traversal: parents, children and set compaction.

mod compaction;

pub use compaction::{compact, uncompact, uncompact_size};

use crate::base_cells::{base_cell_to_cell, is_base_cell_pentagon};
use crate::cell::{is_pentagon, is_valid_cell};
use crate::constants::{MAX_RES, NUM_BASE_CELLS, NUM_PENTAGONS, PER_DIGIT_OFFSET};
use crate::error::GridError;
use crate::math::numerics::pow_i64;
use crate::types::{CellIndex, Digit};

/// The ancestor of `cell` at the coarser resolution `parent_res`.
pub fn parent(cell: CellIndex, parent_res: i32) -> Result<CellIndex, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }
  let res = cell.resolution();
  if parent_res < 0 || parent_res > res {
    return Err(GridError::InvalidArg);
  }
  if parent_res == res {
    return Ok(cell);
  }

  let mut out = cell;
  out.set_resolution(parent_res);
  for r in (parent_res + 1)..=res {
    out.set_digit(r, Digit::Invalid);
  }
  Ok(out)
}

/// The number of children of `cell` at `child_res`: `7^Δ` for hexagons and
/// slightly fewer for pentagons, whose deleted k axis removes a seventh of
/// each generation.
pub fn max_children_size(cell: CellIndex, child_res: i32) -> Result<i64, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }
  let res = cell.resolution();
  if child_res < res || child_res > MAX_RES {
    return Err(GridError::InvalidArg);
  }

  let n = (child_res - res) as u32;
  if is_pentagon(cell) {
    Ok(1 + 5 * (pow_i64(7, n)? - 1) / 6)
  } else {
    pow_i64(7, n)
  }
}

/// The child of `cell` whose digit path extends the parent's by zeros.
pub fn center_child(cell: CellIndex, child_res: i32) -> Result<CellIndex, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }
  let res = cell.resolution();
  if child_res < res || child_res > MAX_RES {
    return Err(GridError::InvalidArg);
  }

  let mut out = cell;
  out.set_resolution(child_res);
  for r in (res + 1)..=child_res {
    out.set_digit(r, Digit::Center);
  }
  Ok(out)
}

/// The child of `cell` one resolution finer, in the given direction.
pub fn direct_child(cell: CellIndex, digit: Digit) -> Result<CellIndex, GridError> {
  if !is_valid_cell(cell) || digit == Digit::Invalid {
    return Err(GridError::InvalidArg);
  }
  let child_res = cell.resolution() + 1;
  if child_res > MAX_RES {
    return Err(GridError::InvalidArg);
  }
  if digit == Digit::K && is_pentagon(cell) {
    return Err(GridError::Pentagon);
  }

  let mut out = cell;
  out.set_resolution(child_res);
  out.set_digit(child_res, digit);
  Ok(out)
}

/// All children of `cell` at `child_res`, center child first.
pub fn children(cell: CellIndex, child_res: i32) -> Result<Vec<CellIndex>, GridError> {
  let size = max_children_size(cell, child_res)?;
  let mut out = Vec::with_capacity(size as usize);
  out.extend(ChildIter::new(cell, child_res));
  Ok(out)
}

/// Iterator over the children of a cell at a fixed finer resolution.
///
/// Advances by binary-incrementing the digit field; a carry out of a digit
/// (7 + 1) flows into the next coarser digit on its own. Under a pentagon,
/// the digit at the "skip" position jumps over the deleted k axis.
pub(crate) struct ChildIter {
  cell: CellIndex,
  parent_res: i32,
  skip_digit: i32,
}

impl ChildIter {
  pub(crate) fn new(parent: CellIndex, child_res: i32) -> ChildIter {
    let parent_res = parent.resolution();
    if child_res < parent_res || child_res > MAX_RES || !is_valid_cell(parent) {
      return ChildIter {
        cell: CellIndex::NULL,
        parent_res: -1,
        skip_digit: -1,
      };
    }

    let mut cell = parent;
    cell.set_resolution(child_res);
    for r in (parent_res + 1)..=child_res {
      cell.set_digit(r, Digit::Center);
    }

    ChildIter {
      cell,
      parent_res,
      skip_digit: if is_pentagon(cell) { child_res } else { -1 },
    }
  }

  fn increment_digit(&mut self, res: i32) {
    self.cell.0 += 1u64 << ((MAX_RES - res) as u64 * PER_DIGIT_OFFSET);
  }

  fn advance(&mut self) {
    let child_res = self.cell.resolution();
    self.increment_digit(child_res);

    let mut i = child_res;
    while i >= self.parent_res {
      if i == self.parent_res {
        // the carry reached the parent digits; iteration is complete
        self.cell = CellIndex::NULL;
        return;
      }

      if i == self.skip_digit && self.cell.digit(i) == Digit::K {
        // a leading k digit cannot exist under a pentagon
        self.increment_digit(i);
        self.skip_digit -= 1;
      }

      if self.cell.digit(i) == Digit::Invalid {
        // carry: the overflowed digit rolled to zero and bumped the next
        // coarser one
        self.increment_digit(i);
        i -= 1;
      } else {
        // the digit settled on a valid value; this is the next child
        break;
      }
    }
  }
}

impl Iterator for ChildIter {
  type Item = CellIndex;

  fn next(&mut self) -> Option<CellIndex> {
    if self.cell == CellIndex::NULL {
      return None;
    }
    let out = self.cell;
    self.advance();
    Some(out)
  }
}

/// The number of cells at a resolution: `2 + 120 * 7^res`.
pub fn num_hexagons(res: i32) -> Result<i64, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidArg);
  }
  let count = 120i64
    .checked_mul(pow_i64(7, res as u32)?)
    .and_then(|n| n.checked_add(2))
    .ok_or(GridError::Overflow)?;
  Ok(count)
}

/// The twelve pentagon cells at a resolution.
pub fn get_pentagon_indexes(res: i32) -> Result<[CellIndex; 12], GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidArg);
  }
  let mut out = [CellIndex::NULL; NUM_PENTAGONS as usize];
  let mut i = 0;
  for base_cell in 0..NUM_BASE_CELLS {
    if is_base_cell_pentagon(base_cell) {
      out[i] = center_child(base_cell_to_cell(base_cell), res)?;
      i += 1;
    }
  }
  Ok(out)
}

/// All 122 resolution-0 cells, in base cell order.
#[must_use]
pub fn res0_cells() -> Vec<CellIndex> {
  (0..NUM_BASE_CELLS).map(base_cell_to_cell).collect()
}
