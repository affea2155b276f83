//! Conversion between spherical coordinates, face IJK addresses and
//! identifiers.

use crate::base_cells::{
  base_cell_at, base_cell_is_cw_offset, base_cell_rotations_at, base_cell_to_face_ijk, is_base_cell_pentagon,
  INVALID_BASE_CELL, INVALID_ROTATIONS, MAX_FACE_COORD,
};
use crate::cell::{is_pentagon, is_valid_cell};
use crate::constants::{CELL_MODE, INDEX_INIT, MAX_RES, NUM_BASE_CELLS};
use crate::coords::face_ijk::{
  adjust_overage_class_ii, adjust_pent_vert_overage, cell_boundary, cell_to_verts, face_ijk_to_geo, geo_to_face_ijk,
  pent_boundary, pent_to_verts, Overage, INVALID_FACE,
};
use crate::error::GridError;
use crate::math::numerics::is_class_iii;
use crate::types::{CellIndex, Digit, FaceIjk, GeoBoundary, GeoCoord};

/// Encodes a face IJK address at `res` as a cell identifier, or
/// `CellIndex::NULL` when the coordinates are out of range.
pub(crate) fn face_ijk_to_cell(fijk: &FaceIjk, res: i32) -> CellIndex {
  let mut cell = CellIndex(INDEX_INIT);
  cell.set_mode(CELL_MODE);
  cell.set_resolution(res);

  if res == 0 {
    if fijk.coord.i > MAX_FACE_COORD || fijk.coord.j > MAX_FACE_COORD || fijk.coord.k > MAX_FACE_COORD {
      return CellIndex::NULL;
    }
    let base_cell = base_cell_at(fijk);
    if base_cell == INVALID_BASE_CELL {
      return CellIndex::NULL;
    }
    cell.set_base_cell(base_cell);
    return cell;
  }

  // Walk from the finest resolution up to the base cell, recording at each
  // step the digit from the coarser center to the finer coordinate.
  let mut fijk_bc = *fijk;
  for r in (1..=res).rev() {
    let last_ijk = fijk_bc.coord;
    let last_center;
    if is_class_iii(r) {
      fijk_bc.coord = fijk_bc.coord.up_ap7();
      last_center = fijk_bc.coord.down_ap7();
    } else {
      fijk_bc.coord = fijk_bc.coord.up_ap7r();
      last_center = fijk_bc.coord.down_ap7r();
    }

    let digit = last_ijk.sub(last_center).normalize().unit_digit();
    if digit == Digit::Invalid {
      return CellIndex::NULL;
    }
    cell.set_digit(r, digit);
  }

  if fijk_bc.coord.i > MAX_FACE_COORD || fijk_bc.coord.j > MAX_FACE_COORD || fijk_bc.coord.k > MAX_FACE_COORD {
    return CellIndex::NULL;
  }

  let base_cell = base_cell_at(&fijk_bc);
  if base_cell == INVALID_BASE_CELL {
    return CellIndex::NULL;
  }
  cell.set_base_cell(base_cell);

  let num_rots = base_cell_rotations_at(&fijk_bc);
  if num_rots == INVALID_ROTATIONS {
    return CellIndex::NULL;
  }

  if is_base_cell_pentagon(base_cell) {
    // The deleted k axis is not representable; rotate into a valid
    // sub-sequence first.
    if cell.leading_non_zero_digit() == Digit::K {
      if base_cell_is_cw_offset(base_cell, fijk_bc.face) {
        cell = cell.rotate60_cw();
      } else {
        cell = cell.rotate60_ccw();
      }
    }
    for _ in 0..num_rots {
      cell = cell.rotate_pent60_ccw();
    }
  } else {
    for _ in 0..num_rots {
      cell = cell.rotate60_ccw();
    }
  }

  cell
}

/// Decodes a cell identifier to its canonical face IJK address.
pub(crate) fn cell_to_face_ijk(cell: CellIndex) -> Result<FaceIjk, GridError> {
  let base_cell = cell.base_cell();
  if base_cell >= NUM_BASE_CELLS {
    return Err(GridError::InvalidArg);
  }

  // All of sub-sequence 5 of a pentagon needs to be adjusted into the
  // coordinate space of the home face.
  let mut cell = cell;
  if is_base_cell_pentagon(base_cell) && cell.leading_non_zero_digit() == Digit::Ik {
    cell = cell.rotate60_cw();
  }

  let mut fijk = base_cell_to_face_ijk(base_cell);
  if !apply_digits(cell, &mut fijk) {
    return Ok(fijk);
  }

  // The cell may lie across an edge of the home face. Overage correction
  // always runs on a Class II grid.
  let orig_coord = fijk.coord;
  let res = cell.resolution();
  let mut adj_res = res;
  if is_class_iii(res) {
    fijk.coord = fijk.coord.down_ap7r();
    adj_res += 1;
  }

  let pent_leading_4 = is_base_cell_pentagon(base_cell) && cell.leading_non_zero_digit() == Digit::I;
  if adjust_overage_class_ii(&mut fijk, adj_res, pent_leading_4, false) != Overage::None {
    // a pentagon base cell can overage across several faces; repeat
    // until the adjustment settles
    if is_base_cell_pentagon(base_cell) {
      while adjust_overage_class_ii(&mut fijk, adj_res, false, false) != Overage::None {}
    }
    if adj_res != res {
      fijk.coord = fijk.coord.up_ap7r();
    }
  } else if adj_res != res {
    fijk.coord = orig_coord;
  }

  Ok(fijk)
}

/// Applies a cell's digit path to an initialized face IJK address,
/// returning whether the result could overage across the face edge.
pub(crate) fn apply_digits(cell: CellIndex, fijk: &mut FaceIjk) -> bool {
  let res = cell.resolution();

  // a hexagon centered on its face can never escape the face
  let centered = fijk.coord == crate::types::CoordIjk::default();
  let possible_overage = is_base_cell_pentagon(cell.base_cell()) || (res != 0 && !centered);

  for r in 1..=res {
    if is_class_iii(r) {
      fijk.coord = fijk.coord.down_ap7();
    } else {
      fijk.coord = fijk.coord.down_ap7r();
    }
    fijk.coord = fijk.coord.neighbor(cell.digit(r));
  }

  possible_overage
}

/// Finds the cell containing a spherical coordinate at the given
/// resolution.
pub fn geo_to_cell(geo: &GeoCoord, res: i32) -> Result<CellIndex, GridError> {
  if !(0..=MAX_RES).contains(&res) {
    return Err(GridError::InvalidArg);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() {
    return Err(GridError::InvalidArg);
  }

  let fijk = geo_to_face_ijk(geo, res);
  let cell = face_ijk_to_cell(&fijk, res);
  if cell == CellIndex::NULL {
    return Err(GridError::InvalidArg);
  }
  Ok(cell)
}

/// The center of a cell on the sphere.
pub fn cell_to_geo(cell: CellIndex) -> Result<GeoCoord, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }
  let fijk = cell_to_face_ijk(cell)?;
  Ok(face_ijk_to_geo(&fijk, cell.resolution()))
}

/// The boundary vertices of a cell.
pub fn cell_to_boundary(cell: CellIndex) -> Result<GeoBoundary, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }
  let fijk = cell_to_face_ijk(cell)?;
  let res = cell.resolution();
  if is_pentagon(cell) {
    Ok(pent_boundary(&fijk, res, 0, crate::constants::NUM_PENT_VERTS))
  } else {
    Ok(cell_boundary(&fijk, res, 0, crate::constants::NUM_HEX_VERTS))
  }
}

/// A window of a cell's boundary: `length` topological vertices starting
/// at `start`, with distortion vertices. Used by the directed-edge
/// boundary.
pub(crate) fn cell_boundary_window(
  fijk: &FaceIjk,
  res: i32,
  start: usize,
  length: usize,
  pentagon: bool,
) -> GeoBoundary {
  if pentagon {
    pent_boundary(fijk, res, start, length)
  } else {
    cell_boundary(fijk, res, start, length)
  }
}

/// The maximum number of icosahedron faces a cell of this shape can
/// intersect: 2 for hexagons, 5 for pentagons.
#[must_use]
pub fn max_face_count(cell: CellIndex) -> usize {
  if is_pentagon(cell) {
    5
  } else {
    2
  }
}

/// All icosahedron faces intersected by a cell, unordered.
pub fn cell_to_faces(cell: CellIndex) -> Result<Vec<i32>, GridError> {
  if !is_valid_cell(cell) {
    return Err(GridError::InvalidArg);
  }

  let mut res = cell.resolution();
  let pentagon = is_pentagon(cell);

  // A Class II pentagon has all of its vertices on icosahedron edges. Its
  // direct center child crosses the same faces, so recurse through it.
  if pentagon && !is_class_iii(res) {
    let child = crate::hierarchy::direct_child(cell, Digit::Center)?;
    return cell_to_faces(child);
  }

  let mut fijk = cell_to_face_ijk(cell)?;

  let capacity = max_face_count(cell);
  let mut faces = vec![INVALID_FACE; capacity];

  if pentagon {
    let verts = pent_to_verts(&mut fijk, &mut res);
    for mut vert in verts {
      adjust_pent_vert_overage(&mut vert, res);
      record_face(&mut faces, vert.face)?;
    }
  } else {
    let verts = cell_to_verts(&mut fijk, &mut res);
    for mut vert in verts {
      adjust_overage_class_ii(&mut vert, res, false, true);
      record_face(&mut faces, vert.face)?;
    }
  }

  faces.retain(|&f| f != INVALID_FACE);
  Ok(faces)
}

// The output array doubles as a tiny hash set.
fn record_face(faces: &mut [i32], face: i32) -> Result<(), GridError> {
  let mut pos = 0;
  while faces[pos] != INVALID_FACE && faces[pos] != face {
    pos += 1;
    if pos >= faces.len() {
      return Err(GridError::BadData);
    }
  }
  faces[pos] = face;
  Ok(())
}
