//! Directed edges: identifiers for a cell together with an outward
//! direction, uniquely naming an adjacency.

use crate::base_cells::{base_cell_rotations_on_face, base_cell_to_face_ijk, is_base_cell_pentagon, is_base_cell_polar_pentagon};
use crate::cell::{is_pentagon, is_valid_cell, is_valid_directed_edge};
use crate::constants::{CELL_MODE, DIRECTED_EDGE_MODE, NUM_HEX_VERTS, NUM_PENTAGONS, NUM_PENT_VERTS};
use crate::error::GridError;
use crate::hierarchy::parent;
use crate::indexing::{cell_boundary_window, cell_to_face_ijk};
use crate::traversal::{direction_to_neighbor, neighbor_rotations};
use crate::types::{CellIndex, Digit, GeoBoundary};

/// Whether two cells share an edge.
///
/// Same-parent siblings are resolved by the two direction cycles around
/// the parent center; everything else falls back to a k=1 ring membership
/// test around `origin`.
pub fn are_neighbors(origin: CellIndex, destination: CellIndex) -> Result<bool, GridError> {
  if origin.mode() != CELL_MODE || destination.mode() != CELL_MODE {
    return Err(GridError::InvalidArg);
  }

  // a cell does not neighbor itself
  if origin == destination {
    return Ok(false);
  }

  if origin.resolution() != destination.resolution() {
    return Err(GridError::ResMismatch);
  }

  if !is_valid_cell(origin) || !is_valid_cell(destination) {
    return Err(GridError::InvalidArg);
  }

  // Cells sharing a parent are very likely neighbors: the center child
  // touches every sibling, and the others touch the siblings one rotation
  // away in either direction. The check only confirms positives; pentagon
  // distortion can make non-sibling cells adjacent too.
  let parent_res = origin.resolution() - 1;
  if parent_res > 0 && parent(origin, parent_res)? == parent(destination, parent_res)? {
    let origin_digit = origin.digit(parent_res + 1);
    let destination_digit = destination.digit(parent_res + 1);
    if origin_digit == Digit::Center || destination_digit == Digit::Center {
      return Ok(true);
    }
    if origin_digit.rotate60_cw() == destination_digit || origin_digit.rotate60_ccw() == destination_digit {
      return Ok(true);
    }
  }

  Ok(direction_to_neighbor(origin, destination) != Digit::Invalid)
}

/// The directed edge from `origin` to the adjacent cell `destination`.
pub fn directed_edge(origin: CellIndex, destination: CellIndex) -> Result<CellIndex, GridError> {
  let direction = direction_to_neighbor(origin, destination);
  if direction == Digit::Invalid || direction == Digit::Center {
    return Err(GridError::NotNeighbor);
  }

  let mut edge = origin;
  edge.set_mode(DIRECTED_EDGE_MODE);
  edge.set_reserved(direction as u8);
  Ok(edge)
}

/// The cell a directed edge leaves from.
pub fn edge_origin(edge: CellIndex) -> Result<CellIndex, GridError> {
  if edge.mode() != DIRECTED_EDGE_MODE {
    return Err(GridError::InvalidArg);
  }
  let mut origin = edge;
  origin.set_mode(CELL_MODE);
  origin.set_reserved(0);
  Ok(origin)
}

/// The cell a directed edge points into.
pub fn edge_destination(edge: CellIndex) -> Result<CellIndex, GridError> {
  let direction = Digit::from_bits(u64::from(edge.reserved()));
  let origin = edge_origin(edge)?;
  let mut rotations = 0;
  neighbor_rotations(origin, direction, &mut rotations)
}

/// Origin and destination of a directed edge, in that order.
pub fn edge_cells(edge: CellIndex) -> Result<(CellIndex, CellIndex), GridError> {
  if !is_valid_directed_edge(edge) {
    return Err(GridError::InvalidArg);
  }
  Ok((edge_origin(edge)?, edge_destination(edge)?))
}

/// All directed edges leaving `origin`. Slot `i` carries direction `i + 1`;
/// slot 0 is the null identifier for pentagons, whose k edge is deleted.
pub fn edges_from_cell(origin: CellIndex) -> Result<[CellIndex; 6], GridError> {
  if !is_valid_cell(origin) {
    return Err(GridError::InvalidArg);
  }

  let pentagon = is_pentagon(origin);
  let mut out = [CellIndex::NULL; 6];
  for (i, slot) in out.iter_mut().enumerate() {
    if pentagon && i == 0 {
      continue;
    }
    let mut edge = origin;
    edge.set_mode(DIRECTED_EDGE_MODE);
    edge.set_reserved(i as u8 + 1);
    *slot = edge;
  }
  Ok(out)
}

// Vertex numbers of the origin hexagon counter-clockwise from the shared
// edge in each direction, before orientation correction. -1 is unused.
const INVALID_VERTEX: i32 = -1;
static DIRECTION_TO_VERTEX_HEX: [i32; 7] = [INVALID_VERTEX, 3, 1, 2, 5, 4, 0];
static DIRECTION_TO_VERTEX_PENT: [i32; 7] = [INVALID_VERTEX, INVALID_VERTEX, 1, 2, 4, 3, 0];

/// Faces a pentagon base cell's neighbors sit on, in directional order
/// starting at the j axis.
struct PentagonDirectionFaces {
  base_cell: i32,
  faces: [i32; NUM_PENT_VERTS],
}

const fn pdf(base_cell: i32, faces: [i32; NUM_PENT_VERTS]) -> PentagonDirectionFaces {
  PentagonDirectionFaces { base_cell, faces }
}

#[rustfmt::skip]
static PENTAGON_DIRECTION_FACES: [PentagonDirectionFaces; NUM_PENTAGONS as usize] = [
  pdf(4, [4, 0, 2, 1, 3]),
  pdf(14, [6, 11, 2, 7, 1]),
  pdf(24, [5, 10, 1, 6, 0]),
  pdf(38, [7, 12, 3, 8, 2]),
  pdf(49, [9, 14, 0, 5, 4]),
  pdf(58, [8, 13, 4, 9, 3]),
  pdf(63, [11, 6, 15, 10, 16]),
  pdf(72, [12, 7, 16, 11, 17]),
  pdf(83, [10, 5, 19, 14, 15]),
  pdf(97, [13, 8, 17, 12, 18]),
  pdf(107, [14, 9, 18, 13, 19]),
  pdf(117, [15, 19, 17, 18, 16]),
];

/// The ccw rotation of a cell's vertex numbering relative to its canonical
/// face orientation.
fn vertex_rotations(cell: CellIndex) -> Result<i32, GridError> {
  let fijk = cell_to_face_ijk(cell)?;
  let base_cell = cell.base_cell();
  let base_fijk = base_cell_to_face_ijk(base_cell);

  let mut ccw_rot60 = base_cell_rotations_on_face(base_cell, fijk.face);
  if ccw_rot60 < 0 {
    return Err(GridError::BadData);
  }

  if is_base_cell_pentagon(base_cell) {
    let dir_faces = PENTAGON_DIRECTION_FACES
      .iter()
      .find(|p| p.base_cell == base_cell)
      .ok_or(GridError::BadData)?;

    // extra ccw rotation for polar neighbors and the ik-direction face
    if fijk.face != base_fijk.face
      && (is_base_cell_polar_pentagon(base_cell) || fijk.face == dir_faces.faces[Digit::Ik as usize - Digit::J as usize])
    {
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }

    // crossing the deleted k subsequence shifts the numbering
    match cell.leading_non_zero_digit() {
      Digit::Jk => ccw_rot60 = (ccw_rot60 + 5) % 6,
      Digit::Ik => ccw_rot60 = (ccw_rot60 + 1) % 6,
      _ => {}
    }
  }
  Ok(ccw_rot60)
}

/// The topological vertex number where the edge in `direction` begins on
/// `origin`, or an error for directions that carry no edge.
fn vertex_num_for_direction(origin: CellIndex, direction: Digit) -> Result<usize, GridError> {
  let pentagon = is_pentagon(origin);
  if direction == Digit::Center || direction == Digit::Invalid || (pentagon && direction == Digit::K) {
    return Err(GridError::InvalidArg);
  }

  let rotations = vertex_rotations(origin)?;

  let vertex = if pentagon {
    (DIRECTION_TO_VERTEX_PENT[direction as usize] + NUM_PENT_VERTS as i32 - rotations) % NUM_PENT_VERTS as i32
  } else {
    (DIRECTION_TO_VERTEX_HEX[direction as usize] + NUM_HEX_VERTS as i32 - rotations) % NUM_HEX_VERTS as i32
  };
  Ok(vertex as usize)
}

/// The boundary of a directed edge: its two topological vertices, plus any
/// distortion vertices where the edge crosses an icosahedron edge.
pub fn edge_boundary(edge: CellIndex) -> Result<GeoBoundary, GridError> {
  if !is_valid_directed_edge(edge) {
    return Err(GridError::InvalidArg);
  }
  let direction = Digit::from_bits(u64::from(edge.reserved()));
  let origin = edge_origin(edge)?;

  let start_vertex = vertex_num_for_direction(origin, direction)?;

  let fijk = cell_to_face_ijk(origin)?;
  let res = origin.resolution();
  if is_pentagon(origin) {
    Ok(cell_boundary_window(&fijk, res, start_vertex, 2, true))
  } else {
    Ok(cell_boundary_window(&fijk, res, start_vertex, 2, false))
  }
}
