#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::similar_names)]

//! `geocell` is a hierarchical hexagonal geospatial index on an icosahedral
//! projection of the sphere, bit-compatible with the established H3 v3
//! 64-bit cell format.
//!
//! Each [`CellIndex`] packs a geodesic cell at one of sixteen resolutions
//! into a single word. The crate converts between spherical coordinates and
//! identifiers, walks the hierarchy (parents, children, compaction),
//! unfolds local neighborhoods into planar coordinates for distance and
//! line drawing, and names adjacencies with directed-edge identifiers.
//!
//! The core is pure computation over immutable inputs: no I/O, no global
//! mutable state, and deterministic double-precision results.

pub(crate) mod base_cells;
pub mod cell;
pub mod constants;
pub mod coords;
pub mod edges;
pub mod error;
pub mod hierarchy;
pub mod indexing;
pub mod local_ijk;
pub mod math;
pub mod measures;
pub(crate) mod traversal;
pub mod types;

pub use constants::MAX_BOUNDARY_VERTS;
pub use error::GridError;
pub use types::{CellIndex, CoordIj, CoordIjk, Digit, FaceIjk, GeoBoundary, GeoCoord, Vec2d, Vec3d};

pub use cell::{format_id, is_pentagon, is_valid_cell, is_valid_directed_edge, parse_id};
pub use edges::{
  are_neighbors, directed_edge, edge_boundary, edge_cells, edge_destination, edge_origin, edges_from_cell,
};
pub use hierarchy::{
  center_child, children, compact, direct_child, get_pentagon_indexes, max_children_size, num_hexagons, parent,
  res0_cells, uncompact, uncompact_size,
};
pub use indexing::{cell_to_boundary, cell_to_faces, cell_to_geo, geo_to_cell, max_face_count};
pub use local_ijk::{
  grid_distance, grid_line, grid_line_size, local_ij_to_cell, local_ijk_to_cell, to_local_ij, to_local_ijk,
};
pub use math::numerics::{degs_to_rads, is_class_iii, rads_to_degs};
pub use math::spherical::{point_distance_km, point_distance_m, point_distance_rads};
pub use measures::{
  cell_area_km2, cell_area_m2, cell_area_rads2, exact_edge_length_km, exact_edge_length_m, exact_edge_length_rads,
  hex_area_avg_km2, hex_area_avg_m2, hex_edge_length_avg_km, hex_edge_length_avg_m,
};
