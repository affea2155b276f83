//! Grid traversal primitives: the single-step neighbor walk used by the
//! adjacency and directed-edge operations.

pub(crate) mod neighbors;

pub(crate) use neighbors::{direction_to_neighbor, neighbor_rotations};
