//! Error kinds shared by every fallible operation.

use thiserror::Error;

/// Failure modes of the cell-index core.
///
/// There is no recovery inside the core; each operation reports its own
/// status and leaves inputs untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GridError {
  /// Resolution out of range, non-finite coordinate, or an identifier that
  /// is not a valid cell where one is required.
  #[error("argument outside the acceptable domain")]
  InvalidArg,
  /// Two cells expected at the same resolution were not.
  #[error("cell resolutions do not match")]
  ResMismatch,
  /// The base cells involved are not adjacent, so local unfolding is not
  /// possible.
  #[error("cells are not neighbors")]
  NotNeighbor,
  /// A pentagon distortion case the algorithm cannot resolve.
  #[error("pentagon distortion encountered")]
  Pentagon,
  /// An aggregation step encountered structurally bad data, e.g. compaction
  /// derived an invalid parent.
  #[error("malformed input data")]
  BadData,
  /// Arithmetic would exceed 64-bit bounds.
  #[error("arithmetic overflow")]
  Overflow,
}
