//! Scalar, planar and spherical math helpers.

pub mod numerics;
pub mod spherical;
pub mod vec2d;
pub mod vec3d;
