//! Core/common math functions for working with 2D points, affine transforms and polynomial roots.
mod base_math;
mod transform;
mod vector2;

pub use base_math::*;
pub use transform::Transform2D;
pub use vector2::{vec2, Vector2};
