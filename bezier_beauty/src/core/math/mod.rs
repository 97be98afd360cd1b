//! Core/common math functions for working with angles, interpolation and 2D points.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{Vector2, vec2};
