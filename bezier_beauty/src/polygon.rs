//! Regular polygon vertex generation.
use crate::core::{
    math::{Vector2, point_on_circle},
    traits::Real,
};

/// Returns the closed vertex set of a regular polygon with `sides` vertexes.
///
/// Vertexes are placed on the circle with `center` and `radius`, starting at `PI / 2` (pointing
/// up) and proceeding counter clockwise by `2PI / sides`. The first vertex is repeated at the end
/// to close the loop so the result has `sides + 1` points (empty if `sides` is 0).
///
/// # Examples
///
/// ```
/// # use bezier_beauty::polygon::*;
/// # use bezier_beauty::core::math::*;
/// let square = regular_polygon(4, Vector2::new(0.0, 0.0), 1.0);
/// assert_eq!(square.len(), 5);
/// assert!(square[0].fuzzy_eq(Vector2::new(0.0, 1.0)));
/// assert!(square[1].fuzzy_eq(Vector2::new(-1.0, 0.0)));
/// assert_eq!(square[0], square[4]);
/// ```
pub fn regular_polygon<T>(sides: usize, center: Vector2<T>, radius: T) -> Vec<Vector2<T>>
where
    T: Real,
{
    let Some(sides_real) = T::from(sides) else {
        return Vec::new();
    };

    if sides == 0 {
        return Vec::new();
    }

    let step = T::tau() / sides_real;
    let mut result = Vec::with_capacity(sides + 1);
    let mut angle = T::half_pi();
    for _ in 0..sides {
        result.push(point_on_circle(radius, center, angle));
        angle = angle + step;
    }

    result.push(result[0]);
    result
}
