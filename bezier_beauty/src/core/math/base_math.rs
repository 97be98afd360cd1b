use super::Vector2;
use crate::core::traits::Real;

/// Linear interpolation between points `a` and `b` at fraction `t`.
///
/// Computes `a + (b - a) * t` per component. `t` is not clamped so values outside of `[0, 1]`
/// extrapolate along the line through `a` and `b`.
///
/// # Examples
///
/// ```
/// # use bezier_beauty::core::math::*;
/// let a = Vector2::new(0.0, 0.0);
/// let b = Vector2::new(10.0, 0.0);
/// assert_eq!(lerp(a, b, 0.0), a);
/// assert_eq!(lerp(a, b, 0.5), Vector2::new(5.0, 0.0));
/// assert_eq!(lerp(a, b, 1.5), Vector2::new(15.0, 0.0));
/// ```
#[inline]
pub fn lerp<T>(a: Vector2<T>, b: Vector2<T>, t: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Distance squared between the points `p0` and `p1`.
#[inline]
pub fn dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    let d = p1 - p0;
    d.dot(d)
}

/// Angle of the direction vector described by `p0` to `p1`.
#[inline]
pub fn angle<T>(p0: Vector2<T>, p1: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(p1.y - p0.y, p1.x - p0.x)
}

/// Returns the point on the circle with `radius`, `center`, and polar `angle` in radians given.
#[inline]
pub fn point_on_circle<T>(radius: T, center: Vector2<T>, angle: T) -> Vector2<T>
where
    T: Real,
{
    Vector2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}
