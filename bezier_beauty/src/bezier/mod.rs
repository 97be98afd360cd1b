//! De Casteljau evaluation that keeps every intermediate level of interpolated points.
//!
//! Starting from a list of control points each level is produced by linearly interpolating every
//! adjacent pair of the previous level at the same fraction `t`, so each level is one point shorter
//! than the one before it. The levels are the "handles" drawn by the animation. Interpolating the
//! last (2 point) level gives the point on the Bezier curve at `t`, which is kept separately.
use std::slice;

use crate::core::{
    math::{Vector2, lerp},
    traits::Real,
};

/// All interpolation levels for a set of control points plus the captured curve point.
///
/// Levels are ordered from longest (the input control points) to shortest (2 points, or the single
/// input point for a 1 point input).
#[derive(Debug, Clone, PartialEq)]
pub struct HandleCascade<T = f64> {
    levels: Vec<Vec<Vector2<T>>>,
    curve_point: Option<Vector2<T>>,
}

impl<T> Default for HandleCascade<T> {
    fn default() -> Self {
        Self {
            levels: Vec::new(),
            curve_point: None,
        }
    }
}

impl<T> HandleCascade<T>
where
    T: Real,
{
    /// Empty cascade (no levels and no curve point).
    pub fn new() -> Self {
        Self::default()
    }

    /// All levels, longest first.
    #[inline]
    pub fn levels(&self) -> &[Vec<Vector2<T>>] {
        &self.levels
    }

    /// Point on the curve captured when the 2 point level was reduced to a single point.
    ///
    /// `None` if the control points given had fewer than 2 points.
    #[inline]
    pub fn curve_point(&self) -> Option<Vector2<T>> {
        self.curve_point
    }

    #[inline]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterate the levels with their index (the index is used to pick the level color).
    #[inline]
    pub fn iter(&self) -> std::iter::Enumerate<slice::Iter<'_, Vec<Vector2<T>>>> {
        self.levels.iter().enumerate()
    }

    /// Decompose into the levels and curve point.
    #[inline]
    pub fn into_parts(self) -> (Vec<Vec<Vector2<T>>>, Option<Vector2<T>>) {
        (self.levels, self.curve_point)
    }

    /// Drop all levels and the curve point, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.levels.clear();
        self.curve_point = None;
    }
}

/// Build the full handle cascade for `vertices` at interpolation fraction `t`.
///
/// The input itself is the first level. Each following level linearly interpolates every adjacent
/// pair of the previous level at `t` (see [lerp]) down to a level with 2 points, so an input of
/// `n >= 2` points produces `n - 1` levels.
///
/// The curve point is captured by interpolating the 2 point level, the single point it reduces to
/// is not stored as a level. `t` is not clamped. Inputs with fewer than 2 points produce no curve point (and an empty input produces
/// no levels).
///
/// # Examples
///
/// ```
/// # use bezier_beauty::bezier::*;
/// # use bezier_beauty::core::math::*;
/// let pts = vec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)];
/// let cascade = handle_cascade(&pts, 0.5);
/// assert_eq!(cascade.level_count(), 1);
/// assert_eq!(cascade.curve_point(), Some(Vector2::new(5.0, 0.0)));
///
/// // a single control point has nothing to interpolate
/// let cascade = handle_cascade(&pts[..1], 0.5);
/// assert_eq!(cascade.level_count(), 1);
/// assert_eq!(cascade.curve_point(), None);
/// ```
pub fn handle_cascade<T>(vertices: &[Vector2<T>], t: T) -> HandleCascade<T>
where
    T: Real,
{
    let mut result = HandleCascade::new();
    handle_cascade_into(vertices, t, &mut result);
    result
}

/// Same as [handle_cascade] but writes into an existing cascade, replacing its contents.
pub fn handle_cascade_into<T>(vertices: &[Vector2<T>], t: T, cascade: &mut HandleCascade<T>)
where
    T: Real,
{
    cascade.clear();
    if vertices.is_empty() {
        return;
    }

    cascade.levels.reserve(vertices.len());
    cascade.levels.push(vertices.to_vec());

    loop {
        let current = &cascade.levels[cascade.levels.len() - 1];
        match current.len() {
            0 | 1 => break,
            2 => {
                // the 2 -> 1 reduction yields the curve point, not another level
                cascade.curve_point = Some(lerp(current[0], current[1], t));
                break;
            }
            _ => {
                let next: Vec<_> = current.windows(2).map(|w| lerp(w[0], w[1], t)).collect();
                cascade.levels.push(next);
            }
        }
    }
}

/// Evaluate only the curve point for `vertices` at `t` without keeping the intermediate levels.
///
/// Returns the same point as [HandleCascade::curve_point] for the same inputs.
pub fn curve_point<T>(vertices: &[Vector2<T>], t: T) -> Option<Vector2<T>>
where
    T: Real,
{
    if vertices.len() < 2 {
        return None;
    }

    let mut level = vertices.to_vec();
    while level.len() > 2 {
        for i in 0..level.len() - 1 {
            level[i] = lerp(level[i], level[i + 1], t);
        }
        level.pop();
    }

    Some(lerp(level[0], level[1], t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_nothing() {
        let pts = points![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)];
        let mut cascade = handle_cascade(&pts, 0.3);
        assert_eq!(cascade.level_count(), 2);
        cascade.clear();
        assert!(cascade.is_empty());
        assert_eq!(cascade.curve_point(), None);
    }

    #[test]
    fn into_replaces_previous_contents() {
        let mut cascade = handle_cascade(&points![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)], 0.3);
        handle_cascade_into(&points![(4.0, 4.0), (8.0, 4.0)], 0.25, &mut cascade);
        assert_eq!(cascade.level_count(), 1);
        assert_eq!(cascade.levels()[0], points![(4.0, 4.0), (8.0, 4.0)]);
        assert_eq!(cascade.curve_point(), Some(Vector2::new(5.0, 4.0)));
    }
}
