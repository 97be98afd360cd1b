/// Macro used for test assertions.
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Construct a `Vec` of [Vector2](crate::core::math::Vector2) points from a list of `(x, y)`
/// tuples.
///
/// # Examples
///
/// ```
/// # use bezier_beauty::points;
/// # use bezier_beauty::core::math::*;
/// let pts = points![(0.0, 1.0), (2.0, 0.0)];
/// assert_eq!(pts.len(), 2);
/// assert_eq!(pts[0], Vector2::new(0.0, 1.0));
/// assert_eq!(pts[1], Vector2::new(2.0, 0.0));
/// ```
#[macro_export]
macro_rules! points {
    ($( $x:expr ),* $(,)?) => {
        {
            vec![$($crate::core::math::Vector2::new($x.0, $x.1)),*]
        }
    };
}
