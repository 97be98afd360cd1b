/// Tolerance based equality for floating point values.
///
/// Interpolated points are accumulated through several levels of arithmetic so exact equality is
/// rarely meaningful, compare with a tolerance (epsilon) instead.
///
/// # Examples
///
/// ```
/// # use bezier_beauty::core::traits::*;
/// let a = 0.1 + 0.2;
/// assert_ne!(a, 0.3);
/// assert!(a.fuzzy_eq(0.3));
/// assert!(!a.fuzzy_eq_eps(0.31, 1e-3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default tolerance used by [FuzzyEq::fuzzy_eq].
    fn fuzzy_epsilon() -> Self;

    /// Returns true if `self` and `other` differ by less than `fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($ty:ty, $eps:expr) => {
        impl FuzzyEq for $ty {
            #[inline]
            fn fuzzy_epsilon() -> Self {
                $eps
            }

            #[inline]
            fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool {
                (*self - other).abs() < fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy_eq!(f32, 1.0e-5);
impl_fuzzy_eq!(f64, 1.0e-8);
