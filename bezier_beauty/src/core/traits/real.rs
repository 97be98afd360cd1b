use super::FuzzyEq;

/// Floating point type the geometry is computed in.
///
/// Implemented for `f32` and `f64`, all geometry in this crate is generic over it.
pub trait Real:
    num_traits::real::Real + FuzzyEq + std::default::Default + std::fmt::Debug + 'static
{
    /// Full turn (360 degrees) in radians.
    fn tau() -> Self;

    /// Quarter turn (90 degrees) in radians.
    fn half_pi() -> Self;
}

impl Real for f32 {
    #[inline]
    fn tau() -> Self {
        std::f32::consts::TAU
    }

    #[inline]
    fn half_pi() -> Self {
        std::f32::consts::FRAC_PI_2
    }
}

impl Real for f64 {
    #[inline]
    fn tau() -> Self {
        std::f64::consts::TAU
    }

    #[inline]
    fn half_pi() -> Self {
        std::f64::consts::FRAC_PI_2
    }
}
