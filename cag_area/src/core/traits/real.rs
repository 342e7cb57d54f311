use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a real number coordinate type (`f32` or `f64`) for curves and regions.
///
/// The curve math needs a handful of small integer constants, these are provided as methods so
/// generic code does not have to go through `T::from(..).unwrap()` in hot paths.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn three() -> Self {
        Self::two() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    #[inline]
    fn pi() -> Self {
        Self::constant(std::f64::consts::PI)
    }

    /// Returns `true` if the value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Converts an algorithm constant given as `f64` (narrowing for `f32`).
    fn constant(v: f64) -> Self;

    /// Smallest positive normal value, used as a floor for relative step sizes.
    #[inline]
    fn tiny() -> Self {
        num_traits::real::Real::min_positive_value()
    }
}

impl Real for f32 {
    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn constant(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn three() -> Self {
        3.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }
}

impl Real for f64 {
    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn constant(v: f64) -> Self {
        v
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn three() -> Self {
        3.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }
}
