/// Approximate equality for floating point values.
///
/// The sweep itself never compares with a tolerance (curve ordering must be exact for the output
/// to be valid), this trait exists for consumers of the results: comparing bounds, areas, and
/// transformed coordinates where rounding makes exact equality meaningless.
///
/// # Examples
///
/// ```
/// # use cag_area::core::traits::*;
/// let x = 0.1 + 0.2;
/// assert_ne!(x, 0.3);
/// assert!(x.fuzzy_eq(0.3));
/// assert!(!x.fuzzy_eq_eps(0.31, 1e-3));
/// ```
pub trait FuzzyEq: Sized + Copy {
    /// Default epsilon used by [FuzzyEq::fuzzy_eq] and [FuzzyEq::fuzzy_eq_zero].
    fn fuzzy_epsilon() -> Self;

    /// Returns `true` if `|self - other| < fuzzy_epsilon`.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, Self::fuzzy_epsilon())
    }

    /// Returns `true` if `|self| < fuzzy_epsilon`.
    fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool;

    /// Same as [FuzzyEq::fuzzy_eq_zero_eps] using [FuzzyEq::fuzzy_epsilon].
    #[inline]
    fn fuzzy_eq_zero(&self) -> bool {
        self.fuzzy_eq_zero_eps(Self::fuzzy_epsilon())
    }
}

/// Approximate ordering built on top of [FuzzyEq].
pub trait FuzzyOrd: FuzzyEq {
    /// `self > other - fuzzy_epsilon`.
    fn fuzzy_gt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_gt(&self, other: Self) -> bool {
        self.fuzzy_gt_eps(other, Self::fuzzy_epsilon())
    }

    /// `self < other + fuzzy_epsilon`.
    fn fuzzy_lt_eps(&self, other: Self, fuzzy_epsilon: Self) -> bool;

    #[inline]
    fn fuzzy_lt(&self, other: Self) -> bool {
        self.fuzzy_lt_eps(other, Self::fuzzy_epsilon())
    }

    /// Test if `self` lies in `[min, max]`, widened on both sides by `fuzzy_epsilon`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cag_area::core::traits::*;
    /// // a bound computed as 10.0 - 1e-12 still counts as inside [0, 10]
    /// assert!((10.0f64 + 1e-12).fuzzy_in_range_eps(0.0, 10.0, 1e-9));
    /// assert!(!11.0f64.fuzzy_in_range_eps(0.0, 10.0, 1e-9));
    /// ```
    #[inline]
    fn fuzzy_in_range_eps(&self, min: Self, max: Self, fuzzy_epsilon: Self) -> bool {
        self.fuzzy_gt_eps(min, fuzzy_epsilon) && self.fuzzy_lt_eps(max, fuzzy_epsilon)
    }

    #[inline]
    fn fuzzy_in_range(&self, min: Self, max: Self) -> bool {
        self.fuzzy_in_range_eps(min, max, Self::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy {
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
            #[inline]
            fn fuzzy_eq_zero_eps(&self, fuzzy_epsilon: Self) -> bool {
                self.abs() < fuzzy_epsilon
            }
        }

        impl FuzzyOrd for $ty {
            #[inline]
            fn fuzzy_gt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                self + fuzzy_epsilon > other
            }
            #[inline]
            fn fuzzy_lt_eps(&self, other: $ty, fuzzy_epsilon: $ty) -> bool {
                *self < other + fuzzy_epsilon
            }
        }
    };
}

impl_fuzzy!(f32, 1.0e-5);
impl_fuzzy!(f64, 1.0e-8);
