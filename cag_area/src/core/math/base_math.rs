use super::Vector2;
use crate::core::traits::Real;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use cag_area::core::math::*;
/// let (min_val, max_val) = min_max(8, 4);
/// assert_eq!(min_val, 4);
/// assert_eq!(max_val, 8);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 {
        (v1, v2)
    } else {
        (v2, v1)
    }
}

/// Roots of `c0 + c1*t + c2*t^2 = 0` as returned by [solve_quadratic].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum QuadraticRoots<T> {
    /// Every `t` is a root (all coefficients are zero) or no `t` is (only `c0` is non-zero). Either
    /// way there is nothing to report.
    Degenerate,
    /// No real roots.
    None,
    /// One real root (the equation degenerated to a line).
    One(T),
    /// Two real roots, possibly equal.
    Two(T, T),
}

impl<T> QuadraticRoots<T>
where
    T: Copy,
{
    /// Visit each real root.
    pub fn for_each<F>(&self, mut visitor: F)
    where
        F: FnMut(T),
    {
        match *self {
            QuadraticRoots::Degenerate | QuadraticRoots::None => {}
            QuadraticRoots::One(r) => visitor(r),
            QuadraticRoots::Two(r1, r2) => {
                visitor(r1);
                visitor(r2);
            }
        }
    }
}

/// Solve `c0 + c1*t + c2*t^2 = 0`.
///
/// Roots are computed without cancellation error: one root uses `q / c2` and the other `c0 / q`
/// where `q = -(c1 + sign(c1) * sqrt(discriminant)) / 2`. The second root is omitted when
/// `q == 0`.
///
/// # Examples
///
/// ```
/// # use cag_area::core::math::*;
/// // t^2 - 3t + 2 = (t - 1)(t - 2)
/// match solve_quadratic(2.0, -3.0, 1.0) {
///     QuadraticRoots::Two(a, b) => {
///         let (lo, hi) = min_max(a, b);
///         assert_eq!((lo, hi), (1.0, 2.0));
///     }
///     r => panic!("unexpected roots {:?}", r),
/// }
/// assert_eq!(solve_quadratic(1.0, 0.0, 1.0), QuadraticRoots::None);
/// assert_eq!(solve_quadratic(-1.0, 2.0, 0.0), QuadraticRoots::One(0.5));
/// ```
pub fn solve_quadratic<T>(c0: T, c1: T, c2: T) -> QuadraticRoots<T>
where
    T: Real,
{
    if c2 == T::zero() {
        if c1 == T::zero() {
            return QuadraticRoots::Degenerate;
        }
        return QuadraticRoots::One(-c0 / c1);
    }

    let disc = c1 * c1 - T::four() * c2 * c0;
    if disc < T::zero() {
        return QuadraticRoots::None;
    }

    let mut d = disc.sqrt();
    if c1 < T::zero() {
        d = -d;
    }
    let q = (c1 + d) / -T::two();
    if q == T::zero() {
        return QuadraticRoots::One(q / c2);
    }

    QuadraticRoots::Two(q / c2, c0 / q)
}

/// Linear interpolation `a + (b - a) * t`.
#[inline]
pub fn lerp<T>(a: T, b: T, t: T) -> T
where
    T: Real,
{
    a + (b - a) * t
}

/// Midpoint of a line segment defined by `p0` to `p1`.
#[inline]
pub fn midpoint<T>(p0: Vector2<T>, p1: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    Vector2::new((p0.x + p1.x) / T::two(), (p0.y + p1.y) / T::two())
}

/// Squared distance from `point` to the line segment `p0` to `p1`.
///
/// Falls back to the squared distance to `p0` when the segment is degenerate (`p0 == p1`).
#[inline]
pub fn seg_dist_squared<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> T
where
    T: Real,
{
    let v = p1 - p0;
    let w = point - p0;
    let len2 = v.length_squared();
    if len2 == T::zero() {
        return w.length_squared();
    }
    let t = w.dot(v) / len2;
    if t <= T::zero() {
        w.length_squared()
    } else if t >= T::one() {
        (point - p1).length_squared()
    } else {
        let cross = v.perp_dot(w);
        cross * cross / len2
    }
}
