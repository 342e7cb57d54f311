use super::{vec2, Vector2};
use crate::core::traits::Real;

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a * x + c * y + e, b * x + d * y + f)`, i.e. the column major matrix
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2D<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub e: T,
    pub f: T,
}

impl<T> Transform2D<T>
where
    T: Real,
{
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn translate(dx: T, dy: T) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), dx, dy)
    }

    #[inline]
    pub fn scale(sx: T, sy: T) -> Self {
        Self::new(sx, T::zero(), T::zero(), sy, T::zero(), T::zero())
    }

    /// Counter clockwise rotation (in a y-up coordinate system) about the origin by `angle`
    /// radians.
    #[inline]
    pub fn rotate(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c, T::zero(), T::zero())
    }

    /// Returns the transform that applies `self` first and then `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cag_area::core::math::*;
    /// let t = Transform2D::scale(2.0, 2.0).then(&Transform2D::translate(1.0, 0.0));
    /// assert_eq!(t.apply(vec2(1.0, 1.0)), vec2(3.0, 2.0));
    /// ```
    pub fn then(&self, next: &Self) -> Self {
        Self::new(
            next.a * self.a + next.c * self.b,
            next.b * self.a + next.d * self.b,
            next.a * self.c + next.c * self.d,
            next.b * self.c + next.d * self.d,
            next.a * self.e + next.c * self.f + next.e,
            next.b * self.e + next.d * self.f + next.f,
        )
    }

    #[inline]
    pub fn apply(&self, p: Vector2<T>) -> Vector2<T> {
        vec2(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Returns `true` if all six coefficients are finite.
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Returns `true` if the transform is (fuzzy) equal to the identity.
    pub fn is_identity(&self) -> bool {
        self.a.fuzzy_eq(T::one())
            && self.b.fuzzy_eq_zero()
            && self.c.fuzzy_eq_zero()
            && self.d.fuzzy_eq(T::one())
            && self.e.fuzzy_eq_zero()
            && self.f.fuzzy_eq_zero()
    }
}

impl<T> Default for Transform2D<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}
