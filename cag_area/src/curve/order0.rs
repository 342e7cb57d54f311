use crate::core::{math::Vector2, traits::Real};

/// Degenerate curve marking the start of a subpath (a "moveto").
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Order0<T = f64> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Order0<T>
where
    T: Real,
{
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn point(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// Returns `true` if the point lies strictly inside the open rectangle.
    #[inline]
    pub fn strictly_inside(&self, xlo: T, ylo: T, xhi: T, yhi: T) -> bool {
        self.x > xlo && self.x < xhi && self.y > ylo && self.y < yhi
    }
}
