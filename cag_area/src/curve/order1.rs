use super::{compare::ordering_of, Direction};
use crate::{core::traits::Real, crossings::Crossings, error::SweepError};
use std::cmp::Ordering;

/// Line segment stored top to bottom (`y0 <= y1`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Order1<T = f64> {
    pub(crate) x0: T,
    pub(crate) y0: T,
    pub(crate) x1: T,
    pub(crate) y1: T,
    pub(crate) xmin: T,
    pub(crate) xmax: T,
    pub(crate) direction: Direction,
}

impl<T> Order1<T>
where
    T: Real,
{
    /// Create a new line from the top point `(x0, y0)` to the bottom point `(x1, y1)`.
    pub fn new(x0: T, y0: T, x1: T, y1: T, direction: Direction) -> Self {
        debug_assert!(y0 <= y1, "line must be stored top to bottom");
        let (xmin, xmax) = if x0 < x1 { (x0, x1) } else { (x1, x0) };
        Self {
            x0,
            y0,
            x1,
            y1,
            xmin,
            xmax,
            direction,
        }
    }

    /// Returns `true` if the line is vertical.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.x0 == self.x1
    }

    pub fn x_at_y(&self, y: T) -> T {
        if self.x0 == self.x1 || y <= self.y0 {
            return self.x0;
        }
        if y >= self.y1 {
            return self.x1;
        }
        self.x0 + (y - self.y0) * (self.x1 - self.x0) / (self.y1 - self.y0)
    }

    pub fn t_at_y(&self, y: T) -> T {
        if y <= self.y0 {
            return T::zero();
        }
        if y >= self.y1 {
            return T::one();
        }
        (y - self.y0) / (self.y1 - self.y0)
    }

    #[inline]
    pub fn x_at_t(&self, t: T) -> T {
        self.x0 + t * (self.x1 - self.x0)
    }

    #[inline]
    pub fn y_at_t(&self, t: T) -> T {
        self.y0 + t * (self.y1 - self.y0)
    }

    pub fn dx_at_t(&self, t: T, deriv: u32) -> T {
        match deriv {
            0 => self.x_at_t(t),
            1 => self.x1 - self.x0,
            _ => T::zero(),
        }
    }

    pub fn dy_at_t(&self, t: T, deriv: u32) -> T {
        match deriv {
            0 => self.y_at_t(t),
            1 => self.y1 - self.y0,
            _ => T::zero(),
        }
    }

    pub fn sub_curve(&self, ystart: T, yend: T, direction: Direction) -> Self {
        if ystart == self.y0 && yend == self.y1 {
            return self.with_direction(direction);
        }
        if self.x0 == self.x1 {
            return Self::new(self.x0, ystart, self.x1, yend, direction);
        }
        let num = self.x0 - self.x1;
        let denom = self.y0 - self.y1;
        let xstart = self.x0 + (ystart - self.y0) * num / denom;
        let xend = self.x0 + (yend - self.y0) * num / denom;
        Self::new(xstart, ystart, xend, yend, direction)
    }

    #[inline]
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self { direction, ..*self }
    }

    /// Closed form ordering of two lines over `yrange`, see
    /// [Curve::compare](super::Curve::compare).
    pub fn compare(&self, other: &Self, yrange: &mut [T; 2]) -> Result<Ordering, SweepError> {
        if yrange[1] <= yrange[0] {
            return Err(SweepError::back_step(yrange[0], yrange[1]));
        }
        yrange[1] =
            num_traits::real::Real::min(num_traits::real::Real::min(yrange[1], self.y1), other.y1);
        if yrange[1] <= yrange[0] {
            return Err(SweepError::back_step(yrange[0], yrange[1]));
        }
        if self.xmax <= other.xmin {
            return Ok(if self.xmin == other.xmax {
                Ordering::Equal
            } else {
                Ordering::Less
            });
        }
        if self.xmin >= other.xmax {
            return Ok(Ordering::Greater);
        }

        let dxa = self.x1 - self.x0;
        let dya = self.y1 - self.y0;
        let dxb = other.x1 - other.x0;
        let dyb = other.y1 - other.y0;
        let denom = dxb * dya - dxa * dyb;
        // lines meeting at the top of the range (a shared vertex) cross there, the rounded
        // crossing may land a few ulps lower
        let meet_at_top = self.x_at_y(yrange[0]) == other.x_at_y(yrange[0]);
        let y = if denom != T::zero() {
            let num = (self.x0 - other.x0) * dya * dyb - self.y0 * dxa * dyb
                + other.y0 * dxb * dya;
            let y = num / denom;
            if meet_at_top || y <= yrange[0] {
                // crossing is at or above the top, order is fixed all the way down
                num_traits::real::Real::min(self.y1, other.y1)
            } else {
                if y < yrange[1] {
                    yrange[1] = y;
                }
                num_traits::real::Real::max(self.y0, other.y0)
            }
        } else {
            num_traits::real::Real::max(self.y0, other.y0)
        };

        Ok(ordering_of(self.x_at_y(y), other.x_at_y(y)))
    }

    pub fn accumulate_crossings(&self, c: &mut Crossings<T>) -> bool {
        let (xlo, ylo, xhi, yhi) = (c.x_lo(), c.y_lo(), c.x_hi(), c.y_hi());
        if self.xmin >= xhi {
            return false;
        }

        let (xstart, ystart) = if self.y0 < ylo {
            if self.y1 <= ylo {
                return false;
            }
            (self.x_at_y(ylo), ylo)
        } else {
            if self.y0 >= yhi {
                return false;
            }
            (self.x0, self.y0)
        };

        let (xend, yend) = if self.y1 > yhi {
            (self.x_at_y(yhi), yhi)
        } else {
            (self.x1, self.y1)
        };

        if xstart >= xhi && xend >= xhi {
            return false;
        }
        if xstart > xlo || xend > xlo {
            return true;
        }
        c.record(ystart, yend);
        false
    }
}
