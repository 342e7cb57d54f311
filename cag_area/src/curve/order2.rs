use super::{Curve, Direction};
use crate::core::{
    math::{lerp, vec2, Vector2},
    traits::Real,
};

/// Quadratic Bézier segment stored top to bottom, monotonic in y.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Order2<T = f64> {
    pub(crate) x0: T,
    pub(crate) y0: T,
    pub(crate) cx0: T,
    pub(crate) cy0: T,
    pub(crate) x1: T,
    pub(crate) y1: T,
    pub(crate) xmin: T,
    pub(crate) xmax: T,
    xcoeff0: T,
    xcoeff1: T,
    xcoeff2: T,
    ycoeff0: T,
    ycoeff1: T,
    ycoeff2: T,
    pub(crate) direction: Direction,
}

impl<T> Order2<T>
where
    T: Real,
{
    /// Create a new quadratic from the top point `(x0, y0)` to the bottom point `(x1, y1)`.
    ///
    /// The control point y is clamped into `[y0, y1]`, subdivision can leave it a bit outside of
    /// the range due to rounding.
    pub fn new(x0: T, y0: T, cx0: T, cy0: T, x1: T, y1: T, direction: Direction) -> Self {
        debug_assert!(y0 <= y1, "quad must be stored top to bottom");
        let cy0 = if cy0 < y0 {
            y0
        } else if cy0 > y1 {
            y1
        } else {
            cy0
        };
        let xmin = num_traits::real::Real::min(num_traits::real::Real::min(x0, x1), cx0);
        let xmax = num_traits::real::Real::max(num_traits::real::Real::max(x0, x1), cx0);
        Self {
            x0,
            y0,
            cx0,
            cy0,
            x1,
            y1,
            xmin,
            xmax,
            xcoeff0: x0,
            xcoeff1: cx0 + cx0 - x0 - x0,
            xcoeff2: x0 - cx0 - cx0 + x1,
            ycoeff0: y0,
            ycoeff1: cy0 + cy0 - y0 - y0,
            ycoeff2: y0 - cy0 - cy0 + y1,
            direction,
        }
    }

    #[inline]
    pub fn control(&self) -> Vector2<T> {
        vec2(self.cx0, self.cy0)
    }

    #[inline]
    fn points(&self) -> [Vector2<T>; 3] {
        [
            vec2(self.x0, self.y0),
            vec2(self.cx0, self.cy0),
            vec2(self.x1, self.y1),
        ]
    }

    pub fn x_at_y(&self, y: T) -> T {
        if y <= self.y0 {
            return self.x0;
        }
        if y >= self.y1 {
            return self.x1;
        }
        self.x_at_t(self.t_at_y(y))
    }

    pub fn t_at_y(&self, y: T) -> T {
        if y <= self.y0 {
            return T::zero();
        }
        if y >= self.y1 {
            return T::one();
        }
        quad_t_at_y(y, self.ycoeff0, self.ycoeff1, self.ycoeff2)
    }

    #[inline]
    pub fn x_at_t(&self, t: T) -> T {
        (self.xcoeff2 * t + self.xcoeff1) * t + self.xcoeff0
    }

    #[inline]
    pub fn y_at_t(&self, t: T) -> T {
        (self.ycoeff2 * t + self.ycoeff1) * t + self.ycoeff0
    }

    pub fn dx_at_t(&self, t: T, deriv: u32) -> T {
        match deriv {
            0 => self.x_at_t(t),
            1 => T::two() * self.xcoeff2 * t + self.xcoeff1,
            2 => T::two() * self.xcoeff2,
            _ => T::zero(),
        }
    }

    pub fn dy_at_t(&self, t: T, deriv: u32) -> T {
        match deriv {
            0 => self.y_at_t(t),
            1 => T::two() * self.ycoeff2 * t + self.ycoeff1,
            2 => T::two() * self.ycoeff2,
            _ => T::zero(),
        }
    }

    /// Parameter of the x extremum when it lies strictly inside `(t0, t1)`, otherwise `t1`.
    pub fn next_vertical(&self, t0: T, t1: T) -> T {
        let t = -self.xcoeff1 / (T::two() * self.xcoeff2);
        if t > t0 && t < t1 {
            t
        } else {
            t1
        }
    }

    /// Point at the interior x extremum if there is one.
    pub(crate) fn x_extremum(&self) -> Option<Vector2<T>> {
        let t = -self.xcoeff1 / (T::two() * self.xcoeff2);
        if t > T::zero() && t < T::one() {
            Some(vec2(self.x_at_t(t), self.y_at_t(t)))
        } else {
            None
        }
    }

    pub fn sub_curve(&self, ystart: T, yend: T, direction: Direction) -> Self {
        let t0 = if ystart <= self.y0 {
            if yend >= self.y1 {
                return self.with_direction(direction);
            }
            T::zero()
        } else {
            quad_t_at_y(ystart, self.ycoeff0, self.ycoeff1, self.ycoeff2)
        };
        let t1 = if yend >= self.y1 {
            T::one()
        } else {
            quad_t_at_y(yend, self.ycoeff0, self.ycoeff1, self.ycoeff2)
        };

        let mut pts = self.points();
        if t1 < T::one() {
            pts = split_quad(pts, t1).0;
        }
        if t0 > T::zero() {
            pts = split_quad(pts, t0 / t1).1;
        }
        Self::new(
            pts[0].x, ystart, pts[1].x, pts[1].y, pts[2].x, yend, direction,
        )
    }

    #[inline]
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self { direction, ..*self }
    }
}

/// Parameter at `y` for the y polynomial `c0 + c1*t + c2*t^2`, `y` must already be within the
/// curve's y range.
///
/// Rounding in the coefficients can leave the polynomial slightly non-monotonic so that no root
/// lands in `[0, 1]`, in that case the nearer end is returned.
pub(super) fn quad_t_at_y<T>(y: T, c0: T, c1: T, c2: T) -> T
where
    T: Real,
{
    let c0 = c0 - y;
    if c2 == T::zero() {
        let root = -c0 / c1;
        if root >= T::zero() && root <= T::one() {
            return root;
        }
    } else {
        let disc = c1 * c1 - T::four() * c2 * c0;
        if disc >= T::zero() {
            let mut d = disc.sqrt();
            if c1 < T::zero() {
                d = -d;
            }
            let q = (c1 + d) / -T::two();
            let root = q / c2;
            if root >= T::zero() && root <= T::one() {
                return root;
            }
            if q != T::zero() {
                let root = c0 / q;
                if root >= T::zero() && root <= T::one() {
                    return root;
                }
            }
        }
    }

    let rel_y0 = c0;
    let rel_y1 = c0 + c1 + c2;
    if T::zero() < (rel_y0 + rel_y1) / T::two() {
        T::zero()
    } else {
        T::one()
    }
}

/// Split quadratic control points at `t` (de Casteljau).
pub(crate) fn split_quad<T>(p: [Vector2<T>; 3], t: T) -> ([Vector2<T>; 3], [Vector2<T>; 3])
where
    T: Real,
{
    let p01 = vec2(lerp(p[0].x, p[1].x, t), lerp(p[0].y, p[1].y, t));
    let p12 = vec2(lerp(p[1].x, p[2].x, t), lerp(p[1].y, p[2].y, t));
    let mid = vec2(lerp(p01.x, p12.x, t), lerp(p01.y, p12.y, t));
    ([p[0], p01, mid], [mid, p12, p[2]])
}

/// Parameter where the quadratic turns around in y, if strictly inside `(0, 1)`.
///
/// `c0 <= c1` must hold (the segment is already oriented top to bottom).
fn horizontal_param<T>(c0: T, cp: T, c1: T) -> Option<T>
where
    T: Real,
{
    if c0 <= cp && cp <= c1 {
        return None;
    }
    let c0 = c0 - cp;
    let c1 = c1 - cp;
    let denom = c0 + c1;
    if denom == T::zero() {
        return None;
    }
    let t = c0 / denom;
    if t <= T::zero() || t >= T::one() {
        return None;
    }
    Some(t)
}

/// Append the y monotonic pieces of an oriented (`y0 <= y1`) quadratic in path order.
pub(super) fn insert_oriented<T>(curves: &mut Vec<Curve<T>>, p: [Vector2<T>; 3], direction: Direction)
where
    T: Real,
{
    let Some(t) = horizontal_param(p[0].y, p[1].y, p[2].y) else {
        add_instance(curves, p, direction);
        return;
    };

    let (first, second) = split_quad(p, t);
    if direction == Direction::Increasing {
        add_instance(curves, first, direction);
        add_instance(curves, second, direction);
    } else {
        add_instance(curves, second, direction);
        add_instance(curves, first, direction);
    }
}

/// Append a monotonic piece re-oriented top to bottom, horizontal pieces are dropped.
fn add_instance<T>(curves: &mut Vec<Curve<T>>, p: [Vector2<T>; 3], direction: Direction)
where
    T: Real,
{
    if p[0].y > p[2].y {
        curves.push(Curve::Quad(Order2::new(
            p[2].x,
            p[2].y,
            p[1].x,
            p[1].y,
            p[0].x,
            p[0].y,
            direction.reversed(),
        )));
    } else if p[2].y > p[0].y {
        curves.push(Curve::Quad(Order2::new(
            p[0].x, p[0].y, p[1].x, p[1].y, p[2].x, p[2].y, direction,
        )));
    }
}
