//! Y monotonic boundary curves.
//!
//! Every boundary is stored as a list of [Curve] pieces, each one monotonic in y and stored top
//! to bottom with a [Direction] flag recording which way the original path travelled. A
//! [Curve::Point] opens every subpath. The free functions in this module ([insert_move],
//! [insert_line], [insert_quad], [insert_cubic], [curves_from_path]) build such lists from path
//! segments.
mod builder;
mod compare;
mod order0;
mod order1;
mod order2;
mod order3;

pub use builder::*;
pub use order0::Order0;
pub use order1::Order1;
pub use order2::Order2;
pub use order3::Order3;

pub(crate) use order2::split_quad;
pub(crate) use compare::ordering_of;
pub(crate) use order3::split_cubic;

use crate::{
    core::{
        math::{vec2, Vector2},
        traits::Real,
    },
    crossings::Crossings,
    error::SweepError,
    path::PathCommand,
};
use static_aabb2d_index::AABB;
use std::cmp::Ordering;

/// Direction the original path travelled along a curve, relative to increasing y.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }

    /// `+1` for [Direction::Increasing], `-1` for [Direction::Decreasing].
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Increasing => 1,
            Direction::Decreasing => -1,
        }
    }
}

/// One y monotonic boundary piece.
///
/// Curves are immutable values, operations that need a different y range or direction return a
/// new curve.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Curve<T = f64> {
    Point(Order0<T>),
    Line(Order1<T>),
    Quad(Order2<T>),
    Cubic(Order3<T>),
}

impl<T> Curve<T>
where
    T: Real,
{
    /// Polynomial order of the curve (0 for a point up to 3 for a cubic).
    #[inline]
    pub fn order(&self) -> u8 {
        match self {
            Curve::Point(_) => 0,
            Curve::Line(_) => 1,
            Curve::Quad(_) => 2,
            Curve::Cubic(_) => 3,
        }
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        match self {
            Curve::Point(_) => Direction::Increasing,
            Curve::Line(c) => c.direction,
            Curve::Quad(c) => c.direction,
            Curve::Cubic(c) => c.direction,
        }
    }

    #[inline]
    pub fn x_top(&self) -> T {
        match self {
            Curve::Point(c) => c.x,
            Curve::Line(c) => c.x0,
            Curve::Quad(c) => c.x0,
            Curve::Cubic(c) => c.x0,
        }
    }

    #[inline]
    pub fn y_top(&self) -> T {
        match self {
            Curve::Point(c) => c.y,
            Curve::Line(c) => c.y0,
            Curve::Quad(c) => c.y0,
            Curve::Cubic(c) => c.y0,
        }
    }

    #[inline]
    pub fn x_bot(&self) -> T {
        match self {
            Curve::Point(c) => c.x,
            Curve::Line(c) => c.x1,
            Curve::Quad(c) => c.x1,
            Curve::Cubic(c) => c.x1,
        }
    }

    #[inline]
    pub fn y_bot(&self) -> T {
        match self {
            Curve::Point(c) => c.y,
            Curve::Line(c) => c.y1,
            Curve::Quad(c) => c.y1,
            Curve::Cubic(c) => c.y1,
        }
    }

    /// Minimum x of the curve's hull (not necessarily tight for quads and cubics).
    #[inline]
    pub fn x_min(&self) -> T {
        match self {
            Curve::Point(c) => c.x,
            Curve::Line(c) => c.xmin,
            Curve::Quad(c) => c.xmin,
            Curve::Cubic(c) => c.xmin,
        }
    }

    /// Maximum x of the curve's hull (not necessarily tight for quads and cubics).
    #[inline]
    pub fn x_max(&self) -> T {
        match self {
            Curve::Point(c) => c.x,
            Curve::Line(c) => c.xmax,
            Curve::Quad(c) => c.xmax,
            Curve::Cubic(c) => c.xmax,
        }
    }

    /// Start x in path order.
    #[inline]
    pub fn x0(&self) -> T {
        match self.direction() {
            Direction::Increasing => self.x_top(),
            Direction::Decreasing => self.x_bot(),
        }
    }

    /// Start y in path order.
    #[inline]
    pub fn y0(&self) -> T {
        match self.direction() {
            Direction::Increasing => self.y_top(),
            Direction::Decreasing => self.y_bot(),
        }
    }

    /// End x in path order.
    #[inline]
    pub fn x1(&self) -> T {
        match self.direction() {
            Direction::Increasing => self.x_bot(),
            Direction::Decreasing => self.x_top(),
        }
    }

    /// End y in path order.
    #[inline]
    pub fn y1(&self) -> T {
        match self.direction() {
            Direction::Increasing => self.y_bot(),
            Direction::Decreasing => self.y_top(),
        }
    }

    /// Start point in path order.
    #[inline]
    pub fn start(&self) -> Vector2<T> {
        vec2(self.x0(), self.y0())
    }

    /// End point in path order.
    #[inline]
    pub fn end(&self) -> Vector2<T> {
        vec2(self.x1(), self.y1())
    }

    /// X coordinate where the curve reaches `y`, clamped to the end points outside of the curve's
    /// y range.
    pub fn x_at_y(&self, y: T) -> T {
        match self {
            Curve::Point(c) => c.x,
            Curve::Line(c) => c.x_at_y(y),
            Curve::Quad(c) => c.x_at_y(y),
            Curve::Cubic(c) => c.x_at_y(y),
        }
    }

    /// Parameter where the curve reaches `y` (the inverse of [Curve::y_at_t]).
    pub fn t_at_y(&self, y: T) -> T {
        match self {
            Curve::Point(_) => T::zero(),
            Curve::Line(c) => c.t_at_y(y),
            Curve::Quad(c) => c.t_at_y(y),
            Curve::Cubic(c) => c.t_at_y(y),
        }
    }

    pub fn x_at_t(&self, t: T) -> T {
        match self {
            Curve::Point(c) => c.x,
            Curve::Line(c) => c.x_at_t(t),
            Curve::Quad(c) => c.x_at_t(t),
            Curve::Cubic(c) => c.x_at_t(t),
        }
    }

    pub fn y_at_t(&self, t: T) -> T {
        match self {
            Curve::Point(c) => c.y,
            Curve::Line(c) => c.y_at_t(t),
            Curve::Quad(c) => c.y_at_t(t),
            Curve::Cubic(c) => c.y_at_t(t),
        }
    }

    /// Point at parameter `t` (in storage orientation, `t = 0` is the top).
    #[inline]
    pub fn point_at(&self, t: T) -> Vector2<T> {
        vec2(self.x_at_t(t), self.y_at_t(t))
    }

    /// `deriv`-th derivative of x with respect to `t`, `deriv = 0` is [Curve::x_at_t].
    pub fn dx_at_t(&self, t: T, deriv: u32) -> T {
        match self {
            Curve::Point(c) => {
                if deriv == 0 {
                    c.x
                } else {
                    T::zero()
                }
            }
            Curve::Line(c) => c.dx_at_t(t, deriv),
            Curve::Quad(c) => c.dx_at_t(t, deriv),
            Curve::Cubic(c) => c.dx_at_t(t, deriv),
        }
    }

    /// `deriv`-th derivative of y with respect to `t`, `deriv = 0` is [Curve::y_at_t].
    pub fn dy_at_t(&self, t: T, deriv: u32) -> T {
        match self {
            Curve::Point(c) => {
                if deriv == 0 {
                    c.y
                } else {
                    T::zero()
                }
            }
            Curve::Line(c) => c.dy_at_t(t, deriv),
            Curve::Quad(c) => c.dy_at_t(t, deriv),
            Curve::Cubic(c) => c.dy_at_t(t, deriv),
        }
    }

    /// Both derivative components at `t` as a vector.
    #[inline]
    pub fn d_point_at(&self, t: T, deriv: u32) -> Vector2<T> {
        vec2(self.dx_at_t(t, deriv), self.dy_at_t(t, deriv))
    }

    /// Next parameter in `(t0, t1)` where the tangent is vertical (x turns around), or `t1` if
    /// there is none. Between two such parameters x is monotonic in `t`.
    pub fn next_vertical(&self, t0: T, t1: T) -> T {
        match self {
            Curve::Point(_) | Curve::Line(_) => t1,
            Curve::Quad(c) => c.next_vertical(t0, t1),
            Curve::Cubic(c) => c.next_vertical(t0, t1),
        }
    }

    /// Contribution to a ray crossing count for the rightward horizontal ray from `(x, y)`.
    ///
    /// Returns the direction sign when the ray crosses the curve within `[y_top, y_bot)`,
    /// otherwise 0. Points never contribute.
    pub fn crossings_at(&self, x: T, y: T) -> i32 {
        if let Curve::Point(_) = self {
            return 0;
        }
        if y >= self.y_top() && y < self.y_bot() {
            let xmax = self.x_max();
            if x < xmax && (x < self.x_min() || x < self.x_at_y(y)) {
                return self.direction().sign();
            }
        }
        0
    }

    /// Piece of the curve between `ystart` and `yend` oriented by `direction`.
    ///
    /// `[ystart, yend]` must lie within the curve's y range.
    pub fn sub_curve(&self, ystart: T, yend: T, direction: Direction) -> Self {
        match self {
            Curve::Point(_) => *self,
            Curve::Line(c) => Curve::Line(c.sub_curve(ystart, yend, direction)),
            Curve::Quad(c) => Curve::Quad(c.sub_curve(ystart, yend, direction)),
            Curve::Cubic(c) => Curve::Cubic(c.sub_curve(ystart, yend, direction)),
        }
    }

    pub fn with_direction(&self, direction: Direction) -> Self {
        match self {
            Curve::Point(_) => *self,
            Curve::Line(c) => Curve::Line(c.with_direction(direction)),
            Curve::Quad(c) => Curve::Quad(c.with_direction(direction)),
            Curve::Cubic(c) => Curve::Cubic(c.with_direction(direction)),
        }
    }

    /// Same geometry travelled the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        self.with_direction(self.direction().reversed())
    }

    /// Relative x order of `self` and `other` over the y range `[yrange[0], yrange[1]]`.
    ///
    /// `yrange[1]` is shrunk (never grown) to the largest y for which the returned ordering holds
    /// across the whole range. `Ordering::Equal` means the curves coincide across the returned
    /// range. Lines are compared in closed form, everything else goes through the general
    /// subdivision search.
    pub fn compare(&self, other: &Self, yrange: &mut [T; 2]) -> Result<Ordering, SweepError> {
        match (self, other) {
            (Curve::Line(a), Curve::Line(b)) => a.compare(b, yrange),
            _ => compare::compare_curves(self, other, yrange),
        }
    }

    /// Grow `aabb` to include the curve (tight, includes interior x extrema).
    pub fn enlarge(&self, aabb: &mut AABB<T>) {
        match self {
            Curve::Point(c) => add_point(aabb, c.point()),
            Curve::Line(c) => {
                add_point(aabb, vec2(c.x0, c.y0));
                add_point(aabb, vec2(c.x1, c.y1));
            }
            Curve::Quad(c) => {
                add_point(aabb, vec2(c.x0, c.y0));
                if let Some(p) = c.x_extremum() {
                    add_point(aabb, p);
                }
                add_point(aabb, vec2(c.x1, c.y1));
            }
            Curve::Cubic(c) => {
                add_point(aabb, vec2(c.x0, c.y0));
                c.for_each_x_extremum(|p| add_point(aabb, p));
                add_point(aabb, vec2(c.x1, c.y1));
            }
        }
    }

    /// Accumulate the curve into a rectangle crossing query.
    ///
    /// Returns `true` if the curve passes through the interior of the query rectangle (the
    /// rectangle can be neither fully inside nor fully outside), in that case `crossings` is left
    /// partially accumulated and should be discarded.
    pub fn accumulate_crossings(&self, crossings: &mut Crossings<T>) -> bool {
        match self {
            Curve::Point(c) => c.strictly_inside(
                crossings.x_lo(),
                crossings.y_lo(),
                crossings.x_hi(),
                crossings.y_hi(),
            ),
            Curve::Line(c) => c.accumulate_crossings(crossings),
            Curve::Quad(_) | Curve::Cubic(_) => self.accumulate_parametric_crossings(crossings),
        }
    }

    fn accumulate_parametric_crossings(&self, crossings: &mut Crossings<T>) -> bool {
        let (xlo, ylo, xhi, yhi) = (
            crossings.x_lo(),
            crossings.y_lo(),
            crossings.x_hi(),
            crossings.y_hi(),
        );
        if self.x_min() >= xhi {
            return false;
        }
        let y0 = self.y_top();
        let y1 = self.y_bot();

        let (mut tstart, ystart) = if y0 < ylo {
            if y1 <= ylo {
                return false;
            }
            (self.t_at_y(ylo), ylo)
        } else {
            if y0 >= yhi {
                return false;
            }
            (T::zero(), y0)
        };
        let (tend, yend) = if y1 > yhi {
            (self.t_at_y(yhi), yhi)
        } else {
            (T::one(), y1)
        };

        // walk x monotonic pieces, the curve passes through the rectangle if it touches both
        // sides or lands strictly between them
        let mut hit_lo = false;
        let mut hit_hi = false;
        loop {
            let x = self.x_at_t(tstart);
            if x < xhi {
                if hit_hi || x > xlo {
                    return true;
                }
                hit_lo = true;
            } else {
                if hit_lo {
                    return true;
                }
                hit_hi = true;
            }
            if tstart >= tend {
                break;
            }
            tstart = self.next_vertical(tstart, tend);
        }

        if hit_lo {
            crossings.record(ystart, yend);
        }
        false
    }

    /// Path segment ending at this curve's path order end point.
    ///
    /// Points produce [PathCommand::MoveTo], all other orders assume the current point is already
    /// at [Curve::start].
    pub fn segment(&self) -> PathCommand<T> {
        match self {
            Curve::Point(c) => PathCommand::MoveTo(c.point()),
            Curve::Line(c) => match c.direction {
                Direction::Increasing => PathCommand::LineTo(vec2(c.x1, c.y1)),
                Direction::Decreasing => PathCommand::LineTo(vec2(c.x0, c.y0)),
            },
            Curve::Quad(c) => match c.direction {
                Direction::Increasing => PathCommand::QuadTo(c.control(), vec2(c.x1, c.y1)),
                Direction::Decreasing => PathCommand::QuadTo(c.control(), vec2(c.x0, c.y0)),
            },
            Curve::Cubic(c) => {
                let (c0, c1) = c.controls();
                match c.direction {
                    Direction::Increasing => PathCommand::CubicTo(c0, c1, vec2(c.x1, c.y1)),
                    Direction::Decreasing => PathCommand::CubicTo(c1, c0, vec2(c.x0, c.y0)),
                }
            }
        }
    }
}

#[inline]
fn add_point<T: Real>(aabb: &mut AABB<T>, p: Vector2<T>) {
    if p.x < aabb.min_x {
        aabb.min_x = p.x;
    }
    if p.x > aabb.max_x {
        aabb.max_x = p.x;
    }
    if p.y < aabb.min_y {
        aabb.min_y = p.y;
    }
    if p.y > aabb.max_y {
        aabb.max_y = p.y;
    }
}
