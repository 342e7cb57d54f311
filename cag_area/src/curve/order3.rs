use super::{order2::quad_t_at_y, Curve, Direction};
use crate::core::{
    math::{lerp, solve_quadratic, vec2, Vector2},
    traits::Real,
};

/// Cubic Bézier segment stored top to bottom, monotonic in y.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Order3<T = f64> {
    pub(crate) x0: T,
    pub(crate) y0: T,
    pub(crate) cx0: T,
    pub(crate) cy0: T,
    pub(crate) cx1: T,
    pub(crate) cy1: T,
    pub(crate) x1: T,
    pub(crate) y1: T,
    pub(crate) xmin: T,
    pub(crate) xmax: T,
    xcoeff0: T,
    xcoeff1: T,
    xcoeff2: T,
    xcoeff3: T,
    ycoeff0: T,
    ycoeff1: T,
    ycoeff2: T,
    ycoeff3: T,
    pub(crate) direction: Direction,
}

impl<T> Order3<T>
where
    T: Real,
{
    /// Create a new cubic from the top point `(x0, y0)` to the bottom point `(x1, y1)`.
    ///
    /// Control point y values are pulled back inside `[y0, y1]` (subdivision rounding can push them
    /// out by an ulp or so).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x0: T,
        y0: T,
        cx0: T,
        cy0: T,
        cx1: T,
        cy1: T,
        x1: T,
        y1: T,
        direction: Direction,
    ) -> Self {
        debug_assert!(y0 <= y1, "cubic must be stored top to bottom");
        let cy0 = if cy0 < y0 { y0 } else { cy0 };
        let cy1 = if cy1 > y1 { y1 } else { cy1 };
        let three = T::three();
        Self {
            x0,
            y0,
            cx0,
            cy0,
            cx1,
            cy1,
            x1,
            y1,
            xmin: num_traits::real::Real::min(
                num_traits::real::Real::min(x0, x1),
                num_traits::real::Real::min(cx0, cx1),
            ),
            xmax: num_traits::real::Real::max(
                num_traits::real::Real::max(x0, x1),
                num_traits::real::Real::max(cx0, cx1),
            ),
            xcoeff0: x0,
            xcoeff1: (cx0 - x0) * three,
            xcoeff2: (cx1 - cx0 - cx0 + x0) * three,
            xcoeff3: x1 - (cx1 - cx0) * three - x0,
            ycoeff0: y0,
            ycoeff1: (cy0 - y0) * three,
            ycoeff2: (cy1 - cy0 - cy0 + y0) * three,
            ycoeff3: y1 - (cy1 - cy0) * three - y0,
            direction,
        }
    }

    #[inline]
    pub fn controls(&self) -> (Vector2<T>, Vector2<T>) {
        (vec2(self.cx0, self.cy0), vec2(self.cx1, self.cy1))
    }

    #[inline]
    fn points(&self) -> [Vector2<T>; 4] {
        [
            vec2(self.x0, self.y0),
            vec2(self.cx0, self.cy0),
            vec2(self.cx1, self.cy1),
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

    /// Parameter at `y`, solved analytically and then polished with [Order3::refine].
    pub fn t_at_y(&self, y: T) -> T {
        if y <= self.y0 {
            return T::zero();
        }
        if y >= self.y1 {
            return T::one();
        }
        if self.ycoeff3 == T::zero() {
            return quad_t_at_y(y, self.ycoeff0, self.ycoeff1, self.ycoeff2);
        }

        // normalized cubic t^3 + a*t^2 + b*t + c = 0
        let a = self.ycoeff2 / self.ycoeff3;
        let b = self.ycoeff1 / self.ycoeff3;
        let c = (self.ycoeff0 - y) / self.ycoeff3;
        let three = T::three();
        let nine = three * three;
        let q = (a * a - three * b) / nine;
        let r = (T::two() * a * a * a - nine * a * b + T::constant(27.0) * c) / T::constant(54.0);
        let r2 = r * r;
        let q3 = q * q * q;
        let a_3 = a / three;

        let mut t = if r2 < q3 {
            let theta = (r / q3.sqrt()).acos();
            let q = -T::two() * q.sqrt();
            let two_pi = T::two() * T::pi();
            let mut t = self.refine(y, q * (theta / three).cos() - a_3);
            if t < T::zero() {
                t = self.refine(y, q * ((theta + two_pi) / three).cos() - a_3);
            }
            if t < T::zero() {
                t = self.refine(y, q * ((theta - two_pi) / three).cos() - a_3);
            }
            t
        } else {
            let neg = r < T::zero();
            let s = (r2 - q3).sqrt();
            let r = r.abs();
            let mut big_a = (r + s).cbrt();
            if !neg {
                big_a = -big_a;
            }
            let big_b = if big_a == T::zero() {
                T::zero()
            } else {
                q / big_a
            };
            self.refine(y, (big_a + big_b) - a_3)
        };

        if t < T::zero() {
            let mut t0 = T::zero();
            let mut t1 = T::one();
            loop {
                t = (t0 + t1) / T::two();
                if t == t0 || t == t1 {
                    break;
                }
                let yt = self.y_at_t(t);
                if yt < y {
                    t0 = t;
                } else if yt > y {
                    t1 = t;
                } else {
                    break;
                }
            }
        }
        t
    }

    /// Newton iteration (falling back to bisection) on a candidate root of `y_at_t(t) = target`.
    ///
    /// Returns `-1` when the candidate is too far outside of `[0, 1]` to belong to this piece.
    fn refine(&self, target: T, t: T) -> T {
        let limit = T::constant(0.1);
        if t < -limit || t > T::one() + limit {
            return -T::one();
        }
        let mut t = t;
        let mut y = self.y_at_t(t);
        let (mut t0, mut t1) = if y < target {
            (t, T::one())
        } else {
            (T::zero(), t)
        };

        let mut use_slope = true;
        while y != target {
            if use_slope {
                let slope = self.dy_at_t(t, 1);
                if slope == T::zero() {
                    use_slope = false;
                    continue;
                }
                let t2 = t + (target - y) / slope;
                if t2 == t || t2 <= t0 || t2 >= t1 {
                    use_slope = false;
                    continue;
                }
                t = t2;
            } else {
                let t2 = (t0 + t1) / T::two();
                if t2 == t0 || t2 == t1 {
                    break;
                }
                t = t2;
            }
            y = self.y_at_t(t);
            if y < target {
                t0 = t;
            } else if y > target {
                t1 = t;
            } else {
                break;
            }
        }

        if t > T::one() {
            -T::one()
        } else {
            t
        }
    }

    #[inline]
    pub fn x_at_t(&self, t: T) -> T {
        ((self.xcoeff3 * t + self.xcoeff2) * t + self.xcoeff1) * t + self.xcoeff0
    }

    #[inline]
    pub fn y_at_t(&self, t: T) -> T {
        ((self.ycoeff3 * t + self.ycoeff2) * t + self.ycoeff1) * t + self.ycoeff0
    }

    pub fn dx_at_t(&self, t: T, deriv: u32) -> T {
        poly3_derivative(
            [self.xcoeff0, self.xcoeff1, self.xcoeff2, self.xcoeff3],
            t,
            deriv,
        )
    }

    pub fn dy_at_t(&self, t: T, deriv: u32) -> T {
        poly3_derivative(
            [self.ycoeff0, self.ycoeff1, self.ycoeff2, self.ycoeff3],
            t,
            deriv,
        )
    }

    /// Smallest parameter in `(t0, t1)` where dx/dt vanishes, otherwise `t1`.
    pub fn next_vertical(&self, t0: T, t1: T) -> T {
        let mut next = t1;
        self.x_derivative_roots().for_each(|t| {
            if t > t0 && t < next {
                next = t;
            }
        });
        next
    }

    /// Visit the points at interior x extrema.
    pub(crate) fn for_each_x_extremum<F>(&self, mut visitor: F)
    where
        F: FnMut(Vector2<T>),
    {
        self.x_derivative_roots().for_each(|t| {
            if t > T::zero() && t < T::one() {
                visitor(vec2(self.x_at_t(t), self.y_at_t(t)));
            }
        });
    }

    #[inline]
    fn x_derivative_roots(&self) -> crate::core::math::QuadraticRoots<T> {
        solve_quadratic(self.xcoeff1, T::two() * self.xcoeff2, T::three() * self.xcoeff3)
    }

    pub fn sub_curve(&self, ystart: T, yend: T, direction: Direction) -> Self {
        if ystart <= self.y0 && yend >= self.y1 {
            return self.with_direction(direction);
        }
        let mut t0 = self.t_at_y(ystart);
        let mut t1 = self.t_at_y(yend);
        if t0 > t1 {
            // solving very close ystart/yend can land the roots out of order, cut out the sliver
            std::mem::swap(&mut t0, &mut t1);
        }

        let mut pts = self.points();
        if t1 < T::one() {
            pts = split_cubic(pts, t1).0;
        }
        if t0 > T::zero() {
            pts = split_cubic(pts, t0 / t1).1;
        }
        Self::new(
            pts[0].x, ystart, pts[1].x, pts[1].y, pts[2].x, pts[2].y, pts[3].x, yend, direction,
        )
    }

    #[inline]
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self { direction, ..*self }
    }
}

fn poly3_derivative<T>(c: [T; 4], t: T, deriv: u32) -> T
where
    T: Real,
{
    let (two, three) = (T::two(), T::three());
    match deriv {
        0 => ((c[3] * t + c[2]) * t + c[1]) * t + c[0],
        1 => (three * c[3] * t + two * c[2]) * t + c[1],
        2 => two * three * c[3] * t + two * c[2],
        3 => two * three * c[3],
        _ => T::zero(),
    }
}

/// Split cubic control points at `t` (de Casteljau).
pub(crate) fn split_cubic<T>(p: [Vector2<T>; 4], t: T) -> ([Vector2<T>; 4], [Vector2<T>; 4])
where
    T: Real,
{
    let l = |a: Vector2<T>, b: Vector2<T>| vec2(lerp(a.x, b.x, t), lerp(a.y, b.y, t));
    let p01 = l(p[0], p[1]);
    let p12 = l(p[1], p[2]);
    let p23 = l(p[2], p[3]);
    let p012 = l(p01, p12);
    let p123 = l(p12, p23);
    let mid = l(p012, p123);
    ([p[0], p01, p012, mid], [mid, p123, p23, p[3]])
}

/// Parameters in `(0, 1)` where the cubic turns around in y, sorted ascending.
fn horizontal_params<T>(c0: T, cp0: T, cp1: T, c1: T) -> Vec<T>
where
    T: Real,
{
    let mut params = Vec::with_capacity(2);
    if c0 <= cp0 && cp0 <= cp1 && cp1 <= c1 {
        return params;
    }
    let d1 = c1 - cp1;
    let d2 = cp1 - cp0;
    let d0 = cp0 - c0;
    solve_quadratic(d0, (d2 - d0) * T::two(), d1 - d2 - d2 + d0).for_each(|t| {
        if t > T::zero() && t < T::one() {
            params.push(t);
        }
    });
    if params.len() > 1 && params[0] > params[1] {
        params.swap(0, 1);
    }
    params
}

/// Append the y monotonic pieces of an oriented (`y0 <= y1`) cubic in path order.
pub(super) fn insert_oriented<T>(curves: &mut Vec<Curve<T>>, p: [Vector2<T>; 4], direction: Direction)
where
    T: Real,
{
    let params = horizontal_params(p[0].y, p[1].y, p[2].y, p[3].y);
    if params.is_empty() {
        add_instance(curves, p, direction);
        return;
    }

    let mut pieces = Vec::with_capacity(params.len() + 1);
    let (first, mut rest) = split_cubic(p, params[0]);
    pieces.push(first);
    if params.len() > 1 {
        // second split parameter relative to the remaining [t, 1] range
        let t = (params[1] - params[0]) / (T::one() - params[0]);
        let (second, third) = split_cubic(rest, t);
        pieces.push(second);
        rest = third;
    }
    pieces.push(rest);

    if direction == Direction::Decreasing {
        pieces.reverse();
    }
    for piece in pieces {
        add_instance(curves, piece, direction);
    }
}

/// Append a monotonic piece re-oriented top to bottom, horizontal pieces are dropped.
fn add_instance<T>(curves: &mut Vec<Curve<T>>, p: [Vector2<T>; 4], direction: Direction)
where
    T: Real,
{
    if p[0].y > p[3].y {
        curves.push(Curve::Cubic(Order3::new(
            p[3].x,
            p[3].y,
            p[2].x,
            p[2].y,
            p[1].x,
            p[1].y,
            p[0].x,
            p[0].y,
            direction.reversed(),
        )));
    } else if p[3].y > p[0].y {
        curves.push(Curve::Cubic(Order3::new(
            p[0].x, p[0].y, p[1].x, p[1].y, p[2].x, p[2].y, p[3].x, p[3].y, direction,
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    fn s_curve() -> Order3<f64> {
        Order3::new(
            0.0,
            0.0,
            10.0,
            3.0,
            -10.0,
            7.0,
            0.0,
            10.0,
            Direction::Increasing,
        )
    }

    #[test]
    fn t_at_y_inverts_y_at_t() {
        let c = s_curve();
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let y = c.y_at_t(t);
            assert!(c.t_at_y(y).fuzzy_eq(t), "t = {}", t);
        }
    }

    #[test]
    fn t_at_y_degenerate_to_quadratic() {
        // y control points evenly spaced, ycoeff3 == 0
        let c = Order3::new(0.0, 0.0, 1.0, 1.0, 2.0, 2.0, 3.0, 3.0, Direction::Increasing);
        assert!(c.t_at_y(1.5).fuzzy_eq(0.5));
    }

    #[test]
    fn next_vertical_visits_both_extrema() {
        let c = s_curve();
        let t1 = c.next_vertical(0.0, 1.0);
        assert!(t1 > 0.0 && t1 < 0.5);
        let t2 = c.next_vertical(t1, 1.0);
        assert!(t2 > 0.5 && t2 < 1.0);
        assert_eq!(c.next_vertical(t2, 1.0), 1.0);

        let mut count = 0;
        c.for_each_x_extremum(|_| count += 1);
        assert_eq!(count, 2);
    }

    #[test]
    fn sub_curve_matches_parent() {
        let c = s_curve();
        let s = c.sub_curve(2.0, 8.0, Direction::Decreasing);
        assert_eq!((s.y0, s.y1), (2.0, 8.0));
        assert_eq!(s.direction, Direction::Decreasing);
        for y in [2.5, 4.0, 5.0, 7.5] {
            assert!(s.x_at_y(y).fuzzy_eq_eps(c.x_at_y(y), 1e-6));
        }
    }

    #[test]
    fn insert_splits_loop_in_path_order() {
        // goes down, back up, then down again
        let p = [
            vec2(0.0, 0.0),
            vec2(1.0, 30.0),
            vec2(2.0, -20.0),
            vec2(3.0, 10.0),
        ];
        let mut curves = Vec::new();
        insert_oriented(&mut curves, p, Direction::Increasing);
        assert_eq!(curves.len(), 3);
        let dirs: Vec<_> = curves.iter().map(|c| c.direction()).collect();
        assert_eq!(
            dirs,
            vec![
                Direction::Increasing,
                Direction::Decreasing,
                Direction::Increasing
            ]
        );
        // consecutive pieces share end points in path order
        for w in curves.windows(2) {
            assert!(w[0].end().fuzzy_eq(w[1].start()));
        }
    }
}
