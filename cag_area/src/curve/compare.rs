//! General x ordering of two curves over a shared y range.
//!
//! The sweep depends on every reported ordering holding across the whole returned range, a wrong
//! answer produces crossing output contours. The search works in three stages:
//!
//! 1. quick reject on the x extents,
//! 2. a coincidence probe when both curves start at (nearly) the same x, stepping down with an
//!    exponentially growing bump for as long as the curves stay together,
//! 3. stepping both curves through their x monotonic pieces (split at vertical tangents) and
//!    searching each pair of pieces for an intersect by recursive bisection of their bounding
//!    boxes, which bounds the range at the first intersect found.
use super::Curve;
use crate::{core::traits::Real, error::SweepError};
use std::cmp::Ordering;

/// Parameter span below which [find_intersect] stops bisecting and intersects chords.
const T_MIN: f64 = 1e-3;

/// Relative tolerance for treating two x values as the same during the coincidence probe.
const FAIRLY_CLOSE_EPS: f64 = 1e-10;

#[inline]
pub(crate) fn ordering_of<T>(x1: T, x2: T) -> Ordering
where
    T: Real,
{
    if x1 < x2 {
        Ordering::Less
    } else if x1 > x2 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[inline]
fn fairly_close<T>(v1: T, v2: T) -> bool
where
    T: Real,
{
    let scale = num_traits::real::Real::max(v1.abs(), v2.abs());
    v1 == v2 || (v1 - v2).abs() < scale * T::constant(FAIRLY_CLOSE_EPS)
}

/// Curve evaluated at a parameter.
#[derive(Debug, Copy, Clone)]
struct CurvePoint<T> {
    t: T,
    x: T,
    y: T,
}

impl<T> CurvePoint<T>
where
    T: Real,
{
    #[inline]
    fn eval(curve: &Curve<T>, t: T) -> Self {
        Self {
            t,
            x: curve.x_at_t(t),
            y: curve.y_at_t(t),
        }
    }
}

/// Parameter span of a curve with both ends evaluated.
#[derive(Debug, Copy, Clone)]
struct Span<T> {
    start: CurvePoint<T>,
    end: CurvePoint<T>,
}

impl<T> Span<T>
where
    T: Real,
{
    #[inline]
    fn len(&self) -> T {
        self.end.t - self.start.t
    }

    /// Split at the parameter midpoint, fails if the midpoint is not distinct from the ends.
    fn bisect(&self, curve: &Curve<T>) -> Result<(Self, Self), SweepError> {
        let t = (self.start.t + self.end.t) / T::two();
        if t == self.start.t || t == self.end.t {
            return Err(SweepError::NoProgress);
        }
        let mid = CurvePoint::eval(curve, t);
        Ok((
            Span {
                start: self.start,
                end: mid,
            },
            Span {
                start: mid,
                end: self.end,
            },
        ))
    }

    #[inline]
    fn x_bounds(&self) -> (T, T) {
        if self.start.x < self.end.x {
            (self.start.x, self.end.x)
        } else {
            (self.end.x, self.start.x)
        }
    }
}

/// Parameter at `y` pushed down by bisection if rounding left it above `ytop`.
fn param_at_or_below<T>(curve: &Curve<T>, y: T, ytop: T) -> T
where
    T: Real,
{
    let t = curve.t_at_y(y);
    if curve.y_at_t(t) < ytop {
        refine_t_for_y(curve, t, ytop)
    } else {
        t
    }
}

/// Bisect between `t0` and 1 for the parameter where the curve reaches `y`.
fn refine_t_for_y<T>(curve: &Curve<T>, t0: T, y: T) -> T
where
    T: Real,
{
    let mut t0 = t0;
    let mut t1 = T::one();
    loop {
        let th = (t0 + t1) / T::two();
        if th == t0 || th == t1 {
            return t1;
        }
        let yh = curve.y_at_t(th);
        if yh < y {
            t0 = th;
        } else if yh > y {
            t1 = th;
        } else {
            return t1;
        }
    }
}

pub(crate) fn compare_curves<T>(
    this: &Curve<T>,
    that: &Curve<T>,
    yrange: &mut [T; 2],
) -> Result<Ordering, SweepError>
where
    T: Real,
{
    let y0 = yrange[0];
    let y1 = num_traits::real::Real::min(
        num_traits::real::Real::min(yrange[1], this.y_bot()),
        that.y_bot(),
    );
    if y1 <= y0 {
        return Err(SweepError::back_step(y0, y1));
    }
    yrange[1] = y1;

    if this.x_max() <= that.x_min() {
        return Ok(if this.x_min() == that.x_max() {
            Ordering::Equal
        } else {
            Ordering::Less
        });
    }
    if this.x_min() >= that.x_max() {
        return Ok(Ordering::Greater);
    }

    // s parameterizes `this`, t parameterizes `that`
    let s1 = param_at_or_below(this, y1, y0);
    let t1 = param_at_or_below(that, y1, y0);
    let mut sp = CurvePoint::eval(this, param_at_or_below(this, y0, y0));
    let mut tp = CurvePoint::eval(that, param_at_or_below(that, y0, y0));

    // smallest meaningful y step at this magnitude (about 1e-14 relative for f64)
    let scale = num_traits::real::Real::max(y0.abs(), y1.abs());
    let ymin = num_traits::real::Real::max(scale * T::epsilon() * T::constant(45.0), T::tiny());

    if fairly_close(sp.x, tp.x) {
        let mut bump = ymin;
        let maxbump =
            num_traits::real::Real::min(ymin * T::constant(1e13), (y1 - y0) * T::constant(0.1));
        let mut y = y0 + bump;
        while y <= y1 {
            if fairly_close(this.x_at_y(y), that.x_at_y(y)) {
                bump = bump * T::two();
                if bump > maxbump {
                    bump = maxbump;
                }
            } else {
                // back off and binary search for where the curves separate
                y = y - bump;
                loop {
                    bump = bump / T::two();
                    let newy = y + bump;
                    if newy <= y {
                        break;
                    }
                    if fairly_close(this.x_at_y(newy), that.x_at_y(newy)) {
                        y = newy;
                    }
                }
                break;
            }
            let next_y = y + bump;
            if next_y <= y {
                break;
            }
            y = next_y;
        }
        if y > y0 {
            if y < y1 {
                yrange[1] = y;
            }
            return Ok(Ordering::Equal);
        }
    }

    while sp.t < s1 && tp.t < t1 {
        let sh = CurvePoint::eval(this, this.next_vertical(sp.t, s1));
        let th = CurvePoint::eval(that, that.next_vertical(tp.t, t1));
        let s_span = Span { start: sp, end: sh };
        let t_span = Span { start: tp, end: th };
        if find_intersect(this, that, yrange, s_span, t_span, ymin)? {
            break;
        }
        if sh.y < th.y {
            if sh.y > y0 {
                if sh.y < yrange[1] {
                    yrange[1] = sh.y;
                }
                break;
            }
            sp = sh;
        } else {
            if th.y > y0 {
                if th.y < yrange[1] {
                    yrange[1] = th.y;
                }
                break;
            }
            tp = th;
        }
    }

    let ymid = (yrange[0] + yrange[1]) / T::two();
    Ok(ordering_of(this.x_at_y(ymid), that.x_at_y(ymid)))
}

/// Search two x monotonic spans for an intersect inside `yrange`, shrinking `yrange[1]` to the
/// first one found.
fn find_intersect<T>(
    this: &Curve<T>,
    that: &Curve<T>,
    yrange: &mut [T; 2],
    s: Span<T>,
    t: Span<T>,
    ymin: T,
) -> Result<bool, SweepError>
where
    T: Real,
{
    if s.start.y > t.end.y || t.start.y > s.end.y {
        return Ok(false);
    }
    let (sx_lo, sx_hi) = s.x_bounds();
    let (tx_lo, tx_hi) = t.x_bounds();
    if sx_lo > tx_hi || sx_hi < tx_lo {
        return Ok(false);
    }

    let t_min = T::constant(T_MIN);
    if s.len() > t_min {
        let (s_lo, s_hi) = s.bisect(this)?;
        let ys = s_lo.end.y;
        if t.len() > t_min {
            let (t_lo, t_hi) = t.bisect(that)?;
            let yt = t_lo.end.y;
            if ys >= t.start.y
                && yt >= s.start.y
                && find_intersect(this, that, yrange, s_lo, t_lo, ymin)?
            {
                return Ok(true);
            }
            if ys >= yt && find_intersect(this, that, yrange, s_lo, t_hi, ymin)? {
                return Ok(true);
            }
            if yt >= ys && find_intersect(this, that, yrange, s_hi, t_lo, ymin)? {
                return Ok(true);
            }
            if s.end.y >= yt
                && t.end.y >= ys
                && find_intersect(this, that, yrange, s_hi, t_hi, ymin)?
            {
                return Ok(true);
            }
        } else {
            if ys >= t.start.y && find_intersect(this, that, yrange, s_lo, t, ymin)? {
                return Ok(true);
            }
            if t.end.y >= ys && find_intersect(this, that, yrange, s_hi, t, ymin)? {
                return Ok(true);
            }
        }
    } else if t.len() > t_min {
        let (t_lo, t_hi) = t.bisect(that)?;
        let yt = t_lo.end.y;
        if yt >= s.start.y && find_intersect(this, that, yrange, s, t_lo, ymin)? {
            return Ok(true);
        }
        if s.end.y >= yt && find_intersect(this, that, yrange, s, t_hi, ymin)? {
            return Ok(true);
        }
    } else {
        // spans are small enough to treat as chords
        let xlk = s.end.x - s.start.x;
        let ylk = s.end.y - s.start.y;
        let xnm = t.end.x - t.start.x;
        let ynm = t.end.y - t.start.y;
        let xmk = t.start.x - s.start.x;
        let ymk = t.start.y - s.start.y;
        let det = xnm * ylk - ynm * xlk;
        if det != T::zero() {
            let detinv = T::one() / det;
            let sp = (xnm * ymk - ynm * xmk) * detinv;
            let tp = (xlk * ymk - ylk * xmk) * detinv;
            let unit = |v: T| v >= T::zero() && v <= T::one();
            if unit(sp) && unit(tp) {
                let sp = s.start.t + sp * s.len();
                let tp = t.start.t + tp * t.len();
                let y = (this.y_at_t(sp) + that.y_at_t(tp)) / T::two();
                // a crossing within rounding of the top is the top itself
                if y <= yrange[1] && y - yrange[0] > ymin {
                    yrange[1] = y;
                    return Ok(true);
                }
            }
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Direction, Order1, Order2, Order3};

    fn quad(x0: f64, y0: f64, cx: f64, cy: f64, x1: f64, y1: f64) -> Curve<f64> {
        Curve::Quad(Order2::new(x0, y0, cx, cy, x1, y1, Direction::Increasing))
    }

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Curve<f64> {
        Curve::Line(Order1::new(x0, y0, x1, y1, Direction::Increasing))
    }

    #[test]
    fn disjoint_x_extents() {
        let a = quad(0.0, 0.0, 1.0, 5.0, 0.0, 10.0);
        let b = line(5.0, 0.0, 6.0, 10.0);
        let mut yrange = [0.0, 10.0];
        assert_eq!(compare_curves(&a, &b, &mut yrange), Ok(Ordering::Less));
        assert_eq!(yrange, [0.0, 10.0]);
        let mut yrange = [0.0, 10.0];
        assert_eq!(compare_curves(&b, &a, &mut yrange), Ok(Ordering::Greater));
    }

    #[test]
    fn identical_curves_are_equal_over_full_range() {
        let a = quad(0.0, 0.0, 10.0, 5.0, 0.0, 10.0);
        let b = quad(0.0, 0.0, 10.0, 5.0, 0.0, 10.0);
        let mut yrange = [0.0, 10.0];
        assert_eq!(compare_curves(&a, &b, &mut yrange), Ok(Ordering::Equal));
        assert!(yrange[1] > 9.0);
    }

    #[test]
    fn crossing_curves_bound_range_at_intersect() {
        // bulge to the right crossed by a vertical line at x = 2
        let a = quad(0.0, 0.0, 10.0, 5.0, 0.0, 10.0);
        let b = line(2.0, 0.0, 2.0, 10.0);
        let mut yrange = [0.0, 10.0];
        let order = compare_curves(&a, &b, &mut yrange).unwrap();
        assert_eq!(order, Ordering::Less);
        // curve reaches x = 2 where 20t(1-t) = 2, y = 10t
        let expected = 10.0 * (1.0 - 0.6f64.sqrt()) / 2.0;
        assert!(yrange[1] <= expected + 1e-3);
        assert!(yrange[1] > 0.0);

        // below the intersect the curve is to the right up to its x extremum
        let mut yrange = [expected + 0.5, 10.0];
        let order = compare_curves(&a, &b, &mut yrange).unwrap();
        assert_eq!(order, Ordering::Greater);
        assert_eq!(yrange[1], 5.0);
    }

    #[test]
    fn ordering_holds_across_returned_range() {
        let a = Curve::Cubic(Order3::new(
            0.0,
            0.0,
            8.0,
            3.0,
            -8.0,
            7.0,
            0.0,
            10.0,
            Direction::Increasing,
        ));
        let b = line(-1.0, 0.0, 1.0, 10.0);
        let mut y = 0.0;
        while y < 10.0 {
            let mut yrange = [y, 10.0];
            let order = compare_curves(&a, &b, &mut yrange).unwrap();
            assert!(yrange[1] > y);
            for i in 1..10 {
                let yi = y + (yrange[1] - y) * i as f64 / 10.0;
                let (xa, xb) = (a.x_at_y(yi), b.x_at_y(yi));
                let found = ordering_of(xa, xb);
                // only allowed to disagree within rounding of a true crossing
                assert!(found == order || (xa - xb).abs() < 1e-6, "y = {}", yi);
            }
            y = yrange[1];
        }
    }
}
