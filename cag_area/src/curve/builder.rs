use super::{order2, order3, Curve, Direction, Order0, Order1};
use crate::{
    core::{
        math::{vec2, Vector2},
        traits::Real,
    },
    error::SweepError,
    path::{PathCommand, WindingRule},
    sweep::{calculate, Operator},
};

/// Append the point curve that opens a subpath.
pub fn insert_move<T>(curves: &mut Vec<Curve<T>>, x: T, y: T)
where
    T: Real,
{
    curves.push(Curve::Point(Order0::new(x, y)));
}

/// Append the line from `(x0, y0)` to `(x1, y1)`. Horizontal and zero length lines are dropped.
pub fn insert_line<T>(curves: &mut Vec<Curve<T>>, x0: T, y0: T, x1: T, y1: T)
where
    T: Real,
{
    if y0 < y1 {
        curves.push(Curve::Line(Order1::new(
            x0,
            y0,
            x1,
            y1,
            Direction::Increasing,
        )));
    } else if y0 > y1 {
        curves.push(Curve::Line(Order1::new(
            x1,
            y1,
            x0,
            y0,
            Direction::Decreasing,
        )));
    }
}

/// Append the quadratic from `start` through control point `ctrl` to `end`.
///
/// The curve is split where it turns around in y, each monotonic piece is appended in path order.
/// Completely horizontal curves are dropped.
pub fn insert_quad<T>(curves: &mut Vec<Curve<T>>, start: Vector2<T>, ctrl: Vector2<T>, end: Vector2<T>)
where
    T: Real,
{
    if start.y > end.y {
        order2::insert_oriented(curves, [end, ctrl, start], Direction::Decreasing);
    } else if start.y == end.y && start.y == ctrl.y {
        // horizontal
    } else {
        order2::insert_oriented(curves, [start, ctrl, end], Direction::Increasing);
    }
}

/// Append the cubic from `start` through control points `ctrl1`, `ctrl2` to `end`.
///
/// The curve is split at up to two interior y extrema, each monotonic piece is appended in path
/// order. Completely horizontal curves are dropped.
pub fn insert_cubic<T>(
    curves: &mut Vec<Curve<T>>,
    start: Vector2<T>,
    ctrl1: Vector2<T>,
    ctrl2: Vector2<T>,
    end: Vector2<T>,
) where
    T: Real,
{
    if start.y > end.y {
        order3::insert_oriented(
            curves,
            [end, ctrl2, ctrl1, start],
            Direction::Decreasing,
        );
    } else if start.y == end.y && start.y == ctrl1.y && start.y == ctrl2.y {
        // horizontal
    } else {
        order3::insert_oriented(
            curves,
            [start, ctrl1, ctrl2, end],
            Direction::Increasing,
        );
    }
}

/// Convert path commands into monotonic curves without resolving the winding rule.
///
/// Every subpath is implicitly closed back to its start point. The result is what the sweep
/// consumes as an operand, it may still contain self intersections and overlapping subpaths.
pub fn raw_curves_from_path<T, I>(commands: I) -> Vec<Curve<T>>
where
    T: Real,
    I: IntoIterator<Item = PathCommand<T>>,
{
    let mut curves = Vec::new();
    let mut mov = vec2(T::zero(), T::zero());
    let mut cur = mov;
    for cmd in commands {
        match cmd {
            PathCommand::MoveTo(p) => {
                insert_line(&mut curves, cur.x, cur.y, mov.x, mov.y);
                mov = p;
                cur = p;
                insert_move(&mut curves, p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                insert_line(&mut curves, cur.x, cur.y, p.x, p.y);
                cur = p;
            }
            PathCommand::QuadTo(c, p) => {
                insert_quad(&mut curves, cur, c, p);
                cur = p;
            }
            PathCommand::CubicTo(c1, c2, p) => {
                insert_cubic(&mut curves, cur, c1, c2, p);
                cur = p;
            }
            PathCommand::Close => {
                insert_line(&mut curves, cur.x, cur.y, mov.x, mov.y);
                cur = mov;
            }
        }
    }
    insert_line(&mut curves, cur.x, cur.y, mov.x, mov.y);
    curves
}

/// Convert path commands into the curves of the enclosed area under `rule`.
///
/// The output is a set of simple closed contours whose nonzero and even-odd interiors agree.
///
/// # Examples
///
/// ```
/// # use cag_area::curve::*;
/// # use cag_area::path::*;
/// # use cag_area::core::math::vec2;
/// let square = [
///     PathCommand::MoveTo(vec2(0.0, 0.0)),
///     PathCommand::LineTo(vec2(4.0, 0.0)),
///     PathCommand::LineTo(vec2(4.0, 4.0)),
///     PathCommand::LineTo(vec2(0.0, 4.0)),
///     PathCommand::Close,
/// ];
/// let curves = curves_from_path(square, WindingRule::NonZero).unwrap();
/// // a moveto followed by the two vertical sides
/// assert_eq!(curves.len(), 3);
/// assert_eq!(curves[0].order(), 0);
/// ```
pub fn curves_from_path<T, I>(commands: I, rule: WindingRule) -> Result<Vec<Curve<T>>, SweepError>
where
    T: Real,
    I: IntoIterator<Item = PathCommand<T>>,
{
    let curves = raw_curves_from_path(commands);
    let op = match rule {
        WindingRule::NonZero => Operator::NonZero,
        WindingRule::EvenOdd => Operator::EvenOdd,
    };
    calculate(op, &curves, &[])
}
