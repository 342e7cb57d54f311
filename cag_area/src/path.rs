//! Path iteration protocol used to build regions and to export their boundaries.
use crate::{
    core::{
        math::{seg_dist_squared, Transform2D, Vector2},
        traits::Real,
    },
    curve::{split_cubic, split_quad, Curve},
};

/// One segment command of a path.
///
/// Segments other than [PathCommand::MoveTo] continue from the current point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand<T = f64> {
    /// Start a new subpath.
    MoveTo(Vector2<T>),
    /// Straight line to the point.
    LineTo(Vector2<T>),
    /// Quadratic Bézier with control point, then end point.
    QuadTo(Vector2<T>, Vector2<T>),
    /// Cubic Bézier with two control points, then end point.
    CubicTo(Vector2<T>, Vector2<T>, Vector2<T>),
    /// Close the current subpath back to its start point.
    Close,
}

impl<T> PathCommand<T>
where
    T: Real,
{
    /// Map every point of the command through `transform`.
    pub fn transformed(&self, transform: &Transform2D<T>) -> Self {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(transform.apply(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(transform.apply(p)),
            PathCommand::QuadTo(c, p) => PathCommand::QuadTo(transform.apply(c), transform.apply(p)),
            PathCommand::CubicTo(c1, c2, p) => PathCommand::CubicTo(
                transform.apply(c1),
                transform.apply(c2),
                transform.apply(p),
            ),
            PathCommand::Close => PathCommand::Close,
        }
    }

    /// End point of the command, `None` for [PathCommand::Close].
    pub fn end_point(&self) -> Option<Vector2<T>> {
        match *self {
            PathCommand::MoveTo(p)
            | PathCommand::LineTo(p)
            | PathCommand::QuadTo(_, p)
            | PathCommand::CubicTo(_, _, p) => Some(p),
            PathCommand::Close => None,
        }
    }
}

/// Rule deciding which points a possibly self overlapping path encloses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindingRule {
    /// Inside where the signed crossing count is not zero.
    NonZero,
    /// Inside where the crossing count is odd.
    EvenOdd,
}

/// Iterator exporting a curve list as path commands.
///
/// Consecutive curves that do not touch are bridged with a [PathCommand::LineTo] and a
/// [PathCommand::Close] is emitted before every new subpath and at the end. The commands should
/// be interpreted with [WindingRule::NonZero].
#[derive(Debug, Clone)]
pub struct PathIter<'a, T = f64> {
    curves: &'a [Curve<T>],
    transform: Option<Transform2D<T>>,
    index: usize,
    bridging: bool,
}

impl<'a, T> PathIter<'a, T>
where
    T: Real,
{
    pub fn new(curves: &'a [Curve<T>], transform: Option<&Transform2D<T>>) -> Self {
        Self {
            curves,
            transform: transform.copied(),
            index: 0,
            bridging: false,
        }
    }

    /// Winding rule the exported commands are meant to be read with.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

impl<'a, T> Iterator for PathIter<'a, T>
where
    T: Real,
{
    type Item = PathCommand<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let cmd = if self.bridging {
            self.bridging = false;
            match self.curves.get(self.index) {
                Some(c) if c.order() != 0 => PathCommand::LineTo(c.start()),
                _ => PathCommand::Close,
            }
        } else {
            let prev = self.curves.get(self.index)?;
            self.index += 1;
            self.bridging = match self.curves.get(self.index) {
                Some(c) => c.order() == 0 || prev.end() != c.start(),
                None => true,
            };
            prev.segment()
        };

        Some(match &self.transform {
            Some(t) => cmd.transformed(t),
            None => cmd,
        })
    }
}

/// Options for [flatten].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenOptions<T>
where
    T: Real,
{
    /// Maximum distance allowed between a curve's control points and the chord replacing it.
    pub tolerance: T,
    /// Maximum number of times a single curve is halved.
    pub recursion_limit: usize,
}

impl<T> FlattenOptions<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            tolerance: T::constant(1e-2),
            recursion_limit: 10,
        }
    }
}

impl<T> Default for FlattenOptions<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter replacing curve commands by line segments, see [flatten].
#[derive(Debug, Clone)]
pub struct Flatten<I, T>
where
    T: Real,
{
    inner: I,
    tolerance_sq: T,
    recursion_limit: usize,
    current: Vector2<T>,
    subpath_start: Vector2<T>,
    pending: Vec<Vector2<T>>,
}

/// Flatten path commands so only [PathCommand::MoveTo], [PathCommand::LineTo] and
/// [PathCommand::Close] remain.
///
/// Each curve is halved until its control points lie within `options.tolerance` of the chord or
/// the recursion limit is reached.
///
/// # Examples
///
/// ```
/// # use cag_area::path::*;
/// # use cag_area::core::math::vec2;
/// let cmds = [
///     PathCommand::MoveTo(vec2(0.0, 0.0)),
///     PathCommand::QuadTo(vec2(5.0, 10.0), vec2(10.0, 0.0)),
///     PathCommand::Close,
/// ];
/// let flat: Vec<_> = flatten(cmds, &FlattenOptions::new()).collect();
/// assert!(flat.len() > 3);
/// assert!(flat
///     .iter()
///     .all(|c| matches!(c, PathCommand::MoveTo(_) | PathCommand::LineTo(_) | PathCommand::Close)));
/// ```
pub fn flatten<I, T>(commands: I, options: &FlattenOptions<T>) -> Flatten<I::IntoIter, T>
where
    I: IntoIterator<Item = PathCommand<T>>,
    T: Real,
{
    Flatten {
        inner: commands.into_iter(),
        tolerance_sq: options.tolerance * options.tolerance,
        recursion_limit: options.recursion_limit,
        current: Vector2::zero(),
        subpath_start: Vector2::zero(),
        pending: Vec::new(),
    }
}

impl<I, T> Flatten<I, T>
where
    T: Real,
{
    fn push_quad(&mut self, p: [Vector2<T>; 3], level: usize) {
        if level < self.recursion_limit && seg_dist_squared(p[0], p[2], p[1]) >= self.tolerance_sq
        {
            let (a, b) = split_quad(p, T::half());
            // pending is popped from the back
            self.push_quad(b, level + 1);
            self.push_quad(a, level + 1);
        } else {
            self.pending.push(p[2]);
        }
    }

    fn push_cubic(&mut self, p: [Vector2<T>; 4], level: usize) {
        let flatness_sq = num_traits::real::Real::max(
            seg_dist_squared(p[0], p[3], p[1]),
            seg_dist_squared(p[0], p[3], p[2]),
        );
        if level < self.recursion_limit && flatness_sq >= self.tolerance_sq {
            let (a, b) = split_cubic(p, T::half());
            self.push_cubic(b, level + 1);
            self.push_cubic(a, level + 1);
        } else {
            self.pending.push(p[3]);
        }
    }
}

impl<I, T> Iterator for Flatten<I, T>
where
    I: Iterator<Item = PathCommand<T>>,
    T: Real,
{
    type Item = PathCommand<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(p) = self.pending.pop() {
            self.current = p;
            return Some(PathCommand::LineTo(p));
        }

        let cmd = self.inner.next()?;
        match cmd {
            PathCommand::MoveTo(p) => {
                self.current = p;
                self.subpath_start = p;
                Some(cmd)
            }
            PathCommand::LineTo(p) => {
                self.current = p;
                Some(cmd)
            }
            PathCommand::Close => {
                self.current = self.subpath_start;
                Some(cmd)
            }
            PathCommand::QuadTo(c, p) => {
                self.push_quad([self.current, c, p], 0);
                self.next()
            }
            PathCommand::CubicTo(c1, c2, p) => {
                self.push_cubic([self.current, c1, c2, p], 0);
                self.next()
            }
        }
    }
}
