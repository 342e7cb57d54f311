//! Regions enclosed by line, quadratic and cubic Bézier boundaries.
mod traits;

pub use traits::*;

use crate::{
    core::{
        math::{Transform2D, Vector2},
        traits::Real,
    },
    crossings::find_crossings,
    curve::{curves_from_path, Curve, Direction, Order0, Order1},
    error::RegionError,
    path::{flatten, Flatten, FlattenOptions, PathCommand, PathIter, WindingRule},
    sweep::{calculate, Operator},
};
use static_aabb2d_index::AABB;

/// Closed area of the plane bounded by curves.
///
/// The boundary is kept as a list of simple, non crossing closed contours of y monotonic
/// [Curve] pieces, each contour opened by a [Curve::Point]. Every contour list a region holds is
/// the output of a sweep, so nonzero and even-odd interpretations of the boundary agree.
///
/// # Examples
///
/// ```
/// # use cag_area::region::*;
/// let mut a = Region::from_rect(0.0, 0.0, 10.0, 10.0);
/// let b = Region::from_rect(5.0, 5.0, 10.0, 10.0);
/// a.intersect(&b).unwrap();
/// assert!(a.is_rectangular());
/// let bounds = a.bounds().unwrap();
/// assert_eq!((bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y), (5.0, 5.0, 10.0, 10.0));
/// assert!(a.contains_point(7.0, 7.0));
/// assert!(!a.contains_point(2.0, 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Region<T = f64> {
    curves: Vec<Curve<T>>,
    bounds: Option<AABB<T>>,
}

impl<T> Default for Region<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Region<T>
where
    T: Real,
{
    /// Create a new empty region.
    #[inline]
    pub fn new() -> Self {
        Self {
            curves: Vec::new(),
            bounds: None,
        }
    }

    /// Create a region from the area `commands` enclose under `rule`. Every subpath is implicitly
    /// closed.
    pub fn from_path<I>(commands: I, rule: WindingRule) -> Result<Self, RegionError>
    where
        I: IntoIterator<Item = PathCommand<T>>,
    {
        let curves = curves_from_path(commands, rule)?;
        Ok(Self::from_curves(curves))
    }

    /// Create the axis aligned rectangle with top left corner `(x, y)`, width `w` and height `h`.
    /// The region is empty unless both `w` and `h` are positive.
    pub fn from_rect(x: T, y: T, w: T, h: T) -> Self {
        if !(w > T::zero() && h > T::zero()) {
            return Self::new();
        }
        let y1 = y + h;
        // same layout the sweep produces: moveto, left side down, right side up
        Self::from_curves(vec![
            Curve::Point(Order0::new(x, y)),
            Curve::Line(Order1::new(x, y, x, y1, Direction::Increasing)),
            Curve::Line(Order1::new(x + w, y, x + w, y1, Direction::Decreasing)),
        ])
    }

    /// Create a region from the closed polygon through `points` (nonzero winding).
    pub fn from_polygon(points: &[Vector2<T>]) -> Result<Self, RegionError> {
        let mut iter = points.iter().copied();
        let first = match iter.next() {
            Some(p) => p,
            None => return Ok(Self::new()),
        };
        let commands = std::iter::once(PathCommand::MoveTo(first))
            .chain(iter.map(PathCommand::LineTo))
            .chain(std::iter::once(PathCommand::Close));
        Self::from_path(commands, WindingRule::NonZero)
    }

    fn from_curves(curves: Vec<Curve<T>>) -> Self {
        let mut region = Self::new();
        region.set_curves(curves);
        region
    }

    fn set_curves(&mut self, curves: Vec<Curve<T>>) {
        self.bounds = compute_bounds(&curves);
        self.curves = curves;
    }

    fn combine(&mut self, op: Operator, other: &Self) -> Result<(), RegionError> {
        let curves = calculate(op, &self.curves, &other.curves)?;
        self.set_curves(curves);
        Ok(())
    }

    /// Boundary curves of the region.
    #[inline]
    pub fn curves(&self) -> &[Curve<T>] {
        &self.curves
    }

    /// Winding rule the boundary is meant to be read with.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }

    /// Replace `self` with the union of `self` and `other`.
    pub fn add(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(Operator::Union, other)
    }

    /// Replace `self` with the part of `self` outside of `other`.
    pub fn subtract(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(Operator::Difference, other)
    }

    /// Replace `self` with the part of `self` inside of `other`.
    pub fn intersect(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(Operator::Intersection, other)
    }

    /// Replace `self` with the parts covered by exactly one of `self` and `other`.
    pub fn xor(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(Operator::Xor, other)
    }

    /// Returns `true` if both regions enclose the same area (their symmetric difference is
    /// empty).
    pub fn is_equal(&self, other: &Self) -> Result<bool, RegionError> {
        if std::ptr::eq(self, other) {
            return Ok(true);
        }
        Ok(calculate(Operator::Xor, &self.curves, &other.curves)?.is_empty())
    }

    /// Remove everything, leaving an empty region.
    #[inline]
    pub fn reset(&mut self) {
        self.curves.clear();
        self.bounds = None;
    }

    /// Map the region through `transform`.
    ///
    /// Curves are exported through the transform and swept again (nonzero winding) since a
    /// transform may reorder or flip the boundary in y.
    pub fn transform(&mut self, transform: &Transform2D<T>) -> Result<(), RegionError> {
        if !transform.is_finite() {
            return Err(RegionError::InvalidArgument("transform must be finite"));
        }
        let curves = curves_from_path(self.path_iter(Some(transform)), WindingRule::NonZero)?;
        self.set_curves(curves);
        Ok(())
    }

    /// Copy of the region mapped through `transform`, see [Region::transform].
    pub fn transformed(&self, transform: &Transform2D<T>) -> Result<Self, RegionError> {
        let mut result = self.clone();
        result.transform(transform)?;
        Ok(result)
    }

    /// Returns `true` if nothing is enclosed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Returns `true` if the boundary consists only of straight lines.
    pub fn is_polygonal(&self) -> bool {
        self.curves.iter().all(|c| c.order() <= 1)
    }

    /// Returns `true` if the region is empty or an axis aligned rectangle.
    pub fn is_rectangular(&self) -> bool {
        match self.curves.as_slice() {
            [] => true,
            [_, Curve::Line(c1), Curve::Line(c2)] => {
                c1.is_vertical() && c2.is_vertical() && c1.y0 == c2.y0 && c1.y1 == c2.y1
            }
            _ => false,
        }
    }

    /// Returns `true` if the boundary is at most one closed contour.
    pub fn is_singular(&self) -> bool {
        if self.curves.len() < 3 {
            return true;
        }
        self.curves.iter().skip(1).all(|c| c.order() != 0)
    }

    /// Tight bounding box of the region, `None` if empty.
    #[inline]
    pub fn bounds(&self) -> Option<AABB<T>> {
        self.bounds
    }

    /// Returns `true` if `(x, y)` lies inside the region.
    ///
    /// Points on the left and top boundary count as inside, points on the right and bottom
    /// boundary as outside.
    pub fn contains_point(&self, x: T, y: T) -> bool {
        let b = match &self.bounds {
            Some(b) => b,
            None => return false,
        };
        if !(x >= b.min_x && y >= b.min_y && x < b.max_x && y < b.max_y) {
            return false;
        }
        let crossings: i32 = self.curves.iter().map(|c| c.crossings_at(x, y)).sum();
        crossings & 1 == 1
    }

    /// Returns `true` if the rectangle with top left corner `(x, y)` and size `w` by `h` lies
    /// completely inside the region. Empty rectangles are never contained.
    ///
    /// Negative sizes are rejected with [RegionError::InvalidArgument].
    pub fn contains_rect(&self, x: T, y: T, w: T, h: T) -> Result<bool, RegionError> {
        validate_extents(w, h)?;
        let b = match self.non_empty_bounds() {
            Some(b) => b,
            None => return Ok(false),
        };
        if w <= T::zero() || h <= T::zero() {
            return Ok(false);
        }
        if !(x >= b.min_x && y >= b.min_y && x + w <= b.max_x && y + h <= b.max_y) {
            return Ok(false);
        }
        Ok(find_crossings(&self.curves, x, y, x + w, y + h).covers(y, y + h))
    }

    /// Returns `true` if the interior of the rectangle with top left corner `(x, y)` and size
    /// `w` by `h` overlaps the region. Empty rectangles never intersect.
    ///
    /// Negative sizes are rejected with [RegionError::InvalidArgument].
    pub fn intersects_rect(&self, x: T, y: T, w: T, h: T) -> Result<bool, RegionError> {
        validate_extents(w, h)?;
        let b = match self.non_empty_bounds() {
            Some(b) => b,
            None => return Ok(false),
        };
        if w <= T::zero() || h <= T::zero() {
            return Ok(false);
        }
        if !(x + w > b.min_x && y + h > b.min_y && x < b.max_x && y < b.max_y) {
            return Ok(false);
        }
        Ok(find_crossings(&self.curves, x, y, x + w, y + h).intersects())
    }

    fn non_empty_bounds(&self) -> Option<&AABB<T>> {
        self.bounds
            .as_ref()
            .filter(|b| b.max_x > b.min_x && b.max_y > b.min_y)
    }

    /// Iterate the boundary as path commands, optionally mapped through `transform`.
    ///
    /// The commands describe the region under [WindingRule::NonZero].
    #[inline]
    pub fn path_iter(&self, transform: Option<&Transform2D<T>>) -> PathIter<'_, T> {
        PathIter::new(&self.curves, transform)
    }

    /// Iterate the boundary as line only path commands, see [flatten].
    ///
    /// The tolerance in `options` must be positive.
    pub fn flattened_path(
        &self,
        transform: Option<&Transform2D<T>>,
        options: &FlattenOptions<T>,
    ) -> Result<Flatten<PathIter<'_, T>, T>, RegionError> {
        if !(options.tolerance > T::zero()) {
            return Err(RegionError::InvalidArgument(
                "flattening tolerance must be positive",
            ));
        }
        Ok(flatten(self.path_iter(transform), options))
    }
}

#[inline]
fn validate_extents<T: Real>(w: T, h: T) -> Result<(), RegionError> {
    if w < T::zero() || h < T::zero() {
        return Err(RegionError::InvalidArgument(
            "rectangle width and height must not be negative",
        ));
    }
    Ok(())
}

fn compute_bounds<T: Real>(curves: &[Curve<T>]) -> Option<AABB<T>> {
    let first = curves.first()?;
    // every contour list opens with a moveto
    let (x, y) = (first.x0(), first.y0());
    let mut aabb = AABB::new(x, y, x, y);
    for c in &curves[1..] {
        c.enlarge(&mut aabb);
    }
    Some(aabb)
}

impl<T> AreaOps for Region<T>
where
    T: Real,
{
    type Num = T;

    fn add(&mut self, other: &Self) -> Result<(), RegionError> {
        Region::add(self, other)
    }

    fn subtract(&mut self, other: &Self) -> Result<(), RegionError> {
        Region::subtract(self, other)
    }

    fn intersect(&mut self, other: &Self) -> Result<(), RegionError> {
        Region::intersect(self, other)
    }

    fn xor(&mut self, other: &Self) -> Result<(), RegionError> {
        Region::xor(self, other)
    }

    fn is_equal(&self, other: &Self) -> Result<bool, RegionError> {
        Region::is_equal(self, other)
    }

    fn reset(&mut self) {
        Region::reset(self)
    }

    fn is_empty(&self) -> bool {
        Region::is_empty(self)
    }

    fn contains_point(&self, x: T, y: T) -> bool {
        Region::contains_point(self, x, y)
    }

    fn bounds(&self) -> Option<AABB<T>> {
        Region::bounds(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn rect_matches_swept_rect() {
        let direct = Region::from_rect(1.0, 2.0, 3.0, 4.0);
        let swept = Region::from_polygon(&[
            vec2(1.0, 2.0),
            vec2(4.0, 2.0),
            vec2(4.0, 6.0),
            vec2(1.0, 6.0),
        ])
        .unwrap();
        assert_eq!(direct.curves(), swept.curves());
        assert!(direct.is_rectangular());
        assert!(direct.is_equal(&swept).unwrap());
    }

    #[test]
    fn degenerate_rects_are_empty() {
        assert!(Region::from_rect(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Region::from_rect(0.0, 0.0, 5.0, -1.0).is_empty());
        assert!(Region::<f64>::from_polygon(&[]).unwrap().is_empty());
        assert!(Region::from_polygon(&[vec2(0.0, 0.0), vec2(1.0, 1.0)])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn failed_transform_leaves_region_unchanged() {
        let mut r = Region::from_rect(0.0, 0.0, 1.0, 1.0);
        let before = r.curves().to_vec();
        let bad = Transform2D::new(f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0);
        assert!(matches!(
            r.transform(&bad),
            Err(RegionError::InvalidArgument(_))
        ));
        assert_eq!(r.curves(), before.as_slice());
    }

    #[test]
    fn negative_rect_query_rejected() {
        let r = Region::from_rect(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains_rect(1.0, 1.0, -1.0, 1.0).is_err());
        assert!(r.intersects_rect(1.0, 1.0, 1.0, -1.0).is_err());
        assert_eq!(r.contains_rect(1.0, 1.0, 0.0, 1.0), Ok(false));
    }

    #[test]
    fn flatten_tolerance_validated() {
        let r = Region::from_rect(0.0, 0.0, 1.0, 1.0);
        let options = FlattenOptions {
            tolerance: 0.0,
            recursion_limit: 4,
        };
        assert!(r.flattened_path(None, &options).is_err());
        assert!(r.flattened_path(None, &FlattenOptions::new()).is_ok());
    }
}
