use crate::{core::traits::Real, error::RegionError};
use static_aabb2d_index::AABB;

/// Mutable area algebra shared by [Region](super::Region) and alternative implementations (such
/// as the point sampling reference used to validate it in tests).
///
/// All binary operations replace `self` with the combination of `self` and `other`. When an
/// operation returns an error `self` is left unchanged.
pub trait AreaOps: Sized {
    /// Numeric type used for coordinates.
    type Num: Real;

    /// Replace `self` with the union of `self` and `other`.
    fn add(&mut self, other: &Self) -> Result<(), RegionError>;

    /// Replace `self` with the part of `self` outside of `other`.
    fn subtract(&mut self, other: &Self) -> Result<(), RegionError>;

    /// Replace `self` with the part of `self` inside of `other`.
    fn intersect(&mut self, other: &Self) -> Result<(), RegionError>;

    /// Replace `self` with the parts covered by exactly one of `self` and `other`.
    fn xor(&mut self, other: &Self) -> Result<(), RegionError>;

    /// Returns `true` if both enclose the same area.
    fn is_equal(&self, other: &Self) -> Result<bool, RegionError>;

    /// Remove everything, leaving an empty area.
    fn reset(&mut self);

    /// Returns `true` if nothing is enclosed.
    fn is_empty(&self) -> bool;

    /// Returns `true` if the point `(x, y)` is enclosed.
    fn contains_point(&self, x: Self::Num, y: Self::Num) -> bool;

    /// Bounding box of the enclosed area, `None` if empty.
    fn bounds(&self) -> Option<AABB<Self::Num>>;
}
