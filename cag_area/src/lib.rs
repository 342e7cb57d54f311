//! Constructive area geometry for regions bounded by line, quadratic and cubic Bézier curves.
//!
//! A [Region](region::Region) holds the boundary of an area as simple closed contours of y
//! monotonic [Curve](curve::Curve) pieces. Regions are combined with union, difference,
//! intersection and symmetric difference by a single top to bottom sweep over the boundary curves
//! of both operands ([sweep::calculate]), the same sweep resolves nonzero and even-odd winding when
//! a region is built from an arbitrary path.
//!
//! # Examples
//!
//! ```
//! use cag_area::{core::math::vec2, path::*, region::*};
//!
//! // a circle approximated with four cubics
//! let k = 0.5522847498 * 5.0;
//! let circle = [
//!     PathCommand::MoveTo(vec2(5.0, 0.0)),
//!     PathCommand::CubicTo(vec2(5.0, k), vec2(k, 5.0), vec2(0.0, 5.0)),
//!     PathCommand::CubicTo(vec2(-k, 5.0), vec2(-5.0, k), vec2(-5.0, 0.0)),
//!     PathCommand::CubicTo(vec2(-5.0, -k), vec2(-k, -5.0), vec2(0.0, -5.0)),
//!     PathCommand::CubicTo(vec2(k, -5.0), vec2(5.0, -k), vec2(5.0, 0.0)),
//!     PathCommand::Close,
//! ];
//! let mut area = Region::from_path(circle, WindingRule::NonZero).unwrap();
//! area.subtract(&Region::from_rect(0.0, -10.0, 10.0, 20.0)).unwrap();
//!
//! assert!(area.contains_point(-2.0, 0.0));
//! assert!(!area.contains_point(2.0, 0.0));
//! assert!(!area.is_polygonal());
//! ```
extern crate static_aabb2d_index;

#[macro_use]
mod macros;

pub mod core;
pub mod crossings;
pub mod curve;
pub mod error;
pub mod path;
pub mod region;
pub mod sweep;

pub use static_aabb2d_index::AABB;

pub use crate::error::{RegionError, SweepError};
pub use crate::path::{PathCommand, WindingRule};
pub use crate::region::{AreaOps, Region};
