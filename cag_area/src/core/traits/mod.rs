//! Core/common traits for use in cag_area.
mod fuzzy;
mod real;

pub use fuzzy::{FuzzyEq, FuzzyOrd};
pub use real::Real;
