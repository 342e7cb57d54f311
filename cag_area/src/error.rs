//! Error types.
//!
//! Ordinary degeneracies (zero length segments, horizontal segments, coincident curves, empty
//! operands) are never errors. [SweepError] is only returned when the sweep reaches a state that
//! can not be stitched into valid closed contours, which means curve subdivision or ordering
//! produced inconsistent results for the given input.

use crate::core::traits::Real;
use thiserror::Error;

/// Fatal invariant violations detected while sweeping or stitching curves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A comparison or sweep step failed to advance the y range.
    #[error("sweep stepped back to y = {to} from y = {from}")]
    BackStep { from: f64, to: f64 },

    /// Open chain ends must always come in enter/exit pairs.
    #[error("odd number of open chain ends: {0}")]
    OddChainCount(usize),

    /// Curve links created for a row must always come in enter/exit pairs.
    #[error("odd number of new curve links: {0}")]
    OddLinkCount(usize),

    /// The operator still classified the row as inside after its last active edge.
    #[error("operator still inside at end of active edge row (y = {y})")]
    StillInside { y: f64 },

    /// A curve link y range fell outside of the curve it references.
    #[error("bad curve link [{ytop} => {ybot}] for curve spanning [{y0} => {y1}]")]
    BadCurveLink {
        ytop: f64,
        ybot: f64,
        y0: f64,
        y1: f64,
    },

    /// A chain end was linked after it had already been consumed.
    #[error("chain end linked more than once")]
    RelinkedChainEnd,

    /// Two chain ends with the same enter/exit tag were linked.
    #[error("linking chain ends of the same type")]
    SameTypeChainLink,

    /// Recursive subdivision while searching for an intersect stopped making progress.
    #[error("curve subdivision made no progress")]
    NoProgress,
}

impl SweepError {
    pub(crate) fn back_step<T: Real>(from: T, to: T) -> Self {
        SweepError::BackStep {
            from: as_f64(from),
            to: as_f64(to),
        }
    }

    pub(crate) fn still_inside<T: Real>(y: T) -> Self {
        SweepError::StillInside { y: as_f64(y) }
    }

    pub(crate) fn bad_curve_link<T: Real>(ytop: T, ybot: T, y0: T, y1: T) -> Self {
        SweepError::BadCurveLink {
            ytop: as_f64(ytop),
            ybot: as_f64(ybot),
            y0: as_f64(y0),
            y1: as_f64(y1),
        }
    }
}

/// Errors returned by [Region](crate::region::Region) operations.
///
/// When an operation fails the region it was called on is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    /// Combining curves failed with a fatal sweep error.
    #[error("sweep failed: {0}")]
    Sweep(#[from] SweepError),

    /// An argument was rejected before any work was done.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

#[inline]
fn as_f64<T: Real>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_error_converts_into_region_error() {
        let err: RegionError = SweepError::back_step(2.0f64, 1.0).into();
        assert_eq!(
            err,
            RegionError::Sweep(SweepError::BackStep { from: 2.0, to: 1.0 })
        );
        assert_eq!(
            err.to_string(),
            "sweep failed: sweep stepped back to y = 1 from y = 2"
        );
    }

    #[test]
    fn f32_values_widen() {
        let err = SweepError::bad_curve_link(0.5f32, 2.0, 1.0, 3.0);
        assert_eq!(
            err,
            SweepError::BadCurveLink {
                ytop: 0.5,
                ybot: 2.0,
                y0: 1.0,
                y1: 3.0
            }
        );
    }
}
