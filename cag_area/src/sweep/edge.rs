use super::{CurveTag, EdgeTag};
use crate::{core::traits::Real, curve::Curve, error::SweepError};
use std::cmp::Ordering;

/// Curve taking part in one sweep, with the per row state the sweep records on it.
#[derive(Debug, Clone)]
pub(crate) struct Edge<'a, T> {
    pub curve: &'a Curve<T>,
    pub ctag: CurveTag,
    /// Classification recorded for the last row the edge was emitted in.
    etag: EdgeTag,
    /// Bottom of the last row the edge was emitted in.
    active_y: T,
    /// Coincidence class within the current row, 0 when the edge is not coincident with a
    /// neighbour.
    pub equivalence: usize,
    last_edge: Option<usize>,
    last_result: Ordering,
    last_limit: T,
}

impl<'a, T> Edge<'a, T>
where
    T: Real,
{
    pub fn new(curve: &'a Curve<T>, ctag: CurveTag) -> Self {
        Self {
            curve,
            ctag,
            etag: EdgeTag::Ignore,
            active_y: T::zero(),
            equivalence: 0,
            last_edge: None,
            last_result: Ordering::Equal,
            last_limit: T::zero(),
        }
    }

    #[inline]
    pub fn record(&mut self, yend: T, etag: EdgeTag) {
        self.active_y = yend;
        self.etag = etag;
    }

    /// Returns `true` if the edge was emitted with `etag` in a row reaching down to at least `y`.
    #[inline]
    pub fn is_active_for(&self, y: T, etag: EdgeTag) -> bool {
        self.etag == etag && self.active_y >= y
    }
}

/// Compare `edges[this]` against `edges[other]` over `yrange`, see [Curve::compare].
///
/// The last result of each edge is cached together with the y limit it holds to, rows that start
/// above that limit reuse it (from either side) instead of running the curve comparison again.
pub(crate) fn compare_edges<T>(
    edges: &mut [Edge<'_, T>],
    this: usize,
    other: usize,
    yrange: &mut [T; 2],
) -> Result<Ordering, SweepError>
where
    T: Real,
{
    let e = &edges[this];
    if e.last_edge == Some(other) && yrange[0] < e.last_limit {
        if yrange[1] > e.last_limit {
            yrange[1] = e.last_limit;
        }
        return Ok(e.last_result);
    }
    let o = &edges[other];
    if o.last_edge == Some(this) && yrange[0] < o.last_limit {
        if yrange[1] > o.last_limit {
            yrange[1] = o.last_limit;
        }
        return Ok(o.last_result.reverse());
    }

    let result = edges[this].curve.compare(edges[other].curve, yrange)?;
    let e = &mut edges[this];
    e.last_edge = Some(other);
    e.last_limit = yrange[1];
    e.last_result = result;
    Ok(result)
}
