//! Sweep line combination of curve lists.
//!
//! [calculate] sweeps all curves of both operands from top to bottom. Within each row (a y range
//! over which no two active curves cross) the active curves are sorted by x and fed left to right
//! through an [Operator], which decides where the result is entered and exited. The emitted curve
//! pieces are stitched into simple closed contours as the sweep proceeds.
mod edge;
mod links;

use self::{
    edge::{compare_edges, Edge},
    links::{LinkId, Stitcher},
};
use crate::{
    core::traits::Real,
    curve::{ordering_of, Curve},
    error::SweepError,
};
use log::{debug, error, log_enabled, trace, Level};
use std::cmp::Ordering;

/// Operand a curve belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CurveTag {
    Left,
    Right,
}

/// Classification of an edge within a row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeTag {
    /// Crossing the edge left to right enters the result.
    Enter,
    /// Crossing the edge left to right exits the result.
    Exit,
    /// The edge does not bound the result.
    Ignore,
}

/// Whether the result is entered at the current position of a row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RowState {
    Inside,
    Outside,
}

/// Rule combining the operands while sweeping a row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Inside either operand.
    Union,
    /// Inside the left operand but not the right one.
    Difference,
    /// Inside both operands.
    Intersection,
    /// Inside exactly one operand.
    Xor,
    /// Inside where the signed crossing count of the (single) operand is not zero.
    NonZero,
    /// Inside where the crossing count of the (single) operand is odd.
    EvenOdd,
}

impl Operator {
    /// Fresh per call state for this operator.
    pub fn state(self) -> OperatorState {
        OperatorState {
            op: self,
            in_left: false,
            in_right: false,
            in_result: false,
            count: 0,
        }
    }

    #[inline]
    fn combine(self, in_left: bool, in_right: bool) -> bool {
        match self {
            Operator::Union => in_left || in_right,
            Operator::Difference => in_left && !in_right,
            Operator::Intersection => in_left && in_right,
            Operator::Xor | Operator::NonZero | Operator::EvenOdd => in_left != in_right,
        }
    }
}

/// Row scan state of an [Operator].
#[derive(Debug, Clone)]
pub struct OperatorState {
    op: Operator,
    in_left: bool,
    in_right: bool,
    in_result: bool,
    count: i32,
}

impl OperatorState {
    /// Reset to outside of everything at the left end of a row.
    pub fn new_row(&mut self) {
        self.in_left = false;
        self.in_right = false;
        self.in_result = false;
        self.count = 0;
    }

    /// Cross one curve of the row left to right.
    pub fn classify<T>(&mut self, curve: &Curve<T>, ctag: CurveTag) -> EdgeTag
    where
        T: Real,
    {
        match self.op {
            Operator::NonZero => {
                let etag = if self.count == 0 {
                    EdgeTag::Enter
                } else {
                    EdgeTag::Ignore
                };
                self.count += curve.direction().sign();
                if self.count == 0 {
                    EdgeTag::Exit
                } else {
                    etag
                }
            }
            Operator::EvenOdd => {
                self.in_result = !self.in_result;
                if self.in_result {
                    EdgeTag::Enter
                } else {
                    EdgeTag::Exit
                }
            }
            op => {
                match ctag {
                    CurveTag::Left => self.in_left = !self.in_left,
                    CurveTag::Right => self.in_right = !self.in_right,
                }
                let inside = op.combine(self.in_left, self.in_right);
                if inside == self.in_result {
                    return EdgeTag::Ignore;
                }
                self.in_result = inside;
                if inside {
                    EdgeTag::Enter
                } else {
                    EdgeTag::Exit
                }
            }
        }
    }

    pub fn state(&self) -> RowState {
        let inside = match self.op {
            Operator::NonZero => self.count != 0,
            _ => self.in_result,
        };
        if inside {
            RowState::Inside
        } else {
            RowState::Outside
        }
    }
}

/// Combine `left` and `right` curve lists with `op`.
///
/// Both inputs are lists of monotonic curves where every subpath opens with a point curve, the
/// winding operators ([Operator::NonZero], [Operator::EvenOdd]) only read `left`. The result is a
/// list of simple closed contours in the same form.
///
/// # Examples
///
/// ```
/// # use cag_area::curve::*;
/// # use cag_area::sweep::*;
/// # use cag_area::path::*;
/// # use cag_area::core::math::vec2;
/// let square = |x: f64, y: f64| {
///     raw_curves_from_path([
///         PathCommand::MoveTo(vec2(x, y)),
///         PathCommand::LineTo(vec2(x + 2.0, y)),
///         PathCommand::LineTo(vec2(x + 2.0, y + 2.0)),
///         PathCommand::LineTo(vec2(x, y + 2.0)),
///         PathCommand::Close,
///     ])
/// };
/// let a = square(0.0, 0.0);
/// let b = square(1.0, 1.0);
/// let overlap = calculate(Operator::Intersection, &a, &b).unwrap();
/// // single unit square: moveto plus two vertical sides
/// assert_eq!(overlap.len(), 3);
/// assert_eq!(overlap[0].order(), 0);
/// ```
pub fn calculate<T>(
    op: Operator,
    left: &[Curve<T>],
    right: &[Curve<T>],
) -> Result<Vec<Curve<T>>, SweepError>
where
    T: Real,
{
    let mut edges: Vec<Edge<'_, T>> = left
        .iter()
        .map(|c| (c, CurveTag::Left))
        .chain(right.iter().map(|c| (c, CurveTag::Right)))
        .filter(|(c, _)| c.order() > 0)
        .map(|(c, tag)| Edge::new(c, tag))
        .collect();

    debug!(
        "{:?}: {} left curves, {} right curves, {} edges",
        op,
        left.len(),
        right.len(),
        edges.len()
    );

    if edges.len() < 2 {
        return Ok(Vec::new());
    }

    edges.sort_by(|a, b| {
        ordering_of(a.curve.y_top(), b.curve.y_top())
            .then_with(|| ordering_of(a.curve.x_top(), b.curve.x_top()))
    });

    let result = prune_edges(op, &mut edges)?;
    debug!("{:?}: {} result curves", op, result.len());
    Ok(result)
}

/// Sweep the sorted `edges`, the core of [calculate].
fn prune_edges<'a, T>(op: Operator, edges: &mut [Edge<'a, T>]) -> Result<Vec<Curve<T>>, SweepError>
where
    T: Real,
{
    let numedges = edges.len();
    // edges stay put, the x order of the active set is kept in an index list
    let mut order: Vec<usize> = (0..numedges).collect();
    let mut state = op.state();
    let mut stitcher = Stitcher::new();
    let mut row_links: Vec<LinkId> = Vec::new();
    let mut yrange = [T::zero(); 2];

    let mut left = 0;
    let mut right = 0;
    // active edges are order[left..right]
    while left < numedges {
        let mut y = yrange[0];

        // drop edges that end at or above the top of the row
        let mut next = right;
        for cur in (left..right).rev() {
            let e = order[cur];
            if edges[e].curve.y_bot() > y {
                next -= 1;
                order[next] = e;
            }
        }
        left = next;

        if left >= right {
            if right >= numedges {
                break;
            }
            y = edges[order[right]].curve.y_top();
            if y > yrange[0] {
                stitcher.finalize_sub_curves()?;
            }
            yrange[0] = y;
        }

        // admit edges starting at the top of the row
        while right < numedges && edges[order[right]].curve.y_top() <= y {
            right += 1;
        }

        yrange[1] = edges[order[left]].curve.y_bot();
        if right < numedges {
            let ynext = edges[order[right]].curve.y_top();
            if yrange[1] > ynext {
                yrange[1] = ynext;
            }
        }

        // insertion sort the active edges by x, shrinking the row to where the order holds
        let mut nexteq = 1;
        for cur in left..right {
            let e = order[cur];
            edges[e].equivalence = 0;
            let mut pos = cur;
            while pos > left {
                let prev = order[pos - 1];
                let ordering = compare_edges(edges, e, prev, &mut yrange)?;
                if yrange[1] <= yrange[0] {
                    error!("backstepping to {:?} from {:?}", yrange[1], yrange[0]);
                    return Err(SweepError::back_step(yrange[0], yrange[1]));
                }
                if ordering != Ordering::Less {
                    if ordering == Ordering::Equal {
                        // coincident edges are classified together
                        let mut eq = edges[prev].equivalence;
                        if eq == 0 {
                            eq = nexteq;
                            nexteq += 1;
                            edges[prev].equivalence = eq;
                        }
                        edges[e].equivalence = eq;
                    }
                    break;
                }
                order[pos] = prev;
                pos -= 1;
            }
            order[pos] = e;
        }

        let ystart = yrange[0];
        let yend = yrange[1];
        if log_enabled!(Level::Trace) {
            trace!("row [{:?}, {:?}], {} active edges", ystart, yend, right - left);
            for &e in &order[left..right] {
                trace!(
                    "  {:?} eq {} : {:?}",
                    edges[e].ctag,
                    edges[e].equivalence,
                    edges[e].curve
                );
            }
        }

        state.new_row();
        let mut cur = left;
        while cur < right {
            let mut e = order[cur];
            let eq = edges[e].equivalence;
            let etag = if eq != 0 {
                // prefer the member that already continued from the row above, otherwise the
                // one reaching furthest down
                let origstate = state.state();
                let mut etag = if origstate == RowState::Inside {
                    EdgeTag::Exit
                } else {
                    EdgeTag::Enter
                };
                let mut activematch = None;
                let mut longestmatch = e;
                let mut furthesty = yend;
                loop {
                    let member = &edges[order[cur]];
                    state.classify(member.curve, member.ctag);
                    if activematch.is_none() && member.is_active_for(ystart, etag) {
                        activematch = Some(order[cur]);
                    }
                    let ybot = member.curve.y_bot();
                    if ybot > furthesty {
                        longestmatch = order[cur];
                        furthesty = ybot;
                    }
                    if cur + 1 < right && edges[order[cur + 1]].equivalence == eq {
                        cur += 1;
                    } else {
                        break;
                    }
                }
                if state.state() == origstate {
                    etag = EdgeTag::Ignore;
                } else {
                    e = activematch.unwrap_or(longestmatch);
                }
                etag
            } else {
                state.classify(edges[e].curve, edges[e].ctag)
            };

            if etag != EdgeTag::Ignore {
                edges[e].record(yend, etag);
                let link = stitcher.new_link(edges[e].curve, ystart, yend, etag)?;
                row_links.push(link);
            }
            cur += 1;
        }

        if state.state() != RowState::Outside {
            error!(
                "still inside at end of active edge list: {} edges, {} links, y top = {:?}",
                right - left,
                row_links.len(),
                ystart
            );
            return Err(SweepError::still_inside(ystart));
        }
        trace!("row [{:?}, {:?}]: {} new links", ystart, yend, row_links.len());

        stitcher.resolve_links(&row_links)?;
        row_links.clear();
        yrange[0] = yend;
    }

    stitcher.finalize_sub_curves()?;
    Ok(stitcher.into_curves())
}
