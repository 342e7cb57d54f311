//! Stitching of per row curve links into closed contours.
//!
//! Links and chain ends live in arenas owned by [Stitcher] and refer to each other by index. A
//! chain is a run of links joined through [CurveLink::next], an open contour has two chain ends
//! (an entering and an exiting one) that are each other's partner.
use super::EdgeTag;
use crate::{
    core::traits::Real,
    curve::{Curve, Direction, Order0},
    error::SweepError,
};
use log::error;
use std::ptr;

pub(crate) type LinkId = usize;
pub(crate) type ChainId = usize;

/// Piece `[ytop, ybot]` of a curve emitted by the sweep.
#[derive(Debug, Clone)]
pub(crate) struct CurveLink<'a, T> {
    curve: &'a Curve<T>,
    ytop: T,
    ybot: T,
    etag: EdgeTag,
    next: Option<LinkId>,
}

impl<'a, T> CurveLink<'a, T>
where
    T: Real,
{
    pub fn new(curve: &'a Curve<T>, ytop: T, ybot: T, etag: EdgeTag) -> Result<Self, SweepError> {
        if ytop < curve.y_top() || ybot > curve.y_bot() {
            return Err(SweepError::bad_curve_link(
                ytop,
                ybot,
                curve.y_top(),
                curve.y_bot(),
            ));
        }
        Ok(Self {
            curve,
            ytop,
            ybot,
            etag,
            next: None,
        })
    }

    /// Grow this link over `other` if both refer to the same curve with the same tag and their y
    /// ranges touch. Returns `false` (leaving `self` unchanged) otherwise.
    pub fn absorb(&mut self, other: &CurveLink<'a, T>) -> bool {
        if !ptr::eq(self.curve, other.curve)
            || self.etag != other.etag
            || self.ybot < other.ytop
            || self.ytop > other.ybot
        {
            return false;
        }
        self.ytop = num_traits::real::Real::min(self.ytop, other.ytop);
        self.ybot = num_traits::real::Real::max(self.ybot, other.ybot);
        true
    }

    #[inline]
    pub fn x_top(&self) -> T {
        self.curve.x_at_y(self.ytop)
    }

    #[inline]
    pub fn x_bot(&self) -> T {
        self.curve.x_at_y(self.ybot)
    }

    #[inline]
    pub fn y_top(&self) -> T {
        self.ytop
    }

    /// Point curve opening the contour that starts with this link.
    pub fn move_to(&self) -> Curve<T> {
        Curve::Point(Order0::new(self.x_top(), self.ytop))
    }

    /// Covered piece of the curve, travelling down when entering and up when exiting.
    pub fn sub_curve(&self) -> Curve<T> {
        let direction = match self.etag {
            EdgeTag::Exit => Direction::Decreasing,
            _ => Direction::Increasing,
        };
        if self.ytop == self.curve.y_top() && self.ybot == self.curve.y_bot() {
            self.curve.with_direction(direction)
        } else {
            self.curve.sub_curve(self.ytop, self.ybot, direction)
        }
    }
}

/// One open end of a partially assembled contour.
#[derive(Debug, Clone)]
struct ChainEnd {
    head: LinkId,
    tail: LinkId,
    partner: Option<ChainId>,
    /// Set to [EdgeTag::Ignore] once the end has been linked.
    etag: EdgeTag,
}

/// Arena of links and chain ends for one sweep.
#[derive(Debug)]
pub(crate) struct Stitcher<'a, T> {
    links: Vec<CurveLink<'a, T>>,
    ends: Vec<ChainEnd>,
    /// Open chain ends ordered by x.
    chains: Vec<ChainId>,
    /// Head links of closed contours.
    subcurves: Vec<LinkId>,
}

#[inline]
fn obstructs<T: Real>(v1: T, v2: T, phase: usize) -> bool {
    if phase & 1 == 0 {
        v1 <= v2
    } else {
        v1 < v2
    }
}

impl<'a, T> Stitcher<'a, T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            links: Vec::new(),
            ends: Vec::new(),
            chains: Vec::new(),
            subcurves: Vec::new(),
        }
    }

    /// Number of open chain ends.
    #[cfg(test)]
    pub fn open_chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn new_link(
        &mut self,
        curve: &'a Curve<T>,
        ytop: T,
        ybot: T,
        etag: EdgeTag,
    ) -> Result<LinkId, SweepError> {
        let link = CurveLink::new(curve, ytop, ybot, etag).map_err(|e| {
            error!("{}", e);
            e
        })?;
        self.links.push(link);
        Ok(self.links.len() - 1)
    }

    fn new_chain_end(&mut self, link: LinkId, partner: Option<ChainId>) -> ChainId {
        self.ends.push(ChainEnd {
            head: link,
            tail: link,
            partner,
            etag: self.links[link].etag,
        });
        self.ends.len() - 1
    }

    fn chain_x(&self, chain: ChainId) -> T {
        let end = &self.ends[chain];
        match end.etag {
            EdgeTag::Enter => self.links[end.tail].x_bot(),
            _ => self.links[end.head].x_bot(),
        }
    }

    fn chain_add_link(&mut self, chain: ChainId, link: LinkId) {
        let end = &mut self.ends[chain];
        if end.etag == EdgeTag::Enter {
            let tail = end.tail;
            end.tail = link;
            self.links[tail].next = Some(link);
        } else {
            let head = end.head;
            end.head = link;
            self.links[link].next = Some(head);
        }
    }

    /// Join two open chain ends of opposite type.
    ///
    /// Returns the head link of a closed contour if the two ends were partners.
    fn link_to(&mut self, this: ChainId, that: ChainId) -> Result<Option<LinkId>, SweepError> {
        let (this_tag, that_tag) = (self.ends[this].etag, self.ends[that].etag);
        if this_tag == EdgeTag::Ignore || that_tag == EdgeTag::Ignore {
            error!("chain end {} or {} linked more than once", this, that);
            return Err(SweepError::RelinkedChainEnd);
        }
        if this_tag == that_tag {
            error!("linking chain ends {} and {} of type {:?}", this, that, this_tag);
            return Err(SweepError::SameTypeChainLink);
        }
        let (enter, exit) = if this_tag == EdgeTag::Enter {
            (this, that)
        } else {
            (that, this)
        };

        self.ends[this].etag = EdgeTag::Ignore;
        self.ends[that].etag = EdgeTag::Ignore;

        let enter_tail = self.ends[enter].tail;
        self.links[enter_tail].next = Some(self.ends[exit].head);
        self.ends[enter].tail = self.ends[exit].tail;
        if self.ends[this].partner == Some(that) {
            return Ok(Some(self.ends[enter].head));
        }

        // splice into one end of the contour formed by the two partners
        let (other_enter, other_exit) = match (self.ends[exit].partner, self.ends[enter].partner) {
            (Some(a), Some(b)) => (a, b),
            _ => return Err(SweepError::RelinkedChainEnd),
        };
        self.ends[other_enter].partner = Some(other_exit);
        self.ends[other_exit].partner = Some(other_enter);
        let enter_head = self.ends[enter].head;
        let enter_tail = self.ends[enter].tail;
        let other_enter_head = self.ends[other_enter].head;
        if self.links[enter_head].y_top() < self.links[other_enter_head].y_top() {
            self.links[enter_tail].next = Some(other_enter_head);
            self.ends[other_enter].head = enter_head;
        } else {
            let other_exit_tail = self.ends[other_exit].tail;
            self.links[other_exit_tail].next = Some(enter_head);
            self.ends[other_exit].tail = enter_tail;
        }
        Ok(None)
    }

    /// Reconcile the links emitted for one row (ordered by x) with the open chain ends.
    ///
    /// Chains or link pairs that close an area at the same x are joined first, then whichever of
    /// the next chain or next link would otherwise be jumped over, every remaining link extends
    /// the chain end it lines up with.
    pub fn resolve_links(&mut self, row_links: &[LinkId]) -> Result<(), SweepError> {
        if row_links.len() & 1 != 0 {
            error!("odd number of new curve links: {}", row_links.len());
            return Err(SweepError::OddLinkCount(row_links.len()));
        }
        if self.chains.len() & 1 != 0 {
            error!("odd number of open chain ends: {}", self.chains.len());
            return Err(SweepError::OddChainCount(self.chains.len()));
        }

        let endlist: Vec<Option<ChainId>> = self
            .chains
            .drain(..)
            .map(Some)
            .chain([None, None])
            .collect();
        let linklist: Vec<Option<LinkId>> =
            row_links.iter().copied().map(Some).chain([None, None]).collect();

        let mut curchain = 0;
        let mut curlink = 0;
        let mut chain = endlist[0];
        let mut nextchain = endlist[1];
        let mut link = linklist[0];
        let mut nextlink = linklist[1];
        while chain.is_some() || link.is_some() {
            // only one kind left
            let mut connectchains = link.is_none();
            let mut connectlinks = chain.is_none();

            if let (false, false, Some(c), Some(l)) = (connectchains, connectlinks, chain, link) {
                // close off an area at the same x
                connectchains = curchain & 1 == 0
                    && nextchain.map_or(false, |n| self.chain_x(c) == self.chain_x(n));
                connectlinks = curlink & 1 == 0
                    && nextlink.map_or(false, |n| {
                        self.links[l].x_top() == self.links[n].x_top()
                    });

                if !connectchains && !connectlinks {
                    // connect whatever would be skipped over otherwise
                    let cx = self.chain_x(c);
                    let lx = self.links[l].x_top();
                    connectchains = cx < lx
                        && nextchain.map_or(false, |n| obstructs(self.chain_x(n), lx, curchain));
                    connectlinks = lx < cx
                        && nextlink
                            .map_or(false, |n| obstructs(self.links[n].x_top(), cx, curlink));
                }
            }

            if connectchains {
                if let (Some(c), Some(n)) = (chain, nextchain) {
                    if let Some(subcurve) = self.link_to(c, n)? {
                        self.subcurves.push(subcurve);
                    }
                } else {
                    error!("unpaired open chain end at position {}", curchain);
                    return Err(SweepError::OddChainCount(curchain + 1));
                }
                curchain += 2;
                chain = endlist[curchain];
                nextchain = endlist[curchain + 1];
            }
            if connectlinks {
                if let (Some(l), Some(n)) = (link, nextlink) {
                    let open = self.new_chain_end(l, None);
                    let close = self.new_chain_end(n, Some(open));
                    self.ends[open].partner = Some(close);
                    self.chains.push(open);
                    self.chains.push(close);
                } else {
                    error!("unpaired curve link at position {}", curlink);
                    return Err(SweepError::OddLinkCount(curlink + 1));
                }
                curlink += 2;
                link = linklist[curlink];
                nextlink = linklist[curlink + 1];
            }
            if !connectchains && !connectlinks {
                if let (Some(c), Some(l)) = (chain, link) {
                    self.chain_add_link(c, l);
                    self.chains.push(c);
                }
                curchain += 1;
                chain = nextchain;
                nextchain = endlist[curchain + 1];
                curlink += 1;
                link = nextlink;
                nextlink = linklist[curlink + 1];
            }
        }

        if self.chains.len() & 1 != 0 {
            error!("odd number of open chain ends after resolving: {}", self.chains.len());
            return Err(SweepError::OddChainCount(self.chains.len()));
        }
        Ok(())
    }

    /// Pair off all open chain ends into closed contours.
    pub fn finalize_sub_curves(&mut self) -> Result<(), SweepError> {
        let n = self.chains.len();
        if n == 0 {
            return Ok(());
        }
        if n & 1 != 0 {
            error!("odd number of open chain ends: {}", n);
            return Err(SweepError::OddChainCount(n));
        }
        let chains = std::mem::take(&mut self.chains);
        for pair in chains.chunks_exact(2) {
            if let Some(subcurve) = self.link_to(pair[0], pair[1])? {
                self.subcurves.push(subcurve);
            }
        }
        Ok(())
    }

    /// Emit every closed contour as a moveto followed by its pieces, merging consecutive links
    /// on the same curve.
    pub fn into_curves(self) -> Vec<Curve<T>> {
        let mut result = Vec::with_capacity(self.links.len() + self.subcurves.len());
        for &head in &self.subcurves {
            let mut link = self.links[head].clone();
            result.push(link.move_to());
            let mut next = link.next;
            while let Some(id) = next {
                let next_link = &self.links[id];
                if !link.absorb(next_link) {
                    result.push(link.sub_curve());
                    link = next_link.clone();
                }
                next = next_link.next;
            }
            result.push(link.sub_curve());
        }
        result
    }
}
