//! Rectangle range queries against a curve list.
//!
//! A rectangle query accumulates the even-odd y ranges covered by curves passing to the left of
//! the rectangle. If no curve passes through the rectangle's interior the result decides both
//! containment (the left crossings cover the full height exactly once) and intersection (some
//! left crossing range exists).
use crate::{core::traits::Real, curve::Curve};

/// Even-odd y range accumulator for one query rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Crossings<T = f64> {
    xlo: T,
    ylo: T,
    xhi: T,
    yhi: T,
    /// Sorted, disjoint `[start, end]` pairs stored flat.
    ranges: Vec<T>,
}

impl<T> Crossings<T>
where
    T: Real,
{
    pub fn new(xlo: T, ylo: T, xhi: T, yhi: T) -> Self {
        Self {
            xlo,
            ylo,
            xhi,
            yhi,
            ranges: Vec::new(),
        }
    }

    #[inline]
    pub fn x_lo(&self) -> T {
        self.xlo
    }

    #[inline]
    pub fn y_lo(&self) -> T {
        self.ylo
    }

    #[inline]
    pub fn x_hi(&self) -> T {
        self.xhi
    }

    #[inline]
    pub fn y_hi(&self) -> T {
        self.yhi
    }

    /// Returns `true` if no y range has an odd crossing count.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns `true` if a single odd range spans all of `[ylo, yhi]`.
    #[inline]
    pub fn covers(&self, ylo: T, yhi: T) -> bool {
        self.ranges.len() == 2 && self.ranges[0] <= ylo && self.ranges[1] >= yhi
    }

    /// Sorted, disjoint `(start, end)` y ranges with an odd crossing count.
    pub fn ranges(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.ranges.chunks_exact(2).map(|r| (r[0], r[1]))
    }

    /// Toggle the parity of `[ystart, yend]`.
    ///
    /// Overlapping parts of existing ranges cancel out, touching ranges merge.
    pub fn record(&mut self, ystart: T, yend: T) {
        if ystart >= yend {
            return;
        }
        let (mut ystart, mut yend) = (ystart, yend);
        let limit = self.ranges.len();

        // ranges entirely above the new one are untouched
        let mut from = 0;
        while from < limit && ystart > self.ranges[from + 1] {
            from += 2;
        }

        let mut merged = Vec::with_capacity(limit + 4);
        merged.extend_from_slice(&self.ranges[..from]);
        while from < limit {
            let yrlo = self.ranges[from];
            let yrhi = self.ranges[from + 1];
            from += 2;
            if yend < yrlo {
                // new range fits entirely before this one, carry the existing one forward
                merged.push(ystart);
                merged.push(yend);
                ystart = yrlo;
                yend = yrhi;
                continue;
            }

            let (yll, mut ylh) = if ystart < yrlo {
                (ystart, yrlo)
            } else {
                (yrlo, ystart)
            };
            let (mut yhl, yhh) = if yend < yrhi { (yend, yrhi) } else { (yrhi, yend) };
            if ylh == yhl {
                ystart = yll;
                yend = yhh;
            } else {
                if ylh > yhl {
                    std::mem::swap(&mut ylh, &mut yhl);
                }
                if yll != ylh {
                    merged.push(yll);
                    merged.push(ylh);
                }
                ystart = yhl;
                yend = yhh;
            }
            if ystart >= yend {
                break;
            }
        }
        merged.extend_from_slice(&self.ranges[from..]);
        if ystart < yend {
            merged.push(ystart);
            merged.push(yend);
        }
        self.ranges = merged;
    }
}

/// Result of [find_crossings].
#[derive(Debug, Clone, PartialEq)]
pub enum RectCrossings<T = f64> {
    /// Some curve passes through the interior of the rectangle, the rectangle is neither fully
    /// inside nor fully outside.
    Interior,
    /// No curve passes through the interior, the accumulated crossings to the left decide.
    Ranges(Crossings<T>),
}

impl<T> RectCrossings<T>
where
    T: Real,
{
    /// Returns `true` if the rectangle is fully enclosed by the curves.
    pub fn covers(&self, ylo: T, yhi: T) -> bool {
        match self {
            RectCrossings::Interior => false,
            RectCrossings::Ranges(c) => c.covers(ylo, yhi),
        }
    }

    /// Returns `true` if the rectangle overlaps the enclosed area.
    pub fn intersects(&self) -> bool {
        match self {
            RectCrossings::Interior => true,
            RectCrossings::Ranges(c) => !c.is_empty(),
        }
    }
}

/// Query the open rectangle `(xlo, ylo)` to `(xhi, yhi)` against `curves`.
pub fn find_crossings<T>(curves: &[Curve<T>], xlo: T, ylo: T, xhi: T, yhi: T) -> RectCrossings<T>
where
    T: Real,
{
    let mut crossings = Crossings::new(xlo, ylo, xhi, yhi);
    for c in curves {
        if c.accumulate_crossings(&mut crossings) {
            return RectCrossings::Interior;
        }
    }
    RectCrossings::Ranges(crossings)
}
