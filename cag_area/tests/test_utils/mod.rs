#![allow(dead_code)]

mod reference;
mod shapes;

pub use reference::*;
pub use shapes::*;

use cag_area::{core::traits::FuzzyEq, AreaOps, Region};
use static_aabb2d_index::AABB;

/// Fuzzy compare AABB values
pub fn aabb_fuzzy_eq_eps(a: &AABB<f64>, b: &AABB<f64>, eps: f64) -> bool {
    a.min_x.fuzzy_eq_eps(b.min_x, eps)
        && a.min_y.fuzzy_eq_eps(b.min_y, eps)
        && a.max_x.fuzzy_eq_eps(b.max_x, eps)
        && a.max_y.fuzzy_eq_eps(b.max_y, eps)
}

/// Returns `true` if `inner` lies within `outer` grown by `eps` on every side.
pub fn aabb_within(inner: &AABB<f64>, outer: &AABB<f64>, eps: f64) -> bool {
    inner.min_x >= outer.min_x - eps
        && inner.min_y >= outer.min_y - eps
        && inner.max_x <= outer.max_x + eps
        && inner.max_y <= outer.max_y + eps
}

/// Smallest AABB containing both.
pub fn aabb_union(a: &AABB<f64>, b: &AABB<f64>) -> AABB<f64> {
    AABB::new(
        a.min_x.min(b.min_x),
        a.min_y.min(b.min_y),
        a.max_x.max(b.max_x),
        a.max_y.max(b.max_y),
    )
}

/// Sample point that disagreed between a region and the reference.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mismatch {
    pub x: f64,
    pub y: f64,
    pub in_region: bool,
    pub in_reference: bool,
}

/// Rasterize both areas on an `n` by `n` grid of cell centers over `extents` and collect every
/// sample where they disagree.
///
/// Samples closer than `boundary_eps` to any reference boundary are skipped since the reference
/// only knows the boundary up to its flattening tolerance.
pub fn sample_mismatches(
    region: &Region<f64>,
    reference: &ReferenceArea,
    extents: &AABB<f64>,
    n: usize,
    boundary_eps: f64,
) -> Vec<Mismatch> {
    let mut result = Vec::new();
    let dx = (extents.max_x - extents.min_x) / n as f64;
    let dy = (extents.max_y - extents.min_y) / n as f64;
    for i in 0..n {
        let y = extents.min_y + (i as f64 + 0.5) * dy;
        for j in 0..n {
            let x = extents.min_x + (j as f64 + 0.5) * dx;
            if reference.boundary_distance(x, y) < boundary_eps {
                continue;
            }
            let in_region = region.contains_point(x, y);
            let in_reference = reference.contains_point(x, y);
            if in_region != in_reference {
                result.push(Mismatch {
                    x,
                    y,
                    in_region,
                    in_reference,
                });
            }
        }
    }
    result
}

/// Grown bounds of all operands for sampling.
pub fn sample_extents<'a>(regions: impl IntoIterator<Item = &'a Region<f64>>) -> AABB<f64> {
    let mut result: Option<AABB<f64>> = None;
    for b in regions.into_iter().filter_map(|r| r.bounds()) {
        result = Some(match result {
            Some(r) => aabb_union(&r, &b),
            None => b,
        });
    }
    let r = result.unwrap_or_else(|| AABB::new(0.0, 0.0, 1.0, 1.0));
    AABB::new(r.min_x - 1.0, r.min_y - 1.0, r.max_x + 1.0, r.max_y + 1.0)
}

/// Assert `region` and `reference` agree on a sample grid, printing the first disagreements.
pub fn assert_matches_reference(region: &Region<f64>, reference: &ReferenceArea, context: &str) {
    let extents = match (region.bounds(), AreaOps::bounds(reference)) {
        (Some(a), Some(b)) => aabb_union(&a, &b),
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return,
    };
    let extents = AABB::new(
        extents.min_x - 0.5,
        extents.min_y - 0.5,
        extents.max_x + 0.5,
        extents.max_y + 0.5,
    );
    let mismatches = sample_mismatches(region, reference, &extents, 64, 1e-3);
    assert!(
        mismatches.is_empty(),
        "{}: {} sample mismatches, first: {:?}",
        context,
        mismatches.len(),
        &mismatches[..mismatches.len().min(5)]
    );
}

/// Enclosed area of a region from its flattened boundary (shoelace formula per contour).
pub fn region_area(region: &Region<f64>) -> f64 {
    use cag_area::path::{FlattenOptions, PathCommand};
    let options = FlattenOptions {
        tolerance: 1e-4,
        recursion_limit: 16,
    };
    let mut total = 0.0;
    let mut start = None;
    let mut prev = None;
    for cmd in region.flattened_path(None, &options).unwrap() {
        match cmd {
            PathCommand::MoveTo(p) => {
                start = Some(p);
                prev = Some(p);
            }
            PathCommand::LineTo(p) => {
                if let Some(q) = prev {
                    total += q.x * p.y - p.x * q.y;
                }
                prev = Some(p);
            }
            PathCommand::Close => {
                if let (Some(q), Some(s)) = (prev, start) {
                    total += q.x * s.y - s.x * q.y;
                }
                prev = start;
            }
            _ => unreachable!("flattened path only has lines"),
        }
    }
    (total / 2.0).abs()
}
