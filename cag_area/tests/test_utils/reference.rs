use cag_area::{
    core::math::{seg_dist_squared, vec2, Vector2},
    path::{flatten, FlattenOptions, PathCommand, WindingRule},
    AreaOps, RegionError,
};
use static_aabb2d_index::AABB;

/// Flattening tolerance used for reference outlines.
pub const REFERENCE_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum BoolOp {
    Union,
    Difference,
    Intersection,
    Xor,
}

#[derive(Debug, Clone)]
enum Expr {
    Empty,
    Shape {
        contours: Vec<Vec<Vector2<f64>>>,
        rule: WindingRule,
        bounds: Option<AABB<f64>>,
    },
    Op(BoolOp, Box<Expr>, Box<Expr>),
}

/// Reference area implementation that never sweeps.
///
/// Keeps the boolean expression tree of the flattened input outlines and answers point queries
/// directly with winding numbers. Emptiness and equality are decided by sampling, so they are
/// only meaningful for shapes that are not thinner than the sampling grid.
#[derive(Debug, Clone)]
pub struct ReferenceArea {
    expr: Expr,
}

impl ReferenceArea {
    pub fn new() -> Self {
        Self { expr: Expr::Empty }
    }

    pub fn from_path<I>(commands: I, rule: WindingRule) -> Self
    where
        I: IntoIterator<Item = PathCommand<f64>>,
    {
        let options = FlattenOptions {
            tolerance: REFERENCE_TOLERANCE,
            recursion_limit: 16,
        };
        let mut contours: Vec<Vec<Vector2<f64>>> = Vec::new();
        for cmd in flatten(commands, &options) {
            match cmd {
                PathCommand::MoveTo(p) => contours.push(vec![p]),
                PathCommand::LineTo(p) => match contours.last_mut() {
                    Some(c) => c.push(p),
                    None => contours.push(vec![vec2(0.0, 0.0), p]),
                },
                PathCommand::Close => {
                    // closed implicitly when sampled, start a fresh contour at the same point
                    if let Some(start) = contours.last().and_then(|c| c.first().copied()) {
                        contours.push(vec![start]);
                    }
                }
                PathCommand::QuadTo(..) | PathCommand::CubicTo(..) => {
                    unreachable!("flatten only emits lines")
                }
            }
        }
        contours.retain(|c| c.len() > 2);

        let mut bounds: Option<AABB<f64>> = None;
        for p in contours.iter().flatten() {
            let b = bounds.get_or_insert(AABB::new(p.x, p.y, p.x, p.y));
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }

        Self {
            expr: Expr::Shape {
                contours,
                rule,
                bounds,
            },
        }
    }

    fn combine(&mut self, op: BoolOp, other: &Self) {
        let left = std::mem::replace(&mut self.expr, Expr::Empty);
        self.expr = Expr::Op(op, Box::new(left), Box::new(other.expr.clone()));
    }

    /// Distance from `(x, y)` to the closest reference boundary segment.
    pub fn boundary_distance(&self, x: f64, y: f64) -> f64 {
        boundary_dist_squared(&self.expr, vec2(x, y)).sqrt()
    }

    fn sample_grid(&self, extents: &AABB<f64>, n: usize) -> impl Iterator<Item = (f64, f64)> {
        let dx = (extents.max_x - extents.min_x) / n as f64;
        let dy = (extents.max_y - extents.min_y) / n as f64;
        let (x0, y0) = (extents.min_x, extents.min_y);
        (0..n).flat_map(move |i| {
            (0..n).map(move |j| (x0 + (j as f64 + 0.5) * dx, y0 + (i as f64 + 0.5) * dy))
        })
    }
}

impl Default for ReferenceArea {
    fn default() -> Self {
        Self::new()
    }
}

fn winding_number(contours: &[Vec<Vector2<f64>>], p: Vector2<f64>) -> i32 {
    let mut wn = 0;
    for c in contours {
        for i in 0..c.len() {
            let a = c[i];
            let b = c[(i + 1) % c.len()];
            let side = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
            if a.y <= p.y {
                if b.y > p.y && side > 0.0 {
                    wn += 1;
                }
            } else if b.y <= p.y && side < 0.0 {
                wn -= 1;
            }
        }
    }
    wn
}

fn expr_contains(expr: &Expr, p: Vector2<f64>) -> bool {
    match expr {
        Expr::Empty => false,
        Expr::Shape { contours, rule, .. } => {
            let wn = winding_number(contours, p);
            match rule {
                WindingRule::NonZero => wn != 0,
                WindingRule::EvenOdd => wn & 1 != 0,
            }
        }
        Expr::Op(op, a, b) => {
            let (ia, ib) = (expr_contains(a, p), expr_contains(b, p));
            match op {
                BoolOp::Union => ia || ib,
                BoolOp::Difference => ia && !ib,
                BoolOp::Intersection => ia && ib,
                BoolOp::Xor => ia != ib,
            }
        }
    }
}

/// Conservative (never too small) bounds of an expression.
fn expr_bounds(expr: &Expr) -> Option<AABB<f64>> {
    match expr {
        Expr::Empty => None,
        Expr::Shape { bounds, .. } => *bounds,
        Expr::Op(op, a, b) => {
            let (ba, bb) = (expr_bounds(a), expr_bounds(b));
            match op {
                BoolOp::Difference => ba,
                BoolOp::Intersection => match (ba, bb) {
                    (Some(a), Some(b)) => {
                        let r = AABB::new(
                            a.min_x.max(b.min_x),
                            a.min_y.max(b.min_y),
                            a.max_x.min(b.max_x),
                            a.max_y.min(b.max_y),
                        );
                        if r.min_x <= r.max_x && r.min_y <= r.max_y {
                            Some(r)
                        } else {
                            None
                        }
                    }
                    _ => None,
                },
                BoolOp::Union | BoolOp::Xor => match (ba, bb) {
                    (Some(a), Some(b)) => Some(super::aabb_union(&a, &b)),
                    (a, None) => a,
                    (None, b) => b,
                },
            }
        }
    }
}

fn boundary_dist_squared(expr: &Expr, p: Vector2<f64>) -> f64 {
    match expr {
        Expr::Empty => f64::INFINITY,
        Expr::Shape { contours, .. } => {
            let mut d = f64::INFINITY;
            for c in contours {
                for i in 0..c.len() {
                    let a = c[i];
                    let b = c[(i + 1) % c.len()];
                    d = d.min(seg_dist_squared(a, b, p));
                }
            }
            d
        }
        Expr::Op(_, a, b) => boundary_dist_squared(a, p).min(boundary_dist_squared(b, p)),
    }
}

const SAMPLE_COUNT: usize = 96;

impl AreaOps for ReferenceArea {
    type Num = f64;

    fn add(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(BoolOp::Union, other);
        Ok(())
    }

    fn subtract(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(BoolOp::Difference, other);
        Ok(())
    }

    fn intersect(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(BoolOp::Intersection, other);
        Ok(())
    }

    fn xor(&mut self, other: &Self) -> Result<(), RegionError> {
        self.combine(BoolOp::Xor, other);
        Ok(())
    }

    fn is_equal(&self, other: &Self) -> Result<bool, RegionError> {
        let mut diff = self.clone();
        diff.xor(other)?;
        Ok(diff.is_empty())
    }

    fn reset(&mut self) {
        self.expr = Expr::Empty;
    }

    fn is_empty(&self) -> bool {
        let extents = match expr_bounds(&self.expr) {
            Some(b) => b,
            None => return true,
        };
        !self
            .sample_grid(&extents, SAMPLE_COUNT)
            .any(|(x, y)| self.contains_point(x, y))
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        expr_contains(&self.expr, vec2(x, y))
    }

    fn bounds(&self) -> Option<AABB<f64>> {
        expr_bounds(&self.expr)
    }
}
