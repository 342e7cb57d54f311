use cag_area::{
    core::math::vec2,
    path::{PathCommand, WindingRule},
    region::Region,
};
use rand::Rng;

/// Cubic control point distance for approximating a quarter circle.
pub const KAPPA: f64 = 0.552_284_749_830_793_4;

pub fn rect_commands(x: f64, y: f64, w: f64, h: f64) -> Vec<PathCommand<f64>> {
    polygon_commands(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
}

pub fn polygon_commands(points: &[(f64, f64)]) -> Vec<PathCommand<f64>> {
    let mut cmds = Vec::with_capacity(points.len() + 1);
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            cmds.push(PathCommand::MoveTo(vec2(x, y)));
        } else {
            cmds.push(PathCommand::LineTo(vec2(x, y)));
        }
    }
    cmds.push(PathCommand::Close);
    cmds
}

/// Circle made of four cubics, travelling clockwise in y down coordinates.
pub fn circle_commands(cx: f64, cy: f64, r: f64) -> Vec<PathCommand<f64>> {
    let k = KAPPA * r;
    let p = |x: f64, y: f64| vec2(cx + x, cy + y);
    vec![
        PathCommand::MoveTo(p(r, 0.0)),
        PathCommand::CubicTo(p(r, k), p(k, r), p(0.0, r)),
        PathCommand::CubicTo(p(-k, r), p(-r, k), p(-r, 0.0)),
        PathCommand::CubicTo(p(-r, -k), p(-k, -r), p(0.0, -r)),
        PathCommand::CubicTo(p(k, -r), p(r, -k), p(r, 0.0)),
        PathCommand::Close,
    ]
}

/// Lens shape bounded by two quadratics.
pub fn lens_commands(x0: f64, x1: f64, y: f64, bulge: f64) -> Vec<PathCommand<f64>> {
    let mid = (x0 + x1) / 2.0;
    vec![
        PathCommand::MoveTo(vec2(x0, y)),
        PathCommand::QuadTo(vec2(mid, y - bulge), vec2(x1, y)),
        PathCommand::QuadTo(vec2(mid, y + bulge), vec2(x0, y)),
        PathCommand::Close,
    ]
}

pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Region<f64> {
    Region::from_rect(x, y, w, h)
}

pub fn circle(cx: f64, cy: f64, r: f64) -> Region<f64> {
    Region::from_path(circle_commands(cx, cy, r), WindingRule::NonZero).unwrap()
}

pub fn polygon(points: &[(f64, f64)]) -> Region<f64> {
    Region::from_path(polygon_commands(points), WindingRule::NonZero).unwrap()
}

/// Random shape kinds matching the combining benchmark.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RandomShape {
    Triangle,
    Quad,
    Cubic,
}

/// Random open path (implicitly closed) with its origin in `[0, extent)` and every point within
/// `size` of the origin.
pub fn random_shape_commands<R: Rng>(
    rng: &mut R,
    kind: RandomShape,
    extent: f64,
    size: f64,
) -> Vec<PathCommand<f64>> {
    let x = rng.gen::<f64>() * extent;
    let y = rng.gen::<f64>() * extent;
    let mut p = || vec2(x + size * rng.gen::<f64>(), y + size * rng.gen::<f64>());
    let start = p();
    match kind {
        RandomShape::Triangle => {
            let (a, b) = (p(), p());
            vec![
                PathCommand::MoveTo(start),
                PathCommand::LineTo(a),
                PathCommand::LineTo(b),
            ]
        }
        RandomShape::Quad => {
            let (c, e) = (p(), p());
            vec![PathCommand::MoveTo(start), PathCommand::QuadTo(c, e)]
        }
        RandomShape::Cubic => {
            let (c1, c2, e) = (p(), p(), p());
            vec![PathCommand::MoveTo(start), PathCommand::CubicTo(c1, c2, e)]
        }
    }
}

/// Random simple or self intersecting polygon with `n` vertexes in `[0, extent)`.
pub fn random_polygon<R: Rng>(rng: &mut R, n: usize, extent: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|_| (rng.gen::<f64>() * extent, rng.gen::<f64>() * extent))
        .collect()
}
