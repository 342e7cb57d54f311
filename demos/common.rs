//! Shared helpers for the demos.
#![allow(dead_code)]

use cag_area::{
    core::math::vec2,
    path::{FlattenOptions, PathCommand},
    Region,
};

/// Control point distance for approximating a quarter circle with a cubic.
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Closed circle outline made of four cubics, counter clockwise from the right most point.
pub fn circle_commands(cx: f64, cy: f64, r: f64) -> Vec<PathCommand<f64>> {
    let k = r * KAPPA;
    vec![
        PathCommand::MoveTo(vec2(cx + r, cy)),
        PathCommand::CubicTo(vec2(cx + r, cy + k), vec2(cx + k, cy + r), vec2(cx, cy + r)),
        PathCommand::CubicTo(vec2(cx - k, cy + r), vec2(cx - r, cy + k), vec2(cx - r, cy)),
        PathCommand::CubicTo(vec2(cx - r, cy - k), vec2(cx - k, cy - r), vec2(cx, cy - r)),
        PathCommand::CubicTo(vec2(cx + k, cy - r), vec2(cx + r, cy - k), vec2(cx + r, cy)),
        PathCommand::Close,
    ]
}

/// Print the boundary of `region` one command per line.
pub fn print_path(name: &str, region: &Region<f64>) {
    println!("{}:", name);
    for cmd in region.path_iter(None) {
        match cmd {
            PathCommand::MoveTo(p) => println!("  M {:.3} {:.3}", p.x, p.y),
            PathCommand::LineTo(p) => println!("  L {:.3} {:.3}", p.x, p.y),
            PathCommand::QuadTo(c, p) => {
                println!("  Q {:.3} {:.3} {:.3} {:.3}", c.x, c.y, p.x, p.y)
            }
            PathCommand::CubicTo(c1, c2, p) => println!(
                "  C {:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
                c1.x, c1.y, c2.x, c2.y, p.x, p.y
            ),
            PathCommand::Close => println!("  Z"),
        }
    }
}

/// Enclosed area from the flattened boundary.
pub fn area(region: &Region<f64>) -> Result<f64, cag_area::RegionError> {
    let mut total = 0.0;
    let mut start = vec2(0.0, 0.0);
    let mut prev = start;
    for cmd in region.flattened_path(None, &FlattenOptions::new())? {
        match cmd {
            PathCommand::MoveTo(p) => {
                start = p;
                prev = p;
            }
            PathCommand::LineTo(p) => {
                total += prev.perp_dot(p);
                prev = p;
            }
            PathCommand::Close => {
                total += prev.perp_dot(start);
                prev = start;
            }
            PathCommand::QuadTo(..) | PathCommand::CubicTo(..) => {}
        }
    }
    // outer contours and holes wind in opposite directions
    Ok((total / 2.0).abs())
}
