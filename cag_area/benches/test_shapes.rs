use cag_area::{
    core::math::{vec2, Transform2D},
    path::PathCommand,
    Region, WindingRule,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random triangle, quadratic or cubic outline with its origin in `[0, 1000)` and every point
/// within 200 of the origin.
fn random_commands(rng: &mut StdRng, kind: usize) -> Vec<PathCommand<f64>> {
    let x = rng.gen::<f64>() * 1000.0;
    let y = rng.gen::<f64>() * 1000.0;
    let mut p = || vec2(x + 200.0 * rng.gen::<f64>(), y + 200.0 * rng.gen::<f64>());
    let start = PathCommand::MoveTo(p());
    match kind % 3 {
        0 => vec![start, PathCommand::LineTo(p()), PathCommand::LineTo(p())],
        1 => vec![start, PathCommand::QuadTo(p(), p())],
        _ => vec![start, PathCommand::CubicTo(p(), p(), p())],
    }
}

/// `count` random regions, each translated by up to 200 in both directions.
pub fn random_regions(count: usize, seed: u64) -> Vec<Region<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let cmds = random_commands(&mut rng, i);
            let t = Transform2D::translate(
                400.0 * rng.gen::<f64>() - 200.0,
                400.0 * rng.gen::<f64>() - 200.0,
            );
            let cmds = cmds.into_iter().map(|c| c.transformed(&t));
            Region::from_path(cmds, WindingRule::NonZero).unwrap()
        })
        .collect()
}

/// Combine regions with the repeating add, add, subtract pattern.
pub fn combine(regions: &[Region<f64>]) -> Region<f64> {
    let mut result = Region::new();
    for (i, r) in regions.iter().enumerate() {
        if i % 3 == 2 {
            result.subtract(r).unwrap();
        } else {
            result.add(r).unwrap();
        }
    }
    result
}
