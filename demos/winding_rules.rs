//! Build the same self overlapping outline under both winding rules and probe a few points.
mod common;

use cag_area::{core::math::vec2, path::PathCommand, Region, RegionError, WindingRule};
use common::{area, print_path};
use log::info;

fn main() -> Result<(), RegionError> {
    env_logger::init();

    // five pointed star, the center pentagon is wound twice
    let star = [(6.0, -1.0), (9.5, 11.0), (-0.5, 3.5), (12.5, 3.5), (2.5, 11.0)];
    let mut cmds: Vec<_> = star
        .iter()
        .map(|&(x, y)| PathCommand::LineTo(vec2(x, y)))
        .collect();
    cmds[0] = PathCommand::MoveTo(vec2(star[0].0, star[0].1));
    cmds.push(PathCommand::Close);

    let probes = [(6.0, 5.0), (6.0, 1.0), (0.0, 0.0)];
    for rule in [WindingRule::NonZero, WindingRule::EvenOdd] {
        let region = Region::from_path(cmds.iter().copied(), rule)?;
        info!("{:?}: area {:.3}", rule, area(&region)?);
        for (x, y) in probes {
            println!("{:?} contains ({}, {}): {}", rule, x, y, region.contains_point(x, y));
        }
        print_path(&format!("{:?}", rule), &region);
    }

    Ok(())
}
