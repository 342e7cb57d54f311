//! Combine a circle and a square with every boolean operation and print the results.
//!
//! Run with `RUST_LOG=debug` to see the sweep statistics.
mod common;

use cag_area::{Region, RegionError, WindingRule};
use common::{area, circle_commands, print_path};
use log::info;

fn main() -> Result<(), RegionError> {
    env_logger::init();

    let circle = Region::from_path(circle_commands(0.0, 0.0, 10.0), WindingRule::NonZero)?;
    let square = Region::from_rect(0.0, 0.0, 15.0, 15.0);
    info!(
        "operands: circle area {:.3}, square area {:.3}",
        area(&circle)?,
        area(&square)?
    );

    let ops: [(&str, fn(&mut Region, &Region) -> Result<(), RegionError>); 4] = [
        ("add", Region::add),
        ("subtract", Region::subtract),
        ("intersect", Region::intersect),
        ("xor", Region::xor),
    ];
    for (name, op) in ops {
        let mut result = circle.clone();
        op(&mut result, &square)?;
        info!(
            "{}: {} curves, area {:.3}, bounds {:?}",
            name,
            result.curves().len(),
            area(&result)?,
            result.bounds()
        );
        print_path(name, &result);
    }

    Ok(())
}
