//! Core module has common/shared math and trait modules used by the curve, sweep and region
//! modules.
pub mod math;
pub mod traits;
