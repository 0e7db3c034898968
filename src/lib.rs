//! Greedy all-colors image growth
//!
//! Every color of a coarse RGB grid is placed exactly once. Colors are taken
//! in hue order and each goes to the open border position whose painted
//! neighbors it matches best, so the image grows outward from its seeds with
//! smoothly drifting hue.

#![forbid(unsafe_code)]

/// Growth engine, palette ordering, scoring and tie-breaking
pub mod algorithm;
/// Seeds, snapshots, configuration and error handling
pub mod io;
/// Color math
pub mod math;
/// Canvas, positions and the frontier of open positions
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
