//! Mathematical utilities for the algorithm

/// Color type, distance and HSV conversion
pub mod color;
