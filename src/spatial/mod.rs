//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Grid coordinates
//! - The write-once canvas
//! - The frontier of open positions

/// Write-once pixel grid
pub mod canvas;
/// Open border positions and neighborhood expansion
pub mod frontier;
/// Column/row coordinates
pub mod position;

pub use canvas::Canvas;
pub use frontier::Frontier;
pub use position::Position;
