//! Growth constants and runtime configuration defaults

use crate::algorithm::palette::PaletteConfig;
use crate::io::error::{Result, invalid_parameter};

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 1;

/// Chebyshev radius of the neighborhood used for scoring and frontier expansion
pub const DEFAULT_SPREAD: u32 = 1;

// Scoring visits (2 * spread + 1)^2 cells per candidate
/// Largest accepted neighborhood radius
pub const MAX_SPREAD: u32 = 64;

/// Placements between snapshots
pub const DEFAULT_SNAPSHOT_EVERY: usize = 512;

/// Canvas width used by preset seed layouts
pub const DEFAULT_WIDTH: usize = 1920;
/// Canvas height used by preset seed layouts
pub const DEFAULT_HEIGHT: usize = 1080;

// Blue gets half the subdivisions of red and green
/// Red channel subdivisions
pub const DEFAULT_RED_LEVELS: u16 = 128;
/// Green channel subdivisions
pub const DEFAULT_GREEN_LEVELS: u16 = 128;
/// Blue channel subdivisions
pub const DEFAULT_BLUE_LEVELS: u16 = 64;

/// Cells seeded on each side of a preset center, horizontally and vertically
pub const PRESET_ARM_LENGTH: i32 = 5;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas dimension
pub const MAX_CANVAS_DIMENSION: usize = 16_384;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Output settings
/// Directory snapshots are written to
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// File name prefix of numbered snapshots
pub const OUTPUT_PREFIX: &str = "image";
/// Zero-padded width of the snapshot counter
pub const OUTPUT_INDEX_WIDTH: usize = 4;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Multiple of the frame delay the final GIF frame is held for
pub const FINAL_FRAME_HOLD: u32 = 25;

/// Parameters of a single growth run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Seed of the generator shared by palette ordering and tie-breaking
    pub seed: u64,
    /// Neighborhood radius for scoring and frontier expansion
    pub spread: u32,
    /// Placements between snapshots
    pub snapshot_every: usize,
    /// Palette subdivisions
    pub palette: PaletteConfig,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            spread: DEFAULT_SPREAD,
            snapshot_every: DEFAULT_SNAPSHOT_EVERY,
            palette: PaletteConfig::default(),
        }
    }
}

impl GrowthConfig {
    /// Reject parameters the engine cannot run with
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `spread` is outside `1..=MAX_SPREAD`,
    /// `snapshot_every` is zero, or a palette channel is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SPREAD).contains(&self.spread) {
            return Err(invalid_parameter(
                "spread",
                &self.spread,
                &format!("must be between 1 and {MAX_SPREAD}"),
            ));
        }
        if self.snapshot_every == 0 {
            return Err(invalid_parameter(
                "snapshot_every",
                &self.snapshot_every,
                &"must be at least 1",
            ));
        }
        self.palette.validate()
    }
}

/// Check canvas dimensions are positive and below `MAX_CANVAS_DIMENSION`
///
/// # Errors
///
/// Returns `InvalidParameter` for the first dimension out of range.
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 || value > MAX_CANVAS_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must be between 1 and {MAX_CANVAS_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
