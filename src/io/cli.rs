//! Command-line interface for growing an all-colors image

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::executor::{GrowthEngine, GrowthOutcome};
use crate::algorithm::palette::PaletteConfig;
use crate::io::configuration::{
    DEFAULT_BLUE_LEVELS, DEFAULT_GREEN_LEVELS, DEFAULT_HEIGHT, DEFAULT_OUTPUT_DIR,
    DEFAULT_RED_LEVELS, DEFAULT_SEED, DEFAULT_SNAPSHOT_EVERY, DEFAULT_SPREAD, DEFAULT_WIDTH,
    GIF_FRAME_DELAY_MS, GrowthConfig,
};
use crate::io::error::Result;
use crate::io::image::PngSequence;
use crate::io::progress::ProgressReporter;
use crate::io::seeds::{SeedLayout, SeedSource};
use crate::io::visualization::GifRecorder;

#[derive(Parser, Debug)]
#[command(name = "allcolors")]
#[command(
    author,
    version,
    about = "Grow an image in which every pixel has a different color"
)]
/// Command-line arguments for the growth tool
pub struct Cli {
    /// Preset seed count (1-4) or path to a seed image whose non-black pixels are seeds
    #[arg(value_name = "SEEDS")]
    pub seeds: SeedSource,

    /// Canvas width for preset seeds
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Canvas height for preset seeds
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Neighborhood radius used for scoring and frontier expansion
    #[arg(long, default_value_t = DEFAULT_SPREAD)]
    pub spread: u32,

    /// Placements between snapshots
    #[arg(short = 'n', long, default_value_t = DEFAULT_SNAPSHOT_EVERY)]
    pub snapshot_every: usize,

    /// Directory numbered snapshots are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Red channel subdivisions
    #[arg(long, default_value_t = DEFAULT_RED_LEVELS)]
    pub red_levels: u16,

    /// Green channel subdivisions
    #[arg(long, default_value_t = DEFAULT_GREEN_LEVELS)]
    pub green_levels: u16,

    /// Blue channel subdivisions
    #[arg(long, default_value_t = DEFAULT_BLUE_LEVELS)]
    pub blue_levels: u16,

    /// Write snapshots without the gap-filling pass
    #[arg(long)]
    pub raw: bool,

    /// Also record every snapshot into an animated GIF at this path
    #[arg(long, value_name = "GIF")]
    pub animate: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Whether snapshots pass through the gap-filling pass
    pub const fn embellish(&self) -> bool {
        !self.raw
    }

    /// Growth parameters taken from the arguments
    pub const fn growth_config(&self) -> GrowthConfig {
        GrowthConfig {
            seed: self.seed,
            spread: self.spread,
            snapshot_every: self.snapshot_every,
            palette: PaletteConfig {
                red_levels: self.red_levels,
                green_levels: self.green_levels,
                blue_levels: self.blue_levels,
            },
        }
    }

    /// Canvas size requested for presets, falling back to the defaults
    pub fn canvas_size(&self) -> (usize, usize) {
        (
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }
}

/// Resolves seeds, runs the engine and writes its output
pub struct GrowthRunner {
    cli: Cli,
}

impl GrowthRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run to completion
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The seed source or growth parameters are invalid
    /// - A snapshot or the animation cannot be written
    // Allow print for user feedback when dimension flags do not apply
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<GrowthOutcome> {
        let (width, height) = self.cli.canvas_size();
        let layout = SeedLayout::resolve(&self.cli.seeds, width, height)?;

        if matches!(self.cli.seeds, SeedSource::Image(_))
            && (self.cli.width.is_some() || self.cli.height.is_some())
            && !self.cli.quiet
        {
            eprintln!(
                "Ignoring --width/--height: canvas size comes from the seed image ({}x{})",
                layout.width, layout.height
            );
        }

        let config = self.cli.growth_config();
        let mut engine = GrowthEngine::new(config, layout.width, layout.height, &layout.seeds)?;

        let mut progress = if self.cli.should_show_progress() {
            ProgressReporter::new(engine.palette().len(), config.snapshot_every)
        } else {
            ProgressReporter::hidden()
        };
        let mut snapshots = PngSequence::new(&self.cli.output, self.cli.embellish());
        let mut animation = self
            .cli
            .animate
            .as_deref()
            .map(|path| GifRecorder::create(path, GIF_FRAME_DELAY_MS, self.cli.embellish()))
            .transpose()?;

        let outcome = engine.run((&mut progress, (&mut snapshots, &mut animation)))?;

        if let Some(recorder) = animation {
            recorder.finish()?;
        }
        progress.finish(&outcome);

        Ok(outcome)
    }
}
