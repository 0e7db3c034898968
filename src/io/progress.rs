//! Progress display for a growth run

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::algorithm::executor::{GrowthOutcome, SnapshotProgress, SnapshotSink, Termination};
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::error::Result;
use crate::spatial::canvas::Canvas;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks placed colors against the palette size
///
/// Advances on every snapshot. The message shows the snapshot number against
/// the expected total, the frontier size and the unpainted cell count.
pub struct ProgressReporter {
    bar: ProgressBar,
    expected_snapshots: usize,
}

impl ProgressReporter {
    /// Create a visible bar over `palette_len` colors
    pub fn new(palette_len: usize, snapshot_every: usize) -> Self {
        let bar = ProgressBar::new(palette_len as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self {
            bar,
            expected_snapshots: palette_len / snapshot_every.max(1),
        }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            expected_snapshots: 0,
        }
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Last message shown
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Close the bar with a summary of the outcome
    pub fn finish(&self, outcome: &GrowthOutcome) {
        self.bar.finish_with_message(summary(outcome));
    }
}

impl SnapshotSink for ProgressReporter {
    fn capture(&mut self, canvas: &Canvas, progress: &SnapshotProgress) -> Result<()> {
        self.bar.set_position(progress.placed as u64);
        self.bar.set_message(format!(
            "snapshot {}/{} frontier {} unpainted {}",
            progress.index,
            self.expected_snapshots,
            progress.frontier_len,
            canvas.unset_count()
        ));
        Ok(())
    }
}

/// One-line description of how a run ended
pub fn summary(outcome: &GrowthOutcome) -> String {
    match outcome.termination {
        Termination::PaletteExhausted => format!("placed all {} colors", outcome.placed),
        Termination::FrontierExhausted => format!(
            "no open positions left after {} colors, {} unplaced",
            outcome.placed, outcome.unplaced
        ),
    }
}
