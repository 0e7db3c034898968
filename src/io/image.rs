//! Numbered PNG snapshots of the canvas

use std::path::{Path, PathBuf};

use crate::algorithm::executor::{SnapshotProgress, SnapshotSink};
use crate::io::configuration::{OUTPUT_INDEX_WIDTH, OUTPUT_PREFIX};
use crate::io::embellish::embellish;
use crate::io::error::{Result, WithPath};
use crate::spatial::canvas::Canvas;

/// Save the canvas as a PNG; unset cells are black
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path, embellished: bool) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let img = if embellished {
        embellish(canvas)
    } else {
        canvas.to_rgb_image()
    };
    img.save(output_path).export_path(output_path)
}

/// Writes each snapshot to `<dir>/image<NNNN>.png`
#[derive(Debug, Clone)]
pub struct PngSequence {
    directory: PathBuf,
    embellished: bool,
    written: Vec<PathBuf>,
}

impl PngSequence {
    /// Create a sink writing into `directory`
    pub fn new(directory: impl Into<PathBuf>, embellished: bool) -> Self {
        Self {
            directory: directory.into(),
            embellished,
            written: Vec::new(),
        }
    }

    /// Path of the snapshot with one-based number `index`
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.directory.join(format!(
            "{OUTPUT_PREFIX}{index:0width$}.png",
            width = OUTPUT_INDEX_WIDTH
        ))
    }

    /// Files written so far, in order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SnapshotSink for PngSequence {
    fn capture(&mut self, canvas: &Canvas, progress: &SnapshotProgress) -> Result<()> {
        let path = self.frame_path(progress.index);
        export_canvas_as_png(canvas, &path, self.embellished)?;
        self.written.push(path);
        Ok(())
    }
}
