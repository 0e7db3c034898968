//! Animated GIF of the growth, streamed one snapshot at a time

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbaImage};

use crate::algorithm::executor::{SnapshotProgress, SnapshotSink};
use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::embellish::embellish;
use crate::io::error::{Result, WithPath};
use crate::spatial::canvas::Canvas;

/// Appends every snapshot to a looping GIF
///
/// Frames are encoded as they arrive, so memory stays flat however long the
/// run. Call [`GifRecorder::finish`] to hold the last frame and flush.
pub struct GifRecorder {
    encoder: GifEncoder<BufWriter<File>>,
    path: PathBuf,
    frame_delay_ms: u32,
    embellished: bool,
    last_frame: Option<RgbaImage>,
    frame_count: usize,
}

impl GifRecorder {
    /// Create the output file and encoder
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The parent directory or file cannot be created
    /// - The encoder rejects the repeat setting
    pub fn create(path: &Path, frame_delay_ms: u32, embellished: bool) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
        }
        let file = File::create(path).with_path(path, "create file")?;

        let mut encoder = GifEncoder::new(BufWriter::new(file));
        encoder.set_repeat(Repeat::Infinite).export_path(path)?;

        Ok(Self {
            encoder,
            path: path.to_path_buf(),
            frame_delay_ms,
            embellished,
            last_frame: None,
            frame_count: 0,
        })
    }

    /// Frames encoded so far, excluding the final hold frame
    pub const fn frame_count(&self) -> usize {
        self.frame_count
    }

    fn encode(&mut self, image: RgbaImage, delay_ms: u32) -> Result<()> {
        let frame = Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
        self.encoder.encode_frame(frame).export_path(&self.path)
    }

    /// Repeat the last frame with a long delay and flush the file
    ///
    /// # Errors
    ///
    /// Returns an error if encoding the hold frame fails
    pub fn finish(mut self) -> Result<PathBuf> {
        if let Some(last) = self.last_frame.take() {
            let hold = self.frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD);
            self.encode(last, hold)?;
        }
        Ok(self.path)
    }
}

impl SnapshotSink for GifRecorder {
    fn capture(&mut self, canvas: &Canvas, _progress: &SnapshotProgress) -> Result<()> {
        let rgb = if self.embellished {
            embellish(canvas)
        } else {
            canvas.to_rgb_image()
        };
        let rgba = DynamicImage::ImageRgb8(rgb).to_rgba8();
        self.encode(rgba.clone(), self.frame_delay_ms)?;
        self.last_frame = Some(rgba);
        self.frame_count += 1;
        Ok(())
    }
}
