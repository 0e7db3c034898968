//! Tests for PNG export and the numbered snapshot sequence

#[cfg(test)]
mod tests {
    use allcolors::algorithm::executor::{SnapshotProgress, SnapshotSink};
    use allcolors::io::image::{PngSequence, export_canvas_as_png};
    use allcolors::math::color::Color;
    use allcolors::spatial::canvas::Canvas;
    use allcolors::spatial::position::Position;
    use image::Rgb;
    use tempfile::TempDir;

    fn progress(index: usize) -> SnapshotProgress {
        SnapshotProgress {
            index,
            placed: 1,
            remaining_colors: 0,
            frontier_len: 0,
        }
    }

    // Tests snapshot names are zero-padded to four digits
    #[test]
    fn test_frame_path() {
        let sequence = PngSequence::new("out", false);
        assert_eq!(
            sequence.frame_path(1),
            std::path::PathBuf::from("out/image0001.png")
        );
        assert_eq!(
            sequence.frame_path(1234),
            std::path::PathBuf::from("out/image1234.png")
        );
    }

    // Tests raw export writes painted colors and black for unset cells
    // Verified by swapping row and column when converting the canvas
    #[test]
    fn test_export_raw_pixels() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("canvas.png");
        let mut canvas = Canvas::new(4, 3);
        canvas.set(Position::new(3, 1), Color::new(12, 34, 56));

        export_canvas_as_png(&canvas, &path, false).expect("export succeeds");

        let img = image::open(&path).expect("readable png").to_rgb8();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(*img.get_pixel(3, 1), Rgb([12, 34, 56]));
        assert_eq!(*img.get_pixel(1, 1), Rgb([0, 0, 0]));
    }

    // Tests the sink writes one file per capture and remembers them in order
    #[test]
    fn test_sequence_capture() {
        let dir = TempDir::new().expect("temp dir");
        let mut canvas = Canvas::new(3, 3);
        canvas.set(Position::new(1, 1), Color::new(1, 2, 3));
        let mut sequence = PngSequence::new(dir.path(), true);

        sequence.capture(&canvas, &progress(1)).expect("capture");
        sequence.capture(&canvas, &progress(2)).expect("capture");

        assert_eq!(
            sequence.written(),
            &[sequence.frame_path(1), sequence.frame_path(2)]
        );
        assert!(sequence.written().iter().all(|p| p.is_file()));
    }

    // Tests export failures carry the target path
    #[test]
    fn test_export_into_file_fails() {
        let dir = TempDir::new().expect("temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").expect("write blocker");

        let err = export_canvas_as_png(&Canvas::new(2, 2), &blocker.join("a.png"), false)
            .expect_err("parent is a file");
        assert!(err.to_string().contains("blocker"));
    }
}
