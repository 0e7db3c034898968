//! Tests for color distance, the unset sentinel and HSV conversion

#[cfg(test)]
mod tests {
    use allcolors::math::color::{Color, Hsv};

    // Tests grays map to zero hue and saturation without dividing by zero
    // Verified by removing the zero-span early return
    #[test]
    fn test_gray_has_zero_hue_and_saturation() {
        for level in [1_u8, 4, 128, 255] {
            let hsv = Color::new(level, level, level).to_hsv();
            assert_eq!(
                hsv,
                Hsv {
                    hue: 0.0,
                    saturation: 0.0,
                    value: 0.0
                }
            );
            assert!(hsv.hue.is_finite());
        }
    }

    // Tests primary colors land on their hue angles with full saturation
    // Verified by swapping the green and blue branch offsets
    #[test]
    fn test_primary_hues() {
        let red = Color::new(255, 0, 0).to_hsv();
        let green = Color::new(0, 255, 0).to_hsv();
        let blue = Color::new(0, 0, 255).to_hsv();

        assert!(red.hue.abs() < 1e-12);
        assert!((green.hue - 120.0).abs() < 1e-12);
        assert!((blue.hue - 240.0).abs() < 1e-12);

        for hsv in [red, green, blue] {
            assert!((hsv.saturation - 1.0).abs() < 1e-12);
            assert!((hsv.value - 1.0).abs() < 1e-12);
        }
    }

    // Tests negative hue angles wrap into [0, 360)
    // Verified by removing the +360 wrap
    #[test]
    fn test_negative_hue_wraps() {
        // Red and blue tie for the maximum; red wins, giving -60 before wrapping
        let magenta = Color::new(255, 0, 255).to_hsv();
        assert!((magenta.hue - 300.0).abs() < 1e-12);

        let rose = Color::new(200, 50, 100).hue();
        assert!(rose > 300.0 && rose < 360.0);
    }

    // Tests saturation and value of a partially saturated color
    // Verified by dividing the span by 255 instead of the value
    #[test]
    fn test_saturation_and_value() {
        let hsv = Color::new(200, 100, 100).to_hsv();
        assert!((hsv.value - 200.0 / 255.0).abs() < 1e-12);
        assert!((hsv.saturation - 0.5).abs() < 1e-12);
        assert!(hsv.hue.abs() < 1e-12);
    }

    // Tests Euclidean distance over all three channels
    // Verified by dropping the blue channel term
    #[test]
    fn test_distance() {
        let a = Color::new(10, 20, 30);
        let b = Color::new(13, 24, 30);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.distance(a) - 5.0).abs() < 1e-12);
        assert!(a.distance(a).abs() < f64::EPSILON);

        let c = Color::new(10, 20, 42);
        assert!((a.distance(c) - 12.0).abs() < 1e-12);
    }

    // Tests only the all-zero color is the sentinel
    // Verified by checking only the first channel
    #[test]
    fn test_unset_sentinel() {
        assert!(Color::UNSET.is_unset());
        assert!(Color::default().is_unset());
        assert!(!Color::new(0, 0, 1).is_unset());
        assert!(!Color::new(1, 0, 0).is_unset());
    }

    #[test]
    fn test_conversions_and_display() {
        let color = Color::from([255, 0, 128]);
        assert_eq!(color.channels(), [255, 0, 128]);
        assert_eq!(<[u8; 3]>::from(color), [255, 0, 128]);
        assert_eq!(color.to_string(), "#ff0080");
    }
}
