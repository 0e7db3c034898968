//! Tests for the snapshot gap-filling pass

#[cfg(test)]
mod tests {
    use allcolors::io::embellish::{dilate, embellish, median};
    use allcolors::math::color::Color;
    use allcolors::spatial::canvas::Canvas;
    use allcolors::spatial::position::Position;
    use image::{Rgb, RgbImage};

    fn single_painted() -> Canvas {
        let mut canvas = Canvas::new(5, 5);
        canvas.set(Position::new(2, 2), Color::new(200, 100, 40));
        canvas
    }

    // Tests dilation spreads the lone pixel over its 3x3 neighborhood only
    #[test]
    fn test_dilate_spreads_one_cell() {
        let dilated = dilate(&single_painted().to_rgb_image());
        assert_eq!(*dilated.get_pixel(1, 1), Rgb([200, 100, 40]));
        assert_eq!(*dilated.get_pixel(3, 2), Rgb([200, 100, 40]));
        assert_eq!(*dilated.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*dilated.get_pixel(4, 2), Rgb([0, 0, 0]));
    }

    // Tests the median removes an isolated bright pixel
    #[test]
    fn test_median_removes_speck() {
        let mut img = RgbImage::new(3, 3);
        img.put_pixel(1, 1, Rgb([255, 255, 255]));
        assert_eq!(*median(&img).get_pixel(1, 1), Rgb([0, 0, 0]));

        let full = RgbImage::from_pixel(3, 3, Rgb([9, 8, 7]));
        assert_eq!(*median(&full).get_pixel(0, 0), Rgb([9, 8, 7]));
    }

    // Tests painted cells pass through, adjacent gaps get half the median and
    // distant gaps stay black
    // Verified by blending into painted cells as well
    #[test]
    fn test_embellish_tints_growth_edge() {
        let out = embellish(&single_painted());

        assert_eq!(*out.get_pixel(2, 2), Rgb([200, 100, 40]));
        assert_eq!(*out.get_pixel(1, 2), Rgb([100, 50, 20]));
        assert_eq!(*out.get_pixel(2, 3), Rgb([100, 50, 20]));
        assert_eq!(*out.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(*out.get_pixel(4, 4), Rgb([0, 0, 0]));
    }

    // Tests odd median values halve to the nearest even value
    // Verified by truncating the half
    #[test]
    fn test_embellish_rounds_half_to_even() {
        let mut canvas = Canvas::new(5, 5);
        canvas.set(Position::new(2, 2), Color::new(255, 201, 3));

        let out = embellish(&canvas);
        assert_eq!(*out.get_pixel(1, 2), Rgb([128, 100, 2]));
    }

    #[test]
    fn test_embellish_full_canvas_unchanged() {
        let mut canvas = Canvas::new(3, 2);
        for y in 0..2 {
            for x in 0..3 {
                canvas.set(Position::new(x, y), Color::new(10 + x as u8, 20 + y as u8, 30));
            }
        }
        assert_eq!(embellish(&canvas), canvas.to_rgb_image());
    }
}
