//! Tests for the neighbor-based compatibility cost

#[cfg(test)]
mod tests {
    use allcolors::algorithm::scoring::cost;
    use allcolors::math::color::Color;
    use allcolors::spatial::canvas::Canvas;
    use allcolors::spatial::position::Position;

    // Tests a position with no painted neighbors costs nothing and never divides by zero
    // Verified by removing the max(1) floor
    #[test]
    fn test_no_neighbors_costs_zero() {
        let canvas = Canvas::new(5, 5);
        let value = cost(&canvas, Position::new(2, 2), Color::new(200, 10, 10), 1);
        assert!(value.is_finite());
        assert!(value.abs() < f64::EPSILON);
    }

    // Tests a single neighbor contributes its full distance
    #[test]
    fn test_single_neighbor() {
        let mut canvas = Canvas::new(5, 5);
        canvas.set(Position::new(1, 1), Color::new(10, 20, 30));

        let value = cost(&canvas, Position::new(2, 2), Color::new(13, 24, 30), 1);
        assert!((value - 5.0).abs() < 1e-12);
    }

    // Tests the summed distance is divided by the squared neighbor count
    // Verified by dividing by the count only once
    #[test]
    fn test_squared_divisor() {
        let mut canvas = Canvas::new(5, 5);
        canvas.set(Position::new(1, 1), Color::new(10, 20, 30));
        canvas.set(Position::new(3, 3), Color::new(10, 20, 42));

        let value = cost(&canvas, Position::new(2, 2), Color::new(10, 20, 30), 1);
        // distances 0 and 12, two neighbors: 12 / 2^2
        assert!((value - 3.0).abs() < 1e-12);
    }

    // Tests broad support beats a thin tendril with the same average distance
    #[test]
    fn test_more_support_is_cheaper() {
        let color = Color::new(100, 100, 100);
        let neighbor = Color::new(110, 100, 100);

        let mut canvas = Canvas::new(7, 7);
        canvas.set(Position::new(0, 3), neighbor);
        for y in 2..=4 {
            canvas.set(Position::new(6, y), neighbor);
        }

        let tendril = cost(&canvas, Position::new(1, 3), color, 1);
        let supported = cost(&canvas, Position::new(5, 3), color, 1);
        assert!((tendril - 10.0).abs() < 1e-12);
        assert!((supported - 10.0 / 3.0).abs() < 1e-12);
        assert!(supported < tendril);
    }

    // Tests out-of-bounds neighbors are ignored at the canvas edge
    #[test]
    fn test_edge_ignores_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set(Position::new(1, 1), Color::new(1, 1, 1));

        let value = cost(&canvas, Position::new(0, 0), Color::new(1, 1, 4), 1);
        assert!((value - 3.0).abs() < 1e-12);
    }

    // Tests the spread widens the neighborhood
    #[test]
    fn test_spread_two_reaches_further() {
        let mut canvas = Canvas::new(5, 5);
        canvas.set(Position::new(0, 0), Color::new(10, 10, 10));

        let near = cost(&canvas, Position::new(2, 2), Color::new(10, 10, 20), 1);
        let far = cost(&canvas, Position::new(2, 2), Color::new(10, 10, 20), 2);
        assert!(near.abs() < f64::EPSILON);
        assert!((far - 10.0).abs() < 1e-12);
    }
}
