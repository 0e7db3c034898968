//! Local color compatibility between a candidate position and a color

use crate::math::color::Color;
use crate::spatial::canvas::Canvas;
use crate::spatial::position::Position;

/// Cost of placing `color` at `pos`; lower is a better match
///
/// Sums the distance from `color` to every painted cell within `spread` and
/// divides by the squared neighbor count (floored at one), so positions with
/// more painted neighbors score lower for the same average distance.
pub fn cost(canvas: &Canvas, pos: Position, color: Color, spread: u32) -> f64 {
    let (total, count) = pos
        .square(spread)
        .filter_map(|neighbor| canvas.get(neighbor))
        .filter(|neighbor_color| !neighbor_color.is_unset())
        .fold((0.0, 0_u32), |(total, count), neighbor_color| {
            (total + color.distance(neighbor_color), count + 1)
        });

    let divisor = f64::from(count.max(1));
    total / (divisor * divisor)
}
