//! Cosmetic gap filling for snapshot frames
//!
//! Unpainted cells next to painted ones are tinted with half the median of
//! their dilated neighborhood, rounded half to even, softening the ragged
//! growth edge. Painted cells pass through untouched.

use image::{Rgb, RgbImage};

use crate::math::color::Color;
use crate::spatial::canvas::Canvas;

/// Dilate, median filter, then blend half of the result into unset cells
pub fn embellish(canvas: &Canvas) -> RgbImage {
    let raw = canvas.to_rgb_image();
    let dilated = dilate(&raw);
    let median = median(&dilated);

    RgbImage::from_fn(raw.width(), raw.height(), |x, y| {
        let original = *raw.get_pixel(x, y);
        if !Color::from(original.0).is_unset() {
            return original;
        }
        let fill = median.get_pixel(x, y).0;
        let mut mixed = original.0;
        for (channel, add) in mixed.iter_mut().zip(fill) {
            *channel = channel.saturating_add(half_to_even(add));
        }
        Rgb(mixed)
    })
}

/// Half of `value`, with exact halves rounded to the even neighbor
const fn half_to_even(value: u8) -> u8 {
    let half = value / 2;
    if value % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

/// Per-channel maximum over the in-bounds 3×3 window
pub fn dilate(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let mut max = [0_u8; 3];
        for (nx, ny) in window(x, y, width, height, false) {
            for (current, value) in max.iter_mut().zip(image.get_pixel(nx, ny).0) {
                *current = (*current).max(value);
            }
        }
        Rgb(max)
    })
}

/// Per-channel median over the 3×3 window, replicating edge pixels
pub fn median(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let mut samples = [[0_u8; 9]; 3];
        for (slot, (nx, ny)) in window(x, y, width, height, true).enumerate() {
            for (channel, value) in samples.iter_mut().zip(image.get_pixel(nx, ny).0) {
                if let Some(sample) = channel.get_mut(slot) {
                    *sample = value;
                }
            }
        }
        let mut out = [0_u8; 3];
        for (result, channel) in out.iter_mut().zip(samples.iter_mut()) {
            channel.sort_unstable();
            *result = channel.get(4).copied().unwrap_or(0);
        }
        Rgb(out)
    })
}

/// Coordinates of the 3×3 window around `(x, y)`
///
/// With `replicate` set, out-of-range coordinates clamp to the nearest edge
/// so the window always has nine samples; otherwise they are skipped.
fn window(
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    replicate: bool,
) -> impl Iterator<Item = (u32, u32)> {
    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;
    (-1_i64..=1).flat_map(move |dy| {
        (-1_i64..=1).filter_map(move |dx| {
            let nx = i64::from(x) + dx;
            let ny = i64::from(y) + dy;
            if replicate {
                Some((nx.clamp(0, max_x) as u32, ny.clamp(0, max_y) as u32))
            } else if (0..=max_x).contains(&nx) && (0..=max_y).contains(&ny) {
                Some((nx as u32, ny as u32))
            } else {
                None
            }
        })
    })
}
