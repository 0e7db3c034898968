//! Palette enumeration and hue ordering
//!
//! The color space is cut into a coarse grid per channel, shuffled with the
//! run's generator, then stably sorted by hue. Colors sharing a hue keep their
//! shuffled relative order, which breaks up visible banding while staying
//! reproducible for a given seed.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::configuration::{DEFAULT_BLUE_LEVELS, DEFAULT_GREEN_LEVELS, DEFAULT_RED_LEVELS};
use crate::io::error::{Result, invalid_parameter};
use crate::math::color::Color;

/// Smallest number of subdivisions that still yields a non-zero channel value
pub const MIN_CHANNEL_LEVELS: u16 = 2;
/// Largest number of subdivisions an 8-bit channel can represent
pub const MAX_CHANNEL_LEVELS: u16 = 256;

/// Number of subdivisions per channel
///
/// Step `i` of a channel with `levels` subdivisions has value
/// `i * 256 / levels` for `i` in `1..levels`. Step zero is skipped so no
/// color can equal the unset sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteConfig {
    /// Subdivisions of the red channel
    pub red_levels: u16,
    /// Subdivisions of the green channel
    pub green_levels: u16,
    /// Subdivisions of the blue channel
    pub blue_levels: u16,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            red_levels: DEFAULT_RED_LEVELS,
            green_levels: DEFAULT_GREEN_LEVELS,
            blue_levels: DEFAULT_BLUE_LEVELS,
        }
    }
}

impl PaletteConfig {
    /// Check every channel is within `MIN_CHANNEL_LEVELS..=MAX_CHANNEL_LEVELS`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first offending channel.
    pub fn validate(&self) -> Result<()> {
        for (parameter, levels) in [
            ("red_levels", self.red_levels),
            ("green_levels", self.green_levels),
            ("blue_levels", self.blue_levels),
        ] {
            if !(MIN_CHANNEL_LEVELS..=MAX_CHANNEL_LEVELS).contains(&levels) {
                return Err(invalid_parameter(
                    parameter,
                    &levels,
                    &format!("must be between {MIN_CHANNEL_LEVELS} and {MAX_CHANNEL_LEVELS}"),
                ));
            }
        }
        Ok(())
    }

    /// Total number of colors the configuration produces
    pub fn color_count(&self) -> usize {
        [self.red_levels, self.green_levels, self.blue_levels]
            .iter()
            .map(|&levels| usize::from(levels).saturating_sub(1))
            .product()
    }

    /// Every color of the grid in enumeration order: blue outermost, red innermost
    pub fn enumerate(&self) -> Vec<Color> {
        let reds = channel_values(self.red_levels);
        let greens = channel_values(self.green_levels);
        let blues = channel_values(self.blue_levels);

        let mut colors = Vec::with_capacity(self.color_count());
        for &b in &blues {
            for &g in &greens {
                for &r in &reds {
                    colors.push(Color::new(r, g, b));
                }
            }
        }
        colors
    }
}

fn channel_values(levels: u16) -> Vec<u8> {
    let levels = u32::from(levels);
    (1..levels).map(|step| (step * 256 / levels) as u8).collect()
}

/// Ordered stack of colors still to be placed
///
/// The last element is consumed first, so the highest hues are placed first.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Enumerate, shuffle, then stably sort by hue
    ///
    /// Call once per run, before any placement tie-break draws from `rng`.
    pub fn build<R: Rng + ?Sized>(config: &PaletteConfig, rng: &mut R) -> Self {
        let mut colors = config.enumerate();
        colors.shuffle(rng);
        Self::from_colors(sort_by_hue(colors))
    }

    /// Use an explicit sequence; the last color is consumed first
    ///
    /// # Panics
    ///
    /// Panics if any color is the unset sentinel.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        assert!(
            colors.iter().all(|color| !color.is_unset()),
            "palette contains the unset sentinel"
        );
        Self { colors }
    }

    /// Take the next color to place
    pub fn pop(&mut self) -> Option<Color> {
        self.colors.pop()
    }

    /// Colors remaining
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether every color has been consumed
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Remaining colors in stored order (consumption runs back to front)
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

/// Stable ascending sort by hue, computing each hue once
pub fn sort_by_hue(colors: Vec<Color>) -> Vec<Color> {
    let mut keyed: Vec<(f64, Color)> = colors
        .into_iter()
        .map(|color| (color.hue(), color))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, color)| color).collect()
}
