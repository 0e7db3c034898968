//! Seed layouts: preset arrangements or positions read from a mask image

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::io::configuration::{PRESET_ARM_LENGTH, validate_dimensions};
use crate::io::error::{Result, WithPath, invalid_parameter, invalid_source};
use crate::spatial::position::Position;

/// Highest preset seed count
pub const MAX_PRESET_SEEDS: u8 = 4;

/// Where the initial seeds come from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    /// Fixed arrangement of one to four seed crosses
    Preset(u8),
    /// Every non-black pixel of a grayscale version of the image
    Image(PathBuf),
}

impl FromStr for SeedSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.parse::<u8>() {
            Ok(count) if (1..=MAX_PRESET_SEEDS).contains(&count) => Ok(Self::Preset(count)),
            Ok(count) => Err(format!(
                "preset seed count {count} must be between 1 and {MAX_PRESET_SEEDS}"
            )),
            Err(_) if s.is_empty() => Err("seed source must not be empty".to_string()),
            Err(_) => Ok(Self::Image(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(count) => write!(f, "{count}"),
            Self::Image(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Canvas dimensions and the seed positions growth starts from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedLayout {
    /// Canvas width
    pub width: usize,
    /// Canvas height
    pub height: usize,
    /// Seed positions, all inside the canvas
    pub seeds: BTreeSet<Position>,
}

impl SeedLayout {
    /// Resolve a seed source; `width` and `height` only apply to presets
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Preset dimensions are invalid or the preset count is out of range
    /// - The seed image cannot be loaded or has no non-black pixel
    pub fn resolve(source: &SeedSource, width: usize, height: usize) -> Result<Self> {
        match source {
            SeedSource::Preset(count) => Self::preset(*count, width, height),
            SeedSource::Image(path) => Self::from_image(path),
        }
    }

    /// Plus-shaped seed arms around one to four fixed centers
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for bad dimensions or a count outside
    /// `1..=MAX_PRESET_SEEDS`.
    pub fn preset(count: u8, width: usize, height: usize) -> Result<Self> {
        validate_dimensions(width, height)?;
        let centers = preset_centers(count).ok_or_else(|| {
            invalid_parameter(
                "seeds",
                &count,
                &format!("preset count must be between 1 and {MAX_PRESET_SEEDS}"),
            )
        })?;

        let mut seeds = BTreeSet::new();
        for &(fx, fy) in centers {
            let center = Position::new(
                (fx * width as f64) as i32,
                (fy * height as f64) as i32,
            );
            seeds.extend(plus_arms(center, PRESET_ARM_LENGTH));
        }
        seeds.retain(|pos| {
            pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < width && (pos.y as usize) < height
        });

        Ok(Self {
            width,
            height,
            seeds,
        })
    }

    /// Every pixel brighter than black in the image's grayscale version
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image cannot be loaded or decoded
    /// - The image is larger than the canvas limit
    /// - No pixel is brighter than black
    pub fn from_image(path: &Path) -> Result<Self> {
        let luma = image::open(path).with_path(path, "load")?.to_luma8();
        let (width, height) = luma.dimensions();
        validate_dimensions(width as usize, height as usize)?;

        let seeds: BTreeSet<Position> = luma
            .enumerate_pixels()
            .filter(|(_, _, pixel)| pixel.0[0] > 0)
            .map(|(x, y, _)| Position::new(x as i32, y as i32))
            .collect();

        if seeds.is_empty() {
            return Err(invalid_source(&format!(
                "seed image '{}' has no non-black pixel",
                path.display()
            )));
        }

        Ok(Self {
            width: width as usize,
            height: height as usize,
            seeds,
        })
    }
}

/// Canvas-relative centers of each preset
const fn preset_centers(count: u8) -> Option<&'static [(f64, f64)]> {
    match count {
        1 => Some(&[(0.50, 0.50)]),
        2 => Some(&[(0.33, 0.5), (0.67, 0.5)]),
        3 => Some(&[(0.33, 0.4), (0.67, 0.4), (0.50, 0.69)]),
        4 => Some(&[(0.33, 0.36), (0.67, 0.36), (0.36, 0.64), (0.64, 0.64)]),
        _ => None,
    }
}

/// Horizontal and vertical arms of `length` cells through `center`
pub fn plus_arms(center: Position, length: i32) -> impl Iterator<Item = Position> {
    let horizontal =
        (center.x - length..=center.x + length).map(move |x| Position::new(x, center.y));
    let vertical = (center.y - length..=center.y + length).map(move |y| Position::new(center.x, y));
    horizontal.chain(vertical)
}
