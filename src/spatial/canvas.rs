//! Fixed-size pixel grid where every cell is painted at most once
//!
//! Cells start as `Color::UNSET`. A painted mask tracks which cells have left
//! the sentinel so painting twice is caught immediately.

use bitvec::prelude::*;
use image::{Rgb, RgbImage};
use ndarray::Array2;

use crate::math::color::Color;
use crate::spatial::position::Position;

/// W×H color grid owned by the growth engine
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Colors indexed by `[row, col]`
    pixels: Array2<Color>,
    /// One bit per cell in row-major order, set once the cell is painted
    painted: BitVec,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Create an unpainted canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), Color::UNSET),
            painted: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether a position lies inside `[0, width) × [0, height)`
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    const fn index(&self, pos: Position) -> Option<[usize; 2]> {
        if self.contains(pos) {
            Some([pos.y as usize, pos.x as usize])
        } else {
            None
        }
    }

    /// Stored color, `Color::UNSET` for unpainted cells, `None` out of bounds
    pub fn get(&self, pos: Position) -> Option<Color> {
        self.index(pos)
            .and_then(|index| self.pixels.get(index).copied())
    }

    /// Whether a position is in bounds and still unpainted
    pub fn is_unset(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Color::is_unset)
    }

    /// Paint a cell
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds, the cell is already painted,
    /// or `color` is the unset sentinel. These only happen when the engine's
    /// frontier bookkeeping is broken.
    pub fn set(&mut self, pos: Position, color: Color) {
        assert!(!color.is_unset(), "cannot paint the unset sentinel at {pos}");
        let index = self.index(pos);
        assert!(index.is_some(), "position {pos} is outside the canvas");
        let flat = pos.y as usize * self.width + pos.x as usize;
        assert!(
            !self.painted.get(flat).as_deref().copied().unwrap_or(true),
            "position {pos} is already painted"
        );

        if let Some(cell) = index.and_then(|index| self.pixels.get_mut(index)) {
            *cell = color;
        }
        self.painted.set(flat, true);
    }

    /// Number of painted cells
    pub fn painted_count(&self) -> usize {
        self.painted.count_ones()
    }

    /// Number of cells still unpainted
    pub fn unset_count(&self) -> usize {
        self.painted.count_zeros()
    }

    /// Row-major view of the raw colors, unset cells included
    pub const fn pixels(&self) -> &Array2<Color> {
        &self.pixels
    }

    /// Copy the canvas into an RGB image; unset cells come out black
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let color = self
                .pixels
                .get([y as usize, x as usize])
                .copied()
                .unwrap_or(Color::UNSET);
            Rgb(color.channels())
        })
    }
}
