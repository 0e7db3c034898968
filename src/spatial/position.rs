//! Grid coordinates

use std::fmt;

/// Column/row coordinate of a canvas cell
///
/// Components are signed so neighborhood arithmetic can step past the canvas
/// edge before bounds filtering. Ordering compares the column first, then the
/// row, which fixes the order candidates are scored in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Positions within Chebyshev distance `radius`, center included, unfiltered
    ///
    /// Bounds saturate at the `i32` range instead of overflowing.
    pub fn square(self, radius: u32) -> impl Iterator<Item = Self> {
        let radius = i32::try_from(radius).unwrap_or(i32::MAX);
        let rows = self.y.saturating_sub(radius)..=self.y.saturating_add(radius);
        (self.x.saturating_sub(radius)..=self.x.saturating_add(radius))
            .flat_map(move |x| rows.clone().map(move |y| Self::new(x, y)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
