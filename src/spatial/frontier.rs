//! Open border positions where the next color may be placed

use std::collections::BTreeSet;

use crate::spatial::canvas::Canvas;
use crate::spatial::position::Position;

/// Unset, in-bounds positions within `spread` of `pos`, center included
///
/// Returned in ascending order so callers that enumerate the result stay
/// deterministic.
pub fn neighbors_of(canvas: &Canvas, pos: Position, spread: u32) -> BTreeSet<Position> {
    pos.square(spread)
        .filter(|&neighbor| canvas.is_unset(neighbor))
        .collect()
}

/// Ordered set of placeable positions
///
/// Every member is unset on the canvas it was built against; the engine
/// removes a member in the same step that paints it.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    positions: BTreeSet<Position>,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self {
            positions: BTreeSet::new(),
        }
    }

    /// Union of the neighborhoods of all seed positions
    pub fn from_seeds<'a, I>(canvas: &Canvas, seeds: I, spread: u32) -> Self
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut frontier = Self::new();
        for &seed in seeds {
            frontier.add_all(neighbors_of(canvas, seed, spread));
        }
        frontier
    }

    /// Insert a batch of positions; members already present are ignored
    pub fn add_all<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.positions.extend(positions);
    }

    /// Remove a member
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not in the frontier.
    pub fn remove(&mut self, pos: Position) {
        let removed = self.positions.remove(&pos);
        assert!(removed, "position {pos} is not on the frontier");
    }

    /// Membership test
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// Whether no position is open
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of open positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Members in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }
}
