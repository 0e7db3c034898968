//! Candidate scoring and randomized tie-breaking

use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::scoring::cost;
use crate::math::color::Color;
use crate::spatial::canvas::Canvas;
use crate::spatial::frontier::Frontier;
use crate::spatial::position::Position;

/// Scored candidate position
pub type ScoredPosition = (f64, Position);

/// Score every frontier position against `color`, in frontier order
///
/// Clears and refills `buffer` so the allocation is reused across iterations.
pub fn score_frontier(
    canvas: &Canvas,
    frontier: &Frontier,
    color: Color,
    spread: u32,
    buffer: &mut Vec<ScoredPosition>,
) {
    buffer.clear();
    buffer.extend(
        frontier
            .iter()
            .map(|pos| (cost(canvas, pos, color, spread), pos)),
    );
}

/// Shuffle the candidates, then return the first one with the lowest cost
///
/// Ties therefore resolve to whichever tied candidate the shuffle put first,
/// not to the lowest coordinate. Returns `None` for an empty slice.
pub fn select_best<R: Rng + ?Sized>(
    candidates: &mut [ScoredPosition],
    rng: &mut R,
) -> Option<Position> {
    candidates.shuffle(rng);
    first_minimum(candidates)
}

/// First candidate with the lowest cost in slice order
pub fn first_minimum(candidates: &[ScoredPosition]) -> Option<Position> {
    candidates
        .iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|&(_, pos)| pos)
}
