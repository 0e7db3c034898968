use std::collections::BTreeSet;

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    algorithm::palette::Palette,
    algorithm::selection::{ScoredPosition, score_frontier, select_best},
    io::configuration::{GrowthConfig, validate_dimensions},
    io::error::{AlgorithmError, Result},
    math::color::Color,
    spatial::canvas::Canvas,
    spatial::frontier::{Frontier, neighbors_of},
    spatial::position::Position,
};

/// Whether the engine can still place colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthState {
    /// Palette and frontier are both non-empty
    Running,
    /// Palette or frontier is exhausted
    Done,
}

/// Why a run stopped; both are normal completion
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every palette color was placed
    PaletteExhausted,
    /// No open position remained while colors were left
    FrontierExhausted,
}

/// One committed placement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Where the color went
    pub position: Position,
    /// The color placed
    pub color: Color,
    /// Zero-based placement number
    pub index: usize,
}

/// Summary of a finished run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthOutcome {
    /// Colors placed
    pub placed: usize,
    /// Colors left in the palette
    pub unplaced: usize,
    /// Reason the run stopped
    pub termination: Termination,
}

/// Run state handed to a snapshot sink
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SnapshotProgress {
    /// One-based snapshot number
    pub index: usize,
    /// Colors placed so far
    pub placed: usize,
    /// Colors left in the palette
    pub remaining_colors: usize,
    /// Current frontier size
    pub frontier_len: usize,
}

/// Receives read-only canvas views between iterations
///
/// Sinks never touch the engine's generator, so what they do cannot change the
/// growth order.
pub trait SnapshotSink {
    /// Persist or inspect the current canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails to persist the frame
    fn capture(&mut self, canvas: &Canvas, progress: &SnapshotProgress) -> Result<()>;
}

/// Sink that discards every frame
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn capture(&mut self, _canvas: &Canvas, _progress: &SnapshotProgress) -> Result<()> {
        Ok(())
    }
}

impl<S: SnapshotSink + ?Sized> SnapshotSink for &mut S {
    fn capture(&mut self, canvas: &Canvas, progress: &SnapshotProgress) -> Result<()> {
        (**self).capture(canvas, progress)
    }
}

impl<S: SnapshotSink> SnapshotSink for Option<S> {
    fn capture(&mut self, canvas: &Canvas, progress: &SnapshotProgress) -> Result<()> {
        self.as_mut().map_or(Ok(()), |sink| sink.capture(canvas, progress))
    }
}

impl<A: SnapshotSink, B: SnapshotSink> SnapshotSink for (A, B) {
    fn capture(&mut self, canvas: &Canvas, progress: &SnapshotProgress) -> Result<()> {
        self.0.capture(canvas, progress)?;
        self.1.capture(canvas, progress)
    }
}

/// Greedy growth engine
///
/// Pops colors in palette order and places each at the frontier position whose
/// painted neighbors match it best. A single seeded generator orders the
/// palette once and then breaks every placement tie, so a seed fully
/// determines the output.
pub struct GrowthEngine {
    config: GrowthConfig,
    canvas: Canvas,
    frontier: Frontier,
    palette: Palette,
    rng: StdRng,
    placements: usize,
    snapshots: usize,
    /// Pre-allocated buffer to reduce allocations in hot path
    candidates: Vec<ScoredPosition>,
}

impl GrowthEngine {
    /// Create an engine with a palette built from `config.palette`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration or canvas dimensions are invalid
    /// - A seed lies outside the canvas
    pub fn new(
        config: GrowthConfig,
        width: usize,
        height: usize,
        seeds: &BTreeSet<Position>,
    ) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let palette = Palette::build(&config.palette, &mut rng);
        Self::assemble(config, width, height, seeds, palette, rng)
    }

    /// Create an engine that places an explicit palette
    ///
    /// The generator is still seeded from `config.seed`; only tie-breaks draw
    /// from it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration or canvas dimensions are invalid
    /// - A seed lies outside the canvas
    pub fn with_palette(
        config: GrowthConfig,
        width: usize,
        height: usize,
        seeds: &BTreeSet<Position>,
        palette: Palette,
    ) -> Result<Self> {
        config.validate()?;
        let rng = StdRng::seed_from_u64(config.seed);
        Self::assemble(config, width, height, seeds, palette, rng)
    }

    fn assemble(
        config: GrowthConfig,
        width: usize,
        height: usize,
        seeds: &BTreeSet<Position>,
        palette: Palette,
        rng: StdRng,
    ) -> Result<Self> {
        validate_dimensions(width, height)?;
        let canvas = Canvas::new(width, height);

        if let Some(&position) = seeds.iter().find(|&&seed| !canvas.contains(seed)) {
            return Err(AlgorithmError::SeedOutOfBounds {
                position,
                width,
                height,
            });
        }

        let frontier = Frontier::from_seeds(&canvas, seeds, config.spread);
        let capacity = frontier.len();

        Ok(Self {
            config,
            canvas,
            frontier,
            palette,
            rng,
            placements: 0,
            snapshots: 0,
            candidates: Vec::with_capacity(capacity),
        })
    }

    /// Access the canvas
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Access the open positions
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Access the colors still to be placed
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of colors placed so far
    pub const fn placements(&self) -> usize {
        self.placements
    }

    /// Current state
    pub fn state(&self) -> GrowthState {
        if self.palette.is_empty() || self.frontier.is_empty() {
            GrowthState::Done
        } else {
            GrowthState::Running
        }
    }

    /// Place the next color, or return `None` once the run is done
    pub fn step(&mut self) -> Option<Placement> {
        if self.state() == GrowthState::Done {
            return None;
        }

        let color = self.palette.pop()?;

        score_frontier(
            &self.canvas,
            &self.frontier,
            color,
            self.config.spread,
            &mut self.candidates,
        );
        let position = select_best(&mut self.candidates, &mut self.rng)?;

        self.frontier.remove(position);
        self.canvas.set(position, color);
        self.frontier
            .add_all(neighbors_of(&self.canvas, position, self.config.spread));

        let placement = Placement {
            position,
            color,
            index: self.placements,
        };
        self.placements += 1;
        Some(placement)
    }

    /// Run to completion, handing the canvas to `sink` on the snapshot cadence
    ///
    /// A final snapshot is taken when the last placement did not land on the
    /// cadence, so the finished canvas is always captured.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `sink`.
    pub fn run<S: SnapshotSink>(&mut self, mut sink: S) -> Result<GrowthOutcome> {
        let mut captured_latest = true;
        while self.step().is_some() {
            captured_latest = false;
            if self.placements % self.config.snapshot_every == 0 {
                self.emit_snapshot(&mut sink)?;
                captured_latest = true;
            }
        }

        if !captured_latest {
            self.emit_snapshot(&mut sink)?;
        }

        Ok(self.outcome())
    }

    fn emit_snapshot<S: SnapshotSink>(&mut self, sink: &mut S) -> Result<()> {
        self.snapshots += 1;
        let progress = SnapshotProgress {
            index: self.snapshots,
            placed: self.placements,
            remaining_colors: self.palette.len(),
            frontier_len: self.frontier.len(),
        };
        sink.capture(&self.canvas, &progress)
    }

    /// Summary of the run so far
    pub fn outcome(&self) -> GrowthOutcome {
        let termination = if self.palette.is_empty() {
            Termination::PaletteExhausted
        } else {
            Termination::FrontierExhausted
        };
        GrowthOutcome {
            placed: self.placements,
            unplaced: self.palette.len(),
            termination,
        }
    }
}
