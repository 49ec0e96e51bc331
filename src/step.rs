//! Rasterization output: lit pixels, finished results and playback cursors.

use std::time::Duration;

use crate::geometry::Point;
use crate::raster::RasterKind;

/// One lit pixel produced by a rasterizer.
///
/// `intensity` is the fraction of the pixel covered by the ideal primitive and
/// is always within `[0, 1]`. Algorithms without anti-aliasing emit `1.0`.
#[derive(Debug, Clone)]
pub struct Step {
    coordinates: Point,
    label: String,
    intensity: f64,
}

impl Step {
    /// Create a fully lit step.
    #[must_use]
    pub fn new(coordinates: Point, label: impl Into<String>) -> Self {
        Self::with_intensity(coordinates, label, 1.0)
    }

    /// Create a step with partial coverage; `intensity` is clamped to `[0, 1]`.
    #[must_use]
    pub fn with_intensity(coordinates: Point, label: impl Into<String>, intensity: f64) -> Self {
        Self {
            coordinates,
            label: label.into(),
            intensity: clamp_unit(intensity),
        }
    }

    /// Pixel coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> Point {
        self.coordinates
    }

    /// Diagnostic label describing how the step was derived.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pixel coverage in `[0, 1]`.
    #[must_use]
    pub const fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Overwrite the coverage, clamping to `[0, 1]`.
    pub fn set_intensity(&mut self, intensity: f64) {
        self.intensity = clamp_unit(intensity);
    }

    /// Whether two steps light the same pixel. Labels and intensities are ignored.
    #[must_use]
    pub fn same_pixel(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

// NaN maps to 0 so a bad coverage value can never light a pixel.
fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Step accumulator shared by every rasterizer.
///
/// `push_unique` drops a step whose pixel equals the last one kept, so runs of
/// identical samples collapse to one step.
#[derive(Debug, Default)]
pub(crate) struct StepTrace {
    steps: Vec<Step>,
}

impl StepTrace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { steps: Vec::with_capacity(capacity) }
    }

    /// Append `step` unless it lands on the pixel most recently appended.
    /// Returns whether the step was kept.
    pub(crate) fn push_unique(&mut self, step: Step) -> bool {
        if self.steps.last().is_some_and(|last| last.same_pixel(&step)) {
            return false;
        }
        self.steps.push(step);
        true
    }

    pub(crate) fn reverse(&mut self) {
        self.steps.reverse();
    }

    pub(crate) fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// The immutable output of one rasterizer invocation.
#[derive(Debug, Clone)]
pub struct AlgorithmResult {
    kind: RasterKind,
    steps: Vec<Step>,
    elapsed: Duration,
}

impl AlgorithmResult {
    pub(crate) fn new(kind: RasterKind, steps: Vec<Step>, elapsed: Duration) -> Self {
        Self { kind, steps, elapsed }
    }

    /// Which rasterizer produced this result.
    #[must_use]
    pub const fn kind(&self) -> RasterKind {
        self.kind
    }

    /// Steps in generation order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Pixel coordinates in generation order.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.steps.iter().map(Step::coordinates).collect()
    }

    /// Wall time spent computing the steps.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the result holds no steps. Rasterizers always emit at least one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate over the steps.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// A fresh playback cursor positioned before the first step.
    #[must_use]
    pub fn cursor(&self) -> StepCursor<'_> {
        StepCursor::new(self)
    }
}

impl<'a> IntoIterator for &'a AlgorithmResult {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl IntoIterator for AlgorithmResult {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Caller-owned playback position over an [`AlgorithmResult`].
///
/// The cursor only borrows the result; advancing it never mutates the steps.
#[derive(Debug, Clone)]
pub struct StepCursor<'a> {
    result: &'a AlgorithmResult,
    revealed: usize,
}

impl<'a> StepCursor<'a> {
    /// Create a cursor that has revealed nothing yet.
    #[must_use]
    pub const fn new(result: &'a AlgorithmResult) -> Self {
        Self { result, revealed: 0 }
    }

    /// Reveal the next step and return it, or `None` once every step is shown.
    pub fn advance(&mut self) -> Option<&'a Step> {
        let step = self.result.steps.get(self.revealed)?;
        self.revealed += 1;
        Some(step)
    }

    /// The most recently revealed step (the one to highlight).
    #[must_use]
    pub fn current(&self) -> Option<&'a Step> {
        self.revealed.checked_sub(1).and_then(|i| self.result.steps.get(i))
    }

    /// Index of the most recently revealed step.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        self.revealed.checked_sub(1)
    }

    /// All steps revealed so far.
    #[must_use]
    pub fn revealed(&self) -> &'a [Step] {
        &self.result.steps[..self.revealed]
    }

    /// Whether every step has been revealed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.revealed >= self.result.steps.len()
    }

    /// Rewind to before the first step.
    pub fn reset(&mut self) {
        self.revealed = 0;
    }
}
