//! Trailing-average gap smoothing for percentage series.
//!
//! Metric pipelines report `0` both for "no activity" and for "no data
//! collected this bucket". Rendering those zeros verbatim produces
//! misleading cliffs, so zero readings are repaired from the average of
//! the two most recently *emitted* values. This is a documented lossy
//! repair for display purposes, not a statistical estimator.

use crate::models::series::MetricPoint;

/// Fixed-size trailing window over the two most recently emitted output
/// values. Tracking outputs rather than raw inputs is the load-bearing
/// invariant: substituted values feed later substitutions, so a run of
/// zeros flattens toward the prior trend instead of sawtoothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothingWindow {
    last: Option<f64>,
    prev: Option<f64>,
}

impl SmoothingWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an emitted output value.
    pub fn push(&mut self, value: f64) {
        self.prev = self.last;
        self.last = Some(value);
    }

    /// Replacement for a zero reading: mean of the two prior outputs when
    /// both exist, the single prior output when only one does, else 0.
    pub fn fill_zero(&self) -> f64 {
        match (self.last, self.prev) {
            (Some(last), Some(prev)) => (last + prev) / 2.0,
            (Some(last), None) => last,
            _ => 0.0,
        }
    }
}

/// Normalize a metric series for direct chart binding.
///
/// Output has the same length and order as the input, and every value is
/// finite and clamped to `[0, 100]`. Non-finite inputs coerce to 0 and
/// are then eligible for zero repair like any other zero reading.
pub fn normalize(series: &[MetricPoint]) -> Vec<MetricPoint> {
    let mut window = SmoothingWindow::new();
    series
        .iter()
        .map(|point| {
            let raw = if point.value.is_finite() {
                point.value
            } else {
                0.0
            };
            let repaired = if raw == 0.0 { window.fill_zero() } else { raw };
            let value = repaired.clamp(0.0, 100.0);
            // Clamped value goes into the window so later repairs stay bounded.
            window.push(value);
            MetricPoint {
                timestamp: point.timestamp.clone(),
                value,
            }
        })
        .collect()
}
