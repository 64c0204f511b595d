//! Net change over a series, for trend indicator framing.

use crate::models::series::MetricPoint;

/// Net change between the first and last finite values of a series,
/// rounded to one decimal. Fewer than two finite points yield `0.0`.
pub fn delta(series: &[MetricPoint]) -> f64 {
    let finite: Vec<f64> = series
        .iter()
        .map(|point| point.value)
        .filter(|value| value.is_finite())
        .collect();

    if finite.len() < 2 {
        return 0.0;
    }

    let change = finite[finite.len() - 1] - finite[0];
    (change * 10.0).round() / 10.0
}
