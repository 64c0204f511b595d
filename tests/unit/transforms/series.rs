//! Unit tests for series gap smoothing

use aeolens::models::series::MetricPoint;
use aeolens::transforms::series::normalize;

fn series_of(values: &[f64]) -> Vec<MetricPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| MetricPoint::at_millis(i as i64 * 86_400_000, value))
        .collect()
}

fn values_of(series: &[MetricPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}

#[test]
fn test_length_and_order_preserved() {
    let input = series_of(&[10.0, 0.0, f64::NAN, 55.0, f64::INFINITY]);
    let output = normalize(&input);
    assert_eq!(output.len(), input.len());
    for (a, b) in input.iter().zip(&output) {
        assert_eq!(a.timestamp, b.timestamp);
    }
}

#[test]
fn test_output_always_finite_and_bounded() {
    let input = series_of(&[
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        -15.0,
        240.0,
        0.0,
        33.3,
    ]);
    for point in normalize(&input) {
        assert!(point.value.is_finite());
        assert!((0.0..=100.0).contains(&point.value));
    }
}

#[test]
fn test_single_zero_repeats_single_prior_output() {
    let output = normalize(&series_of(&[10.0, 0.0, 20.0]));
    assert_eq!(values_of(&output), vec![10.0, 10.0, 20.0]);
}

#[test]
fn test_zero_run_averages_trailing_outputs_not_inputs() {
    // First zero averages 10 and 20 into 15; second zero averages the two
    // most recent outputs 20 and 15 into 17.5. Averaging raw inputs would
    // produce 15 again, which is the bug this test guards against.
    let output = normalize(&series_of(&[10.0, 20.0, 0.0, 0.0]));
    assert_eq!(values_of(&output), vec![10.0, 20.0, 15.0, 17.5]);
}

#[test]
fn test_no_history_leaves_zeros() {
    let output = normalize(&series_of(&[0.0, 0.0]));
    assert_eq!(values_of(&output), vec![0.0, 0.0]);
}

#[test]
fn test_leading_zero_then_value() {
    // No prior output for the first point, so it stays zero; the zero then
    // participates in history for later repairs.
    let output = normalize(&series_of(&[0.0, 40.0, 0.0]));
    assert_eq!(values_of(&output), vec![0.0, 40.0, 20.0]);
}

#[test]
fn test_non_finite_coerces_to_zero_then_repairs() {
    let output = normalize(&series_of(&[50.0, f64::NAN]));
    assert_eq!(values_of(&output), vec![50.0, 50.0]);
}

#[test]
fn test_out_of_range_values_clamp() {
    let output = normalize(&series_of(&[150.0, -20.0]));
    assert_eq!(values_of(&output), vec![100.0, 0.0]);
}

#[test]
fn test_renormalizing_keeps_nonzero_values() {
    let once = normalize(&series_of(&[10.0, 0.0, 20.0, 0.0, 35.0]));
    let twice = normalize(&once);
    for (a, b) in once.iter().zip(&twice) {
        if a.value != 0.0 {
            assert_eq!(a.value, b.value);
        }
    }
}

#[test]
fn test_empty_series() {
    assert!(normalize(&[]).is_empty());
}
