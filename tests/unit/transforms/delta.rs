//! Unit tests for net-change computation

use aeolens::models::series::MetricPoint;
use aeolens::transforms::delta::delta;

fn series_of(values: &[f64]) -> Vec<MetricPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| MetricPoint::at_millis(i as i64, value))
        .collect()
}

#[test]
fn test_delta_first_to_last() {
    assert_eq!(delta(&series_of(&[10.0, 25.0])), 15.0);
}

#[test]
fn test_delta_negative_change() {
    assert_eq!(delta(&series_of(&[40.0, 60.0, 25.5])), -14.5);
}

#[test]
fn test_delta_rounds_to_one_decimal() {
    assert_eq!(delta(&series_of(&[10.0, 25.07])), 15.1);
    assert_eq!(delta(&series_of(&[10.0, 25.04])), 15.0);
}

#[test]
fn test_delta_short_series_is_zero() {
    assert_eq!(delta(&series_of(&[5.0])), 0.0);
    assert_eq!(delta(&[]), 0.0);
}

#[test]
fn test_delta_skips_non_finite_values() {
    assert_eq!(delta(&series_of(&[f64::NAN, 10.0, f64::INFINITY, 25.0])), 15.0);
    // Only one finite point left: degrades to zero.
    assert_eq!(delta(&series_of(&[f64::NAN, 10.0])), 0.0);
}
