//! Unit tests for distribution aggregation and legend partitioning

use aeolens::models::payload::SentimentCounts;
use aeolens::models::series::DistributionEntry;
use aeolens::transforms::distribution::{
    format_percent, from_counts, from_sentiment_counts, from_shares, partition,
    LEGEND_VISIBLE_ENTRIES,
};

#[test]
fn test_counts_sum_to_one_hundred() {
    let entries = from_counts(&[("a", 3), ("b", 5), ("c", 17)]);
    let sum: f64 = entries.iter().map(|e| e.value).sum();
    assert!((sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_counts_sorted_descending() {
    let entries = from_counts(&[("small", 1), ("big", 10), ("mid", 5)]);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["big", "mid", "small"]);
}

#[test]
fn test_zero_total_yields_zero_shares() {
    let entries = from_counts(&[("a", 0), ("b", 0)]);
    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.value, 0.0);
    }
}

#[test]
fn test_ties_keep_input_order() {
    let entries = from_counts(&[("first", 4), ("second", 4), ("third", 4)]);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn test_shares_pass_through_sorted() {
    let entries = from_shares(vec![
        DistributionEntry::new("x", 12.5),
        DistributionEntry::new("y", 60.0),
        DistributionEntry::new("z", 27.5),
    ]);
    assert_eq!(entries[0].name, "y");
    assert_eq!(entries[0].value, 60.0);
    assert_eq!(entries[2].name, "x");
}

#[test]
fn test_shares_coerce_non_finite_to_zero() {
    let entries = from_shares(vec![
        DistributionEntry::new("ok", 40.0),
        DistributionEntry::new("bad", f64::NAN),
    ]);
    assert_eq!(entries[1].name, "bad");
    assert_eq!(entries[1].value, 0.0);
}

#[test]
fn test_sentiment_counts_fixed_order_on_ties() {
    let counts = SentimentCounts {
        negative: 5,
        neutral: 5,
        positive: 5,
    };
    let entries = from_sentiment_counts(&counts);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["negative", "neutral", "positive"]);
}

#[test]
fn test_partition_within_limit() {
    let entries = from_counts(&[("a", 2), ("b", 1)]);
    let legend = partition(&entries, LEGEND_VISIBLE_ENTRIES);
    assert_eq!(legend.visible.len(), 2);
    assert!(!legend.has_more);
}

#[test]
fn test_partition_overflow() {
    let pairs: Vec<(String, u64)> = (0..10).map(|i| (format!("cat{}", i), 10 - i)).collect();
    let borrowed: Vec<(&str, u64)> = pairs.iter().map(|(n, c)| (n.as_str(), *c)).collect();
    let entries = from_counts(&borrowed);
    let legend = partition(&entries, LEGEND_VISIBLE_ENTRIES);
    assert_eq!(legend.visible.len(), LEGEND_VISIBLE_ENTRIES);
    assert!(legend.has_more);
    // The full ordered list stays intact for the expanded view.
    assert_eq!(entries.len(), 10);
}

#[test]
fn test_format_percent_one_decimal() {
    assert_eq!(format_percent(33.333), "33.3%");
    assert_eq!(format_percent(0.0), "0.0%");
    assert_eq!(format_percent(f64::NAN), "0.0%");
}
