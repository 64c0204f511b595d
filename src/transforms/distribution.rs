//! Percentage-share distributions for pie and legend rendering.
//!
//! Two explicit entry points cover the two payload shapes the backend
//! produces: raw category counts and pre-computed shares. Both funnel
//! through the same stable descending sort, so the authoritative
//! representation is always unambiguous at the call site.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::payload::SentimentCounts;
use crate::models::series::DistributionEntry;

/// Legend head size before entries spill into the "see all" view.
pub const LEGEND_VISIBLE_ENTRIES: usize = 7;

/// Head of a sorted distribution for compact legend display. The full
/// ordered list stays with the caller for the expanded view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendView {
    pub visible: Vec<DistributionEntry>,
    pub has_more: bool,
}

/// Percentage shares from raw category counts, sorted descending.
///
/// A zero total divides by 1 instead, yielding all-zero percentages
/// rather than a division error.
pub fn from_counts(pairs: &[(&str, u64)]) -> Vec<DistributionEntry> {
    let total: u64 = pairs.iter().map(|(_, count)| count).sum();
    let divisor = if total == 0 { 1.0 } else { total as f64 };

    let entries = pairs
        .iter()
        .map(|(name, count)| DistributionEntry::new(*name, *count as f64 / divisor * 100.0))
        .collect();
    sort_descending(entries)
}

/// Pass-through for values already expressed as shares: non-finite
/// values coerce to 0, then the same descending sort applies.
pub fn from_shares(entries: Vec<DistributionEntry>) -> Vec<DistributionEntry> {
    let cleaned = entries
        .into_iter()
        .map(|mut entry| {
            if !entry.value.is_finite() {
                entry.value = 0.0;
            }
            entry
        })
        .collect();
    sort_descending(cleaned)
}

/// Sentiment bucket counts in the fixed negative/neutral/positive order.
pub fn from_sentiment_counts(counts: &SentimentCounts) -> Vec<DistributionEntry> {
    from_counts(&[
        ("negative", counts.negative),
        ("neutral", counts.neutral),
        ("positive", counts.positive),
    ])
}

/// Split a sorted distribution into the visible legend head and an
/// overflow flag.
pub fn partition(entries: &[DistributionEntry], visible_len: usize) -> LegendView {
    LegendView {
        visible: entries.iter().take(visible_len).cloned().collect(),
        has_more: entries.len() > visible_len,
    }
}

/// One-decimal display formatting. The aggregation functions themselves
/// return full-precision floats; rounding belongs to the presentation
/// boundary.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", if value.is_finite() { value } else { 0.0 })
}

// Stable sort: ties keep their input order.
fn sort_descending(mut entries: Vec<DistributionEntry>) -> Vec<DistributionEntry> {
    entries.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    entries
}
