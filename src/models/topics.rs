use serde::{Deserialize, Serialize};

/// Flat topic occurrence row from the topics-cloud payload. Immutable
/// input to classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRow {
    pub topic: String,
    pub count: u64,
    #[serde(default)]
    pub avg_sentiment: f64,
}

impl TopicRow {
    pub fn new(topic: impl Into<String>, count: u64, avg_sentiment: f64) -> Self {
        Self {
            topic: topic.into(),
            count,
            avg_sentiment,
        }
    }
}

/// Rolled-up topic category ready for collapsible-table rendering.
///
/// `total_occurrences` equals the sum of the constituent row counts and
/// `avg_sentiment` is their occurrence-weighted mean (0 when the group
/// total is zero). Topics are sorted descending by count and capped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub group_name: String,
    pub total_occurrences: u64,
    #[serde(default)]
    pub avg_sentiment: f64,
    #[serde(default)]
    pub topics: Vec<TopicRow>,
}
