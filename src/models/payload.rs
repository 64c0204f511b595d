//! JSON-shaped payloads crossing the transport boundary.
//!
//! These mirror the backend API responses. Optional sections default to
//! empty so a partial payload still deserializes; the transforms take
//! care of degrading gracefully from there.

use serde::{Deserialize, Serialize};

use crate::models::series::MetricPoint;
use crate::models::topics::{TopicGroup, TopicRow};

/// Three-way sentiment bucket counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentCounts {
    #[serde(default)]
    pub negative: u64,
    #[serde(default)]
    pub neutral: u64,
    #[serde(default)]
    pub positive: u64,
}

/// One bucket of the sentiment time series: average score in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSample {
    pub date: String,
    #[serde(default)]
    pub avg: f64,
}

/// A highlighted mention surfaced alongside the sentiment charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentHighlight {
    pub id: i64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_topics: Vec<String>,
    #[serde(default)]
    pub source_title: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub sentiment: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentPayload {
    #[serde(default)]
    pub timeseries: Vec<SentimentSample>,
    #[serde(default)]
    pub distribution: SentimentCounts,
    #[serde(default)]
    pub negatives: Vec<SentimentHighlight>,
    #[serde(default)]
    pub positives: Vec<SentimentHighlight>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibilityPayload {
    #[serde(default)]
    pub visibility_score: f64,
    #[serde(default)]
    pub delta: f64,
    #[serde(default)]
    pub series: Vec<MetricPoint>,
}

/// Flat topic list plus optional server-side groups. When `groups` is
/// empty the fallback taxonomy classifier runs over `topics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicsCloudPayload {
    #[serde(default)]
    pub topics: Vec<TopicRow>,
    #[serde(default)]
    pub groups: Vec<TopicGroup>,
}
