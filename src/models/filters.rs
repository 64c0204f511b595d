//! Date-range and categorical filter models for query canonicalization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time-bucketing resolution of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Hour,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Hour => "hour",
        }
    }
}

/// Named relative time window, as opposed to an explicit instant pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresetPeriod {
    Last24h,
    Last7d,
    Last30d,
    Last90d,
    Custom,
}

impl PresetPeriod {
    /// Parse a UI period token. Unknown tokens map to `Custom`, which the
    /// canonicalizer later resolves to the 30-day default window.
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "24h" => PresetPeriod::Last24h,
            "7d" => PresetPeriod::Last7d,
            "30d" => PresetPeriod::Last30d,
            "90d" => PresetPeriod::Last90d,
            _ => PresetPeriod::Custom,
        }
    }

    /// Discrete window token understood by the backend, when one exists.
    pub fn range_token(&self) -> Option<&'static str> {
        match self {
            PresetPeriod::Last24h => Some("24h"),
            PresetPeriod::Last7d => Some("7d"),
            PresetPeriod::Last30d => Some("30d"),
            PresetPeriod::Last90d => Some("90d"),
            PresetPeriod::Custom => None,
        }
    }
}

/// Required time window of a filter state: a named preset or an explicit
/// inclusive instant pair.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeWindow {
    Preset(PresetPeriod),
    Range {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

impl TimeWindow {
    pub fn from_token(token: &str) -> Self {
        TimeWindow::Preset(PresetPeriod::parse(token))
    }
}

/// Categorical dashboard filters. The sentinel value `"all"` means "no
/// filter" and is dropped during canonicalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<Granularity>,
}

impl FilterSpec {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = Some(granularity);
        self
    }
}
