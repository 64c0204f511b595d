use serde::{Deserialize, Serialize};

/// Timestamp of a metric point as delivered by the backend: either epoch
/// milliseconds or an opaque date label. Transforms never interpret it,
/// they only carry it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointStamp {
    Millis(i64),
    Label(String),
}

/// One point of a chart-bound metric series.
///
/// After normalization `value` is finite and lies in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    #[serde(alias = "date", alias = "ts")]
    pub timestamp: PointStamp,
    pub value: f64,
}

impl MetricPoint {
    pub fn at_millis(millis: i64, value: f64) -> Self {
        Self {
            timestamp: PointStamp::Millis(millis),
            value,
        }
    }

    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self {
            timestamp: PointStamp::Label(label.into()),
            value,
        }
    }
}

/// One slice of a proportional (pie-style) breakdown. `value` is a
/// percentage share; a snapshot's entries sum to 100 when the source
/// total is nonzero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub value: f64,
}

impl DistributionEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
