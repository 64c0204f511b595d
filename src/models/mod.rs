//! Shared data models spanning the transform layers.

pub mod filters;
pub mod payload;
pub mod series;
pub mod topics;

pub use filters::{FilterSpec, Granularity, PresetPeriod, TimeWindow};
pub use payload::{
    SentimentCounts, SentimentHighlight, SentimentPayload, SentimentSample, TopicsCloudPayload,
    VisibilityPayload,
};
pub use series::{DistributionEntry, MetricPoint, PointStamp};
pub use topics::{TopicGroup, TopicRow};
