//! One-payload-in, one-render-ready-snapshot-out composition of the
//! transform stages.
//!
//! The transforms themselves are independent pure stages; this module is
//! the composition the rendering layer would otherwise do by hand, kept
//! here so the demo binary and integration tests exercise the whole
//! pipeline. It performs no I/O and holds no state across calls.

use tracing::debug;

use crate::config::Config;
use crate::models::payload::{SentimentPayload, TopicsCloudPayload, VisibilityPayload};
use crate::models::series::{DistributionEntry, MetricPoint, PointStamp};
use crate::models::topics::TopicGroup;
use crate::taxonomy::classifier::TopicClassifier;
use crate::taxonomy::config::{Taxonomy, TaxonomyError};
use crate::transforms::distribution::{self, LegendView};
use crate::transforms::{delta, series};

/// Render-ready view of one complete dashboard payload.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Gap-smoothed visibility series, bounded to `[0, 100]`.
    pub visibility_series: Vec<MetricPoint>,
    pub visibility_delta: f64,
    /// Sentiment averages rescaled from `[-1, 1]` onto the chart scale.
    pub sentiment_series: Vec<MetricPoint>,
    pub sentiment_delta: f64,
    /// Full sorted sentiment breakdown, full-precision shares.
    pub sentiment_breakdown: Vec<DistributionEntry>,
    pub sentiment_legend: LegendView,
    /// Server-side groups when supplied, taxonomy fallback otherwise.
    pub topic_groups: Vec<TopicGroup>,
}

/// Builds snapshots from raw payloads using one compiled taxonomy.
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    config: Config,
    classifier: TopicClassifier,
}

impl SnapshotBuilder {
    /// Compile the taxonomy for the configured brand marker. The only
    /// fallible step; building snapshots afterwards cannot fail.
    pub fn new(config: Config) -> Result<Self, TaxonomyError> {
        let taxonomy = Taxonomy::with_brand_marker(&config.brand_marker)?;
        let classifier = TopicClassifier::new(taxonomy).with_topic_cap(config.topic_list_cap);
        Ok(Self { config, classifier })
    }

    pub fn build(
        &self,
        visibility: &VisibilityPayload,
        sentiment: &SentimentPayload,
        topics: &TopicsCloudPayload,
    ) -> DashboardSnapshot {
        let visibility_series = series::normalize(&visibility.series);
        let visibility_delta = delta::delta(&visibility_series);

        // Sentiment averages are already dense per bucket; they only need
        // rescaling and bounding, not zero repair.
        let sentiment_series: Vec<MetricPoint> = sentiment
            .timeseries
            .iter()
            .map(|sample| MetricPoint {
                timestamp: PointStamp::Label(sample.date.clone()),
                value: scale_sentiment(sample.avg),
            })
            .collect();
        let sentiment_delta = delta::delta(&sentiment_series);

        let sentiment_breakdown = distribution::from_sentiment_counts(&sentiment.distribution);
        let sentiment_legend =
            distribution::partition(&sentiment_breakdown, self.config.legend_visible_entries);

        let topic_groups = if topics.groups.is_empty() {
            debug!(
                topics = topics.topics.len(),
                "payload carried no groups, running taxonomy fallback"
            );
            self.classifier.classify(&topics.topics)
        } else {
            topics.groups.clone()
        };

        DashboardSnapshot {
            visibility_series,
            visibility_delta,
            sentiment_series,
            sentiment_delta,
            sentiment_breakdown,
            sentiment_legend,
            topic_groups,
        }
    }
}

/// Map an average sentiment score in `[-1, 1]` onto the 0-100 chart
/// scale. Non-finite scores coerce to 0 (the neutral midpoint) first.
pub fn scale_sentiment(avg: f64) -> f64 {
    let avg = if avg.is_finite() { avg } else { 0.0 };
    (((avg + 1.0) / 2.0) * 100.0).clamp(0.0, 100.0)
}
