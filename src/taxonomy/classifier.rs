//! Occurrence- and sentiment-weighted roll-up of classified topic rows.

use tracing::debug;

use crate::models::topics::{TopicGroup, TopicRow};
use crate::taxonomy::config::{Taxonomy, TopicCategory};

/// Maximum topic rows retained per group.
pub const DEFAULT_TOPIC_CAP: usize = 100;

#[derive(Debug, Default)]
struct GroupAccumulator {
    total: u64,
    weighted_sentiment: f64,
    topics: Vec<TopicRow>,
}

/// Groups free-text topic rows into the fixed taxonomy categories.
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    taxonomy: Taxonomy,
    topic_cap: usize,
}

impl TopicClassifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            topic_cap: DEFAULT_TOPIC_CAP,
        }
    }

    pub fn with_topic_cap(mut self, topic_cap: usize) -> Self {
        self.topic_cap = topic_cap;
        self
    }

    /// Assign each row to exactly one category and aggregate per group.
    ///
    /// Every row is counted once, so the group totals conserve the input
    /// counts. Group sentiment is the occurrence-weighted mean of the row
    /// sentiments (0 for a zero-occurrence group). Groups with no rows
    /// are omitted; the rest come out in category priority order with
    /// their topic lists sorted descending by count and capped.
    pub fn classify(&self, rows: &[TopicRow]) -> Vec<TopicGroup> {
        let mut buckets: [GroupAccumulator; 6] = Default::default();

        for row in rows {
            let category = self.taxonomy.category_for(&row.topic);
            let bucket = &mut buckets[category.index()];
            bucket.total += row.count;
            let sentiment = if row.avg_sentiment.is_finite() {
                row.avg_sentiment
            } else {
                0.0
            };
            bucket.weighted_sentiment += sentiment * row.count as f64;
            bucket.topics.push(row.clone());
        }

        let groups: Vec<TopicGroup> = TopicCategory::PRIORITY_ORDER
            .iter()
            .zip(buckets)
            .filter(|(_, bucket)| !bucket.topics.is_empty())
            .map(|(category, mut bucket)| {
                let avg_sentiment = if bucket.total > 0 {
                    bucket.weighted_sentiment / bucket.total as f64
                } else {
                    0.0
                };
                bucket.topics.sort_by(|a, b| b.count.cmp(&a.count));
                bucket.topics.truncate(self.topic_cap);
                TopicGroup {
                    group_name: category.display_name().to_string(),
                    total_occurrences: bucket.total,
                    avg_sentiment,
                    topics: bucket.topics,
                }
            })
            .collect();

        debug!(rows = rows.len(), groups = groups.len(), "classified topic rows");
        groups
    }
}
