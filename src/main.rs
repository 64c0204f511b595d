use serde::Deserialize;

use aeolens::config::Config;
use aeolens::models::payload::{SentimentPayload, TopicsCloudPayload, VisibilityPayload};
use aeolens::models::series::MetricPoint;
use aeolens::models::topics::TopicRow;
use aeolens::models::{FilterSpec, Granularity, SentimentCounts, TimeWindow};
use aeolens::query::canonicalize;
use aeolens::snapshot::{DashboardSnapshot, SnapshotBuilder};
use aeolens::transforms::distribution::format_percent;

#[derive(Debug, Default, Deserialize)]
struct DemoPayload {
    #[serde(default)]
    visibility: VisibilityPayload,
    #[serde(default)]
    sentiment: SentimentPayload,
    #[serde(default)]
    topics: TopicsCloudPayload,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    aeolens::logging::init_logging();

    let config = Config::from_env();
    let builder = SnapshotBuilder::new(config.clone())?;

    let payload: DemoPayload = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => sample_payload(),
    };

    let filters = FilterSpec::default()
        .with_model("all")
        .with_topic("admissions")
        .with_granularity(Granularity::Day);
    let query = canonicalize(&TimeWindow::Preset(config.default_period), Some(&filters));
    println!("Canonical query:");
    for (key, value) in query.pairs() {
        println!("  {} = {}", key, value);
    }
    println!();

    let snapshot = builder.build(&payload.visibility, &payload.sentiment, &payload.topics);
    print_snapshot(&snapshot);
    Ok(())
}

fn sample_payload() -> DemoPayload {
    DemoPayload {
        visibility: VisibilityPayload {
            visibility_score: 42.0,
            delta: 0.0,
            series: vec![
                MetricPoint::labeled("Mar 01", 38.0),
                MetricPoint::labeled("Mar 02", 41.0),
                MetricPoint::labeled("Mar 03", 0.0),
                MetricPoint::labeled("Mar 04", 0.0),
                MetricPoint::labeled("Mar 05", 45.5),
            ],
        },
        sentiment: SentimentPayload {
            timeseries: vec![],
            distribution: SentimentCounts {
                negative: 12,
                neutral: 45,
                positive: 93,
            },
            negatives: vec![],
            positives: vec![],
        },
        topics: TopicsCloudPayload {
            topics: vec![
                TopicRow::new("becas y ayudas", 34, 0.4),
                TopicRow::new("the core school reviews", 28, 0.7),
                TopicRow::new("empleabilidad cine", 19, 0.2),
                TopicRow::new("grado en animación", 15, 0.5),
                TopicRow::new("universidad pública madrid", 11, -0.1),
                TopicRow::new("ai in education", 9, 0.3),
            ],
            groups: vec![],
        },
    }
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!("Visibility:");
    for point in &snapshot.visibility_series {
        println!("  {:?}: {}", point.timestamp, format_percent(point.value));
    }
    println!("  delta: {:+.1}", snapshot.visibility_delta);

    println!("Sentiment breakdown:");
    for entry in &snapshot.sentiment_breakdown {
        println!("  {}: {}", entry.name, format_percent(entry.value));
    }
    println!(
        "  legend: {} visible, has_more={}",
        snapshot.sentiment_legend.visible.len(),
        snapshot.sentiment_legend.has_more
    );

    println!("Topic groups:");
    for group in &snapshot.topic_groups {
        println!(
            "  {} ({} menciones, avg sentiment {:.2})",
            group.group_name, group.total_occurrences, group.avg_sentiment
        );
        for topic in &group.topics {
            println!("    {} x{}", topic.topic, topic.count);
        }
    }
}
