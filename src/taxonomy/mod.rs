//! Fallback topic taxonomy: ordered keyword predicates over free-text
//! topic labels, used when the backend supplies no pre-grouped topics.

pub mod classifier;
pub mod config;

pub use classifier::TopicClassifier;
pub use config::{Taxonomy, TaxonomyError, TopicCategory, DEFAULT_BRAND_MARKER};
