//! Deterministic, order-independent canonicalization of a time window
//! plus categorical filters.
//!
//! The output is a sorted key/value set, so two logically identical
//! filter states always canonicalize identically regardless of field
//! insertion order. The calling layer relies on this for memoization;
//! turning the set into an HTTP query string (and any percent-encoding)
//! is the transport layer's concern.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::filters::{FilterSpec, TimeWindow};

/// Window token used when a preset is unrecognized, or when a custom
/// window arrives without explicit bounds.
pub const DEFAULT_RANGE_TOKEN: &str = "30d";

/// Sentinel categorical value meaning "no filter".
const ALL_SENTINEL: &str = "all";

/// Order-independent query representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalQuery {
    params: BTreeMap<String, String>,
}

impl CanonicalQuery {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Key/value pairs in deterministic (sorted) order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    fn insert(&mut self, key: &str, value: impl Into<String>) {
        self.params.insert(key.to_string(), value.into());
    }
}

/// Canonicalize a time window and optional categorical filters.
///
/// An explicit instant pair encodes both bounds at caller-supplied
/// precision. A preset maps to its discrete window token; `custom`
/// without bounds deliberately falls back to the 30-day token. The
/// categorical fields are included only when present, non-empty and not
/// the `"all"` sentinel; granularity only when explicitly provided.
pub fn canonicalize(window: &TimeWindow, filters: Option<&FilterSpec>) -> CanonicalQuery {
    let mut query = CanonicalQuery::default();

    match window {
        TimeWindow::Range { from, to } => {
            query.insert("start_date", from.to_rfc3339());
            query.insert("end_date", to.to_rfc3339());
        }
        TimeWindow::Preset(preset) => {
            query.insert("range", preset.range_token().unwrap_or(DEFAULT_RANGE_TOKEN));
        }
    }

    if let Some(filters) = filters {
        let categorical = [
            ("model", filters.model.as_deref()),
            ("source", filters.source.as_deref()),
            ("topic", filters.topic.as_deref()),
            ("brand", filters.brand.as_deref()),
        ];
        for (key, value) in categorical {
            if let Some(value) = value {
                let value = value.trim();
                if !value.is_empty() && value != ALL_SENTINEL {
                    query.insert(key, value);
                }
            }
        }
        if let Some(granularity) = filters.granularity {
            query.insert("granularity", granularity.as_str());
        }
    }

    query
}
