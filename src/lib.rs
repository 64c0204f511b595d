//! Analytics normalization core for AI answer-engine brand dashboards.
//!
//! Every transform in this crate is a synchronous pure function with a
//! "never throw, always degrade" contract: malformed numerics coerce to
//! zero, empty aggregations yield zero percentages, and unknown labels
//! fall through to a catch-all bucket. Charts render directly from the
//! output with no further validation.

pub mod config;
pub mod logging;
pub mod models;
pub mod query;
pub mod snapshot;
pub mod taxonomy;
pub mod transforms;
