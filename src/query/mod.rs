//! Canonical query representation for dashboard filter states.

pub mod canonical;

pub use canonical::{canonicalize, CanonicalQuery, DEFAULT_RANGE_TOKEN};
