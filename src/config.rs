//! Environment-driven runtime configuration.

use crate::models::filters::PresetPeriod;
use crate::taxonomy::classifier::DEFAULT_TOPIC_CAP;
use crate::taxonomy::config::DEFAULT_BRAND_MARKER;
use crate::transforms::distribution::LEGEND_VISIBLE_ENTRIES;

/// Get the current environment (production, sandbox, etc.)
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Canonical marker term for own-brand topic matching.
    pub brand_marker: String,
    /// Legend head size before overflow.
    pub legend_visible_entries: usize,
    /// Topic rows retained per taxonomy group.
    pub topic_list_cap: usize,
    /// Window applied when the UI has not picked one yet.
    pub default_period: PresetPeriod,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand_marker: DEFAULT_BRAND_MARKER.to_string(),
            legend_visible_entries: LEGEND_VISIBLE_ENTRIES,
            topic_list_cap: DEFAULT_TOPIC_CAP,
            default_period: PresetPeriod::Last30d,
        }
    }
}

impl Config {
    /// Defaults overridden from the environment where set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(brand) = std::env::var("AEOLENS_BRAND") {
            let brand = brand.trim().to_lowercase();
            if !brand.is_empty() {
                config.brand_marker = brand;
            }
        }
        if let Ok(period) = std::env::var("AEOLENS_DEFAULT_PERIOD") {
            config.default_period = PresetPeriod::parse(&period);
        }
        config
    }
}
