//! Pure chart-ready transforms over raw metric payloads.

pub mod delta;
pub mod distribution;
pub mod series;

pub use delta::delta;
pub use distribution::{LegendView, LEGEND_VISIBLE_ENTRIES};
pub use series::{normalize, SmoothingWindow};
