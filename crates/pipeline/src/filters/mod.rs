//! Filter implementations for record listings.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod app_type;
pub mod enabled;
pub mod time_range;

// Re-export for convenience
pub use app_type::AppTypeFilter;
pub use enabled::EnabledFilter;
pub use time_range::{TimePeriod, TimeRangeFilter};
