//! Pipeline for request-driven filtering of record listings.
//!
//! This crate provides:
//! - QueryParams, the request parameters filters read from
//! - Filter trait and implementations (application type, enabled state, time range)
//! - FilterPipeline for composing filters
//! - ActiveFilters, the per-request summary of which filters were applied
//!
//! ## Architecture
//! Each filter owns one query parameter. A filter whose parameter is absent
//! passes records through; an active filter keeps the matching records in
//! their original order. The pipeline returns the surviving records together
//! with the active-filter summary instead of writing into shared state.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, Filtered, QueryParams};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(EnabledFilter)
//!     .add_filter(AppTypeFilter)
//!     .add_filter(TimeRangeFilter::new("created", DEFAULT_DATETIME_FORMAT));
//!
//! let params = QueryParams::parse("enabled=true&time=week");
//! let Filtered { records, active } = pipeline.apply(records, &params);
//! ```

pub mod active;
pub mod filter_pipeline;
pub mod filters;
pub mod params;
pub mod traits;

// Re-export main types
pub use active::{ActiveFilter, ActiveFilters};
pub use filter_pipeline::{FilterPipeline, Filtered};
pub use params::QueryParams;
pub use traits::Filter;
