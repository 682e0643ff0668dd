//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::active::ActiveFilters;
use crate::params::QueryParams;
use crate::traits::Filter;

/// Records that survived every filter, plus which filters were active.
#[derive(Debug, Clone)]
pub struct Filtered<R> {
    pub records: Vec<R>,
    pub active: ActiveFilters,
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(EnabledFilter)
///     .add_filter(AppTypeFilter)
///     .add_filter(TimeRangeFilter::new("created", DEFAULT_DATETIME_FORMAT));
///
/// let Filtered { records, active } = pipeline.apply(records, &params);
/// ```
pub struct FilterPipeline<R> {
    filters: Vec<Box<dyn Filter<R>>>,
}

impl<R> FilterPipeline<R> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait for `R`
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter<R> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the records.
    ///
    /// ## Algorithm
    /// 1. Start with the input records
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter, recording whether it was active
    ///    c. Log output count
    /// 3. Return the final set with the active-filter summary
    ///
    /// # Arguments
    /// * `records` - The records to filter
    /// * `params` - Request parameters that activate filters
    pub fn apply(&self, records: Vec<R>, params: &QueryParams) -> Filtered<R> {
        let mut current = records;
        let mut active = ActiveFilters::new();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            let (kept, state) = filter.apply(current, params);
            current = kept;
            tracing::debug!(
                "Filter applied: {} (active: {:?}, output count: {})",
                filter.name(),
                state.value,
                current.len()
            );
            active.push(state);
        }
        Filtered {
            records: current,
            active,
        }
    }
}

impl<R> Default for FilterPipeline<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{AppTypeFilter, EnabledFilter};
    use consumer_model::ConsumerRecord;

    fn record(id: &str, app_type: &str, enabled: bool) -> ConsumerRecord {
        ConsumerRecord {
            consumer_id: id.to_string(),
            app_name: format!("app-{}", id),
            app_type: app_type.to_string(),
            description: String::new(),
            developer_email: "dev@example.com".to_string(),
            redirect_url: String::new(),
            created_by_user_id: String::new(),
            enabled,
            created: "2018-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline: FilterPipeline<ConsumerRecord> = FilterPipeline::new();
        let records = vec![record("1", "Web", true), record("2", "Mobile", false)];

        let filtered = pipeline.apply(records.clone(), &QueryParams::parse("enabled=true"));
        assert_eq!(filtered.records, records);
        assert!(filtered.active.is_empty());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(EnabledFilter);
        let records = vec![record("1", "Web", true), record("2", "Mobile", false)];

        let filtered = pipeline.apply(records, &QueryParams::parse("enabled=false"));
        assert_eq!(filtered.records.len(), 1);
        assert_eq!(filtered.records[0].consumer_id, "2");
        assert_eq!(filtered.active.value("enabled"), Some("false"));
    }

    #[test]
    fn test_filters_intersect_in_any_order() {
        let records = vec![
            record("1", "Web", true),
            record("2", "Web", false),
            record("3", "Mobile", true),
            record("4", "Web", true),
        ];
        let params = QueryParams::parse("enabled=true&app_type=Web");

        let forward = FilterPipeline::new()
            .add_filter(EnabledFilter)
            .add_filter(AppTypeFilter)
            .apply(records.clone(), &params);
        let backward = FilterPipeline::new()
            .add_filter(AppTypeFilter)
            .add_filter(EnabledFilter)
            .apply(records, &params);

        assert_eq!(forward.records, backward.records);
        let ids: Vec<_> = forward.records.iter().map(|r| r.consumer_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }
}
