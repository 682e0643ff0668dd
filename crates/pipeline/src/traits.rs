//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! request-driven filters to be applied to record collections.

use crate::active::ActiveFilter;
use crate::params::QueryParams;

/// Core trait for filtering records of type `R`.
///
/// A filter is bound to one query parameter. When that parameter is missing
/// or empty the filter passes records through untouched; otherwise it keeps
/// the records for which [`Filter::matches`] holds.
///
/// ## Design Note
/// - `Send + Sync` allows a pipeline to be shared behind an `Arc`
/// - Filters take ownership of the Vec<R> and return a filtered Vec
/// - Relative order of the kept records is never changed
pub trait Filter<R>: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Query parameter that activates this filter
    fn param_key(&self) -> &str;

    /// Predicate for a single record given the activation value
    fn matches(&self, record: &R, value: &str) -> bool;

    /// Apply this filter to a set of records.
    ///
    /// # Arguments
    /// * `records` - The records to filter (takes ownership)
    /// * `params` - Request parameters holding the activation value
    ///
    /// # Returns
    /// The kept records and this filter's entry for the active-filter summary
    fn apply(&self, records: Vec<R>, params: &QueryParams) -> (Vec<R>, ActiveFilter) {
        let key = self.param_key();
        match activation_value(params, key) {
            None => (records, ActiveFilter::inactive(key)),
            Some(value) => {
                let filtered = records
                    .into_iter()
                    .filter(|record| self.matches(record, value))
                    .collect();
                (filtered, ActiveFilter::active(key, value))
            }
        }
    }
}

/// Activation value for `key`. An empty value counts as absent.
pub fn activation_value<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    params.get(key).filter(|value| !value.is_empty())
}
