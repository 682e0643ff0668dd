//! Summary of which filters a request activated.
//!
//! Returned next to the filtered records so a front end can show, for
//! example, which filter buttons are selected.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// State of one filter after it was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub key: String,
    pub value: Option<String>,
}

impl ActiveFilter {
    pub fn inactive(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn active(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn is_active(&self) -> bool {
        self.value.is_some()
    }
}

/// Ordered collection of [`ActiveFilter`], one entry per pipeline filter.
///
/// Serializes as a map from parameter key to value (`null` when inactive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveFilters {
    filters: Vec<ActiveFilter>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: ActiveFilter) {
        self.filters.push(filter);
    }

    /// Value of the filter bound to `key`, if that filter is active.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.value.as_deref())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Serialize for ActiveFilters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.filters.len()))?;
        for filter in &self.filters {
            map.serialize_entry(&filter.key, &filter.value)?;
        }
        map.end()
    }
}
