//! Filter consumers by application type.

use crate::traits::Filter;
use consumer_model::{FieldValue, Record};

/// Keeps records whose `app_type` equals the `app_type` parameter exactly.
///
/// An unknown application type is not an error, it simply matches nothing.
pub struct AppTypeFilter;

impl AppTypeFilter {
    pub const PARAM: &'static str = "app_type";
    const FIELD: &'static str = "app_type";
}

impl<R: Record> Filter<R> for AppTypeFilter {
    fn name(&self) -> &str {
        "AppTypeFilter"
    }

    fn param_key(&self) -> &str {
        Self::PARAM
    }

    fn matches(&self, record: &R, value: &str) -> bool {
        matches!(record.field(Self::FIELD), Some(FieldValue::Text(app_type)) if app_type == value)
    }
}
