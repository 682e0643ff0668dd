//! Filter consumers by enabled state.

use crate::traits::Filter;
use consumer_model::{FieldValue, Record};

/// Keeps records whose `enabled` flag matches the `enabled` parameter.
///
/// ## Algorithm
/// The literal `"true"` selects enabled records; any other value
/// (`"false"`, `"no"`, `"1"`) selects disabled ones.
pub struct EnabledFilter;

impl EnabledFilter {
    pub const PARAM: &'static str = "enabled";
    const FIELD: &'static str = "enabled";
}

impl<R: Record> Filter<R> for EnabledFilter {
    fn name(&self) -> &str {
        "EnabledFilter"
    }

    fn param_key(&self) -> &str {
        Self::PARAM
    }

    fn matches(&self, record: &R, value: &str) -> bool {
        let wanted = value == "true";
        matches!(record.field(Self::FIELD), Some(FieldValue::Flag(enabled)) if enabled == wanted)
    }
}
