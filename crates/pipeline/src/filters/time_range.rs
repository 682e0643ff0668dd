//! Filter records by how recently a date field was set.
//!
//! The activation value names a period (`hour`, `week`, ...). Records whose
//! date field falls inside that period, counted back from now, are kept.

use crate::active::ActiveFilter;
use crate::params::QueryParams;
use crate::traits::{Filter, activation_value};
use chrono::{Duration, NaiveDateTime, Utc};
use consumer_model::{FieldValue, Record};
use std::str::FromStr;
use tracing::warn;

/// Look-back periods understood by [`TimeRangeFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Minute,
    Hour,
    Day,
    Week,
    /// 30 days
    Month,
    /// 365 days
    Year,
}

impl TimePeriod {
    pub fn duration(self) -> Duration {
        match self {
            TimePeriod::Minute => Duration::minutes(1),
            TimePeriod::Hour => Duration::hours(1),
            TimePeriod::Day => Duration::days(1),
            TimePeriod::Week => Duration::weeks(1),
            TimePeriod::Month => Duration::days(30),
            TimePeriod::Year => Duration::days(365),
        }
    }
}

impl FromStr for TimePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute" => Ok(TimePeriod::Minute),
            "hour" => Ok(TimePeriod::Hour),
            "day" => Ok(TimePeriod::Day),
            "week" => Ok(TimePeriod::Week),
            "month" => Ok(TimePeriod::Month),
            "year" => Ok(TimePeriod::Year),
            other => Err(format!("unknown time period: {}", other)),
        }
    }
}

/// Keeps records whose date `field` is newer than `now - period`.
///
/// ## Algorithm
/// 1. Resolve the activation value to a [`TimePeriod`]; unknown periods keep nothing
/// 2. Compute the cut-off once per apply
/// 3. Read each record's date field: timestamps are used as-is, text is
///    parsed with `datetime_format`, unreadable dates do not match
pub struct TimeRangeFilter {
    field: String,
    param_key: String,
    datetime_format: String,
    now: Option<NaiveDateTime>,
}

impl TimeRangeFilter {
    pub const DEFAULT_PARAM: &'static str = "time";

    /// Create a new TimeRangeFilter.
    ///
    /// # Arguments
    /// * `field` - Name of the date field to test (e.g. `created`)
    /// * `datetime_format` - chrono format used when the field is still text
    pub fn new(field: impl Into<String>, datetime_format: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            param_key: Self::DEFAULT_PARAM.to_string(),
            datetime_format: datetime_format.into(),
            now: None,
        }
    }

    /// Read the activation value from `key` instead of `time`.
    pub fn with_param_key(mut self, key: impl Into<String>) -> Self {
        self.param_key = key.into();
        self
    }

    /// Pin "now" (UTC) instead of reading the clock on every apply.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    fn cutoff(&self, value: &str) -> Option<NaiveDateTime> {
        let period = value.parse::<TimePeriod>().ok()?;
        let now = self.now.unwrap_or_else(|| Utc::now().naive_utc());
        Some(now - period.duration())
    }

    fn record_time<R: Record>(&self, record: &R) -> Option<NaiveDateTime> {
        match record.field(&self.field)? {
            FieldValue::Timestamp(ts) => Some(ts),
            FieldValue::Text(raw) => NaiveDateTime::parse_from_str(raw, &self.datetime_format).ok(),
            FieldValue::Flag(_) => None,
        }
    }

    /// Whether `record`'s date is strictly newer than `cutoff`.
    fn is_after<R: Record>(&self, record: &R, cutoff: NaiveDateTime) -> bool {
        self.record_time(record).is_some_and(|ts| ts > cutoff)
    }
}

impl<R: Record> Filter<R> for TimeRangeFilter {
    fn name(&self) -> &str {
        "TimeRangeFilter"
    }

    fn param_key(&self) -> &str {
        &self.param_key
    }

    /// Reads the clock on every call unless `now` is pinned; `apply`
    /// computes the cut-off once for the whole batch.
    fn matches(&self, record: &R, value: &str) -> bool {
        self.cutoff(value)
            .is_some_and(|cutoff| self.is_after(record, cutoff))
    }

    fn apply(&self, records: Vec<R>, params: &QueryParams) -> (Vec<R>, ActiveFilter) {
        let Some(value) = activation_value(params, &self.param_key) else {
            return (records, ActiveFilter::inactive(self.param_key.as_str()));
        };
        let active = ActiveFilter::active(self.param_key.as_str(), value);

        let Some(cutoff) = self.cutoff(value) else {
            warn!("Unknown time period {:?} for field {}", value, self.field);
            return (Vec::new(), active);
        };

        let filtered = records
            .into_iter()
            .filter(|record| self.is_after(record, cutoff))
            .collect();
        (filtered, active)
    }
}
