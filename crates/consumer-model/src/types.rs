//! Core domain types for consumer administration.
//!
//! A consumer is an application registered against the management API.
//! It arrives as a [`ConsumerRecord`] with its creation date still a string,
//! and becomes a [`Consumer`] once scrubbed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// Type Aliases & Constants
// =============================================================================

/// Identifier of a consumer. The API sends numbers or strings depending on
/// its version, both are normalised to a string.
pub type ConsumerId = String;

/// Date-time format the management API uses for `created`.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// =============================================================================
// Field Access
// =============================================================================

/// Value of a single named field on a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
    Timestamp(NaiveDateTime),
}

/// Named-field access used by the generic filters.
///
/// Filters read records through this trait and never mutate them.
pub trait Record {
    /// Returns the value of `name`, or `None` if the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

// Fields shared by raw and scrubbed consumers. `created` is handled by the
// caller since its type differs between the two.
macro_rules! consumer_fields {
    ($record:expr, $name:expr) => {
        match $name {
            "consumer_id" => Some(FieldValue::Text(&$record.consumer_id)),
            "app_name" => Some(FieldValue::Text(&$record.app_name)),
            "app_type" => Some(FieldValue::Text(&$record.app_type)),
            "description" => Some(FieldValue::Text(&$record.description)),
            "developer_email" => Some(FieldValue::Text(&$record.developer_email)),
            "redirect_url" => Some(FieldValue::Text(&$record.redirect_url)),
            "created_by_user_id" => Some(FieldValue::Text(&$record.created_by_user_id)),
            "enabled" => Some(FieldValue::Flag($record.enabled)),
            _ => None,
        }
    };
}

// =============================================================================
// Consumer Types
// =============================================================================

/// A consumer exactly as the management API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumerRecord {
    #[serde(deserialize_with = "deserialize_consumer_id")]
    pub consumer_id: ConsumerId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub app_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub app_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub developer_email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub redirect_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_by_user_id: String,
    pub enabled: bool,
    /// Creation date, still in the API's string format
    pub created: String,
}

impl Record for ConsumerRecord {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "created" => Some(FieldValue::Text(&self.created)),
            other => consumer_fields!(self, other),
        }
    }
}

/// A consumer whose creation date has been parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consumer {
    pub consumer_id: ConsumerId,
    pub app_name: String,
    pub app_type: String,
    pub description: String,
    pub developer_email: String,
    pub redirect_url: String,
    pub created_by_user_id: String,
    pub enabled: bool,
    pub created: NaiveDateTime,
}

impl Record for Consumer {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "created" => Some(FieldValue::Timestamp(self.created)),
            other => consumer_fields!(self, other),
        }
    }
}

/// Body of `GET /management/consumers`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsumerList {
    #[serde(default)]
    pub list: Vec<ConsumerRecord>,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Aggregate counts shown above the consumer listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConsumerStatistics {
    pub consumers_num: usize,
    pub unique_developer_email_num: usize,
    pub unique_name_num: usize,
}

// =============================================================================
// Serde helpers
// =============================================================================

fn deserialize_consumer_id<'de, D>(deserializer: D) -> Result<ConsumerId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
