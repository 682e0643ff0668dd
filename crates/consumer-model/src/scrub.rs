//! Scrubbing turns raw API records into typed consumers.
//!
//! The only normalisation needed today is parsing `created` with the
//! configured date-time format. Every other field is carried over untouched.

use crate::error::{ModelError, Result};
use crate::types::{Consumer, ConsumerRecord};
use chrono::NaiveDateTime;
use rayon::prelude::*;
use tracing::debug;

impl ConsumerRecord {
    /// Parse `created` with `format` and produce a [`Consumer`].
    pub fn scrub(self, format: &str) -> Result<Consumer> {
        let created = NaiveDateTime::parse_from_str(&self.created, format).map_err(|source| {
            ModelError::DateFormat {
                consumer_id: self.consumer_id.clone(),
                field: "created".to_string(),
                value: self.created.clone(),
                format: format.to_string(),
                source,
            }
        })?;

        Ok(Consumer {
            consumer_id: self.consumer_id,
            app_name: self.app_name,
            app_type: self.app_type,
            description: self.description,
            developer_email: self.developer_email,
            redirect_url: self.redirect_url,
            created_by_user_id: self.created_by_user_id,
            enabled: self.enabled,
            created,
        })
    }
}

/// Scrub every record, keeping the input order.
///
/// Fails on the first record whose date does not parse; no partial result
/// is returned.
pub fn scrub(records: Vec<ConsumerRecord>, format: &str) -> Result<Vec<Consumer>> {
    let count = records.len();
    let consumers = records
        .into_par_iter()
        .map(|record| record.scrub(format))
        .collect::<Result<Vec<Consumer>>>()?;
    debug!("Scrubbed {} consumer records", count);
    Ok(consumers)
}
