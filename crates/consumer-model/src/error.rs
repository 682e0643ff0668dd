//! Error types for the consumer-model crate.
//!
//! Only scrubbing can fail here: everything else in the crate is a pure
//! transformation over records that were already decoded.

use thiserror::Error;

/// Errors that can occur while normalising consumer records
#[derive(Error, Debug)]
pub enum ModelError {
    /// A date field did not match the configured date-time format
    ///
    /// Carries enough context to tell which record was rejected and why.
    #[error("Consumer {consumer_id}: {field} value {value:?} does not match format {format:?}: {source}")]
    DateFormat {
        consumer_id: String,
        field: String,
        value: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;
