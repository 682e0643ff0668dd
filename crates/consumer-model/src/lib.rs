//! # Consumer Model Crate
//!
//! Domain types for consumer administration and the small amount of
//! logic that operates directly on them.
//!
//! ## Main Components
//!
//! - **types**: `ConsumerRecord` (raw), `Consumer` (scrubbed), the `Record` field-access trait
//! - **scrub**: parse `created` into a `NaiveDateTime`
//! - **stats**: listing statistics
//! - **error**: error types for scrubbing
//!
//! ## Example Usage
//!
//! ```ignore
//! use consumer_model::{scrub, compute_statistics, DEFAULT_DATETIME_FORMAT};
//!
//! let consumers = scrub(records, DEFAULT_DATETIME_FORMAT)?;
//! let stats = compute_statistics(&consumers);
//! println!("{} consumers from {} developers", stats.consumers_num, stats.unique_developer_email_num);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod scrub;
pub mod stats;

// Re-export commonly used types for convenience
pub use error::{ModelError, Result};
pub use scrub::scrub;
pub use stats::compute_statistics;
pub use types::{
    // Type aliases & constants
    ConsumerId,
    DEFAULT_DATETIME_FORMAT,
    // Core types
    Consumer,
    ConsumerList,
    ConsumerRecord,
    ConsumerStatistics,
    // Field access
    FieldValue,
    Record,
};
