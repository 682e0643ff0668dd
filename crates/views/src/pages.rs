//! Page models returned by the views.
//!
//! These are what a template or a JSON client renders; they carry no
//! behaviour of their own.

use consumer_model::{Consumer, ConsumerStatistics};
use pipeline::ActiveFilters;
use serde::Serialize;

use crate::notifications::Notification;

/// The consumer listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexPage {
    /// Filtered consumers, newest first
    pub consumers: Vec<Consumer>,
    pub statistics: ConsumerStatistics,
    pub active_filters: ActiveFilters,
    pub notifications: Vec<Notification>,
}

/// A single consumer.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DetailPage {
    /// `None` when the consumer could not be fetched or read
    pub consumer: Option<Consumer>,
    pub notifications: Vec<Notification>,
}

/// Result of enabling or disabling a consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    pub notification: Notification,
    pub redirect_url: String,
}
