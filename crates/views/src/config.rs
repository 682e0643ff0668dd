use consumer_model::DEFAULT_DATETIME_FORMAT;

/// Where the listing lives when a toggle does not say where to go back to.
pub const DEFAULT_NEXT: &str = "/consumers/";

/// Settings for [`ConsumerViews`](crate::ConsumerViews).
#[derive(Debug, Clone)]
pub struct ViewsConfig {
    /// chrono format of the API's `created` field
    pub datetime_format: String,
    pub default_next: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            default_next: DEFAULT_NEXT.to_string(),
        }
    }
}
