//! # Consumer Views
//!
//! This module coordinates a request against the management API:
//! 1. Fetch consumers from the repository
//! 2. Apply the request's filters
//! 3. Scrub the survivors and sort them newest first
//! 4. Compute statistics
//! 5. Turn every failure into a notification on the page
//!
//! Enabling and disabling a consumer issue a single update and always
//! produce a redirect back to the listing.

use std::sync::Arc;
use std::time::Instant;

use consumer_model::{Consumer, ConsumerRecord, compute_statistics, scrub};
use obp_client::ConsumerRepository;
use pipeline::filters::{AppTypeFilter, EnabledFilter, TimeRangeFilter};
use pipeline::{FilterPipeline, Filtered, QueryParams};
use tracing::{error, info, warn};

use crate::config::ViewsConfig;
use crate::notifications::Notification;
use crate::pages::{DetailPage, IndexPage, ToggleOutcome};

/// Field the time filter reads.
const CREATED_FIELD: &str = "created";

/// The filters the listing applies, in order.
pub fn consumer_pipeline(datetime_format: &str) -> FilterPipeline<ConsumerRecord> {
    FilterPipeline::new()
        .add_filter(EnabledFilter)
        .add_filter(AppTypeFilter)
        .add_filter(TimeRangeFilter::new(CREATED_FIELD, datetime_format))
}

/// Views over the consumers exposed by a [`ConsumerRepository`].
#[derive(Clone)]
pub struct ConsumerViews {
    repo: Arc<dyn ConsumerRepository>,
    filter_pipeline: Arc<FilterPipeline<ConsumerRecord>>,
    config: ViewsConfig,
}

impl ConsumerViews {
    pub fn new(repo: Arc<dyn ConsumerRepository>, config: ViewsConfig) -> Self {
        let filter_pipeline = Arc::new(consumer_pipeline(&config.datetime_format));
        Self {
            repo,
            filter_pipeline,
            config,
        }
    }

    /// Replace the listing's filters.
    pub fn with_pipeline(mut self, pipeline: FilterPipeline<ConsumerRecord>) -> Self {
        self.filter_pipeline = Arc::new(pipeline);
        self
    }

    pub fn config(&self) -> &ViewsConfig {
        &self.config
    }

    /// The consumer listing.
    ///
    /// Never fails: an unreachable API or an unreadable record leaves the
    /// listing empty and adds an error notification.
    pub async fn index(&self, params: &QueryParams) -> IndexPage {
        let start_time = Instant::now();
        let mut notifications = Vec::new();

        let records = match self.repo.list_consumers().await {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to list consumers: {}", e);
                notifications.push(Notification::error(e.to_string()));
                Vec::new()
            }
        };
        info!("Fetched {} consumers", records.len());

        // Filtering and scrubbing are CPU-bound
        let processed = tokio::task::spawn_blocking({
            let filter_pipeline = self.filter_pipeline.clone();
            let params = params.clone();
            let format = self.config.datetime_format.clone();
            move || {
                let Filtered { records, active } = filter_pipeline.apply(records, &params);
                (scrub(records, &format), active)
            }
        })
        .await;

        let (scrubbed, active_filters) = match processed {
            Ok(processed) => processed,
            Err(e) => {
                error!("Consumer processing task failed: {}", e);
                notifications.push(Notification::error(format!(
                    "Could not process consumers: {}",
                    e
                )));
                return IndexPage {
                    notifications,
                    ..IndexPage::default()
                };
            }
        };

        let mut consumers = match scrubbed {
            Ok(consumers) => consumers,
            Err(e) => {
                warn!("Could not scrub consumers: {}", e);
                notifications.push(Notification::error(e.to_string()));
                Vec::new()
            }
        };
        sort_newest_first(&mut consumers);

        let statistics = compute_statistics(&consumers);
        info!(
            "Listing {} consumers ({} filters active) in {:.2?}",
            consumers.len(),
            active_filters.iter().filter(|f| f.is_active()).count(),
            start_time.elapsed()
        );

        IndexPage {
            consumers,
            statistics,
            active_filters,
            notifications,
        }
    }

    /// A single consumer.
    pub async fn detail(&self, consumer_id: &str) -> DetailPage {
        let record = match self.repo.get_consumer(consumer_id).await {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to fetch consumer {}: {}", consumer_id, e);
                return DetailPage {
                    consumer: None,
                    notifications: vec![Notification::error(e.to_string())],
                };
            }
        };

        match record.scrub(&self.config.datetime_format) {
            Ok(consumer) => DetailPage {
                consumer: Some(consumer),
                notifications: Vec::new(),
            },
            Err(e) => {
                warn!("Could not scrub consumer {}: {}", consumer_id, e);
                DetailPage {
                    consumer: None,
                    notifications: vec![Notification::error(e.to_string())],
                }
            }
        }
    }

    pub async fn enable(
        &self,
        consumer_id: &str,
        next: Option<&str>,
        params: &QueryParams,
    ) -> ToggleOutcome {
        self.toggle(consumer_id, true, next, params).await
    }

    pub async fn disable(
        &self,
        consumer_id: &str,
        next: Option<&str>,
        params: &QueryParams,
    ) -> ToggleOutcome {
        self.toggle(consumer_id, false, next, params).await
    }

    /// Set the enabled state and work out where to send the user next.
    ///
    /// The redirect is computed whether or not the update succeeded.
    async fn toggle(
        &self,
        consumer_id: &str,
        enabled: bool,
        next: Option<&str>,
        params: &QueryParams,
    ) -> ToggleOutcome {
        let notification = match self.repo.set_consumer_enabled(consumer_id, enabled).await {
            Ok(()) => {
                info!("Consumer {} enabled={}", consumer_id, enabled);
                let state = if enabled { "enabled" } else { "disabled" };
                Notification::success(format!("Consumer has been {}.", state))
            }
            Err(e) => {
                error!(
                    "Failed to set consumer {} enabled={}: {}",
                    consumer_id, enabled, e
                );
                Notification::error(e.to_string())
            }
        };

        ToggleOutcome {
            notification,
            redirect_url: self.redirect_url(next, params),
        }
    }

    /// `next` (or the default listing location) followed by the original
    /// query parameters.
    pub fn redirect_url(&self, next: Option<&str>, params: &QueryParams) -> String {
        let next = next
            .filter(|n| !n.is_empty())
            .unwrap_or(self.config.default_next.as_str());
        format!("{}?{}", next, params.encode())
    }
}

fn sort_newest_first(consumers: &mut [Consumer]) {
    consumers.sort_by(|a, b| b.created.cmp(&a.created));
}
