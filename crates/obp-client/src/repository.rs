//! Consumer operations on top of [`ApiClient`].

use async_trait::async_trait;
use consumer_model::{ConsumerList, ConsumerRecord};
use serde::Serialize;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ApiError;

const CONSUMERS_PATH: [&str; 2] = ["management", "consumers"];

/// Source of consumer records.
///
/// The views only talk to this trait, so tests can swap the HTTP client for
/// an in-memory store.
#[async_trait]
pub trait ConsumerRepository: Send + Sync {
    /// All consumers, in the order the API returns them.
    async fn list_consumers(&self) -> Result<Vec<ConsumerRecord>, ApiError>;

    async fn get_consumer(&self, consumer_id: &str) -> Result<ConsumerRecord, ApiError>;

    /// Set the enabled state of a consumer.
    async fn set_consumer_enabled(&self, consumer_id: &str, enabled: bool)
    -> Result<(), ApiError>;
}

#[derive(Serialize)]
struct EnabledPayload {
    enabled: bool,
}

/// Path segments of a single consumer.
///
/// The id always lands in one segment below the collection. Ids that would
/// name the collection itself or its parent are rejected.
fn consumer_segments(consumer_id: &str) -> Result<[&str; 3], ApiError> {
    if matches!(consumer_id, "" | "." | "..") {
        return Err(ApiError::InvalidConsumerId(consumer_id.to_string()));
    }
    let [management, consumers] = CONSUMERS_PATH;
    Ok([management, consumers, consumer_id])
}

#[async_trait]
impl ConsumerRepository for ApiClient {
    async fn list_consumers(&self) -> Result<Vec<ConsumerRecord>, ApiError> {
        let response: ConsumerList = self.get(&CONSUMERS_PATH).await?;
        debug!("Fetched {} consumers", response.list.len());
        Ok(response.list)
    }

    async fn get_consumer(&self, consumer_id: &str) -> Result<ConsumerRecord, ApiError> {
        self.get(&consumer_segments(consumer_id)?).await
    }

    async fn set_consumer_enabled(
        &self,
        consumer_id: &str,
        enabled: bool,
    ) -> Result<(), ApiError> {
        let segments = consumer_segments(consumer_id)?;
        let _: serde_json::Value = self.put(&segments, &EnabledPayload { enabled }).await?;
        debug!("Consumer {} enabled={}", consumer_id, enabled);
        Ok(())
    }
}
