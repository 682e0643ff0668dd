//! Client for the consumer management API.
//!
//! This crate handles:
//! - Building authenticated JSON requests against a configured API root
//! - Turning failed responses into an [`ApiError`] with the API's own message
//! - The [`ConsumerRepository`] seam used by the views
//!
//! Requests are not retried.

pub mod client;
pub mod error;
pub mod repository;

pub use client::{ApiClient, ClientConfig};
pub use error::ApiError;
pub use repository::ConsumerRepository;
