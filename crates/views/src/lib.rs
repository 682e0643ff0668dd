//! # Views Crate
//!
//! Request handling for consumer administration, independent of any web
//! framework. Each view takes the request's inputs and returns a page model
//! that serializes to JSON.
//!
//! ## Main Components
//!
//! - **consumers**: `ConsumerViews` with the index, detail and enable/disable actions
//! - **pages**: `IndexPage`, `DetailPage`, `ToggleOutcome`
//! - **notifications**: success and error messages shown to the user
//! - **config**: `ViewsConfig`

pub mod config;
pub mod consumers;
pub mod notifications;
pub mod pages;

pub use config::{DEFAULT_NEXT, ViewsConfig};
pub use consumers::{ConsumerViews, consumer_pipeline};
pub use notifications::{Level, Notification};
pub use pages::{DetailPage, IndexPage, ToggleOutcome};
