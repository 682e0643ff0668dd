use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the management API.
///
/// `Display` is meant to be shown to an operator as-is.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to reach management API: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Invalid management API root {api_root:?}: {reason}")]
    InvalidApiRoot { api_root: String, reason: String },

    /// Rejected before any request is made
    #[error("Invalid consumer id {0:?}")]
    InvalidConsumerId(String),

    #[error("Invalid response from management API for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Build a `Remote` error from a failed response.
    ///
    /// The API reports failures as `{"code": 403, "message": "OBP-..."}`;
    /// `message` (or `error`) is used when present, otherwise the raw body,
    /// otherwise the status reason.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let from_json = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_string))
            });

        let message = match from_json {
            Some(message) => message,
            None if !body.trim().is_empty() => body.trim().to_string(),
            None => status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string()),
        };

        ApiError::Remote {
            status: status.as_u16(),
            message,
        }
    }
}
