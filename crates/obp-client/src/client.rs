//! HTTP client for the management API.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};
use url::Url;

use crate::error::ApiError;

/// Settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API version, e.g. `https://api.example.com/obp/v3.0.0`
    pub api_root: String,
    /// DirectLogin token sent with every request
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: "http://127.0.0.1:8080/obp/v3.0.0".to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

/// Client for the management API.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_root: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from its config.
    ///
    /// No request is made here; an unreachable API shows up on the first call.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let invalid_root = |reason: String| ApiError::InvalidApiRoot {
            api_root: config.api_root.clone(),
            reason,
        };

        let api_root = Url::parse(config.api_root.trim_end_matches('/'))
            .map_err(|e| invalid_root(e.to_string()))?;
        if api_root.cannot_be_a_base() {
            return Err(invalid_root("not a base URL".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!("Using management API at {}", api_root);

        Ok(ApiClient {
            http,
            api_root,
            token: config.token.filter(|t| !t.is_empty()),
        })
    }

    pub fn api_root(&self) -> &str {
        self.api_root.as_str()
    }

    /// GET the resource at `segments` below the API root and decode the JSON body.
    ///
    /// Each segment is percent-encoded on its own, so a segment can never
    /// add path levels of its own.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.url(segments);
        let path = url.path().to_string();
        self.send(&path, self.request(Method::GET, url)).await
    }

    /// PUT `payload` as JSON to `segments` and decode the JSON body.
    ///
    /// An empty response body decodes as JSON `null`.
    pub async fn put<B, T>(&self, segments: &[&str], payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments);
        let path = url.path().to_string();
        self.send(&path, self.request(Method::PUT, url).json(payload))
            .await
    }

    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_root.clone();
        // Checked in `new`: the root can always be a base
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("DirectLogin token=\"{}\"", token));
        }
        request
    }

    async fn send<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!("Calling management API: {}", path);

        let response = request.send().await.map_err(|e| {
            error!("Request to {} failed: {}", path, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = ApiError::from_response(status, &body);
            error!("Management API returned {} for {}: {}", status, path, err);
            return Err(err);
        }

        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|source| {
            error!("Could not decode response for {}: {}", path, source);
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_root: &str) -> ApiClient {
        ApiClient::new(ClientConfig {
            api_root: api_root.to_string(),
            token: None,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn test_url_joins_segments() {
        let client = client("http://localhost:8080/obp/v3.0.0/");

        assert_eq!(client.api_root(), "http://localhost:8080/obp/v3.0.0");
        assert_eq!(
            client.url(&["management", "consumers"]).as_str(),
            "http://localhost:8080/obp/v3.0.0/management/consumers"
        );
    }

    #[test]
    fn test_url_on_bare_host() {
        let client = client("http://localhost:8080");
        assert_eq!(
            client.url(&["management", "consumers"]).as_str(),
            "http://localhost:8080/management/consumers"
        );
    }

    #[test]
    fn test_segment_cannot_leave_its_level() {
        let client = client("http://localhost:8080/obp/v3.0.0");

        let url = client.url(&["management", "consumers", "../../users"]);
        assert_eq!(url.path(), "/obp/v3.0.0/management/consumers/..%2F..%2Fusers");

        let url = client.url(&["management", "consumers", "a/b?c#d"]);
        assert_eq!(url.path(), "/obp/v3.0.0/management/consumers/a%2Fb%3Fc%23d");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_invalid_api_root() {
        let err = ApiClient::new(ClientConfig {
            api_root: "not a url".to_string(),
            ..ClientConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidApiRoot { .. }));

        let err = ApiClient::new(ClientConfig {
            api_root: "mailto:ops@example.com".to_string(),
            ..ClientConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidApiRoot { .. }));
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let client = ApiClient::new(ClientConfig {
            token: Some(String::new()),
            ..ClientConfig::default()
        })
        .unwrap();
        assert!(client.token.is_none());
    }
}
