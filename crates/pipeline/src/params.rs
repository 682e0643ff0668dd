//! Request query parameters.
//!
//! Filters read their activation values from here, and the toggle views
//! re-serialize the same parameters onto their redirect target.

use std::fmt;
use url::form_urlencoded;

/// Ordered `key=value` pairs from a URL query string.
///
/// Repeated keys are kept. [`QueryParams::get`] returns the last value for a
/// key, matching how form frameworks resolve duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parse a query string, with or without its leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Add a pair (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(key, value);
        self
    }

    /// Append a pair, keeping any earlier value for the same key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Last value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back to `application/x-www-form-urlencoded`, in original order.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let params = QueryParams::parse("?enabled=true&app_type=Web");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("enabled"), Some("true"));
        assert_eq!(params.get("app_type"), Some("Web"));
        assert_eq!(params.get("time"), None);
    }

    #[test]
    fn test_last_value_wins() {
        let params = QueryParams::parse("app_type=Web&app_type=Mobile");
        assert_eq!(params.get("app_type"), Some("Mobile"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_encode_preserves_order() {
        let params = QueryParams::parse("time=day&enabled=false&app_type=Web");
        assert_eq!(params.encode(), "time=day&enabled=false&app_type=Web");
    }

    #[test]
    fn test_encode_escapes() {
        let params = QueryParams::new().with("app_type", "Web & Mobile");
        assert_eq!(params.encode(), "app_type=Web+%26+Mobile");
        assert_eq!(QueryParams::parse(&params.encode()), params);
    }

    #[test]
    fn test_empty() {
        let params = QueryParams::parse("");
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
    }
}
