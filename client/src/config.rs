//! Client configuration.
//!
//! # Design
//! The base address is an injected value, not a process-wide constant, so
//! one program can talk to several endpoints (or environments) by building
//! several clients. `Deserialize` lets callers load the config from a file
//! or environment layer alongside their own settings.

use serde::Deserialize;

/// Connection settings for an [`ItemClient`](crate::ItemClient).
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Builds a config for `base_url`, normalizing away a trailing slash so
    /// path concatenation stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn bare_url_is_kept_as_is() {
        let config = ClientConfig::new("http://localhost:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn deserializes_from_json() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://items.example"}"#).unwrap();
        assert_eq!(config.base_url, "http://items.example");
    }
}
