//! Client configuration.

use serde::{Deserialize, Serialize};

/// Where the backend lives. The portal talks to a single fixed origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Create a config for the given origin. Trailing slashes are stripped so
    /// path concatenation stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        assert_eq!(ApiConfig::default().base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_new_strips_trailing_slashes() {
        assert_eq!(
            ApiConfig::new("http://portal.example/").base_url,
            "http://portal.example"
        );
        assert_eq!(
            ApiConfig::new("http://portal.example//").base_url,
            "http://portal.example"
        );
    }
}
