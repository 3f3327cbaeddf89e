//! API endpoint configuration
//!
//! Injected into the client at construction. Browser builds have no runtime
//! environment, so overrides are read at compile time.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CATEGORIES_PATH: &str = "/haskell/api/all-categories";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_categories_path")]
    pub categories_path: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_categories_path() -> String {
    DEFAULT_CATEGORIES_PATH.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            categories_path: default_categories_path(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Defaults overridden by `GUIDE_API_BASE_URL` / `GUIDE_API_CATEGORIES_PATH`
    /// as set when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("GUIDE_API_BASE_URL"),
            option_env!("GUIDE_API_CATEGORIES_PATH"),
        )
    }

    fn from_overrides(base_url: Option<&str>, categories_path: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = base_url.filter(|s| !s.is_empty()) {
            config.base_url = base.to_string();
        }
        if let Some(path) = categories_path.filter(|s| !s.is_empty()) {
            config.categories_path = path.to_string();
        }
        config
    }

    /// Absolute URL of the all-categories resource
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.categories_path.starts_with('/') {
            format!("{}{}", base, self.categories_path)
        } else {
            format!("{}/{}", base, self.categories_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            ApiConfig::default().endpoint(),
            "http://localhost:8080/haskell/api/all-categories"
        );
    }

    #[test]
    fn test_endpoint_joins_slashes() {
        let config = ApiConfig {
            base_url: "https://guide.example.org/".into(),
            categories_path: "api/all-categories".into(),
        };
        assert_eq!(config.endpoint(), "https://guide.example.org/api/all-categories");
    }

    #[test]
    fn test_overrides_skip_empty() {
        let config = ApiConfig::from_overrides(Some("http://10.0.0.2:9000"), Some(""));
        assert_eq!(config.base_url, "http://10.0.0.2:9000");
        assert_eq!(config.categories_path, DEFAULT_CATEGORIES_PATH);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{"base_url":"http://api:8080"}"#).unwrap();
        assert_eq!(config.endpoint(), "http://api:8080/haskell/api/all-categories");
    }
}
