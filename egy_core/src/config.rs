//! Client configuration loaded from environment variables.
//!
//! | Env Var            | Default                 |
//! |--------------------|-------------------------|
//! | `EGY_API_BASE_URL` | `http://localhost:8000` |
//!
//! The binaries load a `.env` file with `dotenvy` before calling
//! [`ClientConfig::from_env`].

use url::Url;

use crate::errors::ConfigError;

/// Environment variable holding the API base URL
pub const BASE_URL_ENV: &str = "EGY_API_BASE_URL";

/// Base URL used when nothing is configured (the backend's default port)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Settings for [`crate::api::ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL the endpoint paths are joined to. Always ends with `/`.
    pub base_url: Url,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl ClientConfig {
    /// Build a config for an explicit base URL.
    ///
    /// Only `http` and `https` URLs are accepted. A path prefix is kept, so
    /// `http://host/backend` resolves insights to
    /// `http://host/backend/api/analysis/insights`.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url.trim())
            .map_err(|e| ConfigError::invalid_base_url(base_url, e.to_string()))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::invalid_base_url(
                    base_url,
                    format!("unsupported scheme '{}'", other),
                ))
            }
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            user_agent: format!("EgyDesk/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
        assert!(config.user_agent.starts_with("EgyDesk/"));
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        let config = ClientConfig::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_path_prefix_gets_trailing_slash() {
        let config = ClientConfig::from_lookup(|key| {
            (key == BASE_URL_ENV).then(|| "https://api.example.com/backend".to_string())
        })
        .unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.example.com/backend/");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            ClientConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://files.example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }
}
