//! Client configuration.
//!
//! Settings come from the global CLI flags, which clap falls back to
//! environment variables for, and then from the defaults defined here.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the API key.
pub const ENV_KEY: &str = "PL_API_KEY";

/// Environment variable overriding the API base URL.
pub const ENV_BASE_URL: &str = "PL_API_BASE_URL";

/// Base URL of the v0 scenes API.
pub const DEFAULT_BASE_URL: &str = "https://api.planet.com/v0/";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for constructing an [`HttpClient`](crate::api::HttpClient).
///
/// # Example
///
/// ```
/// use planet::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_api_key(Some("secret".to_string()))
///     .with_base_url(Some("http://localhost:8080/v0".to_string()));
///
/// assert_eq!(config.base_url, "http://localhost:8080/v0/");
/// assert_eq!(config.api_key.as_deref(), Some("secret"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API key sent with every request.
    pub api_key: Option<String>,
    /// Base URL, always ending in `/`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Where downloaded images are written.
    pub download_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            download_dir: PathBuf::from("."),
        }
    }
}

impl ClientConfig {
    /// Override the API key. `None` and empty strings keep the current value.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    /// Override the base URL. `None` and empty strings keep the current value.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.is_empty()) {
            self.base_url = normalize_base_url(&url);
        }
        self
    }

    /// Set the directory downloads are saved to.
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}
