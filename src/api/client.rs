//! Blocking HTTP client for the v0 scenes API.

use std::path::PathBuf;

use reqwest::blocking::Response;
use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::config::ClientConfig;

use super::error::kind;
use super::{ApiError, ApiResult, SceneClient};

/// Talks to the scenes API over HTTP.
///
/// Every request carries an `Authorization: api-key <key>` header. Downloads
/// are read fully into memory and written to the configured download
/// directory.
///
/// # Example
///
/// ```no_run
/// use planet::api::{HttpClient, SceneClient};
/// use planet::config::ClientConfig;
///
/// let config = ClientConfig::default().with_api_key(Some("my-key".to_string()));
/// let client = HttpClient::new(config).unwrap();
/// println!("{}", client.list_all_scene_types().unwrap());
/// ```
pub struct HttpClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
}

/// Error payload returned by the API on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpClient {
    /// Create a client from its configuration.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("planet/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Build a request URL from unescaped path segments.
    ///
    /// Each segment is percent-encoded on its own, so a `#` or `?` inside an
    /// id stays part of that id. An empty last segment gives a trailing `/`.
    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> ApiResult<Url> {
        let invalid = |e: &dyn std::fmt::Display| {
            ApiError::unexpected(format!("Invalid URL {}: {}", self.config.base_url, e))
        };

        let mut url = Url::parse(&self.config.base_url).map_err(|e| invalid(&e))?;
        url.path_segments_mut()
            .map_err(|_| invalid(&"cannot be a base"))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }

    fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> ApiResult<Response> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| ApiError::new(kind::INVALID_API_KEY, "No API key provided"))?;

        let url = self.url(segments, query)?;
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("api-key {}", api_key))
            .send()
            .map_err(|e| ApiError::unexpected(e.to_string()))?;

        check_status(response)
    }

    fn get_text(&self, segments: &[&str], query: &[(&str, &str)]) -> ApiResult<String> {
        self.get(segments, query)?
            .text()
            .map_err(|e| ApiError::unexpected(format!("Failed to read response: {}", e)))
    }

    fn download(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        file_name: &str,
    ) -> ApiResult<PathBuf> {
        let bytes = self
            .get(segments, query)?
            .bytes()
            .map_err(|e| ApiError::unexpected(format!("Failed to read response: {}", e)))?;

        let dest = self.config.download_dir.join(file_name);
        std::fs::write(&dest, &bytes).map_err(|e| {
            ApiError::new(
                kind::WRITE_ERROR,
                format!("Failed to write {}: {}", dest.display(), e),
            )
        })?;

        tracing::info!("Saved {} ({} bytes)", dest.display(), bytes.len());
        Ok(dest)
    }
}

impl SceneClient for HttpClient {
    fn list_all_scene_types(&self) -> ApiResult<String> {
        self.get_text(&["scenes", ""], &[])
    }

    fn fetch_scene_geotiffs(
        &self,
        ids: &[String],
        scene_type: &str,
        product: &str,
    ) -> ApiResult<Vec<PathBuf>> {
        check_name("scene type", scene_type)?;
        ids.iter().try_for_each(|id| check_name("scene id", id))?;

        ids.iter()
            .map(|id| {
                self.download(
                    &["scenes", scene_type, id, "full"],
                    &[("product", product)],
                    &format!("{}_{}.tif", id, product),
                )
            })
            .collect()
    }

    fn fetch_scene_thumbnails(
        &self,
        ids: &[String],
        scene_type: &str,
        size: &str,
        format: &str,
    ) -> ApiResult<Vec<PathBuf>> {
        check_name("scene type", scene_type)?;
        ids.iter().try_for_each(|id| check_name("scene id", id))?;

        ids.iter()
            .map(|id| {
                self.download(
                    &["scenes", scene_type, id, "thumb"],
                    &[("size", size), ("format", format)],
                    &format!("{}_{}.{}", id, size, format),
                )
            })
            .collect()
    }

    fn fetch_scene_info(&self, id: &str, scene_type: &str) -> ApiResult<String> {
        check_name("scene type", scene_type)?;
        check_name("scene id", id)?;
        self.get_text(&["scenes", scene_type, id], &[])
    }

    fn get_scenes_list(&self, scene_type: &str, intersects: Option<&str>) -> ApiResult<String> {
        check_name("scene type", scene_type)?;
        let segments = ["scenes", scene_type, ""];
        match intersects {
            Some(aoi) => self.get_text(&segments, &[("intersects", aoi)]),
            None => self.get_text(&segments, &[]),
        }
    }
}

/// Reject names that cannot stand alone as one URL segment and one file name.
///
/// Ids also name downloaded files, so path separators and the `.`/`..`
/// components would escape the download directory.
fn check_name(what: &str, name: &str) -> ApiResult<()> {
    let valid = !matches!(name, "" | "." | "..") && !name.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(ApiError::new(kind::BAD_QUERY, format!("Invalid {} '{}'", what, name)))
    }
}

fn check_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text() {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::debug!("Failed to read error body: {}", e);
            None
        }
    };
    let message = error_message(status, body.as_deref());
    tracing::debug!("Request failed with {}: {}", status, message);

    Err(ApiError::from_status(status.as_u16(), message))
}

fn error_message(status: StatusCode, body: Option<&str>) -> String {
    let Some(body) = body else {
        return format!("{} (response body unreadable)", status);
    };

    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.message;
    }

    let body = body.trim();
    if body.is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}
