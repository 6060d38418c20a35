//! Access to the Planet scenes API.
//!
//! This module provides:
//! - [`SceneClient`] trait, the capabilities the CLI consumes
//! - [`HttpClient`] for talking to the real API over HTTP
//! - [`MockClient`] for recording calls in tests
//! - [`ApiError`] for failures reported by any client
//!
//! # Example
//!
//! ```
//! use planet::api::{MockClient, SceneClient};
//!
//! let client = MockClient::new().with_scene_info(r#"{"id":"abc"}"#);
//! let info = client.fetch_scene_info("abc", "ortho").unwrap();
//! assert_eq!(info, r#"{"id":"abc"}"#);
//! assert_eq!(client.calls().len(), 1);
//! ```

pub mod client;
pub mod error;
pub mod mock;

pub use client::HttpClient;
pub use error::{kind, ApiError};
pub use mock::{ClientCall, MockClient};

use std::path::PathBuf;

/// Result type for scene client operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Operations offered by the scenes API.
///
/// Text results are returned untouched, usually as JSON. Fetch operations
/// save files and return the paths they wrote.
pub trait SceneClient {
    /// List every scene type the API knows about.
    fn list_all_scene_types(&self) -> ApiResult<String>;

    /// Download full scene images for each id.
    fn fetch_scene_geotiffs(
        &self,
        ids: &[String],
        scene_type: &str,
        product: &str,
    ) -> ApiResult<Vec<PathBuf>>;

    /// Download scene thumbnails for each id.
    fn fetch_scene_thumbnails(
        &self,
        ids: &[String],
        scene_type: &str,
        size: &str,
        format: &str,
    ) -> ApiResult<Vec<PathBuf>>;

    /// Fetch the metadata of a single scene.
    fn fetch_scene_info(&self, id: &str, scene_type: &str) -> ApiResult<String>;

    /// List scenes of a type, optionally restricted to those intersecting `intersects`.
    fn get_scenes_list(&self, scene_type: &str, intersects: Option<&str>) -> ApiResult<String>;
}
