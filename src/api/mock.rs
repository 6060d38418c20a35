//! Mock scene client for testing.
//!
//! `MockClient` implements the [`SceneClient`] trait, records every call it
//! receives, and answers with pre-configured responses. A configured failure
//! is returned from every operation instead.
//!
//! # Example
//!
//! ```
//! use planet::api::{ApiError, ClientCall, MockClient, SceneClient};
//!
//! let client = MockClient::new().with_failure(ApiError::unexpected("timeout"));
//! let err = client.list_all_scene_types().unwrap_err();
//!
//! assert_eq!(err.to_string(), "Unexpected response: timeout");
//! assert_eq!(client.calls(), vec![ClientCall::ListAllSceneTypes]);
//! ```

use std::cell::RefCell;
use std::path::PathBuf;

use super::{ApiError, ApiResult, SceneClient};

/// A call received by [`MockClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCall {
    ListAllSceneTypes,
    FetchSceneGeotiffs {
        ids: Vec<String>,
        scene_type: String,
        product: String,
    },
    FetchSceneThumbnails {
        ids: Vec<String>,
        scene_type: String,
        size: String,
        format: String,
    },
    FetchSceneInfo {
        id: String,
        scene_type: String,
    },
    GetScenesList {
        scene_type: String,
        intersects: Option<String>,
    },
}

/// Mock client implementation for testing.
#[derive(Debug, Default)]
pub struct MockClient {
    scene_types: String,
    scene_info: String,
    scenes_list: String,
    failure: Option<ApiError>,
    calls: RefCell<Vec<ClientCall>>,
}

impl MockClient {
    /// Create a mock that answers every text operation with an empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response for `list_all_scene_types`.
    pub fn with_scene_types(mut self, body: &str) -> Self {
        self.scene_types = body.to_string();
        self
    }

    /// Set the response for `fetch_scene_info`.
    pub fn with_scene_info(mut self, body: &str) -> Self {
        self.scene_info = body.to_string();
        self
    }

    /// Set the response for `get_scenes_list`.
    pub fn with_scenes_list(mut self, body: &str) -> Self {
        self.scenes_list = body.to_string();
        self
    }

    /// Make every operation fail with `error`.
    pub fn with_failure(mut self, error: ApiError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Get all calls received so far, in order.
    pub fn calls(&self) -> Vec<ClientCall> {
        self.calls.borrow().clone()
    }

    fn record<T>(&self, call: ClientCall, ok: impl FnOnce() -> T) -> ApiResult<T> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(ok()),
        }
    }
}

impl SceneClient for MockClient {
    fn list_all_scene_types(&self) -> ApiResult<String> {
        self.record(ClientCall::ListAllSceneTypes, || self.scene_types.clone())
    }

    fn fetch_scene_geotiffs(
        &self,
        ids: &[String],
        scene_type: &str,
        product: &str,
    ) -> ApiResult<Vec<PathBuf>> {
        let call = ClientCall::FetchSceneGeotiffs {
            ids: ids.to_vec(),
            scene_type: scene_type.to_string(),
            product: product.to_string(),
        };
        self.record(call, || {
            ids.iter()
                .map(|id| PathBuf::from(format!("{}_{}.tif", id, product)))
                .collect()
        })
    }

    fn fetch_scene_thumbnails(
        &self,
        ids: &[String],
        scene_type: &str,
        size: &str,
        format: &str,
    ) -> ApiResult<Vec<PathBuf>> {
        let call = ClientCall::FetchSceneThumbnails {
            ids: ids.to_vec(),
            scene_type: scene_type.to_string(),
            size: size.to_string(),
            format: format.to_string(),
        };
        self.record(call, || {
            ids.iter()
                .map(|id| PathBuf::from(format!("{}_{}.{}", id, size, format)))
                .collect()
        })
    }

    fn fetch_scene_info(&self, id: &str, scene_type: &str) -> ApiResult<String> {
        let call = ClientCall::FetchSceneInfo {
            id: id.to_string(),
            scene_type: scene_type.to_string(),
        };
        self.record(call, || self.scene_info.clone())
    }

    fn get_scenes_list(&self, scene_type: &str, intersects: Option<&str>) -> ApiResult<String> {
        let call = ClientCall::GetScenesList {
            scene_type: scene_type.to_string(),
            intersects: intersects.map(str::to_string),
        };
        self.record(call, || self.scenes_list.clone())
    }
}
