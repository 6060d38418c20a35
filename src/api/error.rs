//! Errors reported by a [`SceneClient`](super::SceneClient).

use thiserror::Error;

/// Names of the specific failure kinds raised by [`HttpClient`](super::HttpClient).
pub mod kind {
    /// HTTP 400.
    pub const BAD_QUERY: &str = "BadQuery";
    /// HTTP 401, or no key configured.
    pub const INVALID_API_KEY: &str = "InvalidAPIKey";
    /// HTTP 403.
    pub const NO_PERMISSION: &str = "NoPermission";
    /// HTTP 404.
    pub const MISSING_RESOURCE: &str = "MissingResource";
    /// HTTP 429.
    pub const OVER_QUOTA: &str = "OverQuota";
    /// HTTP 5xx.
    pub const SERVER_ERROR: &str = "ServerError";
    /// A downloaded file could not be written.
    pub const WRITE_ERROR: &str = "WriteError";
}

/// A failure from the scenes API.
///
/// There are exactly two shapes: a generic failure that carries no category,
/// and a specific failure tagged with a kind name. The `Display` output is the
/// line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The API answered in a way the client has no category for.
    #[error("Unexpected response: {message}")]
    Unexpected { message: String },

    /// A categorized failure such as an auth error or a missing scene.
    #[error("{kind}: {message}")]
    Specific { kind: String, message: String },
}

impl ApiError {
    /// Create a specific error with the given kind name.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Specific {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a generic error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => kind::BAD_QUERY,
            401 => kind::INVALID_API_KEY,
            403 => kind::NO_PERMISSION,
            404 => kind::MISSING_RESOURCE,
            429 => kind::OVER_QUOTA,
            500..=599 => kind::SERVER_ERROR,
            _ => return Self::unexpected(message),
        };
        Self::new(kind, message)
    }

    /// The kind name, or `None` for a generic failure.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Unexpected { .. } => None,
            Self::Specific { kind, .. } => Some(kind.as_str()),
        }
    }

    /// The raw message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Unexpected { message } | Self::Specific { message, .. } => message.as_str(),
        }
    }
}
