//! Error types for planet operations.
//!
//! This module defines [`PlanetError`], the top-level error type returned by
//! commands, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Failures reported by the scenes API arrive as [`ApiError`] and are shown
//!   to the user as a single translated line, never as a raw internal error
//! - Use `anyhow::Error` (via `PlanetError::Other`) for unexpected local errors
//! - Usage errors are handled by clap before a command ever runs

use thiserror::Error;

pub use crate::api::ApiError;

/// Core error type for planet operations.
#[derive(Debug, Error)]
pub enum PlanetError {
    /// The scenes API (or the client talking to it) reported a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// `--pretty` was requested but the response body is not JSON.
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for planet operations.
pub type Result<T> = std::result::Result<T, PlanetError>;
