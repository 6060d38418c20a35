//! Command-line interface for planet.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`output`] - Response formatting

pub mod args;
pub mod commands;
pub mod output;

pub use args::{
    Cli, Commands, CompletionsArgs, DownloadArgs, ImageFormat, MetadataArgs, PrettyArgs, Product,
    SceneTypeArgs, ScenesListArgs, ThumbnailSize, ThumbnailsArgs,
};
pub use commands::{Command, CommandDispatcher};
