//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every command receives the scenes
//! client and the input source from the dispatcher, so tests can swap in
//! [`MockClient`](crate::api::MockClient) and
//! [`MockInput`](crate::input::MockInput).

pub mod completions;
pub mod dispatcher;
pub mod download;
pub mod metadata;
pub mod scene_types;
pub mod scenes_list;
pub mod thumbnails;

pub use dispatcher::{Command, CommandDispatcher};
