//! planet - command-line client for the Planet scenes API.
//!
//! The CLI lists scene types, downloads scene images and thumbnails, and
//! queries scene metadata and scene lists. Scene ids and areas of interest
//! can be passed as arguments or piped in on standard input.
//!
//! # Modules
//!
//! - [`api`] - Scenes API client trait, HTTP implementation and errors
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Client configuration and environment variables
//! - [`error`] - Error types and result aliases
//! - [`input`] - Resolving ids and areas of interest from args or stdin
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use planet::api::{ClientCall, MockClient};
//! use planet::cli::{Cli, CommandDispatcher};
//! use planet::input::MockInput;
//! use planet::ui::MockUI;
//! use clap::Parser;
//!
//! let cli = Cli::try_parse_from(["planet", "metadata", "--pretty", "abc"]).unwrap();
//! let client = MockClient::new().with_scene_info(r#"{"a":1}"#);
//! let mut input = MockInput::terminal();
//! let mut ui = MockUI::new();
//!
//! CommandDispatcher::new(&client, &mut input)
//!     .dispatch(&cli.command, &mut ui)
//!     .unwrap();
//!
//! assert_eq!(ui.messages(), ["{\n  \"a\": 1\n}"]);
//! assert!(matches!(client.calls()[0], ClientCall::FetchSceneInfo { .. }));
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod ui;

pub use error::{PlanetError, Result};
