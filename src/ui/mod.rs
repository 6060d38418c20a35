//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing results to stdout and errors to stderr
//! - [`MockUI`] capturing output in tests
//!
//! # Example
//!
//! ```
//! use planet::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message(r#"{"a": 1}"#);
//! ui.error("Unexpected response: timeout");
//!
//! assert_eq!(ui.messages(), [r#"{"a": 1}"#]);
//! assert_eq!(ui.errors(), ["Unexpected response: timeout"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, PlanetTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a result or informational text on standard output.
    fn message(&mut self, msg: &str);

    /// Display an error on standard error.
    fn error(&mut self, msg: &str);
}
