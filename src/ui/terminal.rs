//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, PlanetTheme, UserInterface};

/// Writes results to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PlanetTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            PlanetTheme::new()
        } else {
            PlanetTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
