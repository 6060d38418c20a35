//! In-memory input source for testing.

use crate::error::Result;

use super::InputSource;

/// Input source with fixed lines that counts how often it was read.
#[derive(Debug, Default)]
pub struct MockInput {
    interactive: bool,
    lines: Vec<String>,
    reads: usize,
}

impl MockInput {
    /// Behave like a pipe carrying `lines`.
    pub fn piped(lines: &[&str]) -> Self {
        Self {
            interactive: false,
            lines: lines.iter().map(|l| l.to_string()).collect(),
            reads: 0,
        }
    }

    /// Behave like an interactive terminal.
    pub fn terminal() -> Self {
        Self {
            interactive: true,
            ..Default::default()
        }
    }

    /// Number of times `read_lines` was called.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl InputSource for MockInput {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn read_lines(&mut self) -> Result<Vec<String>> {
        self.reads += 1;
        Ok(std::mem::take(&mut self.lines))
    }
}
