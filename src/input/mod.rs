//! Resolving positional input from arguments or standard input.
//!
//! Commands that take scene ids or an area of interest accept them on the
//! command line. When they are left out and standard input is piped, the
//! values are read from it instead.
//!
//! # Example
//!
//! ```
//! use planet::input::{resolve_scene_ids, MockInput, SceneIds};
//!
//! let mut input = MockInput::piped(&["  id-1 ", "", "id-2"]);
//! let ids = resolve_scene_ids(&[], &mut input).unwrap();
//! assert_eq!(ids, SceneIds::Resolved(vec!["id-1".into(), "id-2".into()]));
//! ```

pub mod mock;

pub use mock::MockInput;

use std::io::{BufRead, IsTerminal};

use anyhow::anyhow;

use crate::error::Result;

/// Argument value that asks for the area of interest to be read from stdin.
pub const STDIN_MARKER: &str = "-";

/// A source of piped input lines.
pub trait InputSource {
    /// Whether the source is an interactive terminal rather than a pipe or file.
    fn is_interactive(&self) -> bool;

    /// Read every remaining line.
    fn read_lines(&mut self) -> Result<Vec<String>>;
}

/// The process's standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn read_lines(&mut self) -> Result<Vec<String>> {
        read_all_lines(std::io::stdin().lock())
    }
}

fn read_all_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| anyhow!("Failed to read standard input: {}", e))?;
    Ok(lines)
}

/// Outcome of resolving a list of scene ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneIds {
    /// Ids from the command line, or from piped input.
    Resolved(Vec<String>),
    /// No ids were given and standard input is a terminal.
    Missing,
}

impl SceneIds {
    /// The resolved ids, empty when missing.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Resolved(ids) => ids,
            Self::Missing => Vec::new(),
        }
    }
}

/// Decide which scene ids a command operates on.
///
/// Explicit ids are used verbatim and stdin is left untouched. Otherwise
/// piped lines are trimmed and blank ones dropped.
pub fn resolve_scene_ids(args: &[String], input: &mut dyn InputSource) -> Result<SceneIds> {
    if !args.is_empty() {
        return Ok(SceneIds::Resolved(args.to_vec()));
    }

    if input.is_interactive() {
        return Ok(SceneIds::Missing);
    }

    let ids: Vec<String> = input
        .read_lines()?
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    tracing::debug!("Read {} scene ids from stdin", ids.len());
    Ok(SceneIds::Resolved(ids))
}

/// Decide the area-of-interest filter for a scene listing.
///
/// An absent argument or [`STDIN_MARKER`] reads piped input, joining the
/// trimmed lines without a separator. `None` means no spatial filter.
pub fn resolve_aoi(arg: Option<&str>, input: &mut dyn InputSource) -> Result<Option<String>> {
    if let Some(aoi) = arg.filter(|a| *a != STDIN_MARKER) {
        return Ok(Some(aoi.to_string()));
    }

    if input.is_interactive() {
        return Ok(None);
    }

    let aoi: String = input.read_lines()?.iter().map(|line| line.trim()).collect();

    if aoi.is_empty() {
        Ok(None)
    } else {
        Ok(Some(aoi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn read_failure_keeps_its_cause() {
        let err = read_all_lines(&b"ok\n\xff\xfe\n"[..]).unwrap_err();
        let message = err.to_string();

        assert!(
            message.starts_with("Failed to read standard input: "),
            "{}",
            message
        );
        assert!(message.contains("UTF-8"), "{}", message);
    }

    #[test]
    fn reads_every_line() {
        let lines = read_all_lines(&b"a\nb\r\n"[..]).unwrap();
        assert_eq!(lines, strings(&["a", "b"]));
    }

    #[test]
    fn explicit_ids_skip_stdin() {
        let mut input = MockInput::piped(&["from-stdin"]);
        let ids = resolve_scene_ids(&strings(&[" a ", "b"]), &mut input).unwrap();

        assert_eq!(ids, SceneIds::Resolved(strings(&[" a ", "b"])));
        assert_eq!(input.reads(), 0);
    }

    #[test]
    fn piped_ids_are_trimmed_in_order() {
        let mut input = MockInput::piped(&["  c1\t", "", "   ", "a2", "b3  "]);
        let ids = resolve_scene_ids(&[], &mut input).unwrap();

        assert_eq!(ids, SceneIds::Resolved(strings(&["c1", "a2", "b3"])));
        assert_eq!(input.reads(), 1);
    }

    #[test]
    fn terminal_without_ids_is_missing() {
        let mut input = MockInput::terminal();
        let ids = resolve_scene_ids(&[], &mut input).unwrap();

        assert_eq!(ids, SceneIds::Missing);
        assert!(ids.into_vec().is_empty());
        assert_eq!(input.reads(), 0);
    }

    #[test]
    fn empty_pipe_resolves_to_no_ids() {
        let mut input = MockInput::piped(&[]);
        let ids = resolve_scene_ids(&[], &mut input).unwrap();
        assert_eq!(ids, SceneIds::Resolved(Vec::new()));
    }

    #[test]
    fn explicit_aoi_is_used_verbatim() {
        let mut input = MockInput::piped(&["ignored"]);
        let aoi = resolve_aoi(Some(" POINT(1 2) "), &mut input).unwrap();

        assert_eq!(aoi.as_deref(), Some(" POINT(1 2) "));
        assert_eq!(input.reads(), 0);
    }

    #[test]
    fn dash_reads_and_joins_piped_lines() {
        let mut input = MockInput::piped(&["{\"type\":", "  \"Point\",", " \"coordinates\":[1,2]}  "]);
        let aoi = resolve_aoi(Some(STDIN_MARKER), &mut input).unwrap();

        assert_eq!(
            aoi.as_deref(),
            Some("{\"type\":\"Point\",\"coordinates\":[1,2]}")
        );
    }

    #[test]
    fn absent_aoi_reads_piped_lines() {
        let mut input = MockInput::piped(&["POLYGON((0 0, 1 1, 1 0, 0 0))"]);
        let aoi = resolve_aoi(None, &mut input).unwrap();
        assert_eq!(aoi.as_deref(), Some("POLYGON((0 0, 1 1, 1 0, 0 0))"));
    }

    #[test]
    fn terminal_aoi_is_no_filter() {
        let mut input = MockInput::terminal();
        assert_eq!(resolve_aoi(None, &mut input).unwrap(), None);
        assert_eq!(resolve_aoi(Some(STDIN_MARKER), &mut input).unwrap(), None);
        assert_eq!(input.reads(), 0);
    }

    #[test]
    fn blank_piped_aoi_is_no_filter() {
        let mut input = MockInput::piped(&["   ", ""]);
        assert_eq!(resolve_aoi(None, &mut input).unwrap(), None);
    }
}
