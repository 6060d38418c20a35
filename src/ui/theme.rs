//! Visual theme and styling.

use console::Style;

/// Styles used for terminal output.
#[derive(Debug, Clone)]
pub struct PlanetTheme {
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for PlanetTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanetTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without any styling.
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
        }
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("Error: {}", msg)))
    }
}

/// Check if colors should be used on standard error.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_prefixes_errors() {
        let theme = PlanetTheme::plain();
        assert_eq!(
            theme.format_error("Unexpected response: timeout"),
            "Error: Unexpected response: timeout"
        );
    }

    #[test]
    fn colored_theme_keeps_message() {
        let theme = PlanetTheme::new();
        assert!(theme.format_error("boom").contains("boom"));
    }
}
