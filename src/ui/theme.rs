//! Visual theme and styling.

use console::Style;

/// Terminal styling for scaffolder output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for plain emphasized text (white).
    pub text: Style,
    /// Style for brand-colored elements (orange).
    pub brand: Style,
    /// Style for commands the user should run (cyan).
    pub command: Style,
    /// Style for links (cyan dim).
    pub link: Style,
    /// Style for box-drawing borders (orange).
    pub border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            text: Style::new().white(),
            brand: Style::new().color256(202).bold(),
            command: Style::new().cyan(),
            link: Style::new().cyan().dim(),
            border: Style::new().color256(202),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            text: Style::new(),
            brand: Style::new(),
            command: Style::new(),
            link: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✔ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✖ {}", msg)))
    }

    /// Format an echoed command (`$ cmd`, dim).
    pub fn format_command(&self, cmd: &str) -> String {
        format!("{}", self.dim.apply_to(format!("  $ {}", cmd)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
