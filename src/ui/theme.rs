//! Visual theme and styling.

use console::Style;

use crate::flow::ButtonEmphasis;

/// Nocturne's visual theme.
#[derive(Debug, Clone)]
pub struct NocturneTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for flow and step headers (magenta bold).
    pub header: Style,
    /// Style for step counters (dim).
    pub step_number: Style,
    /// Style for the primary forward action (magenta).
    pub primary: Style,
    /// Style for de-emphasised forward actions (dim).
    pub secondary: Style,
    /// Style for contextual hints (magenta dim).
    pub hint: Style,
}

impl Default for NocturneTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NocturneTheme {
    /// Create the default nocturne theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            step_number: Style::new().dim(),
            primary: Style::new().magenta(),
            secondary: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            step_number: Style::new(),
            primary: Style::new(),
            secondary: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a step header with its counter.
    pub fn format_step(&self, title: &str, counter: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to(format!("◆ {}", title)),
            self.step_number.apply_to(counter)
        )
    }

    /// Style for a forward action with the given emphasis.
    pub fn button_style(&self, emphasis: ButtonEmphasis) -> &Style {
        match emphasis {
            ButtonEmphasis::Primary => &self.primary,
            ButtonEmphasis::Secondary => &self.secondary,
        }
    }

    /// Format a flow header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("☾"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
