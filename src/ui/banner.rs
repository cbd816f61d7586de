//! Closing banner shown after a successful scaffold.

use console::measure_text_width;

use super::theme::Theme;

/// Content of the success banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Title on the top border (e.g. `create-smithery v0.4.0`).
    pub title: String,
    /// Command the user should run next.
    pub next_step: String,
    /// Something to try once the server is running.
    pub suggestion: String,
    /// Labelled links shown at the bottom.
    pub links: Vec<(String, String)>,
    /// Beta notice printed below the box.
    pub beta_warning: Option<String>,
}

impl Banner {
    /// Body lines, styled with `theme`.
    pub fn lines(&self, theme: &Theme) -> Vec<String> {
        let mut lines = vec![
            theme.text.apply_to("To get started, run:").to_string(),
            format!("  {}", theme.command.apply_to(&self.next_step)),
            String::new(),
            format!(
                "{} {}",
                theme.text.apply_to("Try saying something like"),
                theme.command.apply_to(format!("'{}'", self.suggestion))
            ),
        ];

        if !self.links.is_empty() {
            lines.push(String::new());
        }
        for (label, url) in &self.links {
            lines.push(format!(
                "{} {}",
                theme.text.apply_to(format!("{}:", label)),
                theme.link.apply_to(url)
            ));
        }

        lines
    }

    /// Render the banner inside a rounded box.
    ///
    /// `max_width` is the terminal width; the box is clamped to 60..=120
    /// columns and never narrower than its widest line.
    pub fn render_boxed(&self, theme: &Theme, max_width: usize) -> String {
        let lines = self.lines(theme);
        let content_width = lines
            .iter()
            .map(|l| measure_text_width(l))
            .chain(std::iter::once(measure_text_width(&self.title) + 2))
            .max()
            .unwrap_or(0);

        let target = max_width.saturating_sub(4).clamp(60, 120);
        // One column of padding on each side.
        let inner = content_width.max(target.saturating_sub(4)) + 2;

        let mut out = String::new();

        let title = format!(" {} ", theme.brand.apply_to(&self.title));
        let title_width = measure_text_width(&title);
        out.push_str(&format!(
            "{}{}{}\n",
            theme.border.apply_to("╭─"),
            title,
            theme
                .border
                .apply_to(format!("{}╮", "─".repeat(inner.saturating_sub(title_width + 1))))
        ));

        let blank = format!(
            "{}{}{}\n",
            theme.border.apply_to("│"),
            " ".repeat(inner),
            theme.border.apply_to("│")
        );
        out.push_str(&blank);
        for line in &lines {
            let pad = inner - 1 - measure_text_width(line);
            out.push_str(&format!(
                "{} {}{}{}\n",
                theme.border.apply_to("│"),
                line,
                " ".repeat(pad),
                theme.border.apply_to("│")
            ));
        }
        out.push_str(&blank);

        out.push_str(&format!(
            "{}",
            theme
                .border
                .apply_to(format!("╰{}╯", "─".repeat(inner)))
        ));

        out
    }
}
