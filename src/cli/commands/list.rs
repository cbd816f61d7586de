//! The `--list-templates` command.

use crate::error::Result;
use crate::registry::TemplateKey;
use crate::ui::{should_use_colors, Theme, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Prints every template with its source path.
#[derive(Debug, Default)]
pub struct ListTemplatesCommand;

impl ListTemplatesCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ListTemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        ui.message(&format!("  {}", theme.text.apply_to("Templates:")));
        for key in TemplateKey::all() {
            let descriptor = key.descriptor();
            ui.message(&format!(
                "    {} {} {}",
                theme.brand.apply_to(format!("{:<6}", key.name())),
                key.summary(),
                theme.dim.apply_to(format!("({})", descriptor.subdirectory))
            ));
            if let Some(warning) = descriptor.beta_warning {
                ui.message(&format!("           {}", theme.warning.apply_to(warning)));
            }
        }

        Ok(CommandResult::success())
    }
}
