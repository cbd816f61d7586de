//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including per-phase detail messages.
    Verbose,
    /// Show commands, progress and status.
    #[default]
    Normal,
    /// Show spinners and final status only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows detail messages from each phase.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode echoes the commands being run.
    pub fn shows_commands(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
