//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including the external command lines being run.
    Verbose,
    /// Show menus and status.
    #[default]
    Normal,
    /// Show menus, prompts and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode echoes external command lines.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
