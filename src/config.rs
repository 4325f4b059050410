//! Report configuration for the console reporter.

use std::env;
use std::io::{self, IsTerminal};

use clap::ValueEnum;

/// When to emit ANSI color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset or empty.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether to color, given the terminal status and the value of `NO_COLOR`.
    pub fn resolve(self, is_terminal: bool, no_color: Option<&str>) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal && no_color.is_none_or(str::is_empty),
        }
    }

    /// [`resolve`](Self::resolve) against the real stdout and environment.
    pub fn enabled_for_stdout(self) -> bool {
        let no_color = env::var("NO_COLOR").ok();
        self.resolve(io::stdout().is_terminal(), no_color.as_deref())
    }
}

/// Console report configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// One line per case instead of a compact `.`/`F` progress line
    pub verbose: bool,
    /// Emit ANSI color escapes
    pub color: bool,
}

impl ReportConfig {
    /// Create a new config with default settings (compact, no color)
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with color decided by [`ColorChoice::Auto`]
    pub fn from_env() -> Self {
        Self::new().with_color(ColorChoice::Auto.enabled_for_stdout())
    }

    /// Set verbose progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Enable or disable color
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
