//! CLI module for the die test harness
//!
//! ## Commands
//!
//! - `run` - Run the built-in demonstration suite (default when no subcommand is given)
//! - `kinds` - List the builtin exception kinds
//!
//! ## Modules
//!
//! - `demo` - The demonstration suite
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<Status>`; `run()` turns that into the process exit code and renders errors
//! as miette diagnostics.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod demo;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use die_core::kinds;
use miette::Diagnostic;
use thiserror::Error;

use crate::config::{ColorChoice, ReportConfig};
use crate::harness::ReportError;

// ============================================================================
// CLI Error handling
// ============================================================================

/// How a command that ran to the end went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The suite ran and at least one case failed. The report already says which.
    TestsFailed,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::TestsFailed => ExitCode::FAILURE,
        }
    }
}

/// Errors that stop a command before it can finish.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// A minimal in-process test harness
#[derive(Parser, Debug)]
#[command(name = "die")]
#[command(version = VERSION)]
#[command(about = "A minimal in-process test harness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the built-in demonstration suite
    Run {
        /// One line per test case
        #[arg(short, long)]
        verbose: bool,
        /// When to color the report
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
        /// Skip the greeting banner
        #[arg(long)]
        no_greeting: bool,
    },

    /// List the builtin exception kinds
    Kinds,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// Errors are rendered here, through miette, and nowhere else.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{}", render_error(e));
            ExitCode::FAILURE
        }
    }
}

/// Render an error with its diagnostic code and help text.
fn render_error(e: CliError) -> String {
    format!("{:?}", miette::Report::new(e))
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<Status> {
    match cli.command {
        Some(Command::Run {
            verbose,
            color,
            no_greeting,
        }) => execute_run(verbose, color, !no_greeting),
        Some(Command::Kinds) => list_kinds(),
        None => execute_run(false, ColorChoice::Auto, true),
    }
}

/// Handle the `run` subcommand.
fn execute_run(verbose: bool, color: ColorChoice, greet: bool) -> CliResult<Status> {
    let config = ReportConfig::new()
        .with_verbose(verbose)
        .with_color(color.enabled_for_stdout());
    let mut tests = demo::hello_kitty(config);

    if greet {
        tests.display_greetings()?;
    }
    tests.exec();
    tests.display_summary()?;

    if tests.summary().is_success() {
        Ok(Status::Success)
    } else {
        Ok(Status::TestsFailed)
    }
}

/// Handle the `kinds` subcommand.
fn list_kinds() -> CliResult<Status> {
    let width = kinds::EXCEPTIONS
        .iter()
        .map(|info| info.canonical.len())
        .max()
        .unwrap_or(0);
    for kind in kinds::EXCEPTIONS.iter().map(|info| info.id) {
        println!("{:<width$}  {}", kind, kind.description(), width = width);
    }
    Ok(Status::Success)
}

// ============================================================================
// Tests
// ============================================================================
