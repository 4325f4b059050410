//! Rendering of the greeting banner and the run summary.
//!
//! The harness hands its cases and a computed [`Summary`] to a [`Reporter`]; the reporter only formats. The default
//! [`ConsoleReporter`] prints pytest-style text:
//!
//! ```text
//! =================== hello kitty ===================
//! Testing the powers of Hello Kitty!
//!
//! ..F
//!
//! =================== FAILURES ===================
//!
//! ___________ kitty throws up ___________
//!
//!     expected exception of kind `std::runtime_error`, but `std::logic_error` was thrown: oops
//!
//! =================== 3 total, 2 passed, 1 failed ===================
//! ```

use std::io::{self, Write};

use die_core::{Summary, Verdict};
use miette::Diagnostic;
use thiserror::Error;

use super::TestCase;
use crate::config::ReportConfig;

const RULE: &str = "===================";
const NAME_RULE: &str = "___________";

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Errors raised while writing a report.
#[derive(Debug, Error, Diagnostic)]
pub enum ReportError {
    #[error("failed to write the test report")]
    #[diagnostic(code(die::report::io), help("check that the output stream is still open"))]
    Io(#[from] io::Error),
}

/// Trait for rendering harness output.
///
/// Implement this trait to send the banner and summary somewhere other than the console.
pub trait Reporter {
    /// Called by `display_greetings`
    fn on_greetings(&mut self, _title: &str, _description: &str) -> io::Result<()> {
        Ok(())
    }

    /// Called by `display_summary` with every registered case, in registration order
    fn on_summary(&mut self, cases: &[TestCase], summary: &Summary) -> io::Result<()>;
}

/// Default console reporter (pytest-style)
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
    config: ReportConfig,
}

impl ConsoleReporter {
    /// Report to standard output.
    pub fn stdout(config: ReportConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, config: ReportConfig) -> Self {
        Self { out, config }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.config.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn write_progress(&mut self, cases: &[TestCase]) -> io::Result<()> {
        if self.config.verbose {
            for case in cases {
                let status = match case.verdict() {
                    None => continue,
                    Some(Verdict::Pass) => self.paint(GREEN, "PASSED"),
                    Some(Verdict::Fail(_)) => self.paint(RED, "FAILED"),
                };
                writeln!(self.out, "{} {}", case.name(), status)?;
            }
        } else {
            let mut line = String::new();
            for verdict in cases.iter().filter_map(TestCase::verdict) {
                line.push_str(&match verdict {
                    Verdict::Pass => self.paint(GREEN, "."),
                    Verdict::Fail(_) => self.paint(RED, "F"),
                });
            }
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn write_failures(&mut self, summary: &Summary) -> io::Result<()> {
        if summary.failures.is_empty() {
            return Ok(());
        }

        writeln!(self.out)?;
        let header = self.paint(BOLD_RED, &format!("{RULE} FAILURES {RULE}"));
        writeln!(self.out, "{header}")?;

        for failure in &summary.failures {
            writeln!(self.out)?;
            let title = self.paint(BOLD, &format!("{NAME_RULE} {} {NAME_RULE}", failure.name));
            writeln!(self.out, "{title}")?;
            writeln!(self.out)?;
            for line in failure.reason.to_string().lines() {
                writeln!(self.out, "    {line}")?;
            }
        }
        Ok(())
    }

    fn write_totals(&mut self, summary: &Summary) -> io::Result<()> {
        let mut totals = format!(
            "{} total, {} passed, {} failed",
            summary.registered, summary.passed, summary.failed
        );
        if summary.not_run() > 0 {
            totals.push_str(&format!(", {} not run", summary.not_run()));
        }

        let color = if summary.failed > 0 { BOLD_RED } else { BOLD_GREEN };
        let line = self.paint(color, &format!("{RULE} {totals} {RULE}"));
        writeln!(self.out, "{line}")
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_greetings(&mut self, title: &str, description: &str) -> io::Result<()> {
        let banner = self.paint(BOLD, &format!("{RULE} {title} {RULE}"));
        writeln!(self.out, "{banner}")?;
        if !description.is_empty() {
            writeln!(self.out, "{description}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn on_summary(&mut self, cases: &[TestCase], summary: &Summary) -> io::Result<()> {
        if summary.executed == 0 {
            let text = if summary.registered == 0 {
                format!("{RULE} no test cases executed {RULE}")
            } else {
                format!("{RULE} no test cases executed ({} registered) {RULE}", summary.registered)
            };
            let line = self.paint(BOLD, &text);
            writeln!(self.out, "{line}")?;
            return self.out.flush();
        }

        self.write_progress(cases)?;
        self.write_failures(summary)?;
        writeln!(self.out)?;
        self.write_totals(summary)?;
        self.out.flush()
    }
}
